//! Pokedex - an interactive PokeAPI explorer

use std::sync::Arc;

use anyhow::Context;
use tokio::io::BufReader;
use tokio::signal;
use tokio::sync::watch;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{repl, Config, ExpiringCache, PokeClient, Session};

/// Entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing (to stderr, so it never mixes with REPL output)
/// 2. Load configuration from environment variables
/// 3. Create the response cache, tied to a shutdown signal
/// 4. Run the REPL until `exit`, end of input, or Ctrl+C
/// 5. Signal shutdown so the cache sweep exits
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn", can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_enabled={}, cache_interval={}s, base_url={}",
        config.cache_enabled, config.cache_interval, config.base_url
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let cache = config.cache_enabled.then(|| {
        Arc::new(ExpiringCache::with_shutdown(
            config.cache_interval(),
            shutdown_rx,
        ))
    });

    let client =
        PokeClient::new(&config, cache.clone()).context("failed to build the HTTP client")?;
    let mut session = Session::new(client);

    let input = BufReader::new(tokio::io::stdin());
    let mut out = std::io::stdout();

    tokio::select! {
        result = repl::run(&mut session, input, &mut out) => {
            result.context("REPL terminated with an I/O error")?;
        }
        _ = signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down");
        }
    }

    shutdown_tx.send_replace(true);
    if let Some(cache) = &cache {
        cache.stop();
        debug!(entries = cache.len().await, "Cache sweep stopped");
    }

    Ok(())
}
