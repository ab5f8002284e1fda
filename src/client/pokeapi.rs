//! PokeAPI HTTP client
//!
//! Every GET goes through [`PokeClient::fetch`], which consults the optional
//! response cache keyed by the full request URL.

use std::sync::Arc;

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::{self, ExpiringCache};
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaDetail, LocationAreaPage, Pokemon};

/// Client for the PokeAPI with optional response caching.
#[derive(Debug, Clone)]
pub struct PokeClient {
    http: reqwest::Client,
    base_url: String,
    cache: Option<Arc<ExpiringCache>>,
}

impl PokeClient {
    /// Creates a client from configuration.
    ///
    /// Pass `None` as `cache` to send every request to the network.
    pub fn new(config: &Config, cache: Option<Arc<ExpiringCache>>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_http_client(http, &config.base_url, cache))
    }

    /// Creates a client around an existing `reqwest::Client`.
    pub fn with_http_client(
        http: reqwest::Client,
        base_url: &str,
        cache: Option<Arc<ExpiringCache>>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            cache,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> Option<&ExpiringCache> {
        self.cache.as_deref()
    }

    /// URL of the first page of the location area listing.
    pub fn location_area_url(&self) -> String {
        format!("{}/location-area", self.base_url)
    }

    /// `{base}/{resource}/{name}`, with `name` percent-encoded as a single
    /// path segment.
    fn resource_url(&self, resource: &str, name: &str) -> Result<String> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|err| PokedexError::InvalidBaseUrl(format!("{}: {}", self.base_url, err)))?;
        url.path_segments_mut()
            .map_err(|()| PokedexError::InvalidBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend([resource, name]);

        Ok(url.to_string())
    }

    // == Fetch ==
    /// GETs `url`, serving the body from the cache when present.
    ///
    /// Only successful responses are cached. Any other status is returned as
    /// [`PokedexError::UnexpectedStatus`].
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = cache::lookup(self.cache(), url).await {
            debug!(url, "Cache hit");
            return Ok(body);
        }
        debug!(url, "Cache miss, fetching");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?.to_vec();
        cache::remember(self.cache(), url, body.clone()).await;

        Ok(body)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Location Areas ==
    /// Fetches one page of location areas; `None` fetches the first page.
    pub async fn location_areas(&self, page_url: Option<&str>) -> Result<LocationAreaPage> {
        match page_url {
            Some(url) => self.fetch_json(url).await,
            None => self.fetch_json(&self.location_area_url()).await,
        }
    }

    /// Names of the pokemon that can be encountered in `area`.
    pub async fn pokemon_in_area(&self, area: &str) -> Result<Vec<String>> {
        let url = self.resource_url("location-area", area)?;

        match self.fetch_json::<LocationAreaDetail>(&url).await {
            Ok(detail) => Ok(detail.pokemon_names()),
            Err(err) if is_status(&err, StatusCode::NOT_FOUND) => {
                Err(PokedexError::LocationAreaNotFound(area.to_string()))
            }
            Err(err) => Err(err),
        }
    }

    // == Pokemon ==
    /// Fetches a single pokemon by name.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = self.resource_url("pokemon", name)?;

        match self.fetch_json::<Pokemon>(&url).await {
            Err(err) if is_status(&err, StatusCode::NOT_FOUND) => {
                Err(PokedexError::PokemonNotFound(name.to_string()))
            }
            result => result,
        }
    }
}

fn is_status(err: &PokedexError, expected: StatusCode) -> bool {
    matches!(err, PokedexError::UnexpectedStatus { status, .. } if *status == expected.as_u16())
}
