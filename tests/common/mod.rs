//! Shared helpers for integration tests
//!
//! A local stand-in for the PokeAPI: canned bodies keyed by request path and
//! query, plus per-path hit counters so tests can tell cache hits from
//! network calls.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{extract::State, http::StatusCode, http::Uri, Router};
use pokedex::PokeClient;
use serde_json::json;

#[derive(Clone, Default)]
struct MockState {
    routes: Arc<HashMap<String, (StatusCode, String)>>,
    hits: Arc<Mutex<HashMap<String, usize>>>,
}

/// A running mock PokeAPI.
pub struct MockPokeApi {
    /// API root, e.g. `http://127.0.0.1:4321/api/v2`
    pub base_url: String,
    state: MockState,
}

impl MockPokeApi {
    /// Starts the server. `routes` receives the base URL, so bodies can link
    /// to other pages, and returns `(path, status, body)` triples. Paths are
    /// relative to the base URL and may include a query string.
    pub async fn start<F>(routes: F) -> Self
    where
        F: FnOnce(&str) -> Vec<(String, StatusCode, String)>,
    {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}/api/v2", addr);

        let routes = routes(&base_url)
            .into_iter()
            .map(|(path, status, body)| (format!("/api/v2{}", path), (status, body)))
            .collect();
        let state = MockState {
            routes: Arc::new(routes),
            hits: Arc::default(),
        };

        let app = Router::new()
            .fallback(respond)
            .with_state(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, state }
    }

    /// Starts a server with the standard fixtures.
    pub async fn with_fixtures() -> Self {
        Self::start(fixtures).await
    }

    /// Number of requests received for `path` (relative to the base URL).
    pub fn hits(&self, path: &str) -> usize {
        let key = format!("/api/v2{}", path);
        self.state.hits.lock().unwrap().get(&key).copied().unwrap_or(0)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// A client pointed at this server.
    pub fn client(&self, cache: Option<Arc<pokedex::ExpiringCache>>) -> PokeClient {
        PokeClient::with_http_client(reqwest::Client::new(), &self.base_url, cache)
    }
}

async fn respond(State(state): State<MockState>, uri: Uri) -> (StatusCode, String) {
    let key = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    *state.hits.lock().unwrap().entry(key.clone()).or_insert(0) += 1;

    state
        .routes
        .get(&key)
        .cloned()
        .unwrap_or((StatusCode::NOT_FOUND, "Not Found".to_string()))
}

/// Two pages of location areas, two area details and a few pokemon.
pub fn fixtures(base: &str) -> Vec<(String, StatusCode, String)> {
    let page1 = json!({
        "count": 3,
        "next": format!("{}/location-area?offset=2&limit=2", base),
        "previous": null,
        "results": [
            {"name": "canalave-city-area", "url": format!("{}/location-area/1/", base)},
            {"name": "eterna-city-area", "url": format!("{}/location-area/2/", base)}
        ]
    });
    let page2 = json!({
        "count": 3,
        "next": null,
        "previous": format!("{}/location-area?offset=0&limit=2", base),
        "results": [
            {"name": "pastoria-city-area", "url": format!("{}/location-area/3/", base)}
        ]
    });
    let canalave = json!({
        "pokemon_encounters": [
            {"pokemon": {"name": "tentacool", "url": format!("{}/pokemon/72/", base)}},
            {"pokemon": {"name": "tentacruel", "url": format!("{}/pokemon/73/", base)}},
            {"pokemon": {"name": "staryu", "url": format!("{}/pokemon/120/", base)}}
        ]
    });
    let empty_area = json!({ "pokemon_encounters": [] });
    let pidgey = json!({
        "name": "pidgey",
        "height": 3,
        "weight": 18,
        "base_experience": 36,
        "stats": [
            {"base_stat": 40, "stat": {"name": "hp", "url": format!("{}/stat/1/", base)}},
            {"base_stat": 45, "stat": {"name": "attack", "url": format!("{}/stat/2/", base)}}
        ],
        "types": [
            {"slot": 1, "type": {"name": "normal", "url": format!("{}/type/1/", base)}},
            {"slot": 2, "type": {"name": "flying", "url": format!("{}/type/3/", base)}}
        ]
    });
    let blissey = json!({ "name": "blissey", "base_experience": 635 });

    vec![
        ("/location-area".to_string(), StatusCode::OK, page1.to_string()),
        (
            "/location-area?offset=0&limit=2".to_string(),
            StatusCode::OK,
            page1.to_string(),
        ),
        (
            "/location-area?offset=2&limit=2".to_string(),
            StatusCode::OK,
            page2.to_string(),
        ),
        (
            "/location-area/canalave-city-area".to_string(),
            StatusCode::OK,
            canalave.to_string(),
        ),
        (
            "/location-area/empty-area".to_string(),
            StatusCode::OK,
            empty_area.to_string(),
        ),
        ("/pokemon/pidgey".to_string(), StatusCode::OK, pidgey.to_string()),
        ("/pokemon/blissey".to_string(), StatusCode::OK, blissey.to_string()),
        (
            "/pokemon/broken".to_string(),
            StatusCode::OK,
            "{invalid json}".to_string(),
        ),
        (
            "/pokemon/missingno".to_string(),
            StatusCode::INTERNAL_SERVER_ERROR,
            String::new(),
        ),
    ]
}
