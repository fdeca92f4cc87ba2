//! Naver Shopping search adapter.
//!
//! Same build/parse split as `ItemClient`, against a fixed endpoint that
//! needs two credential headers on every request.

use crate::client::check_status;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::items::from_json_to_items;
use crate::types::{Item, NaverCredentials};
use crate::uri::UriBuilder;

pub const DEFAULT_BASE_URL: &str = "https://openapi.naver.com";
pub const SHOP_SEARCH_PATH: &str = "/v1/search/shop.json";

/// Result count requested from the shop search endpoint.
pub const DISPLAY: u32 = 15;

pub const CLIENT_ID_HEADER: &str = "X-Naver-Client-Id";
pub const CLIENT_SECRET_HEADER: &str = "X-Naver-Client-Secret";

#[derive(Debug, Clone)]
pub struct NaverClient {
    base_url: String,
    credentials: NaverCredentials,
}

impl NaverClient {
    pub fn new(base_url: &str, credentials: NaverCredentials) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    pub fn build_search(&self, query: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            uri: UriBuilder::new(&self.base_url)
                .path(SHOP_SEARCH_PATH)
                .query_param("display", DISPLAY)
                .query_param("query", query)
                .build(),
            headers: vec![
                (CLIENT_ID_HEADER.to_string(), self.credentials.client_id.clone()),
                (CLIENT_SECRET_HEADER.to_string(), self.credentials.client_secret.clone()),
            ],
            body: None,
        }
    }

    pub fn parse_search(&self, response: HttpResponse) -> Result<Vec<Item>, ApiError> {
        check_status(&response)?;
        from_json_to_items(&response.body)
    }
}
