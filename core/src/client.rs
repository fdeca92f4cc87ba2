//! Stateless request builder and response parser for the local item server.
//!
//! # Design
//! `ItemClient` holds only a `base_url`. Each call is split into a `build_*`
//! method that produces an `HttpRequest` and a `parse_*` method that consumes
//! an `HttpResponse`; the round trip itself belongs to a `Transport`.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::items::from_json_to_items;
use crate::types::{AuthToken, Credentials, Item};
use crate::uri::UriBuilder;

pub const GET_CALL_OBJ_PATH: &str = "/api/server/get-call-obj";
pub const GET_CALL_LIST_PATH: &str = "/api/server/get-call-list";
pub const POST_CALL_PATH: &str = "/api/server/post-call";
pub const EXCHANGE_CALL_PATH: &str = "/api/server/exchange-call";

/// Header carrying the opaque token on the exchange call.
pub const AUTH_HEADER: &str = "X-Authorization";

/// Synchronous, stateless client for the local item server.
#[derive(Debug, Clone)]
pub struct ItemClient {
    base_url: String,
}

impl ItemClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET /api/server/get-call-obj?query=`; `None` omits the parameter.
    pub fn build_get_call_obj(&self, query: Option<&str>) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            uri: UriBuilder::new(&self.base_url)
                .path(GET_CALL_OBJ_PATH)
                .optional_query_param("query", query)
                .build(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_call_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            uri: UriBuilder::new(&self.base_url).path(GET_CALL_LIST_PATH).build(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_post_call(
        &self,
        query: &str,
        credentials: &Credentials,
    ) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            uri: UriBuilder::new(&self.base_url)
                .path(POST_CALL_PATH)
                .path_var(query)
                .build(),
            headers: json_headers(),
            body: Some(to_json(credentials)?),
        })
    }

    pub fn build_exchange_call(
        &self,
        token: &AuthToken,
        credentials: &Credentials,
    ) -> Result<HttpRequest, ApiError> {
        let mut headers = json_headers();
        headers.push((AUTH_HEADER.to_string(), token.as_str().to_string()));
        Ok(HttpRequest {
            method: HttpMethod::Post,
            uri: UriBuilder::new(&self.base_url).path(EXCHANGE_CALL_PATH).build(),
            headers,
            body: Some(to_json(credentials)?),
        })
    }

    pub fn parse_get_call_obj(&self, response: HttpResponse) -> Result<Item, ApiError> {
        parse_item(response)
    }

    pub fn parse_get_call_list(&self, response: HttpResponse) -> Result<Vec<Item>, ApiError> {
        check_status(&response)?;
        from_json_to_items(&response.body)
    }

    pub fn parse_post_call(&self, response: HttpResponse) -> Result<Item, ApiError> {
        parse_item(response)
    }

    pub fn parse_exchange_call(&self, response: HttpResponse) -> Result<Vec<Item>, ApiError> {
        check_status(&response)?;
        from_json_to_items(&response.body)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json(credentials: &Credentials) -> Result<String, ApiError> {
    serde_json::to_string(credentials).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn parse_item(response: HttpResponse) -> Result<Item, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Any non-2xx status becomes `ApiError::HttpStatus`.
pub(crate) fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::HttpStatus {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ItemClient {
        ItemClient::new("http://localhost:7070")
    }

    fn credentials() -> Credentials {
        Credentials::new("Robbie", "1234")
    }

    fn ok(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_get_call_obj_produces_correct_request() {
        let req = client().build_get_call_obj(Some("foo"));
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.uri, "http://localhost:7070/api/server/get-call-obj?query=foo");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_call_obj_without_query() {
        let req = client().build_get_call_obj(None);
        assert_eq!(req.uri, "http://localhost:7070/api/server/get-call-obj");
    }

    #[test]
    fn build_get_call_obj_encodes_query() {
        let req = client().build_get_call_obj(Some("Air Pods"));
        assert_eq!(req.uri, "http://localhost:7070/api/server/get-call-obj?query=Air%20Pods");
    }

    #[test]
    fn build_get_call_list_produces_correct_request() {
        let req = client().build_get_call_list();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.uri, "http://localhost:7070/api/server/get-call-list");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_post_call_puts_query_in_path_and_credentials_in_body() {
        let req = client().build_post_call("Mac", &credentials()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.uri, "http://localhost:7070/api/server/post-call/Mac");
        assert_eq!(req.header("Content-Type"), Some("application/json"));
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["username"], "Robbie");
        assert_eq!(body["password"], "1234");
    }

    #[test]
    fn build_exchange_call_attaches_token_header() {
        let token = AuthToken::new("Bearer abc");
        let req = client().build_exchange_call(&token, &credentials()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.uri, "http://localhost:7070/api/server/exchange-call");
        assert_eq!(req.header("x-authorization"), Some("Bearer abc"));
        assert!(req.body.is_some());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let req = ItemClient::new("http://localhost:7070/").build_get_call_list();
        assert_eq!(req.uri, "http://localhost:7070/api/server/get-call-list");
    }

    #[test]
    fn parse_get_call_obj_success() {
        let item = client()
            .parse_get_call_obj(ok(r#"{"title":"Mac","link":"l","image":"i","lprice":3888000}"#))
            .unwrap();
        assert_eq!(item.title, "Mac");
        assert_eq!(item.lprice, 3_888_000);
        assert_eq!(item.mall_name, "");
    }

    #[test]
    fn parse_get_call_list_success() {
        let items = client()
            .parse_get_call_list(ok(
                r#"{"items":[{"title":"A","link":"http://x","image":"http://y","lprice":100}]}"#,
            ))
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].lprice, 100);
    }

    #[test]
    fn parse_post_call_not_found_is_http_status() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: String::new(),
        };
        let err = client().parse_post_call(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpStatus { status: 404, .. }));
    }

    #[test]
    fn parse_exchange_call_unauthorized() {
        let response = HttpResponse {
            status: 401,
            headers: Vec::new(),
            body: "missing token".to_string(),
        };
        match client().parse_exchange_call(response).unwrap_err() {
            ApiError::HttpStatus { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "missing token");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_get_call_obj_bad_json() {
        let err = client().parse_get_call_obj(ok("not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_get_call_list_missing_items() {
        let err = client().parse_get_call_list(ok(r#"{"title":"Mac"}"#)).unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedShape(_)));
    }
}
