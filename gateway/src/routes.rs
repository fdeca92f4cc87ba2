//! HTTP surface over the blocking item services.
//!
//! Every core call runs on tokio's blocking pool; handlers only extract
//! parameters and wrap the result in JSON.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header::AUTHORIZATION, HeaderMap},
    routing::get,
    Json, Router,
};
use item_core::{
    ApiError, AuthToken, Item, ItemClient, LocalServerService, NaverApiService, NaverClient,
    UreqTransport,
};
use serde::Deserialize;

use crate::config::Config;
use crate::error::GatewayError;

/// Services shared by all handlers. Both hold clones of one transport, and
/// therefore one connection pool. `naver` is `None` when no Naver credentials
/// are configured.
#[derive(Clone)]
pub struct AppState {
    local: Arc<LocalServerService<UreqTransport>>,
    naver: Option<Arc<NaverApiService<UreqTransport>>>,
}

impl AppState {
    pub fn new(config: &Config, transport: UreqTransport) -> Self {
        let local = LocalServerService::new(
            ItemClient::new(&config.server_base_url),
            config.server_credentials.clone(),
            transport.clone(),
        );
        let naver = config.naver_credentials.clone().map(|credentials| {
            Arc::new(NaverApiService::new(
                NaverClient::new(&config.naver_base_url, credentials),
                transport,
            ))
        });
        Self {
            local: Arc::new(local),
            naver,
        }
    }
}

#[derive(Deserialize)]
pub struct OptionalQuery {
    pub query: Option<String>,
}

#[derive(Deserialize)]
pub struct RequiredQuery {
    pub query: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/client/get-call-obj", get(get_call_object))
        .route("/api/client/get-call-list", get(get_call_list))
        .route("/api/client/post-call", get(post_call))
        .route("/api/client/exchange-call", get(exchange_call))
        .route("/api/search", get(search_items))
        .with_state(state)
}

async fn blocking<F, T>(call: F) -> Result<T, GatewayError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    let result = tokio::task::spawn_blocking(call)
        .await
        .map_err(|e| GatewayError::Worker(e.to_string()))?;
    Ok(result?)
}

async fn get_call_object(
    State(state): State<AppState>,
    params: Result<Query<OptionalQuery>, QueryRejection>,
) -> Result<Json<Item>, GatewayError> {
    let Query(params) = params?;
    let item = blocking(move || state.local.get_call_object(params.query.as_deref())).await?;
    Ok(Json(item))
}

async fn get_call_list(State(state): State<AppState>) -> Result<Json<Vec<Item>>, GatewayError> {
    let items = blocking(move || state.local.get_call_list()).await?;
    Ok(Json(items))
}

async fn post_call(
    State(state): State<AppState>,
    params: Result<Query<RequiredQuery>, QueryRejection>,
) -> Result<Json<Item>, GatewayError> {
    let Query(params) = params?;
    let item = blocking(move || state.local.post_call(&params.query)).await?;
    Ok(Json(item))
}

async fn exchange_call(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Item>>, GatewayError> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(AuthToken::new)
        .ok_or(GatewayError::MissingHeader("Authorization"))?;
    let items = blocking(move || state.local.exchange_call(&token)).await?;
    Ok(Json(items))
}

async fn search_items(
    State(state): State<AppState>,
    params: Result<Query<RequiredQuery>, QueryRejection>,
) -> Result<Json<Vec<Item>>, GatewayError> {
    let Query(params) = params?;
    let naver = state
        .naver
        .ok_or(GatewayError::NotConfigured("Naver search"))?;
    let items = blocking(move || naver.search_items(&params.query)).await?;
    Ok(Json(items))
}
