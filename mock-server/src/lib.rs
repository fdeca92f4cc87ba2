use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub title: String,
    pub link: String,
    pub image: String,
    pub lprice: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mall_name: Option<String>,
}

impl Item {
    pub fn new(title: &str, lprice: i64) -> Self {
        let slug = title.to_lowercase().replace(' ', "-");
        Self {
            title: title.to_string(),
            link: format!("https://shop.example.com/{slug}"),
            image: format!("https://shop.example.com/{slug}.png"),
            lprice,
            mall_name: None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ItemList {
    pub items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
pub struct User {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

pub const AUTH_HEADER: &str = "x-authorization";

pub type Catalog = Arc<Vec<Item>>;

pub fn default_items() -> Vec<Item> {
    vec![
        Item::new("Mac", 3_888_000),
        Item::new("iPad", 1_230_000),
        Item::new("iPhone", 1_550_000),
        Item::new("Watch", 450_000),
        Item::new("AirPods", 350_000),
    ]
}

pub fn app() -> Router {
    app_with_items(default_items())
}

pub fn app_with_items(items: Vec<Item>) -> Router {
    let catalog: Catalog = Arc::new(items);
    Router::new()
        .route("/api/server/get-call-obj", get(get_call_object))
        .route("/api/server/get-call-list", get(get_call_list))
        .route("/api/server/post-call/{query}", post(post_call))
        .route("/api/server/exchange-call", post(exchange_call))
        .with_state(catalog)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_items(listener: TcpListener, items: Vec<Item>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_items(items)).await
}

fn find(catalog: &Catalog, title: &str) -> Result<Json<Item>, StatusCode> {
    catalog
        .iter()
        .find(|item| item.title == title)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn get_call_object(
    State(catalog): State<Catalog>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Item>, StatusCode> {
    let query = params.query.ok_or(StatusCode::NOT_FOUND)?;
    find(&catalog, &query)
}

async fn get_call_list(State(catalog): State<Catalog>) -> Json<ItemList> {
    Json(ItemList {
        items: catalog.to_vec(),
    })
}

async fn post_call(
    State(catalog): State<Catalog>,
    Path(query): Path<String>,
    Json(user): Json<User>,
) -> Result<Json<Item>, StatusCode> {
    info!(username = %user.username, query = %query, "post-call");
    find(&catalog, &query)
}

async fn exchange_call(
    State(catalog): State<Catalog>,
    headers: HeaderMap,
    Json(user): Json<User>,
) -> Result<Json<ItemList>, StatusCode> {
    let token = headers
        .get(AUTH_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .ok_or(StatusCode::UNAUTHORIZED)?;
    info!(
        token_len = token.len(),
        username = %user.username,
        has_password = !user.password.is_empty(),
        "exchange-call"
    );
    Ok(Json(ItemList {
        items: catalog.to_vec(),
    }))
}
