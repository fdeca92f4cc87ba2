//! Web front for the item clients: `/api/client/*` proxies the local item
//! server, `/api/search` proxies Naver Shopping search.

pub mod config;
pub mod error;
pub mod routes;

pub use config::Config;
pub use error::GatewayError;
pub use routes::{router, AppState};
