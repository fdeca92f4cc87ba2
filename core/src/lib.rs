//! Blocking API clients for the local item server and Naver Shopping search.
//!
//! # Overview
//! `ItemClient` and `NaverClient` build `HttpRequest` values and parse
//! `HttpResponse` values without touching the network. A `Transport`
//! executes the round trip; `UreqTransport` is the real one. The services in
//! `service` tie the three together and log each call.
//!
//! # Design
//! - Clients hold only a base URL (and, for Naver, its credentials).
//! - List responses go through one mapper, `items::from_json_to_items`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod items;
pub mod naver;
pub mod service;
pub mod transport;
pub mod types;
pub mod uri;

pub use client::ItemClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use items::from_json_to_items;
pub use naver::NaverClient;
pub use service::{LocalServerService, NaverApiService};
pub use transport::{Transport, UreqTransport};
pub use types::{AuthToken, Credentials, Item, NaverCredentials};
pub use uri::UriBuilder;
