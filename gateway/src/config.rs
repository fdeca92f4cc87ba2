//! Startup configuration: base addresses and credentials come from the
//! environment (optionally a `.env` file), never from code.

use anyhow::{bail, Result};
use item_core::{naver, Credentials, NaverCredentials};

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_SERVER_BASE_URL: &str = "http://localhost:7070";

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub server_base_url: String,
    pub server_credentials: Credentials,
    pub naver_base_url: String,
    /// `None` leaves `/api/search` disabled.
    pub naver_credentials: Option<NaverCredentials>,
}

impl Config {
    /// Read the process environment after loading `.env`, if one exists.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Everything has a default except the Naver
    /// credentials: with neither set, search is disabled; with only one set,
    /// loading fails.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let naver_credentials = match (present("NAVER_CLIENT_ID"), present("NAVER_CLIENT_SECRET")) {
            (Some(client_id), Some(client_secret)) => Some(NaverCredentials {
                client_id,
                client_secret,
            }),
            (None, None) => None,
            (Some(_), None) => bail!("NAVER_CLIENT_SECRET must be set when NAVER_CLIENT_ID is"),
            (None, Some(_)) => bail!("NAVER_CLIENT_ID must be set when NAVER_CLIENT_SECRET is"),
        };

        Ok(Self {
            listen_addr: var_or("GATEWAY_ADDR", DEFAULT_LISTEN_ADDR),
            server_base_url: var_or("SERVER_BASE_URL", DEFAULT_SERVER_BASE_URL),
            server_credentials: Credentials::new(
                var_or("SERVER_USERNAME", "Robbie"),
                var_or("SERVER_PASSWORD", "1234"),
            ),
            naver_base_url: var_or("NAVER_BASE_URL", naver::DEFAULT_BASE_URL),
            naver_credentials,
        })
    }
}
