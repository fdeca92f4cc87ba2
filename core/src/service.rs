//! Build, send, parse: the four local-server calls and the Naver search,
//! each one blocking round trip with the URI and status logged.

use tracing::{debug, info};

use crate::client::ItemClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::naver::NaverClient;
use crate::transport::Transport;
use crate::types::{AuthToken, Credentials, Item};

fn send<T: Transport>(
    transport: &T,
    api: &'static str,
    request: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    info!(api, method = request.method.as_str(), uri = %request.uri, "sending request");
    let response = transport.execute(&request)?;
    info!(api, status = response.status, "received response");
    Ok(response)
}

/// Calls against the local item server with a fixed set of credentials.
#[derive(Clone)]
pub struct LocalServerService<T> {
    client: ItemClient,
    credentials: Credentials,
    transport: T,
}

impl<T: Transport> LocalServerService<T> {
    pub fn new(client: ItemClient, credentials: Credentials, transport: T) -> Self {
        Self {
            client,
            credentials,
            transport,
        }
    }

    pub fn get_call_object(&self, query: Option<&str>) -> Result<Item, ApiError> {
        let response = send(&self.transport, "local", self.client.build_get_call_obj(query))?;
        self.client.parse_get_call_obj(response)
    }

    pub fn get_call_list(&self) -> Result<Vec<Item>, ApiError> {
        let response = send(&self.transport, "local", self.client.build_get_call_list())?;
        debug!(body = %response.body, "get-call-list body");
        self.client.parse_get_call_list(response)
    }

    pub fn post_call(&self, query: &str) -> Result<Item, ApiError> {
        let request = self.client.build_post_call(query, &self.credentials)?;
        let response = send(&self.transport, "local", request)?;
        self.client.parse_post_call(response)
    }

    pub fn exchange_call(&self, token: &AuthToken) -> Result<Vec<Item>, ApiError> {
        let request = self.client.build_exchange_call(token, &self.credentials)?;
        let response = send(&self.transport, "local", request)?;
        self.client.parse_exchange_call(response)
    }
}

#[derive(Clone)]
pub struct NaverApiService<T> {
    client: NaverClient,
    transport: T,
}

impl<T: Transport> NaverApiService<T> {
    pub fn new(client: NaverClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn search_items(&self, query: &str) -> Result<Vec<Item>, ApiError> {
        let response = send(&self.transport, "naver", self.client.build_search(query))?;
        self.client.parse_search(response)
    }
}
