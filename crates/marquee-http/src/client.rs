//! HTTP client for the movie API.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderValue};
use tracing::{debug, instrument, trace};

use marquee_core::ApiUrl;
use marquee_core::error::{Error, ProtocolError, TransportError};

/// HTTP client bound to one movie API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    api: ApiUrl,
}

impl ApiClient {
    /// Create a new client for the given API.
    ///
    /// No request timeout is applied unless one is given; requests are then
    /// bounded only by the transport.
    pub fn new(api: ApiUrl, timeout: Option<Duration>) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("marquee/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(map_reqwest)?;

        Ok(Self { client, api })
    }

    /// Returns the API URL this client is configured for.
    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// GET an endpoint and return the raw body of a successful response.
    #[instrument(skip(self), fields(api = %self.api))]
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, Error> {
        let url = self.api.endpoint(path);
        debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(map_reqwest)?;

        let status = response.status();
        trace!(status = %status, "API response");

        if status.is_success() {
            let body = response.bytes().await.map_err(map_reqwest)?;
            Ok(body.to_vec())
        } else {
            Err(Error::Protocol(parse_error_response(response).await))
        }
    }
}

/// Build a protocol error from a failed response, using a `message` field
/// from a JSON body when the server sends one.
async fn parse_error_response(response: reqwest::Response) -> ProtocolError {
    let status = response.status().as_u16();
    let message = match response.text().await {
        Ok(text) if !text.is_empty() => serde_json::from_str::<serde_json::Value>(&text)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
            .or(Some(text)),
        _ => None,
    };
    ProtocolError::new(status, message)
}

fn map_reqwest(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}
