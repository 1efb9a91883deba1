//! The seam between `GitHubClient` and the network.
//!
//! # Design
//! `Transport` is the only capability the client needs: execute one `GET`.
//! Its `Response` and `Error` types flow out of every endpoint operation
//! untouched, so a caller gets back exactly what their transport produced.
//! Connection handling, TLS, timeouts and retries all live behind this trait.

use std::sync::Arc;
use std::time::Duration;

use crate::http::{HttpRequest, HttpResponse};

/// Executes a resolved `GET` request.
pub trait Transport {
    type Response;
    type Error;

    fn get(&self, request: &HttpRequest) -> Result<Self::Response, Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    type Response = T::Response;
    type Error = T::Error;

    fn get(&self, request: &HttpRequest) -> Result<Self::Response, Self::Error> {
        (**self).get(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    type Response = T::Response;
    type Error = T::Error;

    fn get(&self, request: &HttpRequest) -> Result<Self::Response, Self::Error> {
        (**self).get(request)
    }
}

/// Blocking transport backed by a `ureq` agent.
///
/// Non-2xx statuses are returned as ordinary `HttpResponse` values; only
/// connection, timeout and body-read failures become `ureq::Error`.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl std::fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Abort any request that takes longer than `timeout` end to end.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::build(Some(timeout))
    }

    fn build(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    type Response = HttpResponse;
    type Error = ureq::Error;

    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, ureq::Error> {
        let mut builder = self.agent.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = builder.call()?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_string()?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
