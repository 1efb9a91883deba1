//! `GET /rate_limit`: current rate-limit status for whoever the client is
//! authenticated as (or the caller's IP when no token is configured).

use crate::client::GitHubClient;
use crate::http::HttpRequest;
use crate::transport::Transport;

pub const RATE_LIMIT: &str = "/rate_limit";

pub struct RateLimit<'a, T> {
    client: &'a GitHubClient<T>,
}

impl<'a, T: Transport> RateLimit<'a, T> {
    pub(crate) fn new(client: &'a GitHubClient<T>) -> Self {
        Self { client }
    }

    pub fn build_get(&self) -> HttpRequest {
        self.client.build_get(RATE_LIMIT, &[])
    }

    pub fn get(&self) -> Result<T::Response, T::Error> {
        self.client.get(RATE_LIMIT, &[])
    }
}
