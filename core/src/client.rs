//! The base request component.
//!
//! # Design
//! `GitHubClient` holds a `ClientConfig` and a `Transport` and nothing else.
//! Both are read-only after construction, so one client can be shared by
//! reference (or behind an `Arc`) across threads as long as the transport is
//! `Sync`. Every call resolves its route into an `HttpRequest` through
//! `build_get` and hands it to the transport; whatever comes back, success or
//! error, is returned as is.

use log::{debug, warn};

use crate::config::ClientConfig;
use crate::emojis::Emojis;
use crate::gitignore::Gitignore;
use crate::http::HttpRequest;
use crate::rate_limit::RateLimit;
use crate::route;
use crate::transport::Transport;

const ACCEPT: &str = "application/vnd.github+json";

/// Issues `GET` requests against a configured GitHub API root.
#[derive(Debug, Clone)]
pub struct GitHubClient<T> {
    config: ClientConfig,
    transport: T,
}

impl<T: Transport> GitHubClient<T> {
    pub fn new(mut config: ClientConfig, transport: T) -> Self {
        let trimmed = config.base_url.trim_end_matches('/').len();
        config.base_url.truncate(trimmed);
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolve `route` against the base URL without sending anything.
    ///
    /// Placeholders missing from `replace` stay in the path verbatim.
    pub fn build_get(&self, route: &str, replace: &[(&str, &str)]) -> HttpRequest {
        debug_assert!(route.starts_with('/'), "route must start with '/': {route}");

        let path = route::substitute(route, replace);
        let mut headers = vec![
            ("accept".to_string(), ACCEPT.to_string()),
            ("user-agent".to_string(), self.config.user_agent.clone()),
        ];
        if let Some(token) = &self.config.token {
            headers.push(("authorization".to_string(), format!("Bearer {token}")));
        }

        HttpRequest {
            url: format!("{}{path}", self.config.base_url),
            headers,
        }
    }

    /// Send `GET <base_url><route>` and return the transport's result untouched.
    pub fn get(&self, route: &str, replace: &[(&str, &str)]) -> Result<T::Response, T::Error> {
        for key in route::placeholders(route) {
            if !replace.iter().any(|(k, _)| *k == key) {
                warn!("no value for placeholder {{{key}}} in {route}; sending it verbatim");
            }
        }

        let request = self.build_get(route, replace);
        debug!("GET {}", request.url);
        self.transport.get(&request)
    }

    pub fn emojis(&self) -> Emojis<'_, T> {
        Emojis::new(self)
    }

    pub fn gitignore(&self) -> Gitignore<'_, T> {
        Gitignore::new(self)
    }

    pub fn rate_limit(&self) -> RateLimit<'_, T> {
        RateLimit::new(self)
    }
}
