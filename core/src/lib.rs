//! Blocking client for a handful of GitHub REST endpoints.
//!
//! # Overview
//! `GitHubClient` turns a route template such as
//! `/gitignore/templates/{name}` into a full URL, attaches the configured
//! headers, and hands the request to a `Transport`. The endpoint components
//! (`Emojis`, `Gitignore`, `RateLimit`) are thin views over the client that
//! each pin a route.
//!
//! # Design
//! - No response parsing and no status interpretation: every operation
//!   returns `Result<T::Response, T::Error>` straight from the transport.
//! - Each operation has a pure `build_*` twin so the request can be inspected
//!   without I/O.
//! - `UreqTransport` is the bundled transport; anything implementing
//!   `Transport` can be swapped in.
//!
//! ```no_run
//! use github_core::{ClientConfig, GitHubClient, UreqTransport};
//!
//! let client = GitHubClient::new(ClientConfig::from_env(), UreqTransport::new());
//! let response = client.gitignore().get_template("Rust")?;
//! println!("{} {}", response.status, response.body);
//! # Ok::<(), ureq::Error>(())
//! ```

pub mod client;
pub mod config;
pub mod emojis;
pub mod gitignore;
pub mod http;
pub mod rate_limit;
pub mod route;
pub mod transport;

#[cfg(test)]
mod testing;

pub use client::GitHubClient;
pub use config::ClientConfig;
pub use emojis::Emojis;
pub use gitignore::Gitignore;
pub use http::{HttpRequest, HttpResponse};
pub use rate_limit::RateLimit;
pub use transport::{Transport, UreqTransport};
