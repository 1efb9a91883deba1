//! A local stand-in for the GitHub REST endpoints the client talks to.
//!
//! Serves fixed data for `/emojis`, `/gitignore/templates`,
//! `/gitignore/templates/{name}` and `/rate_limit`. Unknown template names
//! get GitHub's 404 body. `/rate_limit` reports the authenticated limits when
//! an `Authorization` header is present and the anonymous ones otherwise.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header::AUTHORIZATION, HeaderMap, HeaderName, HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use log::debug;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

const DOCS_URL: &str = "https://docs.github.com/rest";
const RESET_AT: u64 = 1_700_000_000;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Template {
    pub name: String,
    pub source: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
    pub documentation_url: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rate {
    pub limit: u32,
    pub remaining: u32,
    pub reset: u64,
    pub used: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resources {
    pub core: Rate,
    pub search: Rate,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateLimitStatus {
    pub resources: Resources,
    pub rate: Rate,
}

pub type Templates = Arc<BTreeMap<String, String>>;

pub fn app() -> Router {
    let templates: Templates = Arc::new(default_templates());
    Router::new()
        .route("/emojis", get(list_emojis))
        .route("/gitignore/templates", get(list_templates))
        .route("/gitignore/templates/{name}", get(get_template))
        .route("/rate_limit", get(rate_limit))
        .with_state(templates)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn default_templates() -> BTreeMap<String, String> {
    [
        ("C", "*.o\n*.a\n*.so\n"),
        ("C++", "*.o\n*.obj\n*.exe\n"),
        ("Go", "*.exe\n*.test\nvendor/\n"),
        ("Python", "__pycache__/\n*.py[cod]\n.venv/\n"),
        ("Rust", "/target\nCargo.lock\n**/*.rs.bk\n"),
    ]
    .into_iter()
    .map(|(name, source)| (name.to_string(), source.to_string()))
    .collect()
}

fn emoji_url(code: &str) -> String {
    format!("https://github.githubassets.com/images/icons/emoji/unicode/{code}.png?v8")
}

async fn list_emojis() -> Json<BTreeMap<&'static str, String>> {
    Json(BTreeMap::from([
        ("+1", emoji_url("1f44d")),
        ("heart", emoji_url("2764")),
        ("rocket", emoji_url("1f680")),
        ("tada", emoji_url("1f389")),
    ]))
}

async fn list_templates(State(templates): State<Templates>) -> Json<Vec<String>> {
    Json(templates.keys().cloned().collect())
}

async fn get_template(
    State(templates): State<Templates>,
    Path(name): Path<String>,
) -> Result<Json<Template>, (StatusCode, Json<ErrorBody>)> {
    debug!("template lookup: {name}");
    match templates.get(&name) {
        Some(source) => Ok(Json(Template {
            source: source.clone(),
            name,
        })),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorBody {
                message: "Not Found".to_string(),
                documentation_url: DOCS_URL.to_string(),
            }),
        )),
    }
}

async fn rate_limit(headers: HeaderMap) -> (HeaderMap, Json<RateLimitStatus>) {
    let status = rate_limit_status(headers.contains_key(AUTHORIZATION));

    let mut out = HeaderMap::new();
    out.insert(
        HeaderName::from_static("x-ratelimit-limit"),
        HeaderValue::from(status.rate.limit),
    );
    out.insert(
        HeaderName::from_static("x-ratelimit-remaining"),
        HeaderValue::from(status.rate.remaining),
    );
    (out, Json(status))
}

fn rate_limit_status(authenticated: bool) -> RateLimitStatus {
    let (core_limit, search_limit) = if authenticated { (5000, 30) } else { (60, 10) };
    let core = Rate {
        limit: core_limit,
        remaining: core_limit - 1,
        reset: RESET_AT,
        used: 1,
    };
    let search = Rate {
        limit: search_limit,
        remaining: search_limit,
        reset: RESET_AT,
        used: 0,
    };
    RateLimitStatus {
        resources: Resources { core, search },
        rate: core,
    }
}
