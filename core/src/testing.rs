//! In-memory transport for unit tests.

use std::sync::Mutex;

use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;

/// Records every request and answers each with a clone of `response`.
#[derive(Debug)]
pub struct RecordingTransport {
    pub response: HttpResponse,
    pub requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingTransport {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            response: HttpResponse {
                status,
                headers: vec![("content-type".to_string(), "application/json".to_string())],
                body: body.to_string(),
            },
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.url.clone())
            .collect()
    }
}

impl Transport for RecordingTransport {
    type Response = HttpResponse;
    type Error = std::convert::Infallible;

    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, Self::Error> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.response.clone())
    }
}

/// Always fails with the given message.
#[derive(Debug)]
pub struct FailingTransport(pub &'static str);

impl Transport for FailingTransport {
    type Response = HttpResponse;
    type Error = &'static str;

    fn get(&self, _request: &HttpRequest) -> Result<HttpResponse, &'static str> {
        Err(self.0)
    }
}
