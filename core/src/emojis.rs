//! `GET /emojis`: every emoji name GitHub knows, mapped to its image URL.

use crate::client::GitHubClient;
use crate::http::HttpRequest;
use crate::transport::Transport;

pub const EMOJIS: &str = "/emojis";

pub struct Emojis<'a, T> {
    client: &'a GitHubClient<T>,
}

impl<'a, T: Transport> Emojis<'a, T> {
    pub(crate) fn new(client: &'a GitHubClient<T>) -> Self {
        Self { client }
    }

    pub fn build_list(&self) -> HttpRequest {
        self.client.build_get(EMOJIS, &[])
    }

    /// Fetch the full emoji map.
    pub fn list(&self) -> Result<T::Response, T::Error> {
        self.client.get(EMOJIS, &[])
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::RecordingTransport;
    use crate::{ClientConfig, GitHubClient};

    #[test]
    fn list_requests_emojis_path() {
        let client = GitHubClient::new(
            ClientConfig::new("https://api.github.com"),
            RecordingTransport::new(200, r#"{"+1":"https://example.test/+1.png"}"#),
        );
        assert_eq!(client.emojis().build_list().url, "https://api.github.com/emojis");

        let response = client.emojis().list().unwrap();
        assert_eq!(response.body, r#"{"+1":"https://example.test/+1.png"}"#);
        assert_eq!(client.transport().urls(), vec!["https://api.github.com/emojis"]);
    }
}
