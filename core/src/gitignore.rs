//! `.gitignore` templates.
//!
//! Two operations: list the names of all templates, and fetch one template
//! by name. The name is substituted into the route as given; it is neither
//! validated nor escaped here.

use crate::client::GitHubClient;
use crate::http::HttpRequest;
use crate::transport::Transport;

pub const TEMPLATES: &str = "/gitignore/templates";
pub const TEMPLATE: &str = "/gitignore/templates/{name}";

pub struct Gitignore<'a, T> {
    client: &'a GitHubClient<T>,
}

impl<'a, T: Transport> Gitignore<'a, T> {
    pub(crate) fn new(client: &'a GitHubClient<T>) -> Self {
        Self { client }
    }

    pub fn build_list_templates(&self) -> HttpRequest {
        self.client.build_get(TEMPLATES, &[])
    }

    pub fn build_get_template(&self, name: &str) -> HttpRequest {
        self.client.build_get(TEMPLATE, &[("name", name)])
    }

    /// Names of every available template.
    pub fn list_templates(&self) -> Result<T::Response, T::Error> {
        self.client.get(TEMPLATES, &[])
    }

    /// Name and source of the template called `name`.
    pub fn get_template(&self, name: &str) -> Result<T::Response, T::Error> {
        self.client.get(TEMPLATE, &[("name", name)])
    }
}
