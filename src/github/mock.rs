//! wiremock-based GitHub mock server for testing.
//!
//! Provides `GitHubMockServer` for HTTP-level mocking of GitHub API calls.
//! Mount expectations, then build a client pointed at the server with
//! `mock.client()`. Call-count expectations are verified when the server
//! is dropped at the end of the test.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::client::GitHubClient;

const TEST_TOKEN: &str = "test-token";

pub struct GitHubMockServer {
    server: MockServer,
}

impl GitHubMockServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// A client authenticated with the test token, pointed at this server.
    pub fn client(&self) -> GitHubClient {
        GitHubClient::new(TEST_TOKEN.to_string(), self.server.uri())
    }

    /// Build a repository JSON object as returned by `GET /user/repos`.
    pub fn repo_json(
        name: &str,
        owner: &str,
        owner_type: &str,
        private: bool,
        description: Option<&str>,
    ) -> serde_json::Value {
        json!({
            "name": name,
            "full_name": format!("{owner}/{name}"),
            "html_url": format!("https://github.com/{owner}/{name}"),
            "description": description,
            "private": private,
            "owner": {
                "login": owner,
                "type": owner_type,
            },
        })
    }

    /// Mock the listing endpoint, asserting the auth header and the exact
    /// query parameters the lister must send.
    pub async fn list_repos(&self, repos: Vec<serde_json::Value>) {
        Mock::given(method("GET"))
            .and(path("/user/repos"))
            .and(query_param("visibility", "private"))
            .and(query_param("per_page", "100"))
            .and(header("authorization", format!("token {TEST_TOKEN}")))
            .and(header("accept", "application/vnd.github.v3+json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(repos)))
            .mount(&self.server)
            .await;
    }

    pub async fn list_repos_error(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/user/repos"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Mock the visibility PATCH, asserting the body and exactly how many
    /// times it must be hit.
    pub async fn make_public(&self, full_name: &str, expected_calls: u64) {
        Mock::given(method("PATCH"))
            .and(path(format!("/repos/{full_name}")))
            .and(header("authorization", format!("token {TEST_TOKEN}")))
            .and(body_json(json!({ "private": false })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({
                    "full_name": full_name,
                    "private": false,
                })),
            )
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }

    pub async fn make_public_error(&self, full_name: &str, status: u16) {
        Mock::given(method("PATCH"))
            .and(path(format!("/repos/{full_name}")))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Expect that the visibility PATCH is never sent for this repository.
    pub async fn expect_no_make_public(&self, full_name: &str) {
        Mock::given(method("PATCH"))
            .and(path(format!("/repos/{full_name}")))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&self.server)
            .await;
    }
}
