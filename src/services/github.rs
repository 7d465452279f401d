//! GitHub REST client
//!
//! Two unauthenticated GET calls against a fixed API origin. Each call issues
//! exactly one request: no caching, no retry, no rate-limit backoff.

use crate::model::github::{Candidate, Repository, SearchResponse};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

/// Default public API origin
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Maximum number of candidates requested per search
pub const SEARCH_PAGE_SIZE: u32 = 5;

/// Maximum number of repositories requested per user
pub const REPOSITORIES_PAGE_SIZE: u32 = 100;

const SEARCH_ERROR_CONTEXT: &str = "GitHub API error";
const REPOSITORIES_ERROR_CONTEXT: &str = "Failed to fetch repositories";

/// Failure of a single GitHub call
///
/// The `Display` output is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GitHubError {
    /// Non-2xx HTTP response
    #[error("{context}: {status} {status_text}")]
    Remote {
        context: &'static str,
        status: u16,
        status_text: String,
    },

    /// No response was received; carries the transport's message verbatim
    #[error("{0}")]
    Network(String),

    /// The body of a 2xx response was not the expected JSON
    #[error("Invalid response from GitHub: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for GitHubError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GitHubError::Decode(err.to_string())
        } else {
            GitHubError::Network(err.to_string())
        }
    }
}

/// Operations the coordinators need from GitHub
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Search accounts by login, capped at [`SEARCH_PAGE_SIZE`] results
    async fn search_candidates(&self, term: &str) -> Result<Vec<Candidate>, GitHubError>;

    /// List a user's repositories, most recently updated first
    async fn fetch_repositories(&self, login: &str) -> Result<Vec<Repository>, GitHubError>;
}

/// reqwest-backed [`GitHubApi`]
pub struct HttpGitHubClient {
    client: Client,
    base_url: Url,
}

impl HttpGitHubClient {
    /// Build a client for `base_url` with a per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid GitHub API URL: {}", base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("GitHub API URL cannot be used as a base: {}", base_url);
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("gh-explorer/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// Base URL with extra path segments appended (each segment is encoded)
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn search_url(&self, term: &str) -> Url {
        let mut url = self.endpoint(&["search", "users"]);
        url.query_pairs_mut()
            .append_pair("q", term)
            .append_pair("per_page", &SEARCH_PAGE_SIZE.to_string());
        url
    }

    fn repositories_url(&self, login: &str) -> Url {
        let mut url = self.endpoint(&["users", login, "repos"]);
        url.query_pairs_mut()
            .append_pair("sort", "updated")
            .append_pair("per_page", &REPOSITORIES_PAGE_SIZE.to_string());
        url
    }

    async fn get(&self, url: Url) -> Result<Response, GitHubError> {
        tracing::debug!(%url, "GET");
        self.client.get(url).send().await.map_err(|err| {
            tracing::warn!(error = %err, "GitHub request failed before a response");
            GitHubError::from(err)
        })
    }
}

/// Check the status and decode the body, without reading it on error
async fn decode<T: DeserializeOwned>(
    response: Response,
    context: &'static str,
) -> Result<T, GitHubError> {
    let status = response.status();
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), context, "GitHub returned an error status");
        return Err(GitHubError::Remote {
            context,
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        });
    }
    Ok(response.json::<T>().await?)
}

#[async_trait]
impl GitHubApi for HttpGitHubClient {
    async fn search_candidates(&self, term: &str) -> Result<Vec<Candidate>, GitHubError> {
        let response = self.get(self.search_url(term)).await?;
        let search: SearchResponse = decode(response, SEARCH_ERROR_CONTEXT).await?;
        Ok(search.items)
    }

    async fn fetch_repositories(&self, login: &str) -> Result<Vec<Repository>, GitHubError> {
        let response = self.get(self.repositories_url(login)).await?;
        decode(response, REPOSITORIES_ERROR_CONTEXT).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve a single canned HTTP response and report the request line
    async fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            let request = String::from_utf8_lossy(&request).to_string();
            request.lines().next().unwrap_or_default().to_string()
        });

        (base, handle)
    }

    fn client(base: &str) -> HttpGitHubClient {
        HttpGitHubClient::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_search_url_encodes_term_and_caps_results() {
        let client = client(DEFAULT_API_BASE_URL);
        let url = client.search_url("john doe&x");
        assert_eq!(
            url.as_str(),
            "https://api.github.com/search/users?q=john+doe%26x&per_page=5"
        );
    }

    #[test]
    fn test_repositories_url_sorts_by_updated() {
        let client = client(DEFAULT_API_BASE_URL);
        let url = client.repositories_url("octocat");
        assert_eq!(
            url.as_str(),
            "https://api.github.com/users/octocat/repos?sort=updated&per_page=100"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = client("https://ghe.example.com/api/v3/");
        let url = client.repositories_url("a/b");
        assert_eq!(
            url.as_str(),
            "https://ghe.example.com/api/v3/users/a%2Fb/repos?sort=updated&per_page=100"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(HttpGitHubClient::new("not a url", Duration::from_secs(1)).is_err());
        assert!(HttpGitHubClient::new("mailto:someone@example.com", Duration::from_secs(1)).is_err());
    }

    #[test]
    fn test_remote_error_messages() {
        let search = GitHubError::Remote {
            context: SEARCH_ERROR_CONTEXT,
            status: 403,
            status_text: "Forbidden".to_string(),
        };
        assert_eq!(search.to_string(), "GitHub API error: 403 Forbidden");

        let repos = GitHubError::Remote {
            context: REPOSITORIES_ERROR_CONTEXT,
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(repos.to_string(), "Failed to fetch repositories: 404 Not Found");
    }

    #[test]
    fn test_network_error_message_is_verbatim() {
        assert_eq!(GitHubError::Network("Network error".to_string()).to_string(), "Network error");
    }

    #[tokio::test]
    async fn test_search_candidates_success() {
        let body = r#"{"total_count":1,"items":[{"id":1,"login":"octocat","avatar_url":"a","html_url":"h","type":"User"}]}"#;
        let (base, server) = serve_once("200 OK", body).await;

        let candidates = client(&base).search_candidates("octocat").await.unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].login, "octocat");

        let request_line = server.await.unwrap();
        assert_eq!(request_line, "GET /search/users?q=octocat&per_page=5 HTTP/1.1");
    }

    #[tokio::test]
    async fn test_search_candidates_missing_items() {
        let (base, _server) = serve_once("200 OK", r#"{"total_count":0}"#).await;
        let candidates = client(&base).search_candidates("nobody").await.unwrap();
        assert!(candidates.is_empty());
    }

    #[tokio::test]
    async fn test_search_candidates_error_status() {
        let (base, _server) = serve_once("403 Forbidden", r#"{"message":"rate limited"}"#).await;
        let err = client(&base).search_candidates("octocat").await.unwrap_err();
        assert_eq!(err.to_string(), "GitHub API error: 403 Forbidden");
    }

    #[tokio::test]
    async fn test_fetch_repositories_error_status() {
        let (base, server) = serve_once("404 Not Found", "{}").await;
        let err = client(&base).fetch_repositories("ghost").await.unwrap_err();
        assert_eq!(
            err,
            GitHubError::Remote {
                context: REPOSITORIES_ERROR_CONTEXT,
                status: 404,
                status_text: "Not Found".to_string(),
            }
        );
        let request_line = server.await.unwrap();
        assert_eq!(request_line, "GET /users/ghost/repos?sort=updated&per_page=100 HTTP/1.1");
    }

    #[tokio::test]
    async fn test_fetch_repositories_success() {
        let body = r#"[{
            "id": 1, "name": "Hello-World", "full_name": "octocat/Hello-World",
            "description": "My first repository", "html_url": "https://github.com/octocat/Hello-World",
            "stargazers_count": 80, "forks_count": 9, "watchers_count": 80,
            "language": "C", "created_at": "2011-01-26T19:01:12Z",
            "updated_at": "2023-06-01T00:00:00Z", "private": false
        }]"#;
        let (base, _server) = serve_once("200 OK", body).await;
        let repos = client(&base).fetch_repositories("octocat").await.unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].forks_count, 9);
        assert_eq!(repos[0].language.as_deref(), Some("C"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let (base, _server) = serve_once("200 OK", "not json").await;
        let err = client(&base).fetch_repositories("octocat").await.unwrap_err();
        assert!(matches!(err, GitHubError::Decode(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let err = client(&base).search_candidates("octocat").await.unwrap_err();
        assert!(matches!(err, GitHubError::Network(_)));
    }
}
