//! External service interactions
//!
//! This module contains services for talking to the outside world:
//! - GitHub REST client
//! - Background fetch runner
//! - Search debounce controller

pub mod debounce;
pub mod fetcher;
pub mod github;

pub use debounce::Debouncer;
pub use fetcher::{FetchMessage, Fetcher};
pub use github::{GitHubApi, GitHubError, HttpGitHubClient};
