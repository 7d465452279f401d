//! GitHub API payloads
//!
//! Plain data received from the REST API. Nothing here is mutated after
//! deserialization; collections are replaced wholesale by the coordinators.

use serde::{Deserialize, Serialize};

/// A GitHub account surfaced by a username search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: u64,
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    /// Account kind as reported by GitHub ("User", "Organization", ...)
    #[serde(rename = "type")]
    pub kind: String,
}

impl Candidate {
    /// Short marker shown in place of the avatar image
    pub fn icon(&self) -> &str {
        match self.kind.as_str() {
            "Organization" => "🏢",
            "Bot" => "🤖",
            _ => "👤",
        }
    }
}

/// A repository owned by the selected candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub watchers_count: u64,
    #[serde(default)]
    pub language: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub private: bool,
}

/// Envelope returned by `/search/users`
///
/// GitHub may omit `items` or send `null`; both decode to an empty list.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<Candidate>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Candidate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let items: Option<Vec<Candidate>> = Option::deserialize(deserializer)?;
    Ok(items.unwrap_or_default())
}
