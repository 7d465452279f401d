//! Background fetch runner
//!
//! Runs GitHub calls on a tokio runtime and hands the results back to the UI
//! thread over a channel. Every result carries the sequence number of the
//! request that produced it; deciding whether it is still current is left to
//! the coordinators.

use crate::model::github::{Candidate, Repository};
use crate::services::github::{GitHubApi, GitHubError};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use tokio::runtime::Handle;

/// Completion of a background GitHub call
#[derive(Debug)]
pub enum FetchMessage {
    Candidates {
        seq: u64,
        result: Result<Vec<Candidate>, GitHubError>,
    },
    Repositories {
        seq: u64,
        result: Result<Vec<Repository>, GitHubError>,
    },
}

/// Spawns GitHub calls and collects their completions
pub struct Fetcher {
    api: Arc<dyn GitHubApi>,
    runtime: Handle,
    sender: Sender<FetchMessage>,
    receiver: Receiver<FetchMessage>,
    pending: usize,
}

impl Fetcher {
    pub fn new(api: Arc<dyn GitHubApi>, runtime: Handle) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            api,
            runtime,
            sender,
            receiver,
            pending: 0,
        }
    }

    /// Start a user search in the background
    pub fn search(&mut self, seq: u64, term: String) {
        self.pending += 1;
        let api = Arc::clone(&self.api);
        let sender = self.sender.clone();
        self.runtime.spawn(async move {
            let result = api.search_candidates(&term).await;
            // The receiver only disappears when the app is shutting down
            let _ = sender.send(FetchMessage::Candidates { seq, result });
        });
    }

    /// Start a repositories fetch in the background
    pub fn repositories(&mut self, seq: u64, login: String) {
        self.pending += 1;
        let api = Arc::clone(&self.api);
        let sender = self.sender.clone();
        self.runtime.spawn(async move {
            let result = api.fetch_repositories(&login).await;
            let _ = sender.send(FetchMessage::Repositories { seq, result });
        });
    }

    /// Collect every completion that has arrived since the last call
    pub fn drain(&mut self) -> Vec<FetchMessage> {
        let mut messages = Vec::new();
        loop {
            match self.receiver.try_recv() {
                Ok(message) => messages.push(message),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        self.pending = self.pending.saturating_sub(messages.len());
        messages
    }

    /// Calls spawned but not yet drained, stale ones included
    pub fn pending(&self) -> usize {
        self.pending
    }
}


#[cfg(test)]
mod tests {
    use super::mock::MockGitHub;
    use super::*;
    use crate::model::view_state::fixtures::{candidate, repository};
    use std::time::{Duration, Instant};

    fn wait_for(fetcher: &mut Fetcher, count: usize) -> Vec<FetchMessage> {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut messages = Vec::new();
        while messages.len() < count && Instant::now() < deadline {
            messages.extend(fetcher.drain());
            std::thread::sleep(Duration::from_millis(5));
        }
        messages
    }

    #[test]
    fn test_search_result_is_tagged_with_sequence() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let api = Arc::new(MockGitHub::default().with_search(
            "octocat",
            0,
            Ok(vec![candidate(1, "octocat")]),
        ));
        let mut fetcher = Fetcher::new(api.clone(), runtime.handle().clone());

        fetcher.search(7, "octocat".to_string());
        let messages = wait_for(&mut fetcher, 1);

        assert_eq!(messages.len(), 1);
        match &messages[0] {
            FetchMessage::Candidates { seq, result } => {
                assert_eq!(*seq, 7);
                assert_eq!(result.as_ref().unwrap()[0].login, "octocat");
            }
            other => panic!("unexpected message: {:?}", other),
        }
        assert_eq!(api.search_calls(), vec!["octocat"]);
    }

    #[test]
    fn test_results_arrive_in_completion_order() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let api = Arc::new(
            MockGitHub::default()
                .with_repositories("slow", 150, Ok(vec![repository(1, "slow-repo")]))
                .with_repositories("fast", 0, Ok(vec![repository(2, "fast-repo")])),
        );
        let mut fetcher = Fetcher::new(api, runtime.handle().clone());

        fetcher.repositories(1, "slow".to_string());
        fetcher.repositories(2, "fast".to_string());
        assert_eq!(fetcher.pending(), 2);
        let messages = wait_for(&mut fetcher, 2);
        assert_eq!(fetcher.pending(), 0);

        let seqs: Vec<u64> = messages
            .iter()
            .map(|m| match m {
                FetchMessage::Repositories { seq, .. } => *seq,
                FetchMessage::Candidates { seq, .. } => *seq,
            })
            .collect();
        assert_eq!(seqs, vec![2, 1]);
    }

    #[test]
    fn test_drain_is_empty_without_work() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut fetcher = Fetcher::new(Arc::new(MockGitHub::default()), runtime.handle().clone());
        assert!(fetcher.drain().is_empty());
    }
}
