//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `ViewState` - Search term, candidates, selection and request slots
//! - `Candidate` / `Repository` - GitHub API payloads
//! - `ModalStack` - Modal overlay management

pub mod format;
pub mod github;
pub mod modal;
pub mod view_state;

// Re-export commonly used types
pub use format::format_date;
pub use github::{Candidate, Repository, SearchResponse};
pub use modal::{Modal, ModalStack};
pub use view_state::{RequestStatus, ViewState};
