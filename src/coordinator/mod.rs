//! Request coordinators
//!
//! Each coordinator owns the lifecycle of one kind of asynchronous request:
//! it applies the "started" transition, hands out a sequence-numbered request
//! for the fetch runner, and applies the outcome only if that request is still
//! the most recently issued one.

pub mod search;
pub mod selection;

pub use search::{SearchCoordinator, SearchRequest};
pub use selection::{RepositoriesRequest, SelectionCoordinator};
