//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod help_dialog;
pub mod home;
pub mod layout;
pub mod profile;
pub mod quit_dialog;
pub mod search;

pub use help_dialog::HelpDialog;
pub use home::{draw_home_screen, spinner_frame, HomeRenderContext};
pub use layout::centered_popup;
pub use profile::ProfileComponent;
pub use quit_dialog::QuitDialog;
pub use search::SearchComponent;
