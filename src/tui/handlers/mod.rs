//! Input handlers for the page, the contact form, the help overlay and the
//! mouse.
//!
//! Key handlers return `Ok(true)` when the app should quit.

pub mod actions;
pub mod main;
pub mod mouse;
pub mod popups;

pub use actions::dispatch_action;
pub use main::handle_main_input;
pub use mouse::handle_mouse_event;
pub use popups::{handle_form_input, handle_help_input};
