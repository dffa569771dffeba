//! Complete screens composed from the widget draw functions.

pub mod status;

pub use status::{draw_status_message, draw_status_screen};
