//! UI components. Each component owns one slice of visible state and is
//! wired to the shared signals provided by [`crate::app::App`].

pub mod back_to_top;
pub mod contact_form;
pub mod hero;
pub mod loader;
pub mod navbar;
pub mod stats;
