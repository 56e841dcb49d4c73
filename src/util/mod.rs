//! Browser glue: preference persistence, window-level listeners, and small
//! DOM helpers. Everything that touches `web_sys` is gated behind the
//! `hydrate` feature and degrades to a no-op elsewhere.

pub mod debounce;
pub mod dom;
pub mod listeners;
pub mod scroll_to;
pub mod theme_pref;
