//! Page-level composition. A single page assembles every section.

pub mod home;
