//! Timer-driven cosmetic animations, modeled as pure step functions
//! `(elapsed) -> rendered value` so the driving loops stay trivial and the
//! behavior is testable without real timers.

pub mod counter;
pub mod parallax;
pub mod typewriter;
