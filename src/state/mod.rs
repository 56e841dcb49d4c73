//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`theme`, `nav`, `scroll`, `form`) so individual
//! components can depend on small focused models. Everything in here is plain
//! data with no DOM access, so it compiles and tests natively; the browser
//! wiring lives in `util` and the components.

pub mod form;
pub mod nav;
pub mod scroll;
pub mod theme;
