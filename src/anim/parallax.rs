#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

/// Hero pattern moves at half the scroll speed, in the opposite direction.
const RATE: f64 = -0.5;

/// Vertical offset of the background pattern for a given scroll position.
pub fn offset(scroll: f64) -> f64 {
    scroll * RATE
}

/// CSS transform applied to the pattern element.
pub fn transform(scroll: f64) -> String {
    // Folds the negative zero a zero scroll produces, so a still page
    // renders `0px` rather than `-0px`.
    format!("translateY({}px)", offset(scroll) + 0.0)
}
