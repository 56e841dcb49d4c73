//! Small DOM helpers shared by the loader and navigation controllers.

/// Set the body `overflow` style, locking or restoring page scroll.
pub fn set_body_overflow(value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let _ = body.style().set_property("overflow", value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = value;
    }
}
