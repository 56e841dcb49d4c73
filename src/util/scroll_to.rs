//! Smooth in-page scrolling with fixed-header compensation.

/// Height of the fixed navbar, subtracted from every scroll target.
pub const HEADER_OFFSET: f64 = 80.0;

/// Smoothly scroll the viewport to a vertical position.
pub fn scroll_to(top: f64) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = top;
    }
}

/// Back-to-top control.
pub fn scroll_to_top() {
    scroll_to(0.0);
}

/// Scroll to the element a fragment link (`"#about"`) points at,
/// compensating for the fixed header. A bare `#` or an unknown fragment is
/// a no-op.
pub fn scroll_to_fragment(fragment: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let id = fragment.trim_start_matches('#');
        if id.is_empty() {
            return;
        }
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(el) = doc.get_element_by_id(id) else {
            return;
        };
        if let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() {
            scroll_to(f64::from(el.offset_top()) - HEADER_OFFSET);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = fragment;
    }
}
