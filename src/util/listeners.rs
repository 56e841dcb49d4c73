//! Window-level event wiring.
//!
//! A single scroll listener feeds the shared [`ScrollFrame`] and
//! active-section signals; every component that reacts to scroll derives
//! from those, so the raw event is sampled exactly once per fire. Section
//! geometry is cached at install time and refreshed by a debounced resize
//! listener instead of being re-measured on every scroll event.

use leptos::prelude::RwSignal;

use crate::state::scroll::ScrollFrame;
#[cfg(feature = "hydrate")]
use crate::state::scroll::SectionBounds;

/// Trailing-edge wait for the resize listener.
#[cfg(feature = "hydrate")]
const RESIZE_DEBOUNCE_MS: u32 = 100;

/// Install the scroll and resize listeners. Both stay registered for the
/// lifetime of the page, so their closures are intentionally leaked.
pub fn install_scroll_tracker(
    scroll: RwSignal<ScrollFrame>,
    active_section: RwSignal<Option<String>>,
) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::Set;
        use std::cell::RefCell;
        use std::rc::Rc;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        use crate::state::scroll::{ScrollTracker, active_section as section_at};

        let Some(window) = web_sys::window() else {
            return;
        };

        let sections = Rc::new(RefCell::new(measure_sections()));

        {
            let sections = Rc::clone(&sections);
            let refresh = crate::util::debounce::browser::debounce(RESIZE_DEBOUNCE_MS, move || {
                *sections.borrow_mut() = measure_sections();
            });
            let on_resize = Closure::<dyn Fn()>::new(refresh);
            let _ = window
                .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
            on_resize.forget();
        }

        let mut tracker = ScrollTracker::new();
        let on_scroll = Closure::<dyn FnMut()>::new(move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            let offset = window.page_y_offset().unwrap_or(0.0);
            scroll.set(tracker.sample(offset));
            let bounds = sections.borrow();
            active_section.set(section_at(offset, &bounds).map(ToOwned::to_owned));
        });
        let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        on_scroll.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (scroll, active_section);
    }
}

/// Measure every `section[id]` in document order.
#[cfg(feature = "hydrate")]
fn measure_sections() -> Vec<SectionBounds> {
    use wasm_bindgen::JsCast;

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = doc.query_selector_all("section[id]") else {
        return Vec::new();
    };

    let mut sections = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else { continue };
        let Ok(el) = node.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        sections.push(SectionBounds::new(
            el.id(),
            f64::from(el.offset_top()),
            f64::from(el.offset_height()),
        ));
    }
    sections
}
