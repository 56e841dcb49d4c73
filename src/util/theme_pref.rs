//! Theme preference persistence and application.
//!
//! Resolution order at startup: explicit `localStorage` value, else the
//! system `prefers-color-scheme` signal, else light. Applying a theme sets
//! the `data-theme` attribute on the `<html>` element; all styling keys off
//! that attribute. Requires a browser environment; on the server every
//! operation is a no-op and reads resolve to light.

use crate::state::theme::Theme;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "theme";

/// Resolve the theme to use at startup.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return Theme::Light,
        };

        // An explicit stored choice overrides the system preference.
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                if let Some(theme) = Theme::parse(&val) {
                    return theme;
                }
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(Theme::Light, |mq| {
                if mq.matches() { Theme::Dark } else { Theme::Light }
            })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Mirror the theme into the `data-theme` document attribute.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Persist the theme. Storage failures are ignored; the attribute is still
/// the source of truth for the current page.
pub fn store_preference(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Toggle the theme, apply it, and persist the new preference.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggle();
    apply(next);
    store_preference(next);
    next
}
