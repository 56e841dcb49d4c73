//! Root application component and startup choreography.
//!
//! Controllers initialize unconditionally and in a fixed order: theme is
//! resolved before first paint, the scroll tracker installs its single
//! window listener, and each component then reacts to the shared signals
//! independently. No controller waits on another.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::back_to_top::BackToTop;
use crate::components::loader::Loader;
use crate::components::navbar::Navbar;
use crate::pages::home::HomePage;
use crate::state::nav::NavState;
use crate::state::scroll::ScrollFrame;
use crate::state::theme::Theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and wires up the window listeners.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Shared UI state. Components communicate only through these signals.
    let theme = RwSignal::new(Theme::default());
    let nav = RwSignal::new(NavState::default());
    let scroll = RwSignal::new(ScrollFrame::default());
    let active_section = RwSignal::new(None::<String>);

    provide_context(theme);
    provide_context(nav);
    provide_context(scroll);
    provide_context(active_section);

    #[cfg(feature = "hydrate")]
    {
        // Resolve the persisted theme before anything renders against it.
        let initial = crate::util::theme_pref::read_preference();
        crate::util::theme_pref::apply(initial);
        theme.set(initial);

        crate::util::listeners::install_scroll_tracker(scroll, active_section);
        log_capabilities();
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text="Folio — Design & Engineering Studio"/>

        <Loader/>
        <Navbar/>
        <HomePage/>
        <BackToTop/>
    }
}

/// One startup line recording which optional browser features are present.
#[cfg(feature = "hydrate")]
fn log_capabilities() {
    use wasm_bindgen::JsValue;

    let Some(window) = web_sys::window() else {
        return;
    };
    let observers = js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
        .unwrap_or(false);
    if observers {
        log::info!("modern browser detected - all features enabled");
    } else {
        log::warn!("legacy browser detected - counters render statically");
    }
}
