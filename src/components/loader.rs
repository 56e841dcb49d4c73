//! Full-page loading overlay shown until the site is ready.
//!
//! One-shot sequence per page load: wait for the window `load` event (or
//! observe that it already fired), hold the overlay for a fixed beat, then
//! reveal the page, restore body scroll, and hand off to the optional AOS
//! reveal-on-scroll library.

use leptos::prelude::*;

/// Delay between window load and the overlay dismissal.
#[cfg(feature = "hydrate")]
const REVEAL_DELAY_MS: u64 = 500;

/// Loading overlay. The `loader--hidden` class drives the CSS fade-out.
#[component]
pub fn Loader() -> impl IntoView {
    let hidden = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        crate::util::dom::set_body_overflow("hidden");
        leptos::task::spawn_local(async move {
            wait_for_window_load().await;
            gloo_timers::future::sleep(std::time::Duration::from_millis(REVEAL_DELAY_MS)).await;
            hidden.set(true);
            crate::util::dom::set_body_overflow("visible");
            init_reveal_library();
        });
    }

    view! {
        <div class="loader" class=("loader--hidden", move || hidden.get())>
            <div class="loader__spinner" aria-hidden="true"></div>
        </div>
    }
}

/// Resolve once every page resource has loaded. If hydration ran after the
/// `load` event already fired, resolve immediately.
#[cfg(feature = "hydrate")]
async fn wait_for_window_load() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };
    if window
        .document()
        .is_some_and(|d| d.ready_state() == "complete")
    {
        return;
    }

    let (tx, rx) = futures::channel::oneshot::channel::<()>();
    let mut tx = Some(tx);
    let on_load = Closure::<dyn FnMut()>::new(move || {
        if let Some(tx) = tx.take() {
            let _ = tx.send(());
        }
    });
    let _ = window.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
    on_load.forget();

    let _ = rx.await;
}

/// Initialize the AOS reveal library if the host page loaded it. Absence is
/// not an error; the content simply renders without entrance animations.
#[cfg(feature = "hydrate")]
fn init_reveal_library() {
    use js_sys::{Function, Object, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    let Some(window) = web_sys::window() else {
        return;
    };
    let aos = match Reflect::get(&window, &JsValue::from_str("AOS")) {
        Ok(v) if !v.is_undefined() => v,
        _ => {
            log::info!("AOS not present, skipping reveal animations");
            return;
        }
    };

    let config = Object::new();
    let _ = Reflect::set(&config, &JsValue::from_str("duration"), &JsValue::from(800));
    let _ = Reflect::set(
        &config,
        &JsValue::from_str("easing"),
        &JsValue::from_str("ease-out"),
    );
    let _ = Reflect::set(&config, &JsValue::from_str("once"), &JsValue::from(true));
    let _ = Reflect::set(&config, &JsValue::from_str("offset"), &JsValue::from(100));

    if let Ok(init) = Reflect::get(&aos, &JsValue::from_str("init")) {
        if let Some(init) = init.dyn_ref::<Function>() {
            let _ = init.call1(&aos, &config);
        }
    }
}
