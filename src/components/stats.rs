//! Animated statistics strip.
//!
//! Each stat counts up from zero the first time it becomes half visible in
//! the viewport, and only once; re-entering the viewport later does
//! nothing. Browsers without `IntersectionObserver` simply render the
//! final values.

use leptos::prelude::*;

use crate::anim::counter::{format_grouped, split_integer};

#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section class="stats" data-aos="fade-up">
            <StatCounter value="250+" label="Projects shipped"/>
            <StatCounter value="120+" label="Happy clients"/>
            <StatCounter value="15" label="Years of practice"/>
        </section>
    }
}

/// One animated statistic. `value` is the final display text; its first run
/// of digits is what gets animated and the surrounding text renders as-is.
///
/// The value renders fully counted so the page is complete without
/// JavaScript; the client resets it to zero and counts up on first
/// visibility.
#[component]
fn StatCounter(value: &'static str, label: &'static str) -> impl IntoView {
    let (prefix, target, suffix) = split_integer(value).unwrap_or(("", 0, value));
    let shown = RwSignal::new(target);
    let node = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let installed = RwSignal::new(false);
        Effect::new(move || {
            let Some(el) = node.get() else {
                return;
            };
            if installed.get_untracked() {
                return;
            }
            installed.set(true);
            observe_once(&el, target, shown);
        });
    }

    view! {
        <div class="stats__item" node_ref=node>
            <span class="stats__value">
                {move || format!("{prefix}{}{suffix}", format_grouped(shown.get()))}
            </span>
            <span class="stats__label">{label}</span>
        </div>
    }
}

/// Watch `el` until it is at least half visible, then run the count-up
/// exactly once and stop observing.
#[cfg(feature = "hydrate")]
fn observe_once(el: &web_sys::HtmlDivElement, target: u64, shown: RwSignal<u64>) {
    use std::cell::Cell;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    let fired = Cell::new(false);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() || fired.get() {
                    continue;
                }
                fired.set(true);
                observer.unobserve(&entry.target());
                spawn_count_up(target, shown);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(0.5));

    if let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    {
        observer.observe(el);
        callback.forget();
    }
}

/// Drive the pure counter with a fixed-rate loop; the sample is clamped at
/// every step so the display never overshoots the target.
#[cfg(feature = "hydrate")]
fn spawn_count_up(target: u64, shown: RwSignal<u64>) {
    use crate::anim::counter::{Counter, STEP_MS};

    let counter = Counter::new(target);
    leptos::task::spawn_local(async move {
        let mut elapsed = 0.0;
        loop {
            shown.set(counter.sample(elapsed));
            if counter.is_done(elapsed) {
                break;
            }
            gloo_timers::future::sleep(std::time::Duration::from_millis(STEP_MS)).await;
            #[allow(clippy::cast_precision_loss)]
            {
                elapsed += STEP_MS as f64;
            }
        }
    });
}
