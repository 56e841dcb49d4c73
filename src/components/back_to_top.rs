//! Floating back-to-top control, visible once the page is scrolled past
//! the hide threshold.

use leptos::prelude::*;

use crate::state::scroll::ScrollFrame;

#[component]
pub fn BackToTop() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollFrame>>();

    view! {
        <button
            class="back-to-top"
            class=("back-to-top--show", move || scroll.get().back_to_top)
            on:click=move |_| crate::util::scroll_to::scroll_to_top()
            aria-label="Back to top"
        >
            <i class="fas fa-arrow-up" aria-hidden="true"></i>
        </button>
    }
}
