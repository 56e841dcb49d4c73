//! Fixed top navigation bar.
//!
//! Three independent behaviors share this component: the scroll-derived
//! compact/hidden look, the mobile menu toggle with its body scroll lock,
//! and the theme toggle button. Link highlighting follows the shared
//! active-section signal.

use leptos::prelude::*;

use crate::state::nav::NavState;
use crate::state::scroll::ScrollFrame;
use crate::state::theme::Theme;
use crate::util::dom::set_body_overflow;

/// Fragment/label pairs for the menu, in document order.
const LINKS: [(&str, &str); 4] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let nav = expect_context::<RwSignal<NavState>>();
    let scroll = expect_context::<RwSignal<ScrollFrame>>();

    let menu_open = move || nav.get().menu_open;

    let on_toggle = move |_| {
        nav.update(NavState::toggle);
        set_body_overflow(nav.get_untracked().body_overflow());
    };

    let on_theme = move |_| {
        let next = crate::util::theme_pref::toggle(theme.get_untracked());
        theme.set(next);
    };

    view! {
        <nav
            id="navbar"
            class="navbar"
            class=("navbar--scrolled", move || scroll.get().compact)
            class=("navbar--hidden", move || scroll.get().hidden)
        >
            <a
                href="#home"
                class="navbar__brand"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    crate::util::scroll_to::scroll_to_fragment("#home");
                }
            >
                "Folio"
            </a>

            <button
                class="navbar__toggle"
                class=("navbar__toggle--active", menu_open)
                on:click=on_toggle
                aria-label="Toggle navigation menu"
                aria-expanded=move || menu_open().to_string()
            >
                <span class="navbar__bar"></span>
                <span class="navbar__bar"></span>
                <span class="navbar__bar"></span>
            </button>

            <ul class="navbar__menu" class=("navbar__menu--open", menu_open)>
                {LINKS
                    .into_iter()
                    .map(|(fragment, label)| view! { <NavLink fragment label/> })
                    .collect::<Vec<_>>()}
            </ul>

            <button class="navbar__theme" on:click=on_theme aria-label="Toggle color theme">
                <i class=move || theme.get().icon_class() aria-hidden="true"></i>
            </button>
        </nav>
    }
}

/// One menu entry. Clicking smooth-scrolls to the section and always
/// dismisses the mobile menu.
#[component]
fn NavLink(fragment: &'static str, label: &'static str) -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let active_section = expect_context::<RwSignal<Option<String>>>();

    let is_active = move || {
        active_section.get().as_deref() == Some(fragment.trim_start_matches('#'))
    };

    let on_click = move |ev: leptos::ev::MouseEvent| {
        // A bare "#" keeps its default no-op behavior.
        if fragment != "#" {
            ev.prevent_default();
            crate::util::scroll_to::scroll_to_fragment(fragment);
        }
        nav.update(NavState::close);
        set_body_overflow("visible");
    };

    view! {
        <li class="navbar__item">
            <a
                href=fragment
                class="navbar__link"
                class=("navbar__link--active", is_active)
                on:click=on_click
            >
                {label}
            </a>
        </li>
    }
}
