//! Hero section: typed title, parallax background pattern, call to action.

use leptos::prelude::*;

use crate::anim::typewriter::Typewriter;
use crate::state::scroll::ScrollFrame;

const TITLE: &str = "Designing calm, fast software.";

#[component]
pub fn Hero() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollFrame>>();

    // Characters currently visible; the typing loop advances this.
    let visible_chars = RwSignal::new(0usize);

    #[cfg(feature = "hydrate")]
    {
        use crate::anim::typewriter::{START_DELAY_MS, TICK_MS};

        let title = Typewriter::new(TITLE);
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(START_DELAY_MS)).await;
            let mut elapsed = 0;
            loop {
                visible_chars.set(title.chars_at(elapsed));
                if title.is_done(elapsed) {
                    break;
                }
                gloo_timers::future::sleep(std::time::Duration::from_millis(TICK_MS)).await;
                elapsed += TICK_MS;
            }
        });
    }

    let typed = {
        let title = Typewriter::new(TITLE);
        move || title.prefix(visible_chars.get()).to_owned()
    };

    let pattern_transform = move || crate::anim::parallax::transform(scroll.get().offset);

    view! {
        <section id="home" class="hero">
            <div class="hero__pattern" aria-hidden="true" style:transform=pattern_transform></div>
            <div class="hero__content">
                <p class="hero__kicker">"Independent design & engineering studio"</p>
                <h1 class="hero__title">{typed}</h1>
                <p class="hero__subtitle" data-aos="fade-up">
                    "Websites, products, and identities for people who care about the details."
                </p>
                <div class="hero__actions" data-aos="fade-up">
                    <a
                        href="#projects"
                        class="btn btn--primary"
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.prevent_default();
                            crate::util::scroll_to::scroll_to_fragment("#projects");
                        }
                    >
                        "See the work"
                    </a>
                    <a
                        href="#contact"
                        class="btn"
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.prevent_default();
                            crate::util::scroll_to::scroll_to_fragment("#contact");
                        }
                    >
                        "Get in touch"
                    </a>
                </div>
            </div>
        </section>
    }
}
