//! The single page: hero, about, projects, stats, and contact sections in
//! document order. Section `id`s are what the scroll tracker measures for
//! active-link highlighting.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::hero::Hero;
use crate::components::stats::Stats;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="page">
            <Hero/>

            <section id="about" class="section about">
                <div class="section__inner">
                    <h2 class="section__title" data-aos="fade-up">"About"</h2>
                    <p class="about__lead" data-aos="fade-up">
                        "A small studio focused on the web: product design, engineering, "
                        "and the unglamorous work in between that makes things feel solid."
                    </p>
                    <ul class="about__skills" data-aos="fade-up">
                        <li>"Product & interaction design"</li>
                        <li>"Frontend engineering"</li>
                        <li>"Design systems"</li>
                        <li>"Performance audits"</li>
                    </ul>
                </div>
            </section>

            <section id="projects" class="section projects">
                <div class="section__inner">
                    <h2 class="section__title" data-aos="fade-up">"Selected work"</h2>
                    <div class="projects__grid">
                        <ProjectCard
                            title="Tidelight"
                            blurb="Marketing site and design system for a coastal energy startup."
                            tags="Design · Build"
                        />
                        <ProjectCard
                            title="Ledgerline"
                            blurb="Dashboard redesign that cut support tickets by a third."
                            tags="Product · Frontend"
                        />
                        <ProjectCard
                            title="Fieldnotes"
                            blurb="Offline-first note-taking app for research crews."
                            tags="PWA · Performance"
                        />
                    </div>
                    <Stats/>
                </div>
            </section>

            <section id="contact" class="section contact">
                <div class="section__inner">
                    <h2 class="section__title" data-aos="fade-up">"Get in touch"</h2>
                    <p class="contact__lead" data-aos="fade-up">
                        "Tell me about your project and I'll reply within two working days."
                    </p>
                    <ContactForm/>
                </div>
            </section>

            <footer class="footer">
                <p>"© 2026 Folio Studio. Built with Rust."</p>
            </footer>
        </main>
    }
}

/// One portfolio card.
#[component]
fn ProjectCard(title: &'static str, blurb: &'static str, tags: &'static str) -> impl IntoView {
    view! {
        <article class="projects__card" data-aos="fade-up">
            <h3 class="projects__card-title">{title}</h3>
            <p class="projects__card-blurb">{blurb}</p>
            <span class="projects__card-tags">{tags}</span>
        </article>
    }
}
