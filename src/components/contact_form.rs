//! Contact form: client-side validation, submission lifecycle, and
//! transient result notices.
//!
//! The lifecycle itself lives in [`crate::state::form::FormController`];
//! this component holds one behind a signal, wires the inputs to it, and
//! supplies [`crate::net::contact::submit`] as the submission capability.
//! Valid input disables the submit button while the capability runs, then a
//! success or error notice shows until its dismiss timer fires. Failed
//! submissions keep the entered values for retry; successful ones clear the
//! form.

use leptos::prelude::*;

use crate::state::form::{FormController, SubmitStatus};

/// How long a result notice stays on screen.
#[cfg(feature = "hydrate")]
const NOTICE_MS: u64 = 5000;

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(FormController::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Full revalidation per attempt; prior markers are replaced
        // wholesale. No attempt starts while any field is invalid.
        let Some((snapshot, token)) = form.try_update(FormController::begin).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let request = crate::net::contact::ContactRequest {
                    name: snapshot.name,
                    email: snapshot.email,
                    subject: snapshot.subject,
                    message: snapshot.message,
                };
                let verdict = crate::net::contact::submit(&request).await;
                if let Err(reason) = &verdict {
                    log::warn!("contact submission failed: {reason}");
                }
                form.update(|f| f.settle(token, verdict));
                gloo_timers::future::sleep(std::time::Duration::from_millis(NOTICE_MS)).await;
                // Stale tokens are ignored, so this cannot clobber a newer
                // attempt started inside the notice window.
                form.update(|f| f.dismiss(token));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            // No submission capability without a browser.
            let _ = snapshot;
            form.update(|f| f.dismiss(token));
        }
    };

    let status = move || form.with(|f| f.status);
    let submitting = move || status() == SubmitStatus::Submitting;

    view! {
        <form id="contact-form" class="contact-form" on:submit=on_submit novalidate=true>
            <FieldGroup
                label="Name"
                error=Signal::derive(move || form.with(|f| f.errors.name))
            >
                <input
                    class="contact-form__input"
                    type="text"
                    name="name"
                    prop:value=move || form.with(|f| f.fields.name.clone())
                    on:input=move |ev| form.update(|f| f.fields.name = event_target_value(&ev))
                />
            </FieldGroup>

            <FieldGroup
                label="Email"
                error=Signal::derive(move || form.with(|f| f.errors.email))
            >
                <input
                    class="contact-form__input"
                    type="email"
                    name="email"
                    prop:value=move || form.with(|f| f.fields.email.clone())
                    on:input=move |ev| form.update(|f| f.fields.email = event_target_value(&ev))
                />
            </FieldGroup>

            <FieldGroup
                label="Subject"
                error=Signal::derive(move || form.with(|f| f.errors.subject))
            >
                <input
                    class="contact-form__input"
                    type="text"
                    name="subject"
                    prop:value=move || form.with(|f| f.fields.subject.clone())
                    on:input=move |ev| form.update(|f| f.fields.subject = event_target_value(&ev))
                />
            </FieldGroup>

            <FieldGroup
                label="Message"
                error=Signal::derive(move || form.with(|f| f.errors.message))
            >
                <textarea
                    class="contact-form__input contact-form__input--area"
                    name="message"
                    rows=6
                    prop:value=move || form.with(|f| f.fields.message.clone())
                    on:input=move |ev| form.update(|f| f.fields.message = event_target_value(&ev))
                ></textarea>
            </FieldGroup>

            <button
                type="submit"
                class="btn btn--primary contact-form__submit"
                prop:disabled=submitting
            >
                {move || {
                    if submitting() {
                        view! {
                            <i class="fas fa-spinner fa-spin" aria-hidden="true"></i>
                            <span>" Sending..."</span>
                        }
                            .into_any()
                    } else {
                        view! { <span>"Send Message"</span> }.into_any()
                    }
                }}
            </button>

            <Show when=move || status() == SubmitStatus::Success>
                <div class="contact-form__notice contact-form__notice--success" role="status">
                    <i class="fas fa-check-circle" aria-hidden="true"></i>
                    <p>"Thank you for your message! I'll get back to you soon."</p>
                </div>
            </Show>
            <Show when=move || status() == SubmitStatus::Error>
                <div class="contact-form__notice contact-form__notice--error" role="alert">
                    <i class="fas fa-exclamation-circle" aria-hidden="true"></i>
                    <p>"Oops! Something went wrong. Please try again later."</p>
                </div>
            </Show>
        </form>
    }
}

/// Label, input slot, and inline error for one field.
#[component]
fn FieldGroup(
    label: &'static str,
    error: Signal<Option<&'static str>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="contact-form__group"
            class=("contact-form__group--error", move || error.get().is_some())
        >
            <label class="contact-form__label">
                {label}
                {children()}
            </label>
            <span class="contact-form__error">{move || error.get().unwrap_or("")}</span>
        </div>
    }
}
