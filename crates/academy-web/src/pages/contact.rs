//! Contact Section
//!
//! "Book your free consultation" form plus direct contact details.

use academy_core::ContactForm;
use leptos::prelude::*;

use crate::api;
use crate::components::{Section, SectionHeading};

pub const CONTACT_EMAIL: &str = "hello@futuremdacademy.org";
pub const CONTACT_PHONE: &str = "(123) 456-789";
pub const WEBSITE: &str = "FutureMDAcademy.org";

#[derive(Clone, Debug, PartialEq, Eq)]
enum SubmitStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let test_date = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(SubmitStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() == SubmitStatus::Sending {
            return;
        }

        let draft = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: Some(phone.get_untracked()),
            test_date: Some(test_date.get_untracked()),
            message: message.get_untracked(),
        };

        let form = match draft.validate() {
            Ok(form) => form,
            Err(e) => {
                status.set(SubmitStatus::Failed(e.user_message()));
                return;
            }
        };

        status.set(SubmitStatus::Sending);
        leptos::task::spawn_local(async move {
            match api::submit_contact(&form).await {
                Ok(()) => {
                    for field in [name, email, phone, test_date, message] {
                        field.set(String::new());
                    }
                    status.set(SubmitStatus::Sent);
                }
                Err(e) => status.set(SubmitStatus::Failed(e)),
            }
        });
    };

    let status_line = move || match status.get() {
        SubmitStatus::Idle => None,
        SubmitStatus::Sending => Some(view! { <p class="form-status">"Sending…"</p> }.into_any()),
        SubmitStatus::Sent => Some(
            view! {
                <p class="form-status success">
                    "Thanks! We'll reply within 24 hours with next steps."
                </p>
            }
            .into_any(),
        ),
        SubmitStatus::Failed(error) => {
            Some(view! { <p class="form-status error">{error}</p> }.into_any())
        }
    };

    view! {
        <Section id="contact" variant="bg-light">
            <SectionHeading
                title="Book your free consultation"
                subtitle="Tell us your target date and goals. We’ll reply within 24 hours with next steps and available times."
            />

            <div class="contact-grid">
                <form class="card contact-form" method="POST" action=api::FORM_ENDPOINT on:submit=on_submit>
                    <input required name="name" placeholder="Full name" bind:value=name />
                    <input required type="email" name="email" placeholder="Email" bind:value=email />
                    <input name="phone" placeholder="Phone (optional)" bind:value=phone />
                    <input
                        name="test_date"
                        placeholder="Target MCAT date (e.g., June 28, 2026)"
                        bind:value=test_date
                    />
                    <textarea
                        required
                        name="message"
                        rows="5"
                        placeholder="Tell us about your goals and biggest hurdles"
                        bind:value=message
                    ></textarea>
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || status.get() == SubmitStatus::Sending
                    >
                        "Request Consultation →"
                    </button>
                    {status_line}
                    <p class="fine-print">
                        "By submitting, you agree to be contacted about scheduling and services. No spam ever."
                    </p>
                </form>

                <div class="card contact-details">
                    <div class="contact-row">
                        <div class="contact-label">"Email"</div>
                        <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                    </div>
                    <div class="contact-row">
                        <div class="contact-label">"Phone"</div>
                        <a href="tel:123456789">{CONTACT_PHONE}</a>
                    </div>
                    <div class="contact-row">
                        <div class="contact-label">"Website"</div>
                        <a href=format!("https://{WEBSITE}")>{WEBSITE}</a>
                    </div>
                    <div class="contact-note">
                        "Prefer email? Send your availability and target score to "
                        <strong>{CONTACT_EMAIL}</strong>
                        " and we’ll set it up."
                    </div>
                </div>
            </div>
        </Section>
    }
}
