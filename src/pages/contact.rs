//! Contact Page
//!
//! Approach panel, social links and the contact form. The form has no
//! backend: submissions go to [`ConsoleEcho`] and the fields are cleared.

use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use portfolio_core::data::CONTACT_SOCIAL_LINKS;
use portfolio_core::{ConsoleEcho, FormField, FormFields, SubmissionSink};

use crate::components::{PageHeader, SocialLinks};

/// Labelled input bound to one form field
#[component]
fn FormInput(field: FormField, form: RwSignal<FormFields>) -> impl IntoView {
    let value = move || form.with(|f| f.get(field).to_string());
    let on_input = move |ev: Event| form.update(|f| f.set(field, event_target_value(&ev)));

    let control = match field.input_type() {
        Some(kind) => view! {
            <input
                type=kind
                id=field.name()
                name=field.name()
                class="form-control"
                required=true
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
        None => view! {
            <textarea
                id=field.name()
                name=field.name()
                class="form-control"
                rows=4
                required=true
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any(),
    };

    view! {
        <div class="form-group">
            <label for=field.name() class="form-label">{field.label()}</label>
            {control}
        </div>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(FormFields::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(submission) = form.try_update(FormFields::submit) else {
            return;
        };
        if let Err(e) = ConsoleEcho.deliver(&submission) {
            tracing::error!("❌ Contact form echo failed: {}", e);
        }
    };

    view! {
        <div class="page contact-page">
            <PageHeader
                title="Get in Touch"
                subtitle="Interested in cybersecurity collaboration or professional opportunities?"
            />

            <div class="contact-grid">
                <div class="contact-approach">
                    <h2>"Contact Approach"</h2>
                    <div class="contact-point">
                        <p class="contact-point-title">"Professional Communication"</p>
                        <p>"Preferred contact through professional networks"</p>
                    </div>
                    <div class="contact-point">
                        <p class="contact-point-title">"Communication Strategy"</p>
                        <p>"Secure communication channels preferred"</p>
                    </div>
                    <SocialLinks links=CONTACT_SOCIAL_LINKS class="contact-social" />
                </div>

                <form class="contact-form" on:submit=on_submit>
                    {FormField::ALL.into_iter().map(|field| view! {
                        <FormInput field=field form=form />
                    }).collect_view()}
                    <button type="submit" class="btn btn-primary">"Send Message"</button>
                </form>
            </div>
        </div>
    }
}
