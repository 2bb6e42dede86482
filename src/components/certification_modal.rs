//! Certification Detail Modal
//!
//! Rendered only while the selection is `Open`. Backdrop clicks close it;
//! panel clicks stop at the panel.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use portfolio_core::{Certification, ClickTarget, Selection};

/// CSS class of the status badge, e.g. "badge badge-completed"
pub fn badge_class(status: &str) -> String {
    format!("badge badge-{}", status.to_lowercase())
}

#[component]
pub fn CertificationModal(selection: RwSignal<Selection<Certification>>) -> impl IntoView {
    let current = move || selection.with(|s| s.current().copied());

    view! {
        {move || current().map(|cert| view! {
            <div
                class="modal-backdrop"
                on:click=move |_| {
                    selection.maybe_update(|s| s.click(ClickTarget::Backdrop));
                }
            >
                <div
                    class="modal-panel"
                    role="dialog"
                    aria-modal="true"
                    on:click=move |ev: MouseEvent| {
                        ev.stop_propagation();
                        selection.maybe_update(|s| s.click(ClickTarget::Panel));
                    }
                >
                    <button
                        class="modal-close"
                        aria-label="Close"
                        on:click=move |ev: MouseEvent| {
                            ev.stop_propagation();
                            selection.update(|s| s.close());
                        }
                    >
                        "✕"
                    </button>

                    <h2 class="modal-title">{cert.title}</h2>
                    <p class="modal-meta">{cert.issuer} " · " {cert.date}</p>
                    <span class=badge_class(cert.status)>{cert.status}</span>

                    <p class="modal-description">{cert.description}</p>

                    <h3>"Key Details"</h3>
                    <ul class="modal-details">
                        {cert.details.iter().map(|detail| view! { <li>{*detail}</li> }).collect_view()}
                    </ul>

                    <a
                        href=cert.verification_link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-primary"
                    >
                        "Verify Credential"
                    </a>
                </div>
            </div>
        })}
    }
}
