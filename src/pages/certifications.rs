//! Certifications Page
//!
//! Status filter plus a detail modal driven by a `Selection`.

use leptos::prelude::*;
use portfolio_core::data::CERTIFICATIONS;
use portfolio_core::{Certification, FilterState, Selection};

use crate::components::{badge_class, CategoryFilter, CertificationModal, NoItemsFound, PageHeader};

#[component]
fn CertificationCard(
    cert: Certification,
    selection: RwSignal<Selection<Certification>>,
) -> impl IntoView {
    view! {
        <div class="card certification-card" on:click=move |_| selection.update(|s| s.select(cert))>
            <div class="card-top">
                <h3 class="card-title">{cert.title}</h3>
                <span class=badge_class(cert.status)>{cert.status}</span>
            </div>
            <p class="card-meta">{cert.issuer} " · " {cert.date}</p>
            <p class="card-description">{cert.description}</p>
            <button type="button" class="card-more">"View Details"</button>
        </div>
    }
}

#[component]
pub fn CertificationsPage() -> impl IntoView {
    let filter = RwSignal::new(FilterState::new());
    let selection = RwSignal::new(Selection::<Certification>::default());
    let visible = Memo::new(move |_| filter.with(|f| CERTIFICATIONS.visible(f)));

    view! {
        <div class="page certifications-page">
            <PageHeader
                title="Professional Certifications"
                subtitle="Verified credentials in offensive and defensive security"
            />

            <CategoryFilter categories=CERTIFICATIONS.categories filter=filter />

            <div class="card-grid">
                <For
                    each=move || visible.get()
                    key=|cert| cert.title
                    children=move |cert| view! {
                        <CertificationCard cert=cert selection=selection />
                    }
                />
            </div>

            <Show when=move || visible.with(|v| v.is_empty())>
                <NoItemsFound noun="certifications" />
            </Show>

            <CertificationModal selection=selection />
        </div>
    }
}
