use leptos::prelude::*;
use portfolio_core::data::HOME_EXPERTISE;

use crate::components::HeroSection;
use crate::context::use_site_context;

#[component]
pub fn HomePage() -> impl IntoView {
    let site = use_site_context();

    view! {
        <div class="page home-page">
            <HeroSection />

            <section class="expertise">
                <div class="card-grid three">
                    {HOME_EXPERTISE.iter().map(|area| view! {
                        <div class="card expertise-card">
                            <h3 class="card-title">{area.title}</h3>
                            <p class="card-description">{area.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section class="about-preview">
                <h2>"About Me"</h2>
                <p>{site.about()}</p>
                <p class="about-highlight">"OSCP Certification Journey"</p>
            </section>
        </div>
    }
}
