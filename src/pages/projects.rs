use leptos::prelude::*;
use portfolio_core::data::PROJECTS;
use portfolio_core::{FilterState, Project};

use crate::components::{CategoryFilter, NoItemsFound, PageHeader};

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let external = |href: &'static str, label: &'static str| view! {
        <a href=href target="_blank" rel="noopener noreferrer" class="card-link">{label}</a>
    };

    view! {
        <div class="card project-card">
            <div class="card-links">
                {project.github_link.map(|href| external(href, "GitHub"))}
                {project.live_link.map(|href| external(href, "Live"))}
            </div>
            <h3 class="card-title">{project.title}</h3>
            <p class="card-description">{project.description}</p>
            <div class="chips">
                {project.technologies.iter().map(|tech| view! {
                    <span class="chip">{*tech}</span>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let filter = RwSignal::new(FilterState::new());
    let visible = Memo::new(move |_| filter.with(|f| PROJECTS.visible(f)));

    view! {
        <div class="page projects-page">
            <PageHeader
                title="Cutting-Edge Security Projects"
                subtitle="Innovative cybersecurity solutions pushing technological boundaries"
            />

            <CategoryFilter categories=PROJECTS.categories filter=filter />

            <div class="card-grid">
                <For
                    each=move || visible.get()
                    key=|project| project.title
                    children=move |project| view! { <ProjectCard project=project /> }
                />
            </div>

            <Show when=move || visible.with(|v| v.is_empty())>
                <NoItemsFound noun="projects" />
            </Show>
        </div>
    }
}
