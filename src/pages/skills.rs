use leptos::prelude::*;
use portfolio_core::data::SKILLS;
use portfolio_core::{FilterState, Skill};

use crate::components::{CategoryFilter, NoItemsFound, PageHeader};

#[component]
fn SkillCard(skill: Skill) -> impl IntoView {
    view! {
        <div class="card skill-card">
            <div class="card-top">
                <h3 class="card-title">{skill.name}</h3>
                <span class="skill-level">{skill.level}</span>
            </div>
            <div
                class="proficiency-bar"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=skill.proficiency.to_string()
            >
                <div class="proficiency-fill" style=format!("width: {}%", skill.proficiency)></div>
            </div>
        </div>
    }
}

#[component]
pub fn SkillsPage() -> impl IntoView {
    let filter = RwSignal::new(FilterState::new());
    let visible = Memo::new(move |_| filter.with(|f| SKILLS.visible(f)));

    view! {
        <div class="page skills-page">
            <PageHeader
                title="Technical Skills"
                subtitle="Expertise in Cybersecurity, Programming, and Offensive Technologies"
            />

            <CategoryFilter categories=SKILLS.categories filter=filter />

            <div class="card-grid">
                <For
                    each=move || visible.get()
                    key=|skill| skill.name
                    children=move |skill| view! { <SkillCard skill=skill /> }
                />
            </div>

            <Show when=move || visible.with(|v| v.is_empty())>
                <NoItemsFound noun="skills" />
            </Show>
        </div>
    }
}
