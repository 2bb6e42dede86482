//! Category Filter Component
//!
//! Row of category buttons driving a page's [`FilterState`].

use leptos::prelude::*;
use portfolio_core::FilterState;

/// Category buttons for a listing page
#[component]
pub fn CategoryFilter(
    categories: &'static [&'static str],
    filter: RwSignal<FilterState>,
) -> impl IntoView {
    view! {
        <div class="category-filter">
            {categories.iter().map(|category| {
                let category = *category;
                let is_selected = move || filter.with(|f| f.is_active(category));
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| filter.update(|f| f.select_category(category))
                    >
                        {category}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Fallback when the active category matches nothing
#[component]
pub fn NoItemsFound(noun: &'static str) -> impl IntoView {
    view! {
        <div class="no-items">
            <p>{format!("No {} found in this category.", noun)}</p>
        </div>
    }
}
