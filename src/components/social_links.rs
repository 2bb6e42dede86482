use leptos::prelude::*;
use portfolio_core::SocialLink;

/// External profile links, opened in a new tab
#[component]
pub fn SocialLinks(
    links: &'static [SocialLink],
    #[prop(into)] class: String,
) -> impl IntoView {
    view! {
        <div class=class>
            {links.iter().map(|link| view! {
                <a
                    href=link.url
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=link.label
                    title=link.label
                    class="social-link"
                >
                    {link.label}
                </a>
            }).collect_view()}
        </div>
    }
}
