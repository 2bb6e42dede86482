//! Hero Section Component
//!
//! Name, headline and calls to action at the top of the home page.

use leptos::prelude::*;
use portfolio_core::data::HERO_SOCIAL_LINKS;
use portfolio_core::Route;

use crate::components::{NavLink, SocialLinks};
use crate::context::use_site_context;

#[component]
pub fn HeroSection() -> impl IntoView {
    let site = use_site_context();
    let owner = site.owner_name();

    view! {
        <section class="hero">
            <div class="hero-text">
                <h1 class="hero-name">{owner.clone()}</h1>
                <p class="hero-headline">{site.headline()}</p>
                <p class="hero-tagline">{site.tagline()}</p>

                <div class="hero-actions">
                    <NavLink route=Route::Projects class="btn btn-outline">
                        "View Projects"
                    </NavLink>
                    <NavLink route=Route::Contact class="btn btn-primary">
                        "Hire Me"
                    </NavLink>
                    <a href=site.resume_href() download="" class="btn btn-resume">
                        "Download Resume"
                    </a>
                </div>

                <SocialLinks links=HERO_SOCIAL_LINKS class="hero-social" />
            </div>

            <div class="hero-portrait">
                <img src="public/profile.jpg" alt=owner class="hero-portrait-img" />
            </div>
        </section>
    }
}
