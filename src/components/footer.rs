//! Footer Component
//!
//! Bio, expertise summary, social links and copyright line.

use leptos::prelude::*;
use portfolio_core::data::{FOOTER_EXPERTISE, FOOTER_SOCIAL_LINKS, VERIFIED_PLATFORMS};
use portfolio_core::Route;

use crate::components::{NavLink, SocialLinks};
use crate::context::use_site_context;

#[component]
pub fn Footer() -> impl IntoView {
    let site = use_site_context();
    let owner = site.owner_name();
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="footer-grid">
                // About
                <div class="footer-about">
                    <h3 class="footer-owner">{owner.clone()}</h3>
                    <p class="footer-bio">{site.bio()}</p>
                    <NavLink route=Route::Contact class="footer-cta">
                        "Collaborate on Security"
                    </NavLink>
                </div>

                // Expertise
                <div class="footer-expertise">
                    <h4>"Cybersecurity Expertise"</h4>
                    <ul>
                        {FOOTER_EXPERTISE.iter().map(|area| view! {
                            <li class="footer-expertise-item">
                                <h5>{area.title}</h5>
                                <p>{area.description}</p>
                            </li>
                        }).collect_view()}
                    </ul>
                </div>

                // Connect
                <div class="footer-connect">
                    <h4>"Connect & Verify"</h4>
                    <SocialLinks links=FOOTER_SOCIAL_LINKS class="footer-social" />
                    <div class="footer-verified">
                        <h5>"Verified Platforms"</h5>
                        <ul>
                            {VERIFIED_PLATFORMS.iter().map(|platform| view! {
                                <li>{*platform}</li>
                            }).collect_view()}
                        </ul>
                    </div>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{format!("© {} {}. All Rights Reserved.", year, owner)}</p>
            </div>
        </footer>
    }
}
