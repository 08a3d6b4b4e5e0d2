use log::{debug, info};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::animation;
use crate::components::nav::{Nav, ProgressBar};
use crate::config::ScrollConfig;
use crate::content::find_section;
use crate::dom::location_fragment;
use crate::hooks::use_page_controller;
use crate::sections::{
    contact::Contact, footer::Footer, gallery::Gallery, hero::Hero, location::Location,
    reviews::Reviews, services::Services,
};

#[function_component(Home)]
pub fn home() -> Html {
    let page = use_page_controller(ScrollConfig::default());

    // Replays `/#section` deep links once the sections exist.
    {
        let page = page.clone();
        use_mount(move || {
            if let Some(fragment) = location_fragment() {
                match find_section(&fragment) {
                    Some(section_id) => {
                        info!("Opening at section {}", section_id);
                        page.navigate_to_section(section_id);
                    }
                    None => debug!("Ignoring unknown fragment #{}", fragment),
                }
            }
        });
    }

    html! {
        <div class="landing-page">
            <ProgressBar page={page.clone()} />
            <Nav page={page.clone()} />

            <Hero page={page.clone()} />
            <Location />
            <Services />
            <Gallery />
            <Reviews />
            <Contact />
            <Footer />

            <style>{ animation::stylesheet() }</style>
            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #ffffff;
                    overflow-x: hidden;
                }
                .landing-page section { scroll-margin-top: 4rem; }
                .section-inner {
                    position: relative;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .location, .services, .gallery, .reviews, .contact {
                    position: relative;
                    padding: 5rem 0;
                }
                .tinted { background: linear-gradient(to bottom right, #fffbeb, #ffffff, #fff7ed); }
                .blob {
                    position: absolute;
                    border-radius: 9999px;
                    filter: blur(64px);
                    pointer-events: none;
                }
                .blob-top-right { top: 0; right: 0; width: 16rem; height: 16rem; background: rgba(253, 230, 138, 0.2); }
                .blob-bottom-left { bottom: 0; left: 0; width: 16rem; height: 16rem; background: rgba(254, 215, 170, 0.2); }
                .section-heading { text-align: center; margin-bottom: 4rem; }
                .section-eyebrow {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #d97706;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }
                .section-eyebrow .icon { width: 1.25rem; height: 1.25rem; }
                .section-heading h2 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 1.5rem;
                }
                .section-heading p {
                    font-size: 1.125rem;
                    color: #4b5563;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .section-heading.inverted h2 { color: #ffffff; }
                .section-heading.inverted p { color: #d1d5db; }
                .section-heading.inverted .section-eyebrow { color: #fbbf24; }
                .accent-button {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    background: linear-gradient(to right, #f59e0b, #d97706);
                    color: #ffffff;
                    font-weight: 600;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.75rem;
                    text-decoration: none;
                    box-shadow: 0 10px 15px -3px rgba(245, 158, 11, 0.25);
                    transition: transform 0.2s;
                }
                .accent-button:hover { transform: scale(1.02); }
                .accent-button:active { transform: scale(0.98); }
                .accent-button.wide { display: flex; padding: 1rem 1.5rem; border-radius: 1rem; }
                .accent-button .icon { width: 1.25rem; height: 1.25rem; }
                @media (min-width: 768px) {
                    .section-inner { padding: 0 2rem; }
                    .location, .services, .gallery, .reviews, .contact { padding: 8rem 0; }
                    .location { padding: 6rem 0; }
                    .section-heading h2 { font-size: 3rem; }
                    .section-heading p { font-size: 1.25rem; }
                }
                "#}
            </style>
        </div>
    }
}
