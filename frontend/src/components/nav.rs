use yew::prelude::*;

use crate::components::icon::{Icon, IconSvg};
use crate::content::{NAV_ITEMS, SECTION_HOME};
use crate::hooks::PageHandle;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub page: PageHandle,
}

/// Thin bar across the top whose fill follows scroll progress.
#[function_component(ProgressBar)]
pub fn progress_bar(props: &NavProps) -> Html {
    let progress = props.page.state().scroll_progress_ratio;
    html! {
        <div
            class="scroll-progress"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow={format!("{:.0}", progress * 100.0)}
            style={format!("transform: scaleX({});", progress)}
        />
    }
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let page = &props.page;
    let state = page.state();

    let toggle_menu = {
        let page = page.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            page.toggle_mobile_menu();
        })
    };

    let menu_buttons = |class: &'static str| -> Html {
        NAV_ITEMS
            .iter()
            .map(|item| {
                html! {
                    <button
                        key={item.target_section_id}
                        class={class}
                        onclick={page.navigate_callback(item.target_section_id)}
                    >
                        {item.label}
                    </button>
                }
            })
            .collect()
    };

    html! {
        <nav
            class={classes!("top-nav", state.is_scrolled_past_threshold.then(|| "scrolled"))}
            style={format!("opacity: {};", state.nav_opacity())}
        >
            <div class="nav-content">
                <button class="nav-logo" onclick={page.navigate_callback(SECTION_HOME)}>
                    <span class="brand-gradient">{"Papatya"}</span>
                    <span class="brand-plain">{" Taksi"}</span>
                </button>

                <div class="nav-desktop">
                    { menu_buttons("nav-link") }
                </div>

                <button
                    class="burger-menu"
                    aria-label="Menü"
                    aria-expanded={state.is_mobile_menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    <IconSvg icon={if state.is_mobile_menu_open { Icon::Close } else { Icon::Menu }} />
                </button>
            </div>

            <div class={classes!("nav-mobile", state.is_mobile_menu_open.then(|| "mobile-menu-open"))}>
                { menu_buttons("nav-mobile-link") }
            </div>

            <style>
                {r#"
                .scroll-progress {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 4px;
                    background: #f59e0b;
                    transform-origin: left;
                    z-index: 60;
                }
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: background 0.5s, box-shadow 0.5s;
                    animation: nav-drop-in 0.6s cubic-bezier(0.22, 1, 0.36, 1);
                }
                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    height: 4rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 1.5rem;
                    font-weight: 700;
                    transition: transform 0.2s;
                }
                .nav-logo:hover { transform: scale(1.05); }
                .nav-logo:active { transform: scale(0.95); }
                .brand-gradient {
                    background: linear-gradient(to right, #f59e0b, #ea580c);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .brand-plain { color: #111827; }
                .nav-desktop {
                    display: none;
                    gap: 2rem;
                    align-items: center;
                }
                .nav-link {
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-weight: 500;
                    color: #374151;
                    transition: color 0.2s, transform 0.2s;
                }
                .nav-link:hover {
                    color: #d97706;
                    transform: translateY(-2px);
                }
                .burger-menu {
                    background: none;
                    border: none;
                    padding: 0.5rem;
                    border-radius: 0.5rem;
                    cursor: pointer;
                    color: #111827;
                }
                .burger-menu .icon { width: 1.5rem; height: 1.5rem; }
                .nav-mobile {
                    background: #ffffff;
                    border-top: 1px solid #e5e7eb;
                    overflow: hidden;
                    max-height: 0;
                    opacity: 0;
                    transition: max-height 0.3s ease, opacity 0.3s ease;
                }
                .nav-mobile.mobile-menu-open {
                    max-height: 30rem;
                    opacity: 1;
                }
                .nav-mobile-link {
                    display: block;
                    width: 100%;
                    text-align: left;
                    padding: 0.75rem 1.25rem;
                    background: none;
                    border: none;
                    font-weight: 500;
                    color: #374151;
                    cursor: pointer;
                }
                .nav-mobile-link:hover {
                    color: #d97706;
                    background: #fffbeb;
                }
                @media (min-width: 768px) {
                    .nav-content { height: 5rem; padding: 0 2rem; }
                    .nav-logo { font-size: 1.875rem; }
                    .nav-desktop { display: flex; }
                    .burger-menu, .nav-mobile { display: none; }
                }
                "#}
            </style>
        </nav>
    }
}
