use yew::prelude::*;

use crate::animation::RevealPreset;
use crate::components::icon::{Icon, IconSvg};
use crate::components::reveal::{Reveal, RevealGroup, RevealItem, Trigger};
use crate::content::{PHONE_NUMBERS, PRIMARY_PHONE, SECTION_HOME, SECTION_LOCATION};
use crate::hooks::PageHandle;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub page: PageHandle,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <section id={SECTION_HOME} class="hero">
            <div class="hero-background"></div>
            <div class="blob blob-top-right"></div>
            <div class="blob blob-bottom-left"></div>

            <div class="hero-inner">
                <RevealGroup trigger={Trigger::OnMount} class="hero-text">
                    <RevealItem index={0}>
                        <div class="hero-badge">
                            <IconSvg icon={Icon::Clock} />
                            <span>{"7/24 Hizmetinizdeyiz"}</span>
                        </div>
                    </RevealItem>
                    <RevealItem index={1}>
                        <h1 class="hero-title">
                            <span class="brand-gradient">{"Papatya"}</span>
                            <br />
                            {"Taksi"}
                        </h1>
                    </RevealItem>
                    <RevealItem index={2}>
                        <p class="hero-subtitle">
                            {"Çayırova ve çevresinde güvenli, konforlu ve hızlı taksi hizmeti. Profesyonel sürücülerimizle yanınızdayız."}
                        </p>
                    </RevealItem>
                    <RevealItem index={3}>
                        <div class="hero-cta-group">
                            <a href={PRIMARY_PHONE.href()} class="hero-cta primary">
                                <IconSvg icon={Icon::Phone} />
                                {"Hemen Ara"}
                            </a>
                            <button
                                class="hero-cta secondary"
                                onclick={props.page.navigate_callback(SECTION_LOCATION)}
                            >
                                <IconSvg icon={Icon::Navigation} />
                                {"Konum"}
                            </button>
                        </div>
                    </RevealItem>
                </RevealGroup>

                <Reveal preset={RevealPreset::ScaleIn} trigger={Trigger::OnMount} class="hero-card-wrap">
                    <div class="hero-card-tilt"></div>
                    <div class="hero-card">
                        <div class="hero-car-badge">
                            <IconSvg icon={Icon::Car} />
                        </div>
                        <h3>{"Hızlı ve Güvenli"}</h3>
                        <p class="hero-card-subtitle">{"7/24 kesintisiz hizmet"}</p>
                        <div class="hero-phones">
                            { for PHONE_NUMBERS.iter().map(|phone| html! {
                                <a key={phone.number} href={phone.href()} class="hero-phone">
                                    <IconSvg icon={Icon::Phone} />
                                    <span>{phone.number}</span>
                                </a>
                            }) }
                        </div>
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    padding-top: 5rem;
                    overflow: hidden;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom right, #fffbeb, #ffffff, #fff7ed);
                }
                .hero .blob-top-right { top: 5rem; right: 0; width: 24rem; height: 24rem; background: rgba(253, 230, 138, 0.3); }
                .hero .blob-bottom-left { bottom: 0; left: 0; width: 18rem; height: 18rem; background: rgba(254, 215, 170, 0.3); }
                .hero-inner {
                    position: relative;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 3rem 1rem;
                    display: grid;
                    gap: 3rem;
                    align-items: center;
                }
                .hero-text { text-align: center; }
                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: #fef3c7;
                    color: #92400e;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 500;
                    margin-bottom: 1.5rem;
                }
                .hero-badge .icon { width: 1rem; height: 1rem; }
                .hero-title {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #111827;
                    line-height: 1.15;
                    margin-bottom: 1.5rem;
                }
                .hero-subtitle {
                    font-size: 1.125rem;
                    color: #4b5563;
                    max-width: 36rem;
                    margin: 0 auto 2rem;
                }
                .hero-cta-group {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    justify-content: center;
                }
                .hero-cta {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    font-weight: 600;
                    font-size: 1rem;
                    padding: 1rem 2rem;
                    border-radius: 1rem;
                    cursor: pointer;
                    text-decoration: none;
                    transition: transform 0.2s;
                }
                .hero-cta:hover { transform: scale(1.05) translateY(-2px); }
                .hero-cta:active { transform: scale(0.95); }
                .hero-cta .icon { width: 1.25rem; height: 1.25rem; }
                .hero-cta.primary {
                    background: linear-gradient(to right, #f59e0b, #d97706);
                    color: #ffffff;
                    border: none;
                    box-shadow: 0 20px 25px -5px rgba(245, 158, 11, 0.25);
                }
                .hero-cta.secondary {
                    background: #ffffff;
                    color: #111827;
                    border: 2px solid #e5e7eb;
                }
                .hero-card-wrap { position: relative; }
                .hero-card-tilt {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom right, #fbbf24, #f97316);
                    border-radius: 1.5rem;
                    opacity: 0.2;
                    animation: hero-tilt 6s ease-in-out infinite;
                }
                .hero-card {
                    position: relative;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(4px);
                    padding: 1.5rem;
                    border-radius: 1.5rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    text-align: center;
                }
                .hero-car-badge {
                    width: 6rem;
                    height: 6rem;
                    margin: 0 auto 1.5rem;
                    border-radius: 9999px;
                    background: linear-gradient(to bottom right, #fbbf24, #d97706);
                    color: #ffffff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    animation: hero-pulse 3s ease-in-out infinite;
                }
                .hero-car-badge .icon { width: 3rem; height: 3rem; }
                .hero-card h3 { font-size: 1.5rem; font-weight: 700; color: #111827; margin-bottom: 0.5rem; }
                .hero-card-subtitle { color: #4b5563; margin-bottom: 2rem; }
                .hero-phones { display: flex; flex-direction: column; gap: 0.75rem; }
                .hero-phone {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    background: #f9fafb;
                    padding: 1rem;
                    border-radius: 1rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #111827;
                    text-decoration: none;
                    transition: background 0.2s, transform 0.2s;
                }
                .hero-phone:hover { background: #fffbeb; transform: translateX(5px); }
                .hero-phone .icon { width: 1.25rem; height: 1.25rem; color: #d97706; }
                @media (min-width: 640px) {
                    .hero-cta-group { flex-direction: row; }
                }
                @media (min-width: 1024px) {
                    .hero-inner { grid-template-columns: 1fr 1fr; gap: 4rem; padding: 5rem 2rem; }
                    .hero-text { text-align: left; }
                    .hero-subtitle { margin-left: 0; }
                    .hero-cta-group { justify-content: flex-start; }
                    .hero-title { font-size: 4.5rem; }
                    .hero-card { padding: 2.5rem; }
                }
                "#}
            </style>
        </section>
    }
}
