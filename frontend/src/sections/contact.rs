use yew::prelude::*;

use crate::animation::RevealPreset;
use crate::components::icon::{Icon, IconSvg};
use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::content::{mailto_href, ADDRESS_LINES, EMAIL, MAP_PLACE_URL, PHONE_NUMBERS, SECTION_CONTACT};

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id={SECTION_CONTACT} class="contact tinted">
            <div class="blob blob-top-right"></div>
            <div class="blob blob-bottom-left"></div>
            <div class="section-inner">
                <SectionHeading
                    eyebrow="İletişim"
                    title="Bize Ulaşın"
                    subtitle="Bize ulaşmak çok kolay! Hemen arayın veya konumumuza gelin."
                />

                <div class="contact-grid">
                    <Reveal preset={RevealPreset::SlideInLeft} class="contact-column">
                        <div class="contact-card">
                            <h3>
                                <span class="contact-card-icon"><IconSvg icon={Icon::Phone} /></span>
                                {"Telefon Numaraları"}
                            </h3>
                            <div class="contact-links">
                                { for PHONE_NUMBERS.iter().map(|phone| html! {
                                    <a key={phone.number} href={phone.href()} class="contact-link">
                                        <span class="contact-link-badge"><IconSvg icon={Icon::Phone} /></span>
                                        <span>
                                            <span class="contact-link-label">{phone.label}</span>
                                            <span class="contact-link-value">{phone.number}</span>
                                        </span>
                                    </a>
                                }) }
                            </div>
                        </div>

                        <div class="contact-card">
                            <h3>
                                <span class="contact-card-icon"><IconSvg icon={Icon::Mail} /></span>
                                {"E-posta"}
                            </h3>
                            <a href={mailto_href(EMAIL)} class="contact-link">
                                <span class="contact-link-badge"><IconSvg icon={Icon::Mail} /></span>
                                <span>
                                    <span class="contact-link-label">{"E-posta"}</span>
                                    <span class="contact-link-value">{EMAIL}</span>
                                </span>
                            </a>
                        </div>
                    </Reveal>

                    <Reveal preset={RevealPreset::SlideInRight} class="contact-card">
                        <h3>
                            <span class="contact-card-icon"><IconSvg icon={Icon::MapPin} /></span>
                            {"Adres"}
                        </h3>
                        <div class="contact-address">
                            <p>
                                {ADDRESS_LINES[0]}
                                <br />
                                {ADDRESS_LINES[1]}
                            </p>
                        </div>
                        <a href={MAP_PLACE_URL} target="_blank" rel="noopener noreferrer" class="accent-button wide">
                            <IconSvg icon={Icon::Navigation} />
                            {"Google Maps'te Aç"}
                        </a>
                    </Reveal>
                </div>
            </div>

            <style>
                {r#"
                .contact-grid { display: grid; gap: 2rem; }
                .contact-column { display: flex; flex-direction: column; gap: 1.5rem; }
                .contact-card {
                    background: #ffffff;
                    padding: 1.5rem;
                    border-radius: 1.5rem;
                    border: 1px solid #f3f4f6;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                }
                .contact-card h3 {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 1.5rem;
                }
                .contact-card-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.75rem;
                    background: #fef3c7;
                    color: #d97706;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .contact-card-icon .icon { width: 1.5rem; height: 1.5rem; }
                .contact-links { display: flex; flex-direction: column; gap: 1rem; }
                .contact-link {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    background: #f9fafb;
                    padding: 1rem;
                    border-radius: 1rem;
                    text-decoration: none;
                    transition: background 0.2s, transform 0.2s;
                }
                .contact-link:hover { background: #fffbeb; transform: translateX(5px); }
                .contact-link-badge {
                    flex-shrink: 0;
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 9999px;
                    background: linear-gradient(to bottom right, #fbbf24, #d97706);
                    color: #ffffff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .contact-link-badge .icon { width: 1.5rem; height: 1.5rem; }
                .contact-link-label { display: block; font-size: 0.875rem; color: #6b7280; }
                .contact-link-value { display: block; font-size: 1.25rem; font-weight: 700; color: #111827; }
                .contact-address {
                    background: #f9fafb;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    margin-bottom: 1.5rem;
                }
                .contact-address p { font-size: 1.125rem; font-weight: 500; color: #374151; line-height: 1.6; }
                @media (min-width: 768px) {
                    .contact-card { padding: 2rem; }
                    .contact-card h3 { font-size: 1.5rem; }
                }
                @media (min-width: 1024px) {
                    .contact-grid { grid-template-columns: 1fr 1fr; gap: 3rem; }
                }
                "#}
            </style>
        </section>
    }
}
