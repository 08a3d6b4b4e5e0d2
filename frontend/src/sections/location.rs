use yew::prelude::*;

use crate::animation::RevealPreset;
use crate::components::icon::{Icon, IconSvg};
use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::content::{ADDRESS_LINES, BUSINESS_NAME, MAP_EMBED_URL, MAP_PLACE_URL, SECTION_LOCATION};

#[function_component(Location)]
pub fn location() -> Html {
    html! {
        <section id={SECTION_LOCATION} class="location tinted">
            <div class="blob blob-top-right"></div>
            <div class="blob blob-bottom-left"></div>
            <div class="section-inner">
                <SectionHeading
                    icon={Icon::MapPin}
                    eyebrow="Konum"
                    title="Bizi Nerede Bulabilirsiniz?"
                    subtitle="Emek Mahallesi'ndeki durağımıza gelin veya haritadan yol tarifi alın"
                />

                <Reveal preset={RevealPreset::FadeInUp} class="map-card">
                    <div class="map-frame">
                        <iframe
                            src={MAP_EMBED_URL}
                            title="Papatya Taksi harita"
                            width="100%"
                            height="100%"
                            style="border: 0;"
                            allowfullscreen={true}
                            loading="lazy"
                            referrerpolicy="no-referrer-when-downgrade"
                        />
                    </div>
                    <div class="map-footer">
                        <div>
                            <h3>{BUSINESS_NAME}</h3>
                            <p>{ADDRESS_LINES.join(" ")}</p>
                        </div>
                        <a href={MAP_PLACE_URL} target="_blank" rel="noopener noreferrer" class="accent-button">
                            <IconSvg icon={Icon::Navigation} />
                            {"Yol Tarifi Al"}
                        </a>
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                .map-card {
                    background: #ffffff;
                    border-radius: 1.5rem;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    border: 1px solid #f3f4f6;
                    overflow: hidden;
                }
                .map-frame { width: 100%; height: 20rem; }
                .map-footer {
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .map-footer h3 { font-size: 1.25rem; font-weight: 700; color: #111827; margin-bottom: 0.5rem; }
                .map-footer p { color: #4b5563; }
                @media (min-width: 768px) {
                    .map-frame { height: 500px; }
                    .map-footer { flex-direction: row; align-items: center; justify-content: space-between; padding: 2rem; }
                }
                "#}
            </style>
        </section>
    }
}
