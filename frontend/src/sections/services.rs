use yew::prelude::*;

use crate::components::icon::IconSvg;
use crate::components::reveal::{RevealGroup, RevealItem};
use crate::components::section_heading::SectionHeading;
use crate::content::{SECTION_SERVICES, SERVICES};

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id={SECTION_SERVICES} class="services">
            <div class="services-wash"></div>
            <div class="section-inner">
                <SectionHeading
                    eyebrow="Hizmetlerimiz"
                    title="Neden Çayırova Papatya Taksi?"
                    subtitle="Müşteri memnuniyeti odaklı hizmet anlayışımızla fark yaratıyoruz"
                />

                <RevealGroup class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <RevealItem key={service.title} index={index} class="service-card">
                            <div class="service-icon">
                                <IconSvg icon={service.icon} />
                            </div>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                        </RevealItem>
                    }) }
                </RevealGroup>
            </div>

            <style>
                {r#"
                .services { position: relative; background: #ffffff; }
                .services-wash {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, transparent, rgba(255, 251, 235, 0.3), transparent);
                }
                .services-grid { display: grid; gap: 1.5rem; }
                .service-card {
                    background: #ffffff;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    border: 1px solid #f3f4f6;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }
                .service-card:hover { box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25); }
                .service-icon {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 1rem;
                    background: linear-gradient(to bottom right, #fef3c7, #ffedd5);
                    color: #d97706;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1.5rem;
                    transition: transform 0.5s;
                }
                .service-card:hover .service-icon { transform: scale(1.1); }
                .service-icon .icon { width: 2rem; height: 2rem; }
                .service-card h3 { font-size: 1.25rem; font-weight: 700; color: #111827; margin-bottom: 1rem; }
                .service-card p { color: #4b5563; line-height: 1.6; }
                @media (min-width: 768px) {
                    .services-grid { grid-template-columns: repeat(3, 1fr); gap: 2rem; }
                    .service-card h3 { font-size: 1.5rem; }
                }
                "#}
            </style>
        </section>
    }
}
