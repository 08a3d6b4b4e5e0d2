use yew::prelude::*;

use crate::components::icon::Icon;
use crate::components::reveal::{RevealGroup, RevealItem};
use crate::components::section_heading::SectionHeading;
use crate::content::{GALLERY_IMAGES, SECTION_GALLERY};

#[function_component(Gallery)]
pub fn gallery() -> Html {
    html! {
        <section id={SECTION_GALLERY} class="gallery">
            <div class="blob blob-top-right"></div>
            <div class="blob blob-bottom-left"></div>
            <div class="section-inner">
                <SectionHeading
                    icon={Icon::Camera}
                    eyebrow="Galeri"
                    title="İş Yerimiz"
                    subtitle="Çayırova Papatya Taksi durağımızdan görüntüler"
                />

                <RevealGroup class="gallery-grid">
                    { for GALLERY_IMAGES.iter().enumerate().map(|(index, image)| html! {
                        <RevealItem key={image.src} index={index} class="gallery-tile">
                            <img src={image.src} alt={image.alt} loading="lazy" />
                            <div class="gallery-shade"></div>
                            <div class="gallery-caption">
                                <p>{image.alt}</p>
                            </div>
                        </RevealItem>
                    }) }
                </RevealGroup>
            </div>

            <style>
                {r#"
                .gallery {
                    position: relative;
                    overflow: hidden;
                    background: linear-gradient(to bottom right, #f9fafb, #fffbeb);
                }
                .gallery-grid { display: grid; grid-template-columns: 1fr; gap: 1rem; }
                .gallery-tile {
                    position: relative;
                    overflow: hidden;
                    border-radius: 1rem;
                    aspect-ratio: 4 / 3;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }
                .gallery-tile img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s;
                }
                .gallery-tile:hover img { transform: scale(1.1); }
                .gallery-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent);
                    opacity: 0;
                    transition: opacity 0.5s;
                }
                .gallery-tile:hover .gallery-shade { opacity: 1; }
                .gallery-caption {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    padding: 1rem;
                    transform: translateY(100%);
                    transition: transform 0.5s;
                }
                .gallery-tile:hover .gallery-caption { transform: translateY(0); }
                .gallery-caption p { color: #ffffff; font-weight: 500; font-size: 0.875rem; }
                @media (min-width: 768px) {
                    .gallery-grid { grid-template-columns: repeat(2, 1fr); gap: 1.5rem; }
                    .gallery-tile { aspect-ratio: 1 / 1; border-radius: 1.5rem; }
                    .gallery-caption { padding: 1.5rem; }
                    .gallery-caption p { font-size: 1rem; }
                }
                @media (min-width: 1024px) {
                    .gallery-grid { grid-template-columns: repeat(3, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}
