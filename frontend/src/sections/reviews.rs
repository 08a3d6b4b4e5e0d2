use yew::prelude::*;

use crate::animation::RevealPreset;
use crate::components::icon::{Icon, IconSvg};
use crate::components::reveal::{Reveal, RevealGroup, RevealItem};
use crate::components::section_heading::SectionHeading;
use crate::content::{Testimonial, REVIEW_URL, SECTION_REVIEWS, TESTIMONIALS};

/// Stars drawn for a rating, clamped to 1..=5.
fn star_count(rating: u8) -> usize {
    rating.clamp(1, 5) as usize
}

fn render_stars(rating: u8) -> Html {
    (0..star_count(rating))
        .map(|i| html! { <IconSvg key={i} icon={Icon::Star} class="star" /> })
        .collect()
}

fn render_testimonial(index: usize, review: &Testimonial) -> Html {
    html! {
        <RevealItem key={review.author_name} index={index} class="review-card">
            <div class="review-author">
                <div class="review-avatar">
                    <IconSvg icon={Icon::User} />
                </div>
                <div>
                    <h4>{review.author_name}</h4>
                    <div class="review-stars" aria-label={format!("{} / 5", review.rating)}>
                        { render_stars(review.rating) }
                    </div>
                </div>
            </div>
            <p class="review-text">{format!("“{}”", review.text)}</p>
            <p class="review-date">{review.relative_date}</p>
        </RevealItem>
    }
}

#[function_component(Reviews)]
pub fn reviews() -> Html {
    html! {
        <section id={SECTION_REVIEWS} class="reviews">
            <div class="reviews-dots"></div>
            <div class="section-inner">
                <SectionHeading
                    inverted={true}
                    icon={Icon::MessageCircle}
                    eyebrow="Müşteri Yorumları"
                    title="Müşterilerimiz Ne Diyor?"
                    subtitle="Google Maps üzerinden bize ulaşan değerli yorumlarınız"
                />

                <RevealGroup class="reviews-grid">
                    { for TESTIMONIALS.iter().enumerate().map(|(index, review)| render_testimonial(index, review)) }
                </RevealGroup>

                <Reveal preset={RevealPreset::FadeInUp} class="reviews-cta">
                    <a href={REVIEW_URL} target="_blank" rel="noopener noreferrer" class="ghost-button">
                        <IconSvg icon={Icon::ThumbsUp} />
                        {"Siz de Yorum Yapın"}
                    </a>
                </Reveal>
            </div>

            <style>
                {r#"
                .reviews {
                    position: relative;
                    overflow: hidden;
                    color: #ffffff;
                    background: linear-gradient(to bottom right, #111827, #1f2937, #111827);
                }
                .reviews-dots {
                    position: absolute;
                    inset: 0;
                    opacity: 0.05;
                    background-image: radial-gradient(circle at 1px 1px, white 1px, transparent 0);
                    background-size: 40px 40px;
                }
                .reviews-grid { display: grid; gap: 1.5rem; }
                .review-card {
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(4px);
                    padding: 1.5rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                .review-card:hover { background: rgba(255, 255, 255, 0.1); }
                .review-author { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1rem; }
                .review-avatar {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    background: linear-gradient(to bottom right, #fbbf24, #f97316);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .review-avatar .icon { width: 1.5rem; height: 1.5rem; }
                .review-author h4 { font-weight: 600; }
                .review-stars { display: flex; gap: 0.125rem; }
                .review-stars .star { width: 1rem; height: 1rem; fill: #facc15; color: #facc15; }
                .review-text { color: #d1d5db; font-size: 0.875rem; line-height: 1.6; margin-bottom: 1rem; }
                .review-date { color: #6b7280; font-size: 0.75rem; }
                .reviews-cta { margin-top: 3rem; text-align: center; }
                .ghost-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: rgba(255, 255, 255, 0.1);
                    color: #ffffff;
                    font-weight: 500;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.75rem;
                    text-decoration: none;
                }
                .ghost-button:hover { background: rgba(255, 255, 255, 0.2); }
                .ghost-button .icon { width: 1.25rem; height: 1.25rem; }
                @media (min-width: 768px) {
                    .reviews-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (min-width: 1024px) {
                    .reviews-grid { grid-template-columns: repeat(4, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_count_stays_in_rating_range() {
        assert_eq!(star_count(3), 3);
        assert_eq!(star_count(5), 5);
        assert_eq!(star_count(0), 1);
        assert_eq!(star_count(9), 5);
    }

    #[test]
    fn shipped_testimonials_render_their_own_rating() {
        for review in TESTIMONIALS.iter() {
            assert_eq!(star_count(review.rating), review.rating as usize);
        }
    }
}
