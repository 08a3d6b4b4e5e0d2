use yew::prelude::*;

use crate::components::icon::{Icon, IconSvg};
use crate::content::{mailto_href, BUSINESS_NAME, COPYRIGHT, EMAIL, PRIMARY_PHONE};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <span class="footer-logo"><IconSvg icon={Icon::Car} /></span>
                    <span class="footer-name">{BUSINESS_NAME}</span>
                </div>
                <p class="footer-copy">{COPYRIGHT}</p>
                <div class="footer-links">
                    <a href={PRIMARY_PHONE.href()} aria-label="Ara" class="footer-round">
                        <IconSvg icon={Icon::Phone} />
                    </a>
                    <a href={mailto_href(EMAIL)} aria-label="E-posta" class="footer-round">
                        <IconSvg icon={Icon::Mail} />
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .site-footer { background: #030712; color: #9ca3af; padding: 2rem 0; }
                .footer-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1.5rem;
                }
                .footer-brand { display: flex; align-items: center; gap: 0.75rem; transition: transform 0.2s; }
                .footer-brand:hover { transform: scale(1.05); }
                .footer-logo {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    background: linear-gradient(to bottom right, #fbbf24, #d97706);
                    color: #ffffff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .footer-logo .icon, .footer-round .icon { width: 1.25rem; height: 1.25rem; }
                .footer-name { font-size: 1.25rem; font-weight: 700; color: #ffffff; }
                .footer-copy { font-size: 0.875rem; text-align: center; }
                .footer-links { display: flex; gap: 1rem; }
                .footer-round {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    background: #1f2937;
                    color: #9ca3af;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: background 0.2s, transform 0.2s;
                }
                .footer-round:hover { background: #f59e0b; color: #ffffff; transform: scale(1.1); }
                @media (min-width: 768px) {
                    .site-footer { padding: 3rem 0; }
                    .footer-content { flex-direction: row; padding: 0 2rem; }
                }
                "#}
            </style>
        </footer>
    }
}
