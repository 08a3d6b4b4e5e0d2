use yew::prelude::*;

use crate::animation::RevealPreset;
use crate::components::icon::{Icon, IconSvg};
use crate::components::reveal::Reveal;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    #[prop_or_default]
    pub icon: Option<Icon>,
    /// Light text for dark sections.
    #[prop_or_default]
    pub inverted: bool,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <Reveal
            preset={RevealPreset::FadeInUp}
            class={classes!("section-heading", props.inverted.then(|| "inverted"))}
        >
            <span class="section-eyebrow">
                { for props.icon.map(|icon| html! { <IconSvg icon={icon} /> }) }
                {props.eyebrow}
            </span>
            <h2>{props.title}</h2>
            <p>{props.subtitle}</p>
        </Reveal>
    }
}
