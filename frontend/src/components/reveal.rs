use gloo_timers::callback::Timeout;
use log::warn;
use yew::prelude::*;

use crate::animation::{RevealPreset, Stagger};
use crate::config::RevealConfig;
use crate::dom::VisibilityObserver;

/// When a reveal plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Shortly after the component mounts.
    OnMount,
    /// When the element scrolls into view. Plays once.
    InView,
}

/// Flips to `true` once the trigger fires; never flips back.
#[hook]
fn use_revealed(node: NodeRef, trigger: Trigger) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let config = RevealConfig::default();
                let mut timeout = None;
                let mut observer = None;
                match trigger {
                    Trigger::OnMount => {
                        let revealed = revealed.clone();
                        timeout = Some(Timeout::new(config.mount_delay_ms, move || {
                            revealed.set(true);
                        }));
                    }
                    Trigger::InView => {
                        if let Some(element) = node.cast::<web_sys::Element>() {
                            let revealed = revealed.clone();
                            observer = VisibilityObserver::observe(
                                &element,
                                config.root_margin,
                                config.threshold,
                                true,
                                move || revealed.set(true),
                            )
                            .map_err(|err| warn!("Reveal observer unavailable: {}", err))
                            .ok();
                        }
                        if observer.is_none() {
                            // No observer support: show content rather than leave it hidden.
                            revealed.set(true);
                        }
                    }
                }
                move || {
                    drop(timeout);
                    drop(observer);
                }
            },
            (),
        );
    }

    *revealed
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub preset: RevealPreset,
    #[prop_or(Trigger::InView)]
    pub trigger: Trigger,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// A block that animates from its preset's hidden pose to the visible pose.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_revealed(node.clone(), props.trigger);

    html! {
        <div
            ref={node}
            class={classes!(props.preset.class(), revealed.then(|| "revealed"), props.class.clone())}
        >
            { for props.children.iter() }
        </div>
    }
}

/// Shared by a staggered container with its items.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupReveal {
    pub revealed: bool,
    pub stagger: Stagger,
}

#[derive(Properties, PartialEq)]
pub struct RevealGroupProps {
    #[prop_or(Trigger::InView)]
    pub trigger: Trigger,
    #[prop_or_default]
    pub stagger: Stagger,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Container that fades in and releases its `RevealItem` children one after another.
#[function_component(RevealGroup)]
pub fn reveal_group(props: &RevealGroupProps) -> Html {
    let node = use_node_ref();
    let revealed = use_revealed(node.clone(), props.trigger);
    let context = GroupReveal {
        revealed,
        stagger: props.stagger,
    };

    html! {
        <ContextProvider<GroupReveal> context={context}>
            <div
                ref={node}
                class={classes!(RevealPreset::FadeIn.class(), revealed.then(|| "revealed"), props.class.clone())}
            >
                { for props.children.iter() }
            </div>
        </ContextProvider<GroupReveal>>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealItemProps {
    pub index: usize,
    #[prop_or(RevealPreset::FadeInUp)]
    pub preset: RevealPreset,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// One staggered child. Outside a `RevealGroup` it renders already revealed.
#[function_component(RevealItem)]
pub fn reveal_item(props: &RevealItemProps) -> Html {
    let group = use_context::<GroupReveal>();
    let revealed = group.map(|g| g.revealed).unwrap_or(true);
    let delay = group
        .map(|g| g.stagger.delay_for(props.index))
        .unwrap_or_default();

    html! {
        <div
            class={classes!(props.preset.class(), revealed.then(|| "revealed"), props.class.clone())}
            style={format!("transition-delay: {}s;", delay)}
        >
            { for props.children.iter() }
        </div>
    }
}
