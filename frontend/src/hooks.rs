use std::rc::Rc;

use log::error;
use yew::prelude::*;

use crate::config::ScrollConfig;
use crate::controller::{navigate_to_section, scroll_action, PageAction, PageState, Viewport};
use crate::dom::{ScrollSubscription, WindowViewport};

/// Handle returned by [`use_page_controller`]. Cheap to clone into callbacks.
#[derive(Clone)]
pub struct PageHandle {
    state: UseReducerHandle<PageState>,
    viewport: Rc<dyn Viewport>,
}

impl PartialEq for PageHandle {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && Rc::ptr_eq(&self.viewport, &other.viewport)
    }
}

impl PageHandle {
    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn navigate_to_section(&self, section_id: &str) {
        self.state
            .dispatch(navigate_to_section(self.viewport.as_ref(), section_id));
    }

    pub fn toggle_mobile_menu(&self) {
        self.state.dispatch(PageAction::ToggleMobileMenu);
    }

    /// Callback that navigates to a fixed section, for buttons.
    pub fn navigate_callback(&self, section_id: &'static str) -> Callback<MouseEvent> {
        let handle = self.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            handle.navigate_to_section(section_id);
        })
    }
}

/// Page controller state for the lifetime of the calling component, bound to
/// the browser window. The subscription is attached on mount and released on
/// unmount.
#[hook]
pub fn use_page_controller(config: ScrollConfig) -> PageHandle {
    let viewport = use_memo(|_| Rc::new(WindowViewport) as Rc<dyn Viewport>, ());
    let state = use_reducer(move || PageState::new(config));

    {
        let dispatcher = state.dispatcher();
        let viewport = Rc::clone(&*viewport);
        use_effect_with_deps(
            move |_| {
                let subscription = ScrollSubscription::attach(move || {
                    dispatcher.dispatch(scroll_action(viewport.as_ref()));
                })
                .map_err(|err| error!("Could not subscribe to scroll events: {}", err))
                .ok();
                move || drop(subscription)
            },
            (),
        );
    }

    PageHandle {
        state,
        viewport: Rc::clone(&*viewport),
    }
}
