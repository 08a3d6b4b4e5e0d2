//! Browser glue. Every listener or observer created here is owned by a guard
//! that releases it on drop.

use log::debug;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    AddEventListenerOptions, Document, Element, EventTarget, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};

use crate::controller::{NavigationError, ScrollMetrics, Viewport};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// Current location fragment without the leading `#`, if any.
pub fn location_fragment() -> Option<String> {
    let hash = window().ok()?.location().hash().ok()?;
    let fragment = hash.trim_start_matches('#');
    (!fragment.is_empty()).then(|| fragment.to_string())
}

pub fn set_document_title(title: &str) -> Result<(), DomError> {
    document()?.set_title(title);
    Ok(())
}

/// Sets `<meta name="description">`, creating the tag in `<head>` if missing.
pub fn set_meta_description(description: &str) -> Result<(), DomError> {
    let document = document()?;
    let meta = match document.query_selector("meta[name=\"description\"]")? {
        Some(meta) => meta,
        None => {
            let meta = document.create_element("meta")?;
            meta.set_attribute("name", "description")?;
            document
                .head()
                .ok_or(DomError::NoDocument)?
                .append_child(&meta)?;
            meta
        }
    };
    meta.set_attribute("content", description)?;
    Ok(())
}

/// The live browser window as seen by the page controller.
#[derive(Clone, Default)]
pub struct WindowViewport;

impl WindowViewport {
    fn read_metrics(&self) -> Result<ScrollMetrics, DomError> {
        let window = window()?;
        let offset = window.scroll_y()?;
        let viewport_height = window.inner_height()?.as_f64().unwrap_or(0.0);
        let document_height = window
            .document()
            .and_then(|doc| doc.document_element())
            .map(|root| root.scroll_height() as f64)
            .unwrap_or(0.0);
        Ok(ScrollMetrics::new(offset, (document_height - viewport_height).max(0.0)))
    }
}

impl Viewport for WindowViewport {
    fn metrics(&self) -> ScrollMetrics {
        self.read_metrics().unwrap_or_default()
    }

    fn scroll_to_section(&self, section_id: &str) -> Result<(), NavigationError> {
        let document = document().map_err(|err| NavigationError::Viewport(err.to_string()))?;
        let element = document
            .get_element_by_id(section_id)
            .ok_or_else(|| NavigationError::SectionNotFound(section_id.to_string()))?;

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }
}

/// Events after which the scroll-derived state must be recomputed, with the
/// target they are registered on. Element `load` events don't bubble and never
/// reach the window, so lazy images and the map iframe are caught on the
/// document in the capture phase.
const LAYOUT_EVENTS: [(&str, ListenOn); 3] = [
    ("scroll", ListenOn::Window),
    ("resize", ListenOn::Window),
    ("load", ListenOn::DocumentCapture),
];

#[derive(Clone, Copy)]
enum ListenOn {
    Window,
    DocumentCapture,
}

/// Passive listeners for scrolling and for anything that changes the
/// scrollable height. Dropping it removes every listener.
pub struct ScrollSubscription {
    registrations: Vec<(EventTarget, &'static str, bool)>,
    callback: Closure<dyn FnMut()>,
}

impl ScrollSubscription {
    /// Registers `on_change` and runs it once immediately.
    pub fn attach<F>(mut on_change: F) -> Result<Self, DomError>
    where
        F: FnMut() + 'static,
    {
        let window = window()?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        on_change();

        let callback = Closure::wrap(Box::new(on_change) as Box<dyn FnMut()>);
        let mut subscription = Self {
            registrations: Vec::with_capacity(LAYOUT_EVENTS.len()),
            callback,
        };

        for (event, on) in LAYOUT_EVENTS {
            let (target, capture): (EventTarget, bool) = match on {
                ListenOn::Window => (window.clone().into(), false),
                ListenOn::DocumentCapture => (document.clone().into(), true),
            };
            let options = AddEventListenerOptions::new();
            options.set_passive(true);
            options.set_capture(capture);
            target.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                subscription.callback.as_ref().unchecked_ref(),
                &options,
            )?;
            // Recorded as soon as it is live so a later failure still releases it.
            subscription.registrations.push((target, event, capture));
        }
        debug!("Scroll subscription attached");

        Ok(subscription)
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        for (target, event, capture) in self.registrations.drain(..) {
            let _ = target.remove_event_listener_with_callback_and_bool(
                event,
                self.callback.as_ref().unchecked_ref(),
                capture,
            );
        }
        debug!("Scroll subscription released");
    }
}

/// Watches one element and reports when it enters the viewport.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    /// `on_visible` fires each time the element starts intersecting. With
    /// `once` set, the observer disconnects itself after the first hit.
    pub fn observe<F>(
        target: &Element,
        root_margin: &str,
        threshold: f64,
        once: bool,
        mut on_visible: F,
    ) -> Result<Self, DomError>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let entered = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|entry| entry.is_intersecting())
                    .unwrap_or(false)
            });
            if entered {
                on_visible();
                if once {
                    observer.disconnect();
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(root_margin);
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
