//! Dismissal of transient widgets by pointer presses outside their region.
//!
//! The volume popover and the modal backdrops both go through [`resolve_hit`]
//! and [`dismisses`]; only the way the press is observed differs.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget};
use yew::prelude::*;

/// Where a pointer press landed relative to a registered region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionHit {
    Inside,
    Outside,
    /// The target was not an element (document root, text node, detached node).
    Unknown,
}

impl RegionHit {
    pub fn is_inside(self) -> bool {
        matches!(self, RegionHit::Inside)
    }
}

/// Whether a press should close a widget that is currently `open`.
/// Presses that cannot be placed count as outside.
pub fn dismisses(open: bool, hit: RegionHit) -> bool {
    open && !hit.is_inside()
}

/// Tests an event target against the region matched by the CSS `selector`.
pub fn resolve_hit(target: Option<EventTarget>, selector: &str) -> RegionHit {
    let Some(element) = target.and_then(|target| target.dyn_into::<Element>().ok()) else {
        return RegionHit::Unknown;
    };
    match element.closest(selector) {
        Ok(Some(_)) => RegionHit::Inside,
        Ok(None) => RegionHit::Outside,
        Err(_) => RegionHit::Unknown,
    }
}

/// Listens for `pointerdown` on the document and emits `on_dismiss` when `open`
/// and the press lands outside `selector`. The listener is reinstalled when
/// `open` changes and removed on unmount.
#[hook]
pub fn use_outside_click(selector: &'static str, open: bool, on_dismiss: Callback<()>) {
    use_effect_with_deps(
        move |open: &bool| {
            let open = *open;
            let document = web_sys::window().and_then(|window| window.document());

            let listener = Closure::wrap(Box::new(move |event: Event| {
                if dismisses(open, resolve_hit(event.target(), selector)) {
                    on_dismiss.emit(());
                }
            }) as Box<dyn FnMut(Event)>);

            if let Some(document) = &document {
                let _ = document.add_event_listener_with_callback(
                    "pointerdown",
                    listener.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let Some(document) = document {
                    let _ = document.remove_event_listener_with_callback(
                        "pointerdown",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        },
        open,
    );
}
