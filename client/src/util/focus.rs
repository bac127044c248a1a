//! Keyboard-navigation focus outlines.
//!
//! Tab marks `<body>` with `keyboard-nav` so CSS shows focus rings; any mouse
//! press removes the mark again.

#[cfg(test)]
#[path = "focus_test.rs"]
mod focus_test;

pub const KEYBOARD_NAV_CLASS: &str = "keyboard-nav";

/// Keys that switch the page into keyboard-navigation mode.
#[must_use]
pub fn is_navigation_key(key: &str) -> bool {
    key == "Tab"
}

#[cfg(feature = "hydrate")]
pub use browser::FocusOutline;

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_events::EventListener;
    use wasm_bindgen::JsCast;
    use web_sys::{Event, HtmlElement, KeyboardEvent};

    use super::{KEYBOARD_NAV_CLASS, is_navigation_key};
    use crate::util::dom::{self, DomError};

    /// Installed listeners; dropping removes them.
    pub struct FocusOutline {
        _listeners: [EventListener; 2],
    }

    impl FocusOutline {
        pub fn install() -> Result<Self, DomError> {
            let document = dom::document()?;
            let body = dom::body()?;

            let on_key = {
                let body = body.clone();
                EventListener::new(&document, "keydown", move |event: &Event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if is_navigation_key(&event.key()) {
                        mark(&body, true);
                    }
                })
            };
            let on_mouse = EventListener::new(&document, "mousedown", move |_: &Event| mark(&body, false));
            Ok(Self { _listeners: [on_key, on_mouse] })
        }
    }

    fn mark(body: &HtmlElement, on: bool) {
        let classes = body.class_list();
        let result = if on { classes.add_1(KEYBOARD_NAV_CLASS) } else { classes.remove_1(KEYBOARD_NAV_CLASS) };
        if let Err(err) = result {
            log::warn!("focus outline toggle failed: {err:?}");
        }
    }
}
