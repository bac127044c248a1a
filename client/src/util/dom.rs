//! Element lookup with typed failures.
//!
//! Effects assume their anchor elements exist. A missing one is reported as
//! [`DomError::MissingElement`] and logged by the caller, which then skips
//! wiring that effect.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomError {
    #[error("required element not found: {selector}")]
    MissingElement { selector: String },
    #[error("browser api unavailable: {api}")]
    Unavailable { api: &'static str },
    #[error("javascript error: {0}")]
    Js(String),
    #[error(transparent)]
    Effects(#[from] effects::EffectsError),
}

impl DomError {
    pub fn missing(selector: &str) -> Self {
        Self::MissingElement { selector: selector.to_owned() }
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(feature = "hydrate")]
pub use browser::*;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlElement, Window};

    use super::DomError;

    pub fn window() -> Result<Window, DomError> {
        web_sys::window().ok_or(DomError::Unavailable { api: "window" })
    }

    pub fn document() -> Result<Document, DomError> {
        window()?.document().ok_or(DomError::Unavailable { api: "document" })
    }

    pub fn body() -> Result<HtmlElement, DomError> {
        document()?.body().ok_or_else(|| DomError::missing("body"))
    }

    /// First element matching `selector`.
    pub fn require_element(selector: &str) -> Result<Element, DomError> {
        document()?.query_selector(selector)?.ok_or_else(|| DomError::missing(selector))
    }

    /// Every element matching `selector`; an empty match is an error.
    pub fn require_all(selector: &str) -> Result<Vec<Element>, DomError> {
        let list = document()?.query_selector_all(selector)?;
        let elements: Vec<Element> = (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect();
        if elements.is_empty() {
            return Err(DomError::missing(selector));
        }
        Ok(elements)
    }

    /// Smooth-scroll the element with `id` into view.
    pub fn scroll_to_section(id: &str) -> Result<(), DomError> {
        let target = document()?.get_element_by_id(id).ok_or_else(|| DomError::missing(&format!("#{id}")))?;
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }
}
