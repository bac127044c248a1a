//! Viewport and section measurements.

use effects::particles::Bounds;
use effects::scroll::{ScrollMetrics, SectionBox};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::util::dom::{self, DomError};

pub fn measure_scroll() -> Result<ScrollMetrics, DomError> {
    let window = dom::window()?;
    let offset = window.scroll_y()?;
    let viewport_height = window.inner_height()?.as_f64().unwrap_or(0.0);
    let document_height = dom::document()?
        .document_element()
        .map_or(viewport_height, |root| f64::from(root.scroll_height()));
    Ok(ScrollMetrics { offset, document_height, viewport_height })
}

/// Every element matching `selector` that can report layout offsets.
pub fn section_elements(selector: &str) -> Result<Vec<HtmlElement>, DomError> {
    Ok(dom::require_all(selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Current document-space extents of `sections`, in document order.
pub fn measure_sections(sections: &[HtmlElement]) -> Vec<SectionBox> {
    sections
        .iter()
        .map(|el| SectionBox::new(el.id(), f64::from(el.offset_top()), f64::from(el.offset_height())))
        .collect()
}

pub fn viewport_bounds() -> Result<Bounds, DomError> {
    let window = dom::window()?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok(Bounds::new(width, height))
}
