//! Animated particle backdrop behind the hero section.
//!
//! Renders an empty container on the server. On hydrate it spawns one
//! absolutely positioned `div` per particle, advances the field every
//! animation frame, and clamps positions after the window settles from a
//! resize. Unmounting drops the runtime: the frame loop stops, the resize
//! listener is removed, and every particle node leaves the document.

use leptos::prelude::*;

#[component]
pub fn ParticleField() -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let runtime = StoredValue::new_local(None::<browser::Runtime>);
        Effect::new(move || {
            let Some(el) = container.get() else {
                return;
            };
            if runtime.with_value(Option::is_some) {
                return;
            }
            match browser::Runtime::start(&el) {
                Ok(started) => runtime.set_value(Some(started)),
                Err(err) => log::error!("particle field not started: {err}"),
            }
        });
        on_cleanup(move || {
            runtime.try_update_value(|slot| {
                slot.take();
            });
        });
    }

    view! { <div id="particles" class="particles" node_ref=container aria-hidden="true"></div> }
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use effects::consts::{PARTICLE_COUNT, RESIZE_DEBOUNCE_MS};
    use effects::particles::{Bounds, BoundsProvider, Look, ParticleField, Sprite};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement};

    use crate::util::dom::{self, DomError};
    use crate::util::pace::{DebouncedListener, debounced_listener};
    use crate::util::schedule::{Flow, FrameLoop};
    use crate::util::viewport;

    /// One particle's DOM node. Removed from the document on drop.
    pub struct DomSprite {
        el: HtmlElement,
    }

    impl DomSprite {
        fn spawn(document: &Document, container: &HtmlElement, look: Look) -> Result<Self, DomError> {
            let el: HtmlElement = document
                .create_element("div")?
                .dyn_into()
                .map_err(|_| DomError::Js("created element is not an HtmlElement".to_owned()))?;
            el.set_class_name("particle");
            let style = el.style();
            let diameter = format!("{:.2}px", look.radius * 2.0);
            style.set_property("width", &diameter)?;
            style.set_property("height", &diameter)?;
            style.set_property("opacity", &format!("{:.2}", look.opacity))?;
            container.append_child(&el)?;
            Ok(Self { el })
        }
    }

    impl Sprite for DomSprite {
        fn place(&mut self, x: f64, y: f64) {
            let transform = format!("translate({x:.2}px, {y:.2}px)");
            if self.el.style().set_property("transform", &transform).is_err() {
                log::warn!("particle transform rejected");
            }
        }
    }

    impl Drop for DomSprite {
        fn drop(&mut self) {
            self.el.remove();
        }
    }

    /// Window extent, falling back to the last good reading.
    struct ViewportBounds {
        last: Cell<Bounds>,
    }

    impl BoundsProvider for ViewportBounds {
        fn bounds(&self) -> Bounds {
            if let Ok(bounds) = viewport::viewport_bounds() {
                self.last.set(bounds);
            }
            self.last.get()
        }
    }

    type Field = ParticleField<DomSprite, ViewportBounds>;

    pub struct Runtime {
        _frames: FrameLoop,
        _resize: DebouncedListener,
    }

    impl Runtime {
        pub fn start(container: &HtmlElement) -> Result<Self, DomError> {
            let document = dom::document()?;
            let window = dom::window()?;
            let provider = ViewportBounds { last: Cell::new(viewport::viewport_bounds()?) };
            let mut rng = SmallRng::seed_from_u64(js_sys::Date::now().to_bits());

            let field: Field = ParticleField::try_initialize(PARTICLE_COUNT, provider, &mut rng, |look| {
                DomSprite::spawn(&document, container, look)
            })?;
            log::debug!("particle field started with {} particles", field.len());
            let field = Rc::new(RefCell::new(field));

            let frames = {
                let field = Rc::clone(&field);
                FrameLoop::start(move |_| {
                    field.borrow_mut().advance();
                    Flow::Continue
                })
            };

            let resize = debounced_listener(&window, "resize", RESIZE_DEBOUNCE_MS, move || {
                let bounds = match viewport::viewport_bounds() {
                    Ok(bounds) => bounds,
                    Err(err) => {
                        log::warn!("resize skipped: {err}");
                        return;
                    }
                };
                if let Err(err) = field.borrow_mut().resize(bounds.width, bounds.height) {
                    log::warn!("resize rejected: {err}");
                }
            });

            Ok(Self { _frames: frames, _resize: resize })
        }
    }
}
