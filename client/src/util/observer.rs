//! One-shot reveal and counter animations driven by `IntersectionObserver`.
//!
//! Every element matching the selector is observed once. On first
//! intersection it is unobserved and handed to the [`RevealLedger`]: plain
//! elements gain the `visible` class, elements carrying a numeric
//! `data-target` count up to it on a [`TimerLoop`].

use std::cell::RefCell;
use std::rc::Rc;

use effects::consts::RAMP_FRAME_MS;
use effects::ramp::CounterRamp;
use effects::reveal::{Reveal, RevealLedger};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::consts::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::util::dom::{self, DomError};
use crate::util::schedule::{Flow, TimerLoop};

pub const VISIBLE_CLASS: &str = "visible";

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Live observer plus the running counter ramps. Dropping it disconnects the
/// observer and cancels every ramp.
pub struct VisibilityAnimator {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
    ramps: Rc<RefCell<Vec<TimerLoop>>>,
}

impl VisibilityAnimator {
    pub fn install(selector: &str) -> Result<Self, DomError> {
        let targets = dom::require_all(selector)?;
        let ledger = Rc::new(RefCell::new(RevealLedger::new()));
        let ramps: Rc<RefCell<Vec<TimerLoop>>> = Rc::new(RefCell::new(Vec::new()));

        let callback: EntriesCallback = {
            let ramps = Rc::clone(&ramps);
            Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    observer.unobserve(&target);
                    on_visible(&mut ledger.borrow_mut(), &ramps, target);
                }
            }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
        };

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        init.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for target in &targets {
            observer.observe(target);
        }
        log::debug!("observing {} reveal targets", targets.len());

        Ok(Self { observer, _callback: callback, ramps })
    }
}

impl Drop for VisibilityAnimator {
    fn drop(&mut self) {
        self.observer.disconnect();
        self.ramps.borrow_mut().clear();
    }
}

fn on_visible(ledger: &mut RevealLedger, ramps: &Rc<RefCell<Vec<TimerLoop>>>, target: Element) {
    let id = target.id();
    if id.is_empty() {
        log::warn!("reveal target without id; marking without bookkeeping");
        mark_visible(&target);
        return;
    }
    let count_to = target.get_attribute("data-target").and_then(|raw| raw.trim().parse::<u32>().ok());
    match ledger.on_became_visible(&id, count_to) {
        Some(Reveal::Mark) => mark_visible(&target),
        Some(Reveal::Count(ramp)) => ramps.borrow_mut().push(start_ramp(target, ramp)),
        None => {}
    }
}

fn mark_visible(target: &Element) {
    if let Err(err) = target.class_list().add_1(VISIBLE_CLASS) {
        log::warn!("failed to reveal #{}: {err:?}", target.id());
    }
}

fn start_ramp(target: Element, mut ramp: CounterRamp) -> TimerLoop {
    target.set_text_content(Some("0"));
    TimerLoop::start(RAMP_FRAME_MS, move || {
        let tick = ramp.tick();
        target.set_text_content(Some(&tick.value().to_string()));
        if tick.is_finished() { Flow::Stop } else { Flow::Continue }
    })
}
