//! Throttled and debounced event listeners.
//!
//! Thin `gloo-events` wrappers around the clock-free windows in
//! `effects::pace`. The throttle reads `Date.now()` on each event and arms one
//! `gloo-timers` timeout for its trailing run; the debounce arms a timeout per
//! event and replaces (cancels) the previous one.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use effects::pace::{Debounce, Gate, Throttle};
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use web_sys::{Event, EventTarget};

/// A listener whose handler runs on the first `event`, at most once per
/// window after, and once more at the end of a window that dropped events.
///
/// Dropping it removes the listener and cancels a pending trailing run.
pub struct ThrottledListener {
    _listener: EventListener,
    _trailing: Rc<RefCell<Option<Timeout>>>,
}

pub fn throttled_listener<F>(target: &EventTarget, event: &'static str, window_ms: f64, handler: F) -> ThrottledListener
where
    F: FnMut() + 'static,
{
    let trailing: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let throttle = Rc::new(Cell::new(Throttle::new(window_ms)));
    let handler = Rc::new(RefCell::new(handler));

    let listener = {
        let trailing = Rc::clone(&trailing);
        EventListener::new(target, event, move |_: &Event| {
            let mut gate = throttle.get();
            let verdict = gate.admit(js_sys::Date::now());
            throttle.set(gate);

            match verdict {
                Gate::Run => (*handler.borrow_mut())(),
                Gate::Defer { after_ms } => {
                    let throttle = Rc::clone(&throttle);
                    let handler = Rc::clone(&handler);
                    let timeout = Timeout::new(timeout_ms(after_ms), move || {
                        let mut gate = throttle.get();
                        let owed = gate.flush(js_sys::Date::now());
                        throttle.set(gate);
                        if owed {
                            (*handler.borrow_mut())();
                        }
                    });
                    *trailing.borrow_mut() = Some(timeout);
                }
                Gate::Pending => {}
            }
        })
    };

    ThrottledListener { _listener: listener, _trailing: trailing }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn timeout_ms(ms: f64) -> u32 {
    // Clamped to [0, u32::MAX] before the cast.
    ms.ceil().clamp(0.0, f64::from(u32::MAX)) as u32
}

/// A listener whose handler runs once `delay_ms` after the last event.
///
/// Dropping it removes the listener and cancels a pending run.
pub struct DebouncedListener {
    _listener: EventListener,
    _pending: Rc<RefCell<Option<Timeout>>>,
}

pub fn debounced_listener<F>(target: &EventTarget, event: &'static str, delay_ms: u32, handler: F) -> DebouncedListener
where
    F: FnMut() + 'static,
{
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let debounce = Rc::new(Cell::new(Debounce::new()));
    let handler = Rc::new(RefCell::new(handler));

    let listener = {
        let pending = Rc::clone(&pending);
        EventListener::new(target, event, move |_: &Event| {
            let mut book = debounce.get();
            let ticket = book.schedule();
            debounce.set(book);

            let debounce = Rc::clone(&debounce);
            let handler = Rc::clone(&handler);
            let timeout = Timeout::new(delay_ms, move || {
                if debounce.get().is_current(ticket) {
                    (*handler.borrow_mut())();
                }
            });
            // Replacing the handle cancels the previous timeout.
            *pending.borrow_mut() = Some(timeout);
        })
    };

    DebouncedListener { _listener: listener, _pending: pending }
}
