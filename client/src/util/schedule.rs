//! Self-rescheduling callbacks with cancel-on-drop handles.
//!
//! [`FrameLoop`] runs once per animation frame via `gloo-render`;
//! [`TimerLoop`] runs at a fixed interval via chained `gloo-timers`
//! timeouts. Both keep only the next pending handle. The closure holds a weak
//! reference to that slot, so dropping the loop cancels the pending callback
//! and nothing fires afterwards.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_render::{AnimationFrame, request_animation_frame};
use gloo_timers::callback::Timeout;

/// Returned by a loop body to decide whether it runs again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

/// Paint-synchronized loop. The body receives the frame timestamp in ms.
pub struct FrameLoop {
    // Owns the pending handle; the scheduled closure only holds a weak ref.
    _slot: FrameSlot,
}

impl FrameLoop {
    pub fn start<F>(body: F) -> Self
    where
        F: FnMut(f64) -> Flow + 'static,
    {
        let slot: FrameSlot = Rc::new(RefCell::new(None));
        request_frame(&Rc::downgrade(&slot), Rc::new(RefCell::new(body)));
        Self { _slot: slot }
    }
}

fn request_frame<F>(slot: &Weak<RefCell<Option<AnimationFrame>>>, body: Rc<RefCell<F>>)
where
    F: FnMut(f64) -> Flow + 'static,
{
    let Some(pending) = slot.upgrade() else {
        return;
    };
    let weak = slot.clone();
    let frame = request_animation_frame(move |timestamp| {
        let Some(slot) = weak.upgrade() else {
            return;
        };
        // This frame has fired; release its handle before the body runs.
        slot.borrow_mut().take();
        let flow = (*body.borrow_mut())(timestamp);
        if flow == Flow::Continue {
            request_frame(&weak, body);
        }
    });
    *pending.borrow_mut() = Some(frame);
}

type TimerSlot = Rc<RefCell<Option<Timeout>>>;

/// Fixed-interval loop. The first run happens one interval after start.
pub struct TimerLoop {
    _slot: TimerSlot,
}

impl TimerLoop {
    pub fn start<F>(interval_ms: u32, body: F) -> Self
    where
        F: FnMut() -> Flow + 'static,
    {
        let slot: TimerSlot = Rc::new(RefCell::new(None));
        arm_timer(&Rc::downgrade(&slot), interval_ms, Rc::new(RefCell::new(body)));
        Self { _slot: slot }
    }
}

fn arm_timer<F>(slot: &Weak<RefCell<Option<Timeout>>>, interval_ms: u32, body: Rc<RefCell<F>>)
where
    F: FnMut() -> Flow + 'static,
{
    let Some(pending) = slot.upgrade() else {
        return;
    };
    let weak = slot.clone();
    let timeout = Timeout::new(interval_ms, move || {
        let Some(slot) = weak.upgrade() else {
            return;
        };
        slot.borrow_mut().take();
        let flow = (*body.borrow_mut())();
        if flow == Flow::Continue {
            arm_timer(&weak, interval_ms, body);
        }
    });
    *pending.borrow_mut() = Some(timeout);
}
