//! Cancellable delayed actions for input handlers.

use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Default quiet period for search inputs
pub const SEARCH_DEBOUNCE_MS: u32 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Bookkeeping for a single pending action.
///
/// Arming the slot supersedes whatever was pending; only the most recent
/// ticket is allowed to fire, and only once.
#[derive(Debug, Default)]
pub struct DebounceSlot {
    next: u64,
    armed: Option<u64>,
}

impl DebounceSlot {
    pub fn arm(&mut self) -> DebounceTicket {
        self.next += 1;
        self.armed = Some(self.next);
        DebounceTicket(self.next)
    }

    pub fn fire(&mut self, ticket: DebounceTicket) -> bool {
        if self.armed == Some(ticket.0) {
            self.armed = None;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self) {
        self.armed = None;
    }
}

/// Runs the last scheduled action after `delay_ms` of quiet.
///
/// Owned by the component that debounces; dropping it cancels the pending timer.
pub struct Debouncer {
    delay_ms: u32,
    slot: Rc<RefCell<DebounceSlot>>,
    timer: RefCell<Option<Timeout>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            slot: Rc::new(RefCell::new(DebounceSlot::default())),
            timer: RefCell::new(None),
        }
    }

    pub fn schedule(&self, action: impl FnOnce() + 'static) {
        let ticket = self.slot.borrow_mut().arm();
        let slot = Rc::clone(&self.slot);
        let timeout = Timeout::new(self.delay_ms, move || {
            if slot.borrow_mut().fire(ticket) {
                action();
            }
        });
        // Replacing the previous Timeout drops it, which clears the browser timer.
        self.timer.replace(Some(timeout));
    }

    /// Drop the pending action, if any.
    pub fn cancel(&self) {
        self.slot.borrow_mut().cancel();
        if let Some(timeout) = self.timer.borrow_mut().take() {
            timeout.cancel();
        }
    }
}
