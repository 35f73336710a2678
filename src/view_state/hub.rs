//! Fan-out of host events to mounted views.
//!
//! A handler stays registered exactly as long as its [`Subscription`] is
//! alive. Dropping the subscription, even from inside a dispatch, guarantees
//! the handler is never called again.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use super::{Bounds, ElementKey, Millis};

#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Scroll {
        offset: f64,
    },
    Geometry {
        key: ElementKey,
        bounds: Bounds,
        viewport_height: f64,
    },
    Tick {
        now: Millis,
    },
}

type Handler = Box<dyn FnMut(&HostEvent)>;

struct Slot {
    active: Cell<bool>,
    handler: RefCell<Handler>,
}

type Slots = RefCell<Vec<Rc<Slot>>>;

#[derive(Default)]
pub struct EventHub {
    slots: Rc<Slots>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "the handler is released when the subscription is dropped"]
    pub fn subscribe(&self, handler: impl FnMut(&HostEvent) + 'static) -> Subscription {
        let slot = Rc::new(Slot {
            active: Cell::new(true),
            handler: RefCell::new(Box::new(handler)),
        });
        self.slots.borrow_mut().push(Rc::clone(&slot));
        Subscription {
            slot,
            slots: Rc::downgrade(&self.slots),
        }
    }

    /// Delivers `event` to every live handler and returns how many ran.
    pub fn dispatch(&self, event: &HostEvent) -> usize {
        let live = {
            let mut slots = self.slots.borrow_mut();
            slots.retain(|s| s.active.get());
            slots.clone()
        };
        let mut delivered = 0;
        for slot in live {
            if !slot.active.get() {
                continue;
            }
            // a handler that dispatches into its own hub is skipped for the
            // nested event
            if let Ok(mut handler) = slot.handler.try_borrow_mut() {
                (*handler)(event);
                delivered += 1;
            }
        }
        delivered
    }

    pub fn len(&self) -> usize {
        self.slots.borrow().iter().filter(|s| s.active.get()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct Subscription {
    slot: Rc<Slot>,
    slots: Weak<Slots>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.slot.active.get()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.slot.active.set(false);
        if let Some(slots) = self.slots.upgrade() {
            if let Ok(mut slots) = slots.try_borrow_mut() {
                slots.retain(|s| !Rc::ptr_eq(s, &self.slot));
            }
        }
    }
}
