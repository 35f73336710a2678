use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use super::{
    resolve_active, ContactForm, ContactMessage, Counter, ElementKey, EventHub, HostEvent, Millis,
    RevealEngine, RevealRule, RevealTransition, ScrollState, ScrollTracker, SectionRegistry,
    Subscription, Typewriter, ViewConfig, ViewError,
};

/// Everything the page renders for one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewSnapshot {
    pub active_section: String,
    pub scroll: ScrollState,
    pub revealed: BTreeSet<ElementKey>,
    pub typewriter_text: String,
    pub counters: BTreeMap<ElementKey, u64>,
    pub contact_sent: bool,
}

impl ViewSnapshot {
    pub fn is_active(&self, section: &str) -> bool {
        self.active_section == section
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    pub fn counter(&self, key: &str) -> u64 {
        self.counters.get(key).copied().unwrap_or(0)
    }

    pub fn header_solid(&self) -> bool {
        self.scroll.header_solid
    }

    pub fn back_to_top_visible(&self) -> bool {
        self.scroll.back_to_top_visible
    }
}

struct ViewState {
    lead_margin: f64,
    counter_duration: Millis,
    scroll: ScrollTracker,
    sections: SectionRegistry,
    active_section: String,
    reveals: RevealEngine,
    counters: BTreeMap<ElementKey, Counter>,
    typewriter: Typewriter,
    contact: ContactForm,
    now: Millis,
    revision: u64,
}

impl ViewState {
    fn new(config: &ViewConfig, sections: SectionRegistry, start: Millis) -> Result<Self, ViewError> {
        let scroll = ScrollTracker::new(&config.scroll);
        let active_section = resolve_active(&sections, scroll.offset(), config.scroll.lead_margin)
            .id
            .clone();
        Ok(Self {
            lead_margin: config.scroll.lead_margin,
            counter_duration: config.counter_duration_ms,
            scroll,
            sections,
            active_section,
            reveals: RevealEngine::new(),
            counters: BTreeMap::new(),
            typewriter: Typewriter::new(&config.typewriter, start)?,
            contact: ContactForm::new(config.contact_display_ms),
            now: start,
            revision: 0,
        })
    }

    fn apply(&mut self, event: &HostEvent) {
        match event {
            HostEvent::Scroll { offset } => {
                self.scroll.sample(*offset);
                // resolve against the offset just sampled, in the same pass
                let active = resolve_active(&self.sections, self.scroll.offset(), self.lead_margin);
                if active.id != self.active_section {
                    log::debug!("active section {} -> {}", self.active_section, active.id);
                    self.active_section = active.id.clone();
                }
            }
            HostEvent::Geometry {
                key,
                bounds,
                viewport_height,
            } => match self.reveals.observe(key, *bounds, *viewport_height) {
                Ok(RevealTransition::Revealed) => {
                    if let Some(counter) = self.counters.get_mut(key) {
                        counter.trigger();
                    }
                }
                Ok(RevealTransition::Unchanged) => {}
                Err(e) => log::warn!("ignoring geometry: {e}"),
            },
            HostEvent::Tick { now } => {
                self.now = self.now.max(*now);
                self.typewriter.advance_to(self.now);
                for counter in self.counters.values_mut() {
                    counter.tick(self.now);
                }
                self.contact.tick(self.now);
            }
        }
        self.revision += 1;
    }

    fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            active_section: self.active_section.clone(),
            scroll: self.scroll.state(),
            revealed: self.reveals.revealed().cloned().collect(),
            typewriter_text: self.typewriter.text(),
            counters: self
                .counters
                .iter()
                .map(|(k, c)| (k.clone(), c.value()))
                .collect(),
            contact_sent: self.contact.is_sent(),
        }
    }
}

/// The page's view state, subscribed to a host [`EventHub`].
///
/// Dropping or tearing down the view releases its subscription, after which
/// no host event reaches its state.
pub struct MountedView {
    state: Rc<RefCell<ViewState>>,
    _subscription: Subscription,
}

impl MountedView {
    pub fn mount(
        hub: &EventHub,
        config: &ViewConfig,
        sections: SectionRegistry,
        start: Millis,
    ) -> Result<Self, ViewError> {
        config.validate()?;
        let state = Rc::new(RefCell::new(ViewState::new(config, sections, start)?));
        let weak = Rc::downgrade(&state);
        let subscription = hub.subscribe(move |event| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            match state.try_borrow_mut() {
                Ok(mut state) => state.apply(event),
                Err(_) => log::warn!("view state busy, dropped {event:?}"),
            };
        });
        Ok(Self {
            state,
            _subscription: subscription,
        })
    }

    pub fn track(&self, key: impl Into<ElementKey>, rule: RevealRule) -> Result<(), ViewError> {
        self.state.borrow_mut().reveals.track(key.into(), rule)
    }

    /// Tracks an element that owns a counter; the counter starts the first
    /// frame after the element is revealed. `duration` defaults to the
    /// configured counter duration.
    pub fn track_counter(
        &self,
        key: impl Into<ElementKey>,
        rule: RevealRule,
        target: u64,
        duration: Option<Millis>,
    ) -> Result<(), ViewError> {
        let key = key.into();
        let mut state = self.state.borrow_mut();
        state.reveals.track(key.clone(), rule)?;
        let duration = duration.unwrap_or(state.counter_duration);
        state.counters.insert(key, Counter::new(target, duration));
        Ok(())
    }

    pub fn submit_contact(&self, message: ContactMessage) -> Result<(), ViewError> {
        let mut state = self.state.borrow_mut();
        let now = state.now;
        state.contact.submit(&message, now)?;
        state.revision += 1;
        Ok(())
    }

    /// Swaps in freshly measured section anchors, e.g. after a resize, and
    /// re-resolves the active section against the last scroll offset.
    pub fn relayout(&self, sections: SectionRegistry) {
        let mut state = self.state.borrow_mut();
        let active = resolve_active(&sections, state.scroll.offset(), state.lead_margin)
            .id
            .clone();
        if active != state.active_section {
            log::debug!("active section {} -> {active} after relayout", state.active_section);
        }
        state.sections = sections;
        state.active_section = active;
        state.revision += 1;
    }

    /// Keys of tracked elements that have not been revealed yet, so the
    /// host only measures what can still change.
    pub fn pending_reveals(&self) -> Vec<ElementKey> {
        self.state.borrow().reveals.pending().cloned().collect()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        self.state.borrow().snapshot()
    }

    pub fn observer(&self) -> ViewObserver {
        ViewObserver {
            state: Rc::clone(&self.state),
        }
    }

    /// Releases the hub subscription and returns the last frame.
    pub fn teardown(self) -> ViewSnapshot {
        let snapshot = self.snapshot();
        log::debug!("view torn down at revision {}", self.state.borrow().revision);
        snapshot
    }
}

/// Where the host keeps its view. Empty until the page has been laid out
/// and mounted, and again after teardown.
#[derive(Default)]
pub struct ViewSlot {
    view: Option<MountedView>,
}

impl ViewSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.view.is_some()
    }

    /// Stores `view`, tearing down any view mounted before it.
    pub fn insert(&mut self, view: MountedView) {
        if let Some(previous) = self.view.replace(view) {
            previous.teardown();
        }
    }

    pub fn view(&self) -> Result<&MountedView, ViewError> {
        self.view.as_ref().ok_or(ViewError::NotMounted)
    }

    pub fn submit_contact(&self, message: ContactMessage) -> Result<(), ViewError> {
        self.view()?.submit_contact(message)
    }

    pub fn teardown(&mut self) -> Option<ViewSnapshot> {
        self.view.take().map(MountedView::teardown)
    }
}

/// Read-only access to a view's state that stays valid after teardown.
#[derive(Clone)]
pub struct ViewObserver {
    state: Rc<RefCell<ViewState>>,
}

impl ViewObserver {
    pub fn snapshot(&self) -> ViewSnapshot {
        self.state.borrow().snapshot()
    }

    /// Number of state changes applied so far.
    pub fn revision(&self) -> u64 {
        self.state.borrow().revision
    }
}
