//! Bridges the browser into the view state.
//!
//! Once per animation frame the window scroll offset, the geometry of every
//! element still waiting to be revealed and the frame timestamp are pushed
//! through the [`EventHub`]; the resulting [`ViewSnapshot`] is published in
//! a signal the components read from. Section anchors are re-measured
//! whenever the window is resized or the page height changes.

use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_raf_fn, use_window, UseRafFnCallbackArgs};

use super::content::NAV_SECTIONS;
use crate::view_state::{
    Bounds, Clock, ContactMessage, ElementKey, EventHub, HostEvent, Millis, MountedView,
    RevealRule, Section, SectionRegistry, ViewConfig, ViewError, ViewSlot, ViewSnapshot,
};

struct TrackedElement {
    key: ElementKey,
    rule: RevealRule,
    counter: Option<(u64, Option<Millis>)>,
    node: NodeRef<html::Div>,
}

#[derive(Clone, Copy)]
pub struct ViewContext {
    snapshot: RwSignal<ViewSnapshot>,
    hub: StoredValue<EventHub, LocalStorage>,
    view: StoredValue<ViewSlot, LocalStorage>,
    elements: StoredValue<Vec<TrackedElement>, LocalStorage>,
    last_scroll: StoredValue<Option<f64>>,
    last_page_height: StoredValue<Option<i32>>,
    resized: StoredValue<bool>,
}

/// Creates the page's view context, starts the frame loop and mounts the
/// view state once the page has been laid out.
pub fn provide_view_state() -> ViewContext {
    let ctx = ViewContext {
        snapshot: RwSignal::new(ViewSnapshot {
            active_section: NAV_SECTIONS[0].id.to_string(),
            ..ViewSnapshot::default()
        }),
        hub: StoredValue::new_local(EventHub::new()),
        view: StoredValue::new_local(ViewSlot::new()),
        elements: StoredValue::new_local(Vec::new()),
        last_scroll: StoredValue::new(None),
        last_page_height: StoredValue::new(None),
        resized: StoredValue::new(false),
    };
    provide_context(ctx);

    // children have registered their elements by the time this runs
    Effect::new(move |_| ctx.mount());

    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        ctx.frame(args.timestamp);
    });

    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        ctx.resized.set_value(true);
    });

    on_cleanup(move || {
        let _ = ctx.view.try_update_value(|slot| {
            slot.teardown();
        });
    });

    ctx
}

pub fn use_view_state() -> ViewContext {
    expect_context::<ViewContext>()
}

fn load_config() -> ViewConfig {
    ViewConfig::from_json(include_str!("../../config/view.json")).unwrap_or_else(|e| {
        log::warn!("falling back to default view config: {e}");
        ViewConfig::default()
    })
}

/// `performance.now()`, the same timeline animation frames are stamped on.
struct PerformanceClock;

impl Clock for PerformanceClock {
    fn now(&self) -> Millis {
        window()
            .performance()
            .map(|p| p.now())
            .unwrap_or(0.0)
            .max(0.0) as Millis
    }
}

fn page_height() -> i32 {
    document()
        .document_element()
        .map(|el| el.scroll_height())
        .unwrap_or(0)
}

fn scroll_offset() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

fn measure_sections() -> Result<SectionRegistry, ViewError> {
    let scroll = scroll_offset();
    let sections = NAV_SECTIONS
        .iter()
        .map(|s| {
            let top = document()
                .get_element_by_id(s.id)
                .map(|el| el.get_bounding_client_rect().top() + scroll)
                .unwrap_or(0.0);
            Section::new(s.id, s.label, top)
        })
        .collect();
    SectionRegistry::new(sections)
}

fn measure(node: &NodeRef<html::Div>) -> Option<(Bounds, f64)> {
    let el = node.get_untracked()?;
    let rect = el.get_bounding_client_rect();
    let viewport_height = window().inner_height().ok()?.as_f64()?;
    Some((Bounds::new(rect.top(), rect.height()), viewport_height))
}

impl ViewContext {
    fn mount(self) {
        if self.view.with_value(ViewSlot::is_mounted) {
            return;
        }
        let config = load_config();
        let view = measure_sections().and_then(|sections| {
            self.hub.with_value(|hub| {
                MountedView::mount(hub, &config, sections, PerformanceClock.now())
            })
        });
        let view = match view {
            Ok(view) => view,
            Err(e) => {
                log::error!("could not mount view state: {e}");
                return;
            }
        };
        self.elements.with_value(|elements| {
            for el in elements {
                let res = match el.counter {
                    Some((target, duration)) => {
                        view.track_counter(el.key.clone(), el.rule, target, duration)
                    }
                    None => view.track(el.key.clone(), el.rule),
                };
                if let Err(e) = res {
                    log::warn!("{e}");
                }
            }
        });
        log::debug!("view state mounted");
        self.view.update_value(|slot| slot.insert(view));
    }

    /// Re-measures section anchors when the window was resized or the page
    /// height changed since the last frame. Returns whether it did.
    fn relayout_if_needed(self) -> bool {
        let height = page_height();
        let resized = self.resized.get_value();
        if !resized && self.last_page_height.get_value() == Some(height) {
            return false;
        }
        self.resized.set_value(false);
        self.last_page_height.set_value(Some(height));
        match measure_sections() {
            Ok(sections) => self.view.with_value(|slot| {
                if let Ok(view) = slot.view() {
                    view.relayout(sections);
                }
            }),
            Err(e) => log::warn!("could not re-measure sections: {e}"),
        }
        true
    }

    fn frame(self, timestamp: f64) {
        let Some(pending) = self
            .view
            .with_value(|slot| slot.view().ok().map(MountedView::pending_reveals))
        else {
            return;
        };
        let relaid = self.relayout_if_needed();
        let offset = scroll_offset();
        let scrolled = self.last_scroll.get_value() != Some(offset);
        self.hub.with_value(|hub| {
            if scrolled {
                self.last_scroll.set_value(Some(offset));
                hub.dispatch(&HostEvent::Scroll { offset });
            }
            // a relayout can bring elements into view without any scrolling
            if scrolled || relaid {
                self.elements.with_value(|elements| {
                    for el in elements.iter().filter(|el| pending.contains(&el.key)) {
                        if let Some((bounds, viewport_height)) = measure(&el.node) {
                            hub.dispatch(&HostEvent::Geometry {
                                key: el.key.clone(),
                                bounds,
                                viewport_height,
                            });
                        }
                    }
                });
            }
            hub.dispatch(&HostEvent::Tick {
                now: timestamp.max(0.0) as Millis,
            });
        });
        self.publish();
    }

    fn publish(self) {
        let Some(next) = self
            .view
            .with_value(|slot| slot.view().ok().map(MountedView::snapshot))
        else {
            return;
        };
        if self.snapshot.with_untracked(|current| current != &next) {
            self.snapshot.set(next);
        }
    }

    fn register(
        self,
        key: ElementKey,
        rule: RevealRule,
        counter: Option<(u64, Option<Millis>)>,
    ) -> NodeRef<html::Div> {
        let node = NodeRef::<html::Div>::new();
        self.elements.update_value(|elements| {
            elements.push(TrackedElement {
                key,
                rule,
                counter,
                node,
            })
        });
        node
    }

    pub fn submit_contact(self, message: ContactMessage) -> Result<(), ViewError> {
        self.view.with_value(|slot| slot.submit_contact(message))?;
        self.publish();
        Ok(())
    }

    pub fn active_section(self) -> Memo<String> {
        Memo::new(move |_| self.snapshot.with(|s| s.active_section.clone()))
    }

    pub fn header_solid(self) -> Memo<bool> {
        Memo::new(move |_| self.snapshot.with(ViewSnapshot::header_solid))
    }

    pub fn back_to_top_visible(self) -> Memo<bool> {
        Memo::new(move |_| self.snapshot.with(ViewSnapshot::back_to_top_visible))
    }

    pub fn typewriter_text(self) -> Memo<String> {
        Memo::new(move |_| self.snapshot.with(|s| s.typewriter_text.clone()))
    }

    pub fn contact_sent(self) -> Memo<bool> {
        Memo::new(move |_| self.snapshot.with(|s| s.contact_sent))
    }
}

/// Tracks a one-shot reveal for the returned node.
pub fn use_reveal(
    key: impl Into<ElementKey>,
    rule: RevealRule,
) -> (NodeRef<html::Div>, Memo<bool>) {
    let ctx = use_view_state();
    let key = key.into();
    let node = ctx.register(key.clone(), rule, None);
    let revealed = Memo::new(move |_| ctx.snapshot.with(|s| s.is_revealed(key.as_str())));
    (node, revealed)
}

/// Tracks a counter that starts once the returned node is revealed.
pub fn use_counter(
    key: impl Into<ElementKey>,
    rule: RevealRule,
    target: u64,
    duration: Option<Millis>,
) -> (NodeRef<html::Div>, Memo<u64>) {
    let ctx = use_view_state();
    let key = key.into();
    let node = ctx.register(key.clone(), rule, Some((target, duration)));
    let value = Memo::new(move |_| ctx.snapshot.with(|s| s.counter(key.as_str())));
    (node, value)
}

pub fn scroll_to_section(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        return;
    };
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

pub fn scroll_to_top() {
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}
