//! Scroll- and clock-driven view state for the portfolio page.
//!
//! Everything in here is host independent: the browser layer in `app` feeds
//! scroll offsets, element geometry and frame timestamps through an
//! [`EventHub`] and renders the [`ViewSnapshot`] the mounted view produces.

mod clock;
mod config;
mod contact;
mod controller;
mod counter;
mod error;
mod hub;
mod reveal;
mod scroll;
mod sections;
mod typewriter;

pub use clock::{Clock, ManualClock, Millis};
pub use config::{ScrollConfig, TypewriterConfig, ViewConfig};
pub use contact::{ContactForm, ContactMessage, ContactStatus};
pub use controller::{MountedView, ViewObserver, ViewSlot, ViewSnapshot};
pub use counter::{Counter, CounterPhase};
pub use error::{ContactError, ViewError};
pub use hub::{EventHub, HostEvent, Subscription};
pub use reveal::{Bounds, ElementKey, RevealEngine, RevealRule, RevealState, RevealTransition};
pub use scroll::{ScrollState, ScrollTracker};
pub use sections::{resolve_active, Section, SectionRegistry};
pub use typewriter::{Typewriter, TypewriterPhase};
