//! One-shot "reveal on scroll" triggers.
//!
//! Each tracked element starts out hidden and flips to revealed the first
//! time enough of it sits inside the viewport. There is no way back: an
//! element that scrolls out again stays revealed.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::ViewError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementKey(String);

impl ElementKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ElementKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ElementKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// When an element counts as "in view".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RevealRule {
    /// Fraction of the element height that must be inside the viewport.
    /// 0 means any overlap at all.
    pub amount: f64,
    /// Pixels trimmed off the top and bottom of the viewport first
    pub margin: f64,
}

impl RevealRule {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn amount(amount: f64) -> Self {
        Self {
            amount: amount.clamp(0.0, 1.0),
            margin: 0.0,
        }
    }

    pub fn margin(margin: f64) -> Self {
        Self {
            amount: 0.0,
            margin,
        }
    }

    /// Whether an element at `bounds` passes this rule in a viewport of
    /// `viewport_height`.
    pub fn is_met(&self, bounds: Bounds, viewport_height: f64) -> bool {
        if !bounds.is_finite() || !viewport_height.is_finite() || !self.margin.is_finite() {
            return false;
        }
        let view_top = self.margin;
        let view_bottom = viewport_height - self.margin;
        if view_bottom <= view_top {
            return false;
        }
        let top = bounds.top;
        let bottom = bounds.top + bounds.height.max(0.0);
        if bounds.height <= 0.0 {
            return top >= view_top && top <= view_bottom;
        }
        let overlap = bottom.min(view_bottom) - top.max(view_top);
        if overlap <= 0.0 {
            return false;
        }
        let amount = self.effective_amount();
        amount <= 0.0 || overlap / bounds.height >= amount
    }

    /// `amount` as used by [`is_met`](Self::is_met): NaN reads as any
    /// overlap, everything else is clamped to `0..=1`.
    fn effective_amount(&self) -> f64 {
        if self.amount.is_nan() {
            0.0
        } else {
            self.amount.clamp(0.0, 1.0)
        }
    }
}

/// Element box relative to the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    fn is_finite(&self) -> bool {
        self.top.is_finite() && self.height.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    NotRevealed,
    Revealed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTransition {
    /// First time in view
    Revealed,
    Unchanged,
}

#[derive(Debug, Clone)]
struct Tracked {
    rule: RevealRule,
    state: RevealState,
}

#[derive(Debug, Clone, Default)]
pub struct RevealEngine {
    elements: HashMap<ElementKey, Tracked>,
}

impl RevealEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, key: ElementKey, rule: RevealRule) -> Result<(), ViewError> {
        if self.elements.contains_key(&key) {
            return Err(ViewError::DuplicateElement(key.to_string()));
        }
        self.elements.insert(
            key,
            Tracked {
                rule,
                state: RevealState::NotRevealed,
            },
        );
        Ok(())
    }

    pub fn observe(
        &mut self,
        key: &ElementKey,
        bounds: Bounds,
        viewport_height: f64,
    ) -> Result<RevealTransition, ViewError> {
        let tracked = self
            .elements
            .get_mut(key)
            .ok_or_else(|| ViewError::UnknownElement(key.to_string()))?;
        if tracked.state == RevealState::Revealed {
            return Ok(RevealTransition::Unchanged);
        }
        if tracked.rule.is_met(bounds, viewport_height) {
            tracked.state = RevealState::Revealed;
            log::debug!("revealed {key}");
            return Ok(RevealTransition::Revealed);
        }
        Ok(RevealTransition::Unchanged)
    }

    pub fn state(&self, key: &ElementKey) -> Result<RevealState, ViewError> {
        self.elements
            .get(key)
            .map(|t| t.state)
            .ok_or_else(|| ViewError::UnknownElement(key.to_string()))
    }

    pub fn is_revealed(&self, key: &ElementKey) -> bool {
        matches!(self.state(key), Ok(RevealState::Revealed))
    }

    /// Keys still waiting for their first reveal.
    pub fn pending(&self) -> impl Iterator<Item = &ElementKey> {
        self.elements
            .iter()
            .filter(|(_, t)| t.state == RevealState::NotRevealed)
            .map(|(k, _)| k)
    }

    pub fn revealed(&self) -> impl Iterator<Item = &ElementKey> {
        self.elements
            .iter()
            .filter(|(_, t)| t.state == RevealState::Revealed)
            .map(|(k, _)| k)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const VIEWPORT: f64 = 800.0;

    #[test]
    fn test_any_overlap_rule() {
        let rule = RevealRule::any();
        assert!(!rule.is_met(Bounds::new(800.0, 200.0), VIEWPORT));
        assert!(rule.is_met(Bounds::new(799.0, 200.0), VIEWPORT));
        assert!(rule.is_met(Bounds::new(-150.0, 200.0), VIEWPORT));
        assert!(!rule.is_met(Bounds::new(-200.0, 200.0), VIEWPORT));
    }

    #[test]
    fn test_margin_rule_shrinks_viewport() {
        let rule = RevealRule::margin(150.0);
        // bottom edge of the shrunken viewport is at 650
        assert!(!rule.is_met(Bounds::new(650.0, 400.0), VIEWPORT));
        assert!(rule.is_met(Bounds::new(640.0, 400.0), VIEWPORT));
        // viewport smaller than twice the margin never matches
        assert!(!rule.is_met(Bounds::new(0.0, 100.0), 250.0));
    }

    #[test]
    fn test_amount_rule() {
        let rule = RevealRule::amount(0.5);
        assert!(!rule.is_met(Bounds::new(701.0, 200.0), VIEWPORT));
        assert!(rule.is_met(Bounds::new(700.0, 200.0), VIEWPORT));
        assert!(rule.is_met(Bounds::new(600.0, 200.0), VIEWPORT));
        // half of it above the top edge
        assert!(rule.is_met(Bounds::new(-100.0, 200.0), VIEWPORT));
        assert!(!rule.is_met(Bounds::new(-101.0, 200.0), VIEWPORT));
        assert_eq!(RevealRule::amount(3.0).amount, 1.0);
    }

    #[test]
    fn test_raw_amount_is_sanitized() {
        let nan = RevealRule {
            amount: f64::NAN,
            margin: 0.0,
        };
        assert!(nan.is_met(Bounds::new(799.0, 200.0), VIEWPORT));

        let over: RevealRule = serde_json::from_str(r#"{"amount": 5.0, "margin": 0.0}"#).unwrap();
        assert!(over.is_met(Bounds::new(600.0, 200.0), VIEWPORT));
        assert!(!over.is_met(Bounds::new(601.0, 200.0), VIEWPORT));

        let under = RevealRule {
            amount: -2.0,
            margin: 0.0,
        };
        assert!(under.is_met(Bounds::new(799.0, 200.0), VIEWPORT));
    }

    #[test]
    fn test_zero_height_and_bad_geometry() {
        let rule = RevealRule::any();
        assert!(rule.is_met(Bounds::new(100.0, 0.0), VIEWPORT));
        assert!(!rule.is_met(Bounds::new(900.0, 0.0), VIEWPORT));
        assert!(!rule.is_met(Bounds::new(f64::NAN, 10.0), VIEWPORT));
        assert!(!rule.is_met(Bounds::new(10.0, 10.0), f64::INFINITY));
    }

    #[test]
    fn test_reveal_fires_once() {
        let mut engine = RevealEngine::new();
        let key = ElementKey::from("about");
        engine.track(key.clone(), RevealRule::margin(150.0)).unwrap();
        assert_eq!(engine.state(&key), Ok(RevealState::NotRevealed));
        assert_eq!(engine.pending().count(), 1);

        let below = Bounds::new(1200.0, 500.0);
        let inside = Bounds::new(200.0, 500.0);
        assert_eq!(engine.observe(&key, below, VIEWPORT), Ok(RevealTransition::Unchanged));
        assert_eq!(engine.observe(&key, inside, VIEWPORT), Ok(RevealTransition::Revealed));
        assert_eq!(engine.observe(&key, inside, VIEWPORT), Ok(RevealTransition::Unchanged));
        // scrolled away again
        assert_eq!(engine.observe(&key, below, VIEWPORT), Ok(RevealTransition::Unchanged));
        assert!(engine.is_revealed(&key));
        assert_eq!(engine.pending().count(), 0);
        assert_eq!(engine.revealed().count(), 1);
    }

    #[test]
    fn test_elements_are_independent() {
        let mut engine = RevealEngine::new();
        engine.track("a".into(), RevealRule::any()).unwrap();
        engine.track("b".into(), RevealRule::any()).unwrap();
        engine
            .observe(&"b".into(), Bounds::new(10.0, 10.0), VIEWPORT)
            .unwrap();
        assert!(!engine.is_revealed(&"a".into()));
        assert!(engine.is_revealed(&"b".into()));
        assert_eq!(engine.len(), 2);
    }

    #[test]
    fn test_unknown_and_duplicate_keys() {
        let mut engine = RevealEngine::new();
        engine.track("a".into(), RevealRule::any()).unwrap();
        assert_eq!(
            engine.track("a".into(), RevealRule::any()),
            Err(ViewError::DuplicateElement("a".to_string()))
        );
        assert_eq!(
            engine.observe(&"zzz".into(), Bounds::new(0.0, 1.0), VIEWPORT),
            Err(ViewError::UnknownElement("zzz".to_string()))
        );
        assert!(!engine.is_revealed(&"zzz".into()));
    }

    proptest! {
        #[test]
        fn prop_revealed_is_terminal(
            tops in prop::collection::vec(-3000.0f64..3000.0, 1..40),
            amount in 0.0f64..1.0,
            margin in 0.0f64..200.0,
        ) {
            let mut engine = RevealEngine::new();
            let key = ElementKey::from("item");
            engine.track(key.clone(), RevealRule { amount, margin }).unwrap();
            let mut seen = false;
            let mut fired = 0;
            for top in tops {
                if engine.observe(&key, Bounds::new(top, 300.0), VIEWPORT).unwrap()
                    == RevealTransition::Revealed
                {
                    fired += 1;
                }
                if seen {
                    prop_assert!(engine.is_revealed(&key));
                }
                seen |= engine.is_revealed(&key);
            }
            prop_assert!(fired <= 1);
        }
    }
}
