use super::ScrollConfig;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub offset: f64,
    /// Header switches to its solid background
    pub header_solid: bool,
    /// Back-to-top button is shown
    pub back_to_top_visible: bool,
}

/// Holds the latest window scroll offset and the two thresholds derived from
/// it. Until the first sample arrives the offset reads as 0.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    header_threshold: f64,
    back_to_top_threshold: f64,
    state: ScrollState,
}

impl ScrollTracker {
    pub fn new(config: &ScrollConfig) -> Self {
        Self {
            header_threshold: config.header_threshold,
            back_to_top_threshold: config.back_to_top_threshold,
            state: ScrollState::default(),
        }
    }

    /// Records a new offset. Negative and non-finite offsets (overscroll
    /// bounce, missing window) read as 0.
    pub fn sample(&mut self, offset: f64) -> ScrollState {
        let offset = if offset.is_finite() { offset.max(0.0) } else { 0.0 };
        self.state = ScrollState {
            offset,
            header_solid: offset > self.header_threshold,
            back_to_top_visible: offset > self.back_to_top_threshold,
        };
        self.state
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn offset(&self) -> f64 {
        self.state.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> ScrollTracker {
        ScrollTracker::new(&ScrollConfig::default())
    }

    #[test]
    fn test_initial_state() {
        let t = tracker();
        assert_eq!(t.state(), ScrollState::default());
        assert_eq!(t.offset(), 0.0);
    }

    #[test]
    fn test_thresholds_are_independent() {
        let mut t = tracker();
        let s = t.sample(100.0);
        assert!(s.header_solid);
        assert!(!s.back_to_top_visible);

        let s = t.sample(301.0);
        assert!(s.header_solid);
        assert!(s.back_to_top_visible);

        let s = t.sample(20.0);
        assert!(!s.header_solid);
        assert!(!s.back_to_top_visible);
    }

    #[test]
    fn test_thresholds_are_strict() {
        let mut t = tracker();
        assert!(!t.sample(50.0).header_solid);
        assert!(!t.sample(300.0).back_to_top_visible);
        assert!(t.sample(50.5).header_solid);
    }

    #[test]
    fn test_bad_offsets_read_as_zero() {
        let mut t = tracker();
        assert_eq!(t.sample(-40.0).offset, 0.0);
        assert_eq!(t.sample(f64::NAN).offset, 0.0);
        assert_eq!(t.sample(f64::INFINITY), ScrollState::default());
    }
}
