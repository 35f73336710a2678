//! Type-pause-delete cycle over a fixed list of phrases.
//!
//! The machine is advanced by absolute timestamps, so the visible text at a
//! given elapsed time depends only on the phrase list and the intervals.

use super::{Millis, TypewriterConfig, ViewError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterPhase {
    Typing,
    PausedAtFull,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    type_interval: Millis,
    delete_interval: Millis,
    pause: Millis,
    phrase_index: usize,
    visible_chars: usize,
    phase: TypewriterPhase,
    /// When the next step is due
    next_at: Millis,
}

impl Typewriter {
    /// Starts typing the first phrase at `start`.
    pub fn new(config: &TypewriterConfig, start: Millis) -> Result<Self, ViewError> {
        if config.phrases.iter().all(String::is_empty) {
            return Err(ViewError::NoPhrases);
        }
        let mut tw = Self {
            phrases: config.phrases.iter().map(|p| p.chars().collect()).collect(),
            type_interval: config.type_interval_ms.max(1),
            delete_interval: config.delete_interval_ms.max(1),
            // every step has to move time forward
            pause: config.pause_ms.max(1),
            phrase_index: 0,
            visible_chars: 0,
            phase: TypewriterPhase::Typing,
            next_at: start,
        };
        tw.begin_typing(start);
        Ok(tw)
    }

    fn current(&self) -> &[char] {
        &self.phrases[self.phrase_index]
    }

    fn begin_typing(&mut self, at: Millis) {
        self.phase = TypewriterPhase::Typing;
        self.visible_chars = 0;
        if self.current().is_empty() {
            self.phase = TypewriterPhase::PausedAtFull;
            self.next_at = at.saturating_add(self.pause);
        } else {
            self.next_at = at.saturating_add(self.type_interval);
        }
    }

    fn step(&mut self) {
        let at = self.next_at;
        match self.phase {
            TypewriterPhase::Typing => {
                self.visible_chars += 1;
                if self.visible_chars >= self.current().len() {
                    self.phase = TypewriterPhase::PausedAtFull;
                    self.next_at = at.saturating_add(self.pause);
                } else {
                    self.next_at = at.saturating_add(self.type_interval);
                }
            }
            TypewriterPhase::PausedAtFull => {
                if self.visible_chars == 0 {
                    // empty phrase, nothing to delete
                    self.next_phrase(at);
                } else {
                    self.phase = TypewriterPhase::Deleting;
                    self.next_at = at.saturating_add(self.delete_interval);
                }
            }
            TypewriterPhase::Deleting => {
                self.visible_chars -= 1;
                if self.visible_chars == 0 {
                    self.next_phrase(at);
                } else {
                    self.next_at = at.saturating_add(self.delete_interval);
                }
            }
        }
    }

    fn next_phrase(&mut self, at: Millis) {
        self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
        self.begin_typing(at);
    }

    /// Applies every step due at or before `now`.
    pub fn advance_to(&mut self, now: Millis) {
        while self.next_at <= now {
            let due = self.next_at;
            self.step();
            if self.next_at <= due {
                // only reachable once the clock saturates at Millis::MAX
                break;
            }
        }
    }

    pub fn text(&self) -> String {
        self.current()[..self.visible_chars].iter().collect()
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn visible_chars(&self) -> usize {
        self.visible_chars
    }

    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }
}
