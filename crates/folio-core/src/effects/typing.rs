//! Hero typing effect: type a phrase, hold, erase, move to the next.
//!
//! The web frontend calls [`TypingEffect::tick`] once per frame with the
//! elapsed time and writes [`TypingEffect::text`] into the DOM whenever the
//! visible text changed.

use crate::constants::{
    ERASE_INTERVAL, HOLD_DELAY, NEXT_PHRASE_DELAY, TYPE_INTERVAL, TYPING_START_DELAY,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Waiting,
    Typing,
    Holding,
    Erasing,
}

pub struct TypingEffect {
    phrases: Vec<String>,
    phrase: usize,
    visible: usize,
    current: String,
    phase: Phase,
    timer: f32,
}

impl TypingEffect {
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            phrase: 0,
            visible: 0,
            current: String::new(),
            phase: Phase::Waiting,
            timer: TYPING_START_DELAY,
        }
    }

    /// Currently visible text.
    pub fn text(&self) -> &str {
        &self.current
    }

    /// Advance by `dt` seconds; returns true when the visible text changed.
    /// Large `dt` values replay as many steps as they cover.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.phrases.is_empty() {
            return false;
        }
        let mut changed = false;
        self.timer -= dt;
        while self.timer <= 0.0 {
            match self.phase {
                Phase::Waiting => {
                    // The first character appears the moment the wait ends.
                    self.phase = Phase::Typing;
                }
                Phase::Typing => {
                    let phrase_chars = self.phrases[self.phrase].chars().count();
                    if self.visible < phrase_chars {
                        if let Some(c) = self.phrases[self.phrase].chars().nth(self.visible) {
                            self.current.push(c);
                        }
                        self.visible += 1;
                        changed = true;
                    }
                    if self.visible >= phrase_chars {
                        self.phase = Phase::Holding;
                        self.timer += HOLD_DELAY;
                    } else {
                        self.timer += TYPE_INTERVAL;
                    }
                }
                Phase::Holding => {
                    self.phase = Phase::Erasing;
                }
                Phase::Erasing => {
                    if self.visible > 0 {
                        self.current.pop();
                        self.visible -= 1;
                        changed = true;
                    }
                    if self.visible == 0 {
                        self.phrase = (self.phrase + 1) % self.phrases.len();
                        self.phase = Phase::Waiting;
                        self.timer += NEXT_PHRASE_DELAY;
                    } else {
                        self.timer += ERASE_INTERVAL;
                    }
                }
            }
        }
        changed
    }
}
