//! Animated statistic counters: 0 to target over a fixed number of frames.

use crate::constants::COUNTER_STEPS;

pub struct StatCounter {
    target: f64,
    current: f64,
    increment: f64,
}

impl StatCounter {
    pub fn new(target: f64) -> Self {
        Self {
            target,
            current: 0.0,
            increment: target / COUNTER_STEPS,
        }
    }

    /// Advance one frame step.
    pub fn tick(&mut self) {
        if !self.done() {
            self.current += self.increment;
        }
    }

    pub fn done(&self) -> bool {
        self.current >= self.target
    }

    /// Value to display this frame: the running count rounded up, capped at
    /// the target once reached.
    pub fn display(&self) -> String {
        let value = if self.done() {
            self.target
        } else {
            self.current.ceil()
        };
        format_thousands(value.max(0.0) as u64)
    }
}

/// Group digits with commas, e.g. 1234567 -> "1,234,567".
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
