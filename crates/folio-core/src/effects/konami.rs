//! Konami-code matcher over the last ten pressed key names.

use smallvec::SmallVec;

pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

#[derive(Default)]
pub struct KonamiTracker {
    recent: SmallVec<[String; 10]>,
}

impl KonamiTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press; returns true when the last ten keys spell the
    /// Konami sequence.
    pub fn push(&mut self, key: &str) -> bool {
        if self.recent.len() == KONAMI_SEQUENCE.len() {
            self.recent.remove(0);
        }
        self.recent.push(key.to_owned());
        self.recent.len() == KONAMI_SEQUENCE.len()
            && self
                .recent
                .iter()
                .zip(KONAMI_SEQUENCE.iter())
                .all(|(pressed, expected)| pressed == expected)
    }
}
