pub mod counter;
pub mod konami;
pub mod trail;
pub mod typing;

pub use counter::{format_thousands, StatCounter};
pub use konami::{KonamiTracker, KONAMI_SEQUENCE};
pub use trail::CursorTrail;
pub use typing::TypingEffect;
