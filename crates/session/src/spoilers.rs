//! Spoiler-reveal state machine.
//!
//! Each title carries an independent three-state phase:
//!
//! ```text
//!   hidden --request--> confirming --confirm--> revealed
//!     ^                     |                      |
//!     +------cancel---------+                      |
//!     +---------------------hide-------------------+
//! ```
//!
//! Transitions happen only on explicit user action; there is no timeout.
//! An action that does not match the current phase leaves it unchanged.
//! This state never affects filtering or sorting.

use std::collections::HashMap;
use tracing::debug;

/// Reveal phase for one title's spoiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpoilerPhase {
    /// Initial: the spoiler text is not shown
    #[default]
    Hidden,
    /// The user asked to reveal and must confirm
    Confirming,
    /// The spoiler text is shown
    Revealed,
}

/// Per-title spoiler phases, keyed by title.
///
/// Titles not present in the map are `Hidden`; the map only holds titles
/// the user has interacted with.
#[derive(Debug, Default)]
pub struct SpoilerBoard {
    phases: HashMap<String, SpoilerPhase>,
}

impl SpoilerBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current phase for a title.
    pub fn phase(&self, title: &str) -> SpoilerPhase {
        self.phases.get(title).copied().unwrap_or_default()
    }

    /// User asked to see the spoiler: hidden -> confirming.
    pub fn request(&mut self, title: &str) -> SpoilerPhase {
        self.step(title, SpoilerPhase::Hidden, SpoilerPhase::Confirming)
    }

    /// User confirmed the warning: confirming -> revealed.
    pub fn confirm(&mut self, title: &str) -> SpoilerPhase {
        self.step(title, SpoilerPhase::Confirming, SpoilerPhase::Revealed)
    }

    /// User backed out of the warning: confirming -> hidden.
    pub fn cancel(&mut self, title: &str) -> SpoilerPhase {
        self.step(title, SpoilerPhase::Confirming, SpoilerPhase::Hidden)
    }

    /// User re-hid a revealed spoiler: revealed -> hidden.
    pub fn hide(&mut self, title: &str) -> SpoilerPhase {
        self.step(title, SpoilerPhase::Revealed, SpoilerPhase::Hidden)
    }

    /// Apply one transition if the title is in the expected phase.
    /// Returns the phase after the action, changed or not.
    fn step(&mut self, title: &str, from: SpoilerPhase, to: SpoilerPhase) -> SpoilerPhase {
        let current = self.phase(title);
        if current != from {
            return current;
        }
        debug!("spoiler phase for {title:?}: {from:?} -> {to:?}");
        self.phases.insert(title.to_string(), to);
        to
    }
}
