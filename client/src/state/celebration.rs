//! App-wide celebration trigger.
//!
//! The confetti overlay lives above the router so a run started on the
//! proposal page keeps falling after the redirect to the itinerary.

#[cfg(test)]
#[path = "celebration_test.rs"]
mod celebration_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CelebrationState {
    /// Bumped once per requested confetti run; zero means none yet.
    pub run_seq: u64,
}

impl CelebrationState {
    pub fn start(&mut self) {
        self.run_seq = self.run_seq.wrapping_add(1);
    }

    #[must_use]
    pub fn has_started(&self) -> bool {
        self.run_seq > 0
    }
}
