//! Proposal page state: the evasive "No" button and the "Yes" redirect.
//!
//! DESIGN
//! ======
//! The "No" button starts `Docked` in the button row. The first time the
//! pointer comes near it flips to `Fleeing` and from then on lives at a
//! fixed viewport position that is re-sampled on every approach and on every
//! window resize. Accepting schedules a single delayed navigation no matter
//! how many times the button fled first.

#[cfg(test)]
#[path = "proposal_test.rs"]
mod proposal_test;

use crate::util::evasion::{ButtonSize, Position, Viewport, sample_escape_position};
use crate::util::random::UnitSampler;

pub const ITINERARY_ROUTE: &str = "/itinerary";

/// Delay between the "Yes" click and the redirect, so the confetti can play.
pub const NAVIGATE_DELAY_MS: u32 = 1500;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum NoButton {
    /// Sitting next to "Yes" in the button row.
    #[default]
    Docked,
    /// Detached and fixed at a viewport position.
    Fleeing(Position),
}

impl NoButton {
    #[must_use]
    pub fn is_fleeing(self) -> bool {
        matches!(self, Self::Fleeing(_))
    }

    #[must_use]
    pub fn position(self) -> Option<Position> {
        match self {
            Self::Docked => None,
            Self::Fleeing(pos) => Some(pos),
        }
    }
}

/// A deferred route change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub route: &'static str,
    pub delay_ms: u32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProposalState {
    pub no_button: NoButton,
    pub dodges: u32,
    pub accepted: bool,
}

impl ProposalState {
    /// Pointer came near the "No" button: move it somewhere else.
    pub fn dodge<S: UnitSampler + ?Sized>(&mut self, viewport: Viewport, button: ButtonSize, sampler: &mut S) {
        self.no_button = NoButton::Fleeing(sample_escape_position(viewport, button, sampler));
        self.dodges = self.dodges.saturating_add(1);
    }

    /// Window resized. A fleeing button is re-sampled so it cannot end up
    /// off-screen; a docked one stays put. Returns whether it moved.
    pub fn handle_resize<S: UnitSampler + ?Sized>(
        &mut self,
        viewport: Viewport,
        button: ButtonSize,
        sampler: &mut S,
    ) -> bool {
        if !self.no_button.is_fleeing() {
            return false;
        }
        self.no_button = NoButton::Fleeing(sample_escape_position(viewport, button, sampler));
        true
    }

    /// "Yes" clicked. The first call yields the redirect to schedule; repeat
    /// clicks while the celebration plays yield `None`.
    pub fn accept(&mut self) -> Option<Navigation> {
        if self.accepted {
            return None;
        }
        self.accepted = true;
        Some(Navigation { route: ITINERARY_ROUTE, delay_ms: NAVIGATE_DELAY_MS })
    }

    /// Inline style for the fleeing button, empty while docked.
    #[must_use]
    pub fn fleeing_style(&self) -> String {
        self.no_button
            .position()
            .map(|pos| format!("left: {:.1}px; top: {:.1}px;", pos.x, pos.y))
            .unwrap_or_default()
    }
}
