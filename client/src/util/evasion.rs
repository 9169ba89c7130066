//! Coordinate sampling for the evasive "No" button.
//!
//! DESIGN
//! ======
//! The button flees to a fixed-position coordinate sampled uniformly inside
//! the viewport, keeping `EDGE_MARGIN` pixels clear of every edge. When the
//! viewport is too small to honour the margin on the far side, the range
//! collapses onto the near margin instead of going negative.

#[cfg(test)]
#[path = "evasion_test.rs"]
mod evasion_test;

use super::random::{UnitSampler, sample_range};

/// Minimum gap between the fleeing button and any viewport edge, in CSS px.
pub const EDGE_MARGIN: f64 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonSize {
    pub width: f64,
    pub height: f64,
}

/// Top-left corner of the fleeing button in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Inclusive per-axis range the button's top-left corner may occupy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EscapeBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl EscapeBounds {
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        (self.min_x..=self.max_x).contains(&pos.x) && (self.min_y..=self.max_y).contains(&pos.y)
    }
}

#[must_use]
pub fn escape_bounds(viewport: Viewport, button: ButtonSize) -> EscapeBounds {
    let max_x = viewport.width - button.width - EDGE_MARGIN;
    let max_y = viewport.height - button.height - EDGE_MARGIN;
    EscapeBounds {
        min_x: EDGE_MARGIN,
        max_x: max_x.max(EDGE_MARGIN),
        min_y: EDGE_MARGIN,
        max_y: max_y.max(EDGE_MARGIN),
    }
}

/// Sample a new on-screen position for the button.
pub fn sample_escape_position<S: UnitSampler + ?Sized>(
    viewport: Viewport,
    button: ButtonSize,
    sampler: &mut S,
) -> Position {
    let bounds = escape_bounds(viewport, button);
    Position {
        x: sample_range(sampler, bounds.min_x, bounds.max_x).min(bounds.max_x),
        y: sample_range(sampler, bounds.min_y, bounds.max_y).min(bounds.max_y),
    }
}
