//! Drifting background hearts on the proposal page.
//!
//! Hearts are generated after hydration only; the server renders none so
//! SSR output never disagrees with the randomized client markup.

#[cfg(test)]
#[path = "hearts_test.rs"]
mod hearts_test;

use super::random::{UnitSampler, sample_range};

pub const FLOATING_HEART_COUNT: usize = 15;

#[derive(Clone, Debug, PartialEq)]
pub struct FloatingHeart {
    pub id: usize,
    /// Horizontal start, in `vw`.
    pub initial_x: f64,
    pub initial_scale: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl FloatingHeart {
    /// Inline style feeding the `float-up` keyframes.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}vw; --heart-scale: {:.3}; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.initial_x, self.initial_scale, self.duration_s, self.delay_s
        )
    }
}

pub fn floating_hearts<S: UnitSampler + ?Sized>(count: usize, sampler: &mut S) -> Vec<FloatingHeart> {
    (0..count)
        .map(|id| FloatingHeart {
            id,
            initial_x: sample_range(sampler, 0.0, 100.0),
            initial_scale: sample_range(sampler, 0.5, 1.0),
            duration_s: sample_range(sampler, 10.0, 20.0),
            delay_s: sample_range(sampler, 0.0, 10.0),
        })
        .collect()
}
