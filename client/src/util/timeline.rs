//! View model for the itinerary timeline.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

use crate::data::itinerary::{IconKey, ItineraryEntry};

/// Seconds between successive card entrances.
pub const ROW_STAGGER_S: f64 = 0.1;

/// Which side of the center line a card sits on (desktop layout).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineSide {
    Left,
    Right,
}

impl TimelineSide {
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 { Self::Left } else { Self::Right }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Left => "timeline-item--left",
            Self::Right => "timeline-item--right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineRow {
    pub index: usize,
    pub side: TimelineSide,
    pub delay_s: f64,
    pub icon: IconKey,
    pub entry: ItineraryEntry,
}

impl TimelineRow {
    #[must_use]
    pub fn style(&self) -> String {
        format!("animation-delay: {:.2}s;", self.delay_s)
    }
}

/// One row per entry, in source order.
#[must_use]
pub fn timeline_rows(entries: &[ItineraryEntry]) -> Vec<TimelineRow> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            #[allow(clippy::cast_precision_loss)]
            let delay_s = index as f64 * ROW_STAGGER_S;
            TimelineRow { index, side: TimelineSide::for_index(index), delay_s, icon: entry.icon_key(), entry: *entry }
        })
        .collect()
}
