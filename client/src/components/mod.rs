//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the decorative pieces of both pages. Animation math is
//! delegated to `util`; components own only DOM wiring and timers.

pub mod collage_photo;
pub mod confetti_canvas;
pub mod floating_hearts;
pub mod icon;
pub mod timeline_item;
