//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The interaction and animation math lives here as plain functions over
//! plain data so it can be tested natively. Browser access is confined to
//! `viewport` and to `hydrate`-gated code in components.

pub mod confetti;
pub mod evasion;
pub mod hearts;
pub mod random;
pub mod timeline;
pub mod viewport;
