//! Build-time content tables.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything the pages display that a person would want to edit by hand
//! lives here as literal arrays. Nothing in these modules changes at runtime.

pub mod collage;
pub mod itinerary;
