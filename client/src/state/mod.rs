//! Reactive page state.
//!
//! DESIGN
//! ======
//! State structs are plain data with methods; pages and the app root wrap
//! them in `RwSignal` so the transitions stay testable without a reactive
//! runtime.

pub mod celebration;
pub mod proposal;
