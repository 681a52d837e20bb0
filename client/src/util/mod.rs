//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod clock;
pub mod frame_slot;
#[cfg(feature = "hydrate")]
pub mod pointer_tracker;
pub mod theme;
