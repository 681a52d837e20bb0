//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`theme`, `motion`, `decor`) so components can
//! depend on small focused models that test without a browser.

pub mod decor;
pub mod motion;
pub mod theme;
