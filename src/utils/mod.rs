//! Utility functions shared across layers.
//!
//! - [`timestamp`] - JSON formatting for timestamps

pub mod timestamp;
