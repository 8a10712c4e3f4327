//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Screen-space geometry (sizes, positions, centering)
//! - Stable handle types for windows
//! - Logging utilities

pub mod collections;
pub mod logging;
pub mod math;
