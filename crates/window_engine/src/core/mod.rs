//! # Core Types
//!
//! Window creation settings and the application-level configuration file.

pub mod config;

pub use config::{ApplicationConfig, WindowConfig, WindowMode, WindowSettings};
pub use crate::config::{Config, ConfigError};
