//! # Window Engine
//!
//! Windows and events on top of a callback-driven native window library.
//!
//! ## Features
//!
//! - **Addressable windows**: windows live in a registry and are reached by
//!   [`WindowId`]; properties are mirrored and stay readable after close
//! - **Ordered events**: native callbacks become typed [`Event`]s, with
//!   continuous move/resize gestures coalesced per window
//! - **Shared resources**: icons and cursors are converted once per image
//!   and released when the last window stops using them
//! - **Two loop styles**: eager dispatch with [`Platform::run`] or
//!   cooperative pulling with [`Platform::next_event`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use window_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut platform = Platform::new(Box::new(GlfwBinding::new()?))?;
//!     platform.create(&WindowConfig::new(800, 600).with_title("Hello"))?;
//!
//!     platform.run(|platform, event| {
//!         if let EventKind::KeyDown { key: KeyCode::Named(Key::Escape), .. } = event.kind {
//!             if let Some(mut window) = platform.window(event.window) {
//!                 window.close();
//!             }
//!         }
//!     });
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod assets;
pub mod config;
pub mod core;
pub mod error;
pub mod events;
pub mod foundation;
pub mod input;
pub mod native;
pub mod platform;
pub mod pump;
pub mod window;

#[cfg(test)]
mod tests;

pub use error::{WindowError, WindowResult};
pub use events::{Event, EventKind};
pub use foundation::collections::WindowId;
pub use platform::Platform;
pub use pump::PumpEvent;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        assets::{Cursor, Image, PixelFormat},
        core::{ApplicationConfig, Config, WindowConfig, WindowMode, WindowSettings},
        events::{Event, EventKind},
        foundation::math::{Position, Size},
        input::{Key, KeyCode, Modifiers, MouseButton, Wheel},
        native::GlfwBinding,
        window::Window,
        Platform, PumpEvent, WindowError, WindowId, WindowResult,
    };
}
