//! Image, icon and cursor resources
//!
//! Source images are plain pixel buffers owned by the application. Before the
//! native layer sees them they are normalized to RGBA8 by a [`PixelConverter`]
//! and cached by content identity, so several windows sharing the same icon
//! or cursor share one native object.

pub mod cache;
pub mod converter;
pub mod cursor;
pub mod image;
pub mod loader;

pub use cache::ResourceCache;
pub use converter::{ConvertedImage, DefaultConverter, PixelConverter};
pub use cursor::{Cursor, CursorId};
pub use image::{Compression, Image, ImageId, NativeImage, PixelFormat};
pub use loader::{CursorLoader, ImageLoader};
