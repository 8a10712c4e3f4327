//! Error types shared by every subsystem

use crate::assets::{Compression, PixelFormat};
use crate::config::ConfigError;
use crate::foundation::math::Size;
use crate::native::Version;
use thiserror::Error;

/// Windowing errors
///
/// Configuration errors (bad sizes, compressed or malformed images) are
/// raised synchronously before any native object is allocated. Environment
/// errors (old native library, no display) are fatal at startup.
#[derive(Error, Debug)]
pub enum WindowError {
    /// The loaded native library is older than the supported minimum
    #[error("GLFW >= {required} required, but {found} loaded")]
    UnsupportedVersion {
        /// Version reported by the native library
        found: Version,
        /// Minimum supported version
        required: Version,
    },

    /// The native library failed to initialize
    #[error("Native initialization failed: {0}")]
    InitializationFailed(String),

    /// No supported display server could be detected
    #[error("Cannot detect current display server")]
    DisplayUnavailable,

    /// A native call was made before `init()`
    #[error("Native binding used before initialization")]
    NotInitialized,

    /// The native layer refused to create a window
    #[error("Window creation failed")]
    CreationFailed,

    /// Requested window size has a zero dimension
    #[error("Window size must be non-zero, got {0}")]
    InvalidSize(Size),

    /// Icons and cursors must be raw pixel data
    #[error("Icons cannot be compressed, but {0:?} given")]
    CompressedImage(Compression),

    /// Pixel buffer does not match the declared dimensions and format
    #[error("Image data has {actual} bytes, expected {expected}")]
    InvalidImageData {
        /// Byte count implied by width, height and pixel format
        expected: usize,
        /// Byte count actually supplied
        actual: usize,
    },

    /// The pixel converter cannot produce the requested layout
    #[error("Cannot convert {from:?} pixels into {to:?}")]
    UnsupportedConversion {
        /// Source layout
        from: PixelFormat,
        /// Requested layout
        to: PixelFormat,
    },

    /// Image decoding failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias for windowing operations
pub type WindowResult<T> = Result<T, WindowError>;
