//! Source images and their native (RGBA8) form

use crate::error::{WindowError, WindowResult};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::Path;

/// Pixel layout of raw image data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 8-bit red, green, blue
    R8G8B8,
    /// 8-bit blue, green, red
    B8G8R8,
    /// 8-bit red, green, blue, alpha
    R8G8B8A8,
    /// 8-bit blue, green, red, alpha
    B8G8R8A8,
    /// 8-bit luminance
    Gray8,
}

impl PixelFormat {
    /// Bytes used by a single pixel
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::R8G8B8 | Self::B8G8R8 => 3,
            Self::R8G8B8A8 | Self::B8G8R8A8 => 4,
            Self::Gray8 => 1,
        }
    }
}

/// Block compression applied to image data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compression {
    /// Raw pixel data
    None,
    /// S3TC DXT1 blocks
    Dxt1,
    /// S3TC DXT3 blocks
    Dxt3,
    /// S3TC DXT5 blocks
    Dxt5,
}

/// Content-derived identity of an image
///
/// Two images with equal dimensions, layout and bytes share an identity and
/// therefore share cached native resources. Dimensions and layout are kept
/// verbatim, so only images of the same shape can collide on the digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId {
    width: u32,
    height: u32,
    format: PixelFormat,
    digest: u64,
}

impl ImageId {
    /// Width of the identified image
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height of the identified image
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Pixel layout of the identified image
    pub const fn format(&self) -> PixelFormat {
        self.format
    }
}

/// Application-side image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    format: PixelFormat,
    compression: Compression,
    data: Vec<u8>,
}

impl Image {
    /// Create an uncompressed image, checking the buffer length
    pub fn new(width: u32, height: u32, format: PixelFormat, data: Vec<u8>) -> WindowResult<Self> {
        let expected = width as usize * height as usize * format.bytes_per_pixel();
        if data.len() != expected {
            return Err(WindowError::InvalidImageData {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            format,
            compression: Compression::None,
            data,
        })
    }

    /// Create a block-compressed image
    ///
    /// Compressed images can be described but never handed to the native
    /// layer; loading one as an icon or cursor fails.
    pub const fn compressed(
        width: u32,
        height: u32,
        format: PixelFormat,
        compression: Compression,
        data: Vec<u8>,
    ) -> Self {
        Self {
            width,
            height,
            format,
            compression,
            data,
        }
    }

    /// Load an image from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> WindowResult<Self> {
        let path_ref = path.as_ref();

        log::debug!("Loading image from: {:?}", path_ref);

        let rgba = image::open(path_ref)?.to_rgba8();
        let (width, height) = rgba.dimensions();

        log::info!("Loaded image {}x{} from {:?}", width, height, path_ref);

        Self::new(width, height, PixelFormat::R8G8B8A8, rgba.into_raw())
    }

    /// Load image from memory (useful for embedded icons)
    pub fn from_bytes(bytes: &[u8]) -> WindowResult<Self> {
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = rgba.dimensions();

        log::debug!("Loaded image {}x{} from memory", width, height);

        Self::new(width, height, PixelFormat::R8G8B8A8, rgba.into_raw())
    }

    /// Create a solid color RGBA image (useful for testing and defaults)
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixel_count = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixel_count * 4);

        for _ in 0..pixel_count {
            data.extend_from_slice(&color);
        }

        Self {
            width,
            height,
            format: PixelFormat::R8G8B8A8,
            compression: Compression::None,
            data,
        }
    }

    /// Image width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Pixel layout of the data
    pub const fn format(&self) -> PixelFormat {
        self.format
    }

    /// Compression applied to the data
    pub const fn compression(&self) -> Compression {
        self.compression
    }

    /// Raw bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Fail unless the image holds raw pixels
    pub fn ensure_uncompressed(&self) -> WindowResult<()> {
        match self.compression {
            Compression::None => Ok(()),
            other => Err(WindowError::CompressedImage(other)),
        }
    }

    /// Content-derived identity used as the cache key
    pub fn id(&self) -> ImageId {
        let mut hasher = DefaultHasher::new();
        self.compression.hash(&mut hasher);
        self.data.hash(&mut hasher);
        ImageId {
            width: self.width,
            height: self.height,
            format: self.format,
            digest: hasher.finish(),
        }
    }
}

/// RGBA8 pixel buffer in the layout the native layer accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeImage {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Tightly packed RGBA8 pixels
    pub pixels: Vec<u8>,
}

impl NativeImage {
    /// Size of the pixel buffer in bytes
    pub fn size_bytes(&self) -> usize {
        self.pixels.len()
    }
}
