//! Pixel format conversion
//!
//! The native layer only accepts tightly packed RGBA8. Everything else goes
//! through a [`PixelConverter`] first.

use super::image::{Compression, Image, PixelFormat};
use crate::error::{WindowError, WindowResult};
use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};

/// Result of a pixel conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedImage {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Layout of `contents`
    pub format: PixelFormat,
    /// Converted pixel bytes
    pub contents: Vec<u8>,
}

impl ConvertedImage {
    /// Number of bytes in `contents`
    pub fn bytes(&self) -> usize {
        self.contents.len()
    }
}

/// Converts raw images between pixel layouts
pub trait PixelConverter {
    /// Convert `image` into `target`
    ///
    /// Compressed input is an error; callers validate before converting.
    fn convert(&self, image: &Image, target: PixelFormat) -> WindowResult<ConvertedImage>;
}

/// Converter backed by `image` crate buffers plus channel swizzling
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConverter;

impl DefaultConverter {
    fn to_rgba(image: &Image) -> WindowResult<RgbaImage> {
        let (width, height) = (image.width(), image.height());
        let data = image.data().to_vec();
        let expected = width as usize * height as usize * image.format().bytes_per_pixel();
        let invalid = || WindowError::InvalidImageData {
            expected,
            actual: image.data().len(),
        };

        let rgba = match image.format() {
            PixelFormat::R8G8B8A8 => RgbaImage::from_raw(width, height, data).ok_or_else(invalid)?,
            PixelFormat::B8G8R8A8 => {
                RgbaImage::from_raw(width, height, swap_red_blue(data, 4)).ok_or_else(invalid)?
            }
            PixelFormat::R8G8B8 => DynamicImage::ImageRgb8(
                RgbImage::from_raw(width, height, data).ok_or_else(invalid)?,
            )
            .to_rgba8(),
            PixelFormat::B8G8R8 => DynamicImage::ImageRgb8(
                RgbImage::from_raw(width, height, swap_red_blue(data, 3)).ok_or_else(invalid)?,
            )
            .to_rgba8(),
            PixelFormat::Gray8 => DynamicImage::ImageLuma8(
                GrayImage::from_raw(width, height, data).ok_or_else(invalid)?,
            )
            .to_rgba8(),
        };

        Ok(rgba)
    }
}

impl PixelConverter for DefaultConverter {
    fn convert(&self, image: &Image, target: PixelFormat) -> WindowResult<ConvertedImage> {
        if image.compression() != Compression::None {
            return Err(WindowError::CompressedImage(image.compression()));
        }

        let rgba = Self::to_rgba(image)?;
        let (width, height) = rgba.dimensions();

        let contents = match target {
            PixelFormat::R8G8B8A8 => rgba.into_raw(),
            PixelFormat::B8G8R8A8 => swap_red_blue(rgba.into_raw(), 4),
            PixelFormat::R8G8B8 => DynamicImage::ImageRgba8(rgba).to_rgb8().into_raw(),
            PixelFormat::B8G8R8 => {
                swap_red_blue(DynamicImage::ImageRgba8(rgba).to_rgb8().into_raw(), 3)
            }
            PixelFormat::Gray8 => {
                return Err(WindowError::UnsupportedConversion {
                    from: image.format(),
                    to: target,
                })
            }
        };

        Ok(ConvertedImage {
            width,
            height,
            format: target,
            contents,
        })
    }
}

fn swap_red_blue(mut data: Vec<u8>, stride: usize) -> Vec<u8> {
    for pixel in data.chunks_exact_mut(stride) {
        pixel.swap(0, 2);
    }
    data
}
