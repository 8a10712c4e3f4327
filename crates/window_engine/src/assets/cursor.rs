//! Custom cursor descriptors

use super::image::{Image, ImageId};

/// Identity of a cursor: its image plus hotspot
///
/// The hotspot is baked into the native cursor at creation time, so the same
/// image with a different hotspot is a different cache entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorId {
    /// Identity of the cursor image
    pub image: ImageId,
    /// Hotspot offset from the left edge
    pub hotspot_x: u32,
    /// Hotspot offset from the top edge
    pub hotspot_y: u32,
}

/// Cursor image with a hotspot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    icon: Image,
    hotspot_x: u32,
    hotspot_y: u32,
}

impl Cursor {
    /// Create a cursor whose hotspot is the image's top-left corner
    pub const fn new(icon: Image) -> Self {
        Self {
            icon,
            hotspot_x: 0,
            hotspot_y: 0,
        }
    }

    /// Create a cursor with an explicit hotspot
    pub const fn with_hotspot(icon: Image, hotspot_x: u32, hotspot_y: u32) -> Self {
        Self {
            icon,
            hotspot_x,
            hotspot_y,
        }
    }

    /// Cursor image
    pub const fn icon(&self) -> &Image {
        &self.icon
    }

    /// Hotspot as `(x, y)`
    pub const fn hotspot(&self) -> (u32, u32) {
        (self.hotspot_x, self.hotspot_y)
    }

    /// Cache identity
    pub fn id(&self) -> CursorId {
        CursorId {
            image: self.icon.id(),
            hotspot_x: self.hotspot_x,
            hotspot_y: self.hotspot_y,
        }
    }
}
