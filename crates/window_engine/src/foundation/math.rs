//! Screen-space geometry used by window state and monitor queries

use serde::{Deserialize, Serialize};
use std::fmt;

/// Window or monitor size in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    /// Width in screen coordinates
    pub width: u32,
    /// Height in screen coordinates
    pub height: u32,
}

impl Size {
    /// Create a new size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Build a size from signed native values, clamping negatives to zero
    pub fn from_native(width: i32, height: i32) -> Self {
        Self {
            width: u32::try_from(width).unwrap_or(0),
            height: u32::try_from(height).unwrap_or(0),
        }
    }

    /// Whether either dimension is zero
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Position of a window's or monitor's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate
    pub x: i32,
    /// Vertical coordinate
    pub y: i32,
}

impl Position {
    /// Create a new position
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Position that centers `window` inside a monitor
///
/// `origin + (monitor - window) / 2` per axis. The division truncates toward
/// zero, so a window larger than the monitor ends up offset to the left/top
/// by half the overflow, rounded toward the origin.
pub fn center_on_monitor(origin: Position, monitor: Size, window: Size) -> Position {
    let axis = |origin: i32, outer: u32, inner: u32| -> i32 {
        let offset = (i64::from(outer) - i64::from(inner)) / 2;
        let centered = i64::from(origin) + offset;
        i32::try_from(centered).unwrap_or(if centered < 0 { i32::MIN } else { i32::MAX })
    };

    Position {
        x: axis(origin.x, monitor.width, window.width),
        y: axis(origin.y, monitor.height, window.height),
    }
}
