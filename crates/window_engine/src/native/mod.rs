//! Native window-system capability
//!
//! The core talks to the window system only through [`NativeBinding`]. The
//! trait mirrors the subset of a GLFW-style C API the core needs: window
//! lifecycle, property access, monitor queries, cursors/icons, context hooks
//! and per-category callback registration.
//!
//! Callbacks are modeled as registrations rather than stored closures:
//! `set_callback(window, kind, true)` asks the binding to report signals of
//! that category, and `poll_events()` returns the signals that fired during
//! the poll, in native order. The core routes each one back to its window by
//! handle, so no closure ever owns a window.

pub mod glfw_binding;
#[cfg(test)]
pub(crate) mod mock;

pub use glfw_binding::GlfwBinding;

use crate::assets::NativeImage;
use crate::error::{WindowError, WindowResult};
use crate::foundation::math::{Position, Size};
use std::fmt;

slotmap::new_key_type! {
    /// Opaque handle of a native window
    pub struct NativeWindow;

    /// Opaque handle of a native cursor object
    pub struct NativeCursor;
}

/// Native library version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Version {
    /// Major version
    pub major: u32,
    /// Minor version
    pub minor: u32,
    /// Patch version
    pub patch: u32,
}

impl Version {
    /// Oldest native library version the core supports
    pub const MINIMUM: Self = Self::new(3, 2, 0);

    /// Create a version
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }

    /// Fail unless this version is at least [`Version::MINIMUM`]
    pub fn ensure_supported(self) -> WindowResult<()> {
        if self < Self::MINIMUM {
            return Err(WindowError::UnsupportedVersion {
                found: self,
                required: Self::MINIMUM,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Display server the native layer runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayServer {
    /// Windows
    Win32,
    /// macOS
    Cocoa,
    /// X Window System
    X11,
    /// Wayland compositor
    Wayland,
}

impl DisplayServer {
    /// Detect the display server of the running process
    pub fn current() -> WindowResult<Self> {
        Self::detect(
            std::env::consts::OS,
            std::env::var_os("DISPLAY").is_some(),
            std::env::var_os("WAYLAND_DISPLAY").is_some(),
        )
    }

    /// Detection rules, separated from the environment for testing
    pub fn detect(os: &str, has_display: bool, has_wayland_display: bool) -> WindowResult<Self> {
        match os {
            "windows" => Ok(Self::Win32),
            "macos" => Ok(Self::Cocoa),
            _ if has_display => Ok(Self::X11),
            _ if has_wayland_display => Ok(Self::Wayland),
            _ => Err(WindowError::DisplayUnavailable),
        }
    }
}

/// Platform-tagged native window handle for graphics-context setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlatformHandle {
    /// Display server the handle belongs to
    pub display: DisplayServer,
    /// Opaque native window pointer value
    pub window: usize,
}

/// Primary monitor snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorInfo {
    /// Top-left corner of the monitor in the virtual desktop
    pub origin: Position,
    /// Current video mode resolution
    pub size: Size,
}

/// Window creation hints
#[derive(Debug, Clone, Copy)]
pub struct WindowHints<'a> {
    /// Requested client area size
    pub size: Size,
    /// Initial title
    pub title: &'a str,
    /// Create on the primary monitor in fullscreen mode
    pub fullscreen: bool,
    /// Whether the user may resize the window
    pub resizable: bool,
}

/// Native event categories that can be registered per window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackKind {
    /// Close requested by the user
    Close,
    /// Window iconified or restored
    Iconify,
    /// Input focus gained or lost
    Focus,
    /// Mouse button pressed or released
    MouseButton,
    /// Scroll wheel or touchpad scroll
    Scroll,
    /// Keyboard key
    Key,
    /// Cursor moved inside the window
    CursorPos,
    /// Window moved
    WindowPos,
    /// Window resized
    WindowSize,
}

impl CallbackKind {
    /// Every category, in registration order
    pub const ALL: [Self; 9] = [
        Self::Close,
        Self::Iconify,
        Self::Focus,
        Self::MouseButton,
        Self::Scroll,
        Self::Key,
        Self::CursorPos,
        Self::WindowPos,
        Self::WindowSize,
    ];
}

/// Button/key action reported by the native layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Released
    Release,
    /// Pressed
    Press,
    /// Held down long enough to auto-repeat
    Repeat,
}

/// A native callback invocation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NativeEvent {
    /// Close button or equivalent
    Close,
    /// `true` when iconified, `false` when restored
    Iconify(bool),
    /// `true` when focused, `false` when focus lost
    Focus(bool),
    /// Mouse button with raw native button code
    MouseButton {
        /// Raw native button code
        button: i32,
        /// Press or release
        action: Action,
    },
    /// Scroll offsets
    Scroll {
        /// Horizontal offset
        x: f64,
        /// Vertical offset
        y: f64,
    },
    /// Keyboard key with raw native codes
    Key {
        /// Raw native key code
        key: i32,
        /// Platform scancode
        scancode: i32,
        /// Press, release or repeat
        action: Action,
        /// Raw native modifier bitmask
        mods: i32,
    },
    /// Cursor position in window coordinates
    CursorPos {
        /// Horizontal coordinate
        x: f64,
        /// Vertical coordinate
        y: f64,
    },
    /// New window position
    WindowPos {
        /// Horizontal coordinate
        x: i32,
        /// Vertical coordinate
        y: i32,
    },
    /// New window size
    WindowSize {
        /// New width
        width: i32,
        /// New height
        height: i32,
    },
}

impl NativeEvent {
    /// Callback category this signal is delivered through
    pub const fn kind(&self) -> CallbackKind {
        match self {
            Self::Close => CallbackKind::Close,
            Self::Iconify(_) => CallbackKind::Iconify,
            Self::Focus(_) => CallbackKind::Focus,
            Self::MouseButton { .. } => CallbackKind::MouseButton,
            Self::Scroll { .. } => CallbackKind::Scroll,
            Self::Key { .. } => CallbackKind::Key,
            Self::CursorPos { .. } => CallbackKind::CursorPos,
            Self::WindowPos { .. } => CallbackKind::WindowPos,
            Self::WindowSize { .. } => CallbackKind::WindowSize,
        }
    }
}

/// Capability interface over the native window-system library
///
/// Implementations are driven from a single thread. Handles passed in are
/// always ones the same binding returned and has not yet destroyed.
pub trait NativeBinding {
    /// Version of the loaded native library
    fn version(&self) -> Version;

    /// Initialize the native library; called once, after the version check
    fn init(&mut self) -> WindowResult<()>;

    /// Display server the library talks to
    fn display_server(&self) -> DisplayServer;

    /// Create an invisible window
    fn create_window(&mut self, hints: &WindowHints<'_>) -> WindowResult<NativeWindow>;

    /// Destroy a window and everything registered on it
    fn destroy_window(&mut self, window: NativeWindow);

    /// Current window position
    fn window_pos(&self, window: NativeWindow) -> Position;

    /// Move the window
    fn set_window_pos(&mut self, window: NativeWindow, position: Position);

    /// Current client area size
    fn window_size(&self, window: NativeWindow) -> Size;

    /// Resize the client area
    fn set_window_size(&mut self, window: NativeWindow, size: Size);

    /// Change the title
    fn set_window_title(&mut self, window: NativeWindow, title: &str);

    /// Make the window visible
    fn show_window(&mut self, window: NativeWindow);

    /// Hide the window
    fn hide_window(&mut self, window: NativeWindow);

    /// Register (`true`) or unregister (`false`) a callback category
    fn set_callback(&mut self, window: NativeWindow, kind: CallbackKind, enabled: bool);

    /// Process pending native events once, returning fired callbacks in order
    ///
    /// Only signals whose category is registered on their window are returned.
    fn poll_events(&mut self) -> Vec<(NativeWindow, NativeEvent)>;

    /// Primary monitor position and video mode, if a monitor is connected
    fn primary_monitor(&mut self) -> Option<MonitorInfo>;

    /// Create a native cursor from RGBA8 pixels and a hotspot
    fn create_cursor(&mut self, image: &NativeImage, hotspot: (u32, u32)) -> NativeCursor;

    /// Destroy a native cursor
    fn destroy_cursor(&mut self, cursor: NativeCursor);

    /// Assign a cursor to a window; `None` restores the default arrow
    fn set_cursor(&mut self, window: NativeWindow, cursor: Option<NativeCursor>);

    /// Set the window icon candidates; an empty slice restores the default
    fn set_window_icon(&mut self, window: NativeWindow, images: &[&NativeImage]);

    /// Make the window's GL context current on this thread
    fn make_context_current(&mut self, window: NativeWindow);

    /// Swap the window's front and back buffers
    fn swap_buffers(&mut self, window: NativeWindow);

    /// Opaque native pointer value of the window
    fn raw_handle(&self, window: NativeWindow) -> Option<usize>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_ordering() {
        assert!(Version::new(3, 1, 9) < Version::MINIMUM);
        assert!(Version::new(3, 2, 0) >= Version::MINIMUM);
        assert!(Version::new(4, 0, 0) > Version::new(3, 99, 99));
    }

    #[test]
    fn test_old_version_rejected() {
        let err = Version::new(3, 1, 2).ensure_supported().unwrap_err();
        assert_eq!(err.to_string(), "GLFW >= 3.2.0 required, but 3.1.2 loaded");
        assert!(Version::new(3, 3, 8).ensure_supported().is_ok());
    }

    #[test]
    fn test_display_server_detection() {
        assert_eq!(DisplayServer::detect("windows", false, false).unwrap(), DisplayServer::Win32);
        assert_eq!(DisplayServer::detect("macos", true, true).unwrap(), DisplayServer::Cocoa);
        assert_eq!(DisplayServer::detect("linux", true, true).unwrap(), DisplayServer::X11);
        assert_eq!(DisplayServer::detect("linux", false, true).unwrap(), DisplayServer::Wayland);
        assert!(matches!(
            DisplayServer::detect("linux", false, false),
            Err(WindowError::DisplayUnavailable)
        ));
    }

    #[test]
    fn test_event_kind() {
        assert_eq!(NativeEvent::Close.kind(), CallbackKind::Close);
        assert_eq!(
            NativeEvent::WindowSize { width: 1, height: 1 }.kind(),
            CallbackKind::WindowSize
        );
        assert_eq!(CallbackKind::ALL.len(), 9);
    }
}
