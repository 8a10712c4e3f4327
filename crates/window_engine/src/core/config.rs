//! # Window Configuration
//!
//! [`WindowSettings`] is the serializable part of a window request and is
//! what configuration files contain. [`WindowConfig`] adds the runtime-only
//! assets (icons and cursor) and is what window creation consumes.
//!
//! ```ignore
//! let config = WindowConfig::new(800, 600)
//!     .with_title("Viewer")
//!     .with_mode(WindowMode::Hidden);
//! ```

use serde::{Deserialize, Serialize};

use crate::assets::{Cursor, Image};
use crate::config::Config;
use crate::error::{WindowError, WindowResult};
use crate::foundation::math::{Position, Size};

/// Display mode requested at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowMode {
    /// Regular decorated window
    #[default]
    Normal,
    /// Fullscreen on the primary monitor
    Fullscreen,
    /// Created but not shown
    Hidden,
}

/// Serializable window settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Window title
    pub title: String,
    /// Client area width
    pub width: u32,
    /// Client area height
    pub height: u32,
    /// Fixed position; centered on the primary monitor when absent
    pub position: Option<Position>,
    /// Display mode
    pub mode: WindowMode,
    /// Whether the user may resize the window
    pub resizable: bool,
    /// Whether a native close request closes the window
    pub closable: bool,
}

impl WindowSettings {
    /// Requested client area size
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Window".to_string(),
            width: 640,
            height: 480,
            position: None,
            mode: WindowMode::Normal,
            resizable: true,
            closable: true,
        }
    }
}

/// Complete window creation request
#[derive(Debug, Clone, Default)]
pub struct WindowConfig {
    /// Serializable settings
    pub settings: WindowSettings,
    /// Icon candidates, largest first by convention
    pub icons: Vec<Image>,
    /// Cursor shown while the pointer is over the window
    pub cursor: Option<Cursor>,
}

impl WindowConfig {
    /// Create a configuration with the given client area size
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_settings(WindowSettings {
            width,
            height,
            ..WindowSettings::default()
        })
    }

    /// Wrap settings loaded from a file
    pub fn from_settings(settings: WindowSettings) -> Self {
        Self {
            settings,
            icons: Vec::new(),
            cursor: None,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.settings.title = title.into();
        self
    }

    /// Place the window at a fixed position instead of centering it
    pub const fn with_position(mut self, x: i32, y: i32) -> Self {
        self.settings.position = Some(Position::new(x, y));
        self
    }

    /// Set the display mode
    pub const fn with_mode(mut self, mode: WindowMode) -> Self {
        self.settings.mode = mode;
        self
    }

    /// Allow or forbid user resizing
    pub const fn with_resizable(mut self, resizable: bool) -> Self {
        self.settings.resizable = resizable;
        self
    }

    /// Allow or ignore native close requests
    pub const fn with_closable(mut self, closable: bool) -> Self {
        self.settings.closable = closable;
        self
    }

    /// Add an icon candidate
    pub fn with_icon(mut self, icon: Image) -> Self {
        self.icons.push(icon);
        self
    }

    /// Set the cursor
    pub fn with_cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// Check the request before anything native is allocated
    pub fn validate(&self) -> WindowResult<()> {
        let size = self.settings.size();
        if size.is_empty() {
            return Err(WindowError::InvalidSize(size));
        }

        for icon in &self.icons {
            icon.ensure_uncompressed()?;
        }
        if let Some(cursor) = &self.cursor {
            cursor.icon().ensure_uncompressed()?;
        }

        Ok(())
    }
}

/// Application configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// `env_logger` filter directives
    pub log_level: String,
    /// Windows to open at start-up
    pub windows: Vec<WindowSettings>,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            windows: vec![WindowSettings::default()],
        }
    }
}

impl Config for ApplicationConfig {}
