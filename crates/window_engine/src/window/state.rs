//! Per-window mirrored state

use crate::assets::{CursorId, ImageId};
use crate::core::WindowMode;
use crate::events::{Event, EventKind, EventQueue};
use crate::foundation::collections::WindowId;
use crate::foundation::math::{Position, Size};
use crate::native::NativeWindow;

/// Authoritative copy of a window's properties
///
/// Geometry is updated as soon as the native layer reports a change, before
/// the matching event is queued, so an observer always reads post-event
/// values. Once closed, every field is frozen.
#[derive(Debug, Clone)]
pub struct WindowState {
    pub(crate) title: String,
    pub(crate) size: Size,
    pub(crate) position: Position,
    pub(crate) mode: WindowMode,
    pub(crate) closable: bool,
    pub(crate) visible: bool,
    pub(crate) closed: bool,
    pub(crate) cursor_x: f64,
    pub(crate) cursor_y: f64,
    pub(crate) handle: NativeWindow,
    pub(crate) icons: Vec<ImageId>,
    pub(crate) cursor: Option<CursorId>,
}

impl WindowState {
    pub(crate) fn new(handle: NativeWindow, title: String, mode: WindowMode, closable: bool) -> Self {
        Self {
            title,
            size: Size::default(),
            position: Position::default(),
            mode,
            closable,
            visible: false,
            closed: false,
            cursor_x: 0.0,
            cursor_y: 0.0,
            handle,
            icons: Vec::new(),
            cursor: None,
        }
    }

    /// Current title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Client area size
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Position of the top-left corner
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Mode requested at creation
    pub const fn mode(&self) -> WindowMode {
        self.mode
    }

    /// Whether native close requests close the window
    pub const fn is_closable(&self) -> bool {
        self.closable
    }

    /// Whether the window was shown and not hidden since
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the window has been closed
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Last cursor position reported inside the window, truncated
    #[allow(clippy::cast_possible_truncation)]
    pub fn cursor_position(&self) -> Position {
        Position::new(self.cursor_x as i32, self.cursor_y as i32)
    }

    /// Native handle, or `None` once closed
    pub const fn native(&self) -> Option<NativeWindow> {
        if self.closed {
            None
        } else {
            Some(self.handle)
        }
    }

    /// Cache identities of the assigned icons
    pub fn icons(&self) -> &[ImageId] {
        &self.icons
    }

    /// Cache identity of the assigned cursor
    pub const fn cursor(&self) -> Option<CursorId> {
        self.cursor
    }

    pub(crate) fn on_moved(&mut self, id: WindowId, position: Position, queue: &mut EventQueue) {
        self.position = position;
        queue.push_coalesced(Event::new(id, EventKind::Moved(position)));
    }

    pub(crate) fn on_resized(&mut self, id: WindowId, size: Size, queue: &mut EventQueue) {
        self.size = size;
        queue.push_coalesced(Event::new(id, EventKind::Resized(size)));
    }

    pub(crate) fn on_cursor_moved(&mut self, x: f64, y: f64) -> Position {
        self.cursor_x = x;
        self.cursor_y = y;
        self.cursor_position()
    }
}
