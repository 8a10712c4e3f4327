//! Mutable window view
//!
//! A [`Window`] borrows one window's state together with the shared native
//! context and the event queue for as long as the caller works with it.
//! Every setter updates the mirrored state first and then calls through to
//! the native layer; after close they do nothing.

use std::ops::Deref;

use super::registry::NativeContext;
use super::state::WindowState;
use crate::assets::{Cursor, Image};
use crate::error::{WindowError, WindowResult};
use crate::events::{Event, EventKind, EventQueue};
use crate::foundation::collections::WindowId;
use crate::foundation::math::{Position, Size};
use crate::native::PlatformHandle;

/// Borrowed handle to a registered window
pub struct Window<'a> {
    id: WindowId,
    pub(super) state: &'a mut WindowState,
    pub(super) context: &'a mut NativeContext,
    pub(super) queue: &'a mut EventQueue,
}

impl<'a> Window<'a> {
    pub(crate) fn new(
        id: WindowId,
        state: &'a mut WindowState,
        context: &'a mut NativeContext,
        queue: &'a mut EventQueue,
    ) -> Self {
        Self {
            id,
            state,
            context,
            queue,
        }
    }

    /// Registry id of this window
    pub const fn id(&self) -> WindowId {
        self.id
    }

    pub(super) fn emit(&mut self, kind: EventKind) {
        self.queue.push(Event::new(self.id, kind));
    }

    /// Change the title
    pub fn set_title(&mut self, title: impl Into<String>) {
        if self.state.closed {
            return;
        }
        self.state.title = title.into();
        self.context
            .native
            .set_window_title(self.state.handle, &self.state.title);
    }

    /// Resize the client area
    pub fn set_size(&mut self, size: Size) -> WindowResult<()> {
        if size.is_empty() {
            return Err(WindowError::InvalidSize(size));
        }
        if self.state.closed {
            return Ok(());
        }
        self.state.size = size;
        self.context.native.set_window_size(self.state.handle, size);
        Ok(())
    }

    /// Move the window
    pub fn set_position(&mut self, position: Position) {
        if self.state.closed {
            return;
        }
        self.state.position = position;
        self.context.native.set_window_pos(self.state.handle, position);
    }

    /// Make the window visible
    ///
    /// Every call reaches the native layer; `visible` only records the last
    /// request.
    pub fn show(&mut self) {
        if self.state.closed {
            return;
        }
        self.state.visible = true;
        self.context.native.show_window(self.state.handle);
    }

    /// Hide the window
    pub fn hide(&mut self) {
        if self.state.closed {
            return;
        }
        self.state.visible = false;
        self.context.native.hide_window(self.state.handle);
    }

    /// Close the window and destroy its native handle
    ///
    /// Idempotent: returns `false` and does nothing if already closed.
    pub fn close(&mut self) -> bool {
        self.context.close(self.id, self.state, self.queue)
    }

    /// Replace the icon set; an empty slice restores the default icon
    ///
    /// New icons are acquired before the old ones are released, so icons
    /// present in both sets are never converted again.
    pub fn set_icons(&mut self, icons: &[Image]) -> WindowResult<()> {
        if self.state.closed {
            return Ok(());
        }
        let ids = self.context.icons.load_all(icons)?;
        self.context.apply_icons(self.state.handle, &ids);

        let previous = std::mem::replace(&mut self.state.icons, ids);
        self.context.icons.release_all(&previous);
        Ok(())
    }

    /// Replace the cursor; `None` restores the default arrow
    pub fn set_cursor(&mut self, cursor: Option<&Cursor>) -> WindowResult<()> {
        if self.state.closed {
            return Ok(());
        }
        let context = &mut *self.context;

        let loaded = match cursor {
            Some(cursor) => Some(context.cursors.load(context.native.as_mut(), cursor)?),
            None => None,
        };
        context
            .native
            .set_cursor(self.state.handle, loaded.map(|(_, handle)| handle));

        let previous = std::mem::replace(&mut self.state.cursor, loaded.map(|(id, _)| id));
        if let Some(previous) = previous {
            context.cursors.release(context.native.as_mut(), &previous);
        }
        Ok(())
    }

    /// Make this window's GL context current
    pub fn make_current(&mut self) {
        if !self.state.closed {
            self.context.native.make_context_current(self.state.handle);
        }
    }

    /// Present the back buffer
    pub fn swap_buffers(&mut self) {
        if !self.state.closed {
            self.context.native.swap_buffers(self.state.handle);
        }
    }

    /// Platform handle for graphics-context setup, `None` once closed
    pub fn handle(&self) -> Option<PlatformHandle> {
        let handle = self.state.native()?;
        let window = self.context.native.raw_handle(handle)?;

        Some(PlatformHandle {
            display: self.context.native.display_server(),
            window,
        })
    }
}

impl Deref for Window<'_> {
    type Target = WindowState;

    fn deref(&self) -> &WindowState {
        self.state
    }
}
