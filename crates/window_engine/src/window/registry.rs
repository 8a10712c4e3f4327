//! Window registry
//!
//! Owns every [`WindowState`] in a slot map and the native resources they
//! reference. Windows are addressed by [`WindowId`]; native signals are
//! routed back to their window through a handle lookup, so nothing on the
//! native side ever holds a window.

use std::rc::Rc;

use super::handle::Window;
use super::state::WindowState;
use crate::assets::{CursorId, CursorLoader, ImageId, ImageLoader, NativeImage, PixelConverter};
use crate::core::{WindowConfig, WindowMode};
use crate::error::WindowResult;
use crate::events::{Event, EventKind, EventQueue};
use crate::foundation::collections::{SecondaryMap, WindowId, WindowMap};
use crate::foundation::math::center_on_monitor;
use crate::native::{
    CallbackKind, DisplayServer, NativeBinding, NativeEvent, NativeWindow, WindowHints,
};

/// Native binding plus the caches and lookup tables shared by all windows
pub(crate) struct NativeContext {
    pub(crate) native: Box<dyn NativeBinding>,
    pub(crate) icons: ImageLoader,
    pub(crate) cursors: CursorLoader,
    by_native: SecondaryMap<NativeWindow, WindowId>,
    closed_handles: Vec<NativeWindow>,
    live: Vec<WindowId>,
}

impl NativeContext {
    fn new(native: Box<dyn NativeBinding>, converter: Rc<dyn PixelConverter>) -> Self {
        Self {
            native,
            icons: ImageLoader::new(Rc::clone(&converter)),
            cursors: CursorLoader::new(converter),
            by_native: SecondaryMap::new(),
            closed_handles: Vec::new(),
            live: Vec::new(),
        }
    }

    /// Remove a window from the live set; `false` if it was not live
    pub(crate) fn detach(&mut self, id: WindowId) -> bool {
        let before = self.live.len();
        self.live.retain(|live| *live != id);
        before != self.live.len()
    }

    /// Hand the cached pixels of `ids` to the native window
    pub(crate) fn apply_icons(&mut self, handle: NativeWindow, ids: &[ImageId]) {
        let images: Vec<&NativeImage> = ids.iter().filter_map(|id| self.icons.get(id)).collect();
        self.native.set_window_icon(handle, &images);
    }

    pub(crate) fn release_assets(&mut self, icons: &[ImageId], cursor: Option<CursorId>) {
        self.icons.release_all(icons);
        if let Some(cursor) = cursor {
            self.cursors.release(self.native.as_mut(), &cursor);
        }
    }

    /// Close a window: queue `Closed`, detach it and release everything
    /// native it holds. Returns `false` if it was already closed.
    pub(crate) fn close(&mut self, id: WindowId, state: &mut WindowState, queue: &mut EventQueue) -> bool {
        if state.closed {
            return false;
        }
        state.closed = true;

        queue.push(Event::new(id, EventKind::Closed));
        self.detach(id);

        for kind in CallbackKind::ALL {
            self.native.set_callback(state.handle, kind, false);
        }
        self.native.destroy_window(state.handle);
        self.by_native.remove(state.handle);
        self.closed_handles.push(state.handle);

        let icons = std::mem::take(&mut state.icons);
        self.release_assets(&icons, state.cursor.take());

        log::info!("Closed window '{}'", state.title);
        true
    }
}

/// Set of windows and their shared native context
pub struct WindowRegistry {
    windows: WindowMap<WindowState>,
    context: NativeContext,
}

impl WindowRegistry {
    /// Create an empty registry over an initialized binding
    pub fn new(native: Box<dyn NativeBinding>, converter: Rc<dyn PixelConverter>) -> Self {
        Self {
            windows: WindowMap::with_key(),
            context: NativeContext::new(native, converter),
        }
    }

    /// Create, configure and register a window
    ///
    /// Icons and cursor are loaded before the native window exists, so an
    /// invalid image fails without allocating anything native.
    pub fn create(&mut self, config: &WindowConfig, queue: &mut EventQueue) -> WindowResult<WindowId> {
        config.validate()?;
        let settings = &config.settings;
        let context = &mut self.context;

        let icons = context.icons.load_all(&config.icons)?;
        let cursor = match &config.cursor {
            Some(cursor) => match context.cursors.load(context.native.as_mut(), cursor) {
                Ok(loaded) => Some(loaded),
                Err(err) => {
                    context.icons.release_all(&icons);
                    return Err(err);
                }
            },
            None => None,
        };

        let hints = WindowHints {
            size: settings.size(),
            title: &settings.title,
            fullscreen: settings.mode == WindowMode::Fullscreen,
            resizable: settings.resizable,
        };
        let handle = match context.native.create_window(&hints) {
            Ok(handle) => handle,
            Err(err) => {
                context.release_assets(&icons, cursor.map(|(id, _)| id));
                return Err(err);
            }
        };

        if !icons.is_empty() {
            context.apply_icons(handle, &icons);
        }
        if let Some((_, native_cursor)) = cursor {
            context.native.set_cursor(handle, Some(native_cursor));
        }

        let mut state = WindowState::new(handle, settings.title.clone(), settings.mode, settings.closable);
        state.size = context.native.window_size(handle);
        state.icons = icons;
        state.cursor = cursor.map(|(id, _)| id);

        let centered = match settings.mode {
            WindowMode::Fullscreen => None,
            _ => context
                .native
                .primary_monitor()
                .map(|monitor| center_on_monitor(monitor.origin, monitor.size, state.size)),
        };
        match settings.position.or(centered) {
            Some(position) => {
                context.native.set_window_pos(handle, position);
                state.position = position;
            }
            None => state.position = context.native.window_pos(handle),
        }

        if settings.mode != WindowMode::Hidden {
            context.native.show_window(handle);
            state.visible = true;
        }

        for kind in CallbackKind::ALL {
            context.native.set_callback(handle, kind, true);
        }
        log::debug!("Registered {} native callbacks", CallbackKind::ALL.len());

        let id = self.windows.insert(state);
        context.by_native.insert(handle, id);
        context.live.push(id);
        queue.push(Event::new(id, EventKind::Created));

        log::info!(
            "Created window '{}' ({}, {:?})",
            settings.title,
            settings.size(),
            settings.mode
        );
        Ok(id)
    }

    /// Mutable view of a window
    pub fn window<'a>(&'a mut self, id: WindowId, queue: &'a mut EventQueue) -> Option<Window<'a>> {
        let state = self.windows.get_mut(id)?;
        Some(Window::new(id, state, &mut self.context, queue))
    }

    /// State of a window, open or closed
    pub fn get(&self, id: WindowId) -> Option<&WindowState> {
        self.windows.get(id)
    }

    /// Live window ids in creation order
    pub fn live(&self) -> &[WindowId] {
        &self.context.live
    }

    /// Number of live windows
    pub fn live_count(&self) -> usize {
        self.context.live.len()
    }

    /// Remove a window from the live set without destroying it
    ///
    /// No-op for windows that are not live.
    pub fn detach(&mut self, id: WindowId) -> bool {
        self.context.detach(id)
    }

    /// Close a window if needed and drop its record
    pub fn remove(&mut self, id: WindowId, queue: &mut EventQueue) -> Option<WindowState> {
        let mut state = self.windows.remove(id)?;
        self.context.close(id, &mut state, queue);
        self.context.closed_handles.retain(|handle| *handle != state.handle);
        Some(state)
    }

    /// Drop the record of a closed window; open windows are kept
    pub fn forget(&mut self, id: WindowId) -> Option<WindowState> {
        if !self.windows.get(id)?.closed {
            return None;
        }
        let state = self.windows.remove(id)?;
        self.context.closed_handles.retain(|handle| *handle != state.handle);
        Some(state)
    }

    /// Number of window records, open or closed
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Whether no window record is kept
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Native handles currently routed to a window
    #[cfg(test)]
    pub(crate) fn routed_handles(&self) -> usize {
        self.context.by_native.len()
    }

    /// Handles of closed windows whose late signals are still expected
    #[cfg(test)]
    pub(crate) fn closed_handles(&self) -> usize {
        self.context.closed_handles.len()
    }

    /// Poll the native layer once and translate what fired
    ///
    /// Returns the number of native signals received.
    pub fn poll(&mut self, queue: &mut EventQueue) -> usize {
        self.context.closed_handles.clear();
        let signals = self.context.native.poll_events();
        let count = signals.len();

        for (handle, signal) in signals {
            self.dispatch(handle, signal, queue);
        }
        count
    }

    /// Route one native signal to its window
    pub fn dispatch(&mut self, handle: NativeWindow, signal: NativeEvent, queue: &mut EventQueue) {
        let Some(id) = self.context.by_native.get(handle).copied() else {
            if self.context.closed_handles.contains(&handle) {
                log::trace!("Ignoring {:?} for closed native window", signal.kind());
            } else {
                log::warn!("Dropping {:?} for unknown native window", signal.kind());
            }
            return;
        };
        if let Some(mut window) = self.window(id, queue) {
            window.handle_signal(signal);
        }
    }

    /// Display server of the underlying binding
    pub fn display_server(&self) -> DisplayServer {
        self.context.native.display_server()
    }
}

impl Drop for WindowRegistry {
    fn drop(&mut self) {
        let context = &mut self.context;

        for state in self.windows.values_mut().filter(|state| !state.closed) {
            state.closed = true;
            context.native.destroy_window(state.handle);
        }
        context.live.clear();
        context.icons.clear();
        context.cursors.clear(context.native.as_mut());

        log::debug!("Window registry torn down");
    }
}
