//! Recording native binding for tests

use super::{
    CallbackKind, DisplayServer, MonitorInfo, NativeBinding, NativeCursor, NativeEvent,
    NativeWindow, Version, WindowHints,
};
use crate::assets::NativeImage;
use crate::error::{WindowError, WindowResult};
use crate::foundation::math::{Position, Size};
use slotmap::SlotMap;
use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

#[derive(Debug, Default)]
pub(crate) struct MockWindow {
    pub title: String,
    pub size: Size,
    pub position: Position,
    pub visible: bool,
    pub fullscreen: bool,
    pub resizable: bool,
    pub callbacks: HashSet<CallbackKind>,
    pub cursor: Option<NativeCursor>,
    pub icon_count: usize,
}

#[derive(Debug, Default)]
pub(crate) struct MockState {
    pub version: Version,
    pub init_calls: usize,
    pub fail_create: bool,
    pub monitor: Option<MonitorInfo>,
    pub windows: SlotMap<NativeWindow, MockWindow>,
    pub created: Vec<NativeWindow>,
    pub destroyed: Vec<NativeWindow>,
    pub shown: Vec<NativeWindow>,
    pub hidden: Vec<NativeWindow>,
    pub cursors: SlotMap<NativeCursor, (u32, u32)>,
    pub cursors_created: usize,
    pub cursors_destroyed: Vec<NativeCursor>,
    pub icon_calls: Vec<(NativeWindow, usize)>,
    pub context_current: Option<NativeWindow>,
    pub swaps: usize,
    pub polls: usize,
    pub pending: VecDeque<(NativeWindow, NativeEvent)>,
}

/// Native binding that records every call and replays injected signals
#[derive(Clone, Default)]
pub(crate) struct MockBinding {
    pub state: Rc<RefCell<MockState>>,
}

impl MockBinding {
    /// GLFW 3.3.8 with a 1920x1080 primary monitor at the origin
    pub fn new() -> Self {
        let binding = Self::default();
        {
            let mut state = binding.state.borrow_mut();
            state.version = Version::new(3, 3, 8);
            state.monitor = Some(MonitorInfo {
                origin: Position::new(0, 0),
                size: Size::new(1920, 1080),
            });
        }
        binding
    }

    /// Same as `new` but reporting `version`
    pub fn with_version(version: Version) -> Self {
        let binding = Self::new();
        binding.state.borrow_mut().version = version;
        binding
    }

    /// Queue a native signal for the next poll
    pub fn signal(&self, window: NativeWindow, event: NativeEvent) {
        self.state.borrow_mut().pending.push_back((window, event));
    }

    /// Registered callback categories of a window
    pub fn callbacks(&self, window: NativeWindow) -> usize {
        self.state
            .borrow()
            .windows
            .get(window)
            .map_or(0, |w| w.callbacks.len())
    }

    pub fn destroy_count(&self, window: NativeWindow) -> usize {
        self.state
            .borrow()
            .destroyed
            .iter()
            .filter(|&&w| w == window)
            .count()
    }

    pub fn show_count(&self, window: NativeWindow) -> usize {
        self.state
            .borrow()
            .shown
            .iter()
            .filter(|&&w| w == window)
            .count()
    }
}

impl NativeBinding for MockBinding {
    fn version(&self) -> Version {
        self.state.borrow().version
    }

    fn init(&mut self) -> WindowResult<()> {
        self.state.borrow_mut().init_calls += 1;
        Ok(())
    }

    fn display_server(&self) -> DisplayServer {
        DisplayServer::X11
    }

    fn create_window(&mut self, hints: &WindowHints<'_>) -> WindowResult<NativeWindow> {
        let mut state = self.state.borrow_mut();
        if state.fail_create {
            return Err(WindowError::CreationFailed);
        }

        let handle = state.windows.insert(MockWindow {
            title: hints.title.to_string(),
            size: hints.size,
            fullscreen: hints.fullscreen,
            resizable: hints.resizable,
            ..MockWindow::default()
        });
        state.created.push(handle);
        Ok(handle)
    }

    fn destroy_window(&mut self, window: NativeWindow) {
        let mut state = self.state.borrow_mut();
        state.windows.remove(window);
        state.destroyed.push(window);
    }

    fn window_pos(&self, window: NativeWindow) -> Position {
        self.state
            .borrow()
            .windows
            .get(window)
            .map_or_else(Position::default, |w| w.position)
    }

    fn set_window_pos(&mut self, window: NativeWindow, position: Position) {
        if let Some(w) = self.state.borrow_mut().windows.get_mut(window) {
            w.position = position;
        }
    }

    fn window_size(&self, window: NativeWindow) -> Size {
        self.state
            .borrow()
            .windows
            .get(window)
            .map_or_else(Size::default, |w| w.size)
    }

    fn set_window_size(&mut self, window: NativeWindow, size: Size) {
        if let Some(w) = self.state.borrow_mut().windows.get_mut(window) {
            w.size = size;
        }
    }

    fn set_window_title(&mut self, window: NativeWindow, title: &str) {
        if let Some(w) = self.state.borrow_mut().windows.get_mut(window) {
            w.title = title.to_string();
        }
    }

    fn show_window(&mut self, window: NativeWindow) {
        let mut state = self.state.borrow_mut();
        if let Some(w) = state.windows.get_mut(window) {
            w.visible = true;
        }
        state.shown.push(window);
    }

    fn hide_window(&mut self, window: NativeWindow) {
        let mut state = self.state.borrow_mut();
        if let Some(w) = state.windows.get_mut(window) {
            w.visible = false;
        }
        state.hidden.push(window);
    }

    fn set_callback(&mut self, window: NativeWindow, kind: CallbackKind, enabled: bool) {
        if let Some(w) = self.state.borrow_mut().windows.get_mut(window) {
            if enabled {
                w.callbacks.insert(kind);
            } else {
                w.callbacks.remove(&kind);
            }
        }
    }

    fn poll_events(&mut self) -> Vec<(NativeWindow, NativeEvent)> {
        let mut state = self.state.borrow_mut();
        state.polls += 1;

        let pending: Vec<_> = state.pending.drain(..).collect();
        pending
            .into_iter()
            .filter(|(window, event)| {
                state
                    .windows
                    .get(*window)
                    .is_some_and(|w| w.callbacks.contains(&event.kind()))
            })
            .collect()
    }

    fn primary_monitor(&mut self) -> Option<MonitorInfo> {
        self.state.borrow().monitor
    }

    fn create_cursor(&mut self, _image: &NativeImage, hotspot: (u32, u32)) -> NativeCursor {
        let mut state = self.state.borrow_mut();
        state.cursors_created += 1;
        state.cursors.insert(hotspot)
    }

    fn destroy_cursor(&mut self, cursor: NativeCursor) {
        let mut state = self.state.borrow_mut();
        state.cursors.remove(cursor);
        state.cursors_destroyed.push(cursor);
    }

    fn set_cursor(&mut self, window: NativeWindow, cursor: Option<NativeCursor>) {
        if let Some(w) = self.state.borrow_mut().windows.get_mut(window) {
            w.cursor = cursor;
        }
    }

    fn set_window_icon(&mut self, window: NativeWindow, images: &[&NativeImage]) {
        let mut state = self.state.borrow_mut();
        if let Some(w) = state.windows.get_mut(window) {
            w.icon_count = images.len();
        }
        state.icon_calls.push((window, images.len()));
    }

    fn make_context_current(&mut self, window: NativeWindow) {
        self.state.borrow_mut().context_current = Some(window);
    }

    fn swap_buffers(&mut self, _window: NativeWindow) {
        self.state.borrow_mut().swaps += 1;
    }

    fn raw_handle(&self, window: NativeWindow) -> Option<usize> {
        self.state
            .borrow()
            .windows
            .get(window)
            .map(|_| 0xdead_beef)
    }
}
