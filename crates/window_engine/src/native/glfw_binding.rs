//! GLFW-based implementation of the native capability
//!
//! Built on the `glfw` crate. Callback registration maps onto GLFW's
//! per-category polling flags: a registered category is delivered through the
//! window's event receiver, and `poll_events()` flushes every receiver after a
//! single `glfwPollEvents`, merging the signals of all windows by their native
//! timestamp so cross-window order is preserved.
//!
//! Cursors are shared per identity only up to this layer. The glfw-rs window
//! API consumes a `glfw::Cursor` by value, so each window that uses a cached
//! cursor gets its own GLFW cursor built from the shared pixels. N windows
//! with the same cursor hold N GLFW cursor objects; each is freed when its
//! window replaces the cursor or is destroyed.

use super::{
    Action, CallbackKind, DisplayServer, MonitorInfo, NativeBinding, NativeCursor, NativeEvent,
    NativeWindow, Version, WindowHints,
};
use crate::assets::NativeImage;
use crate::error::{WindowError, WindowResult};
use crate::foundation::math::{Position, Size};
use glfw::Context;
use slotmap::SlotMap;

/// GLFW window wrapper with its event receiver
struct GlfwWindow {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

/// Cursor pixels kept so a GLFW cursor can be instantiated per window
///
/// `glfw::Window::set_cursor` takes ownership of the cursor it is given, so a
/// single `glfw::Cursor` cannot be shared between windows. The binding keeps
/// the packed pixels and hotspot behind one handle instead.
struct CursorPixels {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
    hotspot: (u32, u32),
}

impl CursorPixels {
    fn to_cursor(&self) -> glfw::Cursor {
        glfw::Cursor::create_from_pixels(
            glfw::PixelImage {
                width: self.width,
                height: self.height,
                pixels: self.pixels.clone(),
            },
            self.hotspot.0,
            self.hotspot.1,
        )
    }
}

/// Native binding backed by GLFW
pub struct GlfwBinding {
    windows: SlotMap<NativeWindow, GlfwWindow>,
    cursors: SlotMap<NativeCursor, CursorPixels>,
    display: DisplayServer,
    glfw: Option<glfw::Glfw>,
}

impl GlfwBinding {
    /// Prepare a binding for the current display server
    ///
    /// Fails when no display server can be detected. GLFW itself is only
    /// initialized by [`NativeBinding::init`], after the version check.
    pub fn new() -> WindowResult<Self> {
        let display = DisplayServer::current()?;
        log::debug!("Detected display server: {:?}", display);

        Ok(Self {
            windows: SlotMap::with_key(),
            cursors: SlotMap::with_key(),
            display,
            glfw: None,
        })
    }
}

fn to_native_int(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn pack_pixels(rgba: &[u8]) -> Vec<u32> {
    rgba.chunks_exact(4)
        .map(|px| u32::from_ne_bytes([px[0], px[1], px[2], px[3]]))
        .collect()
}

const fn translate_action(action: glfw::Action) -> Action {
    match action {
        glfw::Action::Release => Action::Release,
        glfw::Action::Press => Action::Press,
        glfw::Action::Repeat => Action::Repeat,
    }
}

fn translate_event(event: glfw::WindowEvent) -> Option<NativeEvent> {
    use glfw::WindowEvent as E;

    let signal = match event {
        E::Close => NativeEvent::Close,
        E::Iconify(iconified) => NativeEvent::Iconify(iconified),
        E::Focus(focused) => NativeEvent::Focus(focused),
        E::MouseButton(button, action, _) => NativeEvent::MouseButton {
            button: button as i32,
            action: translate_action(action),
        },
        E::Scroll(x, y) => NativeEvent::Scroll { x, y },
        E::Key(key, scancode, action, mods) => NativeEvent::Key {
            key: key as i32,
            scancode,
            action: translate_action(action),
            mods: mods.bits(),
        },
        E::CursorPos(x, y) => NativeEvent::CursorPos { x, y },
        E::Pos(x, y) => NativeEvent::WindowPos { x, y },
        E::Size(width, height) => NativeEvent::WindowSize { width, height },
        _ => return None,
    };

    Some(signal)
}

impl NativeBinding for GlfwBinding {
    fn version(&self) -> Version {
        let version = glfw::get_version();
        let part = |value: u64| u32::try_from(value).unwrap_or(u32::MAX);
        Version::new(part(version.major), part(version.minor), part(version.patch))
    }

    fn init(&mut self) -> WindowResult<()> {
        if self.glfw.is_some() {
            return Ok(());
        }

        let glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|e| WindowError::InitializationFailed(format!("{:?}", e)))?;
        self.glfw = Some(glfw);

        log::info!("GLFW {} initialized on {:?}", self.version(), self.display);
        Ok(())
    }

    fn display_server(&self) -> DisplayServer {
        self.display
    }

    fn create_window(&mut self, hints: &WindowHints<'_>) -> WindowResult<NativeWindow> {
        let glfw = self.glfw.as_mut().ok_or(WindowError::NotInitialized)?;

        // Always created hidden; the registry shows it once it is positioned
        glfw.window_hint(glfw::WindowHint::Visible(false));
        glfw.window_hint(glfw::WindowHint::Resizable(hints.resizable));

        let (width, height, title) = (hints.size.width, hints.size.height, hints.title);
        let created = if hints.fullscreen {
            glfw.with_primary_monitor(|glfw, monitor| {
                let mode = monitor.map_or(glfw::WindowMode::Windowed, |m| {
                    glfw::WindowMode::FullScreen(m)
                });
                glfw.create_window(width, height, title, mode)
            })
        } else {
            glfw.create_window(width, height, title, glfw::WindowMode::Windowed)
        };

        let (window, events) = created.ok_or(WindowError::CreationFailed)?;
        Ok(self.windows.insert(GlfwWindow { window, events }))
    }

    fn destroy_window(&mut self, window: NativeWindow) {
        // Dropping the PWindow calls glfwDestroyWindow
        if self.windows.remove(window).is_none() {
            log::warn!("destroy_window called for unknown handle {:?}", window);
        }
    }

    fn window_pos(&self, window: NativeWindow) -> Position {
        self.windows.get(window).map_or_else(Position::default, |entry| {
            let (x, y) = entry.window.get_pos();
            Position::new(x, y)
        })
    }

    fn set_window_pos(&mut self, window: NativeWindow, position: Position) {
        if let Some(entry) = self.windows.get_mut(window) {
            entry.window.set_pos(position.x, position.y);
        }
    }

    fn window_size(&self, window: NativeWindow) -> Size {
        self.windows.get(window).map_or_else(Size::default, |entry| {
            let (width, height) = entry.window.get_size();
            Size::from_native(width, height)
        })
    }

    fn set_window_size(&mut self, window: NativeWindow, size: Size) {
        if let Some(entry) = self.windows.get_mut(window) {
            entry
                .window
                .set_size(to_native_int(size.width), to_native_int(size.height));
        }
    }

    fn set_window_title(&mut self, window: NativeWindow, title: &str) {
        if let Some(entry) = self.windows.get_mut(window) {
            entry.window.set_title(title);
        }
    }

    fn show_window(&mut self, window: NativeWindow) {
        if let Some(entry) = self.windows.get_mut(window) {
            entry.window.show();
        }
    }

    fn hide_window(&mut self, window: NativeWindow) {
        if let Some(entry) = self.windows.get_mut(window) {
            entry.window.hide();
        }
    }

    fn set_callback(&mut self, window: NativeWindow, kind: CallbackKind, enabled: bool) {
        let Some(entry) = self.windows.get_mut(window) else {
            return;
        };

        let window = &mut entry.window;
        match kind {
            CallbackKind::Close => window.set_close_polling(enabled),
            CallbackKind::Iconify => window.set_iconify_polling(enabled),
            CallbackKind::Focus => window.set_focus_polling(enabled),
            CallbackKind::MouseButton => window.set_mouse_button_polling(enabled),
            CallbackKind::Scroll => window.set_scroll_polling(enabled),
            CallbackKind::Key => window.set_key_polling(enabled),
            CallbackKind::CursorPos => window.set_cursor_pos_polling(enabled),
            CallbackKind::WindowPos => window.set_pos_polling(enabled),
            CallbackKind::WindowSize => window.set_size_polling(enabled),
        }
    }

    fn poll_events(&mut self) -> Vec<(NativeWindow, NativeEvent)> {
        let Some(glfw) = self.glfw.as_mut() else {
            return Vec::new();
        };

        glfw.poll_events();

        let mut fired = Vec::new();
        for (handle, entry) in &self.windows {
            for (time, event) in glfw::flush_messages(&entry.events) {
                if let Some(signal) = translate_event(event) {
                    fired.push((time, handle, signal));
                }
            }
        }

        // Stable: equal timestamps keep per-window receive order
        fired.sort_by(|a, b| a.0.total_cmp(&b.0));
        fired
            .into_iter()
            .map(|(_, handle, signal)| (handle, signal))
            .collect()
    }

    fn primary_monitor(&mut self) -> Option<MonitorInfo> {
        let glfw = self.glfw.as_mut()?;

        glfw.with_primary_monitor(|_, monitor| {
            let monitor = monitor?;
            let (x, y) = monitor.get_pos();
            let mode = monitor.get_video_mode()?;

            Some(MonitorInfo {
                origin: Position::new(x, y),
                size: Size::new(mode.width, mode.height),
            })
        })
    }

    fn create_cursor(&mut self, image: &NativeImage, hotspot: (u32, u32)) -> NativeCursor {
        self.cursors.insert(CursorPixels {
            width: image.width,
            height: image.height,
            pixels: pack_pixels(&image.pixels),
            hotspot,
        })
    }

    fn destroy_cursor(&mut self, cursor: NativeCursor) {
        self.cursors.remove(cursor);
    }

    fn set_cursor(&mut self, window: NativeWindow, cursor: Option<NativeCursor>) {
        let native = cursor
            .and_then(|handle| self.cursors.get(handle))
            .map(CursorPixels::to_cursor);

        if let Some(entry) = self.windows.get_mut(window) {
            // Previous per-window cursor is dropped (glfwDestroyCursor) here
            drop(entry.window.set_cursor(native));
        }
    }

    fn set_window_icon(&mut self, window: NativeWindow, images: &[&NativeImage]) {
        let Some(entry) = self.windows.get_mut(window) else {
            return;
        };

        let pixels = images
            .iter()
            .map(|image| glfw::PixelImage {
                width: image.width,
                height: image.height,
                pixels: pack_pixels(&image.pixels),
            })
            .collect();

        entry.window.set_icon_from_pixels(pixels);
    }

    fn make_context_current(&mut self, window: NativeWindow) {
        if let Some(entry) = self.windows.get_mut(window) {
            entry.window.make_current();
        }
    }

    fn swap_buffers(&mut self, window: NativeWindow) {
        if let Some(entry) = self.windows.get_mut(window) {
            entry.window.swap_buffers();
        }
    }

    fn raw_handle(&self, window: NativeWindow) -> Option<usize> {
        self.windows
            .get(window)
            .map(|entry| entry.window.window_ptr() as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_pixels_keeps_byte_order() {
        let packed = pack_pixels(&[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(packed.len(), 2);
        assert_eq!(packed[0].to_ne_bytes(), [1, 2, 3, 4]);
        assert_eq!(packed[1].to_ne_bytes(), [5, 6, 7, 8]);
    }

    #[test]
    fn test_translate_window_events() {
        assert_eq!(translate_event(glfw::WindowEvent::Close), Some(NativeEvent::Close));
        assert_eq!(
            translate_event(glfw::WindowEvent::Pos(10, -20)),
            Some(NativeEvent::WindowPos { x: 10, y: -20 })
        );
        assert_eq!(
            translate_event(glfw::WindowEvent::Size(640, 480)),
            Some(NativeEvent::WindowSize { width: 640, height: 480 })
        );
        assert_eq!(translate_event(glfw::WindowEvent::Refresh), None);
    }

    #[test]
    fn test_translate_key_event() {
        let event = glfw::WindowEvent::Key(
            glfw::Key::A,
            30,
            glfw::Action::Press,
            glfw::Modifiers::Shift | glfw::Modifiers::Control,
        );
        assert_eq!(
            translate_event(event),
            Some(NativeEvent::Key {
                key: 65,
                scancode: 30,
                action: Action::Press,
                mods: 0x0003,
            })
        );
    }
}
