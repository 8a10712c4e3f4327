//! Translation of native signals into events

use super::handle::Window;
use crate::events::EventKind;
use crate::foundation::math::{Position, Size};
use crate::input::mouse::translate_scroll;
use crate::input::{translate_button, translate_key, translate_modifiers};
use crate::native::{Action, NativeEvent};

impl Window<'_> {
    /// Apply one native signal to this window
    pub(crate) fn handle_signal(&mut self, signal: NativeEvent) {
        log::trace!("Native signal {:?}", signal);

        match signal {
            NativeEvent::Close => {
                if self.is_closable() {
                    self.close();
                } else {
                    log::debug!("Ignoring close request for '{}'", self.title());
                }
            }
            NativeEvent::Iconify(true) => self.emit(EventKind::Hidden),
            NativeEvent::Iconify(false) => self.emit(EventKind::Shown),
            NativeEvent::Focus(true) => self.emit(EventKind::Focused),
            NativeEvent::Focus(false) => self.emit(EventKind::Blurred),
            NativeEvent::MouseButton { button, action } => {
                let button = translate_button(button);
                let position = self.cursor_position();
                self.emit(match action {
                    Action::Press | Action::Repeat => EventKind::MouseDown { button, position },
                    Action::Release => EventKind::MouseUp { button, position },
                });
            }
            NativeEvent::Scroll { x, y } => {
                for direction in translate_scroll(x, y) {
                    self.emit(EventKind::Wheel(direction));
                }
            }
            NativeEvent::Key {
                key, action, mods, ..
            } => {
                let key = translate_key(key);
                let modifiers = translate_modifiers(mods);
                match action {
                    Action::Press => self.emit(EventKind::KeyDown { key, modifiers }),
                    Action::Release => self.emit(EventKind::KeyUp { key, modifiers }),
                    Action::Repeat => {}
                }
            }
            NativeEvent::CursorPos { x, y } => {
                let position = self.state.on_cursor_moved(x, y);
                self.emit(EventKind::MouseMove(position));
            }
            NativeEvent::WindowPos { x, y } => {
                let id = self.id();
                self.state.on_moved(id, Position::new(x, y), self.queue);
            }
            NativeEvent::WindowSize { width, height } => {
                let id = self.id();
                self.state
                    .on_resized(id, Size::from_native(width, height), self.queue);
            }
        }
    }
}
