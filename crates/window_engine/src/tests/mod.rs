//! Cross-module scenarios driven through a recording native binding

mod window_lifecycle;

use std::cell::Cell;
use std::rc::Rc;

use crate::assets::{ConvertedImage, DefaultConverter, Image, PixelConverter, PixelFormat};
use crate::error::WindowResult;
use crate::events::Event;
use crate::foundation::collections::WindowId;
use crate::native::mock::MockBinding;
use crate::native::NativeWindow;
use crate::platform::Platform;
use crate::pump::PumpEvent;

/// Default converter that counts how often it runs
#[derive(Default)]
pub(crate) struct CountingConverter {
    inner: DefaultConverter,
    calls: Cell<usize>,
}

impl CountingConverter {
    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl PixelConverter for CountingConverter {
    fn convert(&self, image: &Image, target: PixelFormat) -> WindowResult<ConvertedImage> {
        self.calls.set(self.calls.get() + 1);
        self.inner.convert(image, target)
    }
}

pub(crate) struct Fixture {
    pub platform: Platform,
    pub mock: MockBinding,
    pub converter: Rc<CountingConverter>,
}

impl Fixture {
    pub fn new() -> Self {
        let mock = MockBinding::new();
        let converter = Rc::new(CountingConverter::default());
        let platform = Platform::with_converter(Box::new(mock.clone()), converter.clone())
            .expect("mock platform");

        Self {
            platform,
            mock,
            converter,
        }
    }

    pub fn native(&self, id: WindowId) -> NativeWindow {
        self.platform
            .get(id)
            .and_then(|state| state.native())
            .expect("open window")
    }

    /// Events of one poll iteration, plus anything queued before it
    pub fn pump_once(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        while let Some(PumpEvent::Event(event)) = self.platform.next_event() {
            events.push(event);
            if self.platform.pump.pending() == 0 {
                break;
            }
        }
        events
    }
}

pub(crate) fn icon(color: [u8; 4]) -> Image {
    Image::solid_color(4, 4, color)
}
