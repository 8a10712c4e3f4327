//! Entry point tying the native binding, the window registry and the pump
//! together.

use std::rc::Rc;

use crate::assets::{DefaultConverter, PixelConverter};
use crate::core::WindowConfig;
use crate::error::WindowResult;
use crate::events::EventQueue;
use crate::foundation::collections::WindowId;
use crate::native::{DisplayServer, NativeBinding};
use crate::pump::Pump;
use crate::window::{Window, WindowRegistry, WindowState};

/// Windowing platform over one native binding
pub struct Platform {
    pub(crate) registry: WindowRegistry,
    pub(crate) queue: EventQueue,
    pub(crate) pump: Pump,
}

impl Platform {
    /// Initialize `native` with the default pixel converter
    ///
    /// Fails without initializing anything when the native library is older
    /// than [`Version::MINIMUM`](crate::native::Version::MINIMUM).
    pub fn new(native: Box<dyn NativeBinding>) -> WindowResult<Self> {
        Self::with_converter(native, Rc::new(DefaultConverter))
    }

    /// Initialize `native` with a custom pixel converter
    pub fn with_converter(
        mut native: Box<dyn NativeBinding>,
        converter: Rc<dyn PixelConverter>,
    ) -> WindowResult<Self> {
        let version = native.version();
        version.ensure_supported()?;
        native.init()?;

        log::info!(
            "Native windowing {} initialized on {:?}",
            version,
            native.display_server()
        );

        Ok(Self {
            registry: WindowRegistry::new(native, converter),
            queue: EventQueue::new(),
            pump: Pump::new(),
        })
    }

    /// Create a window; a `Created` event is queued for it
    pub fn create(&mut self, config: &WindowConfig) -> WindowResult<WindowId> {
        self.registry.create(config, &mut self.queue)
    }

    /// Mutable view of a window, open or closed
    pub fn window(&mut self, id: WindowId) -> Option<Window<'_>> {
        self.registry.window(id, &mut self.queue)
    }

    /// State of a window, open or closed
    pub fn get(&self, id: WindowId) -> Option<&WindowState> {
        self.registry.get(id)
    }

    /// Live window ids in creation order
    pub fn windows(&self) -> impl Iterator<Item = WindowId> + '_ {
        self.registry.live().iter().copied()
    }

    /// Number of live windows
    pub fn live_count(&self) -> usize {
        self.registry.live_count()
    }

    /// Drop a window from the live set without closing it
    pub fn detach(&mut self, id: WindowId) -> bool {
        self.registry.detach(id)
    }

    /// Close a window if needed and forget it, returning its final state
    pub fn remove(&mut self, id: WindowId) -> Option<WindowState> {
        self.registry.remove(id, &mut self.queue)
    }

    /// Display server of the native binding
    pub fn display_server(&self) -> DisplayServer {
        self.registry.display_server()
    }
}
