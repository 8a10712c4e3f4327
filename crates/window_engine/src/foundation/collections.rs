//! Handle types for stable window references

pub use slotmap::{SecondaryMap, SlotMap};

slotmap::new_key_type! {
    /// Stable identifier of a window owned by the registry
    ///
    /// Events and native callbacks refer to windows through this key instead
    /// of holding the window itself, so a closed window can never be kept
    /// alive (or resurrected) by a stale event.
    pub struct WindowId;
}

/// Arena of records keyed by [`WindowId`]
pub type WindowMap<T> = SlotMap<WindowId, T>;
