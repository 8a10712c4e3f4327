//! Creation, configuration and closing of windows

use super::Fixture;
use crate::core::{WindowConfig, WindowMode};
use crate::error::WindowError;
use crate::events::EventKind;
use crate::foundation::math::{Position, Size};
use crate::native::mock::MockBinding;
use crate::native::{CallbackKind, DisplayServer, NativeEvent, PlatformHandle, Version};
use crate::platform::Platform;

#[test]
fn test_created_window_is_centered_and_shown() {
    let mut fx = Fixture::new();
    let id = fx.platform.create(&WindowConfig::new(800, 600)).unwrap();
    let handle = fx.native(id);

    let state = fx.platform.get(id).unwrap();
    assert_eq!(state.position(), Position::new(560, 240));
    assert_eq!(state.size(), Size::new(800, 600));
    assert!(state.is_visible());
    assert_eq!(fx.mock.show_count(handle), 1);
    assert_eq!(fx.mock.callbacks(handle), CallbackKind::ALL.len());

    let native = fx.mock.state.borrow();
    assert_eq!(native.windows[handle].position, Position::new(560, 240));
    assert!(native.windows[handle].visible);
    assert!(native.windows[handle].resizable);
    assert_eq!(native.init_calls, 1);
}

#[test]
fn test_explicit_position_skips_centering() {
    let mut fx = Fixture::new();
    let id = fx
        .platform
        .create(&WindowConfig::new(800, 600).with_position(-20, 35))
        .unwrap();

    assert_eq!(fx.platform.get(id).unwrap().position(), Position::new(-20, 35));
    let handle = fx.native(id);
    assert_eq!(fx.mock.state.borrow().windows[handle].position, Position::new(-20, 35));
}

#[test]
fn test_fullscreen_is_not_centered() {
    let mut fx = Fixture::new();
    let id = fx
        .platform
        .create(&WindowConfig::new(1920, 1080).with_mode(WindowMode::Fullscreen))
        .unwrap();
    let handle = fx.native(id);

    assert_eq!(fx.platform.get(id).unwrap().position(), Position::new(0, 0));
    assert!(fx.mock.state.borrow().windows[handle].fullscreen);
    assert_eq!(fx.mock.show_count(handle), 1);
}

#[test]
fn test_no_monitor_keeps_native_position() {
    let mut fx = Fixture::new();
    fx.mock.state.borrow_mut().monitor = None;
    let id = fx.platform.create(&WindowConfig::new(100, 100)).unwrap();
    assert_eq!(fx.platform.get(id).unwrap().position(), Position::default());
}

#[test]
fn test_hidden_window_shown_on_each_request() {
    let mut fx = Fixture::new();
    let id = fx
        .platform
        .create(&WindowConfig::new(320, 200).with_mode(WindowMode::Hidden))
        .unwrap();
    let handle = fx.native(id);
    assert_eq!(fx.mock.show_count(handle), 0);
    assert!(!fx.mock.state.borrow().windows[handle].visible);

    fx.platform.window(id).unwrap().show();
    assert_eq!(fx.mock.show_count(handle), 1);

    // the native window may have been hidden behind our back
    fx.platform.window(id).unwrap().show();
    assert_eq!(fx.mock.show_count(handle), 2);
    assert!(fx.platform.get(id).unwrap().is_visible());

    fx.platform.window(id).unwrap().hide();
    fx.platform.window(id).unwrap().hide();
    assert_eq!(fx.mock.state.borrow().hidden, vec![handle, handle]);
    assert!(!fx.platform.get(id).unwrap().is_visible());
}

#[test]
fn test_old_native_version_rejected_before_init() {
    let mock = MockBinding::with_version(Version::new(3, 1, 0));
    let result = Platform::new(Box::new(mock.clone()));

    assert!(matches!(
        result,
        Err(WindowError::UnsupportedVersion { found, .. }) if found == Version::new(3, 1, 0)
    ));
    assert_eq!(mock.state.borrow().init_calls, 0);
}

#[test]
fn test_invalid_size_rejected_before_native_creation() {
    let mut fx = Fixture::new();
    let err = fx.platform.create(&WindowConfig::new(640, 0)).unwrap_err();

    assert!(matches!(err, WindowError::InvalidSize(_)));
    assert!(fx.mock.state.borrow().created.is_empty());
}

#[test]
fn test_close_is_idempotent() {
    let mut fx = Fixture::new();
    let id = fx.platform.create(&WindowConfig::new(100, 100)).unwrap();
    let handle = fx.native(id);

    assert!(fx.platform.window(id).unwrap().close());
    assert!(!fx.platform.window(id).unwrap().close());

    let closed = fx
        .platform
        .queue
        .drain()
        .into_iter()
        .filter(|event| event.kind == EventKind::Closed)
        .count();
    assert_eq!(closed, 1);
    assert_eq!(fx.mock.destroy_count(handle), 1);
    assert_eq!(fx.platform.live_count(), 0);
}

#[test]
fn test_closing_one_window_keeps_the_other_working() {
    let mut fx = Fixture::new();
    let first = fx.platform.create(&WindowConfig::new(100, 100)).unwrap();
    let second = fx.platform.create(&WindowConfig::new(200, 200)).unwrap();
    let second_handle = fx.native(second);
    fx.pump_once();

    fx.platform.window(first).unwrap().close();
    assert_eq!(fx.platform.live_count(), 1);
    assert_eq!(fx.platform.windows().collect::<Vec<_>>(), vec![second]);

    fx.mock.signal(second_handle, NativeEvent::WindowPos { x: 7, y: 9 });
    let events = fx.pump_once();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].window, first);
    assert_eq!(events[0].kind, EventKind::Closed);
    assert_eq!(events[1].window, second);
    assert_eq!(events[1].kind, EventKind::Moved(Position::new(7, 9)));
    assert_eq!(fx.platform.get(second).unwrap().position(), Position::new(7, 9));
}

#[test]
fn test_closed_window_state_is_frozen() {
    let mut fx = Fixture::new();
    let id = fx.platform.create(&WindowConfig::new(100, 100).with_title("before")).unwrap();

    let mut window = fx.platform.window(id).unwrap();
    window.close();
    window.set_title("after");
    window.set_position(Position::new(1, 1));
    window.set_size(Size::new(5, 5)).unwrap();
    window.make_current();

    let state = fx.platform.get(id).unwrap();
    assert!(state.is_closed());
    assert_eq!(state.title(), "before");
    assert_eq!(state.size(), Size::new(100, 100));
    assert_eq!(state.native(), None);
    assert_eq!(fx.mock.state.borrow().context_current, None);
}

#[test]
fn test_setters_reach_native_window() {
    let mut fx = Fixture::new();
    let id = fx.platform.create(&WindowConfig::new(100, 100)).unwrap();
    let handle = fx.native(id);

    let mut window = fx.platform.window(id).unwrap();
    window.set_title("renamed");
    window.set_size(Size::new(300, 150)).unwrap();
    window.set_position(Position::new(3, 4));
    assert!(window.set_size(Size::new(0, 10)).is_err());
    assert_eq!(window.size(), Size::new(300, 150));

    let native = fx.mock.state.borrow();
    let mock_window = &native.windows[handle];
    assert_eq!(mock_window.title, "renamed");
    assert_eq!(mock_window.size, Size::new(300, 150));
    assert_eq!(mock_window.position, Position::new(3, 4));
}

#[test]
fn test_context_hooks_and_platform_handle() {
    let mut fx = Fixture::new();
    let id = fx.platform.create(&WindowConfig::new(100, 100)).unwrap();
    let handle = fx.native(id);

    let mut window = fx.platform.window(id).unwrap();
    window.make_current();
    window.swap_buffers();
    assert_eq!(
        window.handle(),
        Some(PlatformHandle {
            display: DisplayServer::X11,
            window: 0xdead_beef,
        })
    );
    window.close();
    assert_eq!(window.handle(), None);

    let native = fx.mock.state.borrow();
    assert_eq!(native.context_current, Some(handle));
    assert_eq!(native.swaps, 1);
}

#[test]
fn test_close_request_respects_closable() {
    let mut fx = Fixture::new();
    let stubborn = fx
        .platform
        .create(&WindowConfig::new(100, 100).with_closable(false))
        .unwrap();
    let normal = fx.platform.create(&WindowConfig::new(100, 100)).unwrap();
    fx.pump_once();

    fx.mock.signal(fx.native(stubborn), NativeEvent::Close);
    let normal_handle = fx.native(normal);
    fx.mock.signal(normal_handle, NativeEvent::Close);
    let events = fx.pump_once();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].window, normal);
    assert_eq!(events[0].kind, EventKind::Closed);
    assert!(!fx.platform.get(stubborn).unwrap().is_closed());
    assert_eq!(fx.mock.destroy_count(normal_handle), 1);
    assert_eq!(fx.platform.live_count(), 1);
}

#[test]
fn test_detach_keeps_native_window() {
    let mut fx = Fixture::new();
    let id = fx.platform.create(&WindowConfig::new(100, 100)).unwrap();
    let handle = fx.native(id);

    assert!(fx.platform.detach(id));
    assert!(!fx.platform.detach(id));
    assert_eq!(fx.platform.live_count(), 0);
    assert_eq!(fx.mock.destroy_count(handle), 0);
    assert!(!fx.platform.get(id).unwrap().is_closed());
}

#[test]
fn test_remove_closes_and_forgets() {
    let mut fx = Fixture::new();
    let id = fx.platform.create(&WindowConfig::new(100, 100)).unwrap();
    let handle = fx.native(id);

    let state = fx.platform.remove(id).unwrap();
    assert!(state.is_closed());
    assert!(fx.platform.get(id).is_none());
    assert!(fx.platform.window(id).is_none());
    assert!(fx.platform.remove(id).is_none());
    assert_eq!(fx.mock.destroy_count(handle), 1);
    assert_eq!(
        fx.platform.queue.peek_tail().map(|event| event.kind),
        Some(EventKind::Closed)
    );
}

#[test]
fn test_closed_records_released_once_delivered() {
    let mut fx = Fixture::new();
    for _ in 0..1000 {
        let id = fx.platform.create(&WindowConfig::new(64, 64)).unwrap();
        fx.platform.window(id).unwrap().close();
        assert_eq!(fx.platform.registry.routed_handles(), 0);
        while fx.platform.next_event().is_some() {}
        assert!(fx.platform.get(id).is_none());
    }

    assert_eq!(fx.platform.live_count(), 0);
    assert!(fx.platform.registry.is_empty());
    assert_eq!(fx.platform.registry.routed_handles(), 0);
    assert_eq!(fx.platform.registry.closed_handles(), 0);
    assert!(fx.mock.state.borrow().windows.is_empty());
}

#[test]
fn test_teardown_destroys_open_windows() {
    let fx = Fixture::new();
    let Fixture {
        mut platform, mock, ..
    } = fx;
    let open = platform.create(&WindowConfig::new(100, 100)).unwrap();
    let closed = platform.create(&WindowConfig::new(100, 100)).unwrap();
    let open_handle = platform.get(open).and_then(|s| s.native()).unwrap();
    let closed_handle = platform.get(closed).and_then(|s| s.native()).unwrap();
    platform.window(closed).unwrap().close();

    drop(platform);

    assert_eq!(mock.destroy_count(open_handle), 1);
    assert_eq!(mock.destroy_count(closed_handle), 1);
}
