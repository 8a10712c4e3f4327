//! Native keycode and modifier translation
//!
//! Codes follow the GLFW key table. Both functions are total: nothing a
//! native layer reports is dropped.

use super::{Key, KeyCode, Modifiers};

const MODIFIER_BITS: [(i32, Modifiers); 6] = [
    (0x0001, Modifiers::SHIFT),
    (0x0002, Modifiers::CONTROL),
    (0x0004, Modifiers::ALT),
    (0x0008, Modifiers::SUPER),
    (0x0010, Modifiers::CAPS_LOCK),
    (0x0020, Modifiers::NUM_LOCK),
];

/// Translate a native modifier bitmask, testing each bit on its own
pub fn translate_modifiers(flags: i32) -> Modifiers {
    MODIFIER_BITS
        .iter()
        .filter(|(bit, _)| flags & bit == *bit)
        .fold(Modifiers::empty(), |acc, (_, modifier)| acc | *modifier)
}

/// Translate a native keycode, falling back to [`KeyCode::User`]
pub const fn translate_key(code: i32) -> KeyCode {
    let key = match code {
        32 => Key::Space,
        39 => Key::Apostrophe,
        44 => Key::Comma,
        45 => Key::Minus,
        46 => Key::Period,
        47 => Key::Slash,
        48 => Key::Key0,
        49 => Key::Key1,
        50 => Key::Key2,
        51 => Key::Key3,
        52 => Key::Key4,
        53 => Key::Key5,
        54 => Key::Key6,
        55 => Key::Key7,
        56 => Key::Key8,
        57 => Key::Key9,
        59 => Key::Semicolon,
        61 => Key::Equal,
        65 => Key::A,
        66 => Key::B,
        67 => Key::C,
        68 => Key::D,
        69 => Key::E,
        70 => Key::F,
        71 => Key::G,
        72 => Key::H,
        73 => Key::I,
        74 => Key::J,
        75 => Key::K,
        76 => Key::L,
        77 => Key::M,
        78 => Key::N,
        79 => Key::O,
        80 => Key::P,
        81 => Key::Q,
        82 => Key::R,
        83 => Key::S,
        84 => Key::T,
        85 => Key::U,
        86 => Key::V,
        87 => Key::W,
        88 => Key::X,
        89 => Key::Y,
        90 => Key::Z,
        91 => Key::LeftBracket,
        92 => Key::Backslash,
        93 => Key::RightBracket,
        96 => Key::GraveAccent,
        // WORLD_1 (161) and WORLD_2 (162) have no portable name
        256 => Key::Escape,
        257 => Key::Enter,
        258 => Key::Tab,
        259 => Key::Backspace,
        260 => Key::Insert,
        261 => Key::Delete,
        262 => Key::Right,
        263 => Key::Left,
        264 => Key::Down,
        265 => Key::Up,
        266 => Key::PageUp,
        267 => Key::PageDown,
        268 => Key::Home,
        269 => Key::End,
        280 => Key::CapsLock,
        281 => Key::ScrollLock,
        282 => Key::NumLock,
        283 => Key::PrintScreen,
        284 => Key::Pause,
        290 => Key::F1,
        291 => Key::F2,
        292 => Key::F3,
        293 => Key::F4,
        294 => Key::F5,
        295 => Key::F6,
        296 => Key::F7,
        297 => Key::F8,
        298 => Key::F9,
        299 => Key::F10,
        300 => Key::F11,
        301 => Key::F12,
        302 => Key::F13,
        303 => Key::F14,
        304 => Key::F15,
        320 => Key::Kp0,
        321 => Key::Kp1,
        322 => Key::Kp2,
        323 => Key::Kp3,
        324 => Key::Kp4,
        325 => Key::Kp5,
        326 => Key::Kp6,
        327 => Key::Kp7,
        328 => Key::Kp8,
        329 => Key::Kp9,
        330 => Key::KpDecimal,
        331 => Key::KpDivide,
        332 => Key::KpMultiply,
        333 => Key::KpSubtract,
        334 => Key::KpAdd,
        335 => Key::KpEnter,
        336 => Key::KpEqual,
        340 => Key::LeftShift,
        341 => Key::LeftControl,
        342 => Key::LeftAlt,
        343 => Key::LeftSuper,
        344 => Key::RightShift,
        345 => Key::RightControl,
        346 => Key::RightAlt,
        347 => Key::RightSuper,
        348 => Key::Menu,
        other => return KeyCode::User(other),
    };

    KeyCode::Named(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_keys() {
        assert_eq!(translate_key(32), KeyCode::Named(Key::Space));
        assert_eq!(translate_key(65), KeyCode::Named(Key::A));
        assert_eq!(translate_key(90), KeyCode::Named(Key::Z));
        assert_eq!(translate_key(256), KeyCode::Named(Key::Escape));
        assert_eq!(translate_key(304), KeyCode::Named(Key::F15));
        assert_eq!(translate_key(348), KeyCode::Named(Key::Menu));
    }

    #[test]
    fn test_unknown_keys_fall_back_to_user() {
        assert_eq!(translate_key(161), KeyCode::User(161));
        assert_eq!(translate_key(305), KeyCode::User(305));
        assert_eq!(translate_key(-1), KeyCode::User(-1));
        assert_eq!(translate_key(9999).named(), None);
    }

    #[test]
    fn test_modifier_bits_are_independent() {
        assert_eq!(translate_modifiers(0), Modifiers::empty());
        assert_eq!(translate_modifiers(0x1), Modifiers::SHIFT);
        assert_eq!(
            translate_modifiers(0x1 | 0x4),
            Modifiers::SHIFT | Modifiers::ALT
        );
        assert_eq!(
            translate_modifiers(0x2 | 0x10 | 0x20),
            Modifiers::CONTROL | Modifiers::CAPS_LOCK | Modifiers::NUM_LOCK
        );
    }

    #[test]
    fn test_modifiers_ignore_unknown_bits() {
        assert_eq!(translate_modifiers(0x8 | 0x40), Modifiers::SUPER);
        assert_eq!(translate_modifiers(0x3f), Modifiers::all());
    }
}
