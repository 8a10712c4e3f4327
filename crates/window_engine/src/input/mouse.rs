//! Native mouse button and scroll translation

use super::{MouseButton, Wheel};

/// Translate a native button code; unknown buttons keep their code
pub const fn translate_button(code: i32) -> MouseButton {
    match code {
        // GLFW_MOUSE_BUTTON_LEFT
        0 => MouseButton::Left,
        // GLFW_MOUSE_BUTTON_RIGHT
        1 => MouseButton::Right,
        // GLFW_MOUSE_BUTTON_MIDDLE
        2 => MouseButton::Middle,
        other => MouseButton::User(other),
    }
}

/// Wheel directions for one scroll callback
///
/// Horizontal comes first, then vertical; either is absent when its offset
/// is zero.
pub fn translate_scroll(x: f64, y: f64) -> impl Iterator<Item = Wheel> {
    let horizontal = (x != 0.0).then_some(if x > 0.0 { Wheel::Left } else { Wheel::Right });
    let vertical = (y != 0.0).then_some(if y > 0.0 { Wheel::Up } else { Wheel::Down });

    horizontal.into_iter().chain(vertical)
}
