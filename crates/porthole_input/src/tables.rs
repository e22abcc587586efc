//! Symbol tables: host input identifiers to engine event-name tokens
//!
//! All tables are closed, immutable, and resolved at compile time. The
//! modifier table is ordered; its declaration order is the order tokens
//! appear in composed prefixes.

use crate::event::{Key, Modifiers, MouseButton};

/// Base token for wheel events.
pub const WHEEL_TOKEN: &str = "wheel";

/// Event name for pointer motion, dispatched without a modifier prefix.
pub const MOUSE_MOVE_NAME: &str = "mouse-move";

/// Suffix appended to the event name on key and button release.
pub const RELEASE_SUFFIX: &str = "-up";

/// Host modifier flags to engine prefix tokens, in prefix order.
///
/// Meta, keypad, and group switch have no engine token of their own and
/// surface as `"unknown"`; holding more than one of them yields repeated
/// `"unknown"` entries, which is the engine's own naming. The leading
/// empty entry is the no-modifier sentinel.
pub const MODIFIER_TABLE: &[(Modifiers, Option<&str>)] = &[
    (Modifiers::empty(), None),
    (Modifiers::SHIFT, Some("shift")),
    (Modifiers::CONTROL, Some("control")),
    (Modifiers::ALT, Some("alt")),
    (Modifiers::META, Some("unknown")),
    (Modifiers::KEYPAD, Some("unknown")),
    (Modifiers::GROUP_SWITCH, Some("unknown")),
];

/// Engine token for a mouse button, if the engine names it.
pub fn button_token(button: MouseButton) -> Option<&'static str> {
    match button {
        MouseButton::Left => Some("mouse1"),
        MouseButton::Middle => Some("mouse2"),
        MouseButton::Right => Some("mouse3"),
        MouseButton::Back => Some("mouse4"),
        MouseButton::Forward => Some("mouse5"),
        MouseButton::Other(_) => None,
    }
}

/// Engine token for a key, if the engine names it.
pub fn key_token(key: Key) -> Option<&'static str> {
    match key {
        Key::A => Some("a"),
        Key::B => Some("b"),
        Key::C => Some("c"),
        Key::D => Some("d"),
        Key::E => Some("e"),
        Key::F => Some("f"),
        Key::G => Some("g"),
        Key::H => Some("h"),
        Key::I => Some("i"),
        Key::J => Some("j"),
        Key::K => Some("k"),
        Key::L => Some("l"),
        Key::M => Some("m"),
        Key::N => Some("n"),
        Key::O => Some("o"),
        Key::P => Some("p"),
        Key::Q => Some("q"),
        Key::R => Some("r"),
        Key::S => Some("s"),
        Key::T => Some("t"),
        Key::U => Some("u"),
        Key::V => Some("v"),
        Key::W => Some("w"),
        Key::X => Some("x"),
        Key::Y => Some("y"),
        Key::Z => Some("z"),

        Key::Num0 => Some("0"),
        Key::Num1 => Some("1"),
        Key::Num2 => Some("2"),
        Key::Num3 => Some("3"),
        Key::Num4 => Some("4"),
        Key::Num5 => Some("5"),
        Key::Num6 => Some("6"),
        Key::Num7 => Some("7"),
        Key::Num8 => Some("8"),
        Key::Num9 => Some("9"),

        Key::F1 => Some("f1"),
        Key::F2 => Some("f2"),
        Key::F3 => Some("f3"),
        Key::F4 => Some("f4"),
        Key::F5 => Some("f5"),
        Key::F6 => Some("f6"),
        Key::F7 => Some("f7"),
        Key::F8 => Some("f8"),
        Key::F9 => Some("f9"),
        Key::F10 => Some("f10"),
        Key::F11 => Some("f11"),
        Key::F12 => Some("f12"),

        Key::Space => Some("space"),
        Key::Enter => Some("enter"),
        Key::Escape => Some("escape"),
        Key::Backspace => Some("backspace"),
        Key::Tab => Some("tab"),
        Key::Delete => Some("delete"),
        Key::Insert => Some("insert"),
        Key::Home => Some("home"),
        Key::End => Some("end"),
        Key::PageUp => Some("page_up"),
        Key::PageDown => Some("page_down"),

        Key::Left => Some("arrow_left"),
        Key::Right => Some("arrow_right"),
        Key::Up => Some("arrow_up"),
        Key::Down => Some("arrow_down"),

        Key::Shift => Some("shift"),
        Key::Ctrl => Some("control"),
        Key::Alt => Some("alt"),
        Key::Meta => Some("meta"),

        Key::CapsLock => Some("caps_lock"),
        Key::NumLock => Some("num_lock"),
        Key::ScrollLock => Some("scroll_lock"),

        Key::Minus => Some("-"),
        Key::Equals => Some("="),
        Key::LeftBracket => Some("["),
        Key::RightBracket => Some("]"),
        Key::Backslash => Some("\\"),
        Key::Semicolon => Some(";"),
        Key::Quote => Some("'"),
        Key::Comma => Some(","),
        Key::Period => Some("."),
        Key::Slash => Some("/"),
        Key::Grave => Some("`"),

        Key::Other(_) => None,
    }
}
