//! Input event types a host widget forwards into the translation layer

bitflags::bitflags! {
    /// Modifier keys held during an input event.
    ///
    /// Mirrors the host toolkit's modifier bitmask, including flags the
    /// engine has no prefix token of its own for (meta, keypad, group
    /// switch surface as `"unknown"`).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CONTROL = 1 << 1;
        const ALT = 1 << 2;
        const META = 1 << 3;
        const KEYPAD = 1 << 4;
        const GROUP_SWITCH = 1 << 5;
    }
}

/// Input events
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Mouse event
    Mouse(MouseEvent),
    /// Keyboard event
    Keyboard(KeyboardEvent),
    /// Scroll wheel event
    Wheel(WheelEvent),
}

// ============================================================================
// Mouse Events
// ============================================================================

/// Mouse events
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseEvent {
    /// Mouse moved to position
    Moved {
        /// X position in widget coordinates
        x: i32,
        /// Y position in widget coordinates
        y: i32,
    },
    /// Mouse button pressed
    ButtonPressed {
        /// Which button was pressed
        button: MouseButton,
        /// Modifier keys held when pressed
        modifiers: Modifiers,
        /// X position when pressed
        x: i32,
        /// Y position when pressed
        y: i32,
    },
    /// Mouse button released
    ButtonReleased {
        /// Which button was released
        button: MouseButton,
        /// Modifier keys held when released
        modifiers: Modifiers,
        /// X position when released
        x: i32,
        /// Y position when released
        y: i32,
    },
}

/// Mouse buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (scroll wheel click)
    Middle,
    /// Back button (side button)
    Back,
    /// Forward button (side button)
    Forward,
    /// Other button with index
    Other(u16),
}

// ============================================================================
// Keyboard Events
// ============================================================================

/// Keyboard event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyboardEvent {
    /// The key that was pressed or released
    pub key: Key,
    /// Whether the key was pressed or released
    pub state: KeyState,
    /// Modifier keys held during this event
    pub modifiers: Modifiers,
}

/// Key press/release state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyState {
    /// Key was pressed
    Pressed,
    /// Key was released
    Released,
}

// ============================================================================
// Wheel Events
// ============================================================================

/// Scroll wheel event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WheelEvent {
    /// Vertical rotation delta, in host-toolkit angle units
    pub delta: i32,
    /// Modifier keys held during this event
    pub modifiers: Modifiers,
}

/// Key codes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    // Letters
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // Numbers
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,

    // Function keys
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    // Special keys
    Space,
    Enter,
    Escape,
    Backspace,
    Tab,
    Delete,
    Insert,
    Home,
    End,
    PageUp,
    PageDown,

    // Arrow keys
    Left,
    Right,
    Up,
    Down,

    // Modifier keys (for tracking state)
    Shift,
    Ctrl,
    Alt,
    Meta,

    // Lock keys
    CapsLock,
    NumLock,
    ScrollLock,

    // Punctuation and symbols
    Minus,
    Equals,
    LeftBracket,
    RightBracket,
    Backslash,
    Semicolon,
    Quote,
    Comma,
    Period,
    Slash,
    Grave,

    // Other key with the host toolkit's raw code
    Other(u32),
}
