//! Porthole Input Translation
//!
//! This crate turns host-toolkit input events into the render engine's
//! named-event protocol. Names follow the wire format
//! `"<modifier-prefix><base-token>[-up]"` and are reproduced exactly,
//! including hyphen placement and modifier ordering.
//!
//! # Architecture
//!
//! Translation is a small pipeline:
//!
//! - [`InputEvent`] - the tagged sum type host adapters construct; the
//!   variant carries the discriminant, so no runtime type introspection
//!   is ever needed
//! - [`tables`] - closed, process-lifetime symbol tables from host
//!   identifiers to engine tokens
//! - [`modifier_prefix`] - the ordered prefix resolver with the
//!   self-modifier-exclusion rule
//! - [`translate`] / [`EventDispatcher`] - compose the final name and
//!   publish it through an injected [`EventBus`](porthole_core::EventBus)
//!
//! # Example
//!
//! ```rust
//! use porthole_input::{translate, InputEvent, Key, KeyState, KeyboardEvent, Modifiers};
//!
//! let input = InputEvent::Keyboard(KeyboardEvent {
//!     key: Key::A,
//!     state: KeyState::Pressed,
//!     modifiers: Modifiers::CONTROL | Modifiers::ALT,
//! });
//! let event = translate(&input).unwrap();
//! assert_eq!(event.name, "control-alt-a");
//! ```

mod dispatch;
mod error;
mod event;
mod prefix;
pub mod tables;
mod translate;

// Re-export all public types
pub use dispatch::EventDispatcher;
pub use error::{Result, TranslateError};
pub use event::{
    InputEvent, Key, KeyState, KeyboardEvent, Modifiers, MouseButton, MouseEvent, WheelEvent,
};
pub use prefix::modifier_prefix;
pub use translate::translate;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dispatch::EventDispatcher;
    pub use crate::error::{Result, TranslateError};
    pub use crate::event::{
        InputEvent, Key, KeyState, KeyboardEvent, Modifiers, MouseButton, MouseEvent, WheelEvent,
    };
    pub use crate::prefix::modifier_prefix;
    pub use crate::translate::translate;
}
