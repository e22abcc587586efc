//! Porthole Engine Contract
//!
//! This crate defines the boundary between an embedding widget and the
//! render engine it displays. It has no opinion about which GUI toolkit
//! hosts the widget or which engine renders behind it.
//!
//! # Architecture
//!
//! The contract is built around four capability traits the engine side
//! implements:
//!
//! - [`EventBus`] - the engine's global named-event channel
//! - [`CameraLens`] - film-size access for proportional resize scaling
//! - [`OffscreenBuffer`] - the off-screen render target and its pixel frames
//! - [`EngineWorld`] - aggregate handle bundling the above with the task
//!   scheduler
//!
//! Alongside the traits live the protocol types: [`EngineEvent`] (a name in
//! the `"<modifier-prefix><base-token>[-up]"` wire format plus an optional
//! payload) and [`PixelFrame`] (a borrowed snapshot of the engine's render
//! target).
//!
//! # Example
//!
//! ```rust
//! use porthole_core::{EventBus, EventPayload};
//!
//! struct PrintBus;
//!
//! impl EventBus for PrintBus {
//!     fn send(&self, name: &str, payload: Option<EventPayload>) {
//!         println!("{name}: {payload:?}");
//!     }
//! }
//!
//! PrintBus.send("control-mouse1", Some(EventPayload::Pointer { x: 10, y: 20 }));
//! ```

mod engine;
mod event;

// Re-export all public types
pub use engine::{CameraLens, EngineWorld, EventBus, FilmSize, OffscreenBuffer, PixelFrame};
pub use event::{EngineEvent, EventPayload};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::engine::{CameraLens, EngineWorld, EventBus, FilmSize, OffscreenBuffer, PixelFrame};
    pub use crate::event::{EngineEvent, EventPayload};
}
