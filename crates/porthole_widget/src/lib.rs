//! Porthole Viewport Widget
//!
//! This crate is the toolkit-agnostic core of an embedded engine viewport:
//! everything a host widget does except the actual toolkit calls.
//!
//! # Architecture
//!
//! Three pieces cooperate around the host's event loop:
//!
//! - [`FramePump`] - a fixed-interval timer that steps the engine's task
//!   scheduler and raises a repaint request after every step
//! - [`PixelBridge`] - copies the engine's bottom-first off-screen frame
//!   into a reusable top-first [`OutputImage`] and draws it through the
//!   host's [`PaintSurface`]
//! - [`PortholeWidget`] - owns both plus the engine world handle, and maps
//!   host widget callbacks (mouse, key, wheel, resize, paint) onto them
//!
//! A host toolkit adapter stays a thin shell: construct the widget with a
//! [`WidgetConfig`], forward native events to the `on_*` methods, call
//! [`poll`](PortholeWidget::poll) when the pump's deadline arrives, and
//! repaint when [`take_repaint_request`](PortholeWidget::take_repaint_request)
//! returns true.
//!
//! # Example
//!
//! ```ignore
//! use porthole_widget::{PortholeWidget, WidgetConfig};
//!
//! let mut widget = PortholeWidget::new(world, WidgetConfig::default())?;
//!
//! // Inside the host's event loop:
//! widget.on_mouse_press(button, modifiers, x, y);
//! widget.poll(std::time::Instant::now());
//! if widget.take_repaint_request() {
//!     widget.paint(&mut surface)?;
//! }
//! ```

mod bridge;
mod error;
mod pump;
mod widget;

// Re-export all public types
pub use bridge::{OutputImage, PaintOutcome, PaintSurface, PixelBridge, BYTES_PER_PIXEL};
pub use error::{SurfaceError, WidgetError};
pub use pump::{FramePump, PumpState, RepaintFlag, RepaintHandle, DEFAULT_FPS};
pub use widget::{PortholeWidget, WidgetConfig, MIN_SIZE_HINT};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::bridge::{OutputImage, PaintOutcome, PaintSurface, PixelBridge};
    pub use crate::error::{SurfaceError, WidgetError};
    pub use crate::pump::{FramePump, PumpState, RepaintFlag, RepaintHandle};
    pub use crate::widget::{PortholeWidget, WidgetConfig};
    pub use porthole_core::prelude::*;
    pub use porthole_input::prelude::*;
}
