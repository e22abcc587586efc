//! Event dispatch through the engine's named-event bus

use porthole_core::{EventBus, EventPayload};

use crate::error::Result;
use crate::event::InputEvent;
use crate::translate::translate;

/// Translates host input and publishes the result on an [`EventBus`].
///
/// The bus is passed per call rather than stored, so the dispatcher has no
/// opinion about how the embedder owns its engine handle and stays trivial
/// to test against a recording bus.
#[derive(Clone, Copy, Debug, Default)]
pub struct EventDispatcher {
    debug: bool,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatcher that echoes every resolved event name to the diagnostic
    /// log before sending.
    pub fn with_debug(debug: bool) -> Self {
        Self { debug }
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Translate `event` and send it.
    ///
    /// An input with no table entry returns the translation error and
    /// sends nothing; the bus never sees half-composed names.
    pub fn dispatch<B: EventBus>(&self, bus: &B, event: &InputEvent) -> Result<()> {
        let engine_event = translate(event)?;
        if self.debug {
            match engine_event.payload {
                Some(EventPayload::Wheel { delta }) => {
                    tracing::debug!("Dispatching: {} {}", engine_event.name, delta);
                }
                _ => tracing::debug!("Dispatching: {}", engine_event.name),
            }
        }
        bus.send(&engine_event.name, engine_event.payload);
        Ok(())
    }
}
