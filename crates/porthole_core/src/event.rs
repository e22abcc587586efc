//! The engine event protocol: named events with optional payloads

use serde::{Deserialize, Serialize};

/// Payload attached to a dispatched engine event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventPayload {
    /// Pointer position in widget coordinates
    Pointer { x: i32, y: i32 },
    /// Wheel rotation delta, in host-toolkit angle units
    Wheel { delta: i32 },
}

/// A fully composed engine event, ready for the bus.
///
/// `name` follows the wire format `"<modifier-prefix><base-token>[-up]"`,
/// e.g. `"control-alt-a"`, `"mouse-move"`, `"shift-wheel"`, `"a-up"`.
/// Engine-side handlers match on the literal name string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineEvent {
    pub name: String,
    pub payload: Option<EventPayload>,
}

impl EngineEvent {
    pub fn new(name: impl Into<String>, payload: Option<EventPayload>) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pointer_payload_wire_shape() {
        let payload = EventPayload::Pointer { x: 10, y: 20 };
        let value = serde_json::to_value(payload).unwrap();
        assert_eq!(value, json!({ "pointer": { "x": 10, "y": 20 } }));
    }

    #[test]
    fn test_wheel_payload_wire_shape() {
        let payload = EventPayload::Wheel { delta: -120 };
        let value = serde_json::to_value(payload).unwrap();
        assert_eq!(value, json!({ "wheel": { "delta": -120 } }));
    }

    #[test]
    fn test_event_without_payload_roundtrips() {
        let event = EngineEvent::new("shift-a-up", None);
        let text = serde_json::to_string(&event).unwrap();
        let back: EngineEvent = serde_json::from_str(&text).unwrap();
        assert_eq!(back, event);
        assert_eq!(back.name, "shift-a-up");
        assert!(back.payload.is_none());
    }
}
