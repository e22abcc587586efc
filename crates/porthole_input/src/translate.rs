//! Host input to engine event translation
//!
//! Each recognized input event maps to exactly one engine event. The input
//! variant carries its discriminant, so translation is a total match over
//! the sum type; the only failure mode left is an identifier missing from
//! the symbol tables.

use porthole_core::{EngineEvent, EventPayload};

use crate::error::{Result, TranslateError};
use crate::event::{
    InputEvent, KeyState, KeyboardEvent, Modifiers, MouseButton, MouseEvent, WheelEvent,
};
use crate::prefix::modifier_prefix;
use crate::tables::{button_token, key_token, MOUSE_MOVE_NAME, RELEASE_SUFFIX, WHEEL_TOKEN};

/// Translate a host input event into the engine event it dispatches as.
///
/// Pointer motion translates unprefixed as [`MOUSE_MOVE_NAME`]; button and
/// wheel events carry a payload, key events do not.
pub fn translate(event: &InputEvent) -> Result<EngineEvent> {
    match event {
        InputEvent::Mouse(MouseEvent::Moved { x, y }) => Ok(EngineEvent::new(
            MOUSE_MOVE_NAME,
            Some(EventPayload::Pointer { x: *x, y: *y }),
        )),
        InputEvent::Mouse(MouseEvent::ButtonPressed {
            button,
            modifiers,
            x,
            y,
        }) => button_event(*button, *modifiers, *x, *y, false),
        InputEvent::Mouse(MouseEvent::ButtonReleased {
            button,
            modifiers,
            x,
            y,
        }) => button_event(*button, *modifiers, *x, *y, true),
        InputEvent::Keyboard(KeyboardEvent {
            key,
            state,
            modifiers,
        }) => {
            let token = key_token(*key).ok_or(TranslateError::UnmappedKey(*key))?;
            let mut name = modifier_prefix(*modifiers, token);
            name.push_str(token);
            if *state == KeyState::Released {
                name.push_str(RELEASE_SUFFIX);
            }
            Ok(EngineEvent::new(name, None))
        }
        InputEvent::Wheel(WheelEvent { delta, modifiers }) => {
            let mut name = modifier_prefix(*modifiers, WHEEL_TOKEN);
            name.push_str(WHEEL_TOKEN);
            Ok(EngineEvent::new(
                name,
                Some(EventPayload::Wheel { delta: *delta }),
            ))
        }
    }
}

fn button_event(
    button: MouseButton,
    modifiers: Modifiers,
    x: i32,
    y: i32,
    released: bool,
) -> Result<EngineEvent> {
    let token = button_token(button).ok_or(TranslateError::UnmappedButton(button))?;
    let mut name = modifier_prefix(modifiers, token);
    name.push_str(token);
    if released {
        name.push_str(RELEASE_SUFFIX);
    }
    Ok(EngineEvent::new(
        name,
        Some(EventPayload::Pointer { x, y }),
    ))
}
