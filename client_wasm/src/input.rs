//! Pointer and keyboard handling
//!
//! Event listeners only write into the shared `InputState`; the frame loop
//! reads it once per frame.

use game_core::math::pointer_to_playfield;
use game_core::{InputKey, InputState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

/// Pointer Y in playfield units, accounting for CSS scaling of the canvas
pub fn pointer_y(event: &MouseEvent, canvas: &HtmlCanvasElement) -> f32 {
    let rect = canvas.get_bounding_client_rect();
    pointer_to_playfield(
        event.client_y() as f32,
        rect.top() as f32,
        rect.height() as f32,
        canvas.height() as f32,
    )
}

/// Register pointer and key listeners for the lifetime of the page
pub fn attach(
    window: &Window,
    canvas: &HtmlCanvasElement,
    input: Rc<RefCell<InputState>>,
) -> Result<(), JsValue> {
    {
        let input = input.clone();
        let target = canvas.clone();
        let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            input.borrow_mut().set_pointer(pointer_y(&event, &target));
        });
        canvas.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        on_move.forget();
    }

    for (kind, pressed) in [("keydown", true), ("keyup", false)] {
        let input = input.clone();
        let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            let Some(key) = InputKey::from_key_name(&event.key()) else {
                return;
            };
            let mut input = input.borrow_mut();
            if pressed {
                input.press(key);
            } else {
                input.release(key);
            }
        });
        window.add_event_listener_with_callback(kind, on_key.as_ref().unchecked_ref())?;
        on_key.forget();
    }

    Ok(())
}
