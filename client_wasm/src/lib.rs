//! Browser shell for the Pong game
//!
//! Wires the canvas, the score text and the restart button to a
//! `game_core` match, and drives it from `requestAnimationFrame`.
//! Rendering uses wgpu with the "webgpu" feature.

#![cfg(target_arch = "wasm32")]

mod camera;
mod hud;
mod input;
mod mesh;
mod renderer;

use game_core::{Config, GameLoop, GameRng, InputState, Match};
use hud::ScoreBoard;
use renderer::Renderer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, Window};

// Element ids the host page provides
const CANVAS_ID: &str = "game";
const PLAYER_SCORE_ID: &str = "pScore";
const OPPONENT_SCORE_ID: &str = "cScore";
const RESTART_ID: &str = "restart";

/// Everything the frame callback and the restart button share
struct Shell {
    game_loop: GameLoop,
    renderer: Renderer,
    scoreboard: ScoreBoard,
}

impl Shell {
    fn frame(&mut self, input: &mut InputState) -> Result<(), String> {
        let scored = self.game_loop.frame(input, &mut self.renderer)?.scored();
        if scored {
            self.scoreboard.show(&self.game_loop.game().score);
        }
        Ok(())
    }

    fn restart(&mut self) {
        self.game_loop.restart();
        self.scoreboard.show(&self.game_loop.game().score);
    }
}

/// Start the game on the page; resolves once the first frame is scheduled
#[wasm_bindgen]
pub fn start() -> js_sys::Promise {
    wasm_bindgen_futures::future_to_promise(async move {
        run().await?;
        Ok(JsValue::UNDEFINED)
    })
}

async fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;

    let canvas: HtmlCanvasElement = find_element(&document, CANVAS_ID)?
        .dyn_into()
        .map_err(|_| JsValue::from_str(&format!("#{CANVAS_ID} is not a canvas")))?;
    let scoreboard = ScoreBoard::new(
        find_element(&document, PLAYER_SCORE_ID)?,
        find_element(&document, OPPONENT_SCORE_ID)?,
    );
    let restart_button = find_element(&document, RESTART_ID)?;

    let config = Config::for_playfield(canvas.width() as f32, canvas.height() as f32);
    let renderer = Renderer::new(canvas.clone(), &config)
        .await
        .map_err(|e| JsValue::from_str(&e))?;

    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let game = Match::new(config, GameRng::new(seed));
    scoreboard.show(&game.score);

    let shell = Rc::new(RefCell::new(Shell {
        game_loop: GameLoop::new(game),
        renderer,
        scoreboard,
    }));
    let input = Rc::new(RefCell::new(InputState::new()));

    input::attach(&window, &canvas, input.clone())?;
    attach_restart(&restart_button, shell.clone())?;
    start_frame_loop(window, shell, input)?;

    log::info!("pong running");
    Ok(())
}

fn find_element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing #{id} element")))
}

fn attach_restart(button: &Element, shell: Rc<RefCell<Shell>>) -> Result<(), JsValue> {
    let on_click = Closure::<dyn FnMut()>::new(move || {
        shell.borrow_mut().restart();
    });
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

/// One simulation + render pass per animation frame, forever.
///
/// A failing frame is logged and ends the loop.
fn start_frame_loop(
    window: Window,
    shell: Rc<RefCell<Shell>>,
    input: Rc<RefCell<InputState>>,
) -> Result<(), JsValue> {
    let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = callback.clone();
    let loop_window = window.clone();

    *callback.borrow_mut() = Some(Closure::new(move || {
        if let Err(err) = shell.borrow_mut().frame(&mut input.borrow_mut()) {
            log::error!("frame failed, stopping: {err}");
            return;
        }

        if let Some(cb) = next.borrow().as_ref() {
            if let Err(err) = loop_window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame failed: {err:?}");
            }
        }
    }));

    if let Some(cb) = callback.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}
