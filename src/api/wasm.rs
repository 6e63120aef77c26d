//! WASM facade
//!
//! Thin `#[wasm_bindgen]` wrapper around `GameCore` plus the actual
//! canvas painting. The host owns the loop
//! driver: it wires key events to `key_down`/`key_up` and calls `tick`
//! from `setInterval` or `requestAnimationFrame` with a timestamp.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::core::GameError;
use crate::domain::GameSettings;
use crate::game::GameCore;

#[wasm_bindgen]
pub struct Game {
    core: GameCore,
    context: CanvasRenderingContext2d,
    canvas_width: f64,
    canvas_height: f64,
    last_time: Option<f64>,
    running: bool,
}

#[wasm_bindgen]
impl Game {
    /// Creates a game on the given canvas with default settings.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<Game, JsValue> {
        Self::build(canvas, GameSettings::default())
    }

    /// Creates a game with settings overridden from a JSON string.
    #[wasm_bindgen(js_name = withSettings)]
    pub fn with_settings(canvas: HtmlCanvasElement, json: &str) -> Result<Game, JsValue> {
        let settings = GameSettings::from_json(json).map_err(to_js)?;
        Self::build(canvas, settings)
    }

    /// Advances the game by the wall-clock delta since the previous
    /// tick and repaints. Any error is fatal to the run: it is logged,
    /// the game stops, and the error is surfaced to the host.
    pub fn tick(&mut self, now_ms: f64) -> Result<(), JsValue> {
        if !self.running {
            return Ok(());
        }

        let delta_ms = match self.last_time {
            Some(last) => now_ms - last,
            None => 0.0,
        };
        self.last_time = Some(now_ms);

        if let Err(err) = self.core.update(delta_ms) {
            self.running = false;
            console::error_1(&format!("jsnake tick failed: {}", err).into());
            return Err(to_js(err));
        }

        // Repaint on every tick, stepped or not.
        self.paint();
        Ok(())
    }

    /// Forwards a `KeyboardEvent.code` key-down. Returns whether the
    /// code mapped to a game input.
    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, code: &str) -> bool {
        self.core.key_down(code)
    }

    /// Forwards a `KeyboardEvent.code` key-up.
    #[wasm_bindgen(js_name = keyUp)]
    pub fn key_up(&mut self, code: &str) -> bool {
        self.core.key_up(code)
    }

    /// Direct direction change by token ("left", "right", "up",
    /// "down"). Returns whether the change was accepted.
    #[wasm_bindgen(js_name = setDirection)]
    pub fn set_direction(&mut self, token: &str) -> Result<bool, JsValue> {
        self.core.set_direction(token).map_err(to_js)
    }

    /// Rebuilds the snake at its start position and resumes.
    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.core.reset().map_err(to_js)?;
        self.last_time = None;
        self.running = true;
        self.paint();
        Ok(())
    }

    /// Stops consuming ticks; the host should also stop its timer.
    pub fn stop(&mut self) {
        self.running = false;
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.canvas_width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.canvas_height
    }

    #[wasm_bindgen(getter)]
    pub fn columns(&self) -> u32 {
        self.core.columns()
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 {
        self.core.rows()
    }

    #[wasm_bindgen(getter, js_name = snakeLength)]
    pub fn snake_length(&self) -> u32 {
        self.core.snake_length()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    #[wasm_bindgen(getter, js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Milliseconds per frame for the host's timer, from the configured
    /// fps.
    #[wasm_bindgen(getter, js_name = frameIntervalMs)]
    pub fn frame_interval_ms(&self) -> f64 {
        self.core.frame_interval_ms()
    }
}

impl Game {
    fn build(canvas: HtmlCanvasElement, settings: GameSettings) -> Result<Game, JsValue> {
        let canvas_width = canvas.width() as f64;
        let canvas_height = canvas.height() as f64;

        let context = canvas
            .get_context("2d")
            .map_err(|_| JsValue::from_str("failed to get 2d context"))?
            .ok_or_else(|| JsValue::from_str("2d context is null"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("not a 2d canvas context"))?;

        let core = GameCore::new(canvas_width, canvas_height, settings).map_err(to_js)?;

        let game = Game {
            core,
            context,
            canvas_width,
            canvas_height,
            last_time: None,
            running: true,
        };
        game.paint();
        Ok(game)
    }

    fn paint(&self) {
        let ctx = &self.context;
        ctx.clear_rect(0.0, 0.0, self.canvas_width, self.canvas_height);

        let path = self.core.render_path();
        let Some((head_x, head_y)) = path.points.first().copied() else {
            return;
        };

        ctx.save();
        ctx.begin_path();
        ctx.set_stroke_style_str(&path.color);
        ctx.set_line_width(path.width);
        ctx.set_line_cap("round");
        ctx.set_line_join("round");

        ctx.move_to(head_x, head_y);
        for &(x, y) in &path.points[1..] {
            ctx.line_to(x, y);
        }

        ctx.stroke();
        ctx.restore();
    }
}

fn to_js(err: GameError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
