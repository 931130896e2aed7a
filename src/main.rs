//! Meteor Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, TouchEvent};

    use meteor_dash::consts::{MAX_SUBSTEPS, SIM_DT};
    use meteor_dash::sim::{GamePhase, GameState, TickInput, Viewport, spike_aabb, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        accumulator: f32,
        last_time: f64,
        input: TickInput,
    }

    impl Game {
        fn new(seed: u64, canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
            let viewport = Viewport::new(canvas.width() as f32, canvas.height() as f32);
            Self {
                state: GameState::new(seed, viewport),
                canvas,
                ctx,
                accumulator: 0.0,
                last_time: 0.0,
                input: TickInput::default(),
            }
        }

        /// Run simulation frames for the elapsed wall time
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.input;
                tick(&mut self.state, &input);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.input = TickInput::default();
            }
        }

        /// Apply a host viewport change
        fn resize(&mut self, width: f32, height: f32) {
            self.canvas.set_width(width as u32);
            self.canvas.set_height(height as u32);
            self.state.resize(width, height);
        }

        /// Draw the frame from the read-only state snapshot
        fn render(&self) {
            let ctx = &self.ctx;
            let state = &self.state;
            let t = &state.tuning;
            let w = state.viewport.width as f64;
            let h = state.viewport.height as f64;

            ctx.clear_rect(0.0, 0.0, w, h);

            // Player
            ctx.set_fill_style_str("red");
            ctx.fill_rect(
                state.player.pos.x as f64,
                state.player.pos.y as f64,
                t.player_width as f64,
                t.player_height as f64,
            );

            // Platform segments
            ctx.set_fill_style_str("green");
            for pf in &state.platforms {
                ctx.fill_rect(
                    pf.x as f64,
                    pf.y as f64,
                    t.platform_width as f64,
                    t.platform_height as f64,
                );
            }

            // Spikes (triangles sitting on their segment's top edge)
            ctx.set_fill_style_str("black");
            for pf in state.platforms.iter().filter(|pf| pf.has_spike) {
                let bb = spike_aabb(pf, t);
                let apex_x = (bb.min.x + t.spike_width / 2.0) as f64;
                ctx.begin_path();
                ctx.move_to(apex_x, bb.min.y as f64);
                ctx.line_to(bb.min.x as f64, bb.bottom() as f64);
                ctx.line_to(bb.right() as f64, bb.bottom() as f64);
                ctx.close_path();
                ctx.fill();
            }

            // Meteors
            ctx.set_fill_style_str("gray");
            for ob in &state.obstacles {
                ctx.begin_path();
                let _ = ctx.arc(
                    ob.pos.x as f64,
                    ob.pos.y as f64,
                    (ob.size / 2.0) as f64,
                    0.0,
                    std::f64::consts::TAU,
                );
                ctx.fill();
            }

            // Score
            ctx.set_fill_style_str("black");
            ctx.set_font("20px sans-serif");
            ctx.set_text_align("start");
            let _ = ctx.fill_text(&format!("Score: {}", state.score), 10.0, 30.0);

            // Phase prompts
            ctx.set_font("28px sans-serif");
            ctx.set_text_align("center");
            match state.phase {
                GamePhase::NotStarted => {
                    let _ = ctx.fill_text("Press Space to start", w / 2.0, h / 2.0);
                }
                GamePhase::Ended => {
                    let _ = ctx.fill_text("Press Space to retry", w / 2.0, h / 2.0);
                }
                GamePhase::Running => {}
            }

            // Start banner, briefly after every (re)start
            if state.start_banner_frames > 0 {
                ctx.set_fill_style_str("yellow");
                ctx.set_font("30px sans-serif");
                let _ = ctx.fill_text("Start!", w / 2.0, h / 2.0);
            }
            ctx.set_text_align("start");
        }

        /// Debug snapshot of the full session state
        fn state_json(&self) -> String {
            serde_json::to_string(&self.state).unwrap_or_default()
        }
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Keyboard: Space starts/jumps, Shift boosts
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.code().as_str() {
                    "Space" => g.input.start_or_jump = true,
                    "ShiftLeft" | "ShiftRight" => g.input.boost = true,
                    "KeyD" => log::debug!("state: {}", g.state_json()),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch buttons (optional in the page)
        if let Some(btn) = document.get_element_by_id("jump-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().input.start_or_jump = true;
            });
            let _ =
                btn.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        if let Some(btn) = document.get_element_by_id("boost-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().input.boost = true;
            });
            let _ =
                btn.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let window = web_sys::window().unwrap();
            let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            game.borrow_mut().resize(w as f32, h as f32);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
        }

        request_animation_frame(game);
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Meteor Dash starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Fill the window
        let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1200.0);
        let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(800.0);
        canvas.set_width(w as u32);
        canvas.set_height(h as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("no 2d context")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, canvas, ctx)));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());
        setup_resize_handler(game.clone());

        request_animation_frame(game);

        log::info!("Meteor Dash running!");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use meteor_dash::sim::{GamePhase, GameState, TickInput, Viewport, tick};

    env_logger::init();
    log::info!("Meteor Dash (native) starting...");
    log::info!("Headless smoke run - serve the wasm build for the playable game");

    // Drive a short scripted session: start, then hop every second
    let mut state = GameState::new(0xD15EA5E, Viewport::new(1200.0, 800.0));
    tick(
        &mut state,
        &TickInput {
            start_or_jump: true,
            ..Default::default()
        },
    );

    for frame in 0u64..3600 {
        let input = TickInput {
            start_or_jump: frame % 60 == 0,
            boost: frame % 300 == 0,
        };
        tick(&mut state, &input);
        if state.phase == GamePhase::Ended {
            log::info!("run ended at frame {}", frame);
            break;
        }
    }

    println!(
        "survived {} frames, score {}",
        state.time_ticks, state.score
    );
}
