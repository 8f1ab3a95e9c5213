//! Dog Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Document, Element, HtmlButtonElement, HtmlCanvasElement, HtmlElement, HtmlInputElement,
        KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions, TouchEvent,
    };

    use dog_dash::api::client;
    use dog_dash::consts::*;
    use dog_dash::input::{Command, InputEvent, InputState, should_prevent_default};
    use dog_dash::leaderboard::{PlayerStats, escape_html, format_date};
    use dog_dash::persistence::GameRun;
    use dog_dash::renderer::{CanvasRenderer, render_frame};
    use dog_dash::settings::Settings;
    use dog_dash::sim::{Clock, FrameClock, Session, SessionPhase, SystemClock};

    /// Sprite drawn for the dog
    const SPRITE_SRC: &str = "harper-dog.png";
    /// Rows requested for the history panel
    const HISTORY_LIMIT: usize = 10;

    /// Game instance holding all state
    struct Game {
        session: Session,
        renderer: Option<CanvasRenderer>,
        clock: SystemClock,
        frames: FrameClock,
        input: InputState,
        settings: Settings,
        // Track phase for overlay transitions
        last_phase: SessionPhase,
    }

    impl Game {
        fn new(settings: Settings, seed: u64) -> Self {
            Self {
                session: Session::new(settings.variant.tuning(), seed),
                renderer: None,
                clock: SystemClock::new(),
                frames: FrameClock::new(),
                input: InputState::new(),
                settings,
                last_phase: SessionPhase::Idle,
            }
        }

        /// Route a raw event through the input mapper into the session
        fn handle_event(&mut self, event: InputEvent) {
            if let Some(command) = self.input.handle(&event, self.session.phase()) {
                if let Command::Start(_) = command {
                    self.session.reseed(dog_dash::platform::random_seed());
                }
                command.apply(&mut self.session, self.clock.now_ms());
                self.sync_overlays();
            }
        }

        /// Run one simulation tick
        fn update(&mut self, time: f64) {
            self.frames.frame(time);
            let now = self.clock.now_ms();
            self.session.tick(now);
        }

        fn render(&mut self) {
            if let Some(ref mut renderer) = self.renderer {
                render_frame(renderer, self.session.state(), &self.settings);
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            let Some(document) = document() else { return };

            if let Some(el) = document.get_element_by_id("score-display") {
                let text = if self.settings.show_fps {
                    format!("Score: {} ({} fps)", self.session.score(), self.frames.fps())
                } else {
                    format!("Score: {}", self.session.score())
                };
                el.set_text_content(Some(&text));
            }

            if self.session.phase() != self.last_phase {
                self.sync_overlays();
            }
        }

        /// Show/hide overlays to match the session phase
        fn sync_overlays(&mut self) {
            let Some(document) = document() else { return };
            let phase = self.session.phase();

            set_hidden(&document, "start-overlay", phase != SessionPhase::Idle);
            set_hidden(&document, "game-over-overlay", phase != SessionPhase::GameOver);

            if phase == SessionPhase::GameOver {
                if let Some(el) = document.get_element_by_id("final-score") {
                    el.set_text_content(Some(&self.session.score().to_string()));
                }
            }
            if phase == SessionPhase::Idle {
                set_status(&document, "", "");
            }
            self.last_phase = phase;
        }
    }

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let classes = el.class_list();
            let _ = if hidden {
                classes.add_1("hidden")
            } else {
                classes.remove_1("hidden")
            };
        }
    }

    fn set_status(document: &Document, text: &str, color: &str) {
        if let Some(el) = document.get_element_by_id("submission-status") {
            el.set_text_content(Some(text));
            if let Some(html) = el.dyn_ref::<HtmlElement>() {
                let _ = html.style().set_property("color", color);
            }
        }
    }

    fn player_name_input(document: &Document) -> Option<HtmlInputElement> {
        document
            .get_element_by_id("player-name")?
            .dyn_into::<HtmlInputElement>()
            .ok()
    }

    fn table_body(document: &Document, table_id: &str) -> Option<Element> {
        document
            .query_selector(&format!("#{} tbody", table_id))
            .ok()
            .flatten()
    }

    fn render_top_runs(runs: &[GameRun]) {
        let Some(document) = document() else { return };
        if let Some(tbody) = table_body(&document, "top-runs-table") {
            let rows: String = runs
                .iter()
                .enumerate()
                .map(|(i, run)| {
                    format!(
                        "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                        i + 1,
                        escape_html(&run.player_name),
                        run.score
                    )
                })
                .collect();
            tbody.set_inner_html(&rows);
        }
    }

    fn render_cumulative(players: &[PlayerStats]) {
        let Some(document) = document() else { return };
        if let Some(tbody) = table_body(&document, "cumulative-table") {
            let rows: String = players
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    format!(
                        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                        i + 1,
                        escape_html(&p.player_name),
                        p.total_score,
                        p.run_count
                    )
                })
                .collect();
            tbody.set_inner_html(&rows);
        }
    }

    fn render_player_history(runs: &[GameRun]) {
        let Some(document) = document() else { return };
        if let Some(tbody) = table_body(&document, "player-history-table") {
            let rows: String = runs
                .iter()
                .map(|run| {
                    format!(
                        "<tr><td>{}</td><td>{}</td></tr>",
                        format_date(run.created_at),
                        run.score
                    )
                })
                .collect();
            tbody.set_inner_html(&rows);
        }
    }

    /// Refresh both leaderboards (failures leave empty tables)
    fn refresh_leaderboards() {
        wasm_bindgen_futures::spawn_local(async {
            let top = client::fetch_top_runs(DEFAULT_TOP_RUNS_LIMIT).await;
            render_top_runs(&top);
            let cumulative = client::fetch_cumulative(DEFAULT_CUMULATIVE_LIMIT).await;
            render_cumulative(&cumulative);
        });
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Dog Dash starting...");

        let document = document().ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);

        let settings = Settings::load();
        if let Some(input) = player_name_input(&document) {
            input.set_value(&settings.player_name);
        }

        let seed = dog_dash::platform::random_seed();
        let game = Rc::new(RefCell::new(Game::new(settings, seed)));
        log::info!("Game initialized with seed: {}", seed);

        let mut renderer = CanvasRenderer::new(&canvas)?;
        renderer.load_sprite(SPRITE_SRC)?;
        game.borrow_mut().renderer = Some(renderer);

        refresh_leaderboards();

        setup_input_handlers(&document, game.clone());
        setup_buttons(&document, game.clone());

        game.borrow_mut().sync_overlays();
        game.borrow_mut().render();

        // Start game loop
        request_animation_frame(game);

        log::info!("Dog Dash running!");
        Ok(())
    }

    fn setup_input_handlers(document: &Document, game: Rc<RefCell<Game>>) {
        // Keyboard down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let code = event.code();
                if should_prevent_default(&code) {
                    event.prevent_default();
                }
                game.borrow_mut().handle_event(InputEvent::KeyDown(code));
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard up (movement intents)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().handle_event(InputEvent::KeyUp(event.code()));
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch (start or jump)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                game.borrow_mut().handle_event(InputEvent::Touch);
            });
            let _ = document
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn on_click(document: &Document, id: &str, handler: impl FnMut(web_sys::MouseEvent) + 'static) {
        if let Some(btn) = document.get_element_by_id(id) {
            let closure = Closure::<dyn FnMut(_)>::new(handler);
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("Missing #{}", id);
        }
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        {
            let game = game.clone();
            on_click(document, "start-game-btn", move |_| {
                game.borrow_mut().handle_event(InputEvent::StartButton);
            });
        }

        {
            let game = game.clone();
            on_click(document, "play-again-btn", move |_| {
                let mut g = game.borrow_mut();
                g.handle_event(InputEvent::PlayAgainButton);
                g.render();
            });
        }

        {
            let game = game.clone();
            on_click(document, "submit-score-btn", move |_| submit_score(game.clone()));
        }

        on_click(document, "my-history-btn", move |_| show_player_history(game.clone()));
    }

    fn submit_score(game: Rc<RefCell<Game>>) {
        let Some(document) = document() else { return };
        let name = player_name_input(&document)
            .map(|i| i.value().trim().to_string())
            .unwrap_or_default();
        if name.is_empty() {
            set_status(&document, "Please enter a name!", "red");
            return;
        }

        let score = {
            let mut g = game.borrow_mut();
            g.settings.remember_player_name(&name);
            g.settings.save();
            g.session.state().duration_seconds()
        };

        set_status(&document, "Submitting...", "white");
        let button = document
            .get_element_by_id("submit-score-btn")
            .and_then(|b| b.dyn_into::<HtmlButtonElement>().ok());
        if let Some(ref b) = button {
            b.set_disabled(true);
        }

        wasm_bindgen_futures::spawn_local(async move {
            // Score doubles as duration: both are whole seconds survived
            let result = client::submit_run(&name, score, score).await;
            if let Some(document) = self::document() {
                match result {
                    Ok(()) => {
                        set_status(&document, "Score submitted!", "#4CAF50");
                        refresh_leaderboards();
                    }
                    Err(e) => {
                        log::error!("Submission failed: {:?}", e);
                        set_status(&document, "Error submitting score.", "red");
                    }
                }
            }
            if let Some(b) = button {
                b.set_disabled(false);
            }
        });
    }

    fn show_player_history(game: Rc<RefCell<Game>>) {
        let Some(document) = document() else { return };
        let typed = player_name_input(&document)
            .map(|i| i.value().trim().to_string())
            .unwrap_or_default();
        let name = if typed.is_empty() {
            game.borrow().settings.player_name.clone()
        } else {
            typed
        };
        if name.is_empty() {
            set_status(&document, "Enter name first!", "red");
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            let runs = client::fetch_player_runs(&name, HISTORY_LIMIT).await;
            render_player_history(&runs);
            if let Some(document) = self::document() {
                set_hidden(&document, "player-history-section", false);
                if let Some(section) = document.get_element_by_id("player-history-section") {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    section.scroll_into_view_with_scroll_into_view_options(&options);
                }
            }
        });
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Dog Dash (native) starting...");
    log::info!("Native mode runs headless bot sessions - use `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(dog_dash::platform::random_seed);
    headless::run(seed, &["Harper", "Biscuit", "Harper"]);
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use dog_dash::consts::*;
    use dog_dash::leaderboard::{cumulative_leaderboard, player_runs, top_runs};
    use dog_dash::persistence::{MemoryRunStore, RunStore};
    use dog_dash::sim::{Clock, ManualClock, Session, SessionPhase};
    use dog_dash::tuning::Tuning;

    /// 60 Hz frames
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Give up on a run after this long
    const MAX_RUN_MS: f64 = 5.0 * 60.0 * 1000.0;

    /// Play one run with a bot that jumps when the nearest obstacle gets close
    fn play(session: &mut Session, clock: &ManualClock, reaction_px: f32) -> u32 {
        session.start(clock.now_ms());
        let started = clock.now_ms();

        while session.phase() == SessionPhase::Running && clock.now_ms() - started < MAX_RUN_MS {
            let state = session.state();
            let actor_right = state.actor.pos.x + state.actor.size.x;
            let threat = state
                .obstacles
                .iter()
                .map(|o| o.pos.x - actor_right)
                .filter(|gap| *gap >= -ACTOR_WIDTH)
                .fold(f32::INFINITY, f32::min);
            if threat < reaction_px * state.speed / 3.0 {
                session.jump();
            }

            clock.advance(FRAME_MS);
            session.tick(clock.now_ms());
        }
        session.score()
    }

    pub fn run(seed: u64, players: &[&str]) {
        let clock = ManualClock::new(0.0);
        let mut session = Session::new(Tuning::classic(), seed);
        let mut store = MemoryRunStore::new();

        for (i, name) in players.iter().enumerate() {
            session.reseed(seed.wrapping_add(i as u64));
            // Each bot reacts a little differently
            let score = play(&mut session, &clock, 10.0 + 8.0 * i as f32);
            log::info!("{} survived {}s", name, score);
            if let Err(e) = store.submit_run(name, score as i64, score as i64) {
                log::error!("Submission rejected: {}", e);
            }
            session.reset();
        }

        println!("\nTop runs:");
        for (i, run) in top_runs(store.runs(), DEFAULT_TOP_RUNS_LIMIT).iter().enumerate() {
            println!("  {}. {} - {}", i + 1, run.player_name, run.score);
        }

        println!("\nCumulative:");
        for (i, p) in cumulative_leaderboard(store.runs(), DEFAULT_CUMULATIVE_LIMIT)
            .iter()
            .enumerate()
        {
            println!(
                "  {}. {} - total {} over {} runs (best {})",
                i + 1,
                p.player_name,
                p.total_score,
                p.run_count,
                p.best_score
            );
        }

        if let Some(first) = players.first() {
            println!("\n{}'s runs:", first);
            for run in player_runs(store.runs(), first, DEFAULT_PLAYER_RUNS_LIMIT) {
                println!("  #{} - {}", run.id, run.score);
            }
        }
    }
}
