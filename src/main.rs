//! Lane Racer entry point
//!
//! Native builds run a headless autopilot game at 60 Hz. The wasm32 build
//! wires the session to the page's canvas, buttons and keyboard.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlSelectElement, KeyboardEvent};

    use lane_racer::audio::{AudioSink, WebAudio};
    use lane_racer::persistence::LocalStorageStore;
    use lane_racer::platform::{FrameDriver, InputState, Key};
    use lane_racer::renderer::{DrawList, Presenter, canvas::CanvasPresenter};
    use lane_racer::sim::{Difficulty, GameEvent, Session};
    use lane_racer::ui::{self, Hud, Screen};
    use lane_racer::Settings;

    /// Game instance holding all state
    struct Game {
        session: Session,
        input: InputState,
        driver: FrameDriver,
        audio: WebAudio,
        presenter: Box<dyn Presenter>,
        /// A requestAnimationFrame callback is pending
        loop_active: bool,
    }

    impl Game {
        fn document() -> Option<Document> {
            web_sys::window()?.document()
        }

        fn set_text(document: &Document, id: &str, text: &str) {
            if let Some(el) = document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
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

        /// Mirror session state into the DOM
        fn sync_dom(&self, events: &[GameEvent]) {
            let Some(document) = Self::document() else {
                return;
            };
            let snapshot = self.session.snapshot();
            let hud = Hud::from_snapshot(&snapshot);
            Self::set_text(&document, "score", &hud.score);
            Self::set_text(&document, "speed", &hud.speed);
            Self::set_text(&document, "best", &hud.best);

            let screen = Screen::for_status(snapshot.status);
            Self::set_hidden(&document, "start-menu", screen != Screen::StartMenu);
            Self::set_hidden(&document, "pause-menu", screen != Screen::PauseMenu);
            Self::set_hidden(&document, "game-over", screen != Screen::GameOver);

            let mut rng = rand::rng();
            for event in events {
                if let Some(message) = ui::game_over_message(event, &mut rng) {
                    Self::set_text(&document, "game-over-message", message);
                    Self::set_text(&document, "final-score", &hud.score);
                }
            }
        }

        fn selected_difficulty() -> Difficulty {
            Self::document()
                .and_then(|d| d.get_element_by_id("difficulty"))
                .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
                .map(|select| select.value().parse().unwrap_or_default())
                .unwrap_or_default()
        }

        fn start(&mut self) {
            self.audio.resume();
            self.input.release_all();
            self.driver.reset();
            self.session.start(Self::selected_difficulty());
            let events = self.session.drain_events();
            self.sync_dom(&events);
        }

        /// Apply a session command outside the frame loop and refresh menus
        fn command(&mut self, apply: impl FnOnce(&mut Session)) {
            apply(&mut self.session);
            let events = self.session.drain_events();
            self.sync_dom(&events);
        }

        fn toggle_sound(&mut self) {
            let muted = !self.audio.is_muted();
            self.audio.set_muted(muted);
            if let Some(btn) = Self::document().and_then(|d| d.get_element_by_id("sound-btn")) {
                btn.set_text_content(Some(if muted { "🔇" } else { "🔊" }));
                let _ = btn.class_list().toggle("muted");
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialised".into());
        }

        log::info!("Lane Racer starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let settings = Settings::default();
        let canvas = document
            .get_element_by_id("gameCanvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok());

        let presenter: Box<dyn Presenter> = match canvas {
            Some(canvas) => {
                canvas.set_width(settings.road_width as u32);
                canvas.set_height(settings.road_height as u32);
                match CanvasPresenter::new(&canvas) {
                    Some(presenter) => Box::new(presenter),
                    None => {
                        log::error!("Canvas has no 2D context");
                        Box::new(DrawList::new())
                    }
                }
            }
            None => {
                log::error!("No #gameCanvas element");
                Box::new(DrawList::new())
            }
        };

        let session = Session::new(&settings, Box::new(LocalStorageStore::new()));
        log::info!("Session seed: {}", session.seed);

        let game = Rc::new(RefCell::new(Game {
            session,
            input: InputState::new(),
            driver: FrameDriver::new(),
            audio: WebAudio::new(settings.volume, !settings.sound_enabled),
            presenter,
            loop_active: false,
        }));
        game.borrow().sync_dom(&[]);

        setup_keyboard(game.clone());
        setup_buttons(game);

        log::info!("Lane Racer ready");
    }

    fn on_click(id: &str, handler: impl FnMut(web_sys::MouseEvent) + 'static) {
        let Some(btn) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            log::warn!("Missing #{}", id);
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(handler);
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        for id in ["start-btn", "restart-btn"] {
            let game = game.clone();
            on_click(id, move |_| {
                game.borrow_mut().start();
                ensure_loop(game.clone());
            });
        }

        {
            let game = game.clone();
            on_click("resume-btn", move |_| {
                game.borrow_mut().command(Session::resume);
                ensure_loop(game.clone());
            });
        }

        {
            let game = game.clone();
            on_click("quit-btn", move |_| game.borrow_mut().command(Session::quit));
        }

        on_click("sound-btn", move |_| game.borrow_mut().toggle_sound());
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Some(key) = Key::from_name(&event.key()) else {
                    return;
                };
                if key.blocks_default() {
                    event.prevent_default();
                }
                let mut g = game.borrow_mut();
                let status = g.session.status;
                if let Some(command) = g.input.key_down(key, status) {
                    g.command(|session| command.apply(session));
                    drop(g);
                    ensure_loop(game.clone());
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_name(&event.key()) {
                    game.borrow_mut().input.key_up(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keys released while the page is unfocused never report keyup
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().input.release_all();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Schedule frames unless a loop is already pending
    fn ensure_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.loop_active || !g.session.is_running() {
                return;
            }
            g.loop_active = true;
        }
        request_animation_frame(game);
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_running = {
            let mut g = game.borrow_mut();
            let g = &mut *g;
            let input = g.input.tick_input();
            let outcome = g.driver.frame(
                &mut g.session,
                &input,
                time,
                &mut g.audio,
                g.presenter.as_mut(),
            );
            g.sync_dom(&outcome.events);
            g.loop_active = outcome.keep_running;
            outcome.keep_running
        };

        if keep_running {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::Path;

    use lane_racer::Settings;
    use lane_racer::audio::{LogAudio, SoundEffect};
    use lane_racer::consts::FRAME_DT_MS;
    use lane_racer::persistence::FileStore;
    use lane_racer::platform::{FrameDriver, autopilot};
    use lane_racer::renderer::DrawList;
    use lane_racer::sim::Session;
    use lane_racer::ui;

    /// Five minutes of play at 60 Hz
    const MAX_FRAMES: u64 = 60 * 60 * 5;

    pub fn run() {
        let settings = match std::env::args().nth(1) {
            Some(path) => Settings::load(Path::new(&path)),
            None => Settings::default(),
        };

        let store = FileStore::new(FileStore::default_path());
        log::info!("Best score file: {}", store.path().display());

        let mut session = Session::new(&settings, Box::new(store));
        let mut audio = LogAudio::new(!settings.sound_enabled);
        let mut list = DrawList::new();
        let mut driver = FrameDriver::new();
        let mut rng = rand::rng();

        log::info!(
            "Headless run: seed {}, difficulty {}, best {}",
            session.seed,
            settings.difficulty,
            session.best_score
        );
        session.start(settings.difficulty);

        let mut time = 0.0;
        loop {
            let input = autopilot::steer(&session.snapshot());
            let outcome = driver.frame(&mut session, &input, time, &mut audio, &mut list);
            for event in &outcome.events {
                if let Some(message) = ui::game_over_message(event, &mut rng) {
                    log::info!("{}", message);
                }
            }
            if !outcome.keep_running {
                break;
            }
            if driver.frames >= MAX_FRAMES {
                log::info!("Frame limit reached, abandoning run");
                session.quit();
                break;
            }
            time += FRAME_DT_MS;
        }

        log::info!(
            "Finished after {} frames: score {}, best {}, speed {}, coins {}",
            driver.frames,
            session.score,
            session.best_score,
            ui::speed_readout(session.speed()),
            audio
                .played()
                .iter()
                .filter(|&&e| e == SoundEffect::Coin)
                .count()
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Lane Racer (native) starting...");
    headless::run();
}
