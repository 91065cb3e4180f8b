//! Volley entry point
//!
//! Browser builds wire the DOM, keyboard and WebGPU around a `Session`.
//! Native builds play a headless match and log it.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use volley::presentation;
    use volley::renderer::{RenderInitError, RenderState};
    use volley::sim::{Court, MatchEvent};
    use volley::{AssetError, AssetGate, GateStatus, Session, Settings};

    /// Resources that must resolve before the first frame
    const REQUIRED_RESOURCES: [&str; 3] = ["surface", "adapter", "device"];

    /// DOM elements the game writes to
    struct Ui {
        status: Option<Element>,
        scoreboard: Option<Element>,
        toggle: Option<Element>,
    }

    impl Ui {
        fn from_document(document: &Document) -> Self {
            Self {
                status: document.get_element_by_id("status"),
                scoreboard: document.get_element_by_id("scoreboard"),
                toggle: document.get_element_by_id("toggle"),
            }
        }

        fn set_status(&self, message: &str) {
            if let Some(el) = &self.status {
                el.set_text_content(Some(message));
            }
        }

        /// Refresh scoreboard and button label from the session
        fn sync(&self, session: &Session) {
            if let Some(el) = &self.scoreboard {
                el.set_text_content(Some(&presentation::scoreboard(&session.state.score)));
            }
            if let Some(el) = &self.toggle {
                el.set_text_content(Some(presentation::toggle_label(session.state.phase)));
            }
        }
    }

    /// Game instance holding all state
    struct Game {
        session: Session,
        renderer: RenderState,
        ui: Ui,
    }

    impl Game {
        fn apply(&self, events: &[MatchEvent]) {
            if let Some(line) = presentation::status_line(events) {
                self.ui.set_status(&line);
            }
            self.ui.sync(&self.session);
        }

        fn frame(&mut self, time: f64) {
            let events = self.session.advance(time);
            if !events.is_empty() {
                self.apply(&events);
            }

            match self.session.draw(&mut self.renderer) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let (w, h) = self.renderer.size;
                    self.renderer.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Volley starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            web_sys::console::error_1(&"Volley needs a browser document".into());
            return;
        };
        let ui = Ui::from_document(&document);
        ui.set_status("Loading...");

        let settings = Settings::load();
        // Store back so fields missing from an older save get their defaults
        settings.save();
        let mut gate = AssetGate::new(REQUIRED_RESOURCES);

        let renderer = match acquire_renderer(&document, &mut gate, settings.clone()).await {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("Startup aborted: {}", e);
                ui.set_status(presentation::load_failure_line());
                return;
            }
        };

        match gate.status() {
            GateStatus::Ready => {}
            GateStatus::Pending => {
                let missing: Vec<&str> = gate.pending().collect();
                log::error!("Startup incomplete, still waiting on {:?}", missing);
                ui.set_status(presentation::load_failure_line());
                return;
            }
            GateStatus::Failed(e) => {
                log::error!("Startup aborted: {}", e);
                ui.set_status(presentation::load_failure_line());
                return;
            }
        }

        let seed = js_sys::Date::now() as u64;
        let mut session = Session::new(seed, settings.bindings.clone());
        let reset = session.full_reset();

        let game = Rc::new(RefCell::new(Game {
            session,
            renderer,
            ui,
        }));
        game.borrow().apply(&reset.events);

        setup_keyboard(game.clone());
        setup_buttons(&document, game.clone());

        request_animation_frame(game);

        log::info!("Volley running!");
    }

    /// Acquire every GPU resource, reporting each to the gate
    async fn acquire_renderer(
        document: &Document,
        gate: &mut AssetGate,
        settings: Settings,
    ) -> Result<RenderState, AssetError> {
        let canvas: HtmlCanvasElement = match document
            .get_element_by_id("game")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        {
            Some(canvas) => canvas,
            None => return Err(fail(gate, RenderInitError::Surface("no #game canvas".into()))),
        };

        // Size the backing store to the displayed size
        let dpr = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        let width = ((canvas.client_width() as f64 * dpr) as u32).max(1);
        let height = ((canvas.client_height() as f64 * dpr) as u32).max(1);
        canvas.set_width(width);
        canvas.set_height(height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas)) {
            Ok(surface) => surface,
            Err(e) => return Err(fail(gate, RenderInitError::Surface(e.to_string()))),
        };
        gate.resolve("surface");

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => return Err(fail(gate, RenderInitError::Adapter(e.to_string()))),
        };
        log::info!("Using adapter: {:?}", adapter.get_info().name);
        gate.resolve("adapter");

        let renderer =
            match RenderState::new(surface, &adapter, width, height, Court::default(), settings)
                .await
            {
                Ok(renderer) => renderer,
                Err(e) => return Err(fail(gate, e)),
            };
        gate.resolve("device");

        Ok(renderer)
    }

    fn fail(gate: &mut AssetGate, error: RenderInitError) -> AssetError {
        let error = AssetError::from(error);
        gate.fail(&error.resource, error.reason.clone());
        error
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().session.key_down(&event.key()) {
                    // Arrow keys would otherwise scroll the page
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().session.key_up(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keys released while unfocused never send keyup
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().session.release_all();
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id("toggle") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                let transition = g.session.toggle_play();
                g.apply(&transition.events);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("reset") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                let transition = g.session.full_reset();
                g.apply(&transition.events);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
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
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Simulated time the headless match may run before giving up
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_SECONDS: f64 = 600.0;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Volley (native) starting...");
    log::info!("Rendering needs the web build (`trunk serve`); playing a headless match");

    run_headless();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play one match at a fixed 60 Hz with nobody touching the keys
#[cfg(not(target_arch = "wasm32"))]
fn run_headless() {
    use std::time::{SystemTime, UNIX_EPOCH};
    use volley::renderer::HeadlessRenderer;
    use volley::sim::{MatchEvent, MatchPhase};
    use volley::{Session, Settings, presentation};

    const FRAME_MS: f64 = 1000.0 / 60.0;

    fn report(events: &[MatchEvent]) {
        if let Some(line) = presentation::status_line(events) {
            log::info!("{}", line);
        }
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let settings = Settings::load();
    let mut session = Session::new(seed, settings.bindings.clone());
    let mut renderer = HeadlessRenderer::new(settings);

    report(&session.full_reset().events);
    report(&session.toggle_play().events);

    let total_frames = (HEADLESS_SECONDS * 1000.0 / FRAME_MS) as u64;
    for frame in 0..=total_frames {
        let events = session.advance(frame as f64 * FRAME_MS);
        report(&events);
        if let Err(never) = session.draw(&mut renderer) {
            match never {}
        }
        if session.state.phase == MatchPhase::MatchOver {
            break;
        }
    }

    log::info!(
        "Drew {} frames ({} vertices in the last one)",
        renderer.frames(),
        renderer.last_vertex_count()
    );
    println!(
        "Final score: {}",
        presentation::scoreboard(&session.state.score)
    );
}
