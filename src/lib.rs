// Re-export all public modules so they can be used from main.rs
pub mod app;
pub mod config;
pub mod logging;

// MVC Architecture
pub mod model;
pub mod view;
pub mod controller;

#[cfg(target_arch = "wasm32")]
pub use web::start;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{prelude::wasm_bindgen, JsCast, JsValue};
    use web_sys::{Document, Event, HtmlCanvasElement, KeyboardEvent, PointerEvent, Window};

    use crate::app::Game;
    use crate::config::GameConfig;
    use crate::controller::input::wasm::{keyboard_event_to_input, pointer_down_to_input};
    use crate::controller::{InputEvent, InputProcessor};
    use crate::logging;
    use crate::view::{CanvasRenderer, LocalHost};

    type SharedGame = Rc<RefCell<Game<LocalHost>>>;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        logging::init();

        let window = web_sys::window().ok_or(js_error("no global `window`"))?;
        let document = window.document().ok_or(js_error("no document on window"))?;
        let config = read_config(&document)?;
        let canvas = init_canvas(&document, config.viewport.width, config.viewport.height)?;

        let host = LocalHost::from_config(&config);
        let game = Game::new(config, host).map_err(|e| js_error(e.to_string()))?;
        let game: SharedGame = Rc::new(RefCell::new(game));
        let renderer = CanvasRenderer::new(canvas.clone())?;

        setup_input_listeners(&document, &window, &canvas, game.clone())?;

        let last_time = RefCell::new(now_ms(&window));
        let window_for_loop = window.clone();
        RcCellCallback::new(window, move || {
            let now = now_ms(&window_for_loop);
            let dt = ((now - last_time.replace(now)) / 1000.0) as f32;
            let mut game = game.borrow_mut();
            if let Err(e) = game.frame(dt) {
                tracing::error!(error = %e, "frame failed");
            }
            renderer.draw(game.host());
        })
        .start();

        Ok(())
    }

    /// Optional JSON override in `<script id="tron-config" type="application/json">`.
    fn read_config(document: &Document) -> Result<GameConfig, JsValue> {
        let Some(el) = document.get_element_by_id("tron-config") else {
            return Ok(GameConfig::default());
        };
        let json = el.text_content().unwrap_or_default();
        GameConfig::from_json(&json).map_err(|e| js_error(e.to_string()))
    }

    fn setup_input_listeners(
        document: &Document,
        window: &Window,
        canvas: &HtmlCanvasElement,
        game: SharedGame,
    ) -> Result<(), JsValue> {
        let input_processor = InputProcessor::default();

        // Keyboard down
        {
            let game = game.clone();
            let keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                if input_processor.is_steering_key(&e.key()) {
                    e.prevent_default();
                }
                game.borrow_mut().host_mut().handle_event(&keyboard_event_to_input(&e, true));
            }) as Box<dyn FnMut(KeyboardEvent)>);
            document.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
            keydown.forget();
        }

        // Keyboard up
        {
            let game = game.clone();
            let keyup = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                game.borrow_mut().host_mut().handle_event(&keyboard_event_to_input(&e, false));
            }) as Box<dyn FnMut(KeyboardEvent)>);
            document.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref())?;
            keyup.forget();
        }

        // Focus loss - clear all keys
        {
            let game = game.clone();
            let blur = Closure::wrap(Box::new(move |_e: Event| {
                game.borrow_mut().host_mut().handle_event(&InputEvent::FocusLost);
            }) as Box<dyn FnMut(Event)>);
            window.add_event_listener_with_callback("blur", blur.as_ref().unchecked_ref())?;
            blur.forget();
        }

        // Visibility change - clear all keys when hidden
        {
            let game = game.clone();
            let doc = document.clone();
            let visibility = Closure::wrap(Box::new(move |_e: Event| {
                let visible = !doc.hidden();
                game.borrow_mut()
                    .host_mut()
                    .handle_event(&InputEvent::VisibilityChanged { visible });
            }) as Box<dyn FnMut(Event)>);
            document.add_event_listener_with_callback("visibilitychange", visibility.as_ref().unchecked_ref())?;
            visibility.forget();
        }

        // Pointer down (mouse, pen or touch) on the canvas ends the round / restarts
        {
            let pointerdown = Closure::wrap(Box::new(move |e: PointerEvent| {
                let mut game = game.borrow_mut();
                if game.host_mut().handle_event(&pointer_down_to_input(&e)) {
                    if let Err(err) = game.pointer_down() {
                        tracing::error!(error = %err, "pointer handling failed");
                    }
                }
                e.prevent_default();
            }) as Box<dyn FnMut(PointerEvent)>);
            canvas.add_event_listener_with_callback("pointerdown", pointerdown.as_ref().unchecked_ref())?;
            pointerdown.forget();
        }

        Ok(())
    }

    fn init_canvas(document: &Document, width: u32, height: u32) -> Result<HtmlCanvasElement, JsValue> {
        let body = document.body().ok_or(js_error("no body on document"))?;
        let canvas_el = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_error("failed to create canvas"))?;
        canvas_el.set_width(width);
        canvas_el.set_height(height);
        body.append_child(&canvas_el)?;
        Ok(canvas_el)
    }

    fn now_ms(window: &Window) -> f64 {
        window.performance().map(|p| p.now()).unwrap_or(0.0)
    }

    fn js_error<E: Into<String>>(msg: E) -> JsValue {
        JsValue::from_str(&msg.into())
    }

    /// requestAnimationFrame loop that reschedules itself after every call.
    struct RcCellCallback {
        inner: Box<dyn FnMut()>,
        window: Window,
    }

    impl RcCellCallback {
        fn new(window: Window, f: impl FnMut() + 'static) -> Self {
            Self { inner: Box::new(f), window }
        }

        fn start(self) {
            let Self { mut inner, window } = self;
            let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
            let callback_clone = callback.clone();
            let window_clone = window.clone();

            *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                inner();

                if let Some(cb) = callback_clone.borrow().as_ref() {
                    if let Err(e) = window_clone.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        tracing::error!(?e, "requestAnimationFrame failed");
                    }
                }
            }) as Box<dyn FnMut()>));

            if let Some(cb) = callback.borrow().as_ref() {
                if let Err(e) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    tracing::error!(?e, "requestAnimationFrame failed to start");
                }
            }

            // The closure owns a handle to itself, so it lives for the page's lifetime
            std::mem::forget(callback);
        }
    }
}
