pub mod app;
pub mod canvas;
pub mod dom;
pub mod fetch;
pub mod runner;

pub use runner::GameRunner;

use std::cell::RefCell;
use std::rc::Rc;

use face_quiz::QuizConfig;
use wasm_bindgen::prelude::*;

use app::App;

thread_local! {
    static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
}

fn with_app<R>(f: impl FnOnce(&Rc<App>) -> R) -> Result<R, JsValue> {
    APP.with(|cell| {
        let borrow = cell.borrow();
        let app = borrow
            .as_ref()
            .ok_or_else(|| JsValue::from_str("Game not initialized. Call game_init() first."))?;
        Ok(f(app))
    })
}

/// Parse the page-supplied config, falling back to defaults when it is absent or invalid.
fn load_config(config_json: Option<String>) -> QuizConfig {
    let Some(json) = config_json else {
        return QuizConfig::default();
    };
    match QuizConfig::from_json(&json) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring config: {}", err);
            QuizConfig::default()
        }
    }
}

#[wasm_bindgen]
pub fn game_init(config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    let config = load_config(config_json);
    log::set_max_level(config.log_level().to_level_filter());

    let app = App::new(config)?;
    app.mount()?;
    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });
    log::info!("face-quiz: initialized");
    Ok(())
}

#[wasm_bindgen]
pub fn game_start() -> Result<(), JsValue> {
    with_app(|app| app.start())
}
