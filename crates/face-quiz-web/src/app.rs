//! Browser host: owns the runner, wires page events into it and drives the
//! animation-frame loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use face_quiz::{FaceProvider, FaceQuiz, GameEvent, InputEvent, QuizConfig};
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, KeyboardEvent};

use crate::canvas::CanvasPainter;
use crate::dom::PageControls;
use crate::fetch::HttpFetcher;
use crate::runner::GameRunner;

/// Longest frame fed to the runner, in seconds. Background tabs can stall for minutes.
const MAX_FRAME_SECONDS: f64 = 0.25;

pub struct App {
    config: QuizConfig,
    runner: RefCell<GameRunner<FaceQuiz>>,
    painter: RefCell<CanvasPainter>,
    page: PageControls,
    frame: RefCell<Option<AnimationFrame>>,
    last_ts: Cell<Option<f64>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl App {
    pub fn new(config: QuizConfig) -> Result<Rc<Self>, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let page = PageControls::from_document(document)?;
        page.canvas.set_width(config.world_width as u32);
        page.canvas.set_height(config.world_height as u32);
        let painter = CanvasPainter::new(&page.canvas)?;
        let runner = GameRunner::new(FaceQuiz::new(config.clone()));

        Ok(Rc::new(Self {
            config,
            runner: RefCell::new(runner),
            painter: RefCell::new(painter),
            page,
            frame: RefCell::new(None),
            last_ts: Cell::new(None),
            listeners: RefCell::new(Vec::new()),
        }))
    }

    /// Draw the first frame, hook up the page controls and start the frame loop.
    pub fn mount(self: &Rc<Self>) -> Result<(), JsValue> {
        let events = self.runner.borrow_mut().init();
        self.painter.borrow_mut().paint(self.runner.borrow().draw_list())?;
        self.dispatch(events);
        self.wire_listeners();
        self.schedule_frame();
        Ok(())
    }

    /// Same as pressing the start button.
    pub fn start(&self) {
        self.push(InputEvent::Start);
    }

    fn push(&self, event: InputEvent) {
        self.runner.borrow_mut().push_input(event);
    }

    fn wire_listeners(self: &Rc<Self>) {
        let mut listeners = self.listeners.borrow_mut();

        let app = Rc::clone(self);
        listeners.push(EventListener::new(&self.page.start_button, "click", move |_event: &Event| {
            app.start();
        }));

        let app = Rc::clone(self);
        listeners.push(EventListener::new(&self.page.user_input, "keydown", move |event: &Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if event.key() != "Enter" {
                return;
            }
            event.prevent_default();
            let value = app.page.take_shared_answer();
            app.push(InputEvent::Accept { value });
        }));

        let app = Rc::clone(self);
        listeners.push(EventListener::new(&self.page.submit_button, "click", move |_event: &Event| {
            let values = app.page.answers();
            app.push(InputEvent::Submit { values });
        }));
    }

    fn schedule_frame(self: &Rc<Self>) {
        let app = Rc::clone(self);
        let handle = request_animation_frame(move |timestamp| {
            app.on_frame(timestamp);
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn on_frame(self: &Rc<Self>, timestamp: f64) {
        self.frame.borrow_mut().take();
        let dt = match self.last_ts.get() {
            Some(prev) => ((timestamp - prev) / 1000.0).clamp(0.0, MAX_FRAME_SECONDS),
            None => 0.0,
        };
        self.last_ts.set(Some(timestamp));

        let events = self.runner.borrow_mut().tick(dt as f32);
        if let Err(err) = self.painter.borrow_mut().paint(self.runner.borrow().draw_list()) {
            log::error!("paint failed: {:?}", err);
        }
        self.dispatch(events);
        self.schedule_frame();
    }

    fn dispatch(self: &Rc<Self>, events: Vec<GameEvent>) {
        for event in events {
            if let GameEvent::RequestFaces { count } = event {
                self.load_faces(count);
                continue;
            }
            if let Err(err) = self.page.apply(&event) {
                log::error!("could not apply {:?}: {:?}", event, err);
            }
        }
    }

    /// Load a round in the background and feed the outcome back as input.
    fn load_faces(self: &Rc<Self>, count: usize) {
        let app = Rc::clone(self);
        let seed = load_seed();
        spawn_local(async move {
            let mut provider = FaceProvider::new(HttpFetcher, &app.config, seed);
            let event = match provider.load_round(count).await {
                Ok(faces) => InputEvent::FacesLoaded(faces),
                Err(err) => InputEvent::LoadFailed(err.to_string()),
            };
            app.push(event);
        });
    }
}

fn load_seed() -> u64 {
    let time = js_sys::Date::now() as u64;
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (time ^ (noise << 32)) | 1
}
