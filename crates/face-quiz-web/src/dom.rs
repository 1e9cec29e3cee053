//! The page around the canvas: buttons, answer fields and the message area.

use std::cell::RefCell;

use face_quiz::{Control, GameEvent};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, HtmlInputElement};

/// Element ids the host page must provide.
pub const CANVAS_ID: &str = "gameCanvas";
pub const START_BUTTON_ID: &str = "start-button";
pub const INPUT_CONTAINER_ID: &str = "input-container";
pub const USER_INPUT_ID: &str = "user-input";
pub const ANSWERS_ID: &str = "answers";
pub const SUBMIT_BUTTON_ID: &str = "submit-button";
pub const MESSAGE_ID: &str = "message";

fn element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element #{} has the wrong type", id)))
}

fn set_shown(element: &HtmlElement, shown: bool) -> Result<(), JsValue> {
    element
        .style()
        .set_property("display", if shown { "" } else { "none" })
}

pub struct PageControls {
    document: Document,
    pub canvas: HtmlCanvasElement,
    pub start_button: HtmlElement,
    pub input_container: HtmlElement,
    pub user_input: HtmlInputElement,
    pub answers: HtmlElement,
    pub submit_button: HtmlElement,
    pub message: HtmlElement,
    /// Per-face fields mounted for parallel answers, in display order.
    answer_fields: RefCell<Vec<HtmlInputElement>>,
}

impl PageControls {
    pub fn from_document(document: Document) -> Result<Self, JsValue> {
        Ok(Self {
            canvas: element(&document, CANVAS_ID)?,
            start_button: element(&document, START_BUTTON_ID)?,
            input_container: element(&document, INPUT_CONTAINER_ID)?,
            user_input: element(&document, USER_INPUT_ID)?,
            answers: element(&document, ANSWERS_ID)?,
            submit_button: element(&document, SUBMIT_BUTTON_ID)?,
            message: element(&document, MESSAGE_ID)?,
            answer_fields: RefCell::new(Vec::new()),
            document,
        })
    }

    /// Apply one game event to the page.
    pub fn apply(&self, event: &GameEvent) -> Result<(), JsValue> {
        match event {
            GameEvent::SetVisible { control, visible } => set_shown(self.control(*control), *visible),
            GameEvent::Message(text) => {
                self.message.set_text_content(Some(text));
                Ok(())
            }
            GameEvent::MountAnswerFields { count } => self.mount_answer_fields(*count),
            GameEvent::ClearAnswerFields => {
                self.clear_answer_fields();
                Ok(())
            }
            GameEvent::FocusInput => self.user_input.focus(),
            // Loads are started by the app, not the page.
            GameEvent::RequestFaces { .. } => Ok(()),
        }
    }

    /// Read and clear the shared answer field.
    pub fn take_shared_answer(&self) -> String {
        let value = self.user_input.value();
        self.user_input.set_value("");
        value
    }

    /// Current value of every per-face field, in display order.
    pub fn answers(&self) -> Vec<String> {
        self.answer_fields.borrow().iter().map(|f| f.value()).collect()
    }

    fn control(&self, control: Control) -> &HtmlElement {
        match control {
            Control::StartButton => &self.start_button,
            Control::InputContainer => &self.input_container,
            Control::SubmitButton => &self.submit_button,
        }
    }

    fn mount_answer_fields(&self, count: usize) -> Result<(), JsValue> {
        self.clear_answer_fields();
        set_shown(&self.user_input, false)?;
        let mut fields = self.answer_fields.borrow_mut();
        for i in 0..count {
            let field = self
                .document
                .create_element("input")?
                .dyn_into::<HtmlInputElement>()?;
            field.set_type("text");
            field.set_placeholder(&format!("#{}", i + 1));
            self.answers.append_child(&field)?;
            fields.push(field);
        }
        if let Some(first) = fields.first() {
            first.focus()?;
        }
        Ok(())
    }

    fn clear_answer_fields(&self) {
        for field in self.answer_fields.borrow_mut().drain(..) {
            field.remove();
        }
        self.user_input.set_value("");
        if let Err(err) = set_shown(&self.user_input, true) {
            log::warn!("could not restore the shared answer field: {:?}", err);
        }
    }
}
