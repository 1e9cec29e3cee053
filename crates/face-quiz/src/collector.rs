use crate::api::types::{Control, GameEvent};
use crate::config::InputMode;
use crate::input::queue::InputEvent;
use crate::round::RoundState;

/// Result of feeding one event to the collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collected {
    /// The event does not carry an answer for this mode.
    Ignored,
    /// An answer was stored; more faces are waiting.
    Advanced,
    /// Every face now has an answer.
    Complete,
}

/// Gathers recall answers, either one face at a time or all at once.
#[derive(Debug, Clone, Copy)]
pub struct AnswerCollector {
    mode: InputMode,
}

impl AnswerCollector {
    pub fn new(mode: InputMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Page events that present the answer fields for `count` faces.
    pub fn open(&self, count: usize) -> Vec<GameEvent> {
        match self.mode {
            InputMode::Sequential => vec![
                GameEvent::ClearAnswerFields,
                GameEvent::show(Control::InputContainer),
                GameEvent::hide(Control::SubmitButton),
                GameEvent::FocusInput,
            ],
            InputMode::Parallel => vec![
                GameEvent::ClearAnswerFields,
                GameEvent::MountAnswerFields { count },
                GameEvent::show(Control::InputContainer),
                GameEvent::show(Control::SubmitButton),
            ],
        }
    }

    /// Page events that take every answer field away again.
    pub fn close(&self) -> Vec<GameEvent> {
        vec![
            GameEvent::hide(Control::InputContainer),
            GameEvent::hide(Control::SubmitButton),
            GameEvent::ClearAnswerFields,
        ]
    }

    /// Store the answer carried by `event`, if it fits this mode.
    pub fn collect(&self, round: &mut RoundState, event: &InputEvent) -> Collected {
        match (self.mode, event) {
            (InputMode::Sequential, InputEvent::Accept { value }) => {
                if !round.answer_current(value) {
                    return Collected::Ignored;
                }
            }
            (InputMode::Parallel, InputEvent::Submit { values }) => {
                round.answer_all(values);
            }
            _ => return Collected::Ignored,
        }
        if round.all_answered() {
            Collected::Complete
        } else {
            Collected::Advanced
        }
    }
}
