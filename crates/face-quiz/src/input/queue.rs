use crate::face::Face;

/// Input events the game understands.
/// The host page and the async loader both feed the queue.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The start control was pressed.
    Start,
    /// The accept key was pressed in the shared answer field.
    Accept { value: String },
    /// The submit control was pressed; one value per answer field, in display order.
    Submit { values: Vec<String> },
    /// A requested load finished with these faces.
    FacesLoaded(Vec<Face>),
    /// A requested load gave up.
    LoadFailed(String),
}

/// A queue of input events.
/// The host writes events; the runner drains them once per frame.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(8),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events in arrival order.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
