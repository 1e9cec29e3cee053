/// A page control owned by the host that the game can show or hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// The "Start Game" button.
    StartButton,
    /// Wrapper around every answer field (shared or per-face).
    InputContainer,
    /// The button that submits all per-face answers at once.
    SubmitButton,
}

/// A game event communicated from Rust to the host page.
/// Collected during a tick and drained by the runner afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Show or hide a page control.
    SetVisible { control: Control, visible: bool },
    /// Replace the text of the message area (empty string clears it).
    Message(String),
    /// Mount one answer field per face.
    MountAnswerFields { count: usize },
    /// Remove per-face answer fields and clear the shared field.
    ClearAnswerFields,
    /// Move keyboard focus to the shared answer field.
    FocusInput,
    /// Ask the host to load `count` faces and report back through the input queue.
    RequestFaces { count: usize },
}

impl GameEvent {
    pub fn show(control: Control) -> Self {
        GameEvent::SetVisible { control, visible: true }
    }

    pub fn hide(control: Control) -> Self {
        GameEvent::SetVisible { control, visible: false }
    }
}
