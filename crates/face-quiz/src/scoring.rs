//! Answer checking and round scores.

use std::fmt;

use crate::face::Face;

/// Whether `answer` names `name`: trimmed, case-insensitive, exact.
/// An empty or whitespace-only answer never matches.
pub fn is_match(answer: &str, name: &str) -> bool {
    let answer = answer.trim();
    if answer.is_empty() {
        return false;
    }
    answer.to_lowercase() == name.trim().to_lowercase()
}

/// Correct answers out of the faces in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    pub fn of(faces: &[Face]) -> Self {
        Self {
            correct: faces.iter().filter(|f| f.is_correct()).count(),
            total: faces.len(),
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You got {} out of {} correct!", self.correct, self.total)
    }
}
