use crate::face::Face;
use crate::scoring::Score;

/// Game state machine phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Instructions on screen, waiting for the start control.
    #[default]
    Instructions,
    /// Faces are being fetched.
    Loading,
    /// Faces shown with names while the countdown runs.
    Memorizing,
    /// Names hidden, answers being collected.
    Recalling,
    /// Result on screen until the reset delay elapses.
    Scored,
}

/// Everything that belongs to the round in play.
/// Replaced wholesale on reset, so nothing carries over between rounds.
#[derive(Debug, Clone, Default)]
pub struct RoundState {
    pub phase: Phase,
    faces: Vec<Face>,
    /// Seconds left in the memorize phase.
    pub time_remaining: u32,
    /// Face awaiting the next sequential answer.
    pub current_index: usize,
    pub score: Option<Score>,
}

impl RoundState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the faces of a freshly loaded round. The count is fixed from here on.
    pub fn populate(&mut self, faces: Vec<Face>) {
        self.faces = faces;
        self.current_index = 0;
        self.score = None;
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// The face awaiting a sequential answer, if any remain.
    pub fn current_face(&self) -> Option<&Face> {
        self.faces.get(self.current_index)
    }

    /// Record `raw` on the current face and move to the next one.
    /// Returns false when every face already has its answer.
    pub fn answer_current(&mut self, raw: &str) -> bool {
        match self.faces.get_mut(self.current_index) {
            Some(face) => {
                face.record_answer(raw);
                self.current_index += 1;
                true
            }
            None => false,
        }
    }

    /// Record one answer per face in display order. Missing values count as empty.
    pub fn answer_all<S: AsRef<str>>(&mut self, values: &[S]) {
        for (i, face) in self.faces.iter_mut().enumerate() {
            face.record_answer(values.get(i).map_or("", |v| v.as_ref()));
        }
        self.current_index = self.faces.len();
    }

    /// True once every face has been answered.
    pub fn all_answered(&self) -> bool {
        self.current_index >= self.faces.len()
    }

    /// Score the recorded answers and keep the result.
    pub fn finish(&mut self) -> Score {
        let score = Score::of(&self.faces);
        self.score = Some(score);
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(names: &[&str]) -> RoundState {
        let mut round = RoundState::new();
        round.populate(names.iter().map(|n| Face::new("u", *n)).collect());
        round
    }

    #[test]
    fn fresh_round_is_empty_instructions() {
        let round = RoundState::new();
        assert_eq!(round.phase, Phase::Instructions);
        assert_eq!(round.face_count(), 0);
        assert!(round.score.is_none());
    }

    #[test]
    fn sequential_answers_advance_and_stop() {
        let mut round = round(&["Kla", "Mno"]);
        assert_eq!(round.current_face().unwrap().name(), "Kla");
        assert!(round.answer_current(" kla "));
        assert_eq!(round.current_face().unwrap().name(), "Mno");
        assert!(!round.all_answered());
        assert!(round.answer_current(""));
        assert!(round.all_answered());
        assert!(!round.answer_current("extra"));
        assert_eq!(round.faces()[0].answer, "kla");
        assert_eq!(round.faces()[1].answer, "");
    }

    #[test]
    fn duplicate_names_keep_separate_answers() {
        let mut round = round(&["Kla", "Kla"]);
        round.answer_current("kla");
        round.answer_current("nope");
        assert_eq!(round.finish(), Score { correct: 1, total: 2 });
    }

    #[test]
    fn answer_all_pads_missing_values() {
        let mut round = round(&["Kla", "Mno", "Sri"]);
        round.answer_all(&["kla", "mno"]);
        assert!(round.all_answered());
        assert_eq!(round.faces()[2].answer, "");
        assert_eq!(round.finish(), Score { correct: 2, total: 3 });
    }
}
