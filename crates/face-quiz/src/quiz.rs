use crate::api::game::{EngineContext, Game, GameConfig, RenderContext};
use crate::api::types::{Control, GameEvent};
use crate::collector::{AnswerCollector, Collected};
use crate::config::QuizConfig;
use crate::core::time::{Countdown, CountdownTick};
use crate::face::Face;
use crate::input::queue::InputEvent;
use crate::round::{Phase, RoundState};
use crate::view::QuizView;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load faces. Please try again.";

/// The Face Quiz controller.
///
/// Owns the round in play and the one countdown used by the timed phases
/// (memorizing, then the result delay). All transitions happen here.
pub struct FaceQuiz {
    config: QuizConfig,
    view: QuizView,
    collector: AnswerCollector,
    round: RoundState,
    timer: Countdown,
}

impl FaceQuiz {
    pub fn new(config: QuizConfig) -> Self {
        Self {
            view: QuizView::new(&config),
            collector: AnswerCollector::new(config.input_mode),
            round: RoundState::new(),
            timer: Countdown::new(),
            config,
        }
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn phase(&self) -> Phase {
        self.round.phase
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    fn start_loading(&mut self, ctx: &mut EngineContext) {
        self.round = RoundState::new();
        self.round.phase = Phase::Loading;
        ctx.emit(GameEvent::hide(Control::StartButton));
        ctx.emit(GameEvent::Message(String::new()));
        ctx.emit(GameEvent::RequestFaces {
            count: self.config.face_count,
        });
        log::info!("loading {} faces", self.config.face_count);
    }

    fn faces_loaded(&mut self, ctx: &mut EngineContext, faces: Vec<Face>) {
        if faces.len() != self.config.face_count {
            let reason = format!("expected {} faces, got {}", self.config.face_count, faces.len());
            self.load_failed(ctx, &reason);
            return;
        }
        self.round.populate(faces);
        self.round.phase = Phase::Memorizing;
        self.round.time_remaining = self.config.show_seconds;
        self.timer.start(self.config.show_seconds);
        log::info!("memorize phase: {} seconds", self.config.show_seconds);
    }

    fn load_failed(&mut self, ctx: &mut EngineContext, reason: &str) {
        log::error!("face load failed: {}", reason);
        self.timer.cancel();
        self.round = RoundState::new();
        ctx.emit(GameEvent::Message(LOAD_FAILED_MESSAGE.to_string()));
        ctx.emit(GameEvent::show(Control::StartButton));
    }

    fn start_recall(&mut self, ctx: &mut EngineContext) {
        self.round.time_remaining = 0;
        self.round.current_index = 0;
        self.round.phase = Phase::Recalling;
        for event in self.collector.open(self.round.face_count()) {
            ctx.emit(event);
        }
        log::info!("recall phase");
    }

    fn finish_round(&mut self, ctx: &mut EngineContext) {
        let score = self.round.finish();
        self.round.phase = Phase::Scored;
        for event in self.collector.close() {
            ctx.emit(event);
        }
        self.timer.start(self.config.result_delay_seconds);
        log::info!("round scored: {}/{}", score.correct, score.total);
    }

    fn reset(&mut self, ctx: &mut EngineContext) {
        self.timer.cancel();
        self.round = RoundState::new();
        ctx.emit(GameEvent::ClearAnswerFields);
        ctx.emit(GameEvent::Message(String::new()));
        ctx.emit(GameEvent::show(Control::StartButton));
        log::info!("round reset");
    }
}

impl Game for FaceQuiz {
    fn config(&self) -> GameConfig {
        self.config.game_config()
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.reset(ctx);
        for event in self.collector.close() {
            ctx.emit(event);
        }
        log::info!(
            "face quiz ready: {} faces, {} seconds, {:?} input",
            self.config.face_count,
            self.config.show_seconds,
            self.config.input_mode
        );
    }

    fn handle_input(&mut self, ctx: &mut EngineContext, event: InputEvent) {
        match (self.round.phase, event) {
            (Phase::Instructions, InputEvent::Start) => self.start_loading(ctx),
            (Phase::Loading, InputEvent::FacesLoaded(faces)) => self.faces_loaded(ctx, faces),
            (Phase::Loading, InputEvent::LoadFailed(reason)) => self.load_failed(ctx, &reason),
            (Phase::Recalling, event) => {
                if self.collector.collect(&mut self.round, &event) == Collected::Complete {
                    self.finish_round(ctx);
                }
            }
            (phase, event) => log::debug!("ignoring {:?} during {:?}", event, phase),
        }
    }

    fn update(&mut self, ctx: &mut EngineContext, dt: f32) {
        match self.round.phase {
            Phase::Memorizing => match self.timer.tick(dt) {
                CountdownTick::Second(left) => self.round.time_remaining = left,
                CountdownTick::Finished => self.start_recall(ctx),
                CountdownTick::Idle | CountdownTick::Stopped => {}
            },
            Phase::Scored => {
                if self.timer.tick(dt) == CountdownTick::Finished {
                    self.reset(ctx);
                }
            }
            Phase::Instructions | Phase::Loading | Phase::Recalling => {}
        }
    }

    fn render(&self, ctx: &mut RenderContext) {
        self.view.render(&self.round, ctx.draw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InputMode;
    use crate::render::draw::DrawList;

    const NAMES: [&str; 5] = ["Kla", "Mno", "Sri", "Tzu", "Xvo"];

    fn faces(n: usize) -> Vec<Face> {
        (0..n)
            .map(|i| Face::new(format!("https://img/{}.jpg", i), NAMES[i % NAMES.len()]))
            .collect()
    }

    fn quiz(config: QuizConfig) -> (FaceQuiz, EngineContext) {
        let mut quiz = FaceQuiz::new(config);
        let mut ctx = EngineContext::new();
        quiz.init(&mut ctx);
        ctx.take_events();
        (quiz, ctx)
    }

    /// Step in exact quarter seconds so timing assertions are not at the mercy of float error.
    fn advance(quiz: &mut FaceQuiz, ctx: &mut EngineContext, seconds: u32) {
        for _ in 0..seconds * 4 {
            quiz.update(ctx, 0.25);
        }
    }

    fn started(config: QuizConfig) -> (FaceQuiz, EngineContext) {
        let count = config.face_count;
        let (mut quiz, mut ctx) = quiz(config);
        quiz.handle_input(&mut ctx, InputEvent::Start);
        quiz.handle_input(&mut ctx, InputEvent::FacesLoaded(faces(count)));
        ctx.take_events();
        (quiz, ctx)
    }

    fn accept(quiz: &mut FaceQuiz, ctx: &mut EngineContext, value: &str) {
        quiz.handle_input(ctx, InputEvent::Accept { value: value.into() });
    }

    #[test]
    fn init_shows_start_and_hides_inputs() {
        let mut quiz = FaceQuiz::new(QuizConfig::default());
        let mut ctx = EngineContext::new();
        quiz.init(&mut ctx);
        assert!(ctx.events.contains(&GameEvent::show(Control::StartButton)));
        assert!(ctx.events.contains(&GameEvent::hide(Control::InputContainer)));
        assert_eq!(quiz.phase(), Phase::Instructions);
    }

    #[test]
    fn start_requests_configured_face_count() {
        let (mut quiz, mut ctx) = quiz(QuizConfig { face_count: 4, ..QuizConfig::default() });
        quiz.handle_input(&mut ctx, InputEvent::Start);
        assert_eq!(quiz.phase(), Phase::Loading);
        let events = ctx.take_events();
        assert!(events.contains(&GameEvent::RequestFaces { count: 4 }));
        assert!(events.contains(&GameEvent::hide(Control::StartButton)));

        // A second press while loading changes nothing.
        quiz.handle_input(&mut ctx, InputEvent::Start);
        assert!(ctx.take_events().is_empty());
    }

    #[test]
    fn loaded_round_has_exactly_configured_faces() {
        let (quiz, _ctx) = started(QuizConfig::default());
        assert_eq!(quiz.phase(), Phase::Memorizing);
        assert_eq!(quiz.round().face_count(), 5);
        assert_eq!(quiz.round().time_remaining, 30);
        assert!(quiz.timer_running());
    }

    #[test]
    fn failed_load_returns_to_instructions() {
        let (mut quiz, mut ctx) = quiz(QuizConfig::default());
        quiz.handle_input(&mut ctx, InputEvent::Start);
        ctx.take_events();
        quiz.handle_input(&mut ctx, InputEvent::LoadFailed("gave up after 10 attempts".into()));
        assert_eq!(quiz.phase(), Phase::Instructions);
        assert_eq!(quiz.round().face_count(), 0);
        let events = ctx.take_events();
        assert!(events.contains(&GameEvent::Message(LOAD_FAILED_MESSAGE.into())));
        assert!(events.contains(&GameEvent::show(Control::StartButton)));
    }

    #[test]
    fn short_load_is_rejected() {
        let (mut quiz, mut ctx) = quiz(QuizConfig::default());
        quiz.handle_input(&mut ctx, InputEvent::Start);
        quiz.handle_input(&mut ctx, InputEvent::FacesLoaded(faces(3)));
        assert_eq!(quiz.phase(), Phase::Instructions);
        assert_eq!(quiz.round().face_count(), 0);
    }

    #[test]
    fn countdown_decreases_to_zero_and_transitions_once() {
        let (mut quiz, mut ctx) = started(QuizConfig { show_seconds: 3, ..QuizConfig::default() });
        let mut seen = vec![quiz.round().time_remaining];
        let mut transitions = 0;
        for _ in 0..(3 * 60 + 120) {
            let before = quiz.phase();
            quiz.update(&mut ctx, 1.0 / 60.0);
            if before == Phase::Memorizing && quiz.phase() == Phase::Recalling {
                transitions += 1;
            }
            if quiz.phase() == Phase::Memorizing && seen.last() != Some(&quiz.round().time_remaining) {
                seen.push(quiz.round().time_remaining);
            }
        }
        assert_eq!(seen, [3, 2, 1]);
        assert_eq!(transitions, 1);
        assert_eq!(quiz.phase(), Phase::Recalling);
        assert_eq!(quiz.round().time_remaining, 0);
        assert!(!quiz.timer_running());
    }

    #[test]
    fn recall_opens_sequential_input() {
        let (mut quiz, mut ctx) = started(QuizConfig { show_seconds: 1, ..QuizConfig::default() });
        advance(&mut quiz, &mut ctx, 1);
        assert_eq!(quiz.phase(), Phase::Recalling);
        let events = ctx.take_events();
        assert!(events.contains(&GameEvent::show(Control::InputContainer)));
        assert!(events.contains(&GameEvent::FocusInput));
    }

    #[test]
    fn answers_before_recall_are_ignored() {
        let (mut quiz, mut ctx) = started(QuizConfig::default());
        accept(&mut quiz, &mut ctx, "Kla");
        assert_eq!(quiz.round().current_index, 0);
        assert!(quiz.round().faces()[0].answer.is_empty());
    }

    #[test]
    fn three_of_five_sequential() {
        let (mut quiz, mut ctx) = started(QuizConfig { show_seconds: 2, ..QuizConfig::default() });
        advance(&mut quiz, &mut ctx, 2);
        for answer in ["kla", "MNO ", "wrong", "", " xvo"] {
            accept(&mut quiz, &mut ctx, answer);
        }
        assert_eq!(quiz.phase(), Phase::Scored);
        let score = quiz.round().score.unwrap();
        assert_eq!(score.to_string(), "You got 3 out of 5 correct!");
        assert!(ctx.take_events().contains(&GameEvent::hide(Control::InputContainer)));

        let mut draw = DrawList::new();
        quiz.render(&mut RenderContext { draw: &mut draw, width: 800.0, height: 600.0 });
        assert!(draw.texts().any(|t| t == "You got 3 out of 5 correct!"));
    }

    #[test]
    fn parallel_submit_scores_round() {
        let config = QuizConfig {
            show_seconds: 1,
            input_mode: InputMode::Parallel,
            ..QuizConfig::default()
        };
        let (mut quiz, mut ctx) = started(config);
        advance(&mut quiz, &mut ctx, 1);
        assert!(ctx.take_events().contains(&GameEvent::MountAnswerFields { count: 5 }));
        accept(&mut quiz, &mut ctx, "Kla");
        assert_eq!(quiz.phase(), Phase::Recalling);
        let values = vec!["kla".into(), "mno".into(), "".into(), "".into(), "".into()];
        quiz.handle_input(&mut ctx, InputEvent::Submit { values });
        assert_eq!(quiz.phase(), Phase::Scored);
        assert_eq!(quiz.round().score.unwrap().correct, 2);
    }

    #[test]
    fn result_delay_resets_everything() {
        let (mut quiz, mut ctx) = started(QuizConfig { show_seconds: 1, ..QuizConfig::default() });
        advance(&mut quiz, &mut ctx, 1);
        for name in NAMES {
            accept(&mut quiz, &mut ctx, name);
        }
        assert_eq!(quiz.phase(), Phase::Scored);
        ctx.take_events();

        // Input during the result screen is ignored.
        quiz.handle_input(&mut ctx, InputEvent::Start);
        assert_eq!(quiz.phase(), Phase::Scored);

        advance(&mut quiz, &mut ctx, 4);
        assert_eq!(quiz.phase(), Phase::Scored);
        advance(&mut quiz, &mut ctx, 1);
        assert_eq!(quiz.phase(), Phase::Instructions);
        assert_eq!(quiz.round().face_count(), 0);
        assert!(quiz.round().score.is_none());
        assert!(!quiz.timer_running());
        let events = ctx.take_events();
        assert!(events.contains(&GameEvent::ClearAnswerFields));
        assert!(events.contains(&GameEvent::show(Control::StartButton)));

        // And a new round can start.
        quiz.handle_input(&mut ctx, InputEvent::Start);
        assert_eq!(quiz.phase(), Phase::Loading);
    }
}
