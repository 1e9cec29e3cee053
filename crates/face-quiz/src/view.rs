//! Turns the round state into a frame's draw list.

use glam::Vec2;

use crate::config::{InputMode, QuizConfig};
use crate::layout::FaceLayout;
use crate::render::draw::{Color, DrawCommand, DrawList, TextAlign, TextStyle};
use crate::round::{Phase, RoundState};

const TITLE_POS: Vec2 = Vec2::new(10.0, 40.0);
const LINE_SPACING: f32 = 30.0;
const INSTRUCTIONS_TOP: f32 = 100.0;
const HINT_MARGIN: f32 = 40.0;

/// Draws every phase of the game onto a fixed-size canvas.
#[derive(Debug, Clone)]
pub struct QuizView {
    title: String,
    face_count: usize,
    show_seconds: u32,
    input_mode: InputMode,
    width: f32,
    height: f32,
}

impl QuizView {
    pub fn new(config: &QuizConfig) -> Self {
        Self {
            title: config.title.clone(),
            face_count: config.face_count,
            show_seconds: config.show_seconds,
            input_mode: config.input_mode,
            width: config.world_width,
            height: config.world_height,
        }
    }

    /// Replace `draw` with the frame for `round`. Always starts from a cleared canvas.
    pub fn render(&self, round: &RoundState, draw: &mut DrawList) {
        draw.clear();
        draw.push(DrawCommand::Clear);
        draw.fill_rect(Vec2::ZERO, Vec2::new(self.width, self.height), Color::BACKGROUND);

        match round.phase {
            Phase::Instructions => self.draw_instructions(draw),
            Phase::Loading => {
                self.draw_title(draw);
                draw.text("Loading faces...", self.middle(), body().with_align(TextAlign::Center));
            }
            Phase::Memorizing => {
                self.draw_title(draw);
                self.draw_timer(round.time_remaining, draw);
                self.draw_faces(round, true, draw);
            }
            Phase::Recalling => {
                self.draw_title(draw);
                self.draw_faces(round, false, draw);
                self.draw_recall_marks(round, draw);
            }
            Phase::Scored => self.draw_result(round, draw),
        }
    }

    pub fn instruction_lines(&self) -> Vec<String> {
        let recall_line = match self.input_mode {
            InputMode::Sequential => "you must type the correct name for each face.",
            InputMode::Parallel => "you must type the correct name under each face.",
        };
        vec![
            format!("Welcome to {}!", self.title),
            String::new(),
            format!("You will be shown {} faces with their names.", self.face_count),
            format!("You have {} seconds to memorize them.", self.show_seconds),
            "Then, the names will be hidden, and".to_string(),
            recall_line.to_string(),
            String::new(),
            "Press 'Start Game' to begin...".to_string(),
        ]
    }

    fn middle(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    fn layout(&self, count: usize) -> FaceLayout {
        FaceLayout::row(count, self.width, self.height)
    }

    fn draw_instructions(&self, draw: &mut DrawList) {
        let style = body().with_align(TextAlign::Center);
        draw.text_block(&self.instruction_lines(), self.width / 2.0, INSTRUCTIONS_TOP, LINE_SPACING, &style);
    }

    fn draw_title(&self, draw: &mut DrawList) {
        draw.text(self.title.as_str(), TITLE_POS, heading());
    }

    fn draw_timer(&self, seconds: u32, draw: &mut DrawList) {
        draw.text(
            format!("Time Left: {}", seconds),
            Vec2::new(self.width - 10.0, TITLE_POS.y),
            body().with_align(TextAlign::Right),
        );
    }

    fn draw_faces(&self, round: &RoundState, show_names: bool, draw: &mut DrawList) {
        let layout = self.layout(round.face_count());
        let label = body().with_align(TextAlign::Center);
        for (i, face) in round.faces().iter().enumerate() {
            let Some(center) = layout.center(i) else { continue };
            draw.image_centered(face.image_url(), center, layout.image_size());
            if show_names {
                if let Some(pos) = layout.label_pos(i) {
                    draw.text(face.name(), pos, label.clone());
                }
            }
        }
    }

    fn draw_recall_marks(&self, round: &RoundState, draw: &mut DrawList) {
        let layout = self.layout(round.face_count());
        let hint_pos = Vec2::new(self.width / 2.0, self.height - HINT_MARGIN);
        let hint = body().with_align(TextAlign::Center);
        match self.input_mode {
            InputMode::Sequential => {
                if let Some((pos, size)) = layout.highlight_rect(round.current_index) {
                    draw.stroke_rect(pos, size, Color::WHITE, 2.0);
                }
                draw.text("Type the highlighted name and press Enter", hint_pos, hint);
            }
            InputMode::Parallel => {
                let label = body().with_align(TextAlign::Center);
                for i in 0..round.face_count() {
                    if let Some(pos) = layout.label_pos(i) {
                        draw.text(format!("#{}", i + 1), pos, label.clone());
                    }
                }
                draw.text("Fill in every name, then press Submit", hint_pos, hint);
            }
        }
    }

    fn draw_result(&self, round: &RoundState, draw: &mut DrawList) {
        let center = self.middle();
        if let Some(score) = round.score {
            draw.text(
                score.to_string(),
                center - Vec2::new(0.0, 50.0),
                heading().with_align(TextAlign::Center),
            );
        }
        draw.text(
            "The game will restart shortly...",
            center + Vec2::new(0.0, 10.0),
            body().with_align(TextAlign::Center),
        );
    }
}

fn heading() -> TextStyle {
    TextStyle::new(32.0)
}

fn body() -> TextStyle {
    TextStyle::new(24.0)
}
