pub mod api;
pub mod core;
pub mod input;
pub mod render;
pub mod provider;
pub mod config;
pub mod face;
pub mod round;
pub mod collector;
pub mod scoring;
pub mod layout;
pub mod view;
pub mod quiz;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::{Control, GameEvent};
pub use core::time::{Countdown, CountdownTick, FixedTimestep};
pub use core::rng::Rng;
pub use input::queue::{InputEvent, InputQueue};
pub use render::draw::{Color, DrawCommand, DrawList, TextAlign, TextStyle};
pub use config::{ConfigError, InputMode, NameSource, QuizConfig};
pub use face::Face;
pub use provider::{FaceProvider, PersonFetcher, ProviderError};
pub use round::{Phase, RoundState};
pub use collector::AnswerCollector;
pub use scoring::{is_match, Score};
pub use quiz::FaceQuiz;
