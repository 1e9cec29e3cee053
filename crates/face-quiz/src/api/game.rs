use crate::api::types::GameEvent;
use crate::input::queue::InputEvent;
use crate::render::draw::DrawList;

/// Configuration for the frame loop, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Most fixed steps run for a single frame (default: 10).
    pub max_steps_per_frame: u32,
    /// Canvas width in pixels.
    pub world_width: f32,
    /// Canvas height in pixels.
    pub world_height: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_steps_per_frame: 10,
            world_width: 800.0,
            world_height: 600.0,
        }
    }
}

/// The contract a game fulfills so the runner can drive it.
pub trait Game {
    /// Return loop configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Set up initial state and announce the initial page controls.
    fn init(&mut self, ctx: &mut EngineContext);

    /// React to one input event. Called for every queued event before the frame's steps.
    fn handle_input(&mut self, ctx: &mut EngineContext, event: InputEvent);

    /// Advance game time by one fixed step of `dt` seconds.
    fn update(&mut self, ctx: &mut EngineContext, dt: f32);

    /// Read-only render pass. The draw list arrives empty.
    fn render(&self, ctx: &mut RenderContext);
}

/// Mutable access to engine state, passed to Game::init, handle_input and update.
pub struct EngineContext {
    /// Events for the host, drained after every tick.
    pub events: Vec<GameEvent>,
    frame: u64,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            frame: 0,
        }
    }

    /// Emit an event to be forwarded to the host page.
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take every pending event, leaving the list empty.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of frames ticked so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Mark the start of a new frame.
    pub fn begin_frame(&mut self) {
        self.frame += 1;
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context handed to `Game::render`.
pub struct RenderContext<'a> {
    pub draw: &'a mut DrawList,
    pub width: f32,
    pub height: f32,
}
