use face_quiz::{
    DrawList, EngineContext, FixedTimestep, Game, GameConfig, GameEvent, InputEvent, InputQueue,
    RenderContext,
};

/// Generic game runner that wires up the frame loop.
///
/// Owns the game, its input queue and the frame's draw list. The browser
/// side calls `tick` once per animation frame, paints `draw_list` and
/// applies the returned events to the page.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    draw: DrawList,
    timestep: FixedTimestep,
    config: GameConfig,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt, config.max_steps_per_frame);

        Self {
            game,
            ctx: EngineContext::new(),
            input: InputQueue::new(),
            draw: DrawList::new(),
            timestep,
            config,
            initialized: false,
        }
    }

    /// Initialize the game and draw its first frame. Returns the initial page events.
    pub fn init(&mut self) -> Vec<GameEvent> {
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.render();
        self.ctx.take_events()
    }

    /// Queue an input event for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: feed queued input, advance fixed steps, rebuild the draw list.
    /// Returns the events the game emitted during the frame.
    pub fn tick(&mut self, dt: f32) -> Vec<GameEvent> {
        if !self.initialized {
            return Vec::new();
        }
        self.ctx.begin_frame();

        for event in self.input.drain() {
            self.game.handle_input(&mut self.ctx, event);
        }

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.game.update(&mut self.ctx, self.timestep.dt());
        }

        self.render();
        self.ctx.take_events()
    }

    fn render(&mut self) {
        self.draw.clear();
        let mut render_ctx = RenderContext {
            draw: &mut self.draw,
            width: self.config.world_width,
            height: self.config.world_height,
        };
        self.game.render(&mut render_ctx);
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn frame(&self) -> u64 {
        self.ctx.frame()
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }
}
