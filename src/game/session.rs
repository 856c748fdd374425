//! The game loop controller
//!
//! [`GameSession`] owns every piece of mutable game state together with the
//! tick registration. Input only touches the pending direction and the state
//! machine; the snake itself is mutated exclusively by [`GameSession::tick`].

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::{
    action::{Action, Direction},
    collision::{self, Outcome},
    config::{Difficulty, GameConfig},
    error::GameError,
    food,
    grid::Grid,
    state::{Cell, EndReason, GameState, Snake},
    timer::TickTimer,
};
use crate::persistence::HighScoreStore;

pub struct GameSession {
    config: GameConfig,
    grid: Grid,
    state: GameState,
    snake: Snake,
    /// Direction committed by the last tick
    direction: Direction,
    /// Direction queued by input, applied at the start of the next tick
    next_direction: Direction,
    food: Option<Cell>,
    score: u32,
    high_score: u32,
    end_reason: Option<EndReason>,
    difficulty: Difficulty,
    timer: Option<TickTimer>,
    redraw_requested: bool,
    rng: StdRng,
    store: Box<dyn HighScoreStore>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("config", &self.config)
            .field("grid", &self.grid)
            .field("state", &self.state)
            .field("snake", &self.snake)
            .field("direction", &self.direction)
            .field("next_direction", &self.next_direction)
            .field("food", &self.food)
            .field("score", &self.score)
            .field("high_score", &self.high_score)
            .field("end_reason", &self.end_reason)
            .field("difficulty", &self.difficulty)
            .field("timer", &self.timer)
            .field("redraw_requested", &self.redraw_requested)
            .finish_non_exhaustive()
    }
}

impl GameSession {
    /// Create an idle session. The stored high score is read once here.
    ///
    /// Fails with the validation message if `config` cannot hold a game.
    pub fn new(config: GameConfig, store: Box<dyn HighScoreStore>) -> Result<Self, String> {
        Self::with_rng(config, store, StdRng::from_entropy())
    }

    /// Create an idle session with a caller-supplied random source
    pub fn with_rng(
        config: GameConfig,
        store: Box<dyn HighScoreStore>,
        rng: StdRng,
    ) -> Result<Self, String> {
        config.validate()?;

        let grid = config.grid();
        let high_score = store.load().unwrap_or_else(|err| {
            warn!("Could not load high score, starting from 0: {:#}", err);
            0
        });

        Ok(Self {
            snake: initial_snake(&grid, config.initial_snake_length),
            difficulty: config.difficulty,
            config,
            grid,
            state: GameState::Idle,
            direction: Direction::Right,
            next_direction: Direction::Right,
            food: None,
            score: 0,
            high_score,
            end_reason: None,
            timer: None,
            redraw_requested: true,
            rng,
            store,
        })
    }

    /// Start a new game from any state, abandoning the current one
    pub fn start(&mut self) {
        // Cancel before anything else so a restart never leaves two tick sources
        self.timer = None;

        self.snake = initial_snake(&self.grid, self.config.initial_snake_length);
        self.direction = Direction::Right;
        self.next_direction = Direction::Right;
        self.score = 0;
        self.end_reason = None;
        self.redraw_requested = true;

        match food::place(&self.snake, &self.grid, &mut self.rng) {
            Ok(cell) => self.food = Some(cell),
            Err(err) => {
                self.food = None;
                debug!("Initial food placement failed: {}", err);
                self.end(EndReason::BoardFilled);
                return;
            }
        }

        self.state = GameState::Running;
        self.timer = Some(TickTimer::start(self.difficulty.tick_interval()));
        info!(
            difficulty = self.difficulty.as_str(),
            grid_width = self.grid.width(),
            grid_height = self.grid.height(),
            "Game started"
        );
    }

    /// Advance the game by one step.
    ///
    /// Returns `None` without touching anything unless the game is running.
    pub fn tick(&mut self) -> Option<Outcome> {
        if self.state != GameState::Running {
            return None;
        }

        // Commit queued input before moving
        self.direction = self.next_direction;
        self.snake.advance(self.direction);

        let outcome = collision::evaluate(&self.snake, self.food, &self.grid);
        match outcome {
            Outcome::Continue => {
                self.snake.drop_tail();
            }
            Outcome::Eat => self.eat(),
            Outcome::Collide(kind) => self.end(EndReason::Collision(kind)),
        }

        self.redraw_requested = true;
        Some(outcome)
    }

    fn eat(&mut self) {
        self.score += self.config.points_per_food;

        if self.score > self.high_score {
            self.high_score = self.score;
            if let Err(err) = self.store.save(self.high_score) {
                warn!("Failed to save high score: {:#}", err);
            }
        }

        match food::place(&self.snake, &self.grid, &mut self.rng) {
            Ok(cell) => self.food = Some(cell),
            Err(GameError::NoSpaceAvailable) => {
                self.food = None;
                self.end(EndReason::BoardFilled);
            }
            Err(err) => debug!("Unexpected placement error: {}", err),
        }
    }

    fn end(&mut self, reason: EndReason) {
        self.state = GameState::Ended;
        self.end_reason = Some(reason);
        self.timer = None;
        self.redraw_requested = true;
        info!(score = self.score, length = self.snake.len(), ?reason, "Game over");
    }

    /// Queue a turn for the next tick.
    ///
    /// The reversal check is against the committed direction, not the pending
    /// one, so two quick turns cannot fold the snake back onto itself.
    pub fn set_direction(&mut self, requested: Direction) -> Result<(), GameError> {
        if self.state != GameState::Running {
            return Err(GameError::NoActiveGame);
        }

        if requested.is_opposite(self.direction) {
            return Err(GameError::InvalidDirectionChange);
        }

        self.next_direction = requested;
        Ok(())
    }

    /// Suspend ticking. Pausing a paused game does nothing.
    pub fn pause(&mut self) -> Result<(), GameError> {
        match self.state {
            GameState::Running => {
                self.state = GameState::Paused;
                self.timer = None;
                self.redraw_requested = true;
                debug!("Paused");
                Ok(())
            }
            GameState::Paused => Ok(()),
            GameState::Idle | GameState::Ended => Err(GameError::NoActiveGame),
        }
    }

    /// Resume ticking after a pause and request an immediate redraw
    pub fn resume(&mut self) -> Result<(), GameError> {
        match self.state {
            GameState::Paused => {
                self.state = GameState::Running;
                self.timer = Some(TickTimer::start(self.difficulty.tick_interval()));
                self.redraw_requested = true;
                debug!("Resumed");
                Ok(())
            }
            GameState::Running => Ok(()),
            GameState::Idle | GameState::Ended => Err(GameError::NoActiveGame),
        }
    }

    pub fn toggle_pause(&mut self) -> Result<(), GameError> {
        match self.state {
            GameState::Paused => self.resume(),
            _ => self.pause(),
        }
    }

    /// Change the tick period. A running game is rescheduled from now.
    pub fn change_difficulty(&mut self, level: Difficulty) {
        self.difficulty = level;
        if self.state == GameState::Running {
            self.timer = Some(TickTimer::start(level.tick_interval()));
        }
        self.redraw_requested = true;
        debug!(difficulty = level.as_str(), "Difficulty changed");
    }

    /// Dispatch a player action
    pub fn handle(&mut self, action: Action) -> Result<(), GameError> {
        match action {
            Action::Turn(direction) => self.set_direction(direction),
            Action::TogglePause => self.toggle_pause(),
            Action::Start => {
                self.start();
                Ok(())
            }
            Action::SetDifficulty(level) => {
                self.change_difficulty(level);
                Ok(())
            }
        }
    }

    /// Resolve when the next tick is due. Never resolves while no timer is
    /// active, which makes it safe to poll in a `select!` in every state.
    pub async fn next_tick(&mut self) {
        match self.timer.as_mut() {
            Some(timer) => timer.wait().await,
            None => std::future::pending().await,
        }
    }

    /// Returns true once after every change that should be shown
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.next_direction
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Set once the game has ended
    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn is_ticking(&self) -> bool {
        self.timer.is_some()
    }

    /// Period of the active timer, if any
    pub fn tick_period(&self) -> Option<Duration> {
        self.timer.as_ref().map(TickTimer::period)
    }
}

/// Horizontal snake centred on the board, head rightmost
fn initial_snake(grid: &Grid, length: usize) -> Snake {
    let head = Cell::new((grid.width() / 2) as i32, (grid.height() / 2) as i32);
    Snake::straight(head, Direction::Right, length)
}
