use anyhow::{Context, Result, anyhow};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, info};

use crate::game::{Action, GameConfig, GameSession, GameState};
use crate::input::{InputHandler, KeyAction, SwipeTracker};
use crate::metrics::GameMetrics;
use crate::persistence::HighScoreStore;
use crate::render::Renderer;

pub struct HumanMode {
    session: GameSession,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    swipe: SwipeTracker,
    should_quit: bool,
    /// Set by events that change the screen without touching the session
    force_redraw: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, store: Box<dyn HighScoreStore>) -> Result<Self> {
        let session = GameSession::new(config, store)
            .map_err(|msg| anyhow!("Invalid game configuration: {}", msg))?;

        Ok(Self {
            session,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            swipe: SwipeTracker::new(),
            should_quit: false,
            force_redraw: true,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Keeps the elapsed-time readout current between ticks
        let mut clock = interval(Duration::from_secs(1));

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick; pending while no game is running
                _ = self.session.next_tick() => {
                    self.update_game();
                }

                _ = clock.tick() => {
                    self.force_redraw = true;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }

            let session_changed = self.session.take_redraw_request();
            if session_changed || std::mem::take(&mut self.force_redraw) {
                terminal
                    .draw(|frame| {
                        self.renderer.render(frame, &self.session, &self.metrics);
                    })
                    .context("Failed to draw frame")?;
            }
        }

        info!(games_played = self.metrics.games_played, "Quitting");
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                // Only process key press events, not release
                if key.kind != KeyEventKind::Press {
                    return;
                }

                match self.input_handler.handle_key_event(key) {
                    KeyAction::Game(action) => self.apply(action),
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::None => {}
                }
            }
            Event::Mouse(mouse) => {
                if let Some(direction) = self.swipe.handle_mouse_event(mouse) {
                    self.apply(Action::Turn(direction));
                }
            }
            Event::Resize(..) => self.force_redraw = true,
            _ => {}
        }
    }

    fn apply(&mut self, action: Action) {
        let before = self.session.state();

        if let Err(err) = self.session.handle(action) {
            debug!(?action, "Ignored input: {}", err);
            return;
        }

        match (action, before, self.session.state()) {
            (Action::Start, _, _) => self.metrics.on_game_start(),
            (_, GameState::Running, GameState::Paused) => self.metrics.on_pause(),
            (_, GameState::Paused, GameState::Running) => self.metrics.on_resume(),
            _ => {}
        }
    }

    fn update_game(&mut self) {
        if self.session.tick().is_some() && self.session.state() == GameState::Ended {
            self.metrics.on_game_over(self.session.snake().len());
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
