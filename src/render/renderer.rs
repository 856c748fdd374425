use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Clear, Paragraph,
        canvas::{Canvas, Context, Line as CanvasLine, Rectangle},
    },
};

use super::scene::{Paint, Surface, draw_scene};
use crate::game::{CollisionType, EndReason, GameSession, GameState, PixelRect};
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, session: &GameSession, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        // Render header with basic stats
        frame.render_widget(self.render_stats(session, metrics), chunks[0]);

        // Center the board horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        self.render_board(frame, game_area, session);

        match session.state() {
            GameState::Idle => self.render_panel(frame, game_area, self.start_prompt()),
            GameState::Ended => self.render_panel(frame, game_area, self.game_over(session)),
            GameState::Running | GameState::Paused => {}
        }

        // Render footer with controls
        frame.render_widget(self.render_controls(session), chunks[2]);
    }

    fn render_board(&self, frame: &mut Frame, area: Rect, session: &GameSession) {
        let grid = session.grid();
        let (width, height) = grid.pixel_size();

        let title = match session.state() {
            GameState::Paused => " Snake (Paused) ",
            _ => " Snake ",
        };

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(title),
            )
            .marker(Marker::Braille)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                let mut surface = CanvasSurface { ctx, height };
                match session.state() {
                    // The initial screen shows only the empty board
                    GameState::Idle => draw_scene(&mut surface, grid, &[], None),
                    _ => draw_scene(&mut surface, grid, session.snake().body(), session.food()),
                }
            });

        frame.render_widget(canvas, area);
    }

    fn render_stats(&self, session: &GameSession, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                session.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                session.high_score().to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Speed: ", Style::default().fg(Color::Yellow)),
            Span::styled(session.difficulty().as_str(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn start_prompt(&self) -> Paragraph<'static> {
        let text = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to start", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
    }

    fn game_over(&self, session: &GameSession) -> Paragraph<'static> {
        let (headline, color) = match session.end_reason() {
            Some(EndReason::BoardFilled) => ("YOU WIN", Color::Green),
            _ => ("GAME OVER", Color::Red),
        };
        let cause = match session.end_reason() {
            Some(EndReason::Collision(CollisionType::Wall)) => "Hit the wall",
            Some(EndReason::Collision(CollisionType::SelfCollision)) => "Ran into yourself",
            Some(EndReason::BoardFilled) => "The board is full",
            None => "",
        };

        let text = vec![
            Line::from(vec![Span::styled(
                headline,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )]),
            Line::from(Span::styled(cause, Style::default().fg(Color::Gray))),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    session.score().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
    }

    fn render_panel(&self, frame: &mut Frame, area: Rect, panel: Paragraph<'_>) {
        let panel_area = centered_rect(area, 44, 6);
        frame.render_widget(Clear, panel_area);
        frame.render_widget(panel, panel_area);
    }

    fn render_controls(&self, session: &GameSession) -> Paragraph<'_> {
        let pause_label = match session.state() {
            GameState::Paused => " to resume | ",
            _ => " to pause | ",
        };

        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(pause_label),
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" to restart | "),
            Span::styled("1-3", Style::default().fg(Color::Cyan)),
            Span::raw(" speed | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Paints scene primitives onto a ratatui canvas, flipping the y axis
struct CanvasSurface<'a, 'b> {
    ctx: &'a mut Context<'b>,
    height: f64,
}

impl CanvasSurface<'_, '_> {
    fn color(paint: Paint) -> Color {
        match paint {
            Paint::GridLine => Color::DarkGray,
            Paint::Food => Color::Red,
            Paint::SnakeHead => Color::Cyan,
            Paint::SnakeBody => Color::Green,
        }
    }
}

impl Surface for CanvasSurface<'_, '_> {
    fn clear(&mut self) {
        // Every frame starts from an empty canvas
    }

    fn line(&mut self, from: (f64, f64), to: (f64, f64), paint: Paint) {
        self.ctx.draw(&CanvasLine {
            x1: from.0,
            y1: self.height - from.1,
            x2: to.0,
            y2: self.height - to.1,
            color: Self::color(paint),
        });
    }

    fn fill_rect(&mut self, rect: PixelRect, paint: Paint) {
        let color = Self::color(paint);
        let bottom = self.height - rect.y - rect.height;

        self.ctx.draw(&Rectangle {
            x: rect.x,
            y: bottom,
            width: rect.width,
            height: rect.height,
            color,
        });

        // Scanlines fill the interior
        let step = rect.height / 8.0;
        for i in 1..8 {
            let y = bottom + step * f64::from(i);
            self.ctx.draw(&CanvasLine {
                x1: rect.x,
                y1: y,
                x2: rect.x + rect.width,
                y2: y,
                color,
            });
        }
    }

    fn layer(&mut self) {
        self.ctx.layer();
    }
}

/// A `width` x `height` rectangle centred in `area`, clamped to fit
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
