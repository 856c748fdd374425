//! Board drawing in surface units
//!
//! The scene is described through the [`Surface`] trait so it does not care
//! whether it ends up on a terminal canvas or in a test recorder.

use crate::game::{Cell, Grid, PixelRect};

/// What a primitive depicts; surfaces pick the actual colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    GridLine,
    Food,
    SnakeHead,
    SnakeBody,
}

/// Minimal 2D drawing target, origin top-left, y growing downwards
pub trait Surface {
    fn clear(&mut self);

    fn line(&mut self, from: (f64, f64), to: (f64, f64), paint: Paint);

    fn fill_rect(&mut self, rect: PixelRect, paint: Paint);

    /// Start drawing above everything drawn so far
    fn layer(&mut self) {}
}

/// Draw grid lines, the food and the snake, with the head painted distinctly
pub fn draw_scene<S: Surface + ?Sized>(
    surface: &mut S,
    grid: &Grid,
    snake: &[Cell],
    food: Option<Cell>,
) {
    surface.clear();

    let (width, height) = grid.pixel_size();
    let step = f64::from(grid.cell_size());
    for column in 0..=grid.width() {
        let x = column as f64 * step;
        surface.line((x, 0.0), (x, height), Paint::GridLine);
    }
    for row in 0..=grid.height() {
        let y = row as f64 * step;
        surface.line((0.0, y), (width, y), Paint::GridLine);
    }
    surface.layer();

    if let Some(food) = food {
        surface.fill_rect(grid.cell_rect(food), Paint::Food);
    }

    for (i, segment) in snake.iter().enumerate() {
        // A head that went through the wall has nowhere to be drawn
        if !grid.contains(*segment) {
            continue;
        }
        let paint = if i == 0 { Paint::SnakeHead } else { Paint::SnakeBody };
        surface.fill_rect(grid.cell_rect(*segment), paint);
    }
}
