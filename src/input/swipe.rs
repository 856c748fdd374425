//! Swipe gestures from mouse drags
//!
//! Terminals report touch and mouse drags alike as `MouseEventKind::Drag`.
//! Each drag step is compared with the previous pointer position and turned
//! into a direction along the dominant axis.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::game::Direction;

/// Terminal cells are roughly twice as tall as they are wide
const ROW_ASPECT: i32 = 2;

#[derive(Debug, Default)]
pub struct SwipeTracker {
    origin: Option<(u16, u16)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a mouse event; returns a direction once a drag step is seen
    pub fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<Direction> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.origin = Some((event.column, event.row));
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let (start_col, start_row) = self.origin?;
                // Every step restarts from the current pointer position
                self.origin = Some((event.column, event.row));

                let dx = i32::from(event.column) - i32::from(start_col);
                let dy = (i32::from(event.row) - i32::from(start_row)) * ROW_ASPECT;
                swipe_direction(dx, dy)
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.origin = None;
                None
            }
            _ => None,
        }
    }
}

fn swipe_direction(dx: i32, dy: i32) -> Option<Direction> {
    if dx.abs() > dy.abs() {
        Some(if dx > 0 { Direction::Right } else { Direction::Left })
    } else if dy > 0 {
        Some(Direction::Down)
    } else if dy < 0 {
        Some(Direction::Up)
    } else {
        None
    }
}
