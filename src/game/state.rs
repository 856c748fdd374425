use super::action::Direction;
use super::collision::CollisionType;

/// A position on the game grid, (column, row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The neighbouring cell in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: Vec<Cell>,
}

impl Snake {
    /// Create a straight snake with the head at `head`, trailing away from `direction`
    pub fn straight(head: Cell, direction: Direction, length: usize) -> Self {
        let mut snake = Self { body: Vec::new() };
        snake.reset(straight_cells(head, direction, length), direction);
        snake
    }

    /// Replace the whole body.
    ///
    /// Cells must be distinct and laid out in a line along `direction`,
    /// head first.
    pub fn reset(&mut self, initial_cells: Vec<Cell>, direction: Direction) {
        debug_assert!(!initial_cells.is_empty(), "snake needs a head");
        debug_assert!(
            initial_cells.windows(2).all(|pair| pair[1].moved_in_direction(direction) == pair[0]),
            "initial cells must be contiguous along {:?}",
            direction
        );
        self.body = initial_cells;
    }

    /// Push a new head one cell along `direction` and return it.
    ///
    /// The tail is left in place; call [`Snake::drop_tail`] unless the snake
    /// is growing this tick.
    pub fn advance(&mut self, direction: Direction) -> Cell {
        let new_head = self.head().moved_in_direction(direction);
        self.body.insert(0, new_head);
        new_head
    }

    /// Remove the last segment
    pub fn drop_tail(&mut self) -> Option<Cell> {
        self.body.pop()
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// All segments, head first
    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Cell] {
        &self.body[1..]
    }

    /// Check if a cell collides with the snake body (excluding head)
    pub fn collides_with_body(&self, cell: Cell) -> bool {
        self.body_segments().contains(&cell)
    }

    /// Check if a cell is occupied by any segment
    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

fn straight_cells(head: Cell, direction: Direction, length: usize) -> Vec<Cell> {
    let back = direction.opposite();
    std::iter::successors(Some(head), |cell| Some(cell.moved_in_direction(back)))
        .take(length)
        .collect()
}

/// Lifecycle of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// No game has been started yet
    #[default]
    Idle,
    Running,
    Paused,
    /// The last game is over; only a restart leaves this state
    Ended,
}

impl GameState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Running => "Running",
            Self::Paused => "Paused",
            Self::Ended => "Game Over",
        }
    }
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    Collision(CollisionType),
    /// The snake fills every cell, so no food can be placed
    BoardFilled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_movement() {
        let cell = Cell::new(5, 5);
        assert_eq!(cell.moved_by(1, 0), Cell::new(6, 5));
        assert_eq!(cell.moved_by(-1, 0), Cell::new(4, 5));
        assert_eq!(cell.moved_in_direction(Direction::Down), Cell::new(5, 6));
        assert_eq!(cell.moved_in_direction(Direction::Up), Cell::new(5, 4));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::straight(Cell::new(10, 10), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(
            snake.body(),
            &[Cell::new(10, 10), Cell::new(9, 10), Cell::new(8, 10)]
        );

        let snake = Snake::straight(Cell::new(4, 4), Direction::Up, 3);
        assert_eq!(snake.body(), &[Cell::new(4, 4), Cell::new(4, 5), Cell::new(4, 6)]);
    }

    #[test]
    fn test_advance_and_drop_tail() {
        let mut snake = Snake::straight(Cell::new(5, 5), Direction::Right, 3);

        // Plain move
        let head = snake.advance(Direction::Right);
        assert_eq!(head, Cell::new(6, 5));
        assert_eq!(snake.drop_tail(), Some(Cell::new(3, 5)));
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.body(), &[Cell::new(6, 5), Cell::new(5, 5), Cell::new(4, 5)]);

        // Growing move keeps the tail
        snake.advance(Direction::Down);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Cell::new(6, 6));
        assert_eq!(snake.body()[1..], [Cell::new(6, 5), Cell::new(5, 5), Cell::new(4, 5)]);
    }

    #[test]
    fn test_reset_replaces_body() {
        let mut snake = Snake::straight(Cell::new(5, 5), Direction::Right, 5);
        snake.reset(vec![Cell::new(2, 2), Cell::new(2, 1), Cell::new(2, 0)], Direction::Down);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(2, 2));
    }

    #[test]
    fn test_collision_detection() {
        let snake = Snake::straight(Cell::new(5, 5), Direction::Right, 3);
        assert!(!snake.collides_with_body(Cell::new(5, 5))); // head
        assert!(snake.collides_with_body(Cell::new(4, 5))); // body
        assert!(!snake.collides_with_body(Cell::new(10, 10))); // empty
        assert!(snake.contains(Cell::new(5, 5)));
    }
}
