//! Food placement on free cells

use rand::Rng;
use rand::seq::SliceRandom;

use super::error::GameError;
use super::grid::Grid;
use super::state::{Cell, Snake};

/// Pick a free cell uniformly at random.
///
/// The whole lattice is enumerated and occupied cells removed before
/// sampling, so this terminates however full the board is.
pub fn place<R: Rng + ?Sized>(snake: &Snake, grid: &Grid, rng: &mut R) -> Result<Cell, GameError> {
    let free: Vec<Cell> = grid.cells().filter(|cell| !snake.contains(*cell)).collect();

    free.choose(rng).copied().ok_or(GameError::NoSpaceAvailable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::action::Direction;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_food_never_on_snake() {
        let grid = Grid::from_surface(100, 100, 20);
        let snake = Snake::straight(Cell::new(4, 2), Direction::Right, 5);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let food = place(&snake, &grid, &mut rng).unwrap();
            assert!(grid.contains(food));
            assert!(!snake.contains(food));
        }
    }

    #[test]
    fn test_single_free_cell_is_chosen() {
        // 3x1 board with a 2-long snake leaves only (0, 0)
        let grid = Grid::from_surface(60, 20, 20);
        let mut snake = Snake::straight(Cell::new(2, 0), Direction::Right, 2);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(place(&snake, &grid, &mut rng), Ok(Cell::new(0, 0)));

        snake.reset(
            vec![Cell::new(2, 0), Cell::new(1, 0), Cell::new(0, 0)],
            Direction::Right,
        );
        assert_eq!(place(&snake, &grid, &mut rng), Err(GameError::NoSpaceAvailable));
    }

    #[test]
    fn test_every_free_cell_reachable() {
        let grid = Grid::from_surface(80, 20, 20);
        let snake = Snake::straight(Cell::new(1, 0), Direction::Right, 1);
        let mut rng = StdRng::seed_from_u64(42);

        let seen: HashSet<Cell> = (0..300)
            .map(|_| place(&snake, &grid, &mut rng).unwrap())
            .collect();
        assert_eq!(seen.len(), 3);
        assert!(!seen.contains(&Cell::new(1, 0)));
    }
}
