use super::state::Cell;

/// Rectangle on the drawing surface, in surface units, origin top-left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Mapping between the drawing surface and the cell lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cell_size: u32,
}

impl Grid {
    /// Derive the lattice from a surface. A partial trailing cell is dropped.
    pub fn from_surface(surface_width: u32, surface_height: u32, cell_size: u32) -> Self {
        Self {
            width: surface_width.checked_div(cell_size).unwrap_or(0) as usize,
            height: surface_height.checked_div(cell_size).unwrap_or(0) as usize,
            cell_size,
        }
    }

    /// Width in cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Number of cells on the board
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Check if a cell is within the grid bounds
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width as i32 && cell.y >= 0 && cell.y < self.height as i32
    }

    /// The surface rectangle covered by a cell
    pub fn cell_rect(&self, cell: Cell) -> PixelRect {
        let size = f64::from(self.cell_size);
        PixelRect {
            x: f64::from(cell.x) * size,
            y: f64::from(cell.y) * size,
            width: size,
            height: size,
        }
    }

    /// Surface extent actually covered by whole cells
    pub fn pixel_size(&self) -> (f64, f64) {
        let size = f64::from(self.cell_size);
        (self.width as f64 * size, self.height as f64 * size)
    }

    /// Every cell on the board, column by column
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.width as i32).flat_map(move |x| (0..self.height as i32).map(move |y| Cell::new(x, y)))
    }
}
