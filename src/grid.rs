use strum::IntoEnumIterator;

use crate::cell::Direction;
use crate::error::MazeError;

// Adjacency of a 4-connected rectangular grid. Cells are identified by
// row-major index, and each cell's neighbor list is built once at
// construction in fixed north, south, west, east order. Nothing mutates the
// graph afterwards.
pub struct Grid {
    width: usize,
    height: usize,
    adjacency: Vec<Vec<usize>>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::ZeroDimension { width, height });
        }

        let mut adjacency = vec![Vec::new(); width * height];

        for row in 0..height {
            for col in 0..width {
                let cell = row * width + col;
                for direction in Direction::iter() {
                    if let Some((next_row, next_col)) = direction.step(row, col, width, height) {
                        adjacency[cell].push(next_row * width + next_col);
                    }
                }
            }
        }

        Ok(Self {
            width,
            height,
            adjacency,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn total_cells(&self) -> usize {
        self.adjacency.len()
    }

    pub fn neighbors(&self, cell: usize) -> Result<&[usize], MazeError> {
        match self.adjacency.get(cell) {
            Some(neighbors) => Ok(neighbors),
            None => Err(MazeError::OutOfBounds {
                cell,
                total: self.adjacency.len(),
            }),
        }
    }

    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.height && col < self.width {
            Some(row * self.width + col)
        } else {
            None
        }
    }

    pub fn row_col_of(&self, cell: usize) -> Option<(usize, usize)> {
        if cell < self.adjacency.len() {
            Some((cell / self.width, cell % self.width))
        } else {
            None
        }
    }
}
