use std::fmt;

use rand::prelude::{Rng, ThreadRng};
use serde::{Deserialize, Serialize};

use crate::cell::CellState;
use crate::error::MazeError;
use crate::grid::Grid;
use crate::stack::CellStack;
use crate::trace::Tracer;

// Every cell has at most four neighbors, so four scratch slots always fit.
const NEIGHBOR_SLOTS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    Running,
    Complete,
}

// Randomized depth-first maze generation, one step per external tick. The
// maker owns all mutable state of a run: the cell flags, the predecessor
// array that defines the spanning tree, the traversal stack, and the one
// long-lived random generator every draw comes from.
pub struct MazeMaker<R: Rng = ThreadRng> {
    grid: Grid,
    cells: Vec<CellState>,
    predecessors: Vec<Option<usize>>,
    stack: CellStack,
    tracer: Tracer,
    rng: R,
    root: usize,
    visited_count: usize,
    state: StepOutcome,
}

impl MazeMaker<ThreadRng> {
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        Self::with_rng(width, height, rand::rng())
    }
}

impl<R: Rng> MazeMaker<R> {
    pub fn with_rng(width: usize, height: usize, mut rng: R) -> Result<Self, MazeError> {
        let grid = Grid::new(width, height)?;
        let total = grid.total_cells();

        let mut cells = vec![CellState::default(); total];
        let predecessors = vec![None; total];
        let mut stack = CellStack::new(total);

        // Seed the run: one uniformly random root, visited, no predecessor.
        let root = rng.random_range(0..total);
        cells[root].visited = true;
        stack.push(root)?;

        let state = if total == 1 {
            StepOutcome::Complete
        } else {
            StepOutcome::Running
        };

        Ok(Self {
            grid,
            cells,
            predecessors,
            stack,
            tracer: Tracer::new(),
            rng,
            root,
            visited_count: 1,
            state,
        })
    }

    // The only mutating entry point of generation. Each call either carves
    // into one unvisited neighbor of the active cell or backtracks by one.
    pub fn step(&mut self) -> Result<StepOutcome, MazeError> {
        if self.state == StepOutcome::Complete {
            return Ok(StepOutcome::Complete);
        }

        let Some(current) = self.stack.top() else {
            // Defensive terminal case: nothing left to walk from.
            self.state = StepOutcome::Complete;
            return Ok(StepOutcome::Complete);
        };

        let neighbors = self.grid.neighbors(current)?;
        match pick_unvisited_neighbor(&mut self.rng, neighbors, &self.cells) {
            Some(next) => self.advance_into(current, next)?,
            None => {
                self.stack.pop();
                if self.stack.is_empty() && self.visited_count < self.grid.total_cells() {
                    // Cannot happen on a rectangular grid; halt rather than
                    // spin if it ever does.
                    self.state = StepOutcome::Complete;
                    return Err(MazeError::Disconnected {
                        visited: self.visited_count,
                        total: self.grid.total_cells(),
                    });
                }
            }
        }

        if self.visited_count == self.grid.total_cells() {
            self.state = StepOutcome::Complete;
        }

        Ok(self.state)
    }

    // Drives `step` to completion in one call, for consumers that do not
    // animate the build.
    pub fn generate(&mut self) -> Result<(), MazeError> {
        while self.step()? == StepOutcome::Running {}
        Ok(())
    }

    fn advance_into(&mut self, current: usize, next: usize) -> Result<(), MazeError> {
        self.cells[next].visited = true;
        self.predecessors[next] = Some(current);
        self.stack.push(next)?;
        self.visited_count += 1;
        self.open_wall_between(current, next);
        Ok(())
    }

    // The opening is recorded on the lower-indexed cell of the pair: south
    // when the indices differ by the grid width, east otherwise. The south
    // check comes first because a one-cell-wide grid has width 1.
    fn open_wall_between(&mut self, a: usize, b: usize) {
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        debug_assert!(
            high - low == 1 || high - low == self.grid.width(),
            "cells {} and {} are not grid-adjacent",
            low,
            high
        );

        if high - low == self.grid.width() {
            self.cells[low].path_south = true;
        } else {
            self.cells[low].path_east = true;
        }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn total_cells(&self) -> usize {
        self.grid.total_cells()
    }

    pub fn visited_count(&self) -> usize {
        self.visited_count
    }

    pub fn is_complete(&self) -> bool {
        self.state == StepOutcome::Complete
    }

    pub fn root(&self) -> usize {
        self.root
    }

    pub fn cell(&self, cell: usize) -> Result<CellState, MazeError> {
        match self.cells.get(cell) {
            Some(state) => Ok(*state),
            None => Err(MazeError::OutOfBounds {
                cell,
                total: self.cells.len(),
            }),
        }
    }

    pub fn predecessor(&self, cell: usize) -> Result<Option<usize>, MazeError> {
        match self.predecessors.get(cell) {
            Some(previous) => Ok(*previous),
            None => Err(MazeError::OutOfBounds {
                cell,
                total: self.predecessors.len(),
            }),
        }
    }

    pub fn set_backtrack_target(&mut self, cell: usize) -> Result<(), MazeError> {
        if cell >= self.cells.len() {
            return Err(MazeError::OutOfBounds {
                cell,
                total: self.cells.len(),
            });
        }

        self.tracer.retarget(cell, &mut self.cells);
        Ok(())
    }

    pub fn advance_backtrack(&mut self) -> bool {
        self.tracer.advance(&self.predecessors, &mut self.cells)
    }

    pub fn reset_backtrack(&mut self) {
        self.tracer.reset(&mut self.cells);
    }

    pub fn log(&self) -> String {
        let width = self.grid.width();
        let height = self.grid.height();
        let mut lines = Vec::with_capacity(2 * height + 1);

        for block_row in 0..(2 * height + 1) {
            let mut line = String::new();
            for block_col in 0..(2 * width + 1) {
                line.push_str(self.block_glyph(block_row, block_col));
            }
            lines.push(line);
        }

        lines.join("\n")
    }

    // One block per cell, wall, or pillar of the doubled-up display grid.
    fn block_glyph(&self, block_row: usize, block_col: usize) -> &'static str {
        let width = self.grid.width();
        let height = self.grid.height();

        match (block_row % 2, block_col % 2) {
            (1, 1) => {
                let cell = (block_row / 2) * width + block_col / 2;
                cell_glyph(self.cells[cell])
            }
            (1, 0) if block_col > 0 && block_col < 2 * width => {
                let owner = (block_row / 2) * width + block_col / 2 - 1;
                opening_glyph(self.cells[owner].path_east, self.cells[owner])
            }
            (0, 1) if block_row > 0 && block_row < 2 * height => {
                let owner = (block_row / 2 - 1) * width + block_col / 2;
                opening_glyph(self.cells[owner].path_south, self.cells[owner])
            }
            _ => "██",
        }
    }
}

fn cell_glyph(state: CellState) -> &'static str {
    if state.backtrack {
        "··"
    } else if state.visited {
        "  "
    } else {
        "▒▒"
    }
}

fn opening_glyph(open: bool, owner: CellState) -> &'static str {
    if !open {
        "██"
    } else if owner.backtrack {
        "··"
    } else {
        "  "
    }
}

// Uniform choice through the fixed scratch array: every unvisited neighbor
// lands in a random free slot, then one occupied slot is drawn the same way.
// Redrawing on collisions keeps each candidate's odds independent of the
// order the adjacency lists them in.
fn pick_unvisited_neighbor<R: Rng>(
    rng: &mut R,
    neighbors: &[usize],
    cells: &[CellState],
) -> Option<usize> {
    let mut slots: [Option<usize>; NEIGHBOR_SLOTS] = [None; NEIGHBOR_SLOTS];
    let mut has_candidate = false;

    for &neighbor in neighbors {
        if cells[neighbor].visited {
            continue;
        }

        let mut slot = rng.random_range(0..NEIGHBOR_SLOTS);
        while slots[slot].is_some() {
            slot = rng.random_range(0..NEIGHBOR_SLOTS);
        }
        slots[slot] = Some(neighbor);
        has_candidate = true;
    }

    if !has_candidate {
        return None;
    }

    let mut slot = rng.random_range(0..NEIGHBOR_SLOTS);
    while slots[slot].is_none() {
        slot = rng.random_range(0..NEIGHBOR_SLOTS);
    }
    slots[slot]
}

impl<R: Rng> fmt::Debug for MazeMaker<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<R: Rng> fmt::Display for MazeMaker<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}
