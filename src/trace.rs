use crate::cell::CellState;

// Walks a predecessor chain one hop per call, marking the backtrack flag on
// each cell it lands on. The tracer owns nothing but its cursor; callers
// lend it the maker's cell and predecessor arrays, and the only flag it ever
// writes is `backtrack`.
pub struct Tracer {
    cursor: Option<usize>,
}

impl Tracer {
    pub fn new() -> Self {
        Self { cursor: None }
    }

    pub fn is_active(&self) -> bool {
        self.cursor.is_some()
    }

    // Aims the trace at `cell`, redirecting any walk already in progress.
    // An unvisited target deactivates the trace and marks nothing.
    pub fn retarget(&mut self, cell: usize, cells: &mut [CellState]) {
        if cells[cell].visited {
            cells[cell].backtrack = true;
            self.cursor = Some(cell);
        } else {
            self.cursor = None;
        }
    }

    // One predecessor hop. Returns false once the cursor sits on the root,
    // which has no predecessor, or when no trace is active.
    pub fn advance(&mut self, predecessors: &[Option<usize>], cells: &mut [CellState]) -> bool {
        let Some(current) = self.cursor else {
            return false;
        };

        match predecessors[current] {
            Some(previous) => {
                cells[previous].backtrack = true;
                self.cursor = Some(previous);
                true
            }
            None => {
                self.cursor = None;
                false
            }
        }
    }

    pub fn reset(&mut self, cells: &mut [CellState]) {
        for cell in cells.iter_mut() {
            cell.backtrack = false;
        }
        self.cursor = None;
    }
}
