use crate::error::MazeError;

// The engine's stand-in for DFS recursion: a LIFO of cell indices with a
// fixed bound. A full stack rejects further pushes instead of dropping them,
// and popping or peeking an empty stack reports `None` rather than failing.
pub struct CellStack {
    entries: Vec<usize>,
    capacity: usize,
}

impl CellStack {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, cell: usize) -> Result<(), MazeError> {
        if self.entries.len() == self.capacity {
            return Err(MazeError::StackFull {
                capacity: self.capacity,
            });
        }

        self.entries.push(cell);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.entries.pop()
    }

    pub fn top(&self) -> Option<usize> {
        self.entries.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
