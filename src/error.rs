use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    ZeroDimension { width: usize, height: usize },
    OutOfBounds { cell: usize, total: usize },
    StackFull { capacity: usize },
    Disconnected { visited: usize, total: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::ZeroDimension { width, height } => {
                write!(f, "maze dimensions must be at least 1x1, got {}x{}", width, height)
            }
            MazeError::OutOfBounds { cell, total } => {
                write!(f, "cell index {} is out of bounds for a maze of {} cells", cell, total)
            }
            MazeError::StackFull { capacity } => {
                write!(f, "traversal stack is full at its capacity of {}", capacity)
            }
            MazeError::Disconnected { visited, total } => {
                write!(f, "traversal stack emptied with only {} of {} cells visited", visited, total)
            }
        }
    }
}

impl std::error::Error for MazeError {}
