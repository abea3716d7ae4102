pub mod cell;
pub mod error;
pub mod grid;
pub mod maker;
pub mod stack;
pub mod trace;

pub use cell::{CellState, Direction};
pub use error::MazeError;
pub use grid::Grid;
pub use maker::{MazeMaker, StepOutcome};
pub use stack::CellStack;
pub use trace::Tracer;
