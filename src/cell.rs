use serde::{Deserialize, Serialize};
use strum::EnumIter;

// South and east always point toward the higher cell index, so wall openings
// are recorded on the lower-indexed cell of a pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellState {
    pub visited: bool,
    pub path_south: bool,
    pub path_east: bool,
    pub backtrack: bool,
}

// Declaration order is the order neighbors are listed in the grid adjacency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    pub fn step(
        self,
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    ) -> Option<(usize, usize)> {
        match self {
            Direction::North => {
                if row == 0 {
                    None
                } else {
                    Some((row - 1, col))
                }
            }
            Direction::South => {
                if row + 1 < height {
                    Some((row + 1, col))
                } else {
                    None
                }
            }
            Direction::West => {
                if col == 0 {
                    None
                } else {
                    Some((row, col - 1))
                }
            }
            Direction::East => {
                if col + 1 < width {
                    Some((row, col + 1))
                } else {
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn step_stays_inside_the_grid() {
        assert_eq!(Direction::North.step(0, 1, 3, 3), None);
        assert_eq!(Direction::West.step(1, 0, 3, 3), None);
        assert_eq!(Direction::South.step(2, 1, 3, 3), None);
        assert_eq!(Direction::East.step(1, 2, 3, 3), None);

        assert_eq!(Direction::North.step(1, 1, 3, 3), Some((0, 1)));
        assert_eq!(Direction::South.step(1, 1, 3, 3), Some((2, 1)));
        assert_eq!(Direction::West.step(1, 1, 3, 3), Some((1, 0)));
        assert_eq!(Direction::East.step(1, 1, 3, 3), Some((1, 2)));
    }

    #[test]
    fn iteration_order_is_north_south_west_east() {
        let order: Vec<Direction> = Direction::iter().collect();
        assert_eq!(
            order,
            vec![
                Direction::North,
                Direction::South,
                Direction::West,
                Direction::East
            ]
        );
    }

    #[test]
    fn a_fresh_cell_has_no_flags_set() {
        let state = CellState::default();
        assert!(!state.visited);
        assert!(!state.path_south);
        assert!(!state.path_east);
        assert!(!state.backtrack);
    }
}
