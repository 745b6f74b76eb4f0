//! The sliding-tile (N²−1) puzzle as a search problem.

use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::{
    error::{BoardError, Result},
    search::space::{Heuristic, StateSpace},
};

pub type Tile = u8;

/// The tile value that marks the empty square.
pub const BLANK: Tile = 0;

/// The four blank moves, in the fixed order neighbours are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// One configuration of the puzzle grid.
///
/// A board is an immutable value: moves produce new boards. Construction
/// validates the permutation invariant (every value in `0..width²` exactly
/// once, so exactly one blank), which every other method then relies on.
///
/// Note that construction does not check reachability. Half of all
/// permutations lie in a component disconnected from the solved board; use
/// [`Board::is_solvable`] to tell the halves apart before searching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    width: usize,
    tiles: Vec<Tile>,
}

impl Board {
    /// Builds a board from a row-major tile sequence for the given width.
    pub fn new(width: usize, tiles: Vec<Tile>) -> Result<Self> {
        if width == 0 {
            // A zero-width board would pass the length and permutation scans
            // vacuously and violate the one-blank invariant.
            return Err(BoardError::ZeroWidth.into());
        }
        let expected = width * width;
        if tiles.len() != expected {
            return Err(BoardError::WrongLength {
                len: tiles.len(),
                expected,
                width,
            }
            .into());
        }

        let mut seen = vec![false; expected];
        for &tile in &tiles {
            let slot = seen
                .get_mut(tile as usize)
                .ok_or(BoardError::TileOutOfRange { tile, width })?;
            if *slot {
                return Err(BoardError::DuplicateTile { tile }.into());
            }
            *slot = true;
        }

        Ok(Self { width, tiles })
    }

    /// Builds a board from a row-major tile sequence, inferring the width.
    pub fn from_tiles(tiles: Vec<Tile>) -> Result<Self> {
        let len = tiles.len();
        let mut width = (len as f64).sqrt() as usize;
        while width * width < len {
            width += 1;
        }
        if width * width != len {
            return Err(BoardError::NotSquare { len }.into());
        }
        Self::new(width, tiles)
    }

    /// The solved configuration: tiles in ascending order, blank last.
    ///
    /// Tile values are bytes, so widths above 16 are unrepresentable.
    pub fn goal(width: usize) -> Board {
        assert!((1..=16).contains(&width));
        let count = width * width;
        let mut tiles: Vec<Tile> = (1..count).map(|t| t as Tile).collect();
        tiles.push(BLANK);
        Board { width, tiles }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Row-major index of the blank. The permutation invariant guarantees
    /// exactly one.
    pub fn blank_index(&self) -> usize {
        self.tiles.iter().position(|&t| t == BLANK).unwrap()
    }

    /// The board produced by sliding a tile into the blank from `dir`,
    /// or `None` if the blank sits on that edge of the grid.
    pub fn slide(&self, dir: Direction) -> Option<Board> {
        let blank = self.blank_index();
        let row = (blank / self.width) as isize;
        let col = (blank % self.width) as isize;
        let (dr, dc) = dir.offset();
        let (new_row, new_col) = (row + dr, col + dc);

        let bound = self.width as isize;
        if new_row < 0 || new_row >= bound || new_col < 0 || new_col >= bound {
            return None;
        }

        let target = (new_row * bound + new_col) as usize;
        let mut tiles = self.tiles.clone();
        tiles.swap(blank, target);
        Some(Board {
            width: self.width,
            tiles,
        })
    }

    /// All boards one move away, in [`Direction::ALL`] order.
    pub fn neighbors(&self) -> Vec<Board> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| self.slide(dir))
            .collect()
    }

    pub fn is_goal(&self) -> bool {
        let count = self.tiles.len();
        self.tiles
            .iter()
            .enumerate()
            .all(|(i, &t)| t as usize == (i + 1) % count)
    }

    /// Sum over non-blank tiles of the taxicab distance from the tile's
    /// position to its solved position. Admissible (every move shifts one
    /// tile by one square) and consistent (a move changes the sum by at
    /// most one).
    pub fn manhattan(&self) -> u32 {
        let width = self.width;
        let mut dist = 0;
        for (idx, &tile) in self.tiles.iter().enumerate() {
            if tile == BLANK {
                continue;
            }
            let goal_idx = tile as usize - 1;
            let row_delta = (idx / width).abs_diff(goal_idx / width);
            let col_delta = (idx % width).abs_diff(goal_idx % width);
            dist += (row_delta + col_delta) as u32;
        }
        dist
    }

    fn inversions(&self) -> usize {
        let mut inversions = 0;
        for (idx, &tile) in self.tiles.iter().enumerate() {
            if tile == BLANK {
                continue;
            }
            for &later in &self.tiles[idx + 1..] {
                if later != BLANK && later < tile {
                    inversions += 1;
                }
            }
        }
        inversions
    }

    /// Whether the solved board is reachable from this one.
    ///
    /// Moves preserve the parity of the tile permutation on odd-width grids;
    /// on even-width grids they couple it to the blank's row. The resulting
    /// invariant splits the permutations into a reachable and an unreachable
    /// half.
    pub fn is_solvable(&self) -> bool {
        let inversions = self.inversions();
        if self.width % 2 == 1 {
            inversions % 2 == 0
        } else {
            let blank_row_from_bottom = self.width - self.blank_index() / self.width;
            (inversions + blank_row_from_bottom) % 2 == 1
        }
    }

    /// A board scrambled by a random walk of `steps` moves from the solved
    /// configuration, never immediately undoing the previous move. Always
    /// solvable by construction.
    pub fn scrambled<R: Rng>(width: usize, steps: usize, rng: &mut R) -> Board {
        let mut board = Board::goal(width);
        let mut last: Option<Direction> = None;

        for _ in 0..steps {
            let mut options: Vec<(Direction, Board)> = Direction::ALL
                .iter()
                .filter(|&&dir| last != Some(dir.opposite()))
                .filter_map(|&dir| board.slide(dir).map(|next| (dir, next)))
                .collect();
            if options.is_empty() {
                break;
            }
            let (dir, next) = options.swap_remove(rng.gen_range(0..options.len()));
            board = next;
            last = Some(dir);
        }
        board
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.width) {
            for (i, &tile) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                if tile == BLANK {
                    write!(f, " .")?;
                } else {
                    write!(f, "{tile:2}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// [`StateSpace`] adapter for the sliding-tile domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlidingTiles;

impl StateSpace for SlidingTiles {
    type State = Board;

    fn neighbors(&self, state: &Board) -> Vec<Board> {
        state.neighbors()
    }
}

/// The Manhattan-distance heuristic over [`Board`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanDistance;

impl Heuristic<SlidingTiles> for ManhattanDistance {
    fn estimate(&self, state: &Board) -> u32 {
        state.manhattan()
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, Direction, BLANK};
    use crate::error::BoardError;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn rejects_an_empty_tile_vector() {
        // Without the width guard this would construct a blankless board
        // whose neighbour generation panics on the missing blank.
        let err = Board::from_tiles(vec![]).unwrap_err();
        assert!(matches!(
            err.as_board_error(),
            Some(BoardError::ZeroWidth)
        ));

        let err = Board::new(0, Vec::new()).unwrap_err();
        assert!(matches!(
            err.as_board_error(),
            Some(BoardError::ZeroWidth)
        ));
    }

    #[test]
    fn rejects_wrong_length() {
        let err = Board::new(3, vec![1, 2, 3, 0]).unwrap_err();
        assert!(matches!(
            err.as_board_error(),
            Some(BoardError::WrongLength {
                len: 4,
                expected: 9,
                ..
            })
        ));
    }

    #[test]
    fn rejects_non_square_tile_counts() {
        let err = Board::from_tiles(vec![0, 1, 2, 3, 4, 5]).unwrap_err();
        assert!(matches!(
            err.as_board_error(),
            Some(BoardError::NotSquare { len: 6 })
        ));
    }

    #[test]
    fn rejects_duplicate_tiles() {
        let err = Board::from_tiles(vec![1, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap_err();
        assert!(matches!(
            err.as_board_error(),
            Some(BoardError::DuplicateTile { tile: 1 })
        ));
    }

    #[test]
    fn rejects_out_of_range_tiles() {
        let err = Board::from_tiles(vec![1, 2, 3, 4, 5, 6, 7, 9, 0]).unwrap_err();
        assert!(matches!(
            err.as_board_error(),
            Some(BoardError::TileOutOfRange { tile: 9, width: 3 })
        ));
    }

    #[test]
    fn goal_is_ascending_with_trailing_blank() {
        let goal = Board::goal(3);
        assert_eq!(goal.tiles(), &[1, 2, 3, 4, 5, 6, 7, 8, BLANK]);
        assert!(goal.is_goal());
        assert_eq!(goal.blank_index(), 8);
    }

    #[test]
    fn neighbour_count_depends_on_blank_position() {
        // Blank in a corner, on an edge, and in the centre.
        let corner = Board::from_tiles(vec![0, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let edge = Board::from_tiles(vec![1, 0, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let centre = Board::from_tiles(vec![1, 2, 3, 4, 0, 5, 6, 7, 8]).unwrap();

        assert_eq!(corner.neighbors().len(), 2);
        assert_eq!(edge.neighbors().len(), 3);
        assert_eq!(centre.neighbors().len(), 4);
    }

    #[test]
    fn neighbours_are_generated_in_direction_order() {
        let centre = Board::from_tiles(vec![1, 2, 3, 4, 0, 5, 6, 7, 8]).unwrap();
        let expected: Vec<Board> = Direction::ALL
            .iter()
            .map(|&d| centre.slide(d).unwrap())
            .collect();
        assert_eq!(centre.neighbors(), expected);
    }

    #[test]
    fn sliding_is_symmetric() {
        let board = Board::from_tiles(vec![1, 2, 3, 4, 0, 5, 6, 7, 8]).unwrap();
        let moved = board.slide(Direction::Up).unwrap();
        assert_eq!(moved.slide(Direction::Down), Some(board));
    }

    #[test]
    fn manhattan_of_goal_is_zero() {
        assert_eq!(Board::goal(3).manhattan(), 0);
        assert_eq!(Board::goal(4).manhattan(), 0);
    }

    #[test]
    fn manhattan_counts_tile_displacement() {
        // Tile 8 and the blank swapped: tile 8 is one square from home.
        let board = Board::from_tiles(vec![1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        assert_eq!(board.manhattan(), 1);

        // Tile 1 in the far corner: two rows and two columns away.
        let board = Board::from_tiles(vec![0, 2, 3, 4, 5, 6, 7, 8, 1]).unwrap();
        assert_eq!(board.manhattan(), 4);
    }

    #[test]
    fn manhattan_changes_by_at_most_one_per_move() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let board = Board::scrambled(3, 30, &mut rng);
        let h = board.manhattan() as i64;
        for neighbour in board.neighbors() {
            assert!((neighbour.manhattan() as i64 - h).abs() <= 1);
        }
    }

    #[test]
    fn parity_separates_the_two_components() {
        assert!(Board::goal(3).is_solvable());
        let swapped = Board::from_tiles(vec![2, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap();
        assert!(!swapped.is_solvable());

        assert!(Board::goal(4).is_solvable());
        let swapped = Board::from_tiles(vec![
            2, 1, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0,
        ])
        .unwrap();
        assert!(!swapped.is_solvable());
    }

    #[test]
    fn scrambles_stay_solvable() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for steps in [0, 1, 7, 40] {
            let board = Board::scrambled(3, steps, &mut rng);
            assert!(board.is_solvable(), "scramble of {steps} steps");
        }
    }

    #[test]
    fn display_renders_the_grid() {
        let board = Board::from_tiles(vec![1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        let rendered = board.to_string();
        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.contains('.'));
    }
}
