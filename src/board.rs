use crate::Player;
use crate::error::{Error, Result};
use std::fmt;

/// Number of rows and columns.
pub const BOARD_SIZE: usize = 3;
const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The content of a single square.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

/// A placement at `(row, col)`, both in `0..3`.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    /// Creates a move, rejecting coordinates that fall outside the grid.
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(Error::IllegalMove {
                row,
                col,
                reason: "coordinates outside the board",
            });
        }

        Ok(Self { row, col })
    }

    fn from_index(index: usize) -> Self {
        Self {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        }
    }
}

/// The 3x3 grid.
///
/// Cells are stored row-major in a 9-element array. A board only ever changes one
/// cell at a time, through [`Board::apply_move`] or [`Board::clear_cell`].
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub struct Board {
    field: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from the numeric encoding `0 = empty`, `1 = PlayerOne`,
    /// `2 = PlayerTwo`.
    pub fn from_rows(rows: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self> {
        let mut board = Self::new();
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                board.field[row * BOARD_SIZE + col] = match value {
                    0 => Cell::Empty,
                    1 => Cell::Occupied(Player::PlayerOne),
                    2 => Cell::Occupied(Player::PlayerTwo),
                    _ => return Err(Error::InvalidCell { row, col, value }),
                };
            }
        }
        Ok(board)
    }

    /// The inverse of [`Board::from_rows`].
    pub fn to_rows(&self) -> [[u8; BOARD_SIZE]; BOARD_SIZE] {
        let mut rows = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (i, cell) in self.field.iter().enumerate() {
            rows[i / BOARD_SIZE][i % BOARD_SIZE] = match cell {
                Cell::Empty => 0,
                Cell::Occupied(player) => *player as u8,
            };
        }
        rows
    }

    /// Returns the cell at `(row, col)`, or `None` off the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        Self::index(row, col).map(|i| self.field[i])
    }

    /// Returns `true` if `(row, col)` is on the grid and empty.
    pub fn is_empty_cell(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(Cell::Empty)
    }

    /// Writes `player` into `(row, col)` if that cell is empty.
    ///
    /// Returns `false` and leaves the board untouched when the cell is occupied or
    /// off the grid.
    pub fn apply_move(&mut self, row: usize, col: usize, player: Player) -> bool {
        match Self::index(row, col) {
            Some(i) if self.field[i] == Cell::Empty => {
                self.field[i] = Cell::Occupied(player);
                true
            }
            _ => false,
        }
    }

    /// Resets `(row, col)` to empty. Only meant for undoing a placement made by the
    /// same caller.
    pub fn clear_cell(&mut self, row: usize, col: usize) {
        if let Some(i) = Self::index(row, col) {
            self.field[i] = Cell::Empty;
        }
    }

    pub fn is_full(&self) -> bool {
        self.field.iter().all(|x| *x != Cell::Empty)
    }

    /// Iterates over the empty cells in row-major order.
    ///
    /// This order is also the search's tie-break order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        self.field
            .iter()
            .enumerate()
            .filter(|(_, x)| **x == Cell::Empty)
            .map(|(i, _)| Move::from_index(i))
    }

    /// Counts the marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.field
            .iter()
            .filter(|x| **x == Cell::Occupied(player))
            .count()
    }

    /// Returns a base-3 encoding of the position, unique per board.
    pub fn get_hash(&self) -> u32 {
        let mut hash = 0;
        for (i, &cell) in self.field.iter().enumerate() {
            let cell_value = match cell {
                Cell::Empty => 0,
                Cell::Occupied(Player::PlayerOne) => 1,
                Cell::Occupied(Player::PlayerTwo) => 2,
            };
            hash += cell_value * 3u32.pow(i as u32);
        }
        hash
    }

    /// Returns the three cells at the given positions.
    pub(crate) fn line(&self, line: &[(usize, usize); BOARD_SIZE]) -> [Cell; BOARD_SIZE] {
        (*line).map(|(row, col)| self.field[row * BOARD_SIZE + col])
    }

    fn index(row: usize, col: usize) -> Option<usize> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(row * BOARD_SIZE + col)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let symbol = match self.field[row * BOARD_SIZE + col] {
                    Cell::Empty => '.',
                    Cell::Occupied(player) => player.symbol(),
                };
                write!(f, "{}", symbol)?;
            }
            if row + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Player;
    use crate::board::{Board, Cell, Move};
    use crate::error::Error;

    #[test]
    fn apply_move_fills_only_empty_cells() {
        // arrange
        let mut board = Board::new();

        // act
        let first = board.apply_move(1, 1, Player::PlayerOne);
        let second = board.apply_move(1, 1, Player::PlayerTwo);

        // assert
        assert!(first);
        assert!(!second);
        assert_eq!(board.get(1, 1), Some(Cell::Occupied(Player::PlayerOne)));
        assert_eq!(board.count(Player::PlayerTwo), 0);
    }

    #[test]
    fn apply_move_off_the_grid_is_rejected() {
        let mut board = Board::new();

        assert!(!board.apply_move(3, 0, Player::PlayerOne));
        assert!(!board.apply_move(0, 7, Player::PlayerOne));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn clear_cell_undoes_a_placement() {
        let mut board = Board::new();
        board.apply_move(2, 0, Player::PlayerTwo);

        board.clear_cell(2, 0);

        assert_eq!(board, Board::new());
        assert!(board.is_empty_cell(2, 0));
    }

    #[test]
    fn is_full_only_when_no_empty_cell_is_left() {
        let almost = Board::from_rows([[1, 2, 1], [1, 2, 2], [2, 1, 0]]).unwrap();
        let full = Board::from_rows([[1, 2, 1], [1, 2, 2], [2, 1, 1]]).unwrap();

        assert!(!Board::new().is_full());
        assert!(!almost.is_full());
        assert!(full.is_full());
    }

    #[test]
    fn empty_cells_are_listed_row_major() {
        let board = Board::from_rows([[1, 0, 0], [2, 0, 1], [0, 2, 0]]).unwrap();

        let cells: Vec<Move> = board.empty_cells().collect();

        assert_eq!(
            cells,
            vec![
                Move { row: 0, col: 1 },
                Move { row: 0, col: 2 },
                Move { row: 1, col: 1 },
                Move { row: 2, col: 0 },
                Move { row: 2, col: 2 },
            ]
        );
    }

    #[test]
    fn from_rows_rejects_unknown_values() {
        let result = Board::from_rows([[0, 0, 0], [0, 3, 0], [0, 0, 0]]);

        assert!(matches!(
            result,
            Err(Error::InvalidCell {
                row: 1,
                col: 1,
                value: 3
            })
        ));
    }

    #[test]
    fn rows_survive_a_round_trip() {
        let rows = [[1, 1, 0], [2, 2, 0], [0, 0, 0]];

        assert_eq!(Board::from_rows(rows).unwrap().to_rows(), rows);
    }

    #[test]
    fn move_new_checks_bounds() {
        assert_eq!(Move::new(2, 2).unwrap(), Move { row: 2, col: 2 });
        assert!(matches!(
            Move::new(0, 3),
            Err(Error::IllegalMove { row: 0, col: 3, .. })
        ));
    }

    #[test]
    fn hash_distinguishes_players() {
        let mut x = Board::new();
        x.apply_move(0, 0, Player::PlayerOne);
        let mut o = Board::new();
        o.apply_move(0, 0, Player::PlayerTwo);

        assert_eq!(Board::new().get_hash(), 0);
        assert_eq!(x.get_hash(), 1);
        assert_eq!(o.get_hash(), 2);
    }

    #[test]
    fn display_draws_marks() {
        let board = Board::from_rows([[1, 0, 2], [0, 1, 0], [2, 0, 0]]).unwrap();

        assert_eq!(board.to_string(), "X.O\n.X.\nO..");
    }
}
