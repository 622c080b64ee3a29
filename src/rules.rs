use crate::board::{BOARD_SIZE, Board, Cell};
use crate::{GameState, Player};

/// The 8 lines that win the game: rows, columns, then both diagonals.
pub const WINNING_LINES: [[(usize, usize); BOARD_SIZE]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Returns `true` if `player` owns all three cells of any winning line.
pub fn has_won(board: &Board, player: Player) -> bool {
    let mark = Cell::Occupied(player);
    WINNING_LINES
        .iter()
        .any(|line| board.line(line).iter().all(|cell| *cell == mark))
}

/// Returns the player holding a winning line, if any.
///
/// On a board reached by legal play at most one player can have a line; if both
/// somehow do, `PlayerOne` is reported.
pub fn winner(board: &Board) -> Option<Player> {
    [Player::PlayerOne, Player::PlayerTwo]
        .into_iter()
        .find(|player| has_won(board, *player))
}

/// A full board that nobody has won.
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
        && !has_won(board, Player::PlayerOne)
        && !has_won(board, Player::PlayerTwo)
}

pub fn is_game_over(board: &Board) -> bool {
    has_won(board, Player::PlayerOne) || has_won(board, Player::PlayerTwo) || board.is_full()
}

/// Classifies the board as in progress, won or drawn.
pub fn evaluate(board: &Board) -> GameState {
    match winner(board) {
        Some(player) => GameState::Won(player),
        None if board.is_full() => GameState::Draw,
        None => GameState::InProgress,
    }
}
