use crate::Player;
use crate::board::{BOARD_SIZE, Board, Move};
use crate::error::{Error, Result};
use crate::minimax::{DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
use crate::rules::has_won;

/// The position a single search call explores.
///
/// The node owns a private copy of the board. Every hypothetical move is placed,
/// searched below and cleared again before the next sibling is tried, so the board
/// is back to its starting position whenever a method returns.
#[derive(Debug, Clone)]
pub struct SearchNode {
    board: Board,
    /// Positions evaluated so far, terminal ones included.
    visits: u64,
}

impl SearchNode {
    pub fn new(board: Board) -> Self {
        Self { board, visits: 0 }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The number of positions scored since this node was created.
    pub fn visits(&self) -> u64 {
        self.visits
    }

    /// The fixed score of a finished game, from the automated player's side.
    pub fn terminal_score(&self) -> Option<i32> {
        if has_won(&self.board, Player::PlayerOne) {
            Some(LOSS_SCORE)
        } else if has_won(&self.board, Player::PlayerTwo) {
            Some(WIN_SCORE)
        } else if self.board.is_full() {
            Some(DRAW_SCORE)
        } else {
            None
        }
    }

    /// Plain minimax over every continuation.
    ///
    /// The automated player maximizes, the human player minimizes.
    pub fn minimax(&mut self, to_move: Player) -> i32 {
        self.visits += 1;
        if let Some(score) = self.terminal_score() {
            return score;
        }

        let maximizing = to_move == Player::AUTOMATED;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for index in 0..BOARD_SIZE * BOARD_SIZE {
            let (row, col) = (index / BOARD_SIZE, index % BOARD_SIZE);
            if !self.board.apply_move(row, col, to_move) {
                continue;
            }
            let score = self.minimax(to_move.opponent());
            self.board.clear_cell(row, col);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }

    /// Minimax with alpha-beta cutoffs.
    ///
    /// Fail-soft: a result `<= alpha` is an upper bound of the true score, a result
    /// `>= beta` a lower bound, anything in between is exact.
    pub fn alpha_beta(&mut self, to_move: Player, mut alpha: i32, mut beta: i32) -> i32 {
        self.visits += 1;
        if let Some(score) = self.terminal_score() {
            return score;
        }

        let maximizing = to_move == Player::AUTOMATED;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for index in 0..BOARD_SIZE * BOARD_SIZE {
            let (row, col) = (index / BOARD_SIZE, index % BOARD_SIZE);
            if !self.board.apply_move(row, col, to_move) {
                continue;
            }
            let score = self.alpha_beta(to_move.opponent(), alpha, beta);
            self.board.clear_cell(row, col);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if beta <= alpha {
                break;
            }
        }

        best
    }

    /// Scores the automated player's candidate move `b_move`, with the human player
    /// replying.
    ///
    /// With pruning, `alpha` is the best score already secured by an earlier root
    /// move; the result is exact whenever it exceeds `alpha`. A move onto a taken or
    /// off-grid cell is rejected with [`Error::IllegalMove`].
    pub fn score_move(
        &mut self,
        b_move: Move,
        use_alpha_beta_pruning: bool,
        alpha: i32,
    ) -> Result<i32> {
        if !self.board.apply_move(b_move.row, b_move.col, Player::AUTOMATED) {
            return Err(Error::IllegalMove {
                row: b_move.row,
                col: b_move.col,
                reason: "the cell is taken or off the board",
            });
        }

        let score = if use_alpha_beta_pruning {
            self.alpha_beta(Player::HUMAN, alpha, i32::MAX)
        } else {
            self.minimax(Player::HUMAN)
        };
        self.board.clear_cell(b_move.row, b_move.col);
        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use crate::Player;
    use crate::board::{Board, Move};
    use crate::error::Error;
    use crate::minimax::{DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
    use crate::search_node::SearchNode;

    #[test]
    fn terminal_scores_follow_the_winner() {
        let human_won = Board::from_rows([[1, 1, 1], [2, 2, 0], [0, 0, 0]]).unwrap();
        let engine_won = Board::from_rows([[1, 1, 0], [2, 2, 2], [1, 0, 0]]).unwrap();
        let draw = Board::from_rows([[1, 2, 1], [1, 2, 2], [2, 1, 1]]).unwrap();

        assert_eq!(SearchNode::new(human_won).terminal_score(), Some(LOSS_SCORE));
        assert_eq!(SearchNode::new(engine_won).terminal_score(), Some(WIN_SCORE));
        assert_eq!(SearchNode::new(draw).terminal_score(), Some(DRAW_SCORE));
        assert_eq!(SearchNode::new(Board::new()).terminal_score(), None);
    }

    #[test]
    fn terminal_node_is_not_expanded() {
        let draw = Board::from_rows([[1, 2, 1], [1, 2, 2], [2, 1, 1]]).unwrap();
        let mut node = SearchNode::new(draw);

        let score = node.minimax(Player::PlayerTwo);

        assert_eq!(score, DRAW_SCORE);
        assert_eq!(node.visits(), 1);
    }

    #[test]
    fn search_restores_the_board() {
        // arrange
        let board = Board::from_rows([[1, 0, 0], [0, 2, 0], [0, 0, 1]]).unwrap();
        let mut node = SearchNode::new(board);

        // act
        node.minimax(Player::PlayerTwo);
        node.alpha_beta(Player::PlayerTwo, i32::MIN, i32::MAX);
        node.score_move(Move { row: 0, col: 1 }, true, i32::MIN).unwrap();

        // assert
        assert_eq!(*node.board(), board);
    }

    #[test]
    fn empty_board_is_a_draw_with_best_play() {
        let mut plain = SearchNode::new(Board::new());
        let mut pruned = SearchNode::new(Board::new());

        assert_eq!(plain.minimax(Player::PlayerOne), DRAW_SCORE);
        assert_eq!(pruned.alpha_beta(Player::PlayerOne, i32::MIN, i32::MAX), DRAW_SCORE);
        // Every legal game, counting each prefix once.
        assert_eq!(plain.visits(), 549_946);
        assert!(pruned.visits() < plain.visits());
    }

    #[test]
    fn occupied_candidate_is_rejected() {
        let board = Board::from_rows([[1, 0, 0], [0, 0, 0], [0, 0, 0]]).unwrap();
        let mut node = SearchNode::new(board);

        let result = node.score_move(Move { row: 0, col: 0 }, false, i32::MIN);

        assert!(matches!(
            result,
            Err(Error::IllegalMove { row: 0, col: 0, .. })
        ));
        assert_eq!(node.visits(), 0);
        assert_eq!(*node.board(), board);
    }

    #[test]
    fn off_grid_candidate_is_rejected() {
        let mut node = SearchNode::new(Board::new());

        let result = node.score_move(Move { row: 3, col: 1 }, true, i32::MIN);

        assert!(matches!(result, Err(Error::IllegalMove { row: 3, .. })));
    }
}
