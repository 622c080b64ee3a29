use crate::board::{Board, Move};
use crate::config::SearchConfig;
use crate::error::{Error, Result};
use crate::minimax::MinimaxSearch;
use crate::rules::evaluate;
use crate::{GameState, Player};
use tracing::{debug, info};

/// What happened to a human move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// `false` if the move was rejected and the board left as it was.
    pub accepted: bool,
    /// The state after the move, or the unchanged state if it was rejected.
    pub state: GameState,
}

/// One round of play.
///
/// Owns the board, whose turn it is and the current [`GameState`]. The human player
/// moves first; the turn passes to the other side after every accepted move that
/// leaves the game in progress. Once the game is won or drawn no further moves are
/// accepted; start a new `Game` to play again.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_player: Player,
    state: GameState,
    search: MinimaxSearch,
}

impl Default for Game {
    fn default() -> Self {
        Game::new(MinimaxSearch::default())
    }
}

/// Starts a fresh round: empty board, human to move, default search.
pub fn new_game() -> Game {
    Game::default()
}

impl Game {
    pub fn new(search: MinimaxSearch) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::HUMAN,
            state: GameState::InProgress,
            search,
        }
    }

    pub fn with_config(config: &SearchConfig) -> Self {
        Game::new(MinimaxSearch::from_config(config))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn current_state(&self) -> GameState {
        self.state
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Fails with [`Error::IllegalMove`] if the game is over, the coordinates are off
    /// the grid or the cell is taken; the game is left untouched in that case.
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<GameState> {
        if self.state.is_over() {
            debug!(row, col, state = ?self.state, "move rejected, game is over");
            return Err(Error::IllegalMove {
                row,
                col,
                reason: "the game is already over",
            });
        }

        let b_move = Move::new(row, col)?;
        let player = self.current_player;
        if !self.board.apply_move(b_move.row, b_move.col, player) {
            debug!(row, col, %player, "move rejected, cell is occupied");
            return Err(Error::IllegalMove {
                row,
                col,
                reason: "the cell is occupied",
            });
        }
        debug!(row, col, %player, "move applied\n{}", self.board);

        self.state = evaluate(&self.board);
        match self.state {
            GameState::InProgress => self.current_player = player.opponent(),
            GameState::Won(winner) => info!(%winner, "game won"),
            GameState::Draw => info!("game drawn"),
        }

        Ok(self.state)
    }

    /// Plays a move for the human player.
    ///
    /// Rejected when it is not the human's turn, the move is illegal or the game is
    /// over; the returned state is then the unchanged current state.
    pub fn submit_human_move(&mut self, row: usize, col: usize) -> MoveOutcome {
        if self.current_player != Player::HUMAN {
            debug!(row, col, "move rejected, not the human's turn");
            return self.rejected();
        }

        match self.submit_move(row, col) {
            Ok(state) => MoveOutcome {
                accepted: true,
                state,
            },
            Err(_) => self.rejected(),
        }
    }

    /// Asks the search for the automated player's reply without playing it.
    ///
    /// The game must be in progress with the automated player on turn; anything else
    /// is reported as [`Error::PreconditionViolation`].
    pub fn compute_automated_move(&self) -> Result<Move> {
        if self.state.is_over() {
            return Err(Error::PreconditionViolation(
                "automated move requested on a finished game",
            ));
        }
        if self.current_player != Player::AUTOMATED {
            return Err(Error::PreconditionViolation(
                "automated move requested on the human's turn",
            ));
        }

        Ok(self.search.best_move(&self.board)?.best_move)
    }

    /// Plays `b_move` for the automated player, normally the one returned by
    /// [`Game::compute_automated_move`].
    pub fn apply_automated_move(&mut self, b_move: Move) -> Result<GameState> {
        if self.current_player != Player::AUTOMATED {
            return Err(Error::PreconditionViolation(
                "automated move applied on the human's turn",
            ));
        }

        self.submit_move(b_move.row, b_move.col)
    }

    /// Computes and plays the automated player's reply in one step.
    pub fn request_automated_move(&mut self) -> Result<(Move, GameState)> {
        let b_move = self.compute_automated_move()?;
        let state = self.apply_automated_move(b_move)?;
        Ok((b_move, state))
    }

    fn rejected(&self) -> MoveOutcome {
        MoveOutcome {
            accepted: false,
            state: self.state,
        }
    }
}
