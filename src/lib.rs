//! A tic-tac-toe engine with an optimal automated opponent.
//!
//! The crate covers the game core only: the 3x3 board, terminal-state detection,
//! and an exhaustive minimax search (with optional alpha-beta pruning) that picks a
//! guaranteed-optimal move for the automated side. Rendering and input handling are
//! left to whoever drives a [`game::Game`].
//!
//! # Example
//!
//! ```rust
//! use tictactoe_engine::game::new_game;
//! use tictactoe_engine::GameState;
//!
//! // The human side always moves first.
//! let mut game = new_game();
//! let outcome = game.submit_human_move(0, 0);
//! assert!(outcome.accepted);
//! assert_eq!(outcome.state, GameState::InProgress);
//!
//! // Let the engine answer.
//! let reply = game.compute_automated_move().unwrap();
//! let state = game.apply_automated_move(reply).unwrap();
//!
//! println!("The engine played {:?}, game is {:?}", reply, state);
//! ```

use std::fmt;

/// The 3x3 grid, its cells and moves.
pub mod board;
/// Search configuration loaded from code or TOML.
pub mod config;
/// The crate-wide error type.
pub mod error;
/// The game controller the presentation layer drives.
pub mod game;
/// Minimax search for the automated player, plain or alpha-beta pruned.
pub mod minimax;
/// Random move pickers, used for demos and playout tests.
pub mod random;
/// Win, draw and game-over detection.
pub mod rules;
/// The mutable board walked by a single search call.
pub mod search_node;

pub use error::{Error, Result};

/// The two sides of the game.
///
/// `PlayerOne` is the human-controlled side and always moves first. `PlayerTwo` is
/// the automated side the search plays for.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Player {
    /// The human player, drawn as `X`.
    PlayerOne = 1,
    /// The automated player, drawn as `O`.
    PlayerTwo = 2,
}

impl Player {
    /// The side controlled by the person at the keyboard.
    pub const HUMAN: Player = Player::PlayerOne;
    /// The side controlled by the search.
    pub const AUTOMATED: Player = Player::PlayerTwo;

    /// Returns the other player.
    pub fn opponent(self) -> Player {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }

    /// The mark used when rendering a board.
    pub fn symbol(self) -> char {
        match self {
            Player::PlayerOne => 'X',
            Player::PlayerTwo => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Where a game stands.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum GameState {
    /// Moves are still accepted.
    InProgress,
    /// The given player completed a line.
    Won(Player),
    /// The board filled up without a winner.
    Draw,
}

impl GameState {
    /// Returns `true` for every state other than `InProgress`.
    pub fn is_over(self) -> bool {
        !matches!(self, GameState::InProgress)
    }
}
