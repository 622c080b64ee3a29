use crate::Player;
use crate::board::{Board, Move};
use crate::config::SearchConfig;
use crate::error::{Error, Result};
use crate::rules::is_game_over;
use crate::search_node::SearchNode;
use rayon::prelude::*;
use tracing::{debug, trace};

/// Score of a finished game the automated player won.
pub const WIN_SCORE: i32 = 1;
/// Score of a finished game the human player won.
pub const LOSS_SCORE: i32 = -1;
/// Score of a drawn game.
pub const DRAW_SCORE: i32 = 0;

/// The outcome of a search from the automated player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The first move, in row-major order, that reaches `score`.
    pub best_move: Move,
    /// The game-theoretic value of the position with both sides playing perfectly.
    pub score: i32,
    /// Positions evaluated below the root.
    pub nodes_visited: u64,
}

/// Exhaustive minimax search for the automated player.
///
/// Scores are `+1` for a win, `-1` for a loss and `0` for a draw, regardless of how
/// many moves it takes to get there. Among equally scored moves the one that comes
/// first in row-major order is played. Alpha-beta pruning and the parallel root
/// only change how much work is done, never the move that comes out.
#[derive(Debug, Clone)]
pub struct MinimaxSearch {
    use_alpha_beta_pruning: bool,
    parallel_root: bool,
}

impl Default for MinimaxSearch {
    fn default() -> Self {
        MinimaxSearchBuilder::new().build()
    }
}

/// A builder for creating instances of `MinimaxSearch`.
pub struct MinimaxSearchBuilder {
    use_alpha_beta_pruning: bool,
    parallel_root: bool,
}

impl MinimaxSearchBuilder {
    /// Starts from the defaults of [`SearchConfig`].
    pub fn new() -> Self {
        let config = SearchConfig::default();
        Self {
            use_alpha_beta_pruning: config.alpha_beta_pruning,
            parallel_root: config.parallel_root,
        }
    }

    /// Enables or disables alpha-beta pruning.
    pub fn with_alpha_beta_pruning(mut self, use_abp: bool) -> Self {
        self.use_alpha_beta_pruning = use_abp;
        self
    }

    /// Scores root moves in parallel, each on its own board copy.
    pub fn with_parallel_root(mut self, parallel: bool) -> Self {
        self.parallel_root = parallel;
        self
    }

    pub fn build(self) -> MinimaxSearch {
        MinimaxSearch::new(self.use_alpha_beta_pruning, self.parallel_root)
    }
}

impl Default for MinimaxSearchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MinimaxSearch {
    /// Returns a new builder for `MinimaxSearch`.
    pub fn builder() -> MinimaxSearchBuilder {
        MinimaxSearchBuilder::new()
    }

    pub fn new(use_alpha_beta_pruning: bool, parallel_root: bool) -> Self {
        Self {
            use_alpha_beta_pruning,
            parallel_root,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.alpha_beta_pruning, config.parallel_root)
    }

    pub fn uses_alpha_beta_pruning(&self) -> bool {
        self.use_alpha_beta_pruning
    }

    pub fn uses_parallel_root(&self) -> bool {
        self.parallel_root
    }

    /// Finds the optimal move for the automated player on `board`.
    ///
    /// The board must still be in play: searching a won or full board is a caller
    /// bug and yields [`Error::PreconditionViolation`]. The caller's board is never
    /// modified.
    pub fn best_move(&self, board: &Board) -> Result<SearchResult> {
        Self::check_searchable(board)?;

        let result = if self.parallel_root {
            self.search_parallel(board)?
        } else {
            self.search_sequential(board)?
        }
        .ok_or(Error::PreconditionViolation("no empty cell to play"))?;

        debug!(
            row = result.best_move.row,
            col = result.best_move.col,
            score = result.score,
            nodes = result.nodes_visited,
            "search finished"
        );
        Ok(result)
    }

    /// Scores every legal move of the automated player, in row-major order.
    ///
    /// Each score is exact, also with pruning enabled.
    pub fn scored_moves(&self, board: &Board) -> Result<Vec<(Move, i32)>> {
        Self::check_searchable(board)?;

        let mut node = SearchNode::new(*board);
        board
            .empty_cells()
            .map(|b_move| -> Result<(Move, i32)> {
                let score = node.score_move(b_move, self.use_alpha_beta_pruning, i32::MIN)?;
                Ok((b_move, score))
            })
            .collect()
    }

    /// Returns the minimax value of `board` with `to_move` on turn, from the
    /// automated player's side. Finished boards return their fixed score.
    pub fn score_position(&self, board: &Board, to_move: Player) -> i32 {
        let mut node = SearchNode::new(*board);
        if self.use_alpha_beta_pruning {
            node.alpha_beta(to_move, i32::MIN, i32::MAX)
        } else {
            node.minimax(to_move)
        }
    }

    fn check_searchable(board: &Board) -> Result<()> {
        if is_game_over(board) {
            return Err(Error::PreconditionViolation(
                "search requires a board that is neither won nor full",
            ));
        }
        Ok(())
    }

    fn search_sequential(&self, board: &Board) -> Result<Option<SearchResult>> {
        let mut node = SearchNode::new(*board);
        let mut best: Option<(Move, i32)> = None;

        for b_move in board.empty_cells() {
            let alpha = best.map_or(i32::MIN, |(_, score)| score);
            let score = node.score_move(b_move, self.use_alpha_beta_pruning, alpha)?;
            trace!(row = b_move.row, col = b_move.col, score, "scored root move");

            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((b_move, score));
            }
        }

        Ok(best.map(|(best_move, score)| SearchResult {
            best_move,
            score,
            nodes_visited: node.visits(),
        }))
    }

    fn search_parallel(&self, board: &Board) -> Result<Option<SearchResult>> {
        let candidates: Vec<Move> = board.empty_cells().collect();
        let use_abp = self.use_alpha_beta_pruning;

        // Branches cannot share alpha, so each one is searched with a full window.
        let scored: Vec<(Move, i32, u64)> = candidates
            .par_iter()
            .map(|&b_move| -> Result<(Move, i32, u64)> {
                let mut node = SearchNode::new(*board);
                let score = node.score_move(b_move, use_abp, i32::MIN)?;
                Ok((b_move, score, node.visits()))
            })
            .collect::<Result<_>>()?;

        let nodes_visited: u64 = scored.iter().map(|(_, _, visits)| visits).sum();
        let best = pick_first_best(scored.iter().map(|&(b_move, score, _)| (b_move, score)));

        Ok(best.map(|(best_move, score)| SearchResult {
            best_move,
            score,
            nodes_visited,
        }))
    }
}

/// Keeps the first move whose score is strictly higher than everything before it.
fn pick_first_best(scored: impl Iterator<Item = (Move, i32)>) -> Option<(Move, i32)> {
    scored.fold(None, |best, (b_move, score)| match best {
        Some((_, best_score)) if score <= best_score => best,
        _ => Some((b_move, score)),
    })
}
