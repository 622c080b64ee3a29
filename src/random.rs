use crate::board::{Board, Move};
use rand::Rng;

const MULTIPLIER_A: i64 = 1103515245;
const INCREMENT_C: i64 = 12345;
const DEFAULT_SEED: i64 = 3819201;

/// A source of random numbers for picking moves.
pub trait RandomGenerator: Default {
    /// Returns a number in `from..to`.
    fn next_range(&mut self, from: i32, to: i32) -> i32;

    fn get_random_from_slice<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_range(0, items.len() as i32) as usize)
    }
}

/// Backed by the thread-local generator of `rand`.
#[derive(Default)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        rand::rng().random_range(from..to)
    }
}

/// A linear congruential generator; the same seed always yields the same games.
pub struct CustomNumberGenerator {
    seed: i64,
}

impl Default for CustomNumberGenerator {
    fn default() -> Self {
        CustomNumberGenerator::new(DEFAULT_SEED)
    }
}

impl RandomGenerator for CustomNumberGenerator {
    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        (self.next() % (to - from)).abs() + from
    }
}

impl CustomNumberGenerator {
    pub const fn new(seed: i64) -> Self {
        Self { seed }
    }

    fn next(&mut self) -> i32 {
        self.seed = (self.seed * MULTIPLIER_A + INCREMENT_C) % (i32::MAX as i64);
        self.seed as i32
    }
}

/// Picks one of the empty cells of `board`, or `None` on a full board.
pub fn random_move<K: RandomGenerator>(board: &Board, rng: &mut K) -> Option<Move> {
    let moves: Vec<Move> = board.empty_cells().collect();
    rng.get_random_from_slice(&moves).copied()
}

#[cfg(test)]
mod tests {
    use crate::Player;
    use crate::board::{Board, Move};
    use crate::random::{
        CustomNumberGenerator, RandomGenerator, StandardRandomGenerator, random_move,
    };

    #[test]
    fn outputs_same_numbers() {
        let mut crg = CustomNumberGenerator::new(42);
        assert_eq!(crg.next_range(0, 10), 8);
        assert_eq!(crg.next_range(0, 10), 4);
        assert_eq!(crg.next_range(0, 10), 1);
        assert_eq!(crg.next_range(0, 10), 2);
        assert_eq!(crg.next_range(0, 10), 4);
    }

    #[test]
    fn seeded_moves_repeat() {
        let board = Board::from_rows([[1, 0, 2], [0, 1, 0], [2, 0, 0]]).unwrap();
        let mut first = CustomNumberGenerator::new(7);
        let mut second = CustomNumberGenerator::new(7);

        let a: Vec<Option<Move>> = (0..5).map(|_| random_move(&board, &mut first)).collect();
        let b: Vec<Option<Move>> = (0..5).map(|_| random_move(&board, &mut second)).collect();

        assert_eq!(a, b);
    }

    #[test]
    fn random_moves_land_on_empty_cells() {
        let mut board = Board::new();
        let mut rng = StandardRandomGenerator;
        let mut player = Player::PlayerOne;

        while let Some(m) = random_move(&board, &mut rng) {
            assert!(board.apply_move(m.row, m.col, player));
            player = player.opponent();
        }

        assert!(board.is_full());
    }

    #[test]
    fn full_board_has_no_random_move() {
        let board = Board::from_rows([[1, 2, 1], [1, 2, 2], [2, 1, 1]]).unwrap();

        assert_eq!(random_move(&board, &mut CustomNumberGenerator::default()), None);
    }
}
