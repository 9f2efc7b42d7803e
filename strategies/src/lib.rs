pub mod input_strategy;
pub mod mirror_strategy;

use rand::{rngs::ThreadRng, Rng};
use types::{GameError, Move, Strategy};

pub use crate::input_strategy::InputStrategy;
pub use crate::mirror_strategy::MirrorStrategy;

#[derive(Debug, Default)]
pub struct RandomStrategy {
    rng: ThreadRng,
}

impl Strategy for RandomStrategy {
    fn select_move(&mut self) -> Result<Move, GameError> {
        Ok(self.rng.gen())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn random_strategy_reaches_every_move() {
        let mut strategy = RandomStrategy::default();
        let seen: HashSet<Move> = (0..500)
            .map(|_| strategy.select_move().unwrap())
            .collect();
        assert_eq!(seen.len(), Move::ALL.len());
    }
}
