use rand::{rngs::ThreadRng, Rng};
use types::{player::NameHandle, GameError, Move, SharedHistory, Strategy};

/// Copies the opponent's last recorded move, or picks at random when there is none.
#[derive(Debug)]
pub struct MirrorStrategy {
    opponent: NameHandle,
    history: SharedHistory,
    rng: ThreadRng,
}

impl MirrorStrategy {
    pub fn new(opponent: NameHandle, history: SharedHistory) -> Self {
        Self {
            opponent,
            history,
            rng: ThreadRng::default(),
        }
    }

    fn opponent_last_move(&self) -> Option<Move> {
        let opponent = self.opponent.upgrade()?;
        let name = opponent.borrow();
        self.history.borrow().last_move(&name)
    }
}

impl Strategy for MirrorStrategy {
    fn select_move(&mut self) -> Result<Move, GameError> {
        match self.opponent_last_move() {
            Some(mv) => {
                log::debug!("Mirroring opponent move {mv}");
                Ok(mv)
            }
            None => {
                let mv: Move = self.rng.gen();
                log::debug!("No opponent move recorded, picked {mv} at random");
                Ok(mv)
            }
        }
    }
}
