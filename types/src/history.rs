use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{error::GameError, Move};

pub type SharedHistory = Rc<RefCell<MoveHistory>>;

// last move per player name
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveHistory {
    last_moves: HashMap<String, Move>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedHistory {
        Rc::new(RefCell::new(Self::new()))
    }

    pub fn record(&mut self, player: &str, mv: Move) {
        if let Some(previous) = self.last_moves.insert(player.to_string(), mv) {
            log::debug!("{player} replaced {previous} with {mv}");
        }
    }

    pub fn last_move(&self, player: &str) -> Option<Move> {
        self.last_moves.get(player).copied()
    }

    pub fn expect_move(&self, player: &str) -> Result<Move, GameError> {
        self.last_move(player)
            .ok_or_else(|| GameError::MissingHistoryEntry(player.to_string()))
    }

    pub fn len(&self) -> usize {
        self.last_moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_moves.is_empty()
    }
}
