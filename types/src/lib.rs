pub mod console;
pub mod error;
pub mod game_move;
pub mod history;
pub mod player;

pub use console::{Console, ScriptedConsole, SharedConsole, StdConsole, StreamConsole};
pub use error::{GameError, ParseMoveError};
pub use game_move::Move;
pub use history::{MoveHistory, SharedHistory};
pub use player::{NameSource, Player, Strategy};
