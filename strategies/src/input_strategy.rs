use itertools::Itertools;
use types::{GameError, Move, SharedConsole, Strategy};

#[derive(Debug)]
pub struct InputStrategy {
    console: SharedConsole,
    prompt: String,
}

impl InputStrategy {
    pub fn new(console: SharedConsole) -> Self {
        let options = Move::ALL.iter().join(", ");
        Self {
            console,
            prompt: format!("Enter your move ({options}):"),
        }
    }
}

impl Strategy for InputStrategy {
    fn select_move(&mut self) -> Result<Move, GameError> {
        let mut console = self.console.borrow_mut();
        loop {
            console.write_line(&self.prompt)?;
            let line = console.read_line()?;
            match line.parse::<Move>() {
                Ok(mv) => return Ok(mv),
                Err(err) => {
                    log::warn!("Error parsing move from input: {err}");
                    console.write_line(&format!("Invalid move: {}", line.trim()))?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use types::{ScriptedConsole, StreamConsole};

    use super::*;

    #[test]
    fn accepts_a_canonical_label() {
        let console = Rc::new(RefCell::new(ScriptedConsole::new(["SCISSORS"])));
        let mut strategy = InputStrategy::new(console.clone());
        assert_eq!(strategy.select_move().unwrap(), Move::Scissors);
        assert_eq!(
            console.borrow().output(),
            ["Enter your move (ROCK, PAPER, SCISSORS):".to_string()]
        );
    }

    #[test]
    fn reprompts_after_bad_input() {
        let console = Rc::new(RefCell::new(ScriptedConsole::new([
            "rock", "LIZARD", " PAPER ",
        ])));
        let mut strategy = InputStrategy::new(console.clone());
        assert_eq!(strategy.select_move().unwrap(), Move::Paper);

        let console = console.borrow();
        let errors: Vec<_> = console
            .output()
            .iter()
            .filter(|line| line.starts_with("Invalid move"))
            .collect();
        assert_eq!(errors, ["Invalid move: rock", "Invalid move: LIZARD"]);
        assert_eq!(console.remaining_input(), 0);
    }

    #[test]
    fn reprompts_after_undecodable_bytes() {
        let input: &'static [u8] = b"\xff\xfeROCK\nROCK\n";
        let console = Rc::new(RefCell::new(StreamConsole::new(input, Vec::new())));
        let mut strategy = InputStrategy::new(console.clone());
        assert_eq!(strategy.select_move().unwrap(), Move::Rock);

        let console = console.borrow();
        let written = String::from_utf8_lossy(console.writer());
        assert_eq!(written.matches("Enter your move").count(), 2);
        assert_eq!(written.matches("Invalid move: ").count(), 1);
    }

    #[test]
    fn closed_input_propagates() {
        let console = Rc::new(RefCell::new(ScriptedConsole::new(["nonsense"])));
        let mut strategy = InputStrategy::new(console);
        assert!(matches!(strategy.select_move(), Err(GameError::InputClosed)));
    }
}
