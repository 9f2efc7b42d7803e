use std::{
    cell::RefCell,
    fmt::Debug,
    rc::{Rc, Weak},
};

use rand::{thread_rng, Rng};

use crate::{Console, GameError, Move, MoveHistory, SharedConsole};

pub trait Strategy: Debug {
    fn select_move(&mut self) -> Result<Move, GameError>;
}

pub type NameHandle = Weak<RefCell<String>>;

pub const GENERATED_NAME_DIGITS: usize = 3;

/// How a player picks its name during the initialization phase.
#[derive(Debug)]
pub enum NameSource {
    Prompt(SharedConsole),
    Generated { prefix: String },
}

#[derive(Debug)]
pub struct Player {
    name: Rc<RefCell<String>>,
    strategy: Box<dyn Strategy>,
    name_source: NameSource,
}

impl Player {
    pub fn new(
        name: &str,
        strategy: Box<dyn Strategy>,
        name_source: NameSource,
    ) -> Result<Self, GameError> {
        validate_name(name)?;
        Ok(Self {
            name: Rc::new(RefCell::new(name.to_string())),
            strategy,
            name_source,
        })
    }

    pub fn name(&self) -> String {
        self.name.borrow().clone()
    }

    pub fn name_handle(&self) -> NameHandle {
        Rc::downgrade(&self.name)
    }

    /// Rejects empty names without touching the current one.
    pub fn set_name(&mut self, name: &str) -> Result<(), GameError> {
        validate_name(name)?;
        *self.name.borrow_mut() = name.to_string();
        Ok(())
    }

    pub fn initialize_name(&mut self) -> Result<String, GameError> {
        match &self.name_source {
            NameSource::Prompt(console) => {
                let console = Rc::clone(console);
                loop {
                    let mut console = console.borrow_mut();
                    console.write_line(&format!("Enter new name for player {}", self.name()))?;
                    let line = console.read_line()?;
                    match self.set_name(&line) {
                        Ok(()) => break,
                        Err(err @ GameError::InvalidName) => {
                            log::warn!("Rejected player name {line:?}: {err}");
                            console.write_line(&err.to_string())?;
                        }
                        Err(err) => return Err(err),
                    }
                }
            }
            NameSource::Generated { prefix } => {
                let name = generate_name(prefix, &mut thread_rng());
                self.set_name(&name)?;
            }
        }
        log::info!("Player name set to {}", self.name());
        Ok(self.name())
    }

    pub fn select_move(&mut self) -> Result<Move, GameError> {
        self.strategy.select_move()
    }

    pub fn report(
        &self,
        history: &MoveHistory,
        console: &mut dyn Console,
    ) -> Result<(), GameError> {
        let name = self.name();
        let mv = history.expect_move(&name)?;
        console.write_line(&format!("{name}: {mv}"))
    }
}

fn validate_name(name: &str) -> Result<(), GameError> {
    if name.is_empty() {
        return Err(GameError::InvalidName);
    }
    Ok(())
}

/// Each digit is sampled on its own, so leading zeros are kept.
pub fn generate_name<R: Rng + ?Sized>(prefix: &str, rng: &mut R) -> String {
    let mut name = String::with_capacity(prefix.len() + GENERATED_NAME_DIGITS);
    name.push_str(prefix);
    for _ in 0..GENERATED_NAME_DIGITS {
        let digit = rng.gen_range(0..10);
        name.push(char::from_digit(digit, 10).expect("digit is below the radix"));
    }
    name
}
