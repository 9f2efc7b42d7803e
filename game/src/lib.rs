pub mod config;

use strategies::{InputStrategy, MirrorStrategy, RandomStrategy};
use types::{
    GameError, Move, MoveHistory, NameSource, Player, SharedConsole, SharedHistory, Strategy,
};

pub use crate::config::{BotKind, GameConfig, MirrorTiming};

pub const HUMAN_DEFAULT_NAME: &str = "CLIPlayer";

#[derive(Debug)]
pub struct Game {
    human: Player,
    bot: Player,
    history: SharedHistory,
    console: SharedConsole,
    mirror_timing: MirrorTiming,
    rounds_played: usize,
}

impl Game {
    pub fn new(config: &GameConfig, console: SharedConsole) -> Result<Self, GameError> {
        let history = MoveHistory::shared();
        let human = Player::new(
            HUMAN_DEFAULT_NAME,
            Box::new(InputStrategy::new(console.clone())),
            NameSource::Prompt(console.clone()),
        )?;

        let bot_strategy: Box<dyn Strategy> = match config.bot {
            BotKind::Mirror => Box::new(MirrorStrategy::new(human.name_handle(), history.clone())),
            BotKind::Random => Box::new(RandomStrategy::default()),
        };
        let prefix = config.bot.name_prefix();
        let bot = Player::new(
            prefix,
            bot_strategy,
            NameSource::Generated {
                prefix: prefix.to_string(),
            },
        )?;
        log::info!("Created game: {config:?}");

        Ok(Self {
            human,
            bot,
            history,
            console,
            mirror_timing: config.mirror_timing,
            rounds_played: 0,
        })
    }

    pub fn human(&self) -> &Player {
        &self.human
    }

    pub fn bot(&self) -> &Player {
        &self.bot
    }

    pub fn history(&self) -> MoveHistory {
        self.history.borrow().clone()
    }

    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Names the human first, then the bot, and announces the bot's name.
    pub fn initialize_names(&mut self) -> Result<(), GameError> {
        self.human.initialize_name()?;
        let bot_name = self.name_bot()?;
        self.console
            .borrow_mut()
            .write_line(&format!("Bot name: {bot_name}"))
    }

    // history is keyed by name, so the bot must not share the human's
    fn name_bot(&mut self) -> Result<String, GameError> {
        let human_name = self.human.name();
        loop {
            let bot_name = self.bot.initialize_name()?;
            if bot_name != human_name {
                return Ok(bot_name);
            }
            log::debug!("Bot name {bot_name} is taken by the human, picking another");
        }
    }

    /// Returns `(human, bot)`.
    pub fn play_round(&mut self) -> Result<(Move, Move), GameError> {
        let (human_move, bot_move) = match self.mirror_timing {
            MirrorTiming::SameRound => {
                let human_move = self.human.select_move()?;
                self.history
                    .borrow_mut()
                    .record(&self.human.name(), human_move);
                let bot_move = self.bot.select_move()?;
                self.history.borrow_mut().record(&self.bot.name(), bot_move);
                (human_move, bot_move)
            }
            MirrorTiming::PreviousRound => {
                let human_move = self.human.select_move()?;
                let bot_move = self.bot.select_move()?;
                let mut history = self.history.borrow_mut();
                history.record(&self.human.name(), human_move);
                history.record(&self.bot.name(), bot_move);
                (human_move, bot_move)
            }
        };
        self.rounds_played += 1;
        log::debug!(
            "Round {}: {} played {human_move}, {} played {bot_move}",
            self.rounds_played,
            self.human.name(),
            self.bot.name()
        );

        let history = self.history.borrow();
        let mut console = self.console.borrow_mut();
        self.human.report(&history, &mut *console)?;
        self.bot.report(&history, &mut *console)?;
        Ok((human_move, bot_move))
    }

    pub fn run(&mut self) -> Result<(), GameError> {
        loop {
            match self.play_round() {
                Ok(_) => {}
                Err(GameError::InputClosed) => {
                    log::info!("Input closed after {} rounds", self.rounds_played);
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    }
}

/// Builds a game, runs the naming phase, then plays until the input closes.
pub fn play(config: &GameConfig, console: SharedConsole) -> Result<Game, GameError> {
    let mut game = Game::new(config, console)?;
    match game.initialize_names() {
        Ok(()) => game.run()?,
        Err(GameError::InputClosed) => log::info!("Input closed before the game started"),
        Err(err) => return Err(err),
    }
    Ok(game)
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use types::ScriptedConsole;

    use super::*;

    #[test]
    fn bot_is_renamed_when_it_collides_with_the_human() {
        let console = Rc::new(RefCell::new(ScriptedConsole::default()));
        let mut game = Game::new(&GameConfig::default(), console).unwrap();
        for _ in 0..20 {
            game.bot.initialize_name().unwrap();
            let taken = game.bot.name();
            game.human.set_name(&taken).unwrap();

            let bot_name = game.name_bot().unwrap();
            assert_ne!(bot_name, taken);
            assert_eq!(bot_name, game.bot.name());
            assert!(bot_name.starts_with("MirrorBot"));
        }
    }
}
