use clap::ValueEnum;

pub const BOT_ENV_VAR: &str = "RPS_BOT";
pub const MIRROR_TIMING_ENV_VAR: &str = "RPS_MIRROR_TIMING";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum BotKind {
    #[default]
    Mirror,
    Random,
}

impl BotKind {
    pub fn name_prefix(&self) -> &'static str {
        match self {
            BotKind::Mirror => "MirrorBot",
            BotKind::Random => "RandomBot",
        }
    }
}

/// When the human's move becomes visible to a mirroring bot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum MirrorTiming {
    #[default]
    SameRound,
    PreviousRound,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GameConfig {
    pub bot: BotKind,
    pub mirror_timing: MirrorTiming,
}

impl GameConfig {
    pub fn from_cli_or_env(cli_bot: Option<BotKind>, cli_timing: Option<MirrorTiming>) -> Self {
        Self {
            bot: resolve(cli_bot, BOT_ENV_VAR, std::env::var(BOT_ENV_VAR).ok()),
            mirror_timing: resolve(
                cli_timing,
                MIRROR_TIMING_ENV_VAR,
                std::env::var(MIRROR_TIMING_ENV_VAR).ok(),
            ),
        }
    }
}

fn resolve<T: ValueEnum + Default>(cli_arg: Option<T>, env_var: &str, env: Option<String>) -> T {
    if let Some(arg) = cli_arg {
        return arg;
    }
    match env.map(|value| T::from_str(&value, true).map_err(|err| (value, err))) {
        Some(Ok(value)) => value,
        Some(Err((value, err))) => {
            log::warn!("Ignoring {env_var}={value:?}: {err}");
            T::default()
        }
        None => T::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_behavior() {
        let config = GameConfig::default();
        assert_eq!(config.bot, BotKind::Mirror);
        assert_eq!(config.mirror_timing, MirrorTiming::SameRound);
    }

    #[test]
    fn cli_argument_wins_over_environment() {
        let bot = resolve(Some(BotKind::Mirror), BOT_ENV_VAR, Some("random".to_string()));
        assert_eq!(bot, BotKind::Mirror);
    }

    #[test]
    fn environment_is_used_without_cli_argument() {
        let timing: MirrorTiming = resolve(
            None,
            MIRROR_TIMING_ENV_VAR,
            Some("Previous-Round".to_string()),
        );
        assert_eq!(timing, MirrorTiming::PreviousRound);
    }

    #[test]
    fn invalid_environment_value_falls_back_to_default() {
        let bot: BotKind = resolve(None, BOT_ENV_VAR, Some("lizard".to_string()));
        assert_eq!(bot, BotKind::Mirror);
        let bot: BotKind = resolve(None, BOT_ENV_VAR, None);
        assert_eq!(bot, BotKind::Mirror);
    }

    #[test]
    fn bot_kinds_have_distinct_prefixes() {
        assert_eq!(BotKind::Mirror.name_prefix(), "MirrorBot");
        assert_eq!(BotKind::Random.name_prefix(), "RandomBot");
    }
}
