use clap::Parser;

use game::{BotKind, GameConfig, MirrorTiming};
use types::StdConsole;

#[derive(Parser, Debug)]
struct Params {
    /// Opponent policy [env: RPS_BOT]
    #[arg(short, long, value_enum)]
    bot: Option<BotKind>,

    /// When a mirroring bot sees the human's move [env: RPS_MIRROR_TIMING]
    #[arg(short, long, value_enum)]
    mirror_timing: Option<MirrorTiming>,
}

fn main() {
    env_logger::init();
    let args = Params::parse();
    log::info!("args: {args:?}");
    let config = GameConfig::from_cli_or_env(args.bot, args.mirror_timing);
    if let Err(err) = game::play(&config, StdConsole::shared()) {
        log::error!("Game aborted: {err}");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
