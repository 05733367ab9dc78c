use std::{
    env, io, process,
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::Context;
use combat::CombatRng;
use error::handle_error;
use log::LevelFilter;
use potion_quest::{
    config::Settings,
    game_loop::{GameContext, resolve_name, run_session},
    narrator::TerminalNarrator,
};
use simple_logger::SimpleLogger;

fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
        .context("Failed to initialise logger")?;

    let settings = Settings::from_env();
    let seed = match settings.seed {
        Some(seed) => seed,
        None => time_seed().context("Failed to derive a random seed")?,
    };
    log::info!("starting with seed {}", seed);

    let stdin = io::stdin();
    let mut ctx = GameContext::new(
        CombatRng::new(seed),
        stdin.lock(),
        TerminalNarrator::stdout(settings.pacing),
    );

    let name = resolve_name(env::args_os().nth(1), &mut ctx.sink);
    match run_session(&mut ctx, &name) {
        Ok(games) => log::info!("session finished after {} games", games),
        Err(err) if err.is_input_closed() => log::info!("{}", handle_error(&err)),
        Err(err) => return Err(err).context("Game crashed"),
    }

    Ok(())
}

fn time_seed() -> anyhow::Result<u64> {
    let time = SystemTime::now().duration_since(UNIX_EPOCH)?.as_nanos();
    let pid = process::id();
    Ok((time ^ (pid as u128)) as u64)
}
