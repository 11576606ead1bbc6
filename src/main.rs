use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use fb_arcade::config::{Cli, Commands};
use fb_arcade::games::Game;
use fb_arcade::games::dodge::{DodgeConfig, DodgeGame};
use fb_arcade::games::showcase::ShowcaseGame;
use fb_arcade::games::snake::{SnakeConfig, SnakeGame};
use fb_arcade::games::ticker::TickerGame;
use fb_arcade::host::{Keyboard, Terminal};
use fb_arcade::logging::setup_logging;
use fb_arcade::session::Session;
use fb_arcade::sound::Speaker;
use fb_arcade::surface::PixelSurface;

fn build_game(command: &Commands, rng: StdRng) -> Box<dyn Game> {
    match command {
        Commands::Flappy { variant } => Box::new(DodgeGame::new(DodgeConfig::for_variant(*variant), rng)),
        Commands::Snake => Box::new(SnakeGame::new(SnakeConfig::default(), rng)),
        Commands::Ticker => Box::new(TickerGame::new()),
        Commands::Showcase { color } => Box::new(ShowcaseGame::new(*color)),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_file.as_deref(), cli.log_level)?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, command = ?cli.command, "starting");
    let mut game = build_game(&cli.command, StdRng::seed_from_u64(seed));

    let mut term = Terminal::enter().context("setting up the terminal")?;
    let keyboard = Keyboard::new(term.reports_releases());
    let result = Session::new(keyboard, &mut term, PixelSurface::board())
        .with_speaker(Speaker::open())
        .run(game.as_mut());
    term.restore().context("restoring the terminal")?;

    let ticks = result.context("game loop failed")?;
    info!(ticks, "bye");
    Ok(())
}
