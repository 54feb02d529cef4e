//! Cannon Pong entry point
//!
//! Runs a headless match with a scripted pointer. A windowing backend would
//! drive [`Game`] the same way: events, `update(dt)`, then `draw`.
//!
//! Run `cannon-pong --help` for options.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use cannon_pong::platform::{FrameClock, InputEvent};
use cannon_pong::render::DrawList;
use cannon_pong::{Config, Game, TickInput};

/// Cannon Pong headless runner
#[derive(Parser, Debug)]
#[command(name = "cannon-pong")]
#[command(about = "Play a scripted match of Cannon Pong without a window", long_about = None)]
struct Cli {
    /// JSON config file; invalid or missing files fall back to defaults
    config: Option<PathBuf>,

    /// RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Frames to simulate (default: five minutes at 60 FPS)
    #[arg(long, default_value_t = 60 * 60 * 5)]
    frames: u64,

    /// Pace frames with the real-time clock instead of a fixed step
    #[arg(long)]
    realtime: bool,

    /// Press fire every N frames
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    fire_every: u64,
}

fn main() {
    env_logger::init();
    log::info!("Cannon Pong (headless) starting...");

    let cli = Cli::parse();
    let config = cli
        .config
        .as_deref()
        .map_or_else(Config::default, Config::load);
    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });

    let fixed_dt = 1.0 / config.fps_limit.max(1) as f32;
    let mut clock = cli.realtime.then(|| FrameClock::new(config.fps_limit));
    let mut game = Game::new(config, seed);
    let mut surface = DrawList::new();

    let mut frame = 0;
    while game.is_running() && frame < cli.frames {
        // Scripted player: chase the ball and fire whenever possible
        let input = TickInput {
            pointer_x: Some(game.control().ball.center().x),
        };
        if frame % cli.fire_every == 0 {
            game.handle_event(InputEvent::Fire);
        }

        let dt = clock.as_mut().map_or(fixed_dt, |clock| clock.tick());
        game.update(dt, &input);

        surface.clear();
        game.draw(&mut surface);

        if game.game_over() {
            if let Some(message) = game.win_message() {
                log::info!("{message} after {frame} frames");
            }
            game.handle_event(InputEvent::Quit);
        }
        frame += 1;
    }

    let scores = &game.control().scores;
    log::info!(
        "Final score: {} / {} ({} draw calls last frame)",
        scores.player.text(),
        scores.ai.text(),
        surface.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["cannon-pong"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.seed.is_none());
        assert_eq!(cli.frames, 18_000);
        assert_eq!(cli.fire_every, 30);
        assert!(!cli.realtime);
    }

    #[test]
    fn test_cli_parses_flags_and_config_path() {
        let cli = Cli::try_parse_from([
            "cannon-pong",
            "tuning.json",
            "--seed",
            "7",
            "--frames",
            "120",
            "--realtime",
            "--fire-every",
            "5",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("tuning.json")));
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.frames, 120);
        assert!(cli.realtime);
        assert_eq!(cli.fire_every, 5);
    }

    #[test]
    fn test_cli_rejects_bad_values() {
        assert!(Cli::try_parse_from(["cannon-pong", "--frames", "x"]).is_err());
        assert!(Cli::try_parse_from(["cannon-pong", "--fire-every", "0"]).is_err());
        // --help is handled by clap, never treated as a config path
        let err = Cli::try_parse_from(["cannon-pong", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
