//! Local two-player chess in the terminal.
//!
//! Both players share one console and type moves in turn.

use anyhow::Result;
use local_play::{Outcome, PlayConfig, Session};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Local two-player chess");
    println!();
    println!("Usage:");
    println!("  local_play [--config <file>] [--record <file>] [--letters] [--no-rotate]");
    println!();
    println!("Options:");
    println!("  --config <file>   Read settings from a TOML file");
    println!("  --record <file>   Save the game as JSON when it ends");
    println!("  --letters         Draw pieces as letters instead of chess symbols");
    println!("  --no-rotate       Always draw the board from White's side");
    println!();
    println!("Moves:");
    println!("  e2e4, a7a8Q (promotion: Q, R, B or N), 0-0, 0-0-0; 'quit' to stop");
}

/// Reads the command line; `None` means usage was requested.
fn parse_args(args: &[String]) -> Result<Option<PlayConfig>> {
    let mut config_path: Option<PathBuf> = None;
    let mut record_path: Option<PathBuf> = None;
    let mut letters = false;
    let mut no_rotate = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                let Some(path) = args.get(i + 1) else {
                    anyhow::bail!("--config needs a file");
                };
                config_path = Some(PathBuf::from(path));
                i += 1;
            }
            "--record" | "-r" => {
                let Some(path) = args.get(i + 1) else {
                    anyhow::bail!("--record needs a file");
                };
                record_path = Some(PathBuf::from(path));
                i += 1;
            }
            "--letters" => letters = true,
            "--no-rotate" => no_rotate = true,
            "--help" | "-h" => return Ok(None),
            other => anyhow::bail!("unknown argument: {other}"),
        }
        i += 1;
    }

    let mut config = match config_path {
        Some(path) => PlayConfig::load(&path)?,
        None => PlayConfig::default(),
    };
    if record_path.is_some() {
        config.record_path = record_path;
    }
    if letters {
        config.glyphs = chess_rules::Glyphs::Letters;
    }
    if no_rotate {
        config.rotate_board = false;
    }
    Ok(Some(config))
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(config: &PlayConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = Session::new(config);

    println!("\n=== Chess ===\n");
    println!("{}", session.snapshot());

    loop {
        let state = session.state();
        if state.is_over() {
            println!("\n{state}");
            info!(%state, plies = session.record().moves.len(), "game over");
            break;
        }
        if session.in_check() {
            println!("Check!");
        }

        print!("{}", session.prompt());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            debug!("input closed");
            break;
        }

        match session.handle_line(&line) {
            Outcome::Empty => {}
            Outcome::Quit => break,
            Outcome::Rejected(_) => println!("That move is not legal!"),
            Outcome::Played(_) => println!("\n{}", session.snapshot()),
        }
    }

    if let Some(path) = &config.record_path {
        session.record().save(path)?;
        info!(path = %path.display(), "game record saved");
    }
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(config) = parse_args(&args)? else {
        print_usage();
        return Ok(());
    };

    init_tracing(&config.log_filter);
    run(&config)
}
