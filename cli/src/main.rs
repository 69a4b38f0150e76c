use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tictactoe_core::*;

mod render;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Let a second human play O instead of the computer
    #[arg(long)]
    two_player: bool,

    /// Print the session as JSON after every move
    #[arg(long)]
    json: bool,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Command {
    Select(CellIndex),
    Reset,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let words: Vec<&str> = line.split([' ', ',']).filter(|w| !w.is_empty()).collect();
    match words.as_slice() {
        ["q" | "quit"] => Some(Command::Quit),
        ["r" | "reset"] => Some(Command::Reset),
        [index] => index.parse().ok().map(Command::Select),
        [row, col] => {
            let coords = (row.parse().ok()?, col.parse().ok()?);
            index_of(coords).map(Command::Select)
        }
        _ => None,
    }
}

fn show(session: &Session, json: bool, out: &mut impl Write) -> Result<()> {
    let view = SessionView::from_session(session);
    if json {
        writeln!(out, "{}", serde_json::to_string(&view)?)?;
    } else {
        let mut text = String::new();
        render::render(&view, &mut text)?;
        write!(out, "{text}")?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let opponent = if args.two_player {
        Opponent::Human
    } else {
        Opponent::Advisor
    };
    let mut session = Session::new(SessionConfig::new(opponent), seed);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    show(&session, args.json, &mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line.context("Could not read from stdin")?;
        match parse_command(line.trim()) {
            Some(Command::Quit) => break,
            Some(Command::Reset) => session.reset(),
            Some(Command::Select(index)) => match session.select_cell(index) {
                Ok(outcome) if !outcome.has_update() => {
                    writeln!(stdout, "Nothing to do at {index}")?;
                    continue;
                }
                Ok(_) => {}
                Err(err) => {
                    writeln!(stdout, "{err}")?;
                    continue;
                }
            },
            None => {
                writeln!(stdout, "Enter a cell 0-8, \"row col\", r to reset or q to quit")?;
                continue;
            }
        }
        show(&session, args.json, &mut stdout)?;
    }

    Ok(())
}
