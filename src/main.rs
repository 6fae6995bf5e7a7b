// Terminal shell for the chess engine: type squares to click them.

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use chess_game::{BoardView, ClickResult, Config, GameSession, Layout, Square};

#[derive(Debug, PartialEq)]
enum Command {
    Click(Square),
    State,
    Retry,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// `e2` or `4 6` click a square; everything else is a word command.
fn parse_command(input: &str) -> Command {
    let input = input.trim();
    match input {
        "" => Command::Empty,
        "state" => Command::State,
        "retry" => Command::Retry,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => {
            if let Ok(square) = input.parse::<Square>() {
                return Command::Click(square);
            }
            let parts: Vec<&str> = input.split_whitespace().collect();
            let coords: Vec<i32> = parts.iter().filter_map(|p| p.parse().ok()).collect();
            match (parts.len(), coords.as_slice()) {
                (2, &[file, rank]) => Square::try_new(file, rank)
                    .map(Command::Click)
                    .unwrap_or_else(|| Command::Unknown(input.to_string())),
                _ => Command::Unknown(input.to_string()),
            }
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  <square>  - Click a square, e.g. 'e2' or '4 6' (file rank, rank 0 on top)");
    println!("  'state'   - Print the game state as JSON");
    println!("  'retry'   - Start the game over");
    println!("  'help'    - Show this list");
    println!("  'quit'    - Exit the program");
}

fn report(session: &GameSession, result: ClickResult) {
    match result {
        ClickResult::Ignored => println!("Select one of {}'s pieces.", session.turn()),
        ClickResult::Rejected => println!("That piece can't move there."),
        ClickResult::Deselected => println!("Selection cleared."),
        ClickResult::Selected(_) | ClickResult::Moved(_) | ClickResult::KingCaptured(_) => {}
    }
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log)
            .with_context(|| format!("invalid log filter {:?}", config.log))?,
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    if config.no_color {
        colored::control::set_override(false);
    }

    ctrlc::set_handler(|| {
        println!("\nCtrl+C caught, leaving the game.");
        std::process::exit(130);
    })
    .context("failed to install Ctrl+C handler")?;

    let layout = Layout::load_or_standard(config.layout.as_deref());
    let mut session = GameSession::new(layout);

    println!("Chess");
    print_help();
    println!("{}", BoardView::new(&session));

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }

        match parse_command(&input) {
            Command::Empty => continue,
            Command::Quit => break,
            Command::Help => print_help(),
            Command::State => {
                println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
            }
            Command::Retry => {
                session.retry();
                println!("{}", BoardView::new(&session));
            }
            Command::Click(_) if session.is_over() => {
                println!("The game is over. Type 'retry' or 'quit'.");
            }
            Command::Click(square) => {
                let result = session.click(square);
                report(&session, result);
                println!("{}", BoardView::new(&session));
            }
            Command::Unknown(text) => println!("Unknown command: {}", text),
        }
    }

    println!("Goodbye!");
    Ok(())
}
