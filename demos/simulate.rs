//! Runs one UNO game to completion and prints every turn.
//!
//! Usage: `cargo run --example simulate -- [players] [seed]`

use std::env;
use std::error::Error;
use std::process;

use unors::{Effect, Game, GameOptions, GameState, TurnAction, TurnReport};

const MAX_TURNS: usize = 10_000;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let players = match args.next() {
        Some(value) => value
            .parse::<usize>()
            .map_err(|_| format!("invalid player count: {value}"))?,
        None => 2,
    };
    let mut options = GameOptions::default();
    if let Some(value) = args.next() {
        let seed = value
            .parse::<u64>()
            .map_err(|_| format!("invalid seed value: {value}"))?;
        options = options.with_seed(seed);
    }

    let mut game = Game::with_options(players, options)?;
    game.initialize()?;

    println!("UNO simulation with {players} players (seed {})", options.seed);
    println!("{}", game.state_string()?);

    let mut turns = 0;
    while turns < MAX_TURNS {
        let Some(report) = game.play_turn()? else {
            break;
        };
        println!("{}", describe_turn(&report));
        if report.uno {
            println!("Player {} calls UNO!", report.player);
        }
        println!("{}", game.state_string()?);
        turns += 1;
    }

    match game.state() {
        GameState::Won(player) => println!("Winner is Player {player}!"),
        GameState::Stalemate => println!("Deck exhausted and no playable cards. No winner."),
        GameState::InProgress | GameState::NotDealt => {
            println!("Turn limit {MAX_TURNS} reached. Stopping simulation.");
        }
    }

    Ok(())
}

fn describe_turn(report: &TurnReport) -> String {
    let player = report.player;
    let action = match report.action {
        TurnAction::Played(card) => format!("Player {player} plays {card}"),
        TurnAction::DrewAndPlayed(card) => format!("Player {player} draws and plays {card}"),
        TurnAction::DrewAndKept(card) => format!("Player {player} draws {card}"),
        TurnAction::Passed => format!("Player {player} cannot play and the deck is empty"),
    };
    match report.effect {
        Effect::None => action,
        Effect::Skip => format!("{action}; next player skipped"),
        Effect::Reverse => format!("{action}; direction reversed"),
        Effect::DrawTwo { victim, drawn } => {
            format!("{action}; Player {victim} draws {drawn} and is skipped")
        }
    }
}
