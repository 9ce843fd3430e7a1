//! Nested structs and sequences of structs each get their own block.
//!
//! Run with: RUST_LOG=serde_rowtext=trace cargo run --example nested

use serde::Serialize;
use serde_rowtext::Converter;
use std::error::Error;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct Position {
    x: f32,
    y: f32,
}

#[derive(Serialize)]
enum Team {
    Red,
    Blue,
}

#[derive(Serialize)]
struct Player {
    name: String,
    team: Team,
    position: Position,
}

#[derive(Serialize)]
struct Snapshot {
    tick: u64,
    players: Vec<Player>,
    paused: bool,
    winner: Option<Team>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let snapshot = Snapshot {
        tick: 4096,
        players: vec![
            Player {
                name: "ann".to_string(),
                team: Team::Red,
                position: Position { x: 1.5, y: -3.0 },
            },
            Player {
                name: "bo".to_string(),
                team: Team::Blue,
                position: Position { x: 0.25, y: 8.0 },
            },
        ],
        paused: false,
        winner: None,
    };

    let mut converter = Converter::default();
    converter.convert(&snapshot)?;

    println!("header: {}", converter.header_names());
    println!("values: {}", converter.values());
    println!("nested blocks: {}", converter.blocks().len());
    println!("\n{}", converter.output());

    Ok(())
}
