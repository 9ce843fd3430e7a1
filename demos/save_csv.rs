//! Convert a record and save it next to the working directory.
//!
//! Run with: cargo run --example save_csv -- stats.csv

use serde::Serialize;
use serde_rowtext::{to_string, write_to_file};
use std::env;
use std::error::Error;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct SessionStats {
    session: String,
    kills: u32,
    deaths: u32,
    accuracy: f64,
    weapons: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = env::args().nth(1).unwrap_or_else(|| "stats.csv".to_string());

    let stats = SessionStats {
        session: "ranked-0042".to_string(),
        kills: 14,
        deaths: 6,
        accuracy: 0.4375,
        weapons: vec!["rifle".to_string(), "pistol".to_string()],
    };

    let text = to_string(&stats)?;
    if write_to_file(&path, &text) {
        println!("wrote {}", path.trim());
    } else {
        eprintln!("could not write {} (the path must end in .csv)", path.trim());
    }

    Ok(())
}
