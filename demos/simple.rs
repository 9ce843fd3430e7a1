//! Render a struct as a header row and a value row.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use serde_rowtext::to_string;
use std::error::Error;

#[derive(Debug, Serialize)]
struct Lap {
    driver: String,
    lap: u32,
    time: f64,
    personal_best: bool,
    sectors: Vec<f32>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let lap = Lap {
        driver: "Alice Johnson".to_string(),
        lap: 17,
        time: 83.412,
        personal_best: true,
        sectors: vec![27.1, 28.9, 27.412],
    };

    let text = to_string(&lap)?;
    println!("{}", text);

    Ok(())
}
