//! Keypad Session
//!
//! This demo drives a calculator session the way a UI layer would: each
//! button press is an action token, and the returned frame is what gets
//! rendered.
//!
//! Key concepts:
//! - One session owns one calculator
//! - Chained operators evaluate as they go
//! - Invalid math shows up as NaN or Infinity, never as an error
//!
//! Run with: RUST_LOG=calcpad=debug cargo run --example keypad

use calcpad::engine::{DisplayFrame, Session};
use calcpad::CalculatorBuilder;
use tracing_subscriber::EnvFilter;

fn render(label: &str, frame: &DisplayFrame) {
    println!("{label}");
    println!("  display: {}", frame.primary);
    for line in frame.history.lines() {
        println!("  history: {line}");
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Keypad Session Example ===\n");

    let calculator = CalculatorBuilder::new().history_capacity(5).build()?;
    let mut session = Session::new(calculator);
    println!("Session {}\n", session.id());

    let scripts: &[(&str, &[&str])] = &[
        ("3 + 4 + 5 =", &["3", "add", "4", "add", "5", "equals"]),
        ("store in memory, clear", &["mPlus", "clear"]),
        ("2 ^ 10 =", &["2", "pow", "1", "0", "equals"]),
        ("0 - 4 = then sqrt", &["0", "subtract", "4", "equals", "sqrt"]),
        ("1 / 0 =", &["1", "divide", "0", "equals"]),
        ("recall memory", &["mr"]),
    ];

    for (label, actions) in scripts {
        let mut frame = session.frame();
        for action in actions.iter() {
            frame = session.handle(action)?;
        }
        render(label, &frame);
    }

    match session.handle("percent") {
        Ok(_) => println!("unexpected: percent accepted"),
        Err(err) => println!("rejected: {err}"),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
