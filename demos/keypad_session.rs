//! Keypad Session
//!
//! This example replays a key tape through a calculator session and prints
//! the display after every key press.
//!
//! Key concepts:
//! - Keys map one-to-one onto reducer events
//! - The session re-renders after every event, including absorbed ones
//! - Anomalous results (∞, NaN) are shown verbatim
//!
//! Run with: cargo run --example keypad_session -- "1 2 + 3 * 4 ="
//! Set RUST_LOG=keypad_calc=debug to trace each transition.

use keypad_calc::display::DisplaySnapshot;
use keypad_calc::keypad::{parse_keys, IntoResult, KEYPAD_LAYOUT};
use keypad_calc::machine::Calculator;
use tracing_subscriber::EnvFilter;

fn print_keypad() {
    for row in KEYPAD_LAYOUT {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| format!("{:^width$}", cell.key.label(), width = 6 * cell.span as usize))
            .collect();
        println!("  |{}|", cells.join(""));
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let tape = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "1 2 + 3 * 4 = DEL 5 ÷ 0 =".to_string());

    println!("=== Keypad Session Example ===\n");
    print_keypad();
    println!("\nTape: {tape}\n");

    let keys = match parse_keys(&tape).into_result() {
        Ok(keys) => keys,
        Err(errors) => {
            for error in errors {
                eprintln!("error: {error}");
            }
            std::process::exit(1);
        }
    };

    let mut calculator = Calculator::new();
    let mut render = |display: &DisplaySnapshot| {
        println!("{:>24}", display.upper_line());
        println!("{:>24}\n", display.lower_line());
    };

    for key in keys {
        println!("[{key}]");
        calculator.dispatch_and_render(key.event(), &mut render);
    }

    match calculator.display().to_json() {
        Ok(json) => println!("Final display: {json}"),
        Err(err) => eprintln!("error: {err}"),
    }

    println!("\n=== Example Complete ===");
}
