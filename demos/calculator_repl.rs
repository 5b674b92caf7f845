//! Terminal Calculator
//!
//! A line-driven front end for the calculator session.
//!
//! Key concepts:
//! - Keys are mapped to commands with `keymap::map_key`
//! - History persists in a directory-backed store between runs
//! - Logging goes through tracing; set RUST_LOG=reckon=debug to see it
//!
//! Each input line is either a key name (`Enter`, `Backspace`, `Escape`),
//! one of `history`, `forget`, `quit`, or a run of single-character keys
//! such as `(1+2)*4=`.
//!
//! Run with: cargo run --example calculator_repl

use reckon::calculator::{Calculator, Evaluation, Input, Outcome};
use reckon::history::FileStore;
use reckon::keymap::map_key;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let data_dir = std::env::var("RECKON_DATA_DIR").unwrap_or_else(|_| ".reckon".to_string());
    let mut calculator = Calculator::builder()
        .store(FileStore::open(&data_dir)?)
        .build()?;

    println!("=== Reckon ===");
    println!("History is kept in {data_dir}\n");
    show(&calculator);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "quit" => break,
            "history" => {
                print_history(&calculator);
                continue;
            }
            "forget" => {
                run(&mut calculator, Input::ClearHistory);
            }
            key @ ("Enter" | "Backspace" | "Escape") => {
                if let Some(input) = map_key(key) {
                    run(&mut calculator, input);
                }
            }
            keys => {
                for c in keys.chars().filter(|c| !c.is_whitespace()) {
                    match map_key(c.encode_utf8(&mut [0; 4])) {
                        Some(input) => run(&mut calculator, input),
                        None => println!("  (ignored '{c}')"),
                    }
                }
            }
        }
        show(&calculator);
    }

    Ok(())
}

fn run(calculator: &mut Calculator<FileStore>, input: Input) {
    if let Outcome::Evaluated(Evaluation::Failed(error)) = calculator.apply(input) {
        println!("  ({error})");
    }
}

fn show(calculator: &Calculator<FileStore>) {
    let display = calculator.display();
    println!("  {:>16}", display.expression);
    println!("  {:>16}", display.result);
    print!("> ");
    let _ = io::stdout().flush();
}

fn print_history(calculator: &Calculator<FileStore>) {
    let history = calculator.history();
    if history.is_empty() {
        println!("  No calculations yet");
    }
    for entry in history {
        println!(
            "  {}  {} = {}",
            entry.timestamp.format("%H:%M:%S"),
            entry.expression,
            entry.result
        );
    }
    print!("> ");
    let _ = io::stdout().flush();
}
