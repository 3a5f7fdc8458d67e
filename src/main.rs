//! Command-line driver: scores a batch of guesses against a secret code and
//! prints the results as one line of space-separated `exact-partial` pairs.
//!
//! Exit codes: 0 on success, 1 when scoring fails (a guess differs in length
//! from the secret), 2 when the declared guess count does not match the
//! guesses given (clap uses 2 for malformed usage as well).

use clap::Parser;
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;

use mastermind::{code_from_str, score_all, Code};

/// Scores Mastermind-style guesses against a secret code.
#[derive(Parser)]
#[command(name = "mastermind", version)]
struct Args {
    /// The secret code, one symbol per character
    secret: String,

    /// Declared number of guesses; must match the guesses given
    count: usize,

    /// The guesses to score, each the same length as the secret
    guesses: Vec<String>,
}

fn main() {
    init_tracing();
    let args = Args::parse();
    let exit_code = match run(&args) {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(args: &Args) -> anyhow::Result<i32> {
    if args.guesses.len() != args.count {
        warn!(
            declared = args.count,
            provided = args.guesses.len(),
            "number of guesses does not match the declared count"
        );
        return Ok(2);
    }

    let secret = code_from_str(&args.secret);
    let guesses: Vec<Code> = args.guesses.iter().map(|g| code_from_str(g)).collect();
    debug!(guesses = guesses.len(), length = secret.len(), "scoring batch");

    let scores = score_all(&secret, &guesses)?;
    let line: Vec<String> = scores.iter().map(ToString::to_string).collect();
    println!("{}", line.join(" "));
    Ok(0)
}

fn init_tracing() {
    // stdout is reserved for the result line
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
