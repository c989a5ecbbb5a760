use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use lib::bigint::BigInt;
use lib::timers::Timers;
use lib::{cipolla, primes};

/// Solve x^2 = a (mod p) for an odd prime p.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The value whose square roots are wanted (decimal, optionally negative).
    a: String,
    /// The modulus; must be an odd prime greater than 2.
    p: String,
    /// Seed for the random generator; defaults to entropy.
    #[arg(long)]
    seed: Option<u64>,
    /// Print a per-phase timing report on exit.
    #[arg(long)]
    timings: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Cli::parse();
    let timers = Timers::new();

    let start = Instant::now();
    let a: BigInt = match args.a.parse() {
        Ok(a) => a,
        Err(_) => {
            eprintln!("invalid input: a must be a decimal integer");
            return ExitCode::FAILURE;
        }
    };
    let p: BigInt = match args.p.parse() {
        Ok(p) => p,
        Err(_) => {
            eprintln!("invalid input: p must be a decimal integer");
            return ExitCode::FAILURE;
        }
    };
    timers.record("parse", start);

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let start = Instant::now();
    let acceptable = match primes::is_acceptable_modulus(&p, &mut rng) {
        Ok(acceptable) => acceptable,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    timers.record("validate", start);
    if !acceptable {
        eprintln!("invalid input: p must be an odd prime greater than 2");
        return ExitCode::FAILURE;
    }
    tracing::debug!(p = %p, "modulus accepted");

    let start = Instant::now();
    let roots = match cipolla::solve(&a, &p, &mut rng) {
        Ok(roots) => roots,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    timers.record("solve", start);
    tracing::debug!(count = roots.len(), "search finished");

    if roots.is_empty() {
        println!("no solutions");
    } else {
        for root in &roots {
            println!("x \u{2261} {} (mod {})", root, p);
        }
    }

    if args.timings {
        timers.report();
    }
    ExitCode::SUCCESS
}
