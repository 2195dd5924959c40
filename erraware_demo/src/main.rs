//! erraware demo — runs a random roll through two driver-wrapped steps and reports the
//! outcome by matching on the final `Result`, including the fields of its error payload.
//!
//! Usage example (CLI):
//! ```bash
//! erraware_demo --seed 7 --runs 5
//! erraware_demo --json
//! ```
//!
//! Set `RUST_LOG=debug` to see the raw rolls.
#![warn(missing_docs)]
mod args;
mod error;
mod model;
mod roll;

use crate::args::Args;
use crate::error::AppResult;
use crate::roll::{compose, report};
use clap::Parser;
use erraware::Failure;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> AppResult<()> {
    init_logger();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    for run in 1..=args.runs {
        let outcome = compose(&mut rng);
        if let Failure(err) = &outcome {
            warn!("Run {} failed: {}", run, err);
        }

        if args.json {
            println!("{}", serde_json::to_string(&outcome)?);
        } else {
            println!("{}", report(&outcome));
        }
    }

    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
