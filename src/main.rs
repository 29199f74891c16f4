use std::process::ExitCode;

use life::LifeEngine;
use log::{error, info};

use crate::options::Options;

mod options;

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let options = Options::parse(std::env::args().skip(1))?;
    let mut engine = LifeEngine::with_pattern(options.pattern()?);
    engine.subscribe(|update| {
        info!(
            "generation {}: {} alive, {} tracked",
            update.generation,
            update.state.population(),
            update.state.size()
        );
    });
    engine.step_n(options.generations);
    let state = engine.state();
    println!("{state}");
    println!(
        "generation {}, {} alive, {} tracked",
        engine.generation(),
        state.population(),
        state.size()
    );
    Ok(())
}
