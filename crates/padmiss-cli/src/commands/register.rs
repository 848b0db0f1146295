//! Register command: authenticate and create the arcade cab.

use anyhow::Result;
use padmiss_core::{Config, TournamentApi};

pub fn run(config: &Config, name: &str, email: &str, password: &str) -> Result<()> {
    let mut api = TournamentApi::new(config);

    api.authenticate(email, password)?;
    api.register_cab(name)?;

    println!("Registered cab '{name}'.");
    Ok(())
}
