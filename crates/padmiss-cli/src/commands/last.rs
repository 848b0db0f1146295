//! Last-score command: print the most recent score document.

use anyhow::Result;
use padmiss_core::{Config, TournamentApi};

pub fn run(config: &Config, player_id: &str) -> Result<()> {
    let api = TournamentApi::new(config);
    match api.get_last_score(player_id)? {
        Some(doc) => println!("{}", serde_json::to_string_pretty(&doc)?),
        None => println!("No scores recorded."),
    }
    Ok(())
}
