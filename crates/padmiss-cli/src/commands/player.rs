//! Player lookup command.

use anyhow::{Result, bail};
use padmiss_core::{Config, PlayerFilter, TournamentApi};

pub fn run(
    config: &Config,
    id: Option<String>,
    rfid: Option<String>,
    nickname: Option<String>,
) -> Result<()> {
    if id.is_none() && rfid.is_none() && nickname.is_none() {
        bail!("Specify at least one of --id, --rfid, --nickname");
    }

    let filter = PlayerFilter {
        player_id: id,
        rfid_uid: rfid,
        nickname,
    };

    let api = TournamentApi::new(config);
    match api.get_player(&filter)? {
        Some(player) => {
            println!("{} ({})", player.nickname, player.id);
            if !player.short_nickname.is_empty() {
                println!("  short name: {}", player.short_nickname);
            }
            if !player.rfid_uid.is_empty() {
                println!("  rfid: {}", player.rfid_uid);
            }
        }
        None => println!("No unique player matched."),
    }
    Ok(())
}
