//! History command: dump recent scores grouped per chart.

use anyhow::Result;
use padmiss_core::{Config, TournamentApi};

pub fn run(config: &Config, player_id: &str) -> Result<()> {
    let api = TournamentApi::new(config);
    let history = api.get_score_history(player_id)?;

    if history.is_empty() {
        println!("No scores recorded.");
        return Ok(());
    }

    let mut charts: Vec<_> = history.iter().collect();
    charts.sort_by(|a, b| a.0.cmp(b.0));

    for (chart_id, entry) in charts {
        let song = entry.chart.song.as_ref();
        let title = song.and_then(|s| s.title.as_deref()).unwrap_or("<unknown>");
        let artist = song.and_then(|s| s.artist.as_deref()).unwrap_or("<unknown>");
        let level = entry
            .chart
            .difficulty_level
            .map(|l| l.to_string())
            .unwrap_or_else(|| "?".to_string());

        println!("{title} - {artist} [{level}] ({chart_id})");
        for score in &entry.scores {
            let when = score
                .played_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string());
            let value = score
                .score_value
                .map(|v| format!("{:.2}%", v * 100.0))
                .unwrap_or_else(|| "-".to_string());
            println!("  {when}  {value}");
        }
    }
    Ok(())
}
