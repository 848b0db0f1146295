use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the paginated score-history query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub played_at: Option<DateTime<Utc>>,
    pub score_value: Option<f64>,
    pub step_chart: ChartRef,
}

/// Reference to the step chart a score was made on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartRef {
    #[serde(rename = "_id")]
    pub id: String,
}

/// Step chart metadata returned by the per-chart lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepchartInfo {
    pub song: Option<SongRef>,
    #[serde(default)]
    pub groups: Vec<String>,
    pub difficulty_level: Option<u32>,
    pub step_data: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongRef {
    pub title: Option<String>,
    pub artist: Option<String>,
}

/// Chart metadata plus the fetched scores referencing it.
#[derive(Debug, Clone, Serialize)]
pub struct ChartHistory {
    pub chart: StepchartInfo,
    pub scores: Vec<ScoreSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_score_summary_parses_timestamp() {
        let summary: ScoreSummary = serde_json::from_value(json!({
            "_id": "s1",
            "playedAt": "2019-03-02T18:41:07.000Z",
            "scoreValue": 0.913,
            "stepChart": { "_id": "ch42" },
        }))
        .unwrap();

        assert_eq!(summary.id, "s1");
        assert_eq!(summary.step_chart.id, "ch42");
        let played_at = summary.played_at.unwrap();
        assert_eq!(played_at.timestamp(), 1_551_552_067);
    }

    #[test]
    fn test_stepchart_info_tolerates_sparse_docs() {
        let info: StepchartInfo = serde_json::from_value(json!({
            "song": { "title": "PARANOiA", "artist": null },
            "difficultyLevel": 11,
            "stepData": null,
        }))
        .unwrap();

        assert_eq!(info.song.unwrap().title.as_deref(), Some("PARANOiA"));
        assert!(info.groups.is_empty());
        assert_eq!(info.difficulty_level, Some(11));
        assert_eq!(info.step_data, None);
    }
}
