use serde::{Deserialize, Serialize};

use super::{FieldSpec, Record};

/// Per-judgment counts for one play.
///
/// Every key is required in a raw document, but any counter may be null
/// (for example misses on a chart the engine never judged); null counters
/// are omitted again when the score is submitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub fantastics: Option<u32>,
    pub excellents: Option<u32>,
    pub greats: Option<u32>,
    pub decents: Option<u32>,
    pub wayoffs: Option<u32>,
    pub misses: Option<u32>,
    pub holds: Option<u32>,
    pub holds_total: Option<u32>,
    pub mines_hit: Option<u32>,
    pub mines_avoided: Option<u32>,
    pub mines_total: Option<u32>,
    pub rolls: Option<u32>,
    pub rolls_total: Option<u32>,
    pub jumps: Option<u32>,
    pub jumps_total: Option<u32>,
    pub hands: Option<u32>,
    pub hands_total: Option<u32>,
}

impl Record for ScoreBreakdown {
    const NAME: &'static str = "ScoreBreakdown";
    const FIELDS: &'static [(&'static str, FieldSpec)] = &[
        ("fantastics", FieldSpec::Required),
        ("excellents", FieldSpec::Required),
        ("greats", FieldSpec::Required),
        ("decents", FieldSpec::Required),
        ("wayoffs", FieldSpec::Required),
        ("misses", FieldSpec::Required),
        ("holds", FieldSpec::Required),
        ("holdsTotal", FieldSpec::Required),
        ("minesHit", FieldSpec::Required),
        ("minesAvoided", FieldSpec::Required),
        ("minesTotal", FieldSpec::Required),
        ("rolls", FieldSpec::Required),
        ("rollsTotal", FieldSpec::Required),
        ("jumps", FieldSpec::Required),
        ("jumpsTotal", FieldSpec::Required),
        ("hands", FieldSpec::Required),
        ("handsTotal", FieldSpec::Required),
    ];
}

impl ScoreBreakdown {
    /// Steps actually judged (every tap judgment including misses).
    pub fn total_steps(&self) -> u32 {
        [
            self.fantastics,
            self.excellents,
            self.greats,
            self.decents,
            self.wayoffs,
            self.misses,
        ]
        .iter()
        .flatten()
        .sum()
    }
}

/// The result of one play, as submitted with a chart upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub score_breakdown: ScoreBreakdown,
    pub score_value: f64,
    pub passed: bool,
    pub seconds_survived: f64,
}

impl Record for Score {
    const NAME: &'static str = "Score";
    const FIELDS: &'static [(&'static str, FieldSpec)] = &[
        ("scoreBreakdown", FieldSpec::Nested(ScoreBreakdown::normalize)),
        ("scoreValue", FieldSpec::Required),
        ("passed", FieldSpec::Required),
        ("secondsSurvived", FieldSpec::Required),
    ];
}
