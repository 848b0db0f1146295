use serde::{Deserialize, Serialize};

use super::{FieldSpec, Record};

/// Per-judgment timing windows in effect for a play, in seconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingWindows {
    pub fantastic_timing_window: f64,
    pub excellent_timing_window: f64,
    pub great_timing_window: f64,
    pub decent_timing_window: f64,
    pub wayoff_timing_window: f64,
    pub mine_timing_window: f64,
    pub hold_timing_window: f64,
    pub roll_timing_window: f64,
}

impl Record for TimingWindows {
    const NAME: &'static str = "TimingWindows";
    const FIELDS: &'static [(&'static str, FieldSpec)] = &[
        ("fantasticTimingWindow", FieldSpec::Required),
        ("excellentTimingWindow", FieldSpec::Required),
        ("greatTimingWindow", FieldSpec::Required),
        ("decentTimingWindow", FieldSpec::Required),
        ("wayoffTimingWindow", FieldSpec::Required),
        ("mineTimingWindow", FieldSpec::Required),
        ("holdTimingWindow", FieldSpec::Required),
        ("rollTimingWindow", FieldSpec::Required),
    ];
}
