use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{
    FieldSpec, InputEvent, NoteScore, PlayMode, Record, Score, Song, TimingWindows,
};
use crate::error::Result;

/// Speed modifier in effect for a play, e.g. `{"type": "X", "value": 2.5}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeedMod {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: f64,
}

/// The aggregate unit submitted after a play: the chart that was played,
/// the song it belongs to, the score, and the play circumstances.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartUpload {
    pub hash: String,
    pub meter: u32,
    pub play_mode: PlayMode,
    /// Raw step chart payload. Suppressed from the `Debug` output.
    pub step_data: String,
    pub step_artist: Option<String>,
    pub song: Song,
    pub score: Score,
    pub group: Option<String>,
    pub cab_side: Option<String>,
    pub speed_mod: Option<SpeedMod>,
    pub music_rate: Option<f64>,
    pub mods_turn: Option<String>,
    pub mods_transform: Option<String>,
    pub mods_other: Option<String>,
    pub note_skin: Option<String>,
    pub perspective: Option<String>,
    pub timing_windows: TimingWindows,
    pub input_events: Vec<InputEvent>,
    pub note_scores_with_beats: Vec<NoteScore>,
}

impl Record for ChartUpload {
    const NAME: &'static str = "ChartUpload";
    const FIELDS: &'static [(&'static str, FieldSpec)] = &[
        ("hash", FieldSpec::Required),
        ("meter", FieldSpec::Required),
        ("playMode", FieldSpec::Required),
        ("stepData", FieldSpec::Required),
        ("stepArtist", FieldSpec::Required),
        ("song", FieldSpec::Nested(Song::normalize)),
        ("score", FieldSpec::Nested(Score::normalize)),
        ("group", FieldSpec::Required),
        ("cabSide", FieldSpec::Required),
        ("speedMod", FieldSpec::Required),
        ("musicRate", FieldSpec::Required),
        ("modsTurn", FieldSpec::Required),
        ("modsTransform", FieldSpec::Required),
        ("modsOther", FieldSpec::Required),
        ("noteSkin", FieldSpec::Required),
        ("perspective", FieldSpec::Required),
        ("timingWindows", FieldSpec::Nested(TimingWindows::normalize)),
        ("inputEvents", FieldSpec::NestedSeq(InputEvent::normalize)),
        (
            "noteScoresWithBeats",
            FieldSpec::NestedSeq(NoteScore::normalize),
        ),
    ];
}

impl ChartUpload {
    /// Own fields as a flat payload map, with the sub-records that are
    /// flattened into the parent namespace (`song`, `score`) removed.
    /// Remaining nested values (timing windows, speed mod, the event
    /// sequences) stay structured one level deep.
    pub fn payload_fields(&self) -> Result<Map<String, Value>> {
        let mut doc = self.to_doc()?;
        doc.remove("song");
        doc.remove("score");
        Ok(doc)
    }
}

impl fmt::Debug for ChartUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartUpload")
            .field("hash", &self.hash)
            .field("meter", &self.meter)
            .field("play_mode", &self.play_mode)
            .field("step_artist", &self.step_artist)
            .field("song", &self.song)
            .field("score", &self.score)
            .field("group", &self.group)
            .field("cab_side", &self.cab_side)
            .field("speed_mod", &self.speed_mod)
            .field("music_rate", &self.music_rate)
            .field("mods_turn", &self.mods_turn)
            .field("mods_transform", &self.mods_transform)
            .field("mods_other", &self.mods_other)
            .field("note_skin", &self.note_skin)
            .field("perspective", &self.perspective)
            .field("timing_windows", &self.timing_windows)
            .field("input_events", &self.input_events)
            .field("note_scores_with_beats", &self.note_scores_with_beats)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::records::fixtures::sample_upload;
    use serde_json::json;

    fn doc(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_debug_suppresses_step_data() {
        let upload = sample_upload();
        let repr = format!("{upload:?}");
        assert!(!repr.contains("#NOTES"));
        assert!(!repr.contains("step_data"));
        assert!(repr.contains("PARANOiA"));
    }

    #[test]
    fn test_payload_fields_excludes_flattened_records() {
        let fields = sample_upload().payload_fields().unwrap();
        assert!(!fields.contains_key("song"));
        assert!(!fields.contains_key("score"));
        assert_eq!(fields.get("hash"), Some(&json!("9f8e7d6c")));
        assert_eq!(
            fields.get("speedMod"),
            Some(&json!({"type": "X", "value": 2.5}))
        );
        assert_eq!(
            fields.get("inputEvents"),
            Some(&json!([{"beat": 4.0, "column": 2, "released": false}]))
        );
    }

    #[test]
    fn test_hydrates_event_sequences() {
        let mut raw = doc(serde_json::to_value(sample_upload()).unwrap());
        raw.remove("inputEvents");
        let upload = ChartUpload::from_doc(raw).unwrap();
        assert!(upload.input_events.is_empty());
        assert_eq!(upload.note_scores_with_beats.len(), 1);
    }

    #[test]
    fn test_rejects_malformed_event_element() {
        let mut raw = doc(serde_json::to_value(sample_upload()).unwrap());
        raw.insert(
            "inputEvents".to_string(),
            json!([{ "beat": 1.0, "column": 0 }]),
        );
        let err = ChartUpload::from_doc(raw).unwrap_err();
        match err {
            Error::MissingField { record, field } => {
                assert_eq!(record, "InputEvent");
                assert_eq!(field, "released");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_nested_record_fails() {
        let mut raw = doc(serde_json::to_value(sample_upload()).unwrap());
        raw.remove("timingWindows");
        let err = ChartUpload::from_doc(raw).unwrap_err();
        match err {
            Error::MissingField { record, field } => {
                assert_eq!(record, "ChartUpload");
                assert_eq!(field, "timingWindows");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
