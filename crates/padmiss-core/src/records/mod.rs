//! Schema-validated record types for the tournament service.
//!
//! Every wire entity (player, score, song, chart upload, ...) is a plain
//! struct with a static field-spec table describing how a raw JSON document
//! maps onto it: which keys must be present, which get defaults, and which
//! hold nested records that hydrate recursively. Hydration goes through
//! [`Record::from_doc`]; client-side construction is an ordinary struct
//! literal. Flattening for submission goes through [`Record::to_doc`].

mod enums;
mod events;
mod player;
mod score;
mod song;
mod timing;
mod upload;

pub use enums::PlayMode;
pub use events::{InputEvent, NoteScore};
pub use player::Player;
pub use score::{Score, ScoreBreakdown};
pub use song::Song;
pub use timing::TimingWindows;
pub use upload::{ChartUpload, SpeedMod};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Normalizes a raw nested-record object in place.
pub type Normalizer = fn(&mut Map<String, Value>) -> Result<()>;

/// How one schema field is filled when hydrating a raw document.
pub enum FieldSpec {
    /// The key must be present. Its value may still be JSON null; presence
    /// and null-ness are independent, and nulls are dropped again at
    /// submission time.
    Required,
    /// The key may be absent. The callback supplies the default, fresh for
    /// every construction, so defaults are never shared between instances.
    Default(fn() -> Value),
    /// Nested record object, normalized with the nested type's own schema.
    /// The key must be present.
    Nested(Normalizer),
    /// Sequence of nested record objects, each normalized with the nested
    /// type's schema. An absent key becomes an empty sequence.
    NestedSeq(Normalizer),
}

/// A named, schema-validated wire entity.
pub trait Record: Serialize + DeserializeOwned {
    /// Record name used in schema-violation errors.
    const NAME: &'static str;

    /// Wire field name to spec, in declaration order.
    const FIELDS: &'static [(&'static str, FieldSpec)];

    /// Walk the field table over a raw document: reject missing required
    /// keys, fill in defaults, and normalize nested record values
    /// recursively. Keys not named by the table are left alone and later
    /// ignored by deserialization.
    fn normalize(doc: &mut Map<String, Value>) -> Result<()> {
        for (field, spec) in Self::FIELDS {
            match doc.get_mut(*field) {
                None => match spec {
                    FieldSpec::Required | FieldSpec::Nested(_) => {
                        return Err(Error::MissingField {
                            record: Self::NAME,
                            field: *field,
                        });
                    }
                    FieldSpec::Default(default) => {
                        doc.insert((*field).to_string(), default());
                    }
                    FieldSpec::NestedSeq(_) => {
                        doc.insert((*field).to_string(), Value::Array(Vec::new()));
                    }
                },
                Some(value) => match spec {
                    FieldSpec::Nested(normalize) => {
                        if let Value::Object(nested) = value {
                            normalize(nested)?;
                        }
                    }
                    FieldSpec::NestedSeq(normalize) => {
                        if let Value::Array(items) = value {
                            for item in items.iter_mut() {
                                if let Value::Object(nested) = item {
                                    normalize(nested)?;
                                }
                            }
                        }
                    }
                    FieldSpec::Required | FieldSpec::Default(_) => {}
                },
            }
        }
        Ok(())
    }

    /// Hydrate a raw response document into a record instance. Values are
    /// taken as supplied, with no coercion beyond deserialization itself.
    fn from_doc(mut doc: Map<String, Value>) -> Result<Self> {
        Self::normalize(&mut doc)?;
        Ok(serde_json::from_value(Value::Object(doc))?)
    }

    /// Flatten this record into an object of wire-named fields. Nested
    /// records serialize as nested objects; the caller decides which of
    /// those to merge into its own namespace.
    fn to_doc(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            _ => Err(Error::MalformedResponse(format!(
                "{} did not serialize to an object",
                Self::NAME
            ))),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// A fully-populated upload used by record and client tests.
    pub(crate) fn sample_upload() -> ChartUpload {
        ChartUpload {
            hash: "9f8e7d6c".to_string(),
            meter: 11,
            play_mode: PlayMode::Single,
            step_data: "#NOTES:...;".to_string(),
            step_artist: Some("Konami".to_string()),
            song: Song {
                title: "PARANOiA".to_string(),
                title_transliteration: None,
                sub_title: None,
                sub_title_transliteration: None,
                artist: "180".to_string(),
                artist_transliteration: None,
                duration_seconds: 92.0,
            },
            score: Score {
                score_breakdown: ScoreBreakdown {
                    fantastics: Some(210),
                    excellents: Some(40),
                    greats: Some(11),
                    decents: Some(3),
                    wayoffs: Some(1),
                    misses: Some(5),
                    holds: Some(9),
                    holds_total: Some(10),
                    mines_hit: Some(0),
                    mines_avoided: Some(2),
                    mines_total: Some(2),
                    rolls: Some(1),
                    rolls_total: Some(1),
                    jumps: Some(14),
                    jumps_total: Some(14),
                    hands: Some(0),
                    hands_total: Some(0),
                },
                score_value: 0.8841,
                passed: true,
                seconds_survived: 92.0,
            },
            group: Some("weekly".to_string()),
            cab_side: Some("Left".to_string()),
            speed_mod: Some(SpeedMod {
                kind: "X".to_string(),
                value: 2.5,
            }),
            music_rate: Some(1.0),
            mods_turn: None,
            mods_transform: None,
            mods_other: None,
            note_skin: Some("cel".to_string()),
            perspective: Some("overhead".to_string()),
            timing_windows: TimingWindows {
                fantastic_timing_window: 0.015,
                excellent_timing_window: 0.030,
                great_timing_window: 0.059,
                decent_timing_window: 0.092,
                wayoff_timing_window: 0.142,
                mine_timing_window: 0.075,
                hold_timing_window: 0.250,
                roll_timing_window: 0.500,
            },
            input_events: vec![InputEvent {
                beat: 4.0,
                column: 2,
                released: false,
            }],
            note_scores_with_beats: vec![NoteScore {
                beat: 4.0,
                column: 2,
                hold_note_score: None,
                tap_note_score: Some("W1".to_string()),
                offset: Some(0.002),
            }],
        }
    }
}
