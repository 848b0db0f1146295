use serde::{Deserialize, Serialize};

use super::{FieldSpec, Record};

/// One raw pad input during a play.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputEvent {
    pub beat: f64,
    pub column: u32,
    pub released: bool,
}

impl Record for InputEvent {
    const NAME: &'static str = "InputEvent";
    const FIELDS: &'static [(&'static str, FieldSpec)] = &[
        ("beat", FieldSpec::Required),
        ("column", FieldSpec::Required),
        ("released", FieldSpec::Required),
    ];
}

/// The judgment a single note received.
///
/// `offset` is the timing offset against the note's beat; a miss carries
/// none. A tap note has no hold judgment and vice versa, so both judgment
/// keys are required but either value may be null.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteScore {
    pub beat: f64,
    pub column: u32,
    pub hold_note_score: Option<String>,
    pub tap_note_score: Option<String>,
    pub offset: Option<f64>,
}

impl Record for NoteScore {
    const NAME: &'static str = "NoteScore";
    const FIELDS: &'static [(&'static str, FieldSpec)] = &[
        ("beat", FieldSpec::Required),
        ("column", FieldSpec::Required),
        ("holdNoteScore", FieldSpec::Required),
        ("tapNoteScore", FieldSpec::Required),
        ("offset", FieldSpec::Required),
    ];
}
