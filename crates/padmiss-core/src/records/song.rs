use serde::{Deserialize, Serialize};

use super::{FieldSpec, Record};

/// Song metadata attached to a chart upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub title: String,
    pub title_transliteration: Option<String>,
    pub sub_title: Option<String>,
    pub sub_title_transliteration: Option<String>,
    pub artist: String,
    pub artist_transliteration: Option<String>,
    pub duration_seconds: f64,
}

impl Record for Song {
    const NAME: &'static str = "Song";
    const FIELDS: &'static [(&'static str, FieldSpec)] = &[
        ("title", FieldSpec::Required),
        ("titleTransliteration", FieldSpec::Required),
        ("subTitle", FieldSpec::Required),
        ("subTitleTransliteration", FieldSpec::Required),
        ("artist", FieldSpec::Required),
        ("artistTransliteration", FieldSpec::Required),
        ("durationSeconds", FieldSpec::Required),
    ];
}
