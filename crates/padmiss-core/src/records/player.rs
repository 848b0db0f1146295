use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{FieldSpec, Record};

/// A registered player profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(rename = "_id")]
    pub id: String,
    pub nickname: String,
    pub short_nickname: String,
    pub avatar_icon_url: String,
    pub rfid_uid: String,
    /// JSON-encoded blob of auxiliary key/value pairs. Parsed on demand by
    /// [`Player::get_meta`], never at construction.
    pub meta_data: Option<String>,
    pub mount_type: bool,
}

impl Record for Player {
    const NAME: &'static str = "Player";
    const FIELDS: &'static [(&'static str, FieldSpec)] = &[
        ("_id", FieldSpec::Required),
        ("nickname", FieldSpec::Required),
        ("shortNickname", FieldSpec::Default(empty_string)),
        ("avatarIconUrl", FieldSpec::Default(empty_string)),
        ("rfidUid", FieldSpec::Default(empty_string)),
        ("metaData", FieldSpec::Default(empty_meta)),
        ("mountType", FieldSpec::Default(bool_false)),
    ];
}

impl Player {
    /// Look up a key in the `metaData` blob.
    ///
    /// Returns `None` when the blob is null, the key is absent, or the blob
    /// is not a JSON object. Never fails.
    pub fn get_meta(&self, field: &str) -> Option<Value> {
        let raw = self.meta_data.as_deref()?;
        let data: Map<String, Value> = serde_json::from_str(raw).ok()?;
        data.get(field).cloned()
    }
}

fn empty_string() -> Value {
    Value::String(String::new())
}

fn empty_meta() -> Value {
    Value::String("{}".to_string())
}

fn bool_false() -> Value {
    Value::Bool(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    fn doc(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_hydrates_with_defaults() {
        let player = Player::from_doc(doc(json!({
            "_id": "5c3f",
            "nickname": "Ash",
        })))
        .unwrap();

        assert_eq!(player.id, "5c3f");
        assert_eq!(player.nickname, "Ash");
        assert_eq!(player.short_nickname, "");
        assert_eq!(player.avatar_icon_url, "");
        assert_eq!(player.rfid_uid, "");
        assert_eq!(player.meta_data.as_deref(), Some("{}"));
        assert!(!player.mount_type);
    }

    #[test]
    fn test_supplied_values_kept() {
        let player = Player::from_doc(doc(json!({
            "_id": "5c3f",
            "nickname": "Ash",
            "shortNickname": "A",
            "rfidUid": "04a23bc2",
            "mountType": true,
        })))
        .unwrap();

        assert_eq!(player.short_nickname, "A");
        assert_eq!(player.rfid_uid, "04a23bc2");
        assert!(player.mount_type);
    }

    #[test]
    fn test_missing_required_field_fails() {
        let err = Player::from_doc(doc(json!({ "_id": "5c3f" }))).unwrap_err();
        match err {
            Error::MissingField { record, field } => {
                assert_eq!(record, "Player");
                assert_eq!(field, "nickname");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_get_meta_present_key() {
        let player = Player::from_doc(doc(json!({
            "_id": "5c3f",
            "nickname": "Ash",
            "metaData": "{\"weightKg\": 72, \"team\": \"ECS\"}",
        })))
        .unwrap();

        assert_eq!(player.get_meta("weightKg"), Some(json!(72)));
        assert_eq!(player.get_meta("team"), Some(json!("ECS")));
    }

    #[test]
    fn test_get_meta_absent_key() {
        let player = Player::from_doc(doc(json!({
            "_id": "5c3f",
            "nickname": "Ash",
            "metaData": "{\"team\": \"ECS\"}",
        })))
        .unwrap();

        assert_eq!(player.get_meta("weightKg"), None);
    }

    #[test]
    fn test_get_meta_null_blob() {
        let player = Player::from_doc(doc(json!({
            "_id": "5c3f",
            "nickname": "Ash",
            "metaData": null,
        })))
        .unwrap();

        assert_eq!(player.meta_data, None);
        assert_eq!(player.get_meta("team"), None);
    }

    #[test]
    fn test_get_meta_unparsable_blob() {
        let player = Player::from_doc(doc(json!({
            "_id": "5c3f",
            "nickname": "Ash",
            "metaData": "not json",
        })))
        .unwrap();

        assert_eq!(player.get_meta("team"), None);
    }
}
