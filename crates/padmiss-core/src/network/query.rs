//! Query-document composition for the service's query endpoint.
//!
//! The endpoint takes filters as a JSON-encoded string embedded as a quoted
//! literal inside the query text, so filter objects are serialized twice.
//! The service expects exactly this shape.

use serde::Serialize;

use crate::error::Result;

/// Identifying arguments for a player lookup. At least one member should be
/// set for the query to be selective; absent members are left out of the
/// filter entirely.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlayerFilter {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,
    #[serde(rename = "rfidUid", skip_serializing_if = "Option::is_none")]
    pub rfid_uid: Option<String>,
    #[serde(rename = "nickname", skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

impl PlayerFilter {
    pub fn by_id(player_id: impl Into<String>) -> Self {
        Self {
            player_id: Some(player_id.into()),
            ..Self::default()
        }
    }

    pub fn by_rfid(rfid_uid: impl Into<String>) -> Self {
        Self {
            rfid_uid: Some(rfid_uid.into()),
            ..Self::default()
        }
    }

    pub fn by_nickname(nickname: impl Into<String>) -> Self {
        Self {
            nickname: Some(nickname.into()),
            ..Self::default()
        }
    }
}

#[derive(Serialize)]
struct ScoreFilter<'a> {
    player: &'a str,
}

/// Serialize a filter object and embed it as a quoted JSON-string literal.
pub fn embed_filter<T: Serialize>(filter: &T) -> Result<String> {
    let json = serde_json::to_string(filter)?;
    Ok(serde_json::to_string(&json)?)
}

pub fn players_query(filter: &PlayerFilter) -> Result<String> {
    Ok(format!(
        r#"
{{
  Players (queryString: {}) {{
    docs {{
      _id
      nickname
      shortNickname
      avatarIconUrl
      playerLevel
      playerExperiencePoints
      globalLadderRank
      globalLadderRating
      accuracy
      stamina
      totalSteps
      totalPlayTimeSeconds
      totalSongsPlayed
      metaData
    }}
  }}
}}
"#,
        embed_filter(filter)?
    ))
}

pub fn last_score_query(player_id: &str) -> Result<String> {
    let filter = ScoreFilter { player: player_id };
    Ok(format!(
        r#"
{{
  Scores (sort: "-playedAt", limit: 1, queryString: {}) {{
    docs {{
      scoreValue
      originalScore
      noteSkin
      playedAt
      modsTurn
      modsTransform
      modsOther {{
        name
        value
      }}
      speedMod {{
        type
        value
      }}
    }}
  }}
}}
"#,
        embed_filter(&filter)?
    ))
}

pub fn scores_page_query(player_id: &str, offset: u32) -> Result<String> {
    let filter = ScoreFilter { player: player_id };
    Ok(format!(
        r#"
{{
  Scores (limit: 10, sort: "-playedAt", offset: {offset}, queryString: {}) {{
    totalDocs
    docs {{
      _id
      playedAt
      scoreValue
      stepChart {{
        _id
      }}
    }}
  }}
}}
"#,
        embed_filter(&filter)?
    ))
}

pub fn stepchart_query(chart_id: &str) -> Result<String> {
    // JSON string escaping doubles as the quoting the query text needs.
    Ok(format!(
        r#"
{{
  Stepchart (id: {}) {{
    song {{
      title
      artist
    }}
    groups
    difficultyLevel
    stepData
  }}
}}
"#,
        serde_json::to_string(chart_id)?
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_filter_double_encodes() {
        let filter = PlayerFilter::by_id("5c3f");
        assert_eq!(embed_filter(&filter).unwrap(), r#""{\"_id\":\"5c3f\"}""#);
    }

    #[test]
    fn test_embed_filter_skips_absent_members() {
        let filter = PlayerFilter::by_rfid("04a23bc2");
        assert_eq!(
            embed_filter(&filter).unwrap(),
            r#""{\"rfidUid\":\"04a23bc2\"}""#
        );
    }

    #[test]
    fn test_players_query_embeds_filter() {
        let query = players_query(&PlayerFilter::by_nickname("Ash")).unwrap();
        assert!(query.contains(r#"queryString: "{\"nickname\":\"Ash\"}""#));
        assert!(query.contains("metaData"));
    }

    #[test]
    fn test_scores_page_query_carries_offset() {
        let query = scores_page_query("p1", 30).unwrap();
        assert!(query.contains("offset: 30"));
        assert!(query.contains(r#"sort: "-playedAt""#));
        assert!(query.contains(r#"queryString: "{\"player\":\"p1\"}""#));
    }

    #[test]
    fn test_stepchart_query_quotes_id() {
        let query = stepchart_query("ch42").unwrap();
        assert!(query.contains(r#"Stepchart (id: "ch42")"#));
    }
}
