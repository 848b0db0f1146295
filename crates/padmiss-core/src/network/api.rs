use std::collections::{BTreeSet, HashMap};

use serde::Deserialize;
use serde_json::{Map, Value, json};
use tracing::debug;

use super::history::{ChartHistory, ScoreSummary, StepchartInfo};
use super::query::{self, PlayerFilter};
use super::transport::{Transport, UreqTransport};
use crate::config::{Config, WebserverConfig};
use crate::error::{Error, Result};
use crate::records::{ChartUpload, Player, Record};

/// Page size of the score-history query.
const HISTORY_PAGE_SIZE: u32 = 10;

/// Offset past which pagination stops. Together with the page size this
/// bounds a history fetch at ~110 documents regardless of the true total.
const HISTORY_OFFSET_CAP: u32 = 100;

/// Session state held after a successful authentication.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
}

/// Envelope of the service's POST endpoints.
#[derive(Debug, Deserialize)]
struct StatusResponse {
    #[serde(default)]
    success: bool,
    message: Option<String>,
    token: Option<String>,
}

impl StatusResponse {
    fn message(&self) -> String {
        self.message.clone().unwrap_or_default()
    }
}

/// Client for the remote tournament service.
///
/// Holds one logical session: `authenticate` stores the token that
/// `register_cab` later sends. Instances are not synchronized; a program
/// issuing concurrent calls must serialize them or use one client per
/// session.
pub struct TournamentApi {
    transport: Box<dyn Transport>,
    url: String,
    key: Option<String>,
    broadcast_address: Option<String>,
    auth: Option<AuthSession>,
}

impl TournamentApi {
    pub fn new(config: &Config) -> Self {
        Self::with_transport(config, Box::new(UreqTransport::new()))
    }

    pub fn with_transport(config: &Config, transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            url: config.padmiss_api_url.trim_end_matches('/').to_string(),
            key: config.api_key.clone(),
            broadcast_address: config.webserver.as_ref().map(WebserverConfig::address),
            auth: None,
        }
    }

    /// Client pointed at a bare URL, with no pre-shared key and no
    /// broadcast address.
    pub fn from_url(url: &str) -> Self {
        Self {
            transport: Box::new(UreqTransport::new()),
            url: url.trim_end_matches('/').to_string(),
            key: None,
            broadcast_address: None,
            auth: None,
        }
    }

    /// The session stored by the last successful `authenticate` call.
    pub fn session(&self) -> Option<&AuthSession> {
        self.auth.as_ref()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.url, path)
    }

    fn graph(&self, query: &str) -> Result<Value> {
        self.transport
            .post_json(&self.endpoint("graphiql"), &json!({ "query": query }))
    }

    /// Authenticate against the service and store the returned session
    /// token for subsequent authorized calls.
    pub fn authenticate(&mut self, username: &str, password: &str) -> Result<()> {
        let body = json!({ "email": username, "password": password });
        let response = self
            .transport
            .post_json(&self.endpoint("authenticate"), &body)?;
        let status: StatusResponse = serde_json::from_value(response)?;
        if !status.success {
            return Err(Error::Authentication(status.message()));
        }
        let token = status.token.ok_or_else(|| {
            Error::MalformedResponse("authenticate response carried no token".to_string())
        })?;
        self.auth = Some(AuthSession { token });
        Ok(())
    }

    /// Register this cabinet under `name`. Requires a prior successful
    /// `authenticate` call.
    pub fn register_cab(&self, name: &str) -> Result<()> {
        let auth = self.auth.as_ref().ok_or(Error::NotAuthenticated)?;
        let body = json!({ "token": auth.token, "name": name });
        let response = self
            .transport
            .post_json(&self.endpoint("api/arcade-cabs/create"), &body)?;
        let status: StatusResponse = serde_json::from_value(response)?;
        if !status.success {
            return Err(Error::CabRegistration(status.message()));
        }
        Ok(())
    }

    /// Advisory announcement of this cabinet's reachable address, using the
    /// pre-shared key rather than the session token. Every failure is
    /// logged and collapsed to `false`; a periodic caller must never be
    /// taken down by this call.
    pub fn broadcast(&self) -> bool {
        match self.try_broadcast() {
            Ok(status) if status.success => true,
            Ok(status) => {
                debug!("broadcast rejected: {}", status.message());
                false
            }
            Err(e) => {
                debug!("broadcast failed: {e}");
                false
            }
        }
    }

    fn try_broadcast(&self) -> Result<StatusResponse> {
        let key = self.key.as_deref().ok_or(Error::MissingConfig("api_key"))?;
        let address = self
            .broadcast_address
            .as_deref()
            .ok_or(Error::MissingConfig("webserver"))?;
        let body = json!({ "apiKey": key, "ip": address });
        let response = self
            .transport
            .post_json(&self.endpoint("api/arcade-cabs/broadcast"), &body)?;
        Ok(serde_json::from_value(response)?)
    }

    /// Look up a single player. Zero matches and ambiguous matches both
    /// come back as `None`; only an exact single match hydrates.
    pub fn get_player(&self, filter: &PlayerFilter) -> Result<Option<Player>> {
        let response = self.graph(&query::players_query(filter)?)?;
        let docs = match response.pointer("/data/Players/docs") {
            Some(Value::Array(docs)) => docs,
            _ => return Ok(None),
        };
        if docs.len() != 1 {
            return Ok(None);
        }
        match &docs[0] {
            Value::Object(doc) => Ok(Some(Player::from_doc(doc.clone())?)),
            _ => Ok(None),
        }
    }

    /// The player's most recent score, as the raw response document.
    ///
    /// This read path deliberately does not hydrate into a record: the
    /// document's shape (original score, mod objects, play timestamp) has
    /// no schema on this side.
    pub fn get_last_score(&self, player_id: &str) -> Result<Option<Map<String, Value>>> {
        let response = self.graph(&query::last_score_query(player_id)?)?;
        let docs = match response.pointer("/data/Scores/docs") {
            Some(Value::Array(docs)) => docs,
            _ => return Ok(None),
        };
        match docs.first() {
            Some(Value::Object(doc)) => Ok(Some(doc.clone())),
            _ => Ok(None),
        }
    }

    /// Fetch the player's recent scores and bundle them per step chart.
    ///
    /// Pagination is bounded by [`HISTORY_OFFSET_CAP`]; the second pass
    /// issues one `Stepchart` lookup per distinct referenced chart (the
    /// query endpoint has no batch lookup).
    pub fn get_score_history(&self, player_id: &str) -> Result<HashMap<String, ChartHistory>> {
        let scores = self.fetch_score_pages(player_id)?;

        let chart_ids: BTreeSet<&str> = scores.iter().map(|s| s.step_chart.id.as_str()).collect();
        let mut history = HashMap::new();
        for (done, chart_id) in chart_ids.iter().enumerate() {
            debug!("populating stepchart data: {} / {}", done, chart_ids.len());

            let response = self.graph(&query::stepchart_query(chart_id)?)?;
            let chart: StepchartInfo = match response.pointer("/data/Stepchart") {
                Some(doc @ Value::Object(_)) => serde_json::from_value(doc.clone())?,
                _ => {
                    return Err(Error::MalformedResponse(format!(
                        "no Stepchart document for {chart_id}"
                    )));
                }
            };
            let chart_scores = scores
                .iter()
                .filter(|s| s.step_chart.id == *chart_id)
                .cloned()
                .collect();
            history.insert(
                (*chart_id).to_string(),
                ChartHistory {
                    chart,
                    scores: chart_scores,
                },
            );
        }
        Ok(history)
    }

    fn fetch_score_pages(&self, player_id: &str) -> Result<Vec<ScoreSummary>> {
        let mut scores = Vec::new();
        let mut offset = 0;
        loop {
            let response = self.graph(&query::scores_page_query(player_id, offset)?)?;
            let page: Vec<ScoreSummary> = match response.pointer("/data/Scores/docs") {
                Some(Value::Array(docs)) if !docs.is_empty() => {
                    serde_json::from_value(Value::Array(docs.clone()))?
                }
                _ => Vec::new(),
            };

            let fetched = page.len();
            if fetched > 0 {
                scores.extend(page);
                offset += HISTORY_PAGE_SIZE;
                let total = response
                    .pointer("/data/Scores/totalDocs")
                    .and_then(Value::as_u64);
                debug!(offset, total = ?total, "loading score history");
            }
            if fetched == 0 || offset > HISTORY_OFFSET_CAP {
                break;
            }
        }
        Ok(scores)
    }

    /// Submit a play result, flattening the upload into a single flat
    /// payload: fixed top-level fields, then the score breakdown's fields,
    /// the song's fields, and the upload's own non-record fields. Null
    /// fields are omitted entirely; the receiver cannot tell absent from
    /// explicit null.
    pub fn post_score(&self, player: &Player, upload: &ChartUpload) -> Result<()> {
        let mut data = Map::new();
        data.insert("apiKey".to_string(), json!(self.key));
        data.insert("playerId".to_string(), json!(player.id));
        data.insert("scoreValue".to_string(), json!(upload.score.score_value));
        data.insert("passed".to_string(), json!(upload.score.passed));
        data.insert(
            "secondsSurvived".to_string(),
            json!(upload.score.seconds_survived),
        );
        data.insert("group".to_string(), json!(upload.group));
        data.extend(upload.score.score_breakdown.to_doc()?);
        data.extend(upload.song.to_doc()?);
        data.extend(upload.payload_fields()?);

        data.retain(|_, value| !value.is_null());

        let response = self
            .transport
            .post_json(&self.endpoint("post-score"), &Value::Object(data))?;
        let status: StatusResponse = serde_json::from_value(response)?;
        if !status.success {
            return Err(Error::ScoreSubmission(status.message()));
        }
        Ok(())
    }
}
