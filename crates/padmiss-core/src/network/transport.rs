use std::time::Duration;

use serde_json::Value;

use crate::error::Result;

/// The HTTP boundary of the client.
///
/// Every remote operation is one JSON POST with a JSON response, so this is
/// the whole surface. Tests substitute a fake implementation.
pub trait Transport {
    fn post_json(&self, url: &str, body: &Value) -> Result<Value>;
}

/// Blocking transport over a shared [`ureq::Agent`].
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .build();
        Self {
            agent: config.into(),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn post_json(&self, url: &str, body: &Value) -> Result<Value> {
        let mut response = self.agent.post(url).send_json(body)?;
        Ok(response.body_mut().read_json()?)
    }
}
