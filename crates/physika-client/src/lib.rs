//! Client for the numeric calculation service.
//!
//! The service exposes one POST endpoint per formula (the catalog carries the
//! path) taking a JSON object of numeric variable values and returning a JSON
//! object with the computed result under the formula's result key. Parsing
//! and extraction never touch the network; this crate is the only place that
//! does.

use std::collections::BTreeMap;
use std::time::Duration;

use physika_core::FormulaDefinition;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use ureq::Agent;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ClientError {
    /// A variable value could not be parsed as a number before sending.
    #[error("value for '{key}' is not numeric: '{value}'")]
    NonNumericValue { key: String, value: String },

    /// The service rejected the request. Carries the service's own message
    /// when the error body provides one.
    #[error("calculation service error ({status}): {message}")]
    Service { status: u16, message: String },

    /// The request could not be completed at the transport level.
    #[error("calculation service unreachable: {0}")]
    Transport(#[from] ureq::Error),

    /// The response body did not carry a numeric result.
    #[error("malformed response from calculation service: {0}")]
    MalformedResponse(String),
}

/// Blocking client bound to one service base URL.
pub struct CalcClient {
    agent: Agent,
    base_url: String,
}

impl CalcClient {
    /// Creates a client for the service at `base_url` (no trailing slash
    /// needed; one is trimmed if present).
    pub fn new(base_url: impl Into<String>) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(DEFAULT_TIMEOUT))
            .http_status_as_error(false)
            .build();
        Self {
            agent: config.new_agent(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends `values` to the formula's endpoint and returns the computed
    /// result. Values are validated as numbers before anything is sent.
    pub fn calculate(
        &self,
        formula: &FormulaDefinition,
        values: &BTreeMap<&'static str, String>,
    ) -> Result<f64, ClientError> {
        let payload = numeric_payload(values)?;
        let url = format!("{}{}", self.base_url, formula.endpoint);
        debug!(url, formula = formula.id, "posting calculation request");

        let mut response = self.agent.post(&url).send_json(&payload)?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .body_mut()
                .read_json::<Value>()
                .ok()
                .and_then(|body| body.get("message")?.as_str().map(str::to_string))
                .unwrap_or_else(|| format!("HTTP {status}"));
            return Err(ClientError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = response.body_mut().read_json()?;
        body.get(formula.result_key)
            .or_else(|| body.get("result"))
            .and_then(Value::as_f64)
            .ok_or_else(|| {
                ClientError::MalformedResponse(format!(
                    "no numeric '{}' field in response",
                    formula.result_key
                ))
            })
    }

    /// Probes the service health endpoint. Any failure reads as "down".
    pub fn health(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.agent.get(&url).call() {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

/// Converts string values into the numeric JSON object the service expects,
/// skipping blanks the way an unfilled form field would be skipped.
fn numeric_payload(
    values: &BTreeMap<&'static str, String>,
) -> Result<BTreeMap<&'static str, f64>, ClientError> {
    let mut payload = BTreeMap::new();
    for (&key, value) in values {
        if value.trim().is_empty() {
            continue;
        }
        let number: f64 = value.parse().map_err(|_| ClientError::NonNumericValue {
            key: key.to_string(),
            value: value.clone(),
        })?;
        payload.insert(key, number);
    }
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn payload_parses_decimal_strings() {
        let mut values = BTreeMap::new();
        values.insert("voltage", "12".to_string());
        values.insert("resistance", "4.5".to_string());
        let payload = numeric_payload(&values).unwrap();
        assert_eq!(payload.get("voltage"), Some(&12.0));
        assert_eq!(payload.get("resistance"), Some(&4.5));
    }

    #[test]
    fn payload_skips_blank_values() {
        let mut values = BTreeMap::new();
        values.insert("u", String::new());
        values.insert("t", "10".to_string());
        let payload = numeric_payload(&values).unwrap();
        assert_eq!(payload.len(), 1);
        assert_eq!(payload.get("t"), Some(&10.0));
    }

    #[test]
    fn payload_rejects_non_numeric() {
        let mut values = BTreeMap::new();
        values.insert("mass", "heavy".to_string());
        let err = numeric_payload(&values).unwrap_err();
        assert!(matches!(err, ClientError::NonNumericValue { .. }));
        assert_eq!(err.to_string(), "value for 'mass' is not numeric: 'heavy'");
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let client = CalcClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
