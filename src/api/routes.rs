//! Backend resource handlers
//!
//! Requests are answered with JSON values; failures are typed so the
//! transport layer can pick a status code.

use serde_json::{Value, json};
use thiserror::Error;

use super::Endpoint;
use crate::leaderboard::{cumulative_leaderboard, player_runs, top_runs};
use crate::persistence::{RunStore, SubmitError};

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("unknown endpoint: {0}")]
    UnknownEndpoint(String),
    #[error("{0} required")]
    MissingParam(&'static str),
    #[error(transparent)]
    Submit(#[from] SubmitError),
    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

impl RouteError {
    /// JSON error body, matching the shape clients expect
    pub fn to_json(&self) -> Value {
        json!({ "error": self.to_string() })
    }
}

/// Parse `limit`, falling back to the endpoint default when absent, invalid or zero
fn limit_param(endpoint: Endpoint, params: &[(String, String)]) -> usize {
    param(params, "limit")
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or_else(|| endpoint.default_limit())
}

fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Handle a read request
pub fn route_get(
    store: &impl RunStore,
    path: &str,
    params: &[(String, String)],
) -> Result<Value, RouteError> {
    let endpoint =
        Endpoint::from_path(path).ok_or_else(|| RouteError::UnknownEndpoint(path.to_string()))?;
    let limit = limit_param(endpoint, params);
    log::debug!("GET {} (limit {})", endpoint.as_str(), limit);

    let body = match endpoint {
        Endpoint::TopRuns => serde_json::to_value(top_runs(store.runs(), limit))?,
        Endpoint::CumulativeLeaderboard => {
            serde_json::to_value(cumulative_leaderboard(store.runs(), limit))?
        }
        Endpoint::PlayerRuns => {
            let name = param(params, "playerName")
                .filter(|n| !n.is_empty())
                .ok_or(RouteError::MissingParam("playerName"))?;
            serde_json::to_value(player_runs(store.runs(), name, limit))?
        }
        Endpoint::SubmitRun => return Err(RouteError::UnknownEndpoint(path.to_string())),
    };
    Ok(body)
}

fn field<'a>(body: &'a Value, key: &'static str) -> Result<&'a Value, SubmitError> {
    body.get(key)
        .filter(|v| !v.is_null())
        .ok_or(SubmitError::MissingField(key))
}

/// Whole-number field; fractional or non-numeric values are a type error
fn integer_field(body: &Value, key: &'static str) -> Result<i64, SubmitError> {
    field(body, key)?.as_i64().ok_or(SubmitError::InvalidField(key))
}

/// Handle a run submission
pub fn route_post(store: &mut impl RunStore, path: &str, body: &Value) -> Result<Value, RouteError> {
    if Endpoint::from_path(path) != Some(Endpoint::SubmitRun) {
        return Err(RouteError::UnknownEndpoint(path.to_string()));
    }

    let player_name = field(body, "playerName")?
        .as_str()
        .ok_or(SubmitError::InvalidField("playerName"))?;
    let score = integer_field(body, "score")?;
    let duration = integer_field(body, "durationSeconds")?;

    let run = store.submit_run(player_name, score, duration)?;
    Ok(serde_json::to_value(run)?)
}
