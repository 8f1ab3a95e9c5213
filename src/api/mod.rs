//! Game backend API
//!
//! - `routes`: resource handlers over a [`RunStore`](crate::persistence::RunStore)
//! - `client`: browser-side fetch helpers (WASM only)
//!
//! Endpoints live under `/Game/`; the last path segment selects the action.

#[cfg(target_arch = "wasm32")]
pub mod client;
pub mod routes;

pub use routes::{RouteError, route_get, route_post};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::consts::*;

/// Base path of the game resource
pub const BASE_PATH: &str = "/Game";

/// Backend actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    SubmitRun,
    TopRuns,
    CumulativeLeaderboard,
    PlayerRuns,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::SubmitRun => "submit-run",
            Endpoint::TopRuns => "top-runs",
            Endpoint::CumulativeLeaderboard => "leaderboard-cumulative",
            Endpoint::PlayerRuns => "player-runs",
        }
    }

    /// Match on the last path segment, ignoring any query string
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split('?').next().unwrap_or_default();
        match path.trim_end_matches('/').rsplit('/').next()? {
            "submit-run" => Some(Endpoint::SubmitRun),
            "top-runs" => Some(Endpoint::TopRuns),
            "leaderboard-cumulative" => Some(Endpoint::CumulativeLeaderboard),
            "player-runs" => Some(Endpoint::PlayerRuns),
            _ => None,
        }
    }

    /// Result count used when the request gives none
    pub fn default_limit(&self) -> usize {
        match self {
            Endpoint::TopRuns => DEFAULT_TOP_RUNS_LIMIT,
            Endpoint::CumulativeLeaderboard => DEFAULT_CUMULATIVE_LIMIT,
            Endpoint::PlayerRuns => DEFAULT_PLAYER_RUNS_LIMIT,
            Endpoint::SubmitRun => 0,
        }
    }

    pub fn path(&self) -> String {
        format!("{}/{}", BASE_PATH, self.as_str())
    }
}

pub fn submit_url() -> String {
    Endpoint::SubmitRun.path()
}

pub fn top_runs_url(limit: usize) -> String {
    format!("{}?limit={}", Endpoint::TopRuns.path(), limit)
}

pub fn cumulative_url(limit: usize) -> String {
    format!("{}?limit={}", Endpoint::CumulativeLeaderboard.path(), limit)
}

pub fn player_runs_url(player_name: &str, limit: usize) -> String {
    format!(
        "{}?playerName={}&limit={}",
        Endpoint::PlayerRuns.path(),
        encode_component(player_name),
        limit
    )
}

/// Characters `encodeURIComponent` leaves alone
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a query value
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}
