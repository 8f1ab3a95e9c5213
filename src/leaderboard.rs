//! Leaderboard queries
//!
//! Read-only rankings over stored runs: best single runs, cumulative
//! per-player totals, and one player's history.

use std::collections::HashMap;

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

use crate::persistence::GameRun;

/// Aggregated stats for one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub player_name: String,
    pub best_score: u32,
    pub total_score: u64,
    pub run_count: u32,
    /// Unix timestamp (ms) of the most recent run
    pub last_played_at: i64,
}

/// Highest-scoring runs, best first. Ties keep submission order.
pub fn top_runs(runs: &[GameRun], limit: usize) -> Vec<GameRun> {
    let mut sorted: Vec<GameRun> = runs.to_vec();
    sorted.sort_by(|a, b| b.score.cmp(&a.score));
    sorted.truncate(limit);
    sorted
}

/// Per-player totals ranked by total score. Ties keep first-seen order.
pub fn cumulative_leaderboard(runs: &[GameRun], limit: usize) -> Vec<PlayerStats> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut stats: Vec<PlayerStats> = Vec::new();

    for run in runs {
        let slot = *index.entry(run.player_name.as_str()).or_insert_with(|| {
            stats.push(PlayerStats {
                player_name: run.player_name.clone(),
                best_score: 0,
                total_score: 0,
                run_count: 0,
                last_played_at: 0,
            });
            stats.len() - 1
        });
        let entry = &mut stats[slot];
        entry.best_score = entry.best_score.max(run.score);
        entry.total_score += u64::from(run.score);
        entry.run_count += 1;
        entry.last_played_at = entry.last_played_at.max(run.created_at);
    }

    stats.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    stats.truncate(limit);
    stats
}

/// One player's runs, most recent first
pub fn player_runs(runs: &[GameRun], player_name: &str, limit: usize) -> Vec<GameRun> {
    let mut history: Vec<GameRun> = runs
        .iter()
        .filter(|r| r.player_name == player_name)
        .cloned()
        .collect();
    history.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    history.truncate(limit);
    history
}

/// Escape a player name for insertion into an HTML table cell
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Date and time of a run in the given zone, e.g. `11/14/2023, 10:13:20 PM`
pub fn format_date_in<Tz>(timestamp: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match DateTime::from_timestamp_millis(timestamp) {
        Some(date) => date.with_timezone(tz).format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
        None => "N/A".to_string(),
    }
}

/// Date and time of a run in the player's local zone
pub fn format_date(timestamp: i64) -> String {
    format_date_in(timestamp, &Local)
}
