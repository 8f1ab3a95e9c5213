//! Browser-side API client
//!
//! Leaderboard reads degrade to empty lists on any failure; the simulation
//! never sees network errors.

use serde::de::DeserializeOwned;
use serde_json::json;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::{cumulative_url, player_runs_url, submit_url, top_runs_url};
use crate::leaderboard::PlayerStats;
use crate::persistence::GameRun;

async fn fetch_response(request: &Request) -> Result<Response, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response: Response = JsFuture::from(window.fetch_with_request(request))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!("HTTP {}", response.status())));
    }
    Ok(response)
}

async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, JsValue> {
    let request = Request::new_with_str(url)?;
    let response = fetch_response(&request).await?;
    let text = JsFuture::from(response.text()?).await?;
    let text = text.as_string().unwrap_or_default();
    serde_json::from_str(&text).map_err(|e| JsValue::from_str(&e.to_string()))
}

async fn fetch_list<T: DeserializeOwned>(url: &str) -> Vec<T> {
    match fetch_json::<Vec<T>>(url).await {
        Ok(list) => list,
        Err(e) => {
            log::warn!("Fetching {} failed: {:?}", url, e);
            Vec::new()
        }
    }
}

pub async fn fetch_top_runs(limit: usize) -> Vec<GameRun> {
    fetch_list(&top_runs_url(limit)).await
}

pub async fn fetch_cumulative(limit: usize) -> Vec<PlayerStats> {
    fetch_list(&cumulative_url(limit)).await
}

pub async fn fetch_player_runs(player_name: &str, limit: usize) -> Vec<GameRun> {
    fetch_list(&player_runs_url(player_name, limit)).await
}

/// POST a finished run. Errors are returned for the UI to show, never retried.
pub async fn submit_run(player_name: &str, score: u32, duration_seconds: u32) -> Result<(), JsValue> {
    let body = json!({
        "playerName": player_name,
        "score": score,
        "durationSeconds": duration_seconds,
    });

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&body.to_string()));

    let request = Request::new_with_str_and_init(&submit_url(), &init)?;
    request.headers().set("Content-Type", "application/json")?;

    fetch_response(&request).await?;
    log::info!("Submitted run for {} ({})", player_name, score);
    Ok(())
}
