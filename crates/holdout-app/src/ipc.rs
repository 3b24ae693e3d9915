//! Tauri IPC command handlers.
//!
//! These `#[tauri::command]` functions are invoked by the frontend via
//! `invoke()`. They bridge frontend requests to the game loop thread
//! via channels, and to the leaderboard/profile services directly.

use tauri::{AppHandle, Manager, State};

use holdout_core::commands::PlayerCommand;
use holdout_core::state::GameStateSnapshot;
use holdout_leaderboard::ScoreRow;

use crate::game_loop;
use crate::profile::{self, PlayerProfile};
use crate::state::{AppState, GameLoopCommand};

/// Start the game session. Spawns the game loop thread if not already running.
///
/// Frontend: `invoke("start_session")`
#[tauri::command]
pub fn start_session(app_handle: AppHandle, state: State<'_, AppState>) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;

    if *running {
        return Err("Game session already running".into());
    }

    let cmd_tx = game_loop::spawn_game_loop(app_handle, state.latest_snapshot.clone());

    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;
    *tx_lock = Some(cmd_tx);
    *running = true;

    Ok(())
}

/// Send a player command to the simulation.
///
/// Frontend: `invoke("send_command", { command })`
#[tauri::command]
pub fn send_command(command: PlayerCommand, state: State<'_, AppState>) -> Result<(), String> {
    let tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|e| format!("Failed to send command: {}", e)),
        None => Err("Game session not started".into()),
    }
}

/// Get the latest snapshot synchronously (for polling / initial state).
///
/// Frontend: `invoke("get_snapshot")`
#[tauri::command]
pub fn get_snapshot(state: State<'_, AppState>) -> Result<Option<GameStateSnapshot>, String> {
    let lock = state.latest_snapshot.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Fetch the top-10 leaderboard rows.
///
/// Never fails from the frontend's point of view: an unconfigured or
/// unreachable service yields an empty list, and the cause is logged.
///
/// Frontend: `invoke("fetch_leaderboard")`
#[tauri::command]
pub fn fetch_leaderboard(state: State<'_, AppState>) -> Vec<ScoreRow> {
    let client = match &state.leaderboard {
        Some(client) => client,
        None => return Vec::new(),
    };

    match client.fetch_top_scores() {
        Ok(rows) => rows,
        Err(err) => {
            log::warn!("failed to fetch leaderboard: {err}");
            Vec::new()
        }
    }
}

/// Submit a completed run's score. Failures are logged and swallowed —
/// losing a leaderboard entry must never look like a game error.
///
/// Frontend: `invoke("submit_score", { username, score })`
#[tauri::command]
pub fn submit_score(username: String, score: u32, state: State<'_, AppState>) {
    let client = match &state.leaderboard {
        Some(client) => client,
        None => return,
    };

    if let Err(err) = client.submit_score(&username, score) {
        log::warn!("failed to submit score: {err}");
    }
}

/// Get the stored username, if any.
///
/// Frontend: `invoke("get_username")`
#[tauri::command]
pub fn get_username(app_handle: AppHandle) -> Result<Option<String>, String> {
    let dir = app_handle
        .path()
        .app_data_dir()
        .map_err(|e| e.to_string())?;
    Ok(profile::load_profile(&dir).username)
}

/// Store the username for future sessions.
///
/// Frontend: `invoke("set_username", { username })`
#[tauri::command]
pub fn set_username(app_handle: AppHandle, username: String) -> Result<(), String> {
    let dir = app_handle
        .path()
        .app_data_dir()
        .map_err(|e| e.to_string())?;
    profile::save_profile(
        &dir,
        &PlayerProfile {
            username: Some(username),
        },
    )
}
