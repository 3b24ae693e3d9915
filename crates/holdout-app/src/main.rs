// Prevents additional console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use holdout_app::ipc;
use holdout_app::state::AppState;

fn main() {
    env_logger::init();

    tauri::Builder::default()
        .manage(AppState::new())
        .invoke_handler(tauri::generate_handler![
            ipc::start_session,
            ipc::send_command,
            ipc::get_snapshot,
            ipc::fetch_leaderboard,
            ipc::submit_score,
            ipc::get_username,
            ipc::set_username,
        ])
        .run(tauri::generate_context!())
        .expect("error while running HOLDOUT");
}
