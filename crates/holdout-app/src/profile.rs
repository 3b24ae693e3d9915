//! Local player profile — remembers the username between sessions.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const PROFILE_FILE: &str = "profile.json";

/// Everything we persist about the player locally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub username: Option<String>,
}

fn profile_path(dir: &Path) -> PathBuf {
    dir.join(PROFILE_FILE)
}

/// Load the profile, falling back to an empty one when the file is
/// missing or unreadable. A corrupt profile is not worth surfacing.
pub fn load_profile(dir: &Path) -> PlayerProfile {
    let path = profile_path(dir);
    match fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_else(|err| {
            log::warn!("ignoring corrupt profile at {}: {err}", path.display());
            PlayerProfile::default()
        }),
        Err(_) => PlayerProfile::default(),
    }
}

/// Write the profile to disk.
pub fn save_profile(dir: &Path, profile: &PlayerProfile) -> Result<(), String> {
    fs::create_dir_all(dir).map_err(|e| format!("Failed to create profile directory: {e}"))?;
    let json = serde_json::to_string_pretty(profile)
        .map_err(|e| format!("Failed to serialize profile: {e}"))?;
    fs::write(profile_path(dir), json).map_err(|e| format!("Failed to write profile: {e}"))?;
    Ok(())
}
