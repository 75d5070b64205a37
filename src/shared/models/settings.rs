use serde::Deserialize;
use std::fs;

const SETTINGS_FILENAME: &str = "settings.json";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tcp_socket_binding: String,
    pub tcp_socket_port: u16,
    pub database_path: String,
    pub slack_api_url: String,
    pub slack_channel: String,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            tcp_socket_binding: "0.0.0.0".to_string(),
            tcp_socket_port: 3000,
            database_path: "tasks.redb".to_string(),
            slack_api_url: "https://slack.com/api/chat.postMessage".to_string(),
            slack_channel: "task-notifications".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings.json from the working directory, falling back to the
    /// built-in defaults when the file does not exist.
    pub fn load() -> Result<Settings, String> {
        let content = match fs::read_to_string(SETTINGS_FILENAME) {
            Ok(content) => content,
            Err(_) => return Ok(Settings::default()),
        };
        serde_json::from_str(&content)
            .map_err(|e| format!("Cannot parse JSON content from file {SETTINGS_FILENAME}: {e}"))
    }
}
