use async_trait::async_trait;
use serde_json::json;

use crate::notifier::{CompletionNotifier, NotifyOutcome};
use crate::settings::Settings;
use crate::task::Task;

const SLACK_TOKEN_ENV: &str = "SLACK_TOKEN";

/// Announces completions to a Slack channel via `chat.postMessage`. The bot
/// token is read from the `SLACK_TOKEN` environment variable at construction.
pub struct SlackNotifier {
    client: reqwest::Client,
    api_url: String,
    channel: String,
    token: String,
}

impl SlackNotifier {
    pub fn from_settings(settings: &Settings) -> SlackNotifier {
        SlackNotifier {
            client: reqwest::Client::new(),
            api_url: settings.slack_api_url.clone(),
            channel: settings.slack_channel.clone(),
            token: std::env::var(SLACK_TOKEN_ENV).unwrap_or_default(),
        }
    }
}

#[async_trait]
impl CompletionNotifier for SlackNotifier {
    async fn notify_completed(&self, task: &Task) -> NotifyOutcome {
        let body = json!({
            "channel": self.channel,
            "text": format!("Someone just completed the task {}", task.title),
        });

        let result = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await;

        match result {
            Ok(response) => {
                let ok = response.status().is_success();
                let text = response.text().await.unwrap_or_default();
                NotifyOutcome { ok, text }
            }
            Err(e) => NotifyOutcome {
                ok: false,
                text: e.to_string(),
            },
        }
    }
}
