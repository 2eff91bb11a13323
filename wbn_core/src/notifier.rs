//! Delivery of the weekly summary as a Pushbullet note.

use async_trait::async_trait;
use serde::Serialize;

use crate::{secret::SecretStore, Error};

pub static URL: &str = "https://api.pushbullet.com/v2/pushes";
pub static TITLE: &str = "Waste Collection Details";

/// A note pushed to a recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub recipient: String,
    pub title: String,
    pub body: String,
}

#[async_trait]
/// A service delivering notes to a recipient's devices.
pub trait PushService: Send + Sync {
    /// Push a note, authenticated with `access_token`.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when the request fails or is rejected.
    async fn push(&self, access_token: &str, note: &Note) -> Result<(), Error>;
}

#[derive(Debug, Serialize)]
struct PushPayload<'a> {
    body: &'a str,
    title: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    email: &'a str,
}

/// Pushes notes through the Pushbullet API.
#[derive(Debug, Clone)]
pub struct PushbulletClient {
    client: reqwest::Client,
    url: String,
}

impl Default for PushbulletClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PushbulletClient {
    pub fn new() -> Self {
        Self::with_url(URL)
    }

    /// Use another endpoint instead of Pushbullet's.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl PushService for PushbulletClient {
    async fn push(&self, access_token: &str, note: &Note) -> Result<(), Error> {
        let payload = PushPayload {
            body: &note.body,
            title: &note.title,
            kind: "note",
            email: &note.recipient,
        };
        let response = self
            .client
            .post(&self.url)
            .header("Access-Token", access_token)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;
        let pushed: serde_json::Value = response.json().await?;
        tracing::info!(response = %pushed, "pushed note");
        Ok(())
    }
}

/// Sends the weekly summary, looking up the push credential first.
#[derive(Debug, Clone)]
pub struct Notifier<S, P> {
    secrets: S,
    push_service: P,
}

impl<S: SecretStore, P: PushService> Notifier<S, P> {
    pub fn new(secrets: S, push_service: P) -> Self {
        Self {
            secrets,
            push_service,
        }
    }

    /// Notify `recipient` of `message`, authenticating with the secret named `api_key_name`.
    pub async fn notify(
        &self,
        recipient: &str,
        api_key_name: &str,
        message: &[String],
    ) -> Result<(), Error> {
        let access_token = self.secrets.secret(api_key_name).await?;
        let note = Note {
            recipient: recipient.to_string(),
            title: TITLE.to_string(),
            body: message_body(message),
        };
        self.push_service.push(&access_token, &note).await
    }
}

/// Render the message items quoted and comma separated, e.g. `'a', 'b'`.
pub fn message_body(message: &[String]) -> String {
    message
        .iter()
        .map(|item| format!("'{item}'"))
        .collect::<Vec<String>>()
        .join(", ")
}
