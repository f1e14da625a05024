//! # Postura Chat
//!
//! Thin client for the assistant relay. The relay owns the model call;
//! this crate only posts the user's message and unwraps the reply, with a
//! fixed fallback line when the relay is unreachable.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use tracing::warn;

/// Line the assistant opens with before any request is made.
pub const GREETING: &str = "Hi! I'm your Postura AI assistant. I can help you with posture tips, \
     analyze your progress, or answer questions about your health metrics. \
     How can I help you today?";

/// Reply shown whenever the relay cannot be reached or errors out.
pub const FALLBACK_REPLY: &str = "Sorry, I'm having trouble connecting to the posture data. \
     Please make sure the backend server is running and try again.";

/// The interface for any assistant relay backend.
#[async_trait]
pub trait ChatRelay: Send + Sync {
    async fn send(&self, message: &str) -> Result<String>;
}

/// Direct HTTP client for the local relay endpoint.
pub struct RelayClient {
    http: Client,
    endpoint: String,
}

impl RelayClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.to_string(),
        }
    }

    /// Send `message` and return the assistant's reply, or the fixed
    /// fallback if anything goes wrong. Errors never reach the caller.
    pub async fn send_or_fallback(&self, message: &str) -> String {
        match self.send(message).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Chat relay unavailable: {:#}", e);
                FALLBACK_REPLY.to_string()
            }
        }
    }
}

#[async_trait]
impl ChatRelay for RelayClient {
    async fn send(&self, message: &str) -> Result<String> {
        let body = json!({ "message": message });

        let resp = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .context("Failed to contact chat relay")?;

        let status = resp.status();
        let text = resp.text().await?;

        parse_reply(status, &text)
    }
}

/// Pull the reply out of a relay response.
///
/// The relay answers `{ "response": … }` on success and `{ "error": … }`
/// when its model call failed; an error body counts as a failure even on
/// a 200.
pub fn parse_reply(status: StatusCode, body: &str) -> Result<String> {
    if !status.is_success() {
        return Err(anyhow::anyhow!(
            "relay returned {}: {}",
            status,
            &body[..body.len().min(200)]
        ));
    }

    let parsed: Value = serde_json::from_str(body).context("relay reply was not JSON")?;

    if let Some(err) = parsed["error"].as_str() {
        return Err(anyhow::anyhow!("relay error: {}", err));
    }

    let reply = parsed["response"]
        .as_str()
        .context("relay reply had no response field")?
        .trim()
        .to_string();

    Ok(reply)
}
