use super::types::{GenerateRequest, GenerateResponse};
use crate::{Error, Result, config::GeminiConfig};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, error, warn};

#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Issues one generateContent call and returns the first candidate's
    /// first text part.
    async fn generate_content(
        &self,
        request: GenerateRequest,
        timeout: Option<Duration>,
    ) -> Result<String>;
}

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        // No default total timeout on the client: callers that want one
        // pass it per request.
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key,
            model: config.model,
            base_url: config.base_url,
        }
    }

    fn api_url(&self, api_key: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, api_key
        )
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate_content(
        &self,
        request: GenerateRequest,
        timeout: Option<Duration>,
    ) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::config("Gemini API key is not configured"))?;

        debug!(
            "Sending generateContent request with {} content blocks",
            request.contents.len()
        );

        let mut request_builder = self.http.post(self.api_url(api_key)).json(&request);
        if let Some(timeout) = timeout {
            request_builder = request_builder.timeout(timeout);
        }

        let response = match request_builder.send().await {
            Ok(response) => response,
            Err(e) => {
                error!("No response from Gemini API: {}", e);
                return Err(Error::transport("no response received from upstream"));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Gemini API returned {}: {}", status, body);
            return Err(Error::upstream("upstream returned an error status"));
        }

        let response: GenerateResponse = match response.json().await {
            Ok(response) => response,
            Err(e) => {
                error!("Failed to decode Gemini API response: {}", e);
                return Err(Error::upstream("upstream response could not be decoded"));
            }
        };

        let text = response
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.clone())
            .unwrap_or_default();

        if text.is_empty() {
            warn!("Gemini API returned no candidate text");
            return Err(Error::upstream("empty response from upstream"));
        }

        debug!("Received {} bytes of candidate text", text.len());
        Ok(text)
    }
}
