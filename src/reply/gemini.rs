//! Google Gemini REST client.

use crate::config::GeminiConfig;
use crate::core::Topic;
use crate::error::{ReplyError, Result};
use crate::reply::ReplyGenerator;
use crate::reply::prompt::build_prompt;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Blocking client for the Gemini `generateContent` endpoint.
///
/// # Examples
///
/// ```no_run
/// use courtside::config::GeminiConfig;
/// use courtside::core::Topic;
/// use courtside::reply::{GeminiClient, ReplyGenerator};
///
/// let config = GeminiConfig::default().api_key(std::env::var("GOOGLE_API_KEY").ok());
/// let client = GeminiClient::new(config).unwrap();
/// let reply = client.generate("Give me a warm-up", Topic::Dribbling).unwrap();
/// ```
pub struct GeminiClient {
    config: GeminiConfig,
    client: reqwest::blocking::Client,
}

impl GeminiClient {
    /// Creates a client from validated settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        config.validate()?;
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ReplyError::from)?;
        Ok(Self { config, client })
    }

    /// The model requests are sent to.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    fn send(&self, api_key: &str, prompt: &str) -> std::result::Result<String, ReplyError> {
        let body = GenerateRequest {
            contents: vec![Content {
                role: Some("user"),
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    ReplyError::Connection(self.config.base_url.clone())
                } else if e.is_timeout() {
                    ReplyError::Timeout(self.config.timeout_secs)
                } else {
                    ReplyError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        let text = response.text()?;
        if !status.is_success() {
            return Err(ReplyError::Api {
                status: status.as_u16(),
                body: api_error_message(&text).unwrap_or(text),
            });
        }

        parse_response(&text)
    }
}

impl ReplyGenerator for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    fn generate(&self, prompt: &str, topic: Topic) -> std::result::Result<String, ReplyError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ReplyError::MissingApiKey)?;
        let full_prompt = build_prompt(prompt, topic);
        debug!(
            model = %self.config.model,
            prompt_chars = full_prompt.len(),
            "sending generateContent request"
        );
        self.send(api_key, &full_prompt)
    }
}

/// Request body for `generateContent`.
#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

/// Response body from `generateContent`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<u64>,
    candidates_token_count: Option<u64>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetails,
}

#[derive(Deserialize)]
struct ApiErrorDetails {
    message: String,
    status: Option<String>,
}

/// Pulls the reply text out of a `generateContent` response body.
///
/// The text parts of the first candidate are concatenated.
fn parse_response(body: &str) -> std::result::Result<String, ReplyError> {
    let parsed: GenerateResponse =
        serde_json::from_str(body).map_err(|e| ReplyError::ResponseParsing(e.to_string()))?;

    if let Some(usage) = &parsed.usage_metadata {
        debug!(
            prompt_tokens = usage.prompt_token_count.unwrap_or(0),
            reply_tokens = usage.candidates_token_count.unwrap_or(0),
            "gemini token usage"
        );
    }

    let candidate = parsed
        .candidates
        .into_iter()
        .next()
        .ok_or(ReplyError::EmptyResponse)?;

    if let Some(reason) = candidate.finish_reason.as_deref()
        && reason != "STOP"
    {
        debug!(finish_reason = reason, "reply finished early");
    }

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(ReplyError::EmptyResponse);
    }
    Ok(text)
}

/// Extracts a readable message from a Gemini error body.
fn api_error_message(body: &str) -> Option<String> {
    let parsed: ApiErrorBody = serde_json::from_str(body).ok()?;
    Some(match parsed.error.status {
        Some(status) => format!("{} ({status})", parsed.error.message),
        None => parsed.error.message,
    })
}
