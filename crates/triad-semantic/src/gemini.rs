//! Gemini `generateContent` client.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use triad_config::SemanticConfig;

use crate::error::SemanticError;
use crate::http::check_response;
use crate::response::parse_observations;
use crate::{SectionObservation, SemanticService, UnitSummary, prompts};

// ── Wire types ─────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_p: f64,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate.
    fn text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .filter_map(|p| p.text)
            .collect();
        if text.trim().is_empty() { None } else { Some(text) }
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// Blocking HTTP client for the Gemini generative language API.
pub struct GeminiClient {
    http: reqwest::blocking::Client,
    url: String,
    api_key: String,
    temperature: f64,
    top_p: f64,
}

impl GeminiClient {
    /// Build a client from configuration. The configured timeout applies to
    /// every call.
    ///
    /// # Errors
    ///
    /// Returns [`SemanticError::Http`] if the underlying client fails to build.
    pub fn new(config: &SemanticConfig) -> Result<Self, SemanticError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent("triad/0.1")
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            url: format!(
                "{}/v1beta/models/{}:generateContent",
                config.endpoint.trim_end_matches('/'),
                config.model
            ),
            api_key: config.api_key.clone(),
            temperature: config.temperature,
            top_p: config.top_p,
        })
    }

    /// One `generateContent` round trip.
    ///
    /// # Errors
    ///
    /// Returns [`SemanticError`] on transport failure, non-success status, or
    /// a reply without text.
    pub fn generate(&self, prompt: &str, system_instruction: &str) -> Result<String, SemanticError> {
        let body = GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: system_instruction,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                top_p: self.top_p,
            },
        };

        tracing::debug!(url = %self.url, prompt_len = prompt.len(), "calling generateContent");
        let resp = check_response(
            self.http
                .post(&self.url)
                .header("x-goog-api-key", &self.api_key)
                .json(&body)
                .send()?,
        )?;
        let data: GenerateResponse = resp.json()?;
        data.text().ok_or(SemanticError::EmptyResponse)
    }
}

impl SemanticService for GeminiClient {
    fn extract_section(&self, section_text: &str) -> Result<Vec<SectionObservation>, SemanticError> {
        let reply = self.generate(
            &prompts::extraction_prompt(section_text),
            prompts::EXTRACTION_SYSTEM,
        )?;
        parse_observations(&reply)
    }

    fn describe_unit(&self, unit: &UnitSummary) -> Result<String, SemanticError> {
        let reply = self.generate(&prompts::narration_prompt(unit)?, prompts::NARRATION_SYSTEM)?;
        Ok(reply.trim().to_string())
    }
}
