//! Prompt backend client implementation using reqwest.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{ApiConfig, AppError, PromptRequest, PromptResponse};
use crate::ports::PromptClient;

const REFINE_PATH: &str = "/refine";
const EXPLAIN_PATH: &str = "/explain";
const DEFAULT_STATUS_MESSAGE: &str = "Prompt backend request failed";

/// HTTP transport for the prompt backend.
///
/// Each call performs exactly one request. There is no retry layer.
#[derive(Debug, Clone)]
pub struct HttpPromptClient {
    base_url: Url,
    client: Client,
}

impl HttpPromptClient {
    /// Create a new HTTP client from API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let base_url = config.base_url()?;
        let client = Client::builder()
            .timeout(config.timeout()?)
            .build()
            .map_err(|e| {
                AppError::config_error(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { base_url, client })
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        let joined = format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path);
        Url::parse(&joined)
            .map_err(|e| AppError::config_error(format!("Invalid endpoint '{}': {}", joined, e)))
    }

    fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, AppError> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "sending prompt backend request");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body_text = response.text().map_err(|e| AppError::Api {
            status: Some(status.as_u16()),
            message: format!("Failed to read response body: {}", e),
        })?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "prompt backend returned an error status");
            let message = if body_text.trim().is_empty() {
                status.canonical_reason().unwrap_or(DEFAULT_STATUS_MESSAGE).to_string()
            } else {
                body_text
            };
            return Err(AppError::Api { status: Some(status.as_u16()), message });
        }

        serde_json::from_str(&body_text).map_err(|e| AppError::Api {
            status: Some(status.as_u16()),
            message: format!("Failed to parse response: {}", e),
        })
    }

    fn transport_error(&self, error: reqwest::Error) -> AppError {
        tracing::warn!(error = %error, "prompt backend request failed");
        if error.is_connect() || error.is_timeout() {
            AppError::Connectivity { base_url: self.base_url(), details: error.to_string() }
        } else {
            AppError::Api { status: None, message: format!("HTTP request failed: {}", error) }
        }
    }
}

#[derive(Debug, Deserialize)]
struct RefineResponse {
    #[serde(default)]
    refined_prompts: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct ExplainRequest<'a> {
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct ExplainResponse {
    #[serde(default)]
    explanation: Option<String>,
}

impl PromptClient for HttpPromptClient {
    fn generate(&self, request: &PromptRequest) -> Result<PromptResponse, AppError> {
        request.validate()?;

        let response: RefineResponse = self.post_json(REFINE_PATH, request)?;
        let refined_prompts = response
            .refined_prompts
            .ok_or_else(|| AppError::EmptyResult { what: "prompts".into() })?;

        Ok(PromptResponse { refined_prompts })
    }

    fn explain(&self, prompt: &str) -> Result<String, AppError> {
        if prompt.trim().is_empty() {
            return Err(AppError::validation("Cannot explain an empty prompt"));
        }

        let response: ExplainResponse = self.post_json(EXPLAIN_PATH, &ExplainRequest { prompt })?;
        response
            .explanation
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| AppError::EmptyResult { what: "explanation".into() })
    }

    fn base_url(&self) -> String {
        self.base_url.as_str().trim_end_matches('/').to_string()
    }
}
