//! Prompt backend client port definition.

use crate::domain::{AppError, PromptRequest, PromptResponse};

/// Port for prompt backend operations.
pub trait PromptClient {
    /// Generate refined prompts for a request.
    fn generate(&self, request: &PromptRequest) -> Result<PromptResponse, AppError>;

    /// Ask the backend to explain what makes a prompt effective.
    fn explain(&self, prompt: &str) -> Result<String, AppError>;

    /// Base URL requests are sent to, for user-facing messages.
    fn base_url(&self) -> String;
}
