//! Prompt request, response, and display models.

use serde::{Deserialize, Serialize};

use super::{AppError, Mode, ReturnFormat, Tone};

/// Separator placed between prompts when copying a whole batch.
pub const COPY_ALL_SEPARATOR: &str = "\n\n---\n\n";

/// A generation request as sent to the backend.
///
/// All five fields are always serialized; only `raw_input` carries a content
/// invariant (non-blank), checked by [`PromptRequest::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PromptRequest {
    pub raw_input: String,
    pub mode: Mode,
    pub tone: Tone,
    pub persona: String,
    pub return_format: ReturnFormat,
}

impl PromptRequest {
    pub fn new(raw_input: impl Into<String>) -> Self {
        Self { raw_input: raw_input.into(), ..Self::default() }
    }

    /// Reject blank input before any network call.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.raw_input.trim().is_empty() {
            return Err(AppError::validation("Please enter an idea or request before generating"));
        }
        Ok(())
    }
}

/// Successful backend answer: generated prompts in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PromptResponse {
    pub refined_prompts: Vec<String>,
}

/// One rendered result card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPrompt {
    /// Index within its response batch. Not unique across batches.
    pub id: String,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl DisplayPrompt {
    /// Map a response into display items for the mode that produced it.
    pub fn from_response(mode: Mode, response: PromptResponse) -> Vec<DisplayPrompt> {
        response
            .refined_prompts
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                let prompt = if mode == Mode::Deep { clean_prompt_text(&text) } else { text };
                DisplayPrompt { id: index.to_string(), prompt, explanation: None }
            })
            .collect()
    }
}

/// Strip `**` emphasis markers and surrounding whitespace.
pub fn clean_prompt_text(text: &str) -> String {
    text.replace("**", "").trim().to_string()
}

/// Join every prompt text with [`COPY_ALL_SEPARATOR`].
pub fn join_prompts(prompts: &[DisplayPrompt]) -> String {
    prompts.iter().map(|p| p.prompt.as_str()).collect::<Vec<_>>().join(COPY_ALL_SEPARATOR)
}
