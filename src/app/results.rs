//! Results display over a batch of [`DisplayPrompt`]s.

use crate::domain::{AppError, DisplayPrompt, join_prompts};
use crate::ports::ClipboardWriter;

const HEADING: &str = "Your Engineered Prompts";

/// Read-only view of one result batch with a global explanation toggle.
#[derive(Debug, Clone, Default)]
pub struct ResultsView {
    prompts: Vec<DisplayPrompt>,
    show_explanations: bool,
}

impl ResultsView {
    pub fn new(prompts: Vec<DisplayPrompt>) -> Self {
        Self { prompts, show_explanations: false }
    }

    pub fn prompts(&self) -> &[DisplayPrompt] {
        &self.prompts
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    pub fn show_explanations(&self) -> bool {
        self.show_explanations
    }

    pub fn set_show_explanations(&mut self, show: bool) {
        self.show_explanations = show;
    }

    pub fn toggle_explanations(&mut self) {
        self.show_explanations = !self.show_explanations;
    }

    /// Copy a single prompt's text.
    pub fn copy_one(&self, id: &str, clipboard: &mut dyn ClipboardWriter) -> Result<(), AppError> {
        let item = self
            .prompts
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(|| AppError::PromptNotFound(id.to_string()))?;
        clipboard.write_text(&item.prompt)
    }

    /// Copy every prompt joined by the fixed separator. Returns the number of
    /// prompts copied; an empty batch copies nothing.
    pub fn copy_all(&self, clipboard: &mut dyn ClipboardWriter) -> Result<usize, AppError> {
        if self.prompts.is_empty() {
            return Ok(0);
        }
        clipboard.write_text(&join_prompts(&self.prompts))?;
        Ok(self.prompts.len())
    }

    /// Plain-text rendering. An empty batch renders as an empty string.
    pub fn render(&self) -> String {
        if self.prompts.is_empty() {
            return String::new();
        }

        let mut out = format!("{}\n", HEADING);
        for item in &self.prompts {
            out.push_str(&format!("\n[{}]\n{}\n", item.id, item.prompt));
            if self.show_explanations {
                if let Some(explanation) = &item.explanation {
                    out.push_str(&format!("\nExplanation:\n{}\n", explanation));
                }
            }
        }
        out
    }
}
