//! Form controller: editable request state and the submission path.

use crate::app::persistence::Persistence;
use crate::domain::{AppError, DisplayPrompt, Mode, PromptRequest, ReturnFormat, Tone};
use crate::ports::{PromptClient, SessionStore};

/// A batch of optional field edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormEdit {
    pub raw_input: Option<String>,
    pub mode: Option<Mode>,
    pub tone: Option<Tone>,
    pub persona: Option<String>,
    pub return_format: Option<ReturnFormat>,
}

impl FormEdit {
    pub fn is_empty(&self) -> bool {
        self == &FormEdit::default()
    }
}

/// Owns the editable request and drives generation.
///
/// Every edit is persisted immediately; results are persisted only after a
/// successful submission, so a failed submission leaves the previous batch
/// in place.
pub struct FormController<'a, C: PromptClient, S: SessionStore> {
    client: &'a C,
    persistence: &'a Persistence<S>,
    state: PromptRequest,
}

impl<'a, C: PromptClient, S: SessionStore> FormController<'a, C, S> {
    /// Create a controller restored from persisted form state.
    pub fn new(client: &'a C, persistence: &'a Persistence<S>) -> Self {
        let state = persistence.load_form();
        Self { client, persistence, state }
    }

    pub fn state(&self) -> &PromptRequest {
        &self.state
    }

    pub fn set_raw_input(&mut self, value: impl Into<String>) {
        self.state.raw_input = value.into();
        self.persist();
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.state.mode = mode;
        self.persist();
    }

    pub fn set_tone(&mut self, tone: Tone) {
        self.state.tone = tone;
        self.persist();
    }

    /// Set the persona clause; an empty clause means no persona.
    pub fn set_persona(&mut self, clause: impl Into<String>) {
        self.state.persona = clause.into();
        self.persist();
    }

    pub fn set_return_format(&mut self, format: ReturnFormat) {
        self.state.return_format = format;
        self.persist();
    }

    /// Apply each present field as an individual edit.
    pub fn apply(&mut self, edit: FormEdit) {
        if let Some(value) = edit.raw_input {
            self.set_raw_input(value);
        }
        if let Some(mode) = edit.mode {
            self.set_mode(mode);
        }
        if let Some(tone) = edit.tone {
            self.set_tone(tone);
        }
        if let Some(persona) = edit.persona {
            self.set_persona(persona);
        }
        if let Some(format) = edit.return_format {
            self.set_return_format(format);
        }
    }

    /// Validate, call the backend, and map the response into display items.
    ///
    /// The exclusive borrow keeps one request per controller in flight.
    pub fn submit(&mut self) -> Result<Vec<DisplayPrompt>, AppError> {
        self.state.validate()?;

        let request = self.state.clone();
        let response = self.client.generate(&request)?;

        let prompts = DisplayPrompt::from_response(request.mode, response);
        tracing::info!(count = prompts.len(), mode = %request.mode, "generated prompts");
        self.persistence.save_results(&prompts);
        Ok(prompts)
    }

    /// Fetch and store an explanation for one displayed prompt.
    pub fn explain(&mut self, id: &str) -> Result<DisplayPrompt, AppError> {
        let mut results = self.persistence.load_results();
        let index = results
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| AppError::PromptNotFound(id.to_string()))?;

        let explanation = self.client.explain(&results[index].prompt)?;

        results[index].explanation = Some(explanation);
        self.persistence.save_results(&results);
        Ok(results[index].clone())
    }

    fn persist(&self) {
        self.persistence.save_form(&self.state);
    }
}
