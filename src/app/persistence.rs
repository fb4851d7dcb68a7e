//! Typed persistence over a [`SessionStore`].
//!
//! Writes are best-effort: failures are logged and never interrupt the
//! caller. Reads that fail or hold undecodable content fall back to defaults.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::{AppError, DisplayPrompt, PromptRequest};
use crate::ports::{SessionStore, StateKey};

/// Typed access to the started flag, form state, and last results.
#[derive(Debug, Clone)]
pub struct Persistence<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether the user has entered the working view before.
    pub fn started(&self) -> bool {
        self.restore_with(StateKey::Started, parse_flag).unwrap_or(false)
    }

    pub fn set_started(&self, started: bool) {
        self.write(StateKey::Started, if started { "true" } else { "false" });
    }

    /// Last edited form, or the defaults.
    pub fn load_form(&self) -> PromptRequest {
        self.restore(StateKey::Form).unwrap_or_default()
    }

    pub fn save_form(&self, form: &PromptRequest) {
        self.save_json(StateKey::Form, form);
    }

    /// Last displayed results, or an empty batch.
    pub fn load_results(&self) -> Vec<DisplayPrompt> {
        self.restore(StateKey::Results).unwrap_or_default()
    }

    pub fn save_results(&self, results: &[DisplayPrompt]) {
        self.save_json(StateKey::Results, results);
    }

    /// Decode a stored JSON value, reporting corrupt content as an error.
    pub fn load_json<T: DeserializeOwned>(&self, key: StateKey) -> Result<Option<T>, AppError> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw).map(Some).map_err(|e| AppError::PersistenceParse {
            key: key.to_string(),
            details: e.to_string(),
        })
    }

    fn restore<T: DeserializeOwned>(&self, key: StateKey) -> Option<T> {
        match self.load_json(key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(%key, error = %err, "discarding unreadable persisted state");
                None
            }
        }
    }

    fn restore_with<T>(
        &self,
        key: StateKey,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> Option<T> {
        let decoded = self.store.get(key).and_then(|raw| {
            raw.map(|value| {
                parse(&value).map_err(|details| AppError::PersistenceParse {
                    key: key.to_string(),
                    details,
                })
            })
            .transpose()
        });
        match decoded {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(%key, error = %err, "discarding unreadable persisted state");
                None
            }
        }
    }

    fn save_json<T: Serialize + ?Sized>(&self, key: StateKey, value: &T) {
        match serde_json::to_string(value) {
            Ok(encoded) => self.write(key, &encoded),
            Err(err) => tracing::warn!(%key, error = %err, "failed to encode state"),
        }
    }

    fn write(&self, key: StateKey, value: &str) {
        if let Err(err) = self.store.set(key, value) {
            tracing::warn!(%key, error = %err, "failed to persist state");
        }
    }
}

fn parse_flag(value: &str) -> Result<bool, String> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(format!("expected 'true' or 'false', found '{}'", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemorySessionStore;
    use crate::domain::{Mode, ReturnFormat, Tone};

    fn persistence() -> Persistence<MemorySessionStore> {
        Persistence::new(MemorySessionStore::new())
    }

    #[test]
    fn form_state_roundtrips_across_reload() {
        let store = MemorySessionStore::new();
        let form = PromptRequest {
            raw_input: "x".into(),
            mode: Mode::Quick,
            tone: Tone::Casual,
            persona: String::new(),
            return_format: ReturnFormat::Json,
        };
        Persistence::new(store.clone()).save_form(&form);

        let reloaded = Persistence::new(store);
        assert_eq!(reloaded.load_form(), form);
    }

    #[test]
    fn empty_store_restores_defaults() {
        let persistence = persistence();
        assert!(!persistence.started());
        assert_eq!(persistence.load_form(), PromptRequest::default());
        assert!(persistence.load_results().is_empty());
    }

    #[test]
    fn corrupt_form_falls_back_to_defaults() {
        let store = MemorySessionStore::new().with(StateKey::Form, "{not json");
        let persistence = Persistence::new(store);

        assert_eq!(persistence.load_form(), PromptRequest::default());
        assert!(matches!(
            persistence.load_json::<PromptRequest>(StateKey::Form),
            Err(AppError::PersistenceParse { .. })
        ));
    }

    #[test]
    fn unknown_mode_in_stored_form_is_treated_as_corrupt() {
        let store = MemorySessionStore::new().with(
            StateKey::Form,
            r#"{"raw_input":"x","mode":"turbo","tone":"default","persona":"","return_format":"plain"}"#,
        );
        assert_eq!(Persistence::new(store).load_form(), PromptRequest::default());
    }

    #[test]
    fn corrupt_results_fall_back_to_empty() {
        let store = MemorySessionStore::new().with(StateKey::Results, r#"{"id": 3}"#);
        assert!(Persistence::new(store).load_results().is_empty());
    }

    #[test]
    fn results_keep_explanations() {
        let persistence = persistence();
        let results = vec![
            DisplayPrompt { id: "0".into(), prompt: "A".into(), explanation: Some("why".into()) },
            DisplayPrompt { id: "1".into(), prompt: "B".into(), explanation: None },
        ];
        persistence.save_results(&results);
        assert_eq!(persistence.load_results(), results);
    }

    #[test]
    fn started_flag_is_stored_as_string() {
        let persistence = persistence();
        persistence.set_started(true);
        assert!(persistence.started());
        assert_eq!(persistence.store().get(StateKey::Started).unwrap().as_deref(), Some("true"));

        persistence.set_started(false);
        assert!(!persistence.started());
    }

    #[test]
    fn unreadable_flag_counts_as_not_started() {
        let store = MemorySessionStore::new().with(StateKey::Started, "yes please");
        assert!(!Persistence::new(store).started());
    }
}
