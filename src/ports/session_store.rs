//! Per-user key/value persistence port.

use std::fmt;

use crate::domain::AppError;

/// Keys persisted between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKey {
    /// Whether the user has entered the working view.
    Started,
    /// Last edited form state.
    Form,
    /// Last displayed result batch.
    Results,
}

impl StateKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StateKey::Started => "started",
            StateKey::Form => "form",
            StateKey::Results => "results",
        }
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Port for string values stored under fixed keys.
pub trait SessionStore {
    /// Read a value; `None` when nothing was stored.
    fn get(&self, key: StateKey) -> Result<Option<String>, AppError>;

    /// Store a value, replacing any previous one.
    fn set(&self, key: StateKey, value: &str) -> Result<(), AppError>;
}
