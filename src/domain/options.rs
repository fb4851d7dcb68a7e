use std::fmt;

use serde::{Deserialize, Serialize};

use super::AppError;

/// Prompt-generation strategy requested from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    Basic,
    Quick,
    #[default]
    Deep,
    FewShot,
    Cot,
}

impl Mode {
    /// All available modes in display order.
    pub const ALL: [Mode; 5] = [Mode::Basic, Mode::Quick, Mode::Deep, Mode::FewShot, Mode::Cot];

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Basic => "basic",
            Mode::Quick => "quick",
            Mode::Deep => "deep",
            Mode::FewShot => "few-shot",
            Mode::Cot => "cot",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Basic => "Basic",
            Mode::Quick => "Quick",
            Mode::Deep => "Deep",
            Mode::FewShot => "Few-Shot Examples",
            Mode::Cot => "Chain of Thought",
        }
    }

    /// Parse a mode from its wire name.
    pub fn from_name(name: &str) -> Option<Mode> {
        match name.trim().to_lowercase().as_str() {
            "basic" => Some(Mode::Basic),
            "quick" => Some(Mode::Quick),
            "deep" => Some(Mode::Deep),
            "few-shot" | "fewshot" | "few_shot" => Some(Mode::FewShot),
            "cot" | "chain-of-thought" => Some(Mode::Cot),
            _ => None,
        }
    }

    pub fn parse(name: &str) -> Result<Mode, AppError> {
        Mode::from_name(name).ok_or_else(|| invalid("mode", name, Mode::ALL.map(|m| m.as_str())))
    }
}

/// Writing tone requested from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Default,
    Formal,
    Friendly,
    Professional,
    Casual,
}

impl Tone {
    pub const ALL: [Tone; 5] =
        [Tone::Default, Tone::Formal, Tone::Friendly, Tone::Professional, Tone::Casual];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Default => "default",
            Tone::Formal => "formal",
            Tone::Friendly => "friendly",
            Tone::Professional => "professional",
            Tone::Casual => "casual",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Default => "Default",
            Tone::Formal => "Formal",
            Tone::Friendly => "Friendly",
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
        }
    }

    pub fn from_name(name: &str) -> Option<Tone> {
        Tone::ALL.into_iter().find(|tone| tone.as_str() == name.trim().to_lowercase())
    }

    pub fn parse(name: &str) -> Result<Tone, AppError> {
        Tone::from_name(name).ok_or_else(|| invalid("tone", name, Tone::ALL.map(|t| t.as_str())))
    }
}

/// Output format the generated prompts should request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnFormat {
    #[default]
    Plain,
    Markdown,
    Json,
}

impl ReturnFormat {
    pub const ALL: [ReturnFormat; 3] =
        [ReturnFormat::Plain, ReturnFormat::Markdown, ReturnFormat::Json];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReturnFormat::Plain => "plain",
            ReturnFormat::Markdown => "markdown",
            ReturnFormat::Json => "json",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReturnFormat::Plain => "Plain Text",
            ReturnFormat::Markdown => "Markdown",
            ReturnFormat::Json => "JSON",
        }
    }

    pub fn from_name(name: &str) -> Option<ReturnFormat> {
        match name.trim().to_lowercase().as_str() {
            "plain" | "text" => Some(ReturnFormat::Plain),
            "markdown" | "md" => Some(ReturnFormat::Markdown),
            "json" => Some(ReturnFormat::Json),
            _ => None,
        }
    }

    pub fn parse(name: &str) -> Result<ReturnFormat, AppError> {
        ReturnFormat::from_name(name)
            .ok_or_else(|| invalid("format", name, ReturnFormat::ALL.map(|f| f.as_str())))
    }
}

/// Built-in persona clauses offered alongside free-form input.
pub const PERSONA_PRESETS: [(&str, &str, &str); 5] = [
    ("none", "None", ""),
    ("marketing-expert", "Marketing Expert", "as a marketing expert"),
    ("technical-writer", "Technical Writer", "as a technical writer"),
    ("teacher", "Teacher", "as a teacher"),
    ("business-consultant", "Business Consultant", "as a business consultant"),
];

/// Resolve a persona argument into the clause sent to the backend.
///
/// Preset keys map to their clause, `none` maps to the empty clause, anything
/// else is taken verbatim as a free-form clause.
pub fn resolve_persona(value: &str) -> String {
    let trimmed = value.trim();
    PERSONA_PRESETS
        .iter()
        .find(|(key, _, _)| key.eq_ignore_ascii_case(trimmed))
        .map(|(_, _, clause)| clause.to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

/// Label for a persona clause, falling back to the clause itself.
pub fn persona_label(clause: &str) -> &str {
    PERSONA_PRESETS
        .iter()
        .find(|(_, _, preset)| *preset == clause)
        .map(|(_, label, _)| *label)
        .unwrap_or(clause)
}

fn invalid<const N: usize>(kind: &'static str, value: &str, allowed: [&str; N]) -> AppError {
    AppError::InvalidOption { kind, value: value.to_string(), allowed: allowed.join(", ") }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ReturnFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
