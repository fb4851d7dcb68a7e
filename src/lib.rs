//! prompteng: turn a rough idea into engineered prompts via a prompt-refinement backend.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    ViewOutcome, back, copy, copy_all, create_context_at, edit_form, explain, form, generate,
    results, start, view,
};
pub use app::config::AppPaths;
pub use app::{
    AppContext, FormController, FormEdit, Notice, Persistence, ResultsView, ViewController,
};
pub use domain::{
    AppError, DisplayPrompt, Location, Mode, NoticeKind, PromptRequest, PromptResponse,
    ReturnFormat, Tone, View,
};
