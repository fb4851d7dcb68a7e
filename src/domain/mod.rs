pub mod config;
pub mod error;
pub mod options;
pub mod prompt;
pub mod view;

pub use config::{API_URL_ENV, ApiConfig, ClientConfig, DEFAULT_API_URL};
pub use error::{AppError, NoticeKind};
pub use options::{Mode, PERSONA_PRESETS, ReturnFormat, Tone, persona_label, resolve_persona};
pub use prompt::{
    COPY_ALL_SEPARATOR, DisplayPrompt, PromptRequest, PromptResponse, clean_prompt_text,
    join_prompts,
};
pub use view::{Location, VIEW_PARAM, View, WORKING_VIEW_VALUE};
