mod clipboard_writer;
mod prompt_client;
mod session_store;

pub use clipboard_writer::ClipboardWriter;
pub use prompt_client::PromptClient;
pub use session_store::{SessionStore, StateKey};
