mod clipboard_arboard;
mod memory_session_store;
mod prompt_client_http;
mod session_store_filesystem;

pub use clipboard_arboard::ArboardClipboard;
pub use memory_session_store::MemorySessionStore;
pub use prompt_client_http::HttpPromptClient;
pub use session_store_filesystem::FilesystemSessionStore;
