mod fake_prompt_client;
mod mock_clipboard;

pub use fake_prompt_client::FakePromptClient;
pub use mock_clipboard::MockClipboard;
