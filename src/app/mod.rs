pub mod api;
pub mod cli;
pub mod config;
mod context;
pub mod form;
pub mod logging;
pub mod notice;
pub mod persistence;
pub mod results;
pub mod view;

pub use context::AppContext;
pub use form::{FormController, FormEdit};
pub use notice::Notice;
pub use persistence::Persistence;
pub use results::ResultsView;
pub use view::ViewController;
