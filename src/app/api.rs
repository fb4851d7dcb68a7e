//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and controller execution.

use crate::adapters::{ArboardClipboard, FilesystemSessionStore, HttpPromptClient};
use crate::app::AppContext;
use crate::app::config::{AppPaths, resolve_api_config};
use crate::app::form::FormEdit;
use crate::app::results::ResultsView;
use crate::domain::{AppError, DisplayPrompt, Location, PromptRequest, View};

/// Resolved view and the location that reflects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOutcome {
    pub view: View,
    pub location: Location,
}

/// Context wired to the HTTP client and the filesystem store.
pub type DefaultContext = AppContext<HttpPromptClient, FilesystemSessionStore>;

/// Create an `AppContext` from the per-user configuration directory.
fn create_context() -> Result<DefaultContext, AppError> {
    let paths = AppPaths::from_home()?;
    create_context_at(&paths)
}

/// Create an `AppContext` rooted at a specific configuration directory.
pub fn create_context_at(paths: &AppPaths) -> Result<DefaultContext, AppError> {
    let api = resolve_api_config(paths)?;
    let client = HttpPromptClient::new(&api)?;
    let store = FilesystemSessionStore::new(paths.state_dir());
    Ok(AppContext::new(client, store))
}

fn parse_location(location: Option<&str>) -> Result<Location, AppError> {
    location.map(Location::parse).transpose().map(Option::unwrap_or_default)
}

// =============================================================================
// View API
// =============================================================================

/// Resolve which view a location shows.
pub fn view(location: Option<&str>) -> Result<ViewOutcome, AppError> {
    let ctx = create_context()?;
    let controller = ctx.view(parse_location(location)?);
    Ok(ViewOutcome { view: controller.view(), location: controller.location().clone() })
}

/// Enter the working view.
pub fn start(location: Option<&str>) -> Result<ViewOutcome, AppError> {
    let ctx = create_context()?;
    let mut controller = ctx.view(parse_location(location)?);
    controller.start();
    Ok(ViewOutcome { view: controller.view(), location: controller.location().clone() })
}

/// Return to the landing view.
pub fn back(location: Option<&str>) -> Result<ViewOutcome, AppError> {
    let ctx = create_context()?;
    let mut controller = ctx.view(parse_location(location)?);
    controller.back();
    Ok(ViewOutcome { view: controller.view(), location: controller.location().clone() })
}

// =============================================================================
// Form API
// =============================================================================

/// Current form state.
pub fn form() -> Result<PromptRequest, AppError> {
    let ctx = create_context()?;
    Ok(ctx.form().state().clone())
}

/// Apply field edits and return the updated form state.
pub fn edit_form(edit: FormEdit) -> Result<PromptRequest, AppError> {
    let ctx = create_context()?;
    let mut form = ctx.form();
    form.apply(edit);
    Ok(form.state().clone())
}

/// Apply optional edits, then submit the form.
pub fn generate(edit: FormEdit) -> Result<Vec<DisplayPrompt>, AppError> {
    let ctx = create_context()?;
    let mut form = ctx.form();
    form.apply(edit);
    form.submit()
}

/// Fetch and store an explanation for one displayed prompt.
pub fn explain(id: &str) -> Result<DisplayPrompt, AppError> {
    let ctx = create_context()?;
    ctx.form().explain(id)
}

// =============================================================================
// Results API
// =============================================================================

/// The last persisted result batch.
pub fn results(show_explanations: bool) -> Result<ResultsView, AppError> {
    let ctx = create_context()?;
    let mut results = ctx.results();
    results.set_show_explanations(show_explanations);
    Ok(results)
}

/// Copy one prompt to the system clipboard.
pub fn copy(id: &str) -> Result<(), AppError> {
    let ctx = create_context()?;
    ctx.results().copy_one(id, &mut ArboardClipboard::new())
}

/// Copy every prompt to the system clipboard.
pub fn copy_all() -> Result<usize, AppError> {
    let ctx = create_context()?;
    ctx.results().copy_all(&mut ArboardClipboard::new())
}
