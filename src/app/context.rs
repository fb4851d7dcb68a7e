use crate::app::form::FormController;
use crate::app::persistence::Persistence;
use crate::app::results::ResultsView;
use crate::app::view::ViewController;
use crate::domain::Location;
use crate::ports::{PromptClient, SessionStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<C: PromptClient, S: SessionStore> {
    client: C,
    persistence: Persistence<S>,
}

impl<C: PromptClient, S: SessionStore> AppContext<C, S> {
    /// Create a new application context.
    pub fn new(client: C, store: S) -> Self {
        Self { client, persistence: Persistence::new(store) }
    }

    /// Form controller restored from persisted state.
    pub fn form(&self) -> FormController<'_, C, S> {
        FormController::new(&self.client, &self.persistence)
    }

    /// View controller resolved for a location.
    pub fn view(&self, location: Location) -> ViewController<'_, S> {
        ViewController::resolve(&self.persistence, location)
    }

    /// Results view over the last persisted batch.
    pub fn results(&self) -> ResultsView {
        ResultsView::new(self.persistence.load_results())
    }
}
