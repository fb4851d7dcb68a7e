//! View controller: landing vs working, mirrored into the location.

use crate::app::persistence::Persistence;
use crate::domain::{Location, View};
use crate::ports::SessionStore;

/// Resolves and transitions the top-level view.
///
/// The location's `view` parameter is authoritative. The persisted started
/// flag only decides the view when the location does not request the working
/// view, and in that case the location is rewritten to agree with it.
pub struct ViewController<'a, S: SessionStore> {
    persistence: &'a Persistence<S>,
    view: View,
    location: Location,
}

impl<'a, S: SessionStore> ViewController<'a, S> {
    /// Derive the initial view for a location.
    pub fn resolve(persistence: &'a Persistence<S>, location: Location) -> Self {
        let location = location.normalized();
        let (view, location) = if location.requests_working_view() {
            (View::Working, location)
        } else if persistence.started() {
            let rewritten = location.with_working_view();
            (View::Working, rewritten)
        } else {
            (View::Landing, location)
        };

        tracing::debug!(%view, %location, "resolved view");
        Self { persistence, view, location }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Enter the working view.
    pub fn start(&mut self) {
        self.view = View::Working;
        self.location = self.location.with_working_view();
        self.persistence.set_started(true);
    }

    /// Return to the landing view.
    ///
    /// Clears the started flag as well, so a later bare location stays on the
    /// landing view.
    pub fn back(&mut self) {
        self.view = View::Landing;
        self.location = self.location.without_view();
        self.persistence.set_started(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemorySessionStore;

    fn location(value: &str) -> Location {
        Location::parse(value).unwrap()
    }

    #[test]
    fn fresh_store_bare_location_is_landing() {
        let persistence = Persistence::new(MemorySessionStore::new());
        let controller = ViewController::resolve(&persistence, Location::root());
        assert_eq!(controller.view(), View::Landing);
        assert_eq!(controller.location().to_string(), "/");
    }

    #[test]
    fn query_parameter_selects_working_without_prior_state() {
        let persistence = Persistence::new(MemorySessionStore::new());
        let controller = ViewController::resolve(&persistence, location("/?view=prompt"));
        assert_eq!(controller.view(), View::Working);
        assert!(persistence.load_results().is_empty());
    }

    #[test]
    fn persisted_flag_rewrites_location() {
        let persistence = Persistence::new(MemorySessionStore::new());
        persistence.set_started(true);

        let controller = ViewController::resolve(&persistence, Location::root());
        assert_eq!(controller.view(), View::Working);
        assert_eq!(controller.location().to_string(), "/?view=prompt");
    }

    #[test]
    fn legacy_path_resolves_to_working() {
        let persistence = Persistence::new(MemorySessionStore::new());
        let controller = ViewController::resolve(&persistence, location("/prompt"));
        assert_eq!(controller.view(), View::Working);
        assert_eq!(controller.location().to_string(), "/?view=prompt");
    }

    #[test]
    fn start_sets_parameter_and_flag() {
        let persistence = Persistence::new(MemorySessionStore::new());
        let mut controller = ViewController::resolve(&persistence, Location::root());

        controller.start();
        assert_eq!(controller.view(), View::Working);
        assert_eq!(controller.location().to_string(), "/?view=prompt");
        assert!(persistence.started());
    }

    #[test]
    fn back_then_reload_stays_on_landing() {
        let persistence = Persistence::new(MemorySessionStore::new());
        let mut controller = ViewController::resolve(&persistence, Location::root());
        controller.start();
        controller.back();
        assert_eq!(controller.view(), View::Landing);
        assert_eq!(controller.location().to_string(), "/");

        let reloaded = ViewController::resolve(&persistence, controller.location().clone());
        assert_eq!(reloaded.view(), View::Landing);
    }
}
