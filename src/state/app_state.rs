//! Application state definitions

use super::forms::FormState;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Welcome,
    CustomerForm,
}

impl View {
    /// Resolve a route path. The empty path and unknown paths redirect home.
    pub fn from_route(path: &str) -> Self {
        match path.trim_start_matches(['#', '/']) {
            "form" => View::CustomerForm,
            _ => View::Welcome,
        }
    }

    pub fn route(&self) -> &'static str {
        match self {
            View::Welcome => "/home",
            View::CustomerForm => "/form",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Welcome => "Welcome",
            View::CustomerForm => "Customer Sign Up",
        }
    }

    pub fn is_form_view(&self) -> bool {
        matches!(self, View::CustomerForm)
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Form state
    pub form: FormState,

    // Error queue shown as modal dialogs, oldest first
    errors: VecDeque<String>,
}

impl AppState {
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    /// Errors queued behind the one on screen
    pub fn queued_errors(&self) -> usize {
        self.errors.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod routes {
        use super::*;

        #[test]
        fn test_empty_path_redirects_home() {
            assert_eq!(View::from_route(""), View::Welcome);
        }

        #[test]
        fn test_known_routes() {
            assert_eq!(View::from_route("home"), View::Welcome);
            assert_eq!(View::from_route("/form"), View::CustomerForm);
            assert_eq!(View::from_route("#/form"), View::CustomerForm);
        }

        #[test]
        fn test_unknown_route_redirects_home() {
            assert_eq!(View::from_route("/nowhere"), View::Welcome);
        }

        #[test]
        fn test_route_round_trip() {
            for view in [View::Welcome, View::CustomerForm] {
                assert_eq!(View::from_route(view.route()), view);
            }
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn test_error_queue_is_fifo() {
            let mut state = AppState::default();
            assert!(!state.has_errors());
            state.push_error("first".to_string());
            state.push_error("second".to_string());
            assert_eq!(state.current_error(), Some("first"));
            assert_eq!(state.queued_errors(), 1);
            state.dismiss_error();
            assert_eq!(state.current_error(), Some("second"));
            state.dismiss_error();
            assert!(!state.has_errors());
        }
    }
}
