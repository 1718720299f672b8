//! Application state management for wxdash
//!
//! This module contains the main application state: the lookup lifecycle
//! state machine, the editable query text, keyboard handling, and the
//! request sequencing that keeps overlapping lookups from racing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::data::{WeatherError, WeatherSnapshot};

/// Lookup lifecycle state.
///
/// Exactly one of these holds at any time, so invalid combinations (an error
/// alongside an in-flight request, for instance) cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    /// No lookup has been issued yet
    Idle,
    /// A request is in flight.
    ///
    /// Keeps the previous snapshot (if any) so the dashboard stays on
    /// screen while a refresh resolves.
    Loading {
        /// Snapshot from the last successful lookup, if there was one
        prior: Option<WeatherSnapshot>,
    },
    /// The last lookup succeeded
    Success(WeatherSnapshot),
    /// The last lookup failed; the snapshot is gone
    Failure {
        /// User-facing error text
        message: String,
    },
}

/// A lookup the main loop should dispatch.
///
/// `seq` ties the eventual [`FetchOutcome`] back to this request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Sequence number of this request
    pub seq: u64,
    /// City name to look up
    pub city: String,
}

/// Completion of a dispatched lookup, delivered back to the app.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Sequence number of the request this resolves
    pub seq: u64,
    /// What the lookup produced
    pub result: Result<WeatherSnapshot, WeatherError>,
}

/// Main application struct managing state and input
pub struct App {
    /// Current lookup state
    pub state: FetchState,
    /// User-editable query text
    pub query: String,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Sequence number of the most recent request; only an outcome carrying
    /// this number may change state
    latest_seq: u64,
    /// Request waiting to be picked up by the main loop
    pending_request: Option<FetchRequest>,
}

impl App {
    /// Creates a new App instance with default state
    pub fn new() -> Self {
        Self {
            state: FetchState::Idle,
            query: String::new(),
            should_quit: false,
            show_help: false,
            latest_seq: 0,
            pending_request: None,
        }
    }

    /// Issues a lookup for the given city, entering `Loading`.
    ///
    /// Used for the automatic default-city lookup on startup. Any prior
    /// error is dropped; a prior snapshot is carried into `Loading`.
    pub fn fetch_city(&mut self, city: &str) {
        self.latest_seq += 1;

        let prior = match std::mem::replace(&mut self.state, FetchState::Idle) {
            FetchState::Success(snapshot) => Some(snapshot),
            FetchState::Loading { prior } => prior,
            FetchState::Idle | FetchState::Failure { .. } => None,
        };
        self.state = FetchState::Loading { prior };

        self.pending_request = Some(FetchRequest {
            seq: self.latest_seq,
            city: city.to_string(),
        });
    }

    /// Submits the current query text.
    ///
    /// Empty or whitespace-only input is suppressed: no state change, no
    /// request issued.
    pub fn submit_query(&mut self) {
        let city = self.query.trim().to_string();
        if city.is_empty() {
            return;
        }
        self.fetch_city(&city);
    }

    /// Takes the pending request for the main loop to dispatch, if any
    pub fn take_fetch_request(&mut self) -> Option<FetchRequest> {
        self.pending_request.take()
    }

    /// Applies a lookup completion.
    ///
    /// Outcomes from superseded requests are discarded, so the newest
    /// submission always wins regardless of response ordering.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        if outcome.seq != self.latest_seq {
            return;
        }

        self.state = match outcome.result {
            Ok(snapshot) => FetchState::Success(snapshot),
            Err(err) => FetchState::Failure {
                message: err.user_message(),
            },
        };
    }

    /// The snapshot to render, if one exists.
    ///
    /// During `Loading` this is the previous snapshot, keeping the
    /// dashboard visible until the refresh resolves.
    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        match &self.state {
            FetchState::Success(snapshot) => Some(snapshot),
            FetchState::Loading { prior } => prior.as_ref(),
            FetchState::Idle | FetchState::Failure { .. } => None,
        }
    }

    /// The error text to render, if the last lookup failed
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            FetchState::Failure { message } => Some(message),
            _ => None,
        }
    }

    /// Whether a request is currently in flight
    pub fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Loading { .. })
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - Printable characters: append to the query text
    /// - `Backspace`: delete the last query character
    /// - `Enter`: submit the query (ignored while empty)
    /// - `F1`: toggle the help overlay
    /// - `Esc` or `Ctrl+C`: quit
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Help overlay intercepts all keys while shown
        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::F(1) => {
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::F(1) => {
                self.show_help = true;
            }
            KeyCode::Enter => {
                self.submit_query();
            }
            KeyCode::Backspace => {
                self.query.pop();
            }
            KeyCode::Char(c) => {
                self.query.push(c);
            }
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Helper to create a KeyEvent for testing
    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn sample_snapshot(city: &str) -> WeatherSnapshot {
        WeatherSnapshot {
            city: city.to_string(),
            region: "Region".to_string(),
            country: "Country".to_string(),
            condition: "Partly cloudy".to_string(),
            temp: 22.5,
            feels_like: 23.8,
            wind_speed: 12.5,
            humidity: 65,
            pressure: 1013.0,
            is_day: true,
        }
    }

    fn outcome_ok(seq: u64, city: &str) -> FetchOutcome {
        FetchOutcome {
            seq,
            result: Ok(sample_snapshot(city)),
        }
    }

    fn outcome_err(seq: u64) -> FetchOutcome {
        FetchOutcome {
            seq,
            result: Err(WeatherError::CityNotFound),
        }
    }

    // ========================================================================
    // Initial state
    // ========================================================================

    #[test]
    fn test_initial_state_is_idle() {
        let app = App::new();
        assert_eq!(app.state, FetchState::Idle);
        assert!(app.query.is_empty());
        assert!(!app.should_quit);
        assert!(!app.show_help);
        assert!(app.snapshot().is_none());
        assert!(app.error_message().is_none());
        assert!(!app.is_loading());
    }

    #[test]
    fn test_default_creates_same_as_new() {
        let app1 = App::new();
        let app2 = App::default();

        assert_eq!(app1.state, app2.state);
        assert_eq!(app1.query, app2.query);
        assert_eq!(app1.should_quit, app2.should_quit);
    }

    // ========================================================================
    // Query editing
    // ========================================================================

    #[test]
    fn test_typing_appends_to_query() {
        let mut app = App::new();

        app.handle_key(key_event(KeyCode::Char('O')));
        app.handle_key(key_event(KeyCode::Char('s')));
        app.handle_key(key_event(KeyCode::Char('l')));
        app.handle_key(key_event(KeyCode::Char('o')));

        assert_eq!(app.query, "Oslo");
    }

    #[test]
    fn test_backspace_removes_last_character() {
        let mut app = App::new();
        app.query = "Oslo".to_string();

        app.handle_key(key_event(KeyCode::Backspace));
        assert_eq!(app.query, "Osl");
    }

    #[test]
    fn test_backspace_on_empty_query_is_noop() {
        let mut app = App::new();

        app.handle_key(key_event(KeyCode::Backspace));
        assert_eq!(app.query, "");
        assert_eq!(app.state, FetchState::Idle);
    }

    #[test]
    fn test_typing_does_not_issue_requests() {
        let mut app = App::new();

        app.handle_key(key_event(KeyCode::Char('a')));
        assert!(app.take_fetch_request().is_none());
    }

    // ========================================================================
    // Submission
    // ========================================================================

    #[test]
    fn test_submit_empty_query_is_suppressed() {
        let mut app = App::new();

        app.handle_key(key_event(KeyCode::Enter));

        assert_eq!(app.state, FetchState::Idle);
        assert!(app.take_fetch_request().is_none());
    }

    #[test]
    fn test_submit_whitespace_only_query_is_suppressed() {
        let mut app = App::new();
        app.query = "   \t ".to_string();

        app.handle_key(key_event(KeyCode::Enter));

        assert_eq!(app.state, FetchState::Idle);
        assert!(app.take_fetch_request().is_none());
    }

    #[test]
    fn test_submit_issues_one_request_for_trimmed_city() {
        let mut app = App::new();
        app.query = "  New York  ".to_string();

        app.handle_key(key_event(KeyCode::Enter));

        assert!(app.is_loading());
        let request = app.take_fetch_request().expect("Expected a pending request");
        assert_eq!(request.city, "New York");
        assert_eq!(request.seq, 1);

        // Exactly one request per submission
        assert!(app.take_fetch_request().is_none());
    }

    #[test]
    fn test_submit_clears_prior_error() {
        let mut app = App::new();
        app.state = FetchState::Failure {
            message: "City not found".to_string(),
        };
        app.query = "London".to_string();

        app.handle_key(key_event(KeyCode::Enter));

        assert!(app.is_loading());
        assert!(app.error_message().is_none());
    }

    #[test]
    fn test_fetch_city_enters_loading() {
        let mut app = App::new();

        app.fetch_city("Vijayawada");

        assert_eq!(
            app.state,
            FetchState::Loading { prior: None },
            "Mount fetch enters Loading with no prior snapshot"
        );
        let request = app.take_fetch_request().expect("Expected a pending request");
        assert_eq!(request.city, "Vijayawada");
    }

    #[test]
    fn test_loading_retains_prior_snapshot() {
        let mut app = App::new();
        app.state = FetchState::Success(sample_snapshot("London"));

        app.fetch_city("Tokyo");

        assert!(app.is_loading());
        assert_eq!(
            app.snapshot().map(|s| s.city.as_str()),
            Some("London"),
            "Dashboard keeps showing the old snapshot while loading"
        );
    }

    // ========================================================================
    // Outcome handling
    // ========================================================================

    #[test]
    fn test_success_outcome_stores_snapshot() {
        let mut app = App::new();
        app.fetch_city("London");
        app.take_fetch_request();

        app.apply_outcome(outcome_ok(1, "London"));

        assert!(!app.is_loading());
        assert_eq!(app.snapshot().map(|s| s.city.as_str()), Some("London"));
        assert!(app.error_message().is_none());
    }

    #[test]
    fn test_failure_outcome_clears_snapshot_and_sets_error() {
        let mut app = App::new();
        app.state = FetchState::Success(sample_snapshot("London"));

        app.fetch_city("Zzzrandomcity");
        app.take_fetch_request();
        app.apply_outcome(outcome_err(1));

        assert!(!app.is_loading());
        assert!(app.snapshot().is_none(), "Failure drops the snapshot");
        assert_eq!(app.error_message(), Some("City not found"));
    }

    #[test]
    fn test_snapshot_replaced_wholesale_on_next_success() {
        let mut app = App::new();
        app.fetch_city("London");
        app.take_fetch_request();
        app.apply_outcome(outcome_ok(1, "London"));

        app.fetch_city("Tokyo");
        app.take_fetch_request();
        app.apply_outcome(outcome_ok(2, "Tokyo"));

        assert_eq!(app.snapshot().map(|s| s.city.as_str()), Some("Tokyo"));
    }

    // ========================================================================
    // Request sequencing
    // ========================================================================

    #[test]
    fn test_stale_success_outcome_is_discarded() {
        let mut app = App::new();
        app.fetch_city("London");
        app.take_fetch_request();
        app.fetch_city("Tokyo");
        app.take_fetch_request();

        // First request resolves after the second was issued
        app.apply_outcome(outcome_ok(1, "London"));

        assert!(app.is_loading(), "Stale outcome must not end the newer lookup");
        assert!(app.snapshot().is_none());

        app.apply_outcome(outcome_ok(2, "Tokyo"));
        assert_eq!(app.snapshot().map(|s| s.city.as_str()), Some("Tokyo"));
    }

    #[test]
    fn test_stale_outcome_arriving_after_newer_one_is_discarded() {
        let mut app = App::new();
        app.fetch_city("London");
        app.take_fetch_request();
        app.fetch_city("Tokyo");
        app.take_fetch_request();

        app.apply_outcome(outcome_ok(2, "Tokyo"));
        // The older response straggles in last
        app.apply_outcome(outcome_ok(1, "London"));

        assert_eq!(
            app.snapshot().map(|s| s.city.as_str()),
            Some("Tokyo"),
            "Newest submission wins regardless of response order"
        );
    }

    #[test]
    fn test_stale_failure_does_not_clobber_newer_success() {
        let mut app = App::new();
        app.fetch_city("Zzzrandomcity");
        app.take_fetch_request();
        app.fetch_city("London");
        app.take_fetch_request();

        app.apply_outcome(outcome_ok(2, "London"));
        app.apply_outcome(outcome_err(1));

        assert_eq!(app.snapshot().map(|s| s.city.as_str()), Some("London"));
        assert!(app.error_message().is_none());
    }

    // ========================================================================
    // Quit and help
    // ========================================================================

    #[test]
    fn test_esc_quits() {
        let mut app = App::new();

        app.handle_key(key_event(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = App::new();
        app.query = "Lond".to_string();

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

        assert!(app.should_quit);
        assert_eq!(app.query, "Lond", "Ctrl+C must not type a character");
    }

    #[test]
    fn test_plain_c_types_into_query() {
        let mut app = App::new();

        app.handle_key(key_event(KeyCode::Char('c')));

        assert!(!app.should_quit);
        assert_eq!(app.query, "c");
    }

    #[test]
    fn test_f1_toggles_help() {
        let mut app = App::new();

        app.handle_key(key_event(KeyCode::F(1)));
        assert!(app.show_help);

        app.handle_key(key_event(KeyCode::F(1)));
        assert!(!app.show_help);
    }

    #[test]
    fn test_esc_closes_help_without_quitting() {
        let mut app = App::new();
        app.show_help = true;

        app.handle_key(key_event(KeyCode::Esc));

        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_typing_ignored_while_help_shown() {
        let mut app = App::new();
        app.show_help = true;

        app.handle_key(key_event(KeyCode::Char('x')));
        app.handle_key(key_event(KeyCode::Enter));

        assert!(app.query.is_empty());
        assert_eq!(app.state, FetchState::Idle);
    }

    #[test]
    fn test_search_usable_after_failure() {
        let mut app = App::new();
        app.fetch_city("Zzzrandomcity");
        app.take_fetch_request();
        app.apply_outcome(outcome_err(1));

        app.query.clear();
        app.handle_key(key_event(KeyCode::Char('L')));
        app.handle_key(key_event(KeyCode::Enter));

        assert!(app.is_loading());
        let request = app.take_fetch_request().expect("Retry should issue a request");
        assert_eq!(request.city, "L");
    }
}
