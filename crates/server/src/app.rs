//! Action dispatcher and page views.
//!
//! Every user interaction arrives as one [`UserAction`]. The dispatcher
//! takes the session's lock, applies the action (navigation, form
//! submission, settings, search, selection) and returns the page the
//! session ends up on. [`KinetoApp::render`] turns a session into a
//! front-end-neutral [`PageView`].

use std::sync::Arc;

use engine_client::{PreferenceMode, QueryInterpretation, Recommender};
use results::{DetailView, RankedMovie, RowView, Track, resolve, title_from_selection};
use session::{
    Appearance, AuthViolation, LoginForm, MAX_TOP_N, MIN_TOP_N, NavAction, PageId, Preferences,
    ProfileForm, SearchError, SessionState, SignupForm,
};
use thiserror::Error;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::orchestrator::QueryOrchestrator;
use crate::registry::SessionRegistry;

pub const EXAMPLE_QUERIES: [&str; 6] = [
    "Julia Roberts romances from the 90s",
    "Dark psychological thrillers with a strong female lead",
    "My girlfriend broke up with me - something to cheer me up",
    "Epic war movies set in ancient times",
    "90s action movies with Arnold Schwarzenegger",
    "Coming-of-age movies from the 2010s",
];

pub const IDLE_HINT: &str = "Enter a query above and click Search to get movie recommendations!";
pub const NO_RESULTS: &str = "No movies found matching your query. Try a different search!";
pub const DUAL_TRACK_NOTICE: &str =
    "Your query has both content elements and mood elements. Here are recommendations from both perspectives:";

#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    GetStarted,
    ChooseLogin,
    ChooseSignup,
    Back,
    SubmitLogin(LoginForm),
    SubmitSignup(SignupForm),
    SubmitProfile(ProfileForm),
    SetAppearance(Appearance),
    SetMode(PreferenceMode),
    SetTopN(usize),
    SetQuery(String),
    /// Fill the query box with one of [`EXAMPLE_QUERIES`]
    PickExample(usize),
    RandomExample,
    Search,
    /// A selector label such as `"5. Heat"`
    SelectMovie(String),
    Logout,
}

impl UserAction {
    /// Variant name, safe to log (form contents are left out)
    pub fn name(&self) -> &'static str {
        match self {
            UserAction::GetStarted => "get_started",
            UserAction::ChooseLogin => "choose_login",
            UserAction::ChooseSignup => "choose_signup",
            UserAction::Back => "back",
            UserAction::SubmitLogin(_) => "submit_login",
            UserAction::SubmitSignup(_) => "submit_signup",
            UserAction::SubmitProfile(_) => "submit_profile",
            UserAction::SetAppearance(_) => "set_appearance",
            UserAction::SetMode(_) => "set_mode",
            UserAction::SetTopN(_) => "set_top_n",
            UserAction::SetQuery(_) => "set_query",
            UserAction::PickExample(_) => "pick_example",
            UserAction::RandomExample => "random_example",
            UserAction::Search => "search",
            UserAction::SelectMovie(_) => "select_movie",
            UserAction::Logout => "logout",
        }
    }
}

/// Rejected actions. The session is left exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ActionError {
    #[error("{0}")]
    Invalid(AuthViolation),

    #[error("Please fill in all fields.")]
    IncompleteForm,

    #[error("{0}")]
    Profile(String),

    #[error(
        "Results per track must be between {min} and {max}, got {0}.",
        min = MIN_TOP_N,
        max = MAX_TOP_N
    )]
    TopNOutOfRange(usize),

    #[error("No example query #{0}.")]
    UnknownExample(usize),

    #[error("{action} is not available on the {page} page.")]
    WrongPage { action: &'static str, page: PageId },
}

// =============================================================================
// Views
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Welcome,
    AuthMenu,
    Login,
    Signup,
    Profile(ProfileForm),
    Search(Box<SearchView>),
}

impl PageView {
    pub fn page(&self) -> PageId {
        match self {
            PageView::Welcome => PageId::Welcome,
            PageView::AuthMenu => PageId::AuthMenu,
            PageView::Login => PageId::Login,
            PageView::Signup => PageId::Signup,
            PageView::Profile(_) => PageId::Profile,
            PageView::Search(_) => PageId::Search,
        }
    }
}

/// Headline line above the results
#[derive(Debug, Clone, PartialEq)]
pub enum SearchStatus {
    Idle,
    Found { seconds: f64, query: String },
    NoResults,
}

impl SearchStatus {
    pub fn message(&self) -> String {
        match self {
            SearchStatus::Idle => IDLE_HINT.to_string(),
            SearchStatus::Found { seconds, query } => {
                format!("Found movies in {seconds:.1}s for: \"{query}\"")
            }
            SearchStatus::NoResults => NO_RESULTS.to_string(),
        }
    }
}

/// One results panel: the single list, or one of the two tracks
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSection {
    pub track: Track,
    pub heading: String,
    pub caption: &'static str,
    pub rows: Vec<RowView>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailLookup {
    Found(DetailView),
    NotFound(String),
}

impl DetailLookup {
    pub fn not_found_message(title: &str) -> String {
        format!("Could not find details for '{title}'")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    pub greeting: String,
    pub preferences: Preferences,
    pub query_input: String,
    pub status: SearchStatus,
    pub error: Option<SearchError>,
    pub interpretation: Option<QueryInterpretation>,
    pub dual_track: bool,
    pub sections: Vec<ResultSection>,
    /// Detail selector entries, `"<rank>. <title>"`
    pub selector: Vec<String>,
    pub selection: Option<String>,
    pub details: Option<DetailLookup>,
}

// =============================================================================
// Dispatcher
// =============================================================================

#[derive(Clone)]
pub struct KinetoApp {
    orchestrator: QueryOrchestrator,
    sessions: SessionRegistry,
}

impl KinetoApp {
    pub fn new(recommender: Arc<dyn Recommender>) -> Self {
        Self {
            orchestrator: QueryOrchestrator::new(recommender),
            sessions: SessionRegistry::new(),
        }
    }

    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    pub fn orchestrator(&self) -> &QueryOrchestrator {
        &self.orchestrator
    }

    /// Apply `action` to session `id` under that session's lock, then render
    pub async fn dispatch(
        &self,
        id: Uuid,
        action: UserAction,
    ) -> (Result<PageId, ActionError>, PageView) {
        let handle = self.sessions.get_or_create(id).await;
        let mut state = handle.lock().await;
        let outcome = self.handle(&mut state, action).await;
        let view = self.render(&state);
        (outcome, view)
    }

    /// Render session `id` without changing it
    pub async fn view(&self, id: Uuid) -> PageView {
        let handle = self.sessions.get_or_create(id).await;
        let state = handle.lock().await;
        self.render(&state)
    }

    /// Apply one action to `state`
    #[instrument(skip(self, state, action), fields(action = action.name(), page = %state.page()))]
    pub async fn handle(
        &self,
        state: &mut SessionState,
        action: UserAction,
    ) -> Result<PageId, ActionError> {
        match action {
            UserAction::GetStarted => Ok(state.navigate(NavAction::GetStarted)),
            UserAction::ChooseLogin => Ok(state.navigate(NavAction::ChooseLogin)),
            UserAction::ChooseSignup => Ok(state.navigate(NavAction::ChooseSignup)),
            UserAction::Back => Ok(state.navigate(NavAction::Back)),
            UserAction::SubmitLogin(form) => {
                require_page(state, PageId::Login, "Login")?;
                check_form(form.can_submit(), form.violation())?;
                Ok(self.authenticate(state, &form.email))
            }
            UserAction::SubmitSignup(form) => {
                require_page(state, PageId::Signup, "Sign up")?;
                check_form(form.can_submit(), form.violation())?;
                Ok(self.authenticate(state, &form.email))
            }
            UserAction::SubmitProfile(form) => {
                require_page(state, PageId::Profile, "Profile")?;
                if let Some(message) = form.violation() {
                    return Err(ActionError::Profile(message));
                }
                form.apply_to(state.user_info_mut());
                Ok(state.navigate(NavAction::ProfileCompleted))
            }
            UserAction::SetAppearance(appearance) => {
                state.preferences.appearance = appearance;
                Ok(state.page())
            }
            UserAction::SetMode(mode) => {
                state.preferences.mode = mode;
                Ok(state.page())
            }
            UserAction::SetTopN(top_n) => {
                if !(MIN_TOP_N..=MAX_TOP_N).contains(&top_n) {
                    return Err(ActionError::TopNOutOfRange(top_n));
                }
                state.preferences.top_n = top_n;
                Ok(state.page())
            }
            UserAction::SetQuery(query) => {
                state.set_query_input(query);
                Ok(state.page())
            }
            UserAction::PickExample(index) => {
                require_page(state, PageId::Search, "Example queries")?;
                let query = EXAMPLE_QUERIES
                    .get(index)
                    .ok_or(ActionError::UnknownExample(index))?;
                use_example(state, query);
                Ok(state.page())
            }
            UserAction::RandomExample => {
                require_page(state, PageId::Search, "Random query")?;
                let index = rand::random::<u32>() as usize % EXAMPLE_QUERIES.len();
                use_example(state, EXAMPLE_QUERIES[index]);
                Ok(state.page())
            }
            UserAction::Search => {
                require_page(state, PageId::Search, "Search")?;
                let query = state.query_input().to_string();
                let Preferences { mode, top_n, .. } = state.preferences;
                self.orchestrator.search(state, &query, mode, top_n).await;
                Ok(state.page())
            }
            UserAction::SelectMovie(label) => {
                require_page(state, PageId::Search, "Movie details")?;
                state.select_movie(label);
                Ok(state.page())
            }
            UserAction::Logout => {
                if state.page() == PageId::Search {
                    info!("Logging out {:?}", state.user_info().get("email"));
                    state.logout();
                }
                Ok(state.page())
            }
        }
    }

    fn authenticate(&self, state: &mut SessionState, email: &str) -> PageId {
        state.log_in(email);
        let skip_profile = state.has_profile();
        state.navigate(NavAction::Authenticated { skip_profile })
    }

    /// Build the view for the session's current page
    pub fn render(&self, state: &SessionState) -> PageView {
        match state.page() {
            PageId::Welcome => PageView::Welcome,
            PageId::AuthMenu => PageView::AuthMenu,
            PageId::Login => PageView::Login,
            PageId::Signup => PageView::Signup,
            PageId::Profile => PageView::Profile(ProfileForm::from_user_info(state.user_info())),
            PageId::Search => PageView::Search(Box::new(self.render_search(state))),
        }
    }

    fn render_search(&self, state: &SessionState) -> SearchView {
        let result = state.search_results();

        let status = match result {
            None => SearchStatus::Idle,
            Some(r) if r.is_empty() => SearchStatus::NoResults,
            Some(_) => SearchStatus::Found {
                seconds: state.search_time().map(|t| t.as_secs_f64()).unwrap_or_default(),
                query: state.last_query().unwrap_or_default().to_string(),
            },
        };

        let selector: Vec<String> = state
            .all_movies()
            .iter()
            .map(RankedMovie::selection_label)
            .collect();

        let details = state
            .selection()
            .filter(|label| selector.iter().any(|entry| entry.as_str() == *label))
            .map(|label| self.lookup(title_from_selection(label)));

        SearchView {
            greeting: format!("Hi {}!", state.greeting_name()),
            preferences: state.preferences,
            query_input: state.query_input().to_string(),
            status,
            error: state.last_error().cloned(),
            interpretation: result.and_then(|r| r.parsed_query()).cloned(),
            dual_track: result.is_some_and(|r| r.is_dual_track()),
            sections: sections(state.all_movies()),
            selector,
            selection: state.selection().map(str::to_string),
            details,
        }
    }

    /// Resolve a selected title against the engine's catalog
    pub fn lookup(&self, title: &str) -> DetailLookup {
        match resolve(self.orchestrator.recommender().movies(), title) {
            Some(record) => DetailLookup::Found(DetailView::from_record(&record)),
            None => {
                debug!("Detail lookup missed for {:?}", title);
                DetailLookup::NotFound(title.to_string())
            }
        }
    }
}

fn require_page(
    state: &SessionState,
    expected: PageId,
    action: &'static str,
) -> Result<(), ActionError> {
    if state.page() == expected {
        Ok(())
    } else {
        Err(ActionError::WrongPage {
            action,
            page: state.page(),
        })
    }
}

fn check_form(can_submit: bool, violation: Option<AuthViolation>) -> Result<(), ActionError> {
    match violation {
        Some(violation) => Err(ActionError::Invalid(violation)),
        None if !can_submit => Err(ActionError::IncompleteForm),
        None => Ok(()),
    }
}

fn use_example(state: &mut SessionState, query: &str) {
    state.set_query_input(query);
    state.clear_results();
}

/// Group the flattened list into panels, preserving rank order
fn sections(movies: &[RankedMovie]) -> Vec<ResultSection> {
    let mut sections: Vec<ResultSection> = Vec::new();
    for movie in movies {
        let row = RowView::from_ranked(movie);
        match sections.last_mut() {
            Some(section) if section.track == movie.track => section.rows.push(row),
            _ => sections.push(ResultSection {
                track: movie.track,
                heading: movie.track.heading().to_string(),
                caption: movie.track.caption(),
                rows: vec![row],
            }),
        }
    }
    for section in &mut sections {
        if section.track == Track::Single {
            section.heading = format!("Top {} Recommendations", section.rows.len());
        }
    }
    sections
}
