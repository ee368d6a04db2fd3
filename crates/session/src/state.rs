//! Per-session state that survives between interactions.
//!
//! ## Mutation contract
//! - `page` changes only through [`SessionState::navigate`],
//!   [`SessionState::restore_page`] and [`SessionState::logout`]
//! - `search_results`, `all_movies_list`, `search_time`, `results_top_n` are
//!   replaced together by [`SessionState::record_search`] and cleared together
//!   by [`SessionState::clear_results`] or logout. A failed search leaves them
//!   untouched.
//! - `user_info` and `logged_in` are set by login, signup and profile
//!   submission, and wiped by logout
//! - `preferences` persist until the process ends, even across logout

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use engine_client::{PreferenceMode, RecommendationResult};
use results::{RankedMovie, flatten};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::navigation::{NavAction, PageId, transition};
use crate::profile::keys;

/// Free-form profile answers keyed by field name
pub type UserInfo = BTreeMap<String, String>;

pub const MIN_TOP_N: usize = 5;
pub const MAX_TOP_N: usize = 20;
pub const DEFAULT_TOP_N: usize = 10;

/// Colour scheme choice, kept for front ends that honour it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Dark,
    Light,
    System,
}

impl Appearance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Appearance::Dark => "dark",
            Appearance::Light => "light",
            Appearance::System => "system",
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Appearance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Appearance::Dark),
            "light" => Ok(Appearance::Light),
            "system" => Ok(Appearance::System),
            other => Err(format!("unknown appearance: {other}")),
        }
    }
}

/// Sidebar settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub mode: PreferenceMode,
    pub top_n: usize,
    pub appearance: Appearance,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            mode: PreferenceMode::default(),
            top_n: DEFAULT_TOP_N,
            appearance: Appearance::default(),
        }
    }
}

/// What the user sees after a failed search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchError {
    /// Short, user-facing line
    pub message: String,
    /// Diagnostic detail for an expandable panel
    pub detail: String,
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    page: PageId,
    user_info: UserInfo,
    logged_in: bool,
    last_query: Option<String>,
    query_input: String,
    search_results: Option<RecommendationResult>,
    all_movies_list: Vec<RankedMovie>,
    search_time: Option<Duration>,
    results_top_n: usize,
    selection: Option<String>,
    last_error: Option<SearchError>,
    pub preferences: Preferences,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> PageId {
        self.page
    }

    pub fn user_info(&self) -> &UserInfo {
        &self.user_info
    }

    pub fn user_info_mut(&mut self) -> &mut UserInfo {
        &mut self.user_info
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    pub fn query_input(&self) -> &str {
        &self.query_input
    }

    pub fn search_results(&self) -> Option<&RecommendationResult> {
        self.search_results.as_ref()
    }

    /// Flattened list backing both the result panels and the selector
    pub fn all_movies(&self) -> &[RankedMovie] {
        &self.all_movies_list
    }

    pub fn search_time(&self) -> Option<Duration> {
        self.search_time
    }

    /// `top_n` in effect when the current results were produced
    pub fn results_top_n(&self) -> usize {
        self.results_top_n
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn last_error(&self) -> Option<&SearchError> {
        self.last_error.as_ref()
    }

    /// Apply a navigation action, returning the new page
    pub fn navigate(&mut self, action: NavAction) -> PageId {
        let next = transition(self.page, action);
        if next != self.page {
            debug!("Page {} -> {} on {:?}", self.page, next, action);
        }
        self.page = next;
        next
    }

    /// Restore a page from its persisted id
    pub fn restore_page(&mut self, id: &str) -> PageId {
        self.page = PageId::from_id(id);
        self.page
    }

    /// Mark the session authenticated under `email`
    pub fn log_in(&mut self, email: &str) {
        self.user_info.insert(keys::EMAIL.to_string(), email.to_string());
        self.logged_in = true;
    }

    /// True once a profile with a first name has been stored
    pub fn has_profile(&self) -> bool {
        self.user_info
            .get(keys::FIRST_NAME)
            .is_some_and(|name| !name.trim().is_empty())
    }

    pub fn set_user_field(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.user_info.insert(key.into(), value.into());
    }

    /// Name used in the search page greeting
    pub fn greeting_name(&self) -> &str {
        self.user_info
            .get(keys::FIRST_NAME)
            .map(String::as_str)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("there")
    }

    /// Forget the user and their results, back to the welcome page
    pub fn logout(&mut self) {
        let preferences = self.preferences;
        *self = SessionState {
            preferences,
            ..SessionState::default()
        };
    }

    /// Replace current results with a fresh engine answer
    pub fn record_search(
        &mut self,
        query: &str,
        result: RecommendationResult,
        elapsed: Duration,
        top_n: usize,
    ) {
        self.all_movies_list = flatten(&result, top_n);
        self.search_results = Some(result);
        self.search_time = Some(elapsed);
        self.results_top_n = top_n;
        self.last_query = Some(query.to_string());
        self.selection = None;
        self.last_error = None;
    }

    /// Note a failed search. Earlier results stay visible.
    pub fn record_failure(&mut self, error: SearchError) {
        self.last_error = Some(error);
    }

    pub fn clear_results(&mut self) {
        self.search_results = None;
        self.all_movies_list.clear();
        self.search_time = None;
        self.results_top_n = 0;
        self.selection = None;
        self.last_error = None;
    }

    pub fn set_query_input(&mut self, query: impl Into<String>) {
        self.query_input = query.into();
    }

    /// Remember the selector label the user picked
    pub fn select_movie(&mut self, label: impl Into<String>) {
        self.selection = Some(label.into());
    }
}
