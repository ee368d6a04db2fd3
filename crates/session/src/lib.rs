//! Session model for Kineto.
//!
//! Owns everything that persists between user interactions: the current
//! page, the profile answers, the last set of results and the sidebar
//! settings. Also hosts the pure form validators used on the auth pages.

pub mod auth;
pub mod navigation;
pub mod profile;
pub mod state;

pub use auth::{
    AuthViolation, LoginForm, MIN_PASSWORD_LEN, SignupForm, validate_email, validate_login,
    validate_signup,
};
pub use navigation::{NavAction, PageId, transition};
pub use profile::ProfileForm;
pub use state::{
    Appearance, DEFAULT_TOP_N, MAX_TOP_N, MIN_TOP_N, Preferences, SearchError, SessionState,
    UserInfo,
};
