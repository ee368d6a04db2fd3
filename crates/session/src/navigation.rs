//! Page flow state machine.
//!
//! ```text
//! welcome -> auth_menu -> {login, signup} -> profile -> search
//!                          {login, signup} ------------> search
//! search --logout--> welcome
//! ```
//!
//! Transitions happen only in response to explicit user actions. The
//! transition function is total: an action that means nothing on the current
//! page leaves the page unchanged, and an unrecognised page id maps to
//! `Welcome`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every page the session can be on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageId {
    #[default]
    Welcome,
    AuthMenu,
    Login,
    Signup,
    Profile,
    Search,
}

impl PageId {
    pub const ALL: [PageId; 6] = [
        PageId::Welcome,
        PageId::AuthMenu,
        PageId::Login,
        PageId::Signup,
        PageId::Profile,
        PageId::Search,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::Welcome => "welcome",
            PageId::AuthMenu => "auth_menu",
            PageId::Login => "login",
            PageId::Signup => "signup",
            PageId::Profile => "profile",
            PageId::Search => "search",
        }
    }

    /// Map a page id string to a page, falling back to `Welcome`
    pub fn from_id(id: &str) -> PageId {
        PageId::ALL
            .into_iter()
            .find(|page| page.as_str() == id)
            .unwrap_or_default()
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Button-level user actions that can move between pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    GetStarted,
    ChooseLogin,
    ChooseSignup,
    Back,
    /// Login or signup accepted. With `skip_profile` the profile page is
    /// bypassed because the session already holds one.
    Authenticated { skip_profile: bool },
    ProfileCompleted,
    Logout,
}

/// Pure transition function over pages
pub fn transition(from: PageId, action: NavAction) -> PageId {
    use NavAction::*;
    use PageId::*;

    match (from, action) {
        (Welcome, GetStarted) => AuthMenu,
        (AuthMenu, ChooseLogin) => Login,
        (AuthMenu, ChooseSignup) => Signup,
        (AuthMenu, Back) => Welcome,
        (Login | Signup, Back) => AuthMenu,
        (Login | Signup, Authenticated { skip_profile: false }) => Profile,
        (Login | Signup, Authenticated { skip_profile: true }) => Search,
        (Profile, Back) => AuthMenu,
        (Profile, ProfileCompleted) => Search,
        (Search, Logout) => Welcome,
        (page, _) => page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut page = PageId::default();
        for action in [
            NavAction::GetStarted,
            NavAction::ChooseSignup,
            NavAction::Authenticated { skip_profile: false },
            NavAction::ProfileCompleted,
        ] {
            page = transition(page, action);
        }
        assert_eq!(page, PageId::Search);
        assert_eq!(transition(page, NavAction::Logout), PageId::Welcome);
    }

    #[test]
    fn test_login_can_skip_profile() {
        let page = transition(PageId::Login, NavAction::Authenticated { skip_profile: true });
        assert_eq!(page, PageId::Search);
    }

    #[test]
    fn test_back_buttons() {
        assert_eq!(transition(PageId::AuthMenu, NavAction::Back), PageId::Welcome);
        assert_eq!(transition(PageId::Login, NavAction::Back), PageId::AuthMenu);
        assert_eq!(transition(PageId::Signup, NavAction::Back), PageId::AuthMenu);
        assert_eq!(transition(PageId::Profile, NavAction::Back), PageId::AuthMenu);
    }

    #[test]
    fn test_irrelevant_actions_do_not_move() {
        assert_eq!(transition(PageId::Welcome, NavAction::Logout), PageId::Welcome);
        assert_eq!(transition(PageId::Search, NavAction::Back), PageId::Search);
        assert_eq!(
            transition(PageId::Welcome, NavAction::Authenticated { skip_profile: true }),
            PageId::Welcome
        );
    }

    #[test]
    fn test_unknown_page_id_falls_back_to_welcome() {
        assert_eq!(PageId::from_id("search"), PageId::Search);
        assert_eq!(PageId::from_id("auth_menu"), PageId::AuthMenu);
        assert_eq!(PageId::from_id("settings"), PageId::Welcome);
        assert_eq!(PageId::from_id(""), PageId::Welcome);
    }
}
