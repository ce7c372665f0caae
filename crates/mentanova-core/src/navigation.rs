//! Client-side navigation abstraction.
//!
//! The API client never decides how a "go to the login page" is carried out.
//! It asks a [`Navigator`] for the current location and requests a
//! redirect; a browser shell would change the route, the CLI prints a hint,
//! and tests record the history.

use std::sync::Mutex;

/// Path of the login entry point unless configured otherwise.
pub const DEFAULT_LOGIN_PATH: &str = "/login";

pub trait Navigator: Send + Sync {
    /// The location the client is currently showing.
    fn current_path(&self) -> String;

    /// Move the client to `path`.
    fn redirect(&self, path: &str);
}

/// A navigator that only records where it was sent.
pub struct HistoryNavigator {
    state: Mutex<History>,
}

struct History {
    current: String,
    redirects: Vec<String>,
}

impl HistoryNavigator {
    pub fn new(start: &str) -> Self {
        Self {
            state: Mutex::new(History {
                current: start.to_string(),
                redirects: Vec::new(),
            }),
        }
    }

    /// Every redirect target, oldest first.
    pub fn redirects(&self) -> Vec<String> {
        self.state.lock().unwrap().redirects.clone()
    }
}

impl Navigator for HistoryNavigator {
    fn current_path(&self) -> String {
        self.state.lock().unwrap().current.clone()
    }

    fn redirect(&self, path: &str) {
        let mut state = self.state.lock().unwrap();
        state.current = path.to_string();
        state.redirects.push(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_records_redirects() {
        let nav = HistoryNavigator::new("/documents");
        assert_eq!(nav.current_path(), "/documents");
        nav.redirect(DEFAULT_LOGIN_PATH);
        assert_eq!(nav.current_path(), "/login");
        assert_eq!(nav.redirects(), vec!["/login".to_string()]);
    }
}
