//! Process-wide "session expired" notification.
//!
//! The resource layer reports a 401 through this narrow interface; the auth
//! layer owns what happens next (drop tokens, show the login screen).

pub trait SessionListener {
    /// Called exactly once per 401 response, before any error reaches the view.
    fn session_expired(&self);
}
