//! Auth Gate
//!
//! Session state for the admin panel. The rest of the app only sees the
//! gate's surface: `is_authenticated`, `is_loading`, `login`, `logout`.
//! There is no account system behind it; credentials check against fixed
//! demo constants and nothing survives a reload.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Demo admin credentials, shown on the login form
pub const DEMO_EMAIL: &str = "admin@portfolio.dev";
pub const DEMO_PASSWORD: &str = "admin123";

/// How long the simulated session-restore check keeps the gate loading
const SESSION_RESTORE_MS: u32 = 600;

/// Auth state provided via context
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Whether an admin session is active - read
    pub is_authenticated: ReadSignal<bool>,
    set_is_authenticated: WriteSignal<bool>,
    /// True only during the initial session-restore check - read
    pub is_loading: ReadSignal<bool>,
    set_is_loading: WriteSignal<bool>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (is_authenticated, set_is_authenticated) = signal(false);
        let (is_loading, set_is_loading) = signal(true);
        Self {
            is_authenticated,
            set_is_authenticated,
            is_loading,
            set_is_loading,
        }
    }

    /// Run the initial session-restore check. Nothing is stored between
    /// sessions, so this only clears the loading flag after a short window.
    pub fn restore_session(&self) {
        let set_is_loading = self.set_is_loading;
        spawn_local(async move {
            TimeoutFuture::new(SESSION_RESTORE_MS).await;
            set_is_loading.set(false);
        });
    }

    /// Check credentials; returns whether the login succeeded
    pub fn login(&self, email: &str, password: &str) -> bool {
        let ok = email == DEMO_EMAIL && password == DEMO_PASSWORD;
        if ok {
            self.set_is_authenticated.set(true);
        }
        ok
    }

    pub fn logout(&self) {
        self.set_is_authenticated.set(false);
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}
