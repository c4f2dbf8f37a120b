// src/session.rs

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::AppError;
use crate::models::user::User;

/// The in-memory record of who is currently signed in.
///
/// There is exactly one per process and it lives for the process lifetime.
/// The app is single-visitor and keeps no cookies or tokens; restarting
/// the process signs everyone out.
#[derive(Debug, Default)]
pub struct Session {
    pub current_user: Option<User>,
    pub is_admin: bool,
}

impl Session {
    pub fn sign_in(&mut self, user: User, is_admin: bool) {
        self.current_user = Some(user);
        self.is_admin = is_admin;
    }

    pub fn sign_out(&mut self) {
        self.current_user = None;
        self.is_admin = false;
    }

    pub fn is_signed_in(&self) -> bool {
        self.current_user.is_some()
    }

    /// Header status line: "{name} ({points} pts)" when signed in.
    pub fn status_line(&self) -> String {
        match &self.current_user {
            Some(user) => format!("{} ({} pts)", user.name, user.points),
            None => "Not signed in".to_string(),
        }
    }
}

/// Shared handle handlers receive through application state.
pub type SharedSession = Arc<Mutex<Session>>;

pub fn shared() -> SharedSession {
    Arc::new(Mutex::new(Session::default()))
}

/// Locks the session, mapping a poisoned mutex to a plain 500.
/// No handler holds the guard across an await point.
pub fn lock(session: &SharedSession) -> Result<MutexGuard<'_, Session>, AppError> {
    session
        .lock()
        .map_err(|_| AppError::InternalServerError("session lock poisoned".to_string()))
}
