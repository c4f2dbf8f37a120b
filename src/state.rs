// src/state.rs

use axum::extract::FromRef;

use crate::session::SharedSession;
use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub session: SharedSession,
}

impl FromRef<AppState> for Store {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for SharedSession {
    fn from_ref(state: &AppState) -> Self {
        state.session.clone()
    }
}
