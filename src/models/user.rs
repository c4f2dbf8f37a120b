// src/models/user.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::not_blank;
use crate::utils::id::uid;

/// A member record in the 'ecoplay_users' collection.
///
/// Persisted with camelCase field names so existing data directories keep
/// loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,

    /// Unique username. Uniqueness is only ever enforced by the
    /// case-insensitive scan at sign-in time.
    pub username: String,

    /// Display name shown in the header and on the profile page.
    pub name: String,

    pub created_at: DateTime<Utc>,

    /// Current point balance.
    pub points: i64,

    /// Earned badge labels.
    pub badges: Vec<String>,

    /// Ids of records in the other collections. Nothing in the current
    /// flows appends to these, but they are persisted so records that
    /// already carry them survive a rewrite.
    pub submissions: Vec<String>,
    pub quizzes_taken: Vec<String>,
    pub joined_events: Vec<String>,
}

impl User {
    /// The fresh zero-point record sign-in appends for an unknown username.
    pub fn new(username: &str, name: &str) -> Self {
        Self {
            id: uid("u"),
            username: username.to_owned(),
            name: name.to_owned(),
            created_at: Utc::now(),
            points: 0,
            badges: Vec::new(),
            submissions: Vec::new(),
            quizzes_taken: Vec::new(),
            joined_events: Vec::new(),
        }
    }
}

/// DTO for the sign-in / registration form.
#[derive(Debug, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(custom(function = not_blank))]
    #[serde(default)]
    pub username: String,

    /// Optional display name. A blank value falls back to the username.
    #[serde(default)]
    pub name: String,
}
