// src/models/submission.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An eco-action submission in the 'ecoplay_submissions' collection.
///
/// The collection is seeded empty and no current flow writes to it, but
/// records referenced by `User::submissions` live here and the admin panel
/// counts them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub user_id: String,
    pub description: String,
    /// Points awarded for the action.
    pub points: i64,
    pub created_at: DateTime<Utc>,
}
