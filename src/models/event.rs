// src/models/event.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A community event in the 'ecoplay_events' collection.
///
/// Seeded empty; kept so `User::joined_events` references resolve and the
/// admin panel can count the collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}
