// src/models/redemption.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A point redemption in the 'ecoplay_redemptions' collection.
///
/// Seeded empty; the redeem page only displays the balance today, but the
/// collection is part of the stored data set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Redemption {
    pub id: String,
    pub user_id: String,
    pub reward: String,
    /// Points spent on the reward.
    pub cost: i64,
    pub created_at: DateTime<Utc>,
}
