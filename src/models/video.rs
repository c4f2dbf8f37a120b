// src/models/video.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::not_blank;
use crate::utils::id::uid;

/// A video record in the 'ecoplay_videos' collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    /// Link exactly as the admin entered it; no URL validation happens
    /// anywhere.
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl Video {
    pub fn new(title: &str, url: &str) -> Self {
        Self {
            id: uid("vid"),
            title: title.to_owned(),
            url: url.to_owned(),
            created_at: Utc::now(),
        }
    }
}

/// DTO for the admin add-video form. Both fields are presence-checked only.
#[derive(Debug, Deserialize, Validate)]
pub struct AddVideoRequest {
    #[validate(custom(function = not_blank))]
    #[serde(default)]
    pub title: String,

    #[validate(custom(function = not_blank))]
    #[serde(default)]
    pub url: String,
}
