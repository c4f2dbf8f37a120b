// src/models/mod.rs

pub mod event;
pub mod quiz;
pub mod redemption;
pub mod submission;
pub mod user;
pub mod video;

use validator::ValidationError;

/// Presence check shared by the form DTOs. Fields are only ever required
/// to be non-blank after trimming.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}
