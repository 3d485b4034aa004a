//! Emergency SOS constants and validation.
//!
//! Audio is never captured server-side. The client records for
//! [`SOS_AUDIO_CAPTURE_SECS`] before posting the event, optionally with the
//! clip attached.

use crate::error::CoreError;

/// Length of the client-side audio capture window that precedes an SOS post.
pub const SOS_AUDIO_CAPTURE_SECS: u32 = 10;

/// Validate a WGS-84 latitude/longitude pair.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), CoreError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(CoreError::Validation(
            "Latitude must be between -90 and 90".into(),
        ));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(CoreError::Validation(
            "Longitude must be between -180 and 180".into(),
        ));
    }
    Ok(())
}
