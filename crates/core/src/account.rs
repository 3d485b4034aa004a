//! Registration field validation.

use validator::ValidateEmail;

use crate::error::CoreError;

const MAX_DISPLAY_NAME_LEN: usize = 100;

/// Normalise an email for storage and lookup: trimmed and lower-cased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validate an (already normalised) email address.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.validate_email() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("'{email}' is not a valid email address")))
    }
}

/// Validate the display name shown in the dashboard greeting.
pub fn validate_display_name(name: &str) -> Result<(), CoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::Validation("Name is required".into()));
    }
    if name.chars().count() > MAX_DISPLAY_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Name must be at most {MAX_DISPLAY_NAME_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_normalised_and_checked() {
        let email = normalize_email("  Grandma@Example.COM ");
        assert_eq!(email, "grandma@example.com");
        assert!(validate_email(&email).is_ok());
        assert!(validate_email("not-an-email").is_err());
    }

    #[test]
    fn blank_name_rejected() {
        assert!(validate_display_name("   ").is_err());
        assert!(validate_display_name("Asha").is_ok());
    }
}
