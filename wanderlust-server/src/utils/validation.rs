//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Limits are reasonable UX bounds; the document store itself enforces no
//! lengths.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Display names, tour titles, locations
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: opaque record ids, priority labels, dates-as-text
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Tour descriptions
pub const MAX_DESC_LEN: usize = 2000;

/// Image URLs
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate an optional string against the length limit (empty is allowed).
pub fn validate_optional_text(
    value: Option<&str>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Minimal email shape check: `local@domain` with a dot in the domain.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    validate_required_text(email, "email", MAX_EMAIL_LEN)?;
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    };
    if !valid {
        return Err(AppError::validation(format!("Invalid email: {email}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_blank() {
        assert!(validate_required_text("  ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("Kyoto", "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn required_text_enforces_limit() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&long, "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn email_shape() {
        assert!(validate_email("ana@example.com").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ana@localhost").is_err());
    }
}
