//! User account entity.
//!
//! A user owns habits, fixed commitments and everything derived from them
//! (check-ins, schedules, predictions, snapshots). Deleting a user cascades
//! to all owned entities; that cascade is the persistence layer's job, the
//! core only documents the ownership.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::OnceLock;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::preferences::Preferences;

/// A user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    /// Opaque hash produced by the account layer. Never a plaintext password.
    pub password_hash: String,
    /// IANA timezone identifier, e.g. "America/Chicago".
    pub timezone: String,
    pub preferences: Preferences,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a user after checking the email shape and timezone id.
    pub fn new(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        timezone: impl Into<String>,
        preferences: Preferences,
    ) -> Result<Self, ValidationError> {
        let email = email.into();
        let timezone = timezone.into();
        validate_email(&email)?;
        validate_timezone(&timezone)?;

        Ok(Self {
            id: Uuid::new_v4(),
            email,
            password_hash: password_hash.into(),
            timezone,
            preferences,
            created_at: Utc::now(),
        })
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
    })
}

/// Check that an email is well-formed (local@domain.tld shape).
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email_pattern().is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::MalformedEmail(email.to_string()))
    }
}

/// Check that a string names a known IANA timezone.
pub fn validate_timezone(timezone: &str) -> Result<(), ValidationError> {
    chrono_tz::Tz::from_str(timezone)
        .map(|_| ())
        .map_err(|_| ValidationError::UnknownTimezone(timezone.to_string()))
}
