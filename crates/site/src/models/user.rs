//! Identity domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pawpath_core::{Email, UserId};

/// An authenticated account as the site reasons about it.
///
/// On the local backend identities are fabricated at sign-in; on the postgres
/// backend they are backed by the `users` table with a `profiles` mirror row.
/// Serializable because the local backend persists identities as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    /// Unique account ID.
    pub id: UserId,
    /// The account's email address.
    pub email: Email,
    /// Name shown in the header and on the profile page.
    pub display_name: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl Identity {
    /// Build a fresh identity, defaulting the display name to the email's
    /// local part when none was given at sign-up.
    #[must_use]
    pub fn new(email: Email, display_name: Option<String>) -> Self {
        let display_name = display_name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| email.local_part().to_owned());

        Self {
            id: UserId::random(),
            email,
            display_name,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_defaults_to_local_part() {
        let email = Email::parse("rosie@pawpath.dog").unwrap();
        let identity = Identity::new(email, None);
        assert_eq!(identity.display_name, "rosie");
    }

    #[test]
    fn test_blank_display_name_is_treated_as_absent() {
        let email = Email::parse("rosie@pawpath.dog").unwrap();
        let identity = Identity::new(email, Some("   ".to_owned()));
        assert_eq!(identity.display_name, "rosie");
    }

    #[test]
    fn test_explicit_display_name_is_kept() {
        let email = Email::parse("rosie@pawpath.dog").unwrap();
        let identity = Identity::new(email, Some("Rosie K.".to_owned()));
        assert_eq!(identity.display_name, "Rosie K.");
    }
}
