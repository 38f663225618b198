//! Service kinds offered by PawPath.

use serde::{Deserialize, Serialize};

/// Error returned when parsing a [`ServiceKind`] from a string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown service kind: {0}")]
pub struct ServiceKindError(pub String);

/// The fixed catalogue of bookable services.
///
/// Stored as snake_case text in both persistence backends; parsing back an
/// unknown value is treated as data corruption by the stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    /// A neighbourhood walk.
    Walk,
    /// A short home visit for feeding, play, and a garden break.
    DropIn,
    /// An overnight stay at the client's home.
    Overnight,
}

impl ServiceKind {
    /// All service kinds, in catalogue order.
    pub const ALL: [Self; 3] = [Self::Walk, Self::DropIn, Self::Overnight];

    /// Human-readable label for templates.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Walk => "Walk",
            Self::DropIn => "Drop-in Visit",
            Self::Overnight => "Overnight Stay",
        }
    }
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Walk => write!(f, "walk"),
            Self::DropIn => write!(f, "drop_in"),
            Self::Overnight => write!(f, "overnight"),
        }
    }
}

impl std::str::FromStr for ServiceKind {
    type Err = ServiceKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "walk" => Ok(Self::Walk),
            "drop_in" => Ok(Self::DropIn),
            "overnight" => Ok(Self::Overnight),
            other => Err(ServiceKindError(other.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_fromstr_roundtrip() {
        for kind in ServiceKind::ALL {
            let parsed: ServiceKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_fromstr_rejects_unknown() {
        assert!("grooming".parse::<ServiceKind>().is_err());
        assert!("Walk".parse::<ServiceKind>().is_err());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&ServiceKind::DropIn).unwrap();
        assert_eq!(json, "\"drop_in\"");

        let back: ServiceKind = serde_json::from_str("\"overnight\"").unwrap();
        assert_eq!(back, ServiceKind::Overnight);
    }

    #[test]
    fn test_labels() {
        assert_eq!(ServiceKind::Walk.label(), "Walk");
        assert_eq!(ServiceKind::DropIn.label(), "Drop-in Visit");
    }
}
