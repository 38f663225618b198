//! Bounded numeric fields for booking records.
//!
//! Both types validate on construction so a [`crate::ServiceKind`] booking
//! can never carry an out-of-range duration or pet count, regardless of
//! which persistence backend it came from.

use serde::{Deserialize, Serialize};

/// Error returned when a duration is outside the bookable range.
#[derive(Debug, Clone, thiserror::Error)]
#[error("duration must be between {min} and {max} minutes (got {got})", min = DurationMinutes::MIN, max = DurationMinutes::MAX)]
pub struct DurationMinutesError {
    /// The rejected value.
    pub got: i32,
}

/// A booking duration in minutes, bounded to 20-240.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct DurationMinutes(i32);

impl DurationMinutes {
    /// Shortest bookable visit.
    pub const MIN: i32 = 20;
    /// Longest bookable visit.
    pub const MAX: i32 = 240;

    /// Validate and wrap a duration.
    ///
    /// # Errors
    ///
    /// Returns an error if `minutes` is outside 20-240.
    pub const fn new(minutes: i32) -> Result<Self, DurationMinutesError> {
        if minutes < Self::MIN || minutes > Self::MAX {
            return Err(DurationMinutesError { got: minutes });
        }
        Ok(Self(minutes))
    }

    /// Get the duration in minutes.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for DurationMinutes {
    type Error = DurationMinutesError;

    fn try_from(minutes: i32) -> Result<Self, Self::Error> {
        Self::new(minutes)
    }
}

impl From<DurationMinutes> for i32 {
    fn from(d: DurationMinutes) -> Self {
        d.0
    }
}

impl std::fmt::Display for DurationMinutes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a pet count is outside the serviceable range.
#[derive(Debug, Clone, thiserror::Error)]
#[error("pet count must be between {min} and {max} (got {got})", min = PetCount::MIN, max = PetCount::MAX)]
pub struct PetCountError {
    /// The rejected value.
    pub got: i32,
}

/// Number of pets covered by a booking, bounded to 1-6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct PetCount(i32);

impl PetCount {
    /// A booking covers at least one pet.
    pub const MIN: i32 = 1;
    /// One walker can safely handle at most six.
    pub const MAX: i32 = 6;

    /// Validate and wrap a pet count.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is outside 1-6.
    pub const fn new(count: i32) -> Result<Self, PetCountError> {
        if count < Self::MIN || count > Self::MAX {
            return Err(PetCountError { got: count });
        }
        Ok(Self(count))
    }

    /// Get the pet count.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for PetCount {
    type Error = PetCountError;

    fn try_from(count: i32) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl From<PetCount> for i32 {
    fn from(p: PetCount) -> Self {
        p.0
    }
}

impl std::fmt::Display for PetCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_bounds() {
        assert!(DurationMinutes::new(19).is_err());
        assert!(DurationMinutes::new(20).is_ok());
        assert!(DurationMinutes::new(240).is_ok());
        assert!(DurationMinutes::new(241).is_err());
        assert!(DurationMinutes::new(-30).is_err());
    }

    #[test]
    fn test_pet_count_bounds() {
        assert!(PetCount::new(0).is_err());
        assert!(PetCount::new(1).is_ok());
        assert!(PetCount::new(6).is_ok());
        assert!(PetCount::new(7).is_err());
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<DurationMinutes>("15").is_err());
        assert!(serde_json::from_str::<PetCount>("9").is_err());

        let d: DurationMinutes = serde_json::from_str("30").unwrap();
        assert_eq!(d.as_i32(), 30);
    }

    #[test]
    fn test_serde_serializes_as_number() {
        let d = DurationMinutes::new(45).unwrap();
        assert_eq!(serde_json::to_string(&d).unwrap(), "45");
    }

    #[test]
    fn test_error_messages_name_the_bounds() {
        let err = DurationMinutes::new(5).unwrap_err();
        assert!(err.to_string().contains("between 20 and 240"));

        let err = PetCount::new(12).unwrap_err();
        assert!(err.to_string().contains("between 1 and 6"));
    }
}
