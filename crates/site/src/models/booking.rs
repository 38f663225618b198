//! Booking domain types.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use pawpath_core::{BookingId, DurationMinutes, PetCount, ServiceKind, UserId};

/// An immutable record of a requested service occurrence.
///
/// Bookings are only ever created, never updated or deleted. Serializable
/// because the local backend persists the full collection as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Unique booking ID, assigned by the store at creation.
    pub id: BookingId,
    /// The identity this booking belongs to.
    pub owner: UserId,
    /// Which service was requested.
    pub service: ServiceKind,
    /// Calendar date of the visit.
    pub date: NaiveDate,
    /// Start time of the visit.
    pub start_time: NaiveTime,
    /// Visit length.
    pub duration: DurationMinutes,
    /// How many pets the visit covers.
    pub pets: PetCount,
    /// Free-text notes for the walker.
    pub notes: Option<String>,
    /// When the booking was created, assigned by the store.
    pub created_at: DateTime<Utc>,
}

/// A validated booking request, ready for the store.
///
/// Carries everything except the id and creation timestamp, which the store
/// assigns. Constructing one requires already-validated field types, so a
/// `NewBooking` can always be persisted as-is.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub owner: UserId,
    pub service: ServiceKind,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub duration: DurationMinutes,
    pub pets: PetCount,
    pub notes: Option<String>,
}

impl NewBooking {
    /// Materialize the booking with a store-assigned id and timestamp.
    #[must_use]
    pub fn into_booking(self) -> Booking {
        Booking {
            id: BookingId::random(),
            owner: self.owner,
            service: self.service,
            date: self.date,
            start_time: self.start_time,
            duration: self.duration,
            pets: self.pets,
            notes: self.notes,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample(owner: UserId) -> NewBooking {
        NewBooking {
            owner,
            service: ServiceKind::Walk,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            duration: DurationMinutes::new(30).unwrap(),
            pets: PetCount::new(1).unwrap(),
            notes: None,
        }
    }

    #[test]
    fn test_into_booking_assigns_fresh_ids() {
        let owner = UserId::random();
        let a = sample(owner).into_booking();
        let b = sample(owner).into_booking();

        assert_ne!(a.id, b.id);
        assert_eq!(a.owner, owner);
        assert_eq!(a.service, ServiceKind::Walk);
    }

    #[test]
    fn test_booking_serde_roundtrip() {
        let booking = sample(UserId::random()).into_booking();
        let json = serde_json::to_string(&booking).unwrap();
        let back: Booking = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, booking.id);
        assert_eq!(back.date, booking.date);
        assert_eq!(back.start_time, booking.start_time);
        assert_eq!(back.duration, booking.duration);
    }
}
