//! Booking repository for the postgres backend.
//!
//! The `bookings` table is append-only: the repository exposes create and
//! list-by-owner, nothing else. Every read is scoped by `user_id` here so
//! cross-account reads are impossible by construction.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::{PgPool, Row};
use sqlx::postgres::PgRow;

use pawpath_core::{BookingId, DurationMinutes, PetCount, ServiceKind, UserId};

use crate::models::{Booking, NewBooking};
use crate::store::StoreError;

/// Repository for booking rows.
pub struct BookingRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> BookingRepository<'a> {
    /// Create a new booking repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a booking, assigning its id and creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UnknownOwner` if the owner does not reference an
    /// existing account, or `StoreError::Database` for other failures.
    pub async fn create(&self, new: NewBooking) -> Result<Booking, StoreError> {
        let booking = new.into_booking();

        sqlx::query(
            r"
            INSERT INTO bookings (id, user_id, service, date, time, duration_mins, pets, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(booking.id)
        .bind(booking.owner)
        .bind(booking.service.to_string())
        .bind(booking.date)
        .bind(booking.start_time)
        .bind(booking.duration.as_i32())
        .bind(booking.pets.as_i32())
        .bind(booking.notes.as_deref())
        .bind(booking.created_at)
        .execute(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_foreign_key_violation()
            {
                return StoreError::UnknownOwner;
            }
            StoreError::Database(e)
        })?;

        Ok(booking)
    }

    /// All bookings owned by `owner`, most recent first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the query fails, or
    /// `StoreError::DataCorruption` if a stored row does not parse back into
    /// the domain types.
    pub async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Booking>, StoreError> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, service, date, time, duration_mins, pets, notes, created_at
            FROM bookings
            WHERE user_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(owner)
        .fetch_all(self.pool)
        .await?;

        rows.iter().map(booking_from_row).collect()
    }
}

/// Map a booking row back into the domain type.
fn booking_from_row(row: &PgRow) -> Result<Booking, StoreError> {
    let raw_service: String = row.try_get("service")?;
    let service: ServiceKind = raw_service
        .parse()
        .map_err(|e| StoreError::DataCorruption(format!("bad service in database: {e}")))?;

    let raw_duration: i32 = row.try_get("duration_mins")?;
    let duration = DurationMinutes::new(raw_duration)
        .map_err(|e| StoreError::DataCorruption(format!("bad duration in database: {e}")))?;

    let raw_pets: i32 = row.try_get("pets")?;
    let pets = PetCount::new(raw_pets)
        .map_err(|e| StoreError::DataCorruption(format!("bad pet count in database: {e}")))?;

    let id: BookingId = row.try_get("id")?;
    let owner: UserId = row.try_get("user_id")?;
    let date: NaiveDate = row.try_get("date")?;
    let start_time: NaiveTime = row.try_get("time")?;
    let notes: Option<String> = row.try_get("notes")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;

    Ok(Booking {
        id,
        owner,
        service,
        date,
        start_time,
        duration,
        pets,
        notes,
        created_at,
    })
}
