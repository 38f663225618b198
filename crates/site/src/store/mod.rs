//! Booking store backends.
//!
//! One logical contract, two interchangeable implementations:
//!
//! - [`local::LocalStore`] - JSON files on disk, fabricated identities,
//!   bookings listed in insertion order.
//! - `Postgres` - relational backend with real credentials, bookings listed
//!   most recent first.
//!
//! The ordering divergence between the two backends is deliberate and
//! documented; each backend's order is pinned by its own tests.
//!
//! Bookings are append-only: there is no update, delete, or cross-user read
//! anywhere on this interface.

pub mod local;

use sqlx::PgPool;
use thiserror::Error;

use pawpath_core::UserId;

use crate::db::bookings::BookingRepository;
use crate::models::{Booking, NewBooking};

pub use local::LocalStore;

/// Errors surfaced by either persistence backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// JSON (de)serialization failed in the local backend.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Reading or writing a local data file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be interpreted.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// The booking's owner does not resolve to an existing identity.
    #[error("owner does not exist")]
    UnknownOwner,

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,
}

/// The active persistence backend.
///
/// Enum dispatch keeps the async methods plain while letting the rest of the
/// site stay backend-agnostic: pages only ever see this type.
pub enum Backend {
    /// File-backed store with fabricated identities.
    Local(LocalStore),
    /// Relational backend; ownership filtering happens in the repositories.
    Postgres(PgPool),
}

impl Backend {
    /// Append a booking and return it with its assigned id and timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownOwner`] if the owner does not resolve to
    /// an existing identity, or a persistence error from the backend.
    pub async fn create_booking(&self, new: NewBooking) -> Result<Booking, StoreError> {
        match self {
            Self::Local(store) => store.create_booking(new).await,
            Self::Postgres(pool) => BookingRepository::new(pool).create(new).await,
        }
    }

    /// All bookings owned by `owner`.
    ///
    /// Local backend: insertion order. Postgres backend: most recent first.
    /// An owner with no bookings gets an empty list, never an error.
    ///
    /// # Errors
    ///
    /// Returns a persistence error from the backend.
    pub async fn bookings_for_owner(&self, owner: UserId) -> Result<Vec<Booking>, StoreError> {
        match self {
            Self::Local(store) => Ok(store.bookings_for_owner(owner).await),
            Self::Postgres(pool) => BookingRepository::new(pool).list_by_owner(owner).await,
        }
    }

    /// Readiness check for `/health/ready`.
    pub async fn health(&self) -> bool {
        match self {
            Self::Local(_) => true,
            Self::Postgres(pool) => sqlx::query("SELECT 1").fetch_one(pool).await.is_ok(),
        }
    }
}
