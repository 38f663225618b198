//! File-backed local store.
//!
//! The local variant keeps all state in two named JSON documents inside the
//! data directory:
//!
//! - `identities.json` - every fabricated identity
//! - `bookings.json` - every booking across all identities, filtered by
//!   owner on read
//!
//! Writes rewrite the whole document, matching the storage semantics this
//! backend emulates. All state is also held in memory behind an async
//! `RwLock`, so reads never touch the filesystem.

use std::path::{Path, PathBuf};

use tokio::sync::RwLock;

use pawpath_core::{Email, UserId};

use super::StoreError;
use crate::models::{Booking, Identity, NewBooking};

/// File name for the serialized identity collection.
const IDENTITIES_FILE: &str = "identities.json";

/// File name for the serialized booking collection.
const BOOKINGS_FILE: &str = "bookings.json";

#[derive(Debug, Default)]
struct LocalState {
    identities: Vec<Identity>,
    bookings: Vec<Booking>,
}

/// JSON-file-backed store for the local variant.
#[derive(Debug)]
pub struct LocalStore {
    identities_path: PathBuf,
    bookings_path: PathBuf,
    state: RwLock<LocalState>,
}

impl LocalStore {
    /// Open (or initialize) the store in `data_dir`.
    ///
    /// Missing files are treated as empty collections; the directory is
    /// created if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or an existing
    /// data file cannot be read or parsed.
    pub async fn open(data_dir: &Path) -> Result<Self, StoreError> {
        tokio::fs::create_dir_all(data_dir).await?;

        let identities_path = data_dir.join(IDENTITIES_FILE);
        let bookings_path = data_dir.join(BOOKINGS_FILE);

        let identities = load_collection(&identities_path).await?;
        let bookings = load_collection(&bookings_path).await?;

        tracing::info!(
            identities = identities.len(),
            bookings = bookings.len(),
            "Local store opened at {}",
            data_dir.display()
        );

        Ok(Self {
            identities_path,
            bookings_path,
            state: RwLock::new(LocalState {
                identities,
                bookings,
            }),
        })
    }

    /// Look up an identity by email.
    pub async fn identity_by_email(&self, email: &Email) -> Option<Identity> {
        let state = self.state.read().await;
        state.identities.iter().find(|i| &i.email == email).cloned()
    }

    /// Look up an identity by id.
    pub async fn identity_by_id(&self, id: UserId) -> Option<Identity> {
        let state = self.state.read().await;
        state.identities.iter().find(|i| i.id == id).cloned()
    }

    /// Return the existing identity for `email`, or fabricate and persist a
    /// new one.
    ///
    /// This is the local variant's whole notion of authentication: there are
    /// no credentials to check, only an identity to conjure.
    ///
    /// # Errors
    ///
    /// Returns an error if the identity file cannot be written.
    pub async fn fabricate_identity(
        &self,
        email: &Email,
        display_name: Option<&str>,
    ) -> Result<Identity, StoreError> {
        let mut state = self.state.write().await;

        if let Some(existing) = state.identities.iter().find(|i| &i.email == email) {
            return Ok(existing.clone());
        }

        let identity = Identity::new(email.clone(), display_name.map(str::to_owned));
        state.identities.push(identity.clone());
        persist_collection(&self.identities_path, &state.identities).await?;

        tracing::debug!(id = %identity.id, "Fabricated local identity");
        Ok(identity)
    }

    /// Append a booking for an existing identity.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownOwner`] if the owner is not a known
    /// identity, or an error if the booking file cannot be written.
    pub async fn create_booking(&self, new: NewBooking) -> Result<Booking, StoreError> {
        let mut state = self.state.write().await;

        if !state.identities.iter().any(|i| i.id == new.owner) {
            return Err(StoreError::UnknownOwner);
        }

        let booking = new.into_booking();
        state.bookings.push(booking.clone());
        persist_collection(&self.bookings_path, &state.bookings).await?;

        Ok(booking)
    }

    /// All bookings owned by `owner`, in insertion order.
    pub async fn bookings_for_owner(&self, owner: UserId) -> Vec<Booking> {
        let state = self.state.read().await;
        state
            .bookings
            .iter()
            .filter(|b| b.owner == owner)
            .cloned()
            .collect()
    }
}

/// Load a JSON collection from disk, treating a missing file as empty.
async fn load_collection<T: serde::de::DeserializeOwned>(
    path: &Path,
) -> Result<Vec<T>, StoreError> {
    match tokio::fs::read_to_string(path).await {
        Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
            StoreError::DataCorruption(format!("{}: {e}", path.display()))
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(StoreError::Io(e)),
    }
}

/// Rewrite a JSON collection on disk.
async fn persist_collection<T: serde::Serialize>(
    path: &Path,
    items: &[T],
) -> Result<(), StoreError> {
    let raw = serde_json::to_string_pretty(items)?;
    tokio::fs::write(path, raw).await?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use pawpath_core::{DurationMinutes, PetCount, ServiceKind};

    use super::*;

    fn walk_at_nine(owner: UserId) -> NewBooking {
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

    #[tokio::test]
    async fn test_fabricate_is_idempotent_per_email() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).await.unwrap();
        let email = Email::parse("rosie@pawpath.dog").unwrap();

        let first = store.fabricate_identity(&email, None).await.unwrap();
        let second = store.fabricate_identity(&email, None).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.email, email);
    }

    #[tokio::test]
    async fn test_create_then_list_contains_exactly_the_booking() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).await.unwrap();
        let email = Email::parse("rosie@pawpath.dog").unwrap();
        let identity = store.fabricate_identity(&email, None).await.unwrap();

        let created = store.create_booking(walk_at_nine(identity.id)).await.unwrap();
        let listed = store.bookings_for_owner(identity.id).await;

        assert_eq!(listed.len(), 1);
        let got = listed.first().unwrap();
        assert_eq!(got.id, created.id);
        assert_eq!(got.service, ServiceKind::Walk);
        assert_eq!(got.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(got.duration.as_i32(), 30);
        assert_eq!(got.notes, None);
    }

    #[tokio::test]
    async fn test_list_for_unknown_owner_is_empty_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).await.unwrap();

        assert!(store.bookings_for_owner(UserId::random()).await.is_empty());
    }

    #[tokio::test]
    async fn test_create_for_unknown_owner_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).await.unwrap();

        let result = store.create_booking(walk_at_nine(UserId::random())).await;
        assert!(matches!(result, Err(StoreError::UnknownOwner)));
        assert!(store.bookings_for_owner(UserId::random()).await.is_empty());
    }

    #[tokio::test]
    async fn test_list_order_is_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).await.unwrap();
        let email = Email::parse("rosie@pawpath.dog").unwrap();
        let identity = store.fabricate_identity(&email, None).await.unwrap();

        let first = store.create_booking(walk_at_nine(identity.id)).await.unwrap();
        let mut second_req = walk_at_nine(identity.id);
        second_req.service = ServiceKind::Overnight;
        let second = store.create_booking(second_req).await.unwrap();

        // Stable across repeated reads
        for _ in 0..2 {
            let listed = store.bookings_for_owner(identity.id).await;
            let ids: Vec<_> = listed.iter().map(|b| b.id).collect();
            assert_eq!(ids, vec![first.id, second.id]);
        }
    }

    #[tokio::test]
    async fn test_bookings_are_scoped_to_their_owner() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).await.unwrap();
        let rosie = store
            .fabricate_identity(&Email::parse("rosie@pawpath.dog").unwrap(), None)
            .await
            .unwrap();
        let finn = store
            .fabricate_identity(&Email::parse("finn@pawpath.dog").unwrap(), None)
            .await
            .unwrap();

        store.create_booking(walk_at_nine(rosie.id)).await.unwrap();

        assert_eq!(store.bookings_for_owner(rosie.id).await.len(), 1);
        assert!(store.bookings_for_owner(finn.id).await.is_empty());
    }

    #[tokio::test]
    async fn test_state_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let email = Email::parse("rosie@pawpath.dog").unwrap();

        let identity = {
            let store = LocalStore::open(dir.path()).await.unwrap();
            let identity = store.fabricate_identity(&email, None).await.unwrap();
            store.create_booking(walk_at_nine(identity.id)).await.unwrap();
            identity
        };

        let reopened = LocalStore::open(dir.path()).await.unwrap();
        let restored = reopened.identity_by_email(&email).await.unwrap();
        assert_eq!(restored.id, identity.id);
        assert_eq!(reopened.bookings_for_owner(identity.id).await.len(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_reported_not_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join(BOOKINGS_FILE), "not json")
            .await
            .unwrap();

        let result = LocalStore::open(dir.path()).await;
        assert!(matches!(result, Err(StoreError::DataCorruption(_))));
    }
}
