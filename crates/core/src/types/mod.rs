//! Core types for PawPath.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod booking;
pub mod email;
pub mod id;
pub mod service;

pub use booking::{DurationMinutes, DurationMinutesError, PetCount, PetCountError};
pub use email::{Email, EmailError};
pub use id::*;
pub use service::{ServiceKind, ServiceKindError};
