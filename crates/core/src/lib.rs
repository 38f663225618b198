//! PawPath Core - Shared types library.
//!
//! This crate provides common types used across all PawPath components:
//! - `site` - Public marketing site and booking flow
//! - `cli` - Command-line tools for migrations and account provisioning
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, service kinds,
//!   and bounded booking fields

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
