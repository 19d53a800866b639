//! User directory abstractions for Confab.
//!
//! This module defines the `UserRepository` trait that the infrastructure
//! layer implements, plus the `UserDirectory` that maps external identities
//! to internal user records.

pub mod directory;
pub mod repository;
