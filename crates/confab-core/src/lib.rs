//! Business logic and repository trait definitions for Confab.
//!
//! This crate defines the "ports" (repository and provider traits) that the
//! infrastructure layer implements. It depends only on `confab-types` --
//! never on `confab-infra` or any database/IO crate.

pub mod chat;
pub mod completion;
pub mod conversation;
pub mod user;
