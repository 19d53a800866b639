//! Infrastructure layer for Confab.
//!
//! Contains implementations of the repository and provider traits defined
//! in `confab-core`: SQLite storage with split read/write pools, and the
//! Gemini completion provider client.

pub mod config;
pub mod llm;
pub mod sqlite;
