//! Completion provider abstraction for Confab.
//!
//! This module defines the `CompletionProvider` trait that the
//! infrastructure layer implements (e.g., against the Google Generative
//! Language API).

pub mod provider;
