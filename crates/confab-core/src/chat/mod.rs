//! Chat session and message persistence abstractions for Confab.
//!
//! This module defines the `ChatRepository` trait that the infrastructure
//! layer implements, plus the `ChatService` that enforces validation and
//! defaults on top of it.

pub mod repository;
pub mod service;
