//! Conversation orchestration for Confab.
//!
//! This module owns the end-to-end send-message flow: resolve the caller,
//! resolve or create the session, persist the user turn, invoke the
//! completion provider, persist the reply.

pub mod service;
