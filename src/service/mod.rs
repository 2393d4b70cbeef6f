//! Service integrations for external APIs and clients.
//!
//! This module contains implementations for the services used by the report-bot:
//! - Chat services (e.g., Discord)
//! - Message lookup (e.g., the Discord cache and HTTP API)
//!
//! Each service module defines both generic traits and concrete implementations,
//! allowing for extensibility and easy testing.

pub mod chat;
pub mod lookup;
