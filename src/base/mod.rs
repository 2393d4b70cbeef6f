//! Core components, types, and utilities for the report-bot.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - User-facing text for every step of the report flow.
//! - Common result types.

pub mod config;
pub mod prompts;
pub mod types;
