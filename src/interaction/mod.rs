//! Event handling and user interactions for report-bot.
//!
//! This module connects inbound chat messages to the report flow:
//! - Answering help requests
//! - Opening, advancing, and closing per-user report sessions
//! - Sending each reply line back through the chat service

pub mod direct_message;
