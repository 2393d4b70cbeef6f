//! The report-filing conversation.
//!
//! - `taxonomy`: the reasons, targeted groups, and actions a reporter picks from.
//! - `link`: finding the `guild/channel/message` ids in a pasted link.
//! - `session`: the per-user state machine.
//! - `registry`: one session per reporting user.

pub mod link;
pub mod registry;
pub mod session;
pub mod taxonomy;

/// A message starting with this opens a new report.
pub const START_KEYWORD: &str = "report";

/// A message equal to this cancels the report in progress.
pub const CANCEL_KEYWORD: &str = "cancel";

/// A message equal to this shows usage help.
pub const HELP_KEYWORD: &str = "help";
