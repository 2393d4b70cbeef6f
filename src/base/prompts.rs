//! User-facing text for the report flow.
//!
//! Menus are assembled from the taxonomy in [`crate::report::taxonomy`]; this
//! module only holds the fixed sentences around them.

/// Sent when a user starts a report.
pub const WELCOME: &str = "Thank you for starting the reporting process. \
Say `help` at any time for more information.\n\n\
Please copy paste the link to the message you want to report.\n\
You can obtain this link by right-clicking the message and clicking `Copy Message Link`.";

/// Sent in reply to the help keyword.
pub const HELP: &str = "Use the `report` command to begin the reporting process.\n\
Use the `cancel` command to cancel the report process.\n";

/// Sent when a report is cancelled.
pub const REPORT_CANCELLED: &str = "Report cancelled.";

/// Sent when a report reaches its last step.
pub const REPORT_COMPLETE: &str = "Thank you for filing this report! We will review this post and take the appropriate action";

// Link errors.

/// No identifier triple in the pasted text.
pub const LINK_UNREADABLE: &str = "I'm sorry, I couldn't read that link. Please try again or say `cancel` to cancel.";

/// The bot is not in the linked guild.
pub const GUILD_NOT_ACCESSIBLE: &str =
    "I cannot accept reports of messages from guilds that I'm not in. Please have the guild owner add me to the guild and try again.";

/// The linked channel does not exist.
pub const CHANNEL_MISSING: &str = "It seems this channel was deleted or never existed. Please try again or say `cancel` to cancel.";

/// The linked message does not exist.
pub const MESSAGE_MISSING: &str = "It seems this message was deleted or never existed. Please try again or say `cancel` to cancel.";

// Menu framing.

/// Introduces the echo of the found message.
pub const FOUND_MESSAGE: &str = "I found this message:";

/// Heads the reason menu.
pub const REASON_MENU_HEADER: &str = "Please specify why you reported this post:";

/// Heads the targeted-group menu.
pub const GROUP_MENU_HEADER: &str = "Which group does this target?";

/// Heads the requested-action menu.
pub const ACTION_MENU_HEADER: &str = "Thank you for filing this report. Would you like to:";

/// Prefixes a menu that is shown again after an invalid selection.
pub const INVALID_SELECTION_HEADER: &str = "Please format your response as one of these options:";

/// Closing line of every menu.
pub const CANCEL_OPTION: &str = "Enter `cancel` to cancel the report";

/// Renders the echo of a found message as a code block.
pub fn quote_message(author: &str, body: &str) -> String {
    format!("```{author}: {body}```")
}
