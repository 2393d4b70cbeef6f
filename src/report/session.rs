//! The per-user report conversation.
//!
//! A [`ReportSession`] is a value: [`ReportSession::advance`] consumes one line
//! of user input and returns the next session together with the reply lines to
//! send, leaving the original untouched. The stages run strictly forward:
//!
//! ```text
//! Start -> AwaitingLink -> MessageIdentified -> [AwaitingGroup -> ActionChosen] -> Complete
//! ```
//!
//! Invalid input keeps the session where it is and answers with a re-prompt.
//! The cancel keyword jumps from any stage straight to `Complete`.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    base::prompts,
    report::{
        CANCEL_KEYWORD,
        link::parse_triple,
        taxonomy::{self, Choice, Reason, RequestedAction, TargetGroup},
    },
    service::lookup::GenericLookupClient,
};

// Types.

/// Where a session is in the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    AwaitingLink,
    MessageIdentified,
    AwaitingGroup,
    ActionChosen,
    Complete,
}

/// The message being reported, fixed once found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetMessage {
    pub guild_id: u64,
    pub channel_id: u64,
    pub message_id: u64,
    pub author: String,
    pub body: String,
}

/// Everything a finished report carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FiledReport {
    pub target: TargetMessage,
    pub reason: Reason,
    /// Present only for [`Reason::TargetedMisinformation`].
    pub group: Option<TargetGroup>,
    /// Present only when a group was chosen first.
    pub action: Option<RequestedAction>,
}

/// How a session reached `Complete`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Cancelled,
    Filed(FiledReport),
}

/// Why a pasted link did not lead to a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    /// No `guild/channel/message` triple in the text.
    Unparseable,
    /// The bot is not in the referenced guild.
    GuildNotAccessible,
    ChannelNotFound,
    MessageNotFound,
}

impl LinkError {
    /// The re-prompt shown for this failure.
    pub fn prompt(&self) -> &'static str {
        match self {
            LinkError::Unparseable => prompts::LINK_UNREADABLE,
            LinkError::GuildNotAccessible => prompts::GUILD_NOT_ACCESSIBLE,
            LinkError::ChannelNotFound => prompts::CHANNEL_MISSING,
            LinkError::MessageNotFound => prompts::MESSAGE_MISSING,
        }
    }
}

/// Stage plus the data collected so far.
///
/// Each variant holds exactly what has been gathered by that point, so a group
/// can never exist without a reason, nor an action without a group.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Progress {
    #[default]
    Start,
    AwaitingLink,
    MessageIdentified {
        target: TargetMessage,
    },
    AwaitingGroup {
        target: TargetMessage,
        reason: Reason,
    },
    ActionChosen {
        target: TargetMessage,
        reason: Reason,
        group: TargetGroup,
    },
    Complete(Outcome),
}

/// One user's in-flight report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportSession {
    progress: Progress,
}

/// The result of feeding one input to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// The session after the input.
    pub session: ReportSession,
    /// Reply lines, in the order they must be shown.
    pub replies: Vec<String>,
}

impl Step {
    fn to(progress: Progress, replies: Vec<String>) -> Self {
        Self {
            session: ReportSession { progress },
            replies,
        }
    }

    fn stay(session: &ReportSession, reply: String) -> Self {
        Self {
            session: session.clone(),
            replies: vec![reply],
        }
    }

    fn filed(report: FiledReport) -> Self {
        Self::to(Progress::Complete(Outcome::Filed(report)), vec![prompts::REPORT_COMPLETE.to_string()])
    }
}

impl ReportSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        match self.progress {
            Progress::Start => Stage::Start,
            Progress::AwaitingLink => Stage::AwaitingLink,
            Progress::MessageIdentified { .. } => Stage::MessageIdentified,
            Progress::AwaitingGroup { .. } => Stage::AwaitingGroup,
            Progress::ActionChosen { .. } => Stage::ActionChosen,
            Progress::Complete(_) => Stage::Complete,
        }
    }

    /// True once the session is finished, whether filed or cancelled.
    pub fn is_complete(&self) -> bool {
        self.stage() == Stage::Complete
    }

    pub fn target(&self) -> Option<&TargetMessage> {
        match &self.progress {
            Progress::MessageIdentified { target } | Progress::AwaitingGroup { target, .. } | Progress::ActionChosen { target, .. } => Some(target),
            Progress::Complete(Outcome::Filed(report)) => Some(&report.target),
            _ => None,
        }
    }

    pub fn reason(&self) -> Option<Reason> {
        match &self.progress {
            Progress::AwaitingGroup { reason, .. } | Progress::ActionChosen { reason, .. } => Some(*reason),
            Progress::Complete(Outcome::Filed(report)) => Some(report.reason),
            _ => None,
        }
    }

    pub fn group(&self) -> Option<TargetGroup> {
        match &self.progress {
            Progress::ActionChosen { group, .. } => Some(*group),
            Progress::Complete(Outcome::Filed(report)) => report.group,
            _ => None,
        }
    }

    pub fn action(&self) -> Option<RequestedAction> {
        match &self.progress {
            Progress::Complete(Outcome::Filed(report)) => report.action,
            _ => None,
        }
    }

    /// How the session ended, once it has.
    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.progress {
            Progress::Complete(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Feeds one message to the session in place and returns the replies.
    pub async fn handle_message(&mut self, text: &str, lookup: &dyn GenericLookupClient) -> Vec<String> {
        let step = self.advance(text, lookup).await;

        *self = step.session;

        step.replies
    }

    /// Computes the session that follows `text`, and what to say.
    ///
    /// A completed session ignores all input and yields no replies.
    #[instrument(skip_all, fields(stage = ?self.stage()))]
    pub async fn advance(&self, text: &str, lookup: &dyn GenericLookupClient) -> Step {
        let step = self.next(text, lookup).await;

        if step.session.stage() != self.stage() {
            debug!("Report moved from {:?} to {:?}.", self.stage(), step.session.stage());
        }

        step
    }

    async fn next(&self, text: &str, lookup: &dyn GenericLookupClient) -> Step {
        if self.is_complete() {
            return Step {
                session: self.clone(),
                replies: Vec::new(),
            };
        }

        if text == CANCEL_KEYWORD {
            return Step::to(Progress::Complete(Outcome::Cancelled), vec![prompts::REPORT_CANCELLED.to_string()]);
        }

        match &self.progress {
            Progress::Start => Step::to(Progress::AwaitingLink, vec![prompts::WELCOME.to_string()]),
            Progress::AwaitingLink => match locate_message(text, lookup).await {
                Ok(target) => {
                    let replies = vec![
                        prompts::FOUND_MESSAGE.to_string(),
                        prompts::quote_message(&target.author, &target.body),
                        taxonomy::reason_menu(),
                    ];

                    Step::to(Progress::MessageIdentified { target }, replies)
                }
                Err(err) => {
                    debug!("Link rejected: {:?}.", err);
                    Step::stay(self, err.prompt().to_string())
                }
            },
            Progress::MessageIdentified { target } => match Reason::from_code(text) {
                None => Step::stay(self, taxonomy::correction_menu::<Reason>()),
                Some(reason) if reason.needs_group() => Step::to(Progress::AwaitingGroup { target: target.clone(), reason }, vec![taxonomy::group_menu()]),
                Some(reason) => Step::filed(FiledReport {
                    target: target.clone(),
                    reason,
                    group: None,
                    action: None,
                }),
            },
            Progress::AwaitingGroup { target, reason } => match TargetGroup::from_code(text) {
                None => Step::stay(self, taxonomy::correction_menu::<TargetGroup>()),
                Some(group) => Step::to(
                    Progress::ActionChosen {
                        target: target.clone(),
                        reason: *reason,
                        group,
                    },
                    vec![taxonomy::action_menu()],
                ),
            },
            // Invalid input re-shows the group options, not the action options.
            Progress::ActionChosen { target, reason, group } => match RequestedAction::from_code(text) {
                None => Step::stay(self, taxonomy::correction_menu::<TargetGroup>()),
                Some(action) => Step::filed(FiledReport {
                    target: target.clone(),
                    reason: *reason,
                    group: Some(*group),
                    action: Some(action),
                }),
            },
            Progress::Complete(_) => Step {
                session: self.clone(),
                replies: Vec::new(),
            },
        }
    }
}

/// Resolves the message a pasted link points at.
///
/// Guild, channel, and message are resolved in that order and the first miss
/// is reported. An id too large to exist counts as a miss at its position.
pub async fn locate_message(text: &str, lookup: &dyn GenericLookupClient) -> Result<TargetMessage, LinkError> {
    let triple = parse_triple(text).ok_or(LinkError::Unparseable)?;

    let guild_id = triple.guild_id.ok_or(LinkError::GuildNotAccessible)?;
    let guild = lookup.resolve_guild(guild_id).await.ok_or(LinkError::GuildNotAccessible)?;

    let channel_id = triple.channel_id.ok_or(LinkError::ChannelNotFound)?;
    let channel = lookup.resolve_channel(&guild, channel_id).await.ok_or(LinkError::ChannelNotFound)?;

    let message_id = triple.message_id.ok_or(LinkError::MessageNotFound)?;
    let message = lookup.resolve_message(&channel, message_id).await.ok_or(LinkError::MessageNotFound)?;

    debug!(guild = %guild.name, channel = %channel.name, "Located message `{}`.", message_id);

    Ok(TargetMessage {
        guild_id: channel.guild_id,
        channel_id: channel.id,
        message_id,
        author: message.author,
        body: message.body,
    })
}

// Tests.
