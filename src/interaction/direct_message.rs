//! Routes an incoming direct message through the report flow.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{Instrument, debug, error, info, instrument};

use crate::{
    base::{
        prompts,
        types::{Res, Void},
    },
    report::{
        HELP_KEYWORD, START_KEYWORD,
        registry::SessionRegistry,
        session::{FiledReport, Outcome},
    },
    service::{chat::ChatClient, lookup::LookupClient},
};

/// The transport-independent parts of an inbound message.
#[derive(Debug, Clone)]
pub struct DirectMessage {
    /// The user who sent it; sessions are keyed by this.
    pub author_id: u64,
    /// Where replies go.
    pub channel_id: u64,
    pub content: String,
}

/// A filed report as it is logged for moderators.
#[derive(Debug, Serialize)]
struct ReportRecord<'a> {
    reporter_id: u64,
    filed_at: DateTime<Utc>,
    #[serde(flatten)]
    report: &'a FiledReport,
}

/// Handles a direct message.
///
/// Spawns a task so the gateway is never blocked on lookups or replies.
#[instrument(skip_all, fields(author_id = message.author_id))]
pub fn handle_direct_message(message: DirectMessage, sessions: SessionRegistry, lookup: LookupClient, chat: ChatClient) {
    tokio::spawn(
        async move {
            // Process the message.
            let result = handle_direct_message_internal(message, &sessions, &lookup, &chat).await;

            // Log any errors.
            if let Err(err) = &result {
                error!("Error while handling: {}", err);
            }
        }
        .in_current_span(),
    );
}

/// Does the work of [`handle_direct_message`] without spawning.
///
/// A finished session leaves the registry before any reply is sent, so a failed
/// send never strands the user on a dead session.
#[instrument(skip_all, fields(author_id = message.author_id))]
pub async fn handle_direct_message_internal(message: DirectMessage, sessions: &SessionRegistry, lookup: &LookupClient, chat: &ChatClient) -> Void {
    // Help is answered at any time and never reaches the session.

    if message.content == HELP_KEYWORD {
        chat.send_message(message.channel_id, prompts::HELP).await?;
        return Ok(());
    }

    // Only the start keyword opens a session; anything else from a user without one is ignored.

    let create = message.content.starts_with(START_KEYWORD);

    let mut session = loop {
        let Some(handle) = sessions.session_for(message.author_id, create).await else {
            debug!("Ignoring message from user without a report in progress.");
            return Ok(());
        };

        let session = handle.lock_owned().await;

        // The previous message may have finished this session while we waited; it is already out of the registry.
        if !session.is_complete() {
            break session;
        }
    };

    let replies = session.handle_message(&message.content, &**lookup).await;

    if session.is_complete() {
        sessions.remove(message.author_id).await;

        match session.outcome() {
            Some(Outcome::Filed(report)) => info!(report = %report_record(message.author_id, Utc::now(), report)?, "Report filed."),
            _ => info!("Report cancelled."),
        }
    }

    for reply in &replies {
        chat.send_message(message.channel_id, reply).await?;
    }

    Ok(())
}

/// Renders a filed report as the JSON line moderators read from the log.
fn report_record(reporter_id: u64, filed_at: DateTime<Utc>, report: &FiledReport) -> Res<String> {
    let record = ReportRecord { reporter_id, filed_at, report };

    Ok(serde_json::to_string(&record)?)
}

// Tests.

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::{Value, json};

    use super::*;
    use crate::report::{
        session::TargetMessage,
        taxonomy::{Reason, RequestedAction, TargetGroup},
    };

    fn filed_report() -> FiledReport {
        FiledReport {
            target: TargetMessage {
                guild_id: 111,
                channel_id: 222,
                message_id: 333,
                author: "mallory".to_string(),
                body: "you should all leave".to_string(),
            },
            reason: Reason::TargetedMisinformation,
            group: Some(TargetGroup::Political),
            action: Some(RequestedAction::BlockUser),
        }
    }

    #[test]
    fn test_report_record_shape() {
        let filed_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        let record: Value = serde_json::from_str(&report_record(42, filed_at, &filed_report()).unwrap()).unwrap();

        assert_eq!(record["reporter_id"], json!(42));
        assert_eq!(record["filed_at"], serde_json::to_value(filed_at).unwrap());
        assert_eq!(record["reason"], json!("targeted-misinformation"));
        assert_eq!(record["group"], json!("political"));
        assert_eq!(record["action"], json!("block-user"));
        assert_eq!(
            record["target"],
            json!({
                "guild_id": 111,
                "channel_id": 222,
                "message_id": 333,
                "author": "mallory",
                "body": "you should all leave",
            })
        );

        // The report's fields sit beside the reporter's, not under a nested key.
        assert!(record.get("report").is_none());
    }

    #[test]
    fn test_report_record_keeps_missing_selections() {
        let report = FiledReport {
            reason: Reason::Spam,
            group: None,
            action: None,
            ..filed_report()
        };

        let record: Value = serde_json::from_str(&report_record(7, Utc::now(), &report).unwrap()).unwrap();

        assert_eq!(record["reason"], json!("spam"));
        assert_eq!(record["group"], Value::Null);
        assert_eq!(record["action"], Value::Null);
    }
}
