//! Extraction of the `guild/channel/message` identifier triple from pasted text.
//!
//! The triple may appear anywhere in the text: a full message link such as
//! `https://discord.com/channels/111/222/333`, a bare `111/222/333`, or either
//! surrounded by prose. The leftmost match wins.

/// The three ids that locate a message.
///
/// An id is `None` when its digits do not fit in a `u64`. Such an id cannot
/// name anything, but the link is still well-formed, so the caller reports it
/// as not found rather than unreadable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageTriple {
    pub guild_id: Option<u64>,
    pub channel_id: Option<u64>,
    pub message_id: Option<u64>,
}

/// A maximal run of ASCII digits, as byte offsets into the input.
#[derive(Debug, Clone, Copy)]
struct DigitRun {
    start: usize,
    end: usize,
}

/// Splits the text into maximal ASCII digit runs.
fn digit_runs(text: &str) -> Vec<DigitRun> {
    let bytes = text.as_bytes();
    let mut runs = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;

            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }

            runs.push(DigitRun { start, end: i });
        } else {
            i += 1;
        }
    }

    runs
}

/// Whether `left` and `right` are separated by exactly one `/`.
fn slash_joined(text: &str, left: DigitRun, right: DigitRun) -> bool {
    right.start == left.end + 1 && text.as_bytes()[left.end] == b'/'
}

/// The id a run spells, or `None` past `u64::MAX`.
fn parse_id(text: &str, run: DigitRun) -> Option<u64> {
    text[run.start..run.end].parse().ok()
}

/// Finds the leftmost `<digits>/<digits>/<digits>` in `text`.
pub fn parse_triple(text: &str) -> Option<MessageTriple> {
    let runs = digit_runs(text);

    runs.windows(3).find_map(|w| {
        let [a, b, c] = [w[0], w[1], w[2]];

        (slash_joined(text, a, b) && slash_joined(text, b, c)).then(|| MessageTriple {
            guild_id: parse_id(text, a),
            channel_id: parse_id(text, b),
            message_id: parse_id(text, c),
        })
    })
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(guild_id: u64, channel_id: u64, message_id: u64) -> Option<MessageTriple> {
        Some(MessageTriple {
            guild_id: Some(guild_id),
            channel_id: Some(channel_id),
            message_id: Some(message_id),
        })
    }

    #[test]
    fn test_parses_full_discord_link() {
        let text = "https://discord.com/channels/1103033282779676743/1103033287250792540/1110432104435404830";

        assert_eq!(parse_triple(text), triple(1103033282779676743, 1103033287250792540, 1110432104435404830));
    }

    #[test]
    fn test_finds_triple_inside_prose() {
        assert_eq!(parse_triple("check this out https://x/111/222/333 pls"), triple(111, 222, 333));
        assert_eq!(parse_triple("1/2/3"), triple(1, 2, 3));
    }

    #[test]
    fn test_leftmost_match_wins() {
        assert_eq!(parse_triple("https://x/111/222/333/444"), triple(111, 222, 333));
        assert_eq!(parse_triple("see 5/6 and then 7/8/9"), triple(7, 8, 9));
    }

    #[test]
    fn test_separators_must_be_single_slashes() {
        assert_eq!(parse_triple("111//222/333"), None);
        assert_eq!(parse_triple("111/222 /333"), None);
        assert_eq!(parse_triple("111-222-333"), None);
        assert_eq!(parse_triple("111/abc/333"), None);
    }

    #[test]
    fn test_rejects_text_without_triple() {
        assert_eq!(parse_triple(""), None);
        assert_eq!(parse_triple("report"), None);
        assert_eq!(parse_triple("https://discord.com/channels/111/222"), None);
    }

    #[test]
    fn test_oversized_ids_still_form_a_triple() {
        let huge = "99999999999999999999999";

        let expected = MessageTriple {
            guild_id: None,
            channel_id: Some(1),
            message_id: Some(2),
        };

        assert_eq!(parse_triple(&format!("{huge}/1/2")), Some(expected));
        assert_eq!(parse_triple(&format!("{huge}/1/2/3")), Some(expected));
        assert_eq!(parse_triple(&format!("1/2/{huge}")).map(|t| t.message_id), Some(None));
        assert_eq!(parse_triple("18446744073709551615/1/2"), triple(u64::MAX, 1, 2));
    }

    #[test]
    fn test_handles_non_ascii_text() {
        assert_eq!(parse_triple("héllo ✨ 10/20/30 ✨"), triple(10, 20, 30));
        assert_eq!(parse_triple("١/٢/٣"), None);
    }
}
