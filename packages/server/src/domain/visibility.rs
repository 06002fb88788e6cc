//! Message visibility.
//!
//! A message is visible to a reader when any of the following holds:
//! it is addressed to the reader, it was written by the reader, it is
//! addressed to everyone, or its kind is public (`message` / `status`).
//! In effect only private messages are restricted, and those only to their
//! sender and addressee. This is a display policy, not an access control
//! boundary: identities are not authenticated.

use super::{entity::Message, value_object::MessageKind};

/// Whether `reader` may see `message`. `None` is an anonymous reader.
pub fn is_visible_to(message: &Message, reader: Option<&str>) -> bool {
    let addressed_to_reader = reader.is_some_and(|r| message.to.as_str() == r);
    let written_by_reader = reader.is_some_and(|r| message.from.as_str() == r);
    let public_kind = match message.kind {
        MessageKind::Message | MessageKind::Status => true,
        MessageKind::PrivateMessage => false,
    };

    addressed_to_reader || written_by_reader || message.to.is_everyone() || public_kind
}

/// The messages `reader` may see, in log order, keeping only the last
/// `limit` of them when a limit is given.
pub fn visible_messages(
    reader: Option<&str>,
    messages: Vec<Message>,
    limit: Option<usize>,
) -> Vec<Message> {
    let mut visible: Vec<Message> = messages
        .into_iter()
        .filter(|m| is_visible_to(m, reader))
        .collect();

    if let Some(limit) = limit
        && visible.len() > limit
    {
        visible.drain(..visible.len() - limit);
    }

    visible
}

/// Interpret a raw `limit` query value.
///
/// Anything that is not a positive integer means "no limit".
pub fn parse_limit(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|n| *n > 0)
        .and_then(|n| usize::try_from(n).ok())
}
