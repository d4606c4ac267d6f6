//! Terminal rendering for chat messages.

use chrono::Local;

use crate::base::types::ChatMessage;

/// Render one message as a single line: `[HH:MM:SS] author [BADGE]: text`.
///
/// The badge is only drawn for severities above `low`.
pub fn message_line(message: &ChatMessage) -> String {
    let time = message.created_at().with_timezone(&Local).format("%H:%M:%S");
    let badge = match message.severity() {
        Some(severity) if severity.is_badged() => format!(" [{severity}]"),
        _ => String::new(),
    };

    format!("[{time}] {}{badge}: {}", message.author(), message.content())
}

// Tests.
