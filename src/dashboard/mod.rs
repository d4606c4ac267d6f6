//! Presentational dashboard views.
//!
//! Each view takes records read from the store and shapes them for display:
//! donor search, inventory analytics, platform metrics, the admin console,
//! gamification, and the patient lists.

pub mod admin;
pub mod donors;
pub mod gamification;
pub mod inventory;
pub mod metrics;
pub mod patient;

/// Relative time for feed entries (`5 mins ago`, `2 hours ago`).
pub fn minutes_ago(minutes: u32) -> String {
    match minutes {
        0 => "just now".to_string(),
        1 => "1 min ago".to_string(),
        2..60 => format!("{minutes} mins ago"),
        60..120 => "1 hour ago".to_string(),
        _ => format!("{} hours ago", minutes / 60),
    }
}

/// Relative date for sign-ups (`2 days ago`, `1 week ago`).
pub fn days_ago(days: u32) -> String {
    match days {
        0 => "today".to_string(),
        1 => "1 day ago".to_string(),
        2..7 => format!("{days} days ago"),
        7..14 => "1 week ago".to_string(),
        _ => format!("{} weeks ago", days / 7),
    }
}

// Tests.
