//! Admin console: system health, the action queue, and recent sign-ups.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::base::types::BloodType;

use super::{days_ago, minutes_ago};

/// Platform-wide health numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemMetrics {
    pub total_users: u32,
    pub active_donors: u32,
    pub pending_requests: u32,
    pub uptime_percent: f64,
    pub avg_response_minutes: u32,
    pub success_rate_percent: f64,
}

impl SystemMetrics {
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Total users       {}", self.total_users),
            format!("Active donors     {}", self.active_donors),
            format!("Pending requests  {}", self.pending_requests),
            format!("Uptime            {:.1}%", self.uptime_percent),
            format!("Avg response      {} mins", self.avg_response_minutes),
            format!("Success rate      {:.1}%", self.success_rate_percent),
        ]
    }
}

// Action queue.

/// How soon an admin should look at something.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
            Priority::Urgent => "URGENT",
        })
    }
}

/// Something waiting on an admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingAction {
    pub kind: String,
    /// The user, location, or item the action concerns.
    pub subject: String,
    pub priority: Priority,
    pub minutes_ago: u32,
}

impl fmt::Display for PendingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:<6}] {:<18} {}  {}", self.priority, self.kind, self.subject, minutes_ago(self.minutes_ago))
    }
}

/// Most urgent first; within a priority, oldest first.
pub fn sort_actions(actions: &mut [PendingAction]) {
    actions.sort_by(|a, b| b.priority.cmp(&a.priority).then(b.minutes_ago.cmp(&a.minutes_ago)));
}

// Recent users.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserKind {
    Donor,
    Patient,
}

impl fmt::Display for UserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            UserKind::Donor => "Donor",
            UserKind::Patient => "Patient",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Verified,
    Pending,
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            AccountStatus::Active => "Active",
            AccountStatus::Verified => "Verified",
            AccountStatus::Pending => "Pending",
        })
    }
}

/// A newly registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentUser {
    pub name: String,
    pub kind: UserKind,
    pub blood_type: BloodType,
    pub status: AccountStatus,
    pub joined_days_ago: u32,
}

impl RecentUser {
    /// Initials for the avatar column.
    pub fn initials(&self) -> String {
        self.name.split_whitespace().filter_map(|part| part.chars().next()).collect()
    }
}

impl fmt::Display for RecentUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<3} {:<14} {:<7} {:<4} {:<8} {}",
            self.initials(),
            self.name,
            self.kind,
            self.blood_type,
            self.status,
            days_ago(self.joined_days_ago)
        )
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    fn action(kind: &str, priority: Priority, minutes_ago: u32) -> PendingAction {
        PendingAction {
            kind: kind.into(),
            subject: "City Hospital".into(),
            priority,
            minutes_ago,
        }
    }

    #[test]
    fn test_metrics_lines() {
        let metrics = SystemMetrics {
            total_users: 2847,
            active_donors: 892,
            pending_requests: 23,
            uptime_percent: 99.9,
            avg_response_minutes: 18,
            success_rate_percent: 94.2,
        };

        let lines = metrics.lines();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].ends_with("2847"));
        assert!(lines[3].ends_with("99.9%"));
        assert!(lines[4].ends_with("18 mins"));
        assert!(lines[5].ends_with("94.2%"));
    }

    #[test]
    fn test_actions_sort_by_priority() {
        let mut actions = vec![
            action("Donor Verification", Priority::High, 5),
            action("Emergency Request", Priority::Urgent, 12),
            action("User Report", Priority::Low, 25),
            action("Inventory Alert", Priority::Medium, 18),
            action("Donor Verification", Priority::High, 40),
        ];

        sort_actions(&mut actions);

        let order = actions.iter().map(|a| (a.priority, a.minutes_ago)).collect::<Vec<_>>();
        assert_eq!(
            order,
            vec![(Priority::Urgent, 12), (Priority::High, 40), (Priority::High, 5), (Priority::Medium, 18), (Priority::Low, 25)]
        );
        assert!(actions[0].to_string().starts_with("[URGENT] Emergency Request"));
        assert!(actions[0].to_string().ends_with("12 mins ago"));
    }

    #[test]
    fn test_recent_user_line() {
        let user = RecentUser {
            name: "Mike Johnson".into(),
            kind: UserKind::Donor,
            blood_type: BloodType::APos,
            status: AccountStatus::Active,
            joined_days_ago: 2,
        };

        assert_eq!(user.initials(), "MJ");
        assert!(user.to_string().starts_with("MJ  Mike Johnson"));
        assert!(user.to_string().ends_with("2 days ago"));
    }
}
