//! Platform analytics: key counters and the activity feed.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::minutes_ago;

/// Headline counters for the analytics view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformMetrics {
    pub total_donors: u32,
    pub active_donors: u32,
    pub blood_requests: u32,
    pub successful_matches: u32,
    pub emergency_requests: u32,
    pub avg_response_minutes: u32,
    /// Month-over-month change in donations.
    pub donation_trend_percent: i32,
    /// Overall stock as a share of target.
    pub inventory_level_percent: u32,
}

impl PlatformMetrics {
    /// Share of requests that found a donor, if there were any requests.
    pub fn match_rate(&self) -> Option<f64> {
        (self.blood_requests > 0).then(|| f64::from(self.successful_matches) * 100.0 / f64::from(self.blood_requests))
    }

    pub fn lines(&self) -> Vec<String> {
        let matched = match self.match_rate() {
            Some(rate) => format!("{} matched, {rate:.1}%", self.successful_matches),
            None => format!("{} matched", self.successful_matches),
        };

        vec![
            format!("Total donors        {} ({:+}%)", self.total_donors, self.donation_trend_percent),
            format!("Active donors       {} available now", self.active_donors),
            format!("Blood requests      {} ({matched})", self.blood_requests),
            format!("Emergency requests  {}", self.emergency_requests),
            format!("Avg response        {} mins", self.avg_response_minutes),
            format!("Inventory level     {}%", self.inventory_level_percent),
        ]
    }
}

// Activity feed.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Urgent,
    Warning,
    Success,
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            ActivityStatus::Urgent => "URGENT",
            ActivityStatus::Warning => "WARNING",
            ActivityStatus::Success => "SUCCESS",
        })
    }
}

/// One event on the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub action: String,
    pub location: String,
    pub status: ActivityStatus,
    pub minutes_ago: u32,
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:<7}] {:<26} {:<18} {}", self.status, self.action, self.location, minutes_ago(self.minutes_ago))
    }
}

/// Newest first.
pub fn sort_activity(feed: &mut [Activity]) {
    feed.sort_by_key(|a| a.minutes_ago);
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(requests: u32, matches: u32) -> PlatformMetrics {
        PlatformMetrics {
            total_donors: 1247,
            active_donors: 892,
            blood_requests: requests,
            successful_matches: matches,
            emergency_requests: 12,
            avg_response_minutes: 18,
            donation_trend_percent: 12,
            inventory_level_percent: 78,
        }
    }

    #[test]
    fn test_metrics_lines() {
        let lines = metrics(156, 143).lines();

        assert_eq!(lines[0], "Total donors        1247 (+12%)");
        assert_eq!(lines[2], "Blood requests      156 (143 matched, 91.7%)");
        assert!(lines[5].ends_with("78%"));
    }

    #[test]
    fn test_match_rate_without_requests() {
        let quiet = metrics(0, 0);

        assert_eq!(quiet.match_rate(), None);
        assert_eq!(quiet.lines()[2], "Blood requests      0 (0 matched)");
    }

    #[test]
    fn test_activity_newest_first() {
        let event = |action: &str, status, minutes_ago| Activity {
            action: action.into(),
            location: "City Hospital".into(),
            status,
            minutes_ago,
        };
        let mut feed = vec![event("Successful match", ActivityStatus::Success, 32), event("Emergency blood request", ActivityStatus::Urgent, 5)];

        sort_activity(&mut feed);

        assert_eq!(feed[0].status, ActivityStatus::Urgent);
        assert!(feed[0].to_string().starts_with("[URGENT ] Emergency blood request"));
        assert!(feed[1].to_string().ends_with("32 mins ago"));
    }
}
