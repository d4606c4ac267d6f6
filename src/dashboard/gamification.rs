//! Points, levels, badges, and the leaderboard.
//!
//! Levels, experience, and ranks are kept on the user's record; the view only
//! falls back to a flat points-per-level ladder for users who have none recorded.

use std::fmt;

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use crate::base::schema::{Achievement, UserAchievement, UserPoints};

/// Points per level when a user has no recorded level.
pub const POINTS_PER_LEVEL: u32 = 500;

// Levels.

/// Where a user sits on the level ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgress {
    pub level: u32,
    /// Experience earned inside the current level.
    pub current: u32,
    /// Experience the current level spans.
    pub span: u32,
}

impl LevelProgress {
    pub fn from_points(points: u32) -> Self {
        Self {
            level: points / POINTS_PER_LEVEL + 1,
            current: points % POINTS_PER_LEVEL,
            span: POINTS_PER_LEVEL,
        }
    }

    /// Recorded values win; anything missing comes from the flat ladder.
    pub fn from_record(points: &UserPoints) -> Self {
        let ladder = Self::from_points(points.points);

        match (points.current_xp, points.next_level_xp) {
            (Some(current), Some(span)) if span > 0 => Self {
                level: points.level.unwrap_or(ladder.level),
                current: current.min(span),
                span,
            },
            _ => Self {
                level: points.level.unwrap_or(ladder.level),
                ..ladder
            },
        }
    }

    pub fn percent(&self) -> u32 {
        self.current * 100 / self.span
    }

    pub fn remaining(&self) -> u32 {
        self.span - self.current
    }
}

/// Headline numbers for a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub points: u32,
    pub progress: LevelProgress,
    pub total_donations: u32,
    pub streak_days: u32,
    pub rank: Option<u32>,
}

impl From<&UserPoints> for UserStats {
    fn from(points: &UserPoints) -> Self {
        Self {
            points: points.points,
            progress: LevelProgress::from_record(points),
            total_donations: points.total_donations,
            streak_days: points.streak_days,
            rank: points.rank,
        }
    }
}

impl fmt::Display for UserStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Level {} ({}/{} XP, {}%, {} to next)  {} points  {} donations  {}-day streak",
            self.progress.level,
            self.progress.current,
            self.progress.span,
            self.progress.percent(),
            self.progress.remaining(),
            self.points,
            self.total_donations,
            self.streak_days,
        )?;

        if let Some(rank) = self.rank {
            write!(f, "  rank #{rank}")?;
        }

        Ok(())
    }
}

// Leaderboard.

/// A leaderboard row as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub points: u32,
    pub donations: u32,
    pub level: u32,
}

/// A leaderboard row with its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub rank: usize,
    pub entry: LeaderboardEntry,
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let medal = match self.rank {
            1 => "👑",
            2 => "🥈",
            3 => "🥉",
            _ => "  ",
        };

        write!(
            f,
            "{medal} #{:<2} {:<16} {:>6} pts  {:>3} donations  level {}",
            self.rank, self.entry.name, self.entry.points, self.entry.donations, self.entry.level
        )
    }
}

/// Rank entries by points (most first), keeping at most `limit`.
///
/// Ties keep their stored order.
pub fn rank_leaderboard(mut entries: Vec<LeaderboardEntry>, limit: usize) -> Vec<RankedEntry> {
    entries.sort_by(|a, b| b.points.cmp(&a.points));

    entries
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, entry)| RankedEntry { rank: i + 1, entry })
        .collect()
}

// Achievements.

/// How rare a badge is, by the points it grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn from_reward(points: u32) -> Self {
        match points {
            0..500 => Rarity::Common,
            500..1500 => Rarity::Rare,
            1500..5000 => Rarity::Epic,
            _ => Rarity::Legendary,
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        })
    }
}

/// What a badge counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    Donations(u32),
    Lives(u32),
}

impl Goal {
    /// Lives take precedence when a badge names both.
    pub fn of(achievement: &Achievement) -> Self {
        match achievement.lives_required {
            Some(lives) => Goal::Lives(lives),
            None => Goal::Donations(achievement.donation_required.unwrap_or(0)),
        }
    }

    pub fn required(&self) -> u32 {
        match self {
            Goal::Donations(n) | Goal::Lives(n) => *n,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Goal::Donations(_) => "donations",
            Goal::Lives(_) => "lives",
        }
    }

    fn achieved(&self, points: &UserPoints) -> u32 {
        match self {
            Goal::Donations(_) => points.total_donations,
            Goal::Lives(_) => points.lives_saved.unwrap_or(0),
        }
    }
}

/// A badge with the user's progress towards it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementProgress {
    pub name: String,
    pub description: String,
    pub rarity: Rarity,
    pub reward: u32,
    pub goal: Goal,
    pub progress: u32,
    pub unlocked: bool,
}

impl fmt::Display for AchievementProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.unlocked { "✔" } else { " " };
        let count = format!("{}/{} {}", self.progress, self.goal.required(), self.goal.unit());

        write!(
            f,
            "[{mark}] {:<16} {:<9} {:>5} pts  {:<16} {}",
            self.name, self.rarity, self.reward, count, self.description
        )
    }
}

/// Compute progress for each badge.
///
/// Progress is the counted total clamped to the requirement. A badge is unlocked
/// when the requirement is met or the user already holds it.
pub fn achievement_progress(achievements: &[Achievement], earned: &[UserAchievement], points: &UserPoints) -> Vec<AchievementProgress> {
    achievements
        .iter()
        .map(|achievement| {
            let goal = Goal::of(achievement);
            let achieved = goal.achieved(points);
            let reward = achievement.points_reward.unwrap_or(0);
            let held = achievement
                .id
                .as_ref()
                .is_some_and(|id| earned.iter().any(|e| *id == RecordId::from_table_key("achievement", e.achievement_id.as_str())));

            AchievementProgress {
                name: achievement.name.clone(),
                description: achievement.description.clone(),
                rarity: Rarity::from_reward(reward),
                reward,
                goal,
                progress: achieved.min(goal.required()),
                unlocked: held || achieved >= goal.required(),
            }
        })
        .collect()
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    fn achievement(key: &str, name: &str, donations: Option<u32>, lives: Option<u32>, reward: u32) -> Achievement {
        Achievement {
            id: Some(RecordId::from_table_key("achievement", key)),
            name: name.to_string(),
            description: String::new(),
            icon: None,
            badge_color: None,
            donation_required: donations,
            points_required: None,
            lives_required: lives,
            points_reward: Some(reward),
        }
    }

    fn user(points: u32) -> UserPoints {
        UserPoints {
            id: None,
            user_id: "u1".into(),
            points,
            level: None,
            streak_days: 5,
            total_donations: 12,
            last_donation_points: None,
            current_xp: None,
            next_level_xp: None,
            rank: None,
            lives_saved: Some(36),
        }
    }

    #[test]
    fn test_recorded_level_and_xp_win() {
        let points = UserPoints {
            level: Some(7),
            current_xp: Some(1250),
            next_level_xp: Some(1500),
            rank: Some(23),
            ..user(3420)
        };

        let stats = UserStats::from(&points);

        assert_eq!(stats.progress.level, 7);
        assert_eq!(stats.progress.current, 1250);
        assert_eq!(stats.progress.span, 1500);
        assert_eq!(stats.progress.percent(), 83);
        assert_eq!(stats.progress.remaining(), 250);
        assert!(stats.to_string().starts_with("Level 7 (1250/1500 XP, 83%, 250 to next)"));
        assert!(stats.to_string().ends_with("rank #23"));
    }

    #[test]
    fn test_ladder_fallback_without_record() {
        let progress = LevelProgress::from_record(&user(3420));

        assert_eq!(progress.level, 7);
        assert_eq!(progress.current, 420);
        assert_eq!(progress.span, POINTS_PER_LEVEL);

        assert_eq!(LevelProgress::from_points(0).level, 1);
        assert_eq!(LevelProgress::from_points(500).level, 2);
        assert_eq!(LevelProgress::from_points(500).current, 0);
    }

    #[test]
    fn test_rank_leaderboard_keeps_stored_levels() {
        let entries = vec![
            LeaderboardEntry { name: "b".into(), points: 7320, donations: 28, level: 13 },
            LeaderboardEntry { name: "c".into(), points: 4220, donations: 18, level: 9 },
            LeaderboardEntry { name: "a".into(), points: 8750, donations: 35, level: 15 },
        ];

        let ranked = rank_leaderboard(entries, 2);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[0].entry.name, "a");
        assert!(ranked[0].to_string().ends_with("level 15"));
        assert_eq!(ranked[1].rank, 2);
        assert_eq!(ranked[1].entry.level, 13);
    }

    #[test]
    fn test_achievement_progress_clamps_and_unlocks() {
        let achievements = vec![
            achievement("first_drop", "First Drop", Some(1), None, 100),
            achievement("life_saver", "Life Saver", Some(5), None, 500),
            achievement("hero", "Hero Status", Some(25), None, 1500),
            achievement("guardian", "Guardian Angel", None, Some(100), 5000),
        ];

        let progress = achievement_progress(&achievements, &[], &user(3420));

        assert_eq!(progress[0].progress, 1);
        assert!(progress[0].unlocked);
        assert_eq!(progress[1].progress, 5);
        assert!(progress[1].unlocked);
        assert_eq!(progress[2].progress, 12);
        assert_eq!(progress[2].goal, Goal::Donations(25));
        assert!(!progress[2].unlocked);
        assert_eq!(progress[3].progress, 36);
        assert_eq!(progress[3].goal, Goal::Lives(100));
        assert!(progress[3].to_string().contains("36/100 lives"));
        assert!(!progress[3].unlocked);
    }

    #[test]
    fn test_rarity_follows_reward() {
        let achievements = vec![
            achievement("first_drop", "First Drop", Some(1), None, 100),
            achievement("life_saver", "Life Saver", Some(5), None, 500),
            achievement("hero", "Hero Status", Some(25), None, 1500),
            achievement("guardian", "Guardian Angel", None, Some(100), 5000),
        ];

        let rarities = achievement_progress(&achievements, &[], &user(0)).iter().map(|p| p.rarity).collect::<Vec<_>>();

        assert_eq!(rarities, vec![Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary]);
        assert_eq!(Rarity::from_reward(0), Rarity::Common);
        assert_eq!(Rarity::from_reward(499), Rarity::Common);
        assert_eq!(Rarity::from_reward(4999), Rarity::Epic);
    }

    #[test]
    fn test_held_badge_counts_as_unlocked() {
        let achievements = vec![achievement("hero", "Hero Status", Some(25), None, 1500)];
        let earned = vec![UserAchievement {
            id: None,
            user_id: "u1".into(),
            achievement_id: "hero".into(),
            earned_at: None,
        }];

        let progress = achievement_progress(&achievements, &earned, &UserPoints { total_donations: 3, ..user(0) });

        assert!(progress[0].unlocked);
        assert_eq!(progress[0].progress, 3);
    }
}
