//! Mock datasets loaded into a fresh store.
//!
//! Each function returns `(record key, record)` pairs.

use crate::{
    base::{
        schema::{Achievement, Appointment, BloodRequest, Profile, UserAchievement, UserPoints},
        types::BloodType,
    },
    dashboard::{
        admin::{AccountStatus, PendingAction, Priority, RecentUser, SystemMetrics, UserKind},
        donors::{Availability, Donor},
        gamification::LeaderboardEntry,
        inventory::{Demand, InventoryLevel, StockStatus},
        metrics::{Activity, ActivityStatus, PlatformMetrics},
        patient::HealthMetrics,
    },
};

/// Key of the single platform-wide metrics record.
pub const CURRENT: &str = "current";

/// The demo patient every view is rendered for by default.
pub const DEMO_USER_ID: &str = "emily_chen";

fn donor(name: &str, blood_type: BloodType, distance_km: f64, last_donation: &str, availability: Availability, rating: f64, donation_count: u32, location: &str, match_score: u8) -> Donor {
    Donor {
        name: name.to_string(),
        blood_type,
        distance_km,
        last_donation: last_donation.to_string(),
        availability,
        rating,
        donation_count,
        location: location.to_string(),
        match_score,
    }
}

pub fn donors() -> Vec<(&'static str, Donor)> {
    vec![
        ("john_smith", donor("John Smith", BloodType::APos, 2.3, "2 months ago", Availability::Available, 4.8, 12, "Downtown Medical Center", 98)),
        ("sarah_johnson", donor("Sarah Johnson", BloodType::APos, 4.1, "3 months ago", Availability::Available, 4.9, 8, "City Hospital", 95)),
        ("mike_davis", donor("Mike Davis", BloodType::APos, 1.8, "1 month ago", Availability::Busy, 4.7, 15, "Community Health Center", 92)),
        ("mike_johnson", donor("Mike Johnson", BloodType::APos, 6.5, "5 months ago", Availability::Unavailable, 4.2, 2, "Red Cross Center", 81)),
        ("alex_wilson", donor("Alex Wilson", BloodType::OPos, 3.0, "4 months ago", Availability::Available, 4.6, 6, "General Hospital", 94)),
        ("maria_garcia", donor("Maria Garcia", BloodType::ONeg, 5.2, "3 months ago", Availability::Available, 5.0, 28, "City Blood Bank", 97)),
        ("david_kim", donor("David Kim", BloodType::BNeg, 7.9, "6 months ago", Availability::Available, 4.4, 24, "Central Bank", 88)),
        ("emma_brown", donor("Emma Brown", BloodType::AbPos, 2.7, "2 months ago", Availability::Busy, 4.8, 4, "Community Center", 90)),
    ]
}

pub fn inventory() -> Vec<(&'static str, InventoryLevel)> {
    let level = |blood_type, units, demand, status| InventoryLevel { blood_type, units, demand, status };

    vec![
        ("o_pos", level(BloodType::OPos, 145, Demand::High, StockStatus::Good)),
        ("o_neg", level(BloodType::ONeg, 23, Demand::Critical, StockStatus::Low)),
        ("a_pos", level(BloodType::APos, 89, Demand::Medium, StockStatus::Good)),
        ("a_neg", level(BloodType::ANeg, 34, Demand::Medium, StockStatus::Medium)),
        ("b_pos", level(BloodType::BPos, 67, Demand::Low, StockStatus::Good)),
        ("b_neg", level(BloodType::BNeg, 12, Demand::High, StockStatus::Critical)),
        ("ab_pos", level(BloodType::AbPos, 28, Demand::Low, StockStatus::Good)),
        ("ab_neg", level(BloodType::AbNeg, 8, Demand::Medium, StockStatus::Critical)),
    ]
}

pub fn leaderboard() -> Vec<(&'static str, LeaderboardEntry)> {
    let entry = |name: &str, points, donations, level| LeaderboardEntry {
        name: name.to_string(),
        points,
        donations,
        level,
    };

    vec![
        ("alex_thompson", entry("Alex Thompson", 8750, 35, 15)),
        ("maria_garcia", entry("Maria Garcia", 7320, 28, 13)),
        ("david_kim", entry("David Kim", 6890, 24, 12)),
        ("sarah_wilson", entry("Sarah Wilson", 5440, 22, 11)),
        ("james_brown", entry("James Brown", 4220, 18, 9)),
    ]
}

pub fn achievements() -> Vec<(&'static str, Achievement)> {
    let achievement = |name: &str, description: &str, icon: &str, donation_required: Option<u32>, lives_required: Option<u32>, points_reward| Achievement {
        id: None,
        name: name.to_string(),
        description: description.to_string(),
        icon: Some(icon.to_string()),
        badge_color: None,
        donation_required,
        points_required: None,
        lives_required,
        points_reward: Some(points_reward),
    };

    vec![
        ("first_drop", achievement("First Drop", "Complete your first blood donation", "heart", Some(1), None, 100)),
        ("life_saver", achievement("Life Saver", "Donate blood 5 times", "medal", Some(5), None, 500)),
        ("hero_status", achievement("Hero Status", "Donate blood 25 times", "award", Some(25), None, 1500)),
        ("guardian_angel", achievement("Guardian Angel", "Save 100 lives through donations", "crown", None, Some(100), 5000)),
    ]
}

pub fn user_achievements() -> Vec<(&'static str, UserAchievement)> {
    let earned = |achievement_id: &str, earned_at: &str| UserAchievement {
        id: None,
        user_id: DEMO_USER_ID.to_string(),
        achievement_id: achievement_id.to_string(),
        earned_at: Some(earned_at.to_string()),
    };

    vec![
        ("emily_first_drop", earned("first_drop", "2023-02-11T09:30:00Z")),
        ("emily_life_saver", earned("life_saver", "2023-11-04T10:15:00Z")),
    ]
}

pub fn user_points() -> Vec<(&'static str, UserPoints)> {
    vec![(
        DEMO_USER_ID,
        UserPoints {
            id: None,
            user_id: DEMO_USER_ID.to_string(),
            points: 3420,
            level: Some(7),
            streak_days: 5,
            total_donations: 12,
            last_donation_points: Some(250),
            current_xp: Some(1250),
            next_level_xp: Some(1500),
            rank: Some(23),
            lives_saved: Some(36),
        },
    )]
}

pub fn profiles() -> Vec<(&'static str, Profile)> {
    vec![(
        DEMO_USER_ID,
        Profile {
            id: None,
            user_id: DEMO_USER_ID.to_string(),
            full_name: "Dr. Emily Chen".to_string(),
            blood_type: Some(BloodType::APos),
            date_of_birth: Some("1988-04-17".to_string()),
            gender: Some("female".to_string()),
            phone: Some("555-0142".to_string()),
            address: None,
            weight: Some(61.0),
            medical_conditions: Vec::new(),
            emergency_contact_name: Some("Daniel Chen".to_string()),
            emergency_contact_phone: Some("555-0199".to_string()),
            created_at: Some("2023-01-20T08:00:00Z".to_string()),
        },
    )]
}

pub fn appointments() -> Vec<(&'static str, Appointment)> {
    vec![
        (
            "video_consultation",
            Appointment {
                id: None,
                patient_id: DEMO_USER_ID.to_string(),
                provider_id: Some("Dr. Smith".to_string()),
                appointment_type: "Video Consultation".to_string(),
                scheduled_at: "2025-06-01T14:30:00Z".to_string(),
                duration_minutes: Some(30),
                meeting_link: Some("https://meet.example.com/consult".to_string()),
                notes: None,
                status: Some("confirmed".to_string()),
            },
        ),
        (
            "blood_donation",
            Appointment {
                id: None,
                patient_id: DEMO_USER_ID.to_string(),
                provider_id: None,
                appointment_type: "Blood Donation".to_string(),
                scheduled_at: "2025-06-02T10:00:00Z".to_string(),
                duration_minutes: Some(45),
                meeting_link: None,
                notes: Some("City Blood Bank".to_string()),
                status: Some("scheduled".to_string()),
            },
        ),
    ]
}

pub fn blood_requests() -> Vec<(&'static str, BloodRequest)> {
    let request = |blood_type, status: &str, donor: Option<&str>, created_at: &str| BloodRequest {
        id: None,
        requester_id: DEMO_USER_ID.to_string(),
        blood_type,
        units_needed: 2,
        hospital_name: "City Hospital".to_string(),
        hospital_address: "200 Health Ave".to_string(),
        contact_person: "Dr. Emily Chen".to_string(),
        contact_phone: "555-0142".to_string(),
        needed_by: "2025-06-05".to_string(),
        urgency_level: Some("high".to_string()),
        status: Some(status.to_string()),
        matched_donor: donor.map(str::to_string),
        description: None,
        created_at: Some(created_at.to_string()),
    };

    vec![
        ("request_a_pos", request(BloodType::APos, "matched", Some("John Smith"), "2025-05-30T08:00:00Z")),
        ("request_o_neg", request(BloodType::ONeg, "searching", None, "2025-05-29T10:00:00Z")),
    ]
}

pub fn health_metrics() -> Vec<(&'static str, HealthMetrics)> {
    vec![(
        DEMO_USER_ID,
        HealthMetrics {
            user_id: DEMO_USER_ID.to_string(),
            last_donation: "2 months ago".to_string(),
            eligible: true,
            health_score: 92,
            next_checkup: "In 3 weeks".to_string(),
        },
    )]
}

pub fn system_metrics() -> Vec<(&'static str, SystemMetrics)> {
    vec![(
        CURRENT,
        SystemMetrics {
            total_users: 2847,
            active_donors: 892,
            pending_requests: 23,
            uptime_percent: 99.9,
            avg_response_minutes: 18,
            success_rate_percent: 94.2,
        },
    )]
}

pub fn pending_actions() -> Vec<(&'static str, PendingAction)> {
    let action = |kind: &str, subject: &str, priority, minutes_ago| PendingAction {
        kind: kind.to_string(),
        subject: subject.to_string(),
        priority,
        minutes_ago,
    };

    vec![
        ("donor_verification", action("Donor Verification", "John Smith", Priority::High, 5)),
        ("emergency_request", action("Emergency Request", "City Hospital", Priority::Urgent, 12)),
        ("inventory_alert", action("Inventory Alert", "O- Blood Type", Priority::Medium, 18)),
        ("user_report", action("User Report", "Issue with matching", Priority::Low, 25)),
    ]
}

pub fn recent_users() -> Vec<(&'static str, RecentUser)> {
    let user = |name: &str, kind, blood_type, status, joined_days_ago| RecentUser {
        name: name.to_string(),
        kind,
        blood_type,
        status,
        joined_days_ago,
    };

    vec![
        ("mike_johnson", user("Mike Johnson", UserKind::Donor, BloodType::APos, AccountStatus::Active, 2)),
        ("sarah_davis", user("Sarah Davis", UserKind::Patient, BloodType::BNeg, AccountStatus::Verified, 3)),
        ("alex_wilson", user("Alex Wilson", UserKind::Donor, BloodType::OPos, AccountStatus::Pending, 7)),
        ("emma_brown", user("Emma Brown", UserKind::Patient, BloodType::AbPos, AccountStatus::Active, 7)),
    ]
}

pub fn platform_metrics() -> Vec<(&'static str, PlatformMetrics)> {
    vec![(
        CURRENT,
        PlatformMetrics {
            total_donors: 1247,
            active_donors: 892,
            blood_requests: 156,
            successful_matches: 143,
            emergency_requests: 12,
            avg_response_minutes: 18,
            donation_trend_percent: 12,
            inventory_level_percent: 78,
        },
    )]
}

pub fn activity() -> Vec<(&'static str, Activity)> {
    let event = |action: &str, location: &str, status, minutes_ago| Activity {
        action: action.to_string(),
        location: location.to_string(),
        status,
        minutes_ago,
    };

    vec![
        ("emergency_request", event("Emergency blood request", "City Hospital", ActivityStatus::Urgent, 5)),
        ("donor_registration", event("Donor registration", "Community Center", ActivityStatus::Success, 12)),
        ("donation_completed", event("Blood donation completed", "Red Cross Center", ActivityStatus::Success, 18)),
        ("low_inventory", event("Low inventory alert", "Central Bank", ActivityStatus::Warning, 25)),
        ("successful_match", event("Successful match", "General Hospital", ActivityStatus::Success, 32)),
    ]
}
