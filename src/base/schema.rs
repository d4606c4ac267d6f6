//! Persisted record types for the coordination platform.
//!
//! These mirror the hosted relational schema one-to-one. Record identifiers are the
//! database's own (`id`), and every other reference is a plain string foreign key.
//! Timestamps are kept as ISO-8601 strings, exactly as the hosted service returns them.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::types::BloodType;

/// Role a user holds on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppRole {
    Admin,
    Patient,
    Donor,
    HealthcareProvider,
}

/// A user profile (`profiles`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub user_id: String,
    pub full_name: String,
    pub blood_type: Option<BloodType>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub weight: Option<f64>,
    #[serde(default)]
    pub medical_conditions: Vec<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub created_at: Option<String>,
}

/// A patient's request for blood (`blood_requests`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloodRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub requester_id: String,
    pub blood_type: BloodType,
    pub units_needed: u32,
    pub hospital_name: String,
    pub hospital_address: String,
    pub contact_person: String,
    pub contact_phone: String,
    pub needed_by: String,
    pub urgency_level: Option<String>,
    pub status: Option<String>,
    pub matched_donor: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<String>,
}

/// A donor's declared availability (`donor_availability`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorAvailability {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub donor_id: String,
    pub is_available: Option<bool>,
    pub last_donation_date: Option<String>,
    pub next_eligible_date: Option<String>,
    pub location_address: Option<String>,
    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
    pub notes: Option<String>,
}

/// A scheduled consultation or donation (`appointments`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub patient_id: String,
    pub provider_id: Option<String>,
    pub appointment_type: String,
    pub scheduled_at: String,
    pub duration_minutes: Option<u32>,
    pub meeting_link: Option<String>,
    pub notes: Option<String>,
    pub status: Option<String>,
}

/// A badge definition (`achievements`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub description: String,
    pub icon: Option<String>,
    pub badge_color: Option<String>,
    pub donation_required: Option<u32>,
    pub points_required: Option<u32>,
    /// Lives saved needed, for badges measured in lives rather than donations.
    #[serde(default)]
    pub lives_required: Option<u32>,
    /// Points granted when the badge is earned.
    #[serde(default)]
    pub points_reward: Option<u32>,
}

/// A badge earned by a user (`user_achievements`); `achievement_id` references [`Achievement`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAchievement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub user_id: String,
    pub achievement_id: String,
    pub earned_at: Option<String>,
}

/// Running gamification totals for a user (`user_points`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPoints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub user_id: String,
    pub points: u32,
    pub level: Option<u32>,
    pub streak_days: u32,
    pub total_donations: u32,
    pub last_donation_points: Option<u32>,
    /// Experience inside the current level.
    #[serde(default)]
    pub current_xp: Option<u32>,
    /// Experience the current level spans.
    #[serde(default)]
    pub next_level_xp: Option<u32>,
    /// Position on the global leaderboard.
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub lives_saved: Option<u32>,
}

/// Role assignment (`user_roles`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRole {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub user_id: String,
    pub role: AppRole,
}

/// A symptom-checker conversation (`ai_chat_sessions`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiChatSession {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub user_id: String,
    pub session_title: Option<String>,
    pub created_at: Option<String>,
}

/// One line of a stored conversation (`ai_chat_messages`); `session_id` references [`AiChatSession`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiChatMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub session_id: String,
    pub user_id: String,
    pub message: String,
    pub is_ai_response: bool,
    pub created_at: Option<String>,
}

// Tests.

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_app_role_wire_names() {
        assert_eq!(serde_json::to_value(AppRole::HealthcareProvider).unwrap(), json!("healthcare_provider"));
        assert_eq!(serde_json::from_value::<AppRole>(json!("admin")).unwrap(), AppRole::Admin);
    }

    #[test]
    fn test_record_without_id_omits_it() {
        let role = UserRole {
            id: None,
            user_id: "u1".to_string(),
            role: AppRole::Donor,
        };

        let value = serde_json::to_value(&role).unwrap();

        assert_eq!(value, json!({ "user_id": "u1", "role": "donor" }));
    }

    #[test]
    fn test_chat_message_record_parses() {
        let message: AiChatMessage = serde_json::from_value(json!({
            "session_id": "s1",
            "user_id": "u1",
            "message": "I have a fever",
            "is_ai_response": false,
            "created_at": "2025-01-01T00:00:00Z",
        }))
        .unwrap();

        assert_eq!(message.session_id, "s1");
        assert!(!message.is_ai_response);
        assert_eq!(message.id, None);
    }
}
