//! Patient views: health summary, upcoming appointments, and blood requests.

use serde::{Deserialize, Serialize};

use crate::base::schema::{Appointment, BloodRequest};

/// A patient's health summary as last recorded by their provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthMetrics {
    pub user_id: String,
    pub last_donation: String,
    pub eligible: bool,
    /// Out of 100.
    pub health_score: u8,
    pub next_checkup: String,
}

impl HealthMetrics {
    pub fn lines(&self) -> Vec<String> {
        let eligibility = if self.eligible { "Eligible" } else { "Not eligible" };

        vec![
            format!("Health score   {}/100", self.health_score),
            format!("Eligibility    {eligibility}"),
            format!("Last donation  {}", self.last_donation),
            format!("Next checkup   {}", self.next_checkup),
        ]
    }
}

pub fn appointment_line(appointment: &Appointment) -> String {
    let status = appointment.status.as_deref().unwrap_or("scheduled");
    let mut line = format!("{:<20} {:<22} {status}", appointment.appointment_type, appointment.scheduled_at);

    if let Some(minutes) = appointment.duration_minutes {
        line.push_str(&format!("  {minutes} min"));
    }

    if let Some(provider) = &appointment.provider_id {
        line.push_str(&format!("  with {provider}"));
    }

    if let Some(notes) = &appointment.notes {
        line.push_str(&format!("  ({notes})"));
    }

    line
}

pub fn request_line(request: &BloodRequest) -> String {
    let status = request.status.as_deref().unwrap_or("pending");
    let urgency = request.urgency_level.as_deref().unwrap_or("normal");

    let mut line = format!(
        "{:<4} x{:<2} {:<10} {:<8} {}  by {}",
        request.blood_type, request.units_needed, status, urgency, request.hospital_name, request.needed_by
    );

    if let Some(donor) = &request.matched_donor {
        line.push_str(&format!("  donor: {donor}"));
    }

    line
}

/// Upcoming appointments first.
pub fn sort_appointments(appointments: &mut [Appointment]) {
    appointments.sort_by(|a, b| a.scheduled_at.cmp(&b.scheduled_at));
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::types::BloodType;

    fn appointment(kind: &str, at: &str) -> Appointment {
        Appointment {
            id: None,
            patient_id: "u1".into(),
            provider_id: None,
            appointment_type: kind.into(),
            scheduled_at: at.into(),
            duration_minutes: Some(30),
            meeting_link: None,
            notes: None,
            status: Some("confirmed".into()),
        }
    }

    #[test]
    fn test_health_lines() {
        let mut metrics = HealthMetrics {
            user_id: "u1".into(),
            last_donation: "2 months ago".into(),
            eligible: true,
            health_score: 92,
            next_checkup: "In 3 weeks".into(),
        };

        let lines = metrics.lines();
        assert_eq!(lines[0], "Health score   92/100");
        assert_eq!(lines[1], "Eligibility    Eligible");
        assert_eq!(lines[3], "Next checkup   In 3 weeks");

        metrics.eligible = false;
        assert_eq!(metrics.lines()[1], "Eligibility    Not eligible");
    }

    #[test]
    fn test_appointment_line() {
        let line = appointment_line(&appointment("Video Consultation", "2025-06-01T14:30:00Z"));

        assert!(line.starts_with("Video Consultation"));
        assert!(line.contains("confirmed"));
        assert!(line.contains("30 min"));
    }

    #[test]
    fn test_sort_appointments() {
        let mut appointments = vec![appointment("Blood Donation", "2025-06-02T10:00:00Z"), appointment("Video Consultation", "2025-06-01T14:30:00Z")];

        sort_appointments(&mut appointments);

        assert_eq!(appointments[0].appointment_type, "Video Consultation");
    }

    #[test]
    fn test_request_line_shows_match() {
        let request = BloodRequest {
            id: None,
            requester_id: "u1".into(),
            blood_type: BloodType::APos,
            units_needed: 2,
            hospital_name: "City Hospital".into(),
            hospital_address: "1 Main St".into(),
            contact_person: "Dr. Smith".into(),
            contact_phone: "555-0100".into(),
            needed_by: "2025-06-03".into(),
            urgency_level: Some("high".into()),
            status: Some("matched".into()),
            matched_donor: Some("John Smith".into()),
            description: None,
            created_at: None,
        };

        let line = request_line(&request);

        assert!(line.starts_with("A+"));
        assert!(line.contains("donor: John Smith"));
    }
}
