//! Donor search list.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::base::types::BloodType;

/// Whether a donor can be contacted right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Busy,
    Unavailable,
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Availability::Available => "available",
            Availability::Busy => "busy",
            Availability::Unavailable => "unavailable",
        })
    }
}

/// Presentation bucket for a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Excellent,
    Good,
    Fair,
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            MatchTier::Excellent => "excellent",
            MatchTier::Good => "good",
            MatchTier::Fair => "fair",
        })
    }
}

impl MatchTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            95.. => MatchTier::Excellent,
            90..=94 => MatchTier::Good,
            _ => MatchTier::Fair,
        }
    }
}

/// A donor row in the search list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donor {
    pub name: String,
    pub blood_type: BloodType,
    pub distance_km: f64,
    pub last_donation: String,
    pub availability: Availability,
    pub rating: f64,
    pub donation_count: u32,
    pub location: String,
    pub match_score: u8,
}

impl Donor {
    pub fn tier(&self) -> MatchTier {
        MatchTier::from_score(self.match_score)
    }
}

impl fmt::Display for Donor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<16} {:<4} {:>3}% ({})  {:>4.1} km  {:<12} ★{:.1}  {:>2} donations  {}  (last: {})",
            self.name,
            self.blood_type,
            self.match_score,
            self.tier(),
            self.distance_km,
            self.availability,
            self.rating,
            self.donation_count,
            self.location,
            self.last_donation,
        )
    }
}

/// Filter donors for a request and order them best match first.
///
/// Ties on match score go to the closer donor.
pub fn rank_donors(donors: Vec<Donor>, blood_type: BloodType, available_only: bool) -> Vec<Donor> {
    let mut donors = donors
        .into_iter()
        .filter(|d| d.blood_type == blood_type)
        .filter(|d| !available_only || d.availability == Availability::Available)
        .collect::<Vec<_>>();

    donors.sort_by(|a, b| b.match_score.cmp(&a.match_score).then(a.distance_km.total_cmp(&b.distance_km)));

    donors
}

// Tests.
