//! Dashboard data store.
//!
//! The store holds the platform's records and the mock datasets that feed the
//! dashboard views. It is read-only from the application's point of view; seeding
//! happens once when a client is created.

pub mod seed;
pub mod surreal;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::{
    base::{
        schema::{Achievement, Appointment, BloodRequest, Profile, UserAchievement, UserPoints},
        types::{BloodType, Res},
    },
    dashboard::{
        admin::{PendingAction, RecentUser, SystemMetrics},
        donors::Donor,
        gamification::LeaderboardEntry,
        inventory::InventoryLevel,
        metrics::{Activity, PlatformMetrics},
        patient::HealthMetrics,
    },
};

// Traits.

/// Generic database client trait that clients must implement.
///
/// Implementing this trait allows different backends (an in-memory store, the
/// hosted service) to feed the same views.
#[async_trait]
pub trait GenericDbClient: Send + Sync + 'static {
    /// Donors with the given blood type, in no particular order.
    async fn get_donors(&self, blood_type: BloodType) -> Res<Vec<Donor>>;

    /// Units on hand for every blood type.
    async fn get_inventory(&self) -> Res<Vec<InventoryLevel>>;

    /// All leaderboard rows.
    async fn get_leaderboard(&self) -> Res<Vec<LeaderboardEntry>>;

    /// A user's profile, if one exists.
    async fn get_profile(&self, user_id: &str) -> Res<Option<Profile>>;

    /// A user's gamification totals, if any.
    async fn get_user_points(&self, user_id: &str) -> Res<Option<UserPoints>>;

    /// Every badge definition, easiest first.
    async fn get_achievements(&self) -> Res<Vec<Achievement>>;

    /// Badges a user already holds.
    async fn get_user_achievements(&self, user_id: &str) -> Res<Vec<UserAchievement>>;

    /// Appointments booked for a patient.
    async fn get_appointments(&self, patient_id: &str) -> Res<Vec<Appointment>>;

    /// Blood requests raised by a user, newest first.
    async fn get_blood_requests(&self, requester_id: &str) -> Res<Vec<BloodRequest>>;

    /// A patient's health summary, if recorded.
    async fn get_health_metrics(&self, user_id: &str) -> Res<Option<HealthMetrics>>;

    /// Current platform health for the admin console.
    async fn get_system_metrics(&self) -> Res<Option<SystemMetrics>>;

    /// Actions waiting on an admin, in no particular order.
    async fn get_pending_actions(&self) -> Res<Vec<PendingAction>>;

    /// Recently registered accounts, newest first.
    async fn get_recent_users(&self) -> Res<Vec<RecentUser>>;

    /// Current analytics counters.
    async fn get_platform_metrics(&self) -> Res<Option<PlatformMetrics>>;

    /// Recent platform events, in no particular order.
    async fn get_recent_activity(&self) -> Res<Vec<Activity>>;
}

// Structs.

/// Database client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct DbClient {
    inner: Arc<dyn GenericDbClient>,
}

impl Deref for DbClient {
    type Target = dyn GenericDbClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl DbClient {
    pub fn new(inner: Arc<dyn GenericDbClient>) -> Self {
        Self { inner }
    }
}
