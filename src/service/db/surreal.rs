//! SurrealDB implementation of the dashboard store.
//!
//! Uses the embedded in-memory engine; nothing survives the process.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use surrealdb::{
    Surreal,
    engine::local::{Db, Mem},
};
use tracing::{info, instrument};

use crate::{
    base::{
        config::Config,
        schema::{Achievement, Appointment, BloodRequest, Profile, UserAchievement, UserPoints},
        types::{BloodType, Res, Void},
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

use super::{DbClient, GenericDbClient, seed};

// Extra methods on `DbClient` applied by the surreal implementation.

impl DbClient {
    /// Create an in-memory store seeded with the mock datasets.
    pub async fn surreal_memory(config: &Config) -> Res<Self> {
        let client = SurrealDbClient::new(config).await?;
        Ok(Self { inner: Arc::new(client) })
    }
}

// Specific implementations.

/// SurrealDB client implementation.
#[derive(Clone)]
pub struct SurrealDbClient {
    db: Surreal<Db>,
}

impl SurrealDbClient {
    /// Create a new in-memory database and seed it.
    #[instrument(name = "SurrealDbClient::new", skip_all)]
    pub async fn new(config: &Config) -> Res<Self> {
        let db = Surreal::new::<Mem>(()).await?;

        db.use_ns(config.db_namespace.as_str()).use_db(config.db_database.as_str()).await?;

        let client = Self { db };
        client.seed().await?;

        info!("Database initialized successfully.");

        Ok(client)
    }

    /// Load every mock dataset.
    #[instrument(name = "SurrealDbClient::seed", skip_all)]
    async fn seed(&self) -> Void {
        self.insert_all("donor", seed::donors()).await?;
        self.insert_all("inventory", seed::inventory()).await?;
        self.insert_all("leaderboard", seed::leaderboard()).await?;
        self.insert_all("achievement", seed::achievements()).await?;
        self.insert_all("user_achievement", seed::user_achievements()).await?;
        self.insert_all("user_points", seed::user_points()).await?;
        self.insert_all("profile", seed::profiles()).await?;
        self.insert_all("appointment", seed::appointments()).await?;
        self.insert_all("blood_request", seed::blood_requests()).await?;
        self.insert_all("health_metrics", seed::health_metrics()).await?;
        self.insert_all("system_metrics", seed::system_metrics()).await?;
        self.insert_all("pending_action", seed::pending_actions()).await?;
        self.insert_all("recent_user", seed::recent_users()).await?;
        self.insert_all("platform_metrics", seed::platform_metrics()).await?;
        self.insert_all("activity", seed::activity()).await?;

        Ok(())
    }

    /// Insert keyed records into a table concurrently.
    async fn insert_all<T>(&self, table: &'static str, records: Vec<(&'static str, T)>) -> Void
    where
        T: Serialize + DeserializeOwned + Send + Sync + 'static,
    {
        let count = records.len();

        let inserts = records.into_iter().map(|(key, record)| async move {
            let _: Option<T> = self.db.create((table, key)).content(record).await?;
            Res::Ok(())
        });

        futures::future::join_all(inserts).await.into_iter().collect::<Res<Vec<_>>>()?;

        info!("Seeded {} `{}` records.", count, table);

        Ok(())
    }
}

#[async_trait]
impl GenericDbClient for SurrealDbClient {
    #[instrument(skip(self))]
    async fn get_donors(&self, blood_type: BloodType) -> Res<Vec<Donor>> {
        let donors: Vec<Donor> = self
            .db
            .query("SELECT * FROM donor WHERE blood_type = $blood_type")
            .bind(("blood_type", blood_type.as_str()))
            .await?
            .take(0)?;

        Ok(donors)
    }

    #[instrument(skip(self))]
    async fn get_inventory(&self) -> Res<Vec<InventoryLevel>> {
        let levels: Vec<InventoryLevel> = self.db.select("inventory").await?;

        Ok(levels)
    }

    #[instrument(skip(self))]
    async fn get_leaderboard(&self) -> Res<Vec<LeaderboardEntry>> {
        let entries: Vec<LeaderboardEntry> = self.db.select("leaderboard").await?;

        Ok(entries)
    }

    #[instrument(skip(self))]
    async fn get_profile(&self, user_id: &str) -> Res<Option<Profile>> {
        let profile: Option<Profile> = self.db.select(("profile", user_id)).await?;

        Ok(profile)
    }

    #[instrument(skip(self))]
    async fn get_user_points(&self, user_id: &str) -> Res<Option<UserPoints>> {
        let points: Option<UserPoints> = self.db.select(("user_points", user_id)).await?;

        Ok(points)
    }

    #[instrument(skip(self))]
    async fn get_achievements(&self) -> Res<Vec<Achievement>> {
        let achievements: Vec<Achievement> = self.db.query("SELECT * FROM achievement ORDER BY points_reward ASC").await?.take(0)?;

        Ok(achievements)
    }

    #[instrument(skip(self))]
    async fn get_user_achievements(&self, user_id: &str) -> Res<Vec<UserAchievement>> {
        let earned: Vec<UserAchievement> = self
            .db
            .query("SELECT * FROM user_achievement WHERE user_id = $user_id")
            .bind(("user_id", user_id.to_string()))
            .await?
            .take(0)?;

        Ok(earned)
    }

    #[instrument(skip(self))]
    async fn get_appointments(&self, patient_id: &str) -> Res<Vec<Appointment>> {
        let appointments: Vec<Appointment> = self
            .db
            .query("SELECT * FROM appointment WHERE patient_id = $patient_id ORDER BY scheduled_at ASC")
            .bind(("patient_id", patient_id.to_string()))
            .await?
            .take(0)?;

        Ok(appointments)
    }

    #[instrument(skip(self))]
    async fn get_blood_requests(&self, requester_id: &str) -> Res<Vec<BloodRequest>> {
        let requests: Vec<BloodRequest> = self
            .db
            .query("SELECT * FROM blood_request WHERE requester_id = $requester_id ORDER BY created_at DESC")
            .bind(("requester_id", requester_id.to_string()))
            .await?
            .take(0)?;

        Ok(requests)
    }

    #[instrument(skip(self))]
    async fn get_health_metrics(&self, user_id: &str) -> Res<Option<HealthMetrics>> {
        let metrics: Option<HealthMetrics> = self.db.select(("health_metrics", user_id)).await?;

        Ok(metrics)
    }

    #[instrument(skip(self))]
    async fn get_system_metrics(&self) -> Res<Option<SystemMetrics>> {
        let metrics: Option<SystemMetrics> = self.db.select(("system_metrics", seed::CURRENT)).await?;

        Ok(metrics)
    }

    #[instrument(skip(self))]
    async fn get_pending_actions(&self) -> Res<Vec<PendingAction>> {
        let actions: Vec<PendingAction> = self.db.select("pending_action").await?;

        Ok(actions)
    }

    #[instrument(skip(self))]
    async fn get_recent_users(&self) -> Res<Vec<RecentUser>> {
        let users: Vec<RecentUser> = self.db.query("SELECT * FROM recent_user ORDER BY joined_days_ago ASC").await?.take(0)?;

        Ok(users)
    }

    #[instrument(skip(self))]
    async fn get_platform_metrics(&self) -> Res<Option<PlatformMetrics>> {
        let metrics: Option<PlatformMetrics> = self.db.select(("platform_metrics", seed::CURRENT)).await?;

        Ok(metrics)
    }

    #[instrument(skip(self))]
    async fn get_recent_activity(&self) -> Res<Vec<Activity>> {
        let feed: Vec<Activity> = self.db.select("activity").await?;

        Ok(feed)
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::inventory::StockStatus;

    async fn client() -> DbClient {
        DbClient::surreal_memory(&Config::default()).await.unwrap()
    }

    #[tokio::test]
    async fn test_get_donors_by_blood_type() {
        let db = client().await;

        let donors = db.get_donors(BloodType::APos).await.unwrap();

        assert_eq!(donors.len(), 4);
        assert!(donors.iter().all(|d| d.blood_type == BloodType::APos));
        assert!(donors.iter().any(|d| d.name == "John Smith"));

        assert!(db.get_donors(BloodType::ANeg).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_inventory() {
        let db = client().await;

        let levels = db.get_inventory().await.unwrap();

        assert_eq!(levels.len(), 8);
        let o_neg = levels.iter().find(|l| l.blood_type == BloodType::ONeg).unwrap();
        assert_eq!(o_neg.units, 23);

        let ab_pos = levels.iter().find(|l| l.blood_type == BloodType::AbPos).unwrap();
        assert_eq!(ab_pos.status, StockStatus::Good);
    }

    #[tokio::test]
    async fn test_get_demo_user_records() {
        let db = client().await;

        let profile = db.get_profile(seed::DEMO_USER_ID).await.unwrap().unwrap();
        assert_eq!(profile.full_name, "Dr. Emily Chen");
        assert!(profile.id.is_some());

        let points = db.get_user_points(seed::DEMO_USER_ID).await.unwrap().unwrap();
        assert_eq!(points.points, 3420);

        assert!(db.get_profile("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_achievements_sorted() {
        let db = client().await;

        let achievements = db.get_achievements().await.unwrap();
        let rewards = achievements.iter().map(|a| a.points_reward.unwrap()).collect::<Vec<_>>();

        assert_eq!(rewards, vec![100, 500, 1500, 5000]);
        assert_eq!(achievements[3].lives_required, Some(100));

        let earned = db.get_user_achievements(seed::DEMO_USER_ID).await.unwrap();
        assert_eq!(earned.len(), 2);
    }

    #[tokio::test]
    async fn test_get_patient_lists() {
        let db = client().await;

        let appointments = db.get_appointments(seed::DEMO_USER_ID).await.unwrap();
        assert_eq!(appointments.len(), 2);
        assert_eq!(appointments[0].appointment_type, "Video Consultation");

        let requests = db.get_blood_requests(seed::DEMO_USER_ID).await.unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].blood_type, BloodType::APos);

        assert!(db.get_appointments("nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_admin_and_metrics_records() {
        let db = client().await;

        let system = db.get_system_metrics().await.unwrap().unwrap();
        assert_eq!(system.total_users, 2847);

        assert_eq!(db.get_pending_actions().await.unwrap().len(), 4);

        let users = db.get_recent_users().await.unwrap();
        assert_eq!(users.len(), 4);
        assert_eq!(users[0].name, "Mike Johnson");

        let platform = db.get_platform_metrics().await.unwrap().unwrap();
        assert_eq!(platform.successful_matches, 143);

        assert_eq!(db.get_recent_activity().await.unwrap().len(), 5);

        let health = db.get_health_metrics(seed::DEMO_USER_ID).await.unwrap().unwrap();
        assert_eq!(health.health_score, 92);
        assert!(db.get_health_metrics("nobody").await.unwrap().is_none());
    }
}
