//! Runtime services and shared state for bloodlink-triage.

use clap::Subcommand;
use tracing::{info, instrument, warn};

use crate::{
    base::{
        config::Config,
        types::{BloodType, Res, Void},
    },
    dashboard::{admin, donors, gamification, inventory, metrics, patient},
    interaction::{repl, session::ChatSession},
    service::{db::DbClient, responder::Responder},
};

/// What to show.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Chat with the symptom checker.
    Chat,
    /// Search donors for a blood type.
    Donors {
        /// Blood type needed (e.g. `A+`, `O-`).
        #[arg(short, long)]
        blood_type: BloodType,
        /// Only list donors available right now.
        #[arg(short, long)]
        available: bool,
    },
    /// Blood inventory levels.
    Inventory,
    /// Platform counters and the recent activity feed.
    Metrics,
    /// System health, the admin action queue, and recent sign-ups.
    Admin,
    /// Top donors by points.
    Leaderboard {
        /// Rows to show (defaults to `leaderboard_limit`).
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Level, streak, and badge progress for the configured user.
    Achievements,
    /// Health summary for the configured user.
    Health,
    /// Upcoming appointments for the configured user.
    Appointments,
    /// Blood requests raised by the configured user.
    Requests,
}

/// Runtime service context that can be shared across the application.
///
/// This struct holds the database client, the responder, and configuration.
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The database client instance.
    pub db: DbClient,
    /// The symptom responder instance.
    pub responder: Responder,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub async fn new(config: Config) -> Res<Self> {
        // Initialize the database.
        let db = DbClient::surreal_memory(&config).await?;

        // Initialize the responder.
        let responder = Responder::keyword();

        Ok(Self { config, db, responder })
    }

    /// Open a chat session configured from this runtime.
    pub fn chat_session(&self) -> ChatSession {
        ChatSession::with_greeting(self.responder.clone(), self.config.reply_delay(), &self.config.greeting)
    }

    /// Execute one command.
    #[instrument(skip(self))]
    pub async fn run(&self, command: Command) -> Void {
        let lines = match command {
            Command::Chat => return repl::run(self.chat_session()).await,
            Command::Donors { blood_type, available } => self.donor_lines(blood_type, available).await?,
            Command::Inventory => self.inventory_lines().await?,
            Command::Metrics => self.metrics_lines().await?,
            Command::Admin => self.admin_lines().await?,
            Command::Leaderboard { limit } => self.leaderboard_lines(limit.unwrap_or(self.config.leaderboard_limit)).await?,
            Command::Achievements => self.achievement_lines().await?,
            Command::Health => self.health_lines().await?,
            Command::Appointments => self.appointment_lines().await?,
            Command::Requests => self.request_lines().await?,
        };

        for line in lines {
            println!("{line}");
        }

        Ok(())
    }

    /// Donor search results, best match first.
    pub async fn donor_lines(&self, blood_type: BloodType, available_only: bool) -> Res<Vec<String>> {
        let ranked = donors::rank_donors(self.db.get_donors(blood_type).await?, blood_type, available_only);

        info!("Found {} donors for {}.", ranked.len(), blood_type);

        if ranked.is_empty() {
            return Ok(vec![format!("No donors found for {blood_type}.")]);
        }

        Ok(ranked.iter().map(ToString::to_string).collect())
    }

    /// Inventory table plus a summary line.
    pub async fn inventory_lines(&self) -> Res<Vec<String>> {
        let mut levels = self.db.get_inventory().await?;
        inventory::sort_levels(&mut levels);

        let summary = inventory::summarize(&levels);
        let mut lines = levels.iter().map(ToString::to_string).collect::<Vec<_>>();

        lines.push(String::new());
        lines.push(format!("Total: {} units", summary.total_units));

        if !summary.attention.is_empty() {
            let attention = summary.attention.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
            warn!("Low stock: {}.", attention);
            lines.push(format!("Needs attention: {attention}"));
        }

        Ok(lines)
    }

    /// Key counters followed by the activity feed.
    pub async fn metrics_lines(&self) -> Res<Vec<String>> {
        let Some(counters) = self.db.get_platform_metrics().await? else {
            return Err(anyhow::anyhow!("No platform metrics recorded."));
        };

        let mut feed = self.db.get_recent_activity().await?;
        metrics::sort_activity(&mut feed);

        let mut lines = counters.lines();
        lines.push(String::new());
        lines.push("Recent activity".to_string());
        lines.extend(feed.iter().map(ToString::to_string));

        Ok(lines)
    }

    /// System health, then the action queue, then recent sign-ups.
    pub async fn admin_lines(&self) -> Res<Vec<String>> {
        let Some(system) = self.db.get_system_metrics().await? else {
            return Err(anyhow::anyhow!("No system metrics recorded."));
        };

        let mut actions = self.db.get_pending_actions().await?;
        admin::sort_actions(&mut actions);

        let users = self.db.get_recent_users().await?;

        if actions.iter().any(|a| a.priority == admin::Priority::Urgent) {
            warn!("Urgent admin actions pending.");
        }

        let mut lines = system.lines();
        lines.push(String::new());
        lines.push(format!("Pending actions ({})", actions.len()));
        lines.extend(actions.iter().map(ToString::to_string));
        lines.push(String::new());
        lines.push("Recent users".to_string());
        lines.extend(users.iter().map(ToString::to_string));

        Ok(lines)
    }

    pub async fn leaderboard_lines(&self, limit: usize) -> Res<Vec<String>> {
        let ranked = gamification::rank_leaderboard(self.db.get_leaderboard().await?, limit);

        Ok(ranked.iter().map(ToString::to_string).collect())
    }

    /// Stats header followed by badge progress.
    pub async fn achievement_lines(&self) -> Res<Vec<String>> {
        let user_id = self.config.user_id.as_str();

        let Some(points) = self.db.get_user_points(user_id).await? else {
            return Err(anyhow::anyhow!("No points recorded for user `{user_id}`."));
        };

        let name = self.db.get_profile(user_id).await?.map(|p| p.full_name).unwrap_or_else(|| user_id.to_string());
        let stats = gamification::UserStats::from(&points);
        let achievements = self.db.get_achievements().await?;
        let earned = self.db.get_user_achievements(user_id).await?;

        let mut lines = vec![name, stats.to_string(), String::new()];
        lines.extend(gamification::achievement_progress(&achievements, &earned, &points).iter().map(ToString::to_string));

        Ok(lines)
    }

    pub async fn health_lines(&self) -> Res<Vec<String>> {
        let user_id = self.config.user_id.as_str();

        match self.db.get_health_metrics(user_id).await? {
            Some(health) => Ok(health.lines()),
            None => Ok(vec![format!("No health summary for `{user_id}`.")]),
        }
    }

    pub async fn appointment_lines(&self) -> Res<Vec<String>> {
        let mut appointments = self.db.get_appointments(&self.config.user_id).await?;
        patient::sort_appointments(&mut appointments);

        if appointments.is_empty() {
            return Ok(vec!["No upcoming appointments.".to_string()]);
        }

        Ok(appointments.iter().map(patient::appointment_line).collect())
    }

    pub async fn request_lines(&self) -> Res<Vec<String>> {
        let requests = self.db.get_blood_requests(&self.config.user_id).await?;

        if requests.is_empty() {
            return Ok(vec!["No blood requests.".to_string()]);
        }

        Ok(requests.iter().map(patient::request_line).collect())
    }
}
