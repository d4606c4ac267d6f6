//! Library root for `bloodlink-triage`.
//!
//! Bloodlink-triage is the assistant side of a blood-donation coordination platform:
//! - A scripted symptom checker that classifies free text into canned replies with a severity
//! - Chat sessions that keep an append-only conversation log and pace assistant replies
//! - Dashboard views (donor search, inventory, gamification, patient lists) over mock data
//!
//! Storage is an in-memory SurrealDB seeded with the platform's mock datasets. Services sit
//! behind traits so that other responders or backends can be swapped in.

pub mod base;
pub mod dashboard;
pub mod interaction;
pub mod runtime;
pub mod service;

use base::{config::Config, types::Void};
use runtime::Command;
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up the runtime context (store and responder) and executes the command.
pub async fn start(config: Config, command: Command) -> Void {
    info!("Starting bloodlink-triage ...");

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config).await?;

    // Run the command.
    runtime.run(command).await?;

    Ok(())
}
