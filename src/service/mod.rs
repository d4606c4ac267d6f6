//! Service integrations behind trait seams.
//!
//! This module contains the services used by bloodlink-triage:
//! - Responders that turn symptom descriptions into canned replies
//! - Database services (e.g., SurrealDB) for the dashboard records
//!
//! Each service module defines both generic traits and concrete implementations,
//! allowing for extensibility and easy testing.

pub mod db;
pub mod responder;
