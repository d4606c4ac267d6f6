//! Core components, types, and utilities for bloodlink-triage.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - Canned assistant responses and quick actions.
//! - Persisted schema records.
//! - Common types and result handling.

pub mod config;
pub mod responses;
pub mod schema;
pub mod types;
