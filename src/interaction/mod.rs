//! User interactions for bloodlink-triage.
//!
//! This module provides the chat side of the application:
//! - The append-only conversation log
//! - Chat sessions that pace and own assistant replies
//! - Terminal rendering and the interactive loop

pub mod conversation;
pub mod render;
pub mod repl;
pub mod session;
