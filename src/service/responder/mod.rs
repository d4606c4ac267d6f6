//! Symptom triage responders.
//!
//! The `GenericResponder` trait is the seam between a chat session and whatever
//! produces the assistant's reply. The only implementation is the keyword
//! classifier in [`keyword`].

pub mod keyword;

use std::{ops::Deref, sync::Arc};

use crate::base::types::Reply;

// Traits.

/// Generic responder trait that responders must implement.
///
/// Responders are stateless with respect to the conversation: they never see or
/// touch the log, they only map one user input to one reply.
pub trait GenericResponder: Send + Sync + 'static {
    /// Produce the canned reply for a (non-blank) user input.
    fn respond(&self, input: &str) -> Reply;
}

// Structs.

/// Responder for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Responder {
    inner: Arc<dyn GenericResponder>,
}

impl Deref for Responder {
    type Target = dyn GenericResponder;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl Responder {
    pub fn new(inner: Arc<dyn GenericResponder>) -> Self {
        Self { inner }
    }
}
