//! Chat session: the caller side of the triage responder.
//!
//! A session owns the conversation log. Submitting text appends the user's
//! message right away and schedules the assistant's reply after a fixed pacing
//! delay. Replies are delivered by a single per-session worker in submission
//! order. Dropping the session aborts the worker, and a reply that still fires
//! after teardown finds no log and does nothing.

use std::{
    sync::{
        Arc, Weak,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use tokio::{
    sync::{Mutex, broadcast, mpsc},
    task::JoinHandle,
    time::Instant,
};
use tracing::{Instrument, debug, instrument, warn};

use crate::{
    base::types::{ChatMessage, Reply},
    service::responder::Responder,
};

use super::conversation::ConversationLog;

/// Capacity of the message broadcast; slow subscribers lag rather than block appends.
const UPDATES_CAPACITY: usize = 64;

/// State shared between a session and its reply worker.
struct Shared {
    log: Mutex<ConversationLog>,
    updates: broadcast::Sender<ChatMessage>,
    /// Replies scheduled but not yet in the log.
    pending: AtomicUsize,
}

impl Shared {
    fn new(log: ConversationLog) -> Self {
        let (updates, _) = broadcast::channel(UPDATES_CAPACITY);

        Self {
            log: Mutex::new(log),
            updates,
            pending: AtomicUsize::new(0),
        }
    }

    async fn append(&self, message: ChatMessage) {
        let mut log = self.log.lock().await;
        log.append(message.clone());

        // Published under the guard so subscribers see log order. No subscribers is fine.
        let _ = self.updates.send(message);
    }

    async fn deliver(&self, message: ChatMessage) {
        let mut log = self.log.lock().await;
        log.append(message.clone());
        self.pending.fetch_sub(1, Ordering::SeqCst);

        let _ = self.updates.send(message);
    }
}

/// A reply waiting for its delivery time.
struct ScheduledReply {
    deliver_at: Instant,
    reply: Reply,
}

/// The sending half of a session's reply worker.
struct Outbox {
    replies: mpsc::UnboundedSender<ScheduledReply>,
    worker: JoinHandle<()>,
}

/// A single symptom-checker conversation.
pub struct ChatSession {
    shared: Arc<Shared>,
    responder: Responder,
    reply_delay: Duration,
    outbox: Option<Outbox>,
}

impl ChatSession {
    /// Create an empty session.
    pub fn new(responder: Responder, reply_delay: Duration) -> Self {
        Self::from_log(responder, reply_delay, ConversationLog::new())
    }

    /// Create a session whose log opens with an assistant greeting (no severity).
    pub fn with_greeting(responder: Responder, reply_delay: Duration, greeting: &str) -> Self {
        let mut log = ConversationLog::new();
        log.append(ChatMessage::assistant(greeting, None));

        Self::from_log(responder, reply_delay, log)
    }

    fn from_log(responder: Responder, reply_delay: Duration, log: ConversationLog) -> Self {
        Self {
            shared: Arc::new(Shared::new(log)),
            responder,
            reply_delay,
            outbox: None,
        }
    }

    /// Subscribe to messages as they are appended.
    pub fn subscribe(&self) -> broadcast::Receiver<ChatMessage> {
        self.shared.updates.subscribe()
    }

    /// Snapshot of the log, oldest first.
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.shared.log.lock().await.all_messages().to_vec()
    }

    /// Number of replies scheduled but not yet delivered.
    pub fn pending_replies(&self) -> usize {
        self.shared.pending.load(Ordering::SeqCst)
    }

    /// Submit user text.
    ///
    /// Blank or whitespace-only input is ignored and returns `false`: nothing is
    /// appended and the responder is not consulted. Otherwise the user message is
    /// appended, the reply is computed, and its delivery is scheduled behind any
    /// replies already waiting.
    ///
    /// Must be called from within a Tokio runtime.
    #[instrument(name = "ChatSession::submit", skip_all)]
    pub async fn submit(&mut self, input: &str) -> bool {
        if input.trim().is_empty() {
            debug!("Ignoring blank submission.");
            return false;
        }

        self.shared.append(ChatMessage::user(input)).await;

        let reply = self.responder.respond(input);

        debug!("Scheduling {} reply in {:?}.", reply.severity, self.reply_delay);

        let scheduled = ScheduledReply {
            deliver_at: Instant::now() + self.reply_delay,
            reply,
        };

        self.shared.pending.fetch_add(1, Ordering::SeqCst);

        if self.outbox().replies.send(scheduled).is_err() {
            warn!("Reply worker is gone; dropping reply.");
            self.shared.pending.fetch_sub(1, Ordering::SeqCst);
        }

        true
    }

    /// The reply worker, started on first use.
    fn outbox(&mut self) -> &Outbox {
        let shared = Arc::downgrade(&self.shared);

        self.outbox.get_or_insert_with(|| {
            let (replies, rx) = mpsc::unbounded_channel();
            let worker = tokio::spawn(deliver_replies(shared, rx).in_current_span());

            Outbox { replies, worker }
        })
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        if let Some(outbox) = self.outbox.take() {
            outbox.worker.abort();
        }
    }
}

/// Deliver scheduled replies one at a time, in the order they were submitted.
///
/// Stops when the session is gone or the channel closes.
async fn deliver_replies(shared: Weak<Shared>, mut replies: mpsc::UnboundedReceiver<ScheduledReply>) {
    while let Some(ScheduledReply { deliver_at, reply }) = replies.recv().await {
        tokio::time::sleep_until(deliver_at).await;

        let Some(shared) = shared.upgrade() else {
            debug!("Session closed before the reply was delivered.");
            return;
        };

        shared.deliver(ChatMessage::assistant(reply.text, Some(reply.severity))).await;
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        base::{
            responses,
            types::{Author, Severity},
        },
        service::responder::GenericResponder,
    };

    /// Replies with the input so ordering is visible.
    struct Echo;

    impl GenericResponder for Echo {
        fn respond(&self, input: &str) -> Reply {
            Reply {
                text: format!("re: {input}"),
                severity: Severity::Low,
            }
        }
    }

    fn session() -> ChatSession {
        ChatSession::new(Responder::keyword(), Duration::from_millis(1000))
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_appends_user_then_reply() {
        let mut session = session();

        assert!(session.submit("I have a headache").await);

        let messages = session.messages().await;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].author(), Author::User);
        assert_eq!(messages[0].content(), "I have a headache");
        assert_eq!(session.pending_replies(), 1);

        tokio::time::sleep(Duration::from_millis(1001)).await;

        let messages = session.messages().await;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].author(), Author::Assistant);
        assert_eq!(messages[1].content(), responses::GENERAL_RESPONSE);
        assert_eq!(messages[1].severity(), Some(Severity::Low));
        assert_eq!(session.pending_replies(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_waits_for_delay() {
        let mut session = session();

        session.submit("chest pain").await;
        tokio::time::sleep(Duration::from_millis(500)).await;

        assert_eq!(session.messages().await.len(), 1);

        tokio::time::sleep(Duration::from_millis(600)).await;

        let messages = session.messages().await;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].severity(), Some(Severity::Emergency));
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_reply_keeps_its_own_delay() {
        let mut session = session();

        session.submit("first").await;
        tokio::time::sleep(Duration::from_millis(400)).await;
        session.submit("second").await;
        assert_eq!(session.pending_replies(), 2);

        tokio::time::sleep(Duration::from_millis(700)).await;
        assert_eq!(session.messages().await.len(), 3);
        assert_eq!(session.pending_replies(), 1);

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(session.messages().await.len(), 4);
        assert_eq!(session.pending_replies(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_input_is_ignored() {
        let mut session = session();

        assert!(!session.submit("").await);
        assert!(!session.submit("   \t\n").await);

        tokio::time::sleep(Duration::from_secs(2)).await;

        assert!(session.messages().await.is_empty());
        assert_eq!(session.pending_replies(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_greeting_opens_log() {
        let session = ChatSession::with_greeting(Responder::keyword(), Duration::from_millis(10), responses::GREETING);
        let messages = session.messages().await;

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].author(), Author::Assistant);
        assert_eq!(messages[0].severity(), None);
        assert_eq!(messages[0].content(), responses::GREETING);
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_see_appends_in_order() {
        let mut session = session();
        let mut updates = session.subscribe();

        session.submit("I am bleeding").await;

        let first = updates.recv().await.unwrap();
        assert_eq!(first.author(), Author::User);

        let second = updates.recv().await.unwrap();
        assert_eq!(second.author(), Author::Assistant);
        assert_eq!(second.severity(), Some(Severity::Medium));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_back_to_back_replies_keep_submission_order() {
        let expected = (0..4).map(|i| format!("re: m{i}")).collect::<Vec<_>>();

        for _ in 0..50 {
            let mut session = ChatSession::new(Responder::new(Arc::new(Echo)), Duration::from_millis(5));
            let mut updates = session.subscribe();

            for i in 0..4 {
                session.submit(&format!("m{i}")).await;
            }

            let mut seen = Vec::new();
            while seen.len() < 8 {
                let message = tokio::time::timeout(Duration::from_secs(5), updates.recv()).await.unwrap().unwrap();
                seen.push(message.content().to_string());
            }

            let logged = session.messages().await.iter().map(|m| m.content().to_string()).collect::<Vec<_>>();
            let replies = logged.iter().filter(|c| c.starts_with("re: ")).cloned().collect::<Vec<_>>();

            assert_eq!(replies, expected);
            assert_eq!(seen, logged);
            assert_eq!(session.pending_replies(), 0);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_session_abandons_reply() {
        let mut session = session();
        let mut updates = session.subscribe();
        let weak = Arc::downgrade(&session.shared);

        session.submit("I have a fever").await;
        assert!(updates.recv().await.is_ok());

        drop(session);
        tokio::time::sleep(Duration::from_secs(2)).await;

        assert!(weak.upgrade().is_none());
        assert!(matches!(updates.recv().await, Err(broadcast::error::RecvError::Closed)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_delivery_without_session_is_a_noop() {
        let shared = Arc::new(Shared::new(ConversationLog::new()));
        let weak = Arc::downgrade(&shared);
        drop(shared);

        let (tx, rx) = mpsc::unbounded_channel();
        tx.send(ScheduledReply {
            deliver_at: Instant::now() + Duration::from_millis(5),
            reply: Reply {
                text: "late".to_string(),
                severity: Severity::Low,
            },
        })
        .unwrap();

        // Must complete without panicking.
        deliver_replies(weak, rx).await;
    }
}
