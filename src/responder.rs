// ABOUTME: Canned responder — the stand-in backend that answers every message with
// ABOUTME: a fixed reply after a fixed delay, bridged to the UI over mpsc channels.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::tui::state::{AgentEvent, UserEvent};

/// Backend seam: anything that can produce a reply to a user message.
/// The canned implementation below is the only one today; a real AI client
/// would implement this same trait.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn respond(&self, message: &str) -> String;
}

/// Replies with a fixed text after a fixed delay, regardless of the message.
pub struct CannedResponder {
    reply: String,
    delay: Duration,
}

impl CannedResponder {
    pub fn new(reply: String, delay: Duration) -> Self {
        Self { reply, delay }
    }
}

#[async_trait]
impl Responder for CannedResponder {
    async fn respond(&self, _message: &str) -> String {
        tokio::time::sleep(self.delay).await;
        self.reply.clone()
    }
}

/// Run the responder task: each user message spawns an independent delayed
/// reply, so rapid sends race on timer completion order. Pending replies live
/// in a JoinSet owned by this task; shutting down drops the set and aborts
/// replies still waiting on their delay.
pub async fn run_responder(
    responder: Arc<dyn Responder>,
    mut user_rx: mpsc::Receiver<UserEvent>,
    agent_tx: mpsc::Sender<AgentEvent>,
) {
    let mut pending: JoinSet<()> = JoinSet::new();

    loop {
        tokio::select! {
            event = user_rx.recv() => match event {
                Some(UserEvent::Message(text)) => {
                    let responder = responder.clone();
                    let tx = agent_tx.clone();
                    pending.spawn(async move {
                        let reply = responder.respond(&text).await;
                        // Receiver may have gone away during shutdown.
                        let _ = tx.send(AgentEvent::Reply(reply)).await;
                    });
                }
                Some(UserEvent::Quit) | None => break,
            },
            // Reap completed replies so the set doesn't grow unbounded.
            Some(_) = pending.join_next(), if !pending.is_empty() => {}
        }
    }
}
