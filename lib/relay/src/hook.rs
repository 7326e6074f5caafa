//! The reply hook.
//!
//! One inbound message drives one pass through the relay: ensure the
//! workspace is resolved, exchange the message with the dialogue engine,
//! persist the updated context, then either relay the engine's reply or
//! hand the turn off to the retrieval engine. Every step is awaited in
//! sequence; the returned [`TurnOutcome`] records which path the turn took.
//!
//! Failures never propagate to the caller. A failed dialogue call sends a
//! fixed onboarding cascade, a failed retrieval query sends a fixed
//! service-error message, and an unresolved workspace drops the turn with
//! no reply at all (logged, per the resolver's contract).

use crate::outbound::OutboundDispatcher;
use copper_courier_core::{ChannelUserId, TurnId, WorkspaceId};
use copper_courier_dialogue::{DialogueService, WorkspaceResolver};
use copper_courier_discovery::RetrievalService;
use copper_courier_session::{DialogueContext, SessionStore};
use tracing::{debug, info, warn};

/// Two-part cascade sent when the dialogue engine cannot be reached,
/// typically because no workspace has been set up yet.
pub const ONBOARDING_CASCADE: [&str; 2] = [
    "Welcome! To complete the setup, create a workspace in the dialogue service and link it to this application.",
    "Have fun!!",
];

/// Message sent when the retrieval engine fails or returns no passages.
pub const RETRIEVAL_ERROR_TEXT: &str =
    "Oops, something went wrong with the retrieval service. Please check its configuration.";

/// The path one relay turn took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The dialogue engine's reply was relayed to the user.
    Replied,
    /// The turn was handed off and the top retrieval passage relayed.
    HandedOff,
    /// The dialogue call failed; the onboarding cascade was sent.
    OnboardingSent,
    /// Retrieval failed or found nothing; the service-error message was sent.
    ServiceErrorSent,
    /// The workspace could not be resolved; the message was dropped.
    Dropped,
}

/// Message-handling hook relaying chat turns through the two engines.
pub struct ReplyHook<D, R, S, O> {
    dialogue: D,
    retrieval: R,
    sessions: S,
    outbound: O,
    resolver: WorkspaceResolver,
}

impl<D, R, S, O> ReplyHook<D, R, S, O>
where
    D: DialogueService,
    R: RetrievalService,
    S: SessionStore,
    O: OutboundDispatcher,
{
    /// Creates a hook over the four collaborator seams.
    pub fn new(
        dialogue: D,
        retrieval: R,
        sessions: S,
        outbound: O,
        workspace_candidate: Option<WorkspaceId>,
    ) -> Self {
        Self {
            dialogue,
            retrieval,
            sessions,
            outbound,
            resolver: WorkspaceResolver::new(workspace_candidate),
        }
    }

    /// Returns the workspace resolver.
    #[must_use]
    pub fn resolver(&self) -> &WorkspaceResolver {
        &self.resolver
    }

    /// Handles one inbound user message end to end.
    ///
    /// The future completes only after the outbound dispatch has finished,
    /// so callers can sequence middleware after delivery.
    pub async fn handle(&self, user: &ChannelUserId, text: &str) -> TurnOutcome {
        let turn = TurnId::new();

        let Some(workspace) = self.resolver.resolve(&self.dialogue).await else {
            warn!(%turn, user = %user, "workspace unresolved, dropping message");
            return TurnOutcome::Dropped;
        };

        let context = match self.sessions.context(user).await {
            Ok(Some(context)) => context,
            Ok(None) => DialogueContext::new(),
            Err(e) => {
                warn!(
                    %turn,
                    user = %user,
                    error = %e,
                    "session read failed, starting a fresh conversation"
                );
                DialogueContext::new()
            }
        };

        let mut reply = match self.dialogue.message(&workspace, text, context).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(
                    %turn,
                    user = %user,
                    error = %e,
                    "dialogue call failed, sending onboarding message"
                );
                let lines: Vec<String> =
                    ONBOARDING_CASCADE.iter().map(|s| (*s).to_string()).collect();
                self.dispatch_cascade(&lines, user, &turn).await;
                return TurnOutcome::OnboardingSent;
            }
        };

        // Strip the hand-off request before persisting so it is not
        // replayed on the next turn.
        let handoff = reply.context.handoff_requested();
        if handoff {
            reply.context.clear_action();
        }

        if let Err(e) = self.sessions.update(user, reply.context).await {
            warn!(%turn, user = %user, error = %e, "failed to persist dialogue context");
        }

        if handoff {
            self.relay_passage(user, text, &turn).await
        } else {
            debug!(
                %turn,
                user = %user,
                lines = reply.output.text.len(),
                "relaying dialogue reply"
            );
            self.dispatch_cascade(&reply.output.text, user, &turn).await;
            TurnOutcome::Replied
        }
    }

    /// Answers a handed-off turn from the retrieval engine, querying with
    /// the user's original text rather than the dialogue engine's output.
    async fn relay_passage(
        &self,
        user: &ChannelUserId,
        text: &str,
        turn: &TurnId,
    ) -> TurnOutcome {
        match self.retrieval.query(text).await {
            Ok(response) => match response.best() {
                Some(passage) => {
                    info!(
                        %turn,
                        user = %user,
                        score = passage.passage_score,
                        "relaying top retrieval passage"
                    );
                    self.dispatch_text(&passage.passage_text, user, turn).await;
                    TurnOutcome::HandedOff
                }
                None => {
                    warn!(%turn, user = %user, "retrieval returned no passages");
                    self.dispatch_text(RETRIEVAL_ERROR_TEXT, user, turn).await;
                    TurnOutcome::ServiceErrorSent
                }
            },
            Err(e) => {
                warn!(%turn, user = %user, error = %e, "retrieval query failed");
                self.dispatch_text(RETRIEVAL_ERROR_TEXT, user, turn).await;
                TurnOutcome::ServiceErrorSent
            }
        }
    }

    async fn dispatch_text(&self, text: &str, user: &ChannelUserId, turn: &TurnId) {
        if let Err(e) = self.outbound.send_text(text, user).await {
            warn!(%turn, user = %user, error = %e, "outbound send failed");
        }
    }

    async fn dispatch_cascade(&self, lines: &[String], user: &ChannelUserId, turn: &TurnId) {
        if let Err(e) = self.outbound.send_cascade(lines, user).await {
            warn!(%turn, user = %user, error = %e, "outbound send failed");
        }
    }
}
