//! Session state machine — Idle → Pending → Ready | Failed.
//!
//! The machine itself is the single-flight guard: a submission is only
//! reachable from Idle, so no separate in-flight flag exists. Reset is
//! atomic — profile, pathway, and error always clear together; no field is
//! ever reset individually.
//!
//! Reset while Pending is allowed. There is no way to cancel an issued
//! provider call, so reset bumps an epoch counter instead: the in-flight
//! completion carries the epoch it started under, and a stale epoch means
//! the result is discarded rather than surfaced.

pub mod handlers;

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::warn;

use crate::errors::AppError;
use crate::models::pathway::LearningPathwayData;
use crate::models::profile::LearnerProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Idle,
    Pending,
    Ready,
    Failed,
}

#[derive(Debug)]
struct SessionInner {
    phase: SessionPhase,
    profile: Option<LearnerProfile>,
    pathway: Option<LearningPathwayData>,
    error: Option<String>,
    /// Bumped on every reset; completions carrying an older epoch are stale.
    epoch: u64,
}

impl SessionInner {
    fn idle(epoch: u64) -> Self {
        Self {
            phase: SessionPhase::Idle,
            profile: None,
            pathway: None,
            error: None,
            epoch,
        }
    }
}

/// Serializable view of the session, returned by every session endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<LearnerProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pathway: Option<LearningPathwayData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Proof of a started submission; records which epoch it started under.
#[derive(Debug, Clone, Copy)]
pub struct SubmissionTicket {
    epoch: u64,
}

/// The single session, shared across handlers. The lock is held only for
/// state transitions, never across the provider await.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<SessionInner>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionInner::idle(0))),
        }
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let inner = self.inner.lock().await;
        SessionSnapshot {
            phase: inner.phase,
            profile: inner.profile.clone(),
            pathway: inner.pathway.clone(),
            error: inner.error.clone(),
        }
    }

    /// Starts a submission. Only reachable from Idle; any other phase is a
    /// conflict and the provider must not be contacted.
    pub async fn begin(&self, profile: LearnerProfile) -> Result<SubmissionTicket, AppError> {
        let mut inner = self.inner.lock().await;
        match inner.phase {
            SessionPhase::Idle => {
                inner.phase = SessionPhase::Pending;
                inner.profile = Some(profile);
                Ok(SubmissionTicket { epoch: inner.epoch })
            }
            SessionPhase::Pending => Err(AppError::Conflict(
                "a pathway request is already in flight".to_string(),
            )),
            SessionPhase::Ready | SessionPhase::Failed => Err(AppError::Conflict(
                "session already holds a result; reset before submitting again".to_string(),
            )),
        }
    }

    /// Lands a submission in Ready or Failed. Returns false when the
    /// completion is stale — the session was reset while the request was
    /// in flight — in which case the result is discarded untouched.
    pub async fn complete(
        &self,
        ticket: SubmissionTicket,
        result: Result<LearningPathwayData, String>,
    ) -> bool {
        let mut inner = self.inner.lock().await;
        if inner.epoch != ticket.epoch {
            warn!("Discarding stale pathway completion: session was reset while the request was in flight");
            return false;
        }
        match result {
            Ok(pathway) => {
                inner.phase = SessionPhase::Ready;
                inner.pathway = Some(pathway);
                inner.error = None;
            }
            Err(message) => {
                inner.phase = SessionPhase::Failed;
                inner.error = Some(message);
                inner.pathway = None;
            }
        }
        true
    }

    /// Atomic reset: everything clears in a single assignment.
    pub async fn reset(&self) {
        let mut inner = self.inner.lock().await;
        *inner = SessionInner::idle(inner.epoch + 1);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
