//! Optimistic transition tracker — the state machine for in-flight stage
//! moves.
//!
//! Per candidate: Idle → Pending → (Settling → Idle) | (RolledBack → Idle).
//! The tracker owns two structures that move in lockstep: the pending set
//! (candidate ids mid-transition, a pure UI affordance) and the moving map
//! (candidate id → original/target stage). Marking is synchronous and
//! happens before the gateway call is issued, so the projection shows the
//! new placement before any network traffic starts.
//!
//! On gateway success the entry is kept for a settle delay before it is
//! cleared; this absorbs re-render races where the owner's refreshed
//! collection arrives slightly after the confirmation, which would
//! otherwise make the card snap back for a frame. On failure both
//! structures are cleared immediately and the card reverts to its
//! original column via the projection fallback.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::ats_client::StageGateway;
use crate::board::drop_target::MoveIntent;

/// Ephemeral bookkeeping for one in-flight move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRecord {
    /// Stage before the drag began. Only consulted for rollback semantics.
    pub original_stage: String,
    /// Stage the candidate renders in while the move is in flight.
    pub target_stage: String,
}

#[derive(Default)]
struct TrackerState {
    pending: HashSet<String>,
    moving: HashMap<String, TransitionRecord>,
}

pub struct TransitionTracker {
    state: Mutex<TrackerState>,
    settle_delay: Duration,
}

impl TransitionTracker {
    pub fn new(settle_delay: Duration) -> Self {
        Self {
            state: Mutex::new(TrackerState::default()),
            settle_delay,
        }
    }

    /// Idle → Pending. Inserts into the moving map and pending set in one
    /// critical section. A second move of the same candidate overwrites the
    /// existing entry: last write wins, no queuing.
    pub fn begin(&self, intent: &MoveIntent) {
        let mut state = self.state.lock().expect("tracker lock poisoned");
        state.moving.insert(
            intent.candidate_id.clone(),
            TransitionRecord {
                original_stage: intent.original_stage.clone(),
                target_stage: intent.target_stage.clone(),
            },
        );
        state.pending.insert(intent.candidate_id.clone());
    }

    /// Removes the candidate from both structures (Settling → Idle or
    /// RolledBack → Idle).
    fn clear(&self, candidate_id: &str) {
        let mut state = self.state.lock().expect("tracker lock poisoned");
        state.moving.remove(candidate_id);
        state.pending.remove(candidate_id);
    }

    /// Snapshot of the moving map for the projection.
    pub fn moving_snapshot(&self) -> HashMap<String, TransitionRecord> {
        self.state
            .lock()
            .expect("tracker lock poisoned")
            .moving
            .clone()
    }

    /// Candidate ids currently mid-transition, sorted for stable output.
    pub fn pending_ids(&self) -> Vec<String> {
        let state = self.state.lock().expect("tracker lock poisoned");
        let mut ids: Vec<String> = state.pending.iter().cloned().collect();
        ids.sort();
        ids
    }

    pub fn is_pending(&self, candidate_id: &str) -> bool {
        self.state
            .lock()
            .expect("tracker lock poisoned")
            .pending
            .contains(candidate_id)
    }
}

/// How a transition resolved. A no-op drop never reaches this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// Gateway confirmed; the entry settles out after the delay.
    Applied,
    /// Gateway failed; the entry was cleared immediately.
    RolledBack,
}

#[derive(Debug, Clone)]
pub struct TransitionResult {
    pub transition_id: Uuid,
    pub outcome: TransitionOutcome,
}

/// Drives one validated move through the full lifecycle: mark the tracker,
/// call the gateway, then settle on success or roll back on failure.
///
/// The tracker mutation happens before the first await. The settle clear
/// runs on a spawned timer task so the caller gets the outcome as soon as
/// the gateway resolves.
pub async fn run_transition(
    tracker: Arc<TransitionTracker>,
    gateway: Arc<dyn StageGateway>,
    intent: MoveIntent,
) -> TransitionResult {
    let transition_id = Uuid::new_v4();

    tracker.begin(&intent);
    info!(
        %transition_id,
        candidate_id = %intent.candidate_id,
        from = %intent.original_stage,
        to = %intent.target_stage,
        "stage transition started"
    );

    match gateway
        .move_candidate(&intent.candidate_id, &intent.target_stage)
        .await
    {
        Ok(()) => {
            debug!(%transition_id, "gateway confirmed, settling");
            let delay = tracker.settle_delay;
            let candidate_id = intent.candidate_id.clone();
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                tracker.clear(&candidate_id);
                debug!(%transition_id, %candidate_id, "transition settled");
            });
            TransitionResult {
                transition_id,
                outcome: TransitionOutcome::Applied,
            }
        }
        Err(e) => {
            tracker.clear(&intent.candidate_id);
            warn!(
                %transition_id,
                candidate_id = %intent.candidate_id,
                error = %e,
                "stage transition failed, rolled back"
            );
            TransitionResult {
                transition_id,
                outcome: TransitionOutcome::RolledBack,
            }
        }
    }
}
