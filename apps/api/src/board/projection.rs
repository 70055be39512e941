//! Rendering projection — pure derivation of "candidates grouped by stage".
//!
//! Re-evaluated on every state change and never mutates its inputs. The
//! moving map wins over the persisted stage, which is what makes the
//! optimistic placement visible before the backend confirms.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::board::models::Candidate;
use crate::board::registry::StageRegistry;
use crate::board::tracker::TransitionRecord;

/// One rendered column: an active stage and the candidates it holds.
#[derive(Debug, Clone, Serialize)]
pub struct StageColumn {
    pub stage: String,
    pub candidates: Vec<Candidate>,
}

/// The stage a candidate renders in: the moving-map target if a move is in
/// flight, otherwise the persisted stage.
pub fn effective_stage<'a>(
    candidate: &'a Candidate,
    moving: &'a HashMap<String, TransitionRecord>,
) -> &'a str {
    moving
        .get(&candidate.id)
        .map(|record| record.target_stage.as_str())
        .unwrap_or(&candidate.stage)
}

/// Groups candidates into one column per active stage, in ascending stage
/// order. A candidate whose effective stage matches no active stage lands
/// in no column; that condition is logged so it is diagnosable instead of
/// silently vanishing.
pub fn project_columns(
    candidates: &[Candidate],
    registry: &StageRegistry,
    moving: &HashMap<String, TransitionRecord>,
) -> Vec<StageColumn> {
    let columns: Vec<StageColumn> = registry
        .active_ordered()
        .into_iter()
        .map(|stage| StageColumn {
            stage: stage.name.clone(),
            candidates: candidates
                .iter()
                .filter(|c| effective_stage(c, moving) == stage.name)
                .cloned()
                .collect(),
        })
        .collect();

    for candidate in candidates {
        let stage = effective_stage(candidate, moving);
        if !registry.is_active(stage) {
            debug!(
                candidate_id = %candidate.id,
                stage,
                "candidate's stage matches no active column"
            );
        }
    }

    columns
}
