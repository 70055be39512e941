//! Axum route handlers for the Board API.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::board::drop_target::{resolve_drop, DropResolution};
use crate::board::models::{Candidate, Stage};
use crate::board::projection::{project_columns, StageColumn};
use crate::board::tracker::{run_transition, TransitionOutcome};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub columns: Vec<StageColumn>,
    /// Candidate ids currently mid-transition (UI affordance: dim/spinner).
    pub pending: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct DropRequest {
    pub candidate_id: String,
    /// Raw drop-target identifier; `None` means dropped outside any zone.
    pub drop_target: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DropResponse {
    /// "applied", "rolled_back", or "noop".
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_stage: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReplaceCandidatesRequest {
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct ReplaceStagesRequest {
    pub stages: Vec<Stage>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/board
///
/// The projected board: one column per active stage with each candidate
/// placed by its effective stage, plus the pending id list.
pub async fn handle_get_board(State(state): State<AppState>) -> Json<BoardResponse> {
    let moving = state.tracker.moving_snapshot();
    let board = state.board.read().expect("board lock poisoned");
    let columns = project_columns(&board.candidates, &board.registry, &moving);

    Json(BoardResponse {
        columns,
        pending: state.tracker.pending_ids(),
    })
}

/// POST /api/v1/board/drop
///
/// Drag-end event: interpret the drop, and if it is a validated move, run
/// the optimistic transition against the gateway. A gateway failure is a
/// 200 `rolled_back` outcome, not an HTTP error.
pub async fn handle_drop(
    State(state): State<AppState>,
    Json(request): Json<DropRequest>,
) -> Result<Json<DropResponse>, AppError> {
    if request.candidate_id.trim().is_empty() {
        return Err(AppError::Validation(
            "candidate_id cannot be empty".to_string(),
        ));
    }

    // Resolve under the read lock, then release it before any await.
    let resolution = {
        let board = state.board.read().expect("board lock poisoned");
        resolve_drop(
            &request.candidate_id,
            request.drop_target.as_deref(),
            &board.registry,
            &board.candidates,
        )
    };

    let intent = match resolution {
        DropResolution::NoOp(reason) => {
            return Ok(Json(DropResponse {
                outcome: "noop",
                reason: Some(reason.as_str()),
                transition_id: None,
                target_stage: None,
            }));
        }
        DropResolution::Move(intent) => intent,
    };

    let target_stage = intent.target_stage.clone();
    let result = run_transition(
        Arc::clone(&state.tracker),
        Arc::clone(&state.gateway),
        intent,
    )
    .await;

    let outcome = match result.outcome {
        TransitionOutcome::Applied => "applied",
        TransitionOutcome::RolledBack => "rolled_back",
    };

    Ok(Json(DropResponse {
        outcome,
        reason: None,
        transition_id: Some(result.transition_id),
        target_stage: Some(target_stage),
    }))
}

/// PUT /api/v1/board/candidates
///
/// Owner refresh: replaces the candidate collection wholesale. This is the
/// only path that changes a candidate's persisted stage.
pub async fn handle_replace_candidates(
    State(state): State<AppState>,
    Json(request): Json<ReplaceCandidatesRequest>,
) -> StatusCode {
    let mut board = state.board.write().expect("board lock poisoned");
    board.replace_candidates(request.candidates);
    StatusCode::NO_CONTENT
}

/// PUT /api/v1/board/stages
///
/// Owner refresh of the stage registry.
pub async fn handle_replace_stages(
    State(state): State<AppState>,
    Json(request): Json<ReplaceStagesRequest>,
) -> StatusCode {
    let mut board = state.board.write().expect("board lock poisoned");
    board.replace_stages(request.stages);
    StatusCode::NO_CONTENT
}
