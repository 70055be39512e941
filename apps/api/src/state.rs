use std::sync::{Arc, RwLock};

use crate::ats_client::StageGateway;
use crate::board::tracker::TransitionTracker;
use crate::board::Board;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The board's source of truth: candidate collection + stage registry.
    /// Replaced wholesale by the owner refresh endpoints, never mutated by
    /// the drag workflow.
    pub board: Arc<RwLock<Board>>,
    /// Pending set + moving map for in-flight moves.
    pub tracker: Arc<TransitionTracker>,
    /// Pluggable stage mutation gateway. Production: `HttpStageGateway`.
    pub gateway: Arc<dyn StageGateway>,
}
