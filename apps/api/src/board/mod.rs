// Candidate pipeline board: drop interpretation, optimistic stage
// transitions, and the grouped-by-stage projection.
// All ATS mutations go through ats_client — no direct backend calls here.

pub mod drop_target;
pub mod handlers;
pub mod models;
pub mod projection;
pub mod registry;
pub mod tracker;

use crate::board::models::{Candidate, Stage};
use crate::board::registry::StageRegistry;

/// The in-memory board: the candidate collection plus the stage registry.
///
/// The collection is the single source of truth for persisted stages and
/// is only ever replaced wholesale by its owner (the refresh endpoints);
/// the drag workflow never mutates it.
#[derive(Debug, Clone, Default)]
pub struct Board {
    pub candidates: Vec<Candidate>,
    pub registry: StageRegistry,
}

impl Board {
    pub fn new(candidates: Vec<Candidate>, stages: Vec<Stage>) -> Self {
        Self {
            candidates,
            registry: StageRegistry::new(stages),
        }
    }

    pub fn replace_candidates(&mut self, candidates: Vec<Candidate>) {
        self.candidates = candidates;
    }

    pub fn replace_stages(&mut self, stages: Vec<Stage>) {
        self.registry.replace(stages);
    }
}
