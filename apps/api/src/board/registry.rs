use crate::board::models::Stage;

/// The ordered, filterable set of pipeline stages.
///
/// Inactive stages are invisible to the whole workflow: they are excluded
/// from the projection, and a drop resolving to one is treated as a no-op.
#[derive(Debug, Clone, Default)]
pub struct StageRegistry {
    stages: Vec<Stage>,
}

impl StageRegistry {
    pub fn new(stages: Vec<Stage>) -> Self {
        Self { stages }
    }

    /// Replaces the full stage list (owner refresh).
    pub fn replace(&mut self, stages: Vec<Stage>) {
        self.stages = stages;
    }

    /// Active stages in ascending `order`.
    pub fn active_ordered(&self) -> Vec<&Stage> {
        let mut active: Vec<&Stage> = self.stages.iter().filter(|s| s.is_active).collect();
        active.sort_by_key(|s| s.order);
        active
    }

    /// Whether `name` identifies an active stage.
    pub fn is_active(&self, name: &str) -> bool {
        self.stages.iter().any(|s| s.is_active && s.name == name)
    }
}
