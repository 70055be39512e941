#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A candidate on the pipeline board.
///
/// `stage` is only ever rewritten by the collection owner through the
/// refresh endpoint — the drag workflow never touches it directly. While a
/// move is in flight the tracker's moving map decides where the candidate
/// renders; `stage` stays at the pre-drag value until the owner's refresh
/// lands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Opaque, stable identifier.
    pub id: String,
    /// Current persisted pipeline stage name.
    pub stage: String,
    pub name: String,
    pub email: Option<String>,
    pub score: Option<f64>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub applied_at: Option<DateTime<Utc>>,
}

/// A named pipeline column. `name` is unique within the board and serves
/// both as the render key and as the drop-target identifier root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    pub name: String,
    /// Left-to-right column ordering, ascending.
    pub order: i32,
    pub is_active: bool,
}
