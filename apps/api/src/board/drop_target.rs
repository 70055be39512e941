//! Drop-target interpretation — turns a raw drag-and-drop drop identifier
//! into a validated move intent, or decides the drop is a no-op.
//!
//! A stage column exposes four droppable zones that all mean "this stage":
//! the column body (bare stage name), the column header (`<stage>-header`),
//! the column content region (`<stage>-content`), and any candidate card
//! inside it (`<stage>-card-<candidateId>`). The zones are parsed into a
//! tagged `DropTarget` at this seam; nothing downstream sees raw strings.

use tracing::{debug, warn};

use crate::board::models::Candidate;
use crate::board::registry::StageRegistry;

const HEADER_SUFFIX: &str = "-header";
const CONTENT_SUFFIX: &str = "-content";
const CARD_MARKER: &str = "-card-";

/// A parsed drop zone. All four variants resolve to the same stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    Column(String),
    ColumnHeader(String),
    ColumnContent(String),
    Card {
        stage: String,
        candidate_id: String,
    },
}

impl DropTarget {
    /// Parses a raw drop identifier. Card markers are checked before the
    /// zone suffixes so `<stage>-card-<id>` never loses its id portion.
    pub fn parse(raw: &str) -> DropTarget {
        if let Some(idx) = raw.find(CARD_MARKER) {
            return DropTarget::Card {
                stage: raw[..idx].to_string(),
                candidate_id: raw[idx + CARD_MARKER.len()..].to_string(),
            };
        }
        if let Some(stage) = raw.strip_suffix(HEADER_SUFFIX) {
            return DropTarget::ColumnHeader(stage.to_string());
        }
        if let Some(stage) = raw.strip_suffix(CONTENT_SUFFIX) {
            return DropTarget::ColumnContent(stage.to_string());
        }
        DropTarget::Column(raw.to_string())
    }

    /// The stage this zone belongs to.
    pub fn stage(&self) -> &str {
        match self {
            DropTarget::Column(s)
            | DropTarget::ColumnHeader(s)
            | DropTarget::ColumnContent(s) => s,
            DropTarget::Card { stage, .. } => stage,
        }
    }
}

/// A validated intent to move one candidate to a new stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveIntent {
    pub candidate_id: String,
    pub original_stage: String,
    pub target_stage: String,
}

/// Why a drop resolved to nothing. No-ops are silent to the user — they
/// never touch the tracker and never reach the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoOpReason {
    /// Dropped outside any droppable zone.
    MissingTarget,
    /// Resolved stage is not an active registry stage.
    UnknownStage(String),
    /// The dragged id matches no candidate in the collection.
    UnknownCandidate(String),
    /// Target stage equals the candidate's current stage.
    SameStage,
}

impl NoOpReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoOpReason::MissingTarget => "missing_target",
            NoOpReason::UnknownStage(_) => "unknown_stage",
            NoOpReason::UnknownCandidate(_) => "unknown_candidate",
            NoOpReason::SameStage => "same_stage",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropResolution {
    NoOp(NoOpReason),
    Move(MoveIntent),
}

/// Resolves a drag-end event into a `DropResolution`.
///
/// Validation order: target present → stage active → candidate known →
/// target differs from the candidate's current stage.
pub fn resolve_drop(
    candidate_id: &str,
    raw_target: Option<&str>,
    registry: &StageRegistry,
    candidates: &[Candidate],
) -> DropResolution {
    let raw = match raw_target {
        Some(raw) => raw,
        None => return DropResolution::NoOp(NoOpReason::MissingTarget),
    };

    let target = DropTarget::parse(raw);
    let target_stage = target.stage();
    debug!(candidate_id, raw, target_stage, "resolved drop target");

    if !registry.is_active(target_stage) {
        debug!(candidate_id, target_stage, "drop on unknown or inactive stage ignored");
        return DropResolution::NoOp(NoOpReason::UnknownStage(target_stage.to_string()));
    }

    let candidate = match candidates.iter().find(|c| c.id == candidate_id) {
        Some(c) => c,
        None => {
            warn!(candidate_id, "drop event for unknown candidate ignored");
            return DropResolution::NoOp(NoOpReason::UnknownCandidate(candidate_id.to_string()));
        }
    };

    if candidate.stage == target_stage {
        return DropResolution::NoOp(NoOpReason::SameStage);
    }

    DropResolution::Move(MoveIntent {
        candidate_id: candidate.id.clone(),
        original_stage: candidate.stage.clone(),
        target_stage: target_stage.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::models::Stage;

    fn make_candidate(id: &str, stage: &str) -> Candidate {
        Candidate {
            id: id.to_string(),
            stage: stage.to_string(),
            name: format!("Candidate {id}"),
            email: None,
            score: None,
            tags: vec![],
            applied_at: None,
        }
    }

    fn make_registry(names: &[&str]) -> StageRegistry {
        StageRegistry::new(
            names
                .iter()
                .enumerate()
                .map(|(i, name)| Stage {
                    name: name.to_string(),
                    order: i as i32 * 10,
                    is_active: true,
                })
                .collect(),
        )
    }

    #[test]
    fn test_parse_column_body() {
        assert_eq!(
            DropTarget::parse("Phone Screen"),
            DropTarget::Column("Phone Screen".to_string())
        );
    }

    #[test]
    fn test_parse_header_zone() {
        assert_eq!(
            DropTarget::parse("Phone Screen-header"),
            DropTarget::ColumnHeader("Phone Screen".to_string())
        );
    }

    #[test]
    fn test_parse_content_zone() {
        assert_eq!(
            DropTarget::parse("Applied-content"),
            DropTarget::ColumnContent("Applied".to_string())
        );
    }

    #[test]
    fn test_parse_card_zone() {
        assert_eq!(
            DropTarget::parse("Applied-card-c42"),
            DropTarget::Card {
                stage: "Applied".to_string(),
                candidate_id: "c42".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_card_with_hyphenated_candidate_id() {
        assert_eq!(
            DropTarget::parse("Hired-card-cand-7-b"),
            DropTarget::Card {
                stage: "Hired".to_string(),
                candidate_id: "cand-7-b".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_card_marker_with_empty_candidate_id() {
        // A truncated card marker still parses as a card, with an empty id.
        assert_eq!(
            DropTarget::parse("Applied-card-"),
            DropTarget::Card {
                stage: "Applied".to_string(),
                candidate_id: "".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_card_marker_with_empty_stage() {
        let target = DropTarget::parse("-card-x");
        assert_eq!(target.stage(), "");
    }

    #[test]
    fn test_parse_hyphenated_stage_name() {
        // A stage whose own name ends in a hyphenated word must survive.
        assert_eq!(
            DropTarget::parse("On-Site-header"),
            DropTarget::ColumnHeader("On-Site".to_string())
        );
    }

    /// All four zones of one column resolve to the identical stage.
    #[test]
    fn test_four_way_zone_equivalence() {
        let zones = [
            "Phone Screen",
            "Phone Screen-header",
            "Phone Screen-content",
            "Phone Screen-card-c9",
        ];
        for raw in zones {
            assert_eq!(DropTarget::parse(raw).stage(), "Phone Screen", "zone {raw}");
        }
    }

    #[test]
    fn test_resolve_empty_stage_card_marker_is_noop() {
        // An empty stage never matches an active registry stage.
        let registry = make_registry(&["Applied", "Hired"]);
        let candidates = vec![make_candidate("c1", "Applied")];
        assert_eq!(
            resolve_drop("c1", Some("-card-x"), &registry, &candidates),
            DropResolution::NoOp(NoOpReason::UnknownStage("".to_string()))
        );
    }

    #[test]
    fn test_resolve_missing_target_is_noop() {
        let registry = make_registry(&["Applied"]);
        let candidates = vec![make_candidate("c1", "Applied")];
        assert_eq!(
            resolve_drop("c1", None, &registry, &candidates),
            DropResolution::NoOp(NoOpReason::MissingTarget)
        );
    }

    #[test]
    fn test_resolve_unknown_stage_is_noop() {
        let registry = make_registry(&["Applied"]);
        let candidates = vec![make_candidate("c1", "Applied")];
        assert_eq!(
            resolve_drop("c1", Some("Nonexistent"), &registry, &candidates),
            DropResolution::NoOp(NoOpReason::UnknownStage("Nonexistent".to_string()))
        );
    }

    #[test]
    fn test_resolve_inactive_stage_is_noop() {
        let registry = StageRegistry::new(vec![
            Stage {
                name: "Applied".to_string(),
                order: 0,
                is_active: true,
            },
            Stage {
                name: "Archived".to_string(),
                order: 10,
                is_active: false,
            },
        ]);
        let candidates = vec![make_candidate("c1", "Applied")];
        assert_eq!(
            resolve_drop("c1", Some("Archived"), &registry, &candidates),
            DropResolution::NoOp(NoOpReason::UnknownStage("Archived".to_string()))
        );
    }

    #[test]
    fn test_resolve_unknown_candidate_is_noop() {
        let registry = make_registry(&["Applied", "Hired"]);
        let candidates = vec![make_candidate("c1", "Applied")];
        assert_eq!(
            resolve_drop("ghost", Some("Hired"), &registry, &candidates),
            DropResolution::NoOp(NoOpReason::UnknownCandidate("ghost".to_string()))
        );
    }

    #[test]
    fn test_resolve_same_stage_is_noop() {
        let registry = make_registry(&["Applied", "Hired"]);
        let candidates = vec![make_candidate("c1", "Applied")];
        assert_eq!(
            resolve_drop("c1", Some("Applied-header"), &registry, &candidates),
            DropResolution::NoOp(NoOpReason::SameStage)
        );
    }

    #[test]
    fn test_resolve_valid_drop_produces_move_intent() {
        let registry = make_registry(&["Applied", "Phone Screen"]);
        let candidates = vec![make_candidate("c1", "Applied")];
        let resolution = resolve_drop("c1", Some("Phone Screen-header"), &registry, &candidates);
        assert_eq!(
            resolution,
            DropResolution::Move(MoveIntent {
                candidate_id: "c1".to_string(),
                original_stage: "Applied".to_string(),
                target_stage: "Phone Screen".to_string(),
            })
        );
    }

    /// The four zones produce identical move intents, not just identical
    /// stage names.
    #[test]
    fn test_all_zones_produce_identical_intent() {
        let registry = make_registry(&["Applied", "Phone Screen"]);
        let candidates = vec![make_candidate("c1", "Applied")];
        let expected = resolve_drop("c1", Some("Phone Screen"), &registry, &candidates);
        for raw in [
            "Phone Screen-header",
            "Phone Screen-content",
            "Phone Screen-card-c77",
        ] {
            assert_eq!(
                resolve_drop("c1", Some(raw), &registry, &candidates),
                expected,
                "zone {raw}"
            );
        }
    }
}
