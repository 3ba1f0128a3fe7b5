//! # Progression Engine
//!
//! Read-only arithmetic over the catalog: where an order is, what comes next,
//! whether it is finished, and how to show it.
//!
//! Positions are `Option<usize>`. `None` is the "unknown" pseudo-state that a
//! status string lands in when it matches no stage (the `-1` of the order
//! panel). Nothing here computes a next stage from `None`.

use crate::catalog::StatusCatalog;
use crate::stage::StageInfo;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::sync::Arc;

/// Progress shown as "X of Y".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Progress {
    /// 1-based step.
    Step { current: usize, total: usize },
    Unknown { total: usize },
}

impl Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Progress::Step { current, total } => write!(f, "{} of {}", current, total),
            Progress::Unknown { total } => write!(f, "? of {}", total),
        }
    }
}

/// Visual state of one stage relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    Completed,
    Active,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineStep {
    pub info: StageInfo,
    pub state: StepState,
}

/// Computes positions and next-step targets against an injected catalog.
#[derive(Debug, Clone)]
pub struct ProgressionEngine {
    catalog: Arc<StatusCatalog>,
}

impl ProgressionEngine {
    pub fn new(catalog: Arc<StatusCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &StatusCatalog {
        &self.catalog
    }

    /// Resolves a raw status string; `None` when it matches no stage.
    pub fn current_index(&self, status: &str) -> Option<usize> {
        self.catalog.lookup(status).map(StageInfo::ordinal)
    }

    pub fn next_stage(&self, current: Option<usize>) -> Option<&StageInfo> {
        current.and_then(|index| self.catalog.at(index + 1))
    }

    pub fn is_terminal(&self, current: Option<usize>) -> bool {
        current == Some(self.catalog.last_ordinal())
    }

    pub fn progress(&self, current: Option<usize>) -> Progress {
        let total = self.catalog.stage_count();
        match current {
            Some(index) if index < total => Progress::Step {
                current: index + 1,
                total,
            },
            _ => Progress::Unknown { total },
        }
    }

    pub fn progress_label(&self, current: Option<usize>) -> String {
        self.progress(current).to_string()
    }

    /// Completed / active / pending view of every stage.
    pub fn timeline(&self, current: Option<usize>) -> Vec<TimelineStep> {
        self.catalog
            .stages()
            .iter()
            .map(|info| {
                let state = match current {
                    Some(index) if info.ordinal() < index => StepState::Completed,
                    Some(index) if info.ordinal() == index => StepState::Active,
                    _ => StepState::Pending,
                };
                TimelineStep {
                    info: info.clone(),
                    state,
                }
            })
            .collect()
    }
}

impl Default for ProgressionEngine {
    fn default() -> Self {
        Self::new(Arc::new(StatusCatalog::standard()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::Stage;

    fn engine() -> ProgressionEngine {
        ProgressionEngine::default()
    }

    #[test]
    fn test_current_index_case_insensitive() {
        let engine = engine();
        assert_eq!(engine.current_index("Procesando"), Some(0));
        assert_eq!(engine.current_index("ENVIADO"), Some(1));
        assert_eq!(engine.current_index("en tránsito"), Some(2));
        assert_eq!(engine.current_index("entregado"), Some(3));
        assert_eq!(engine.current_index("Cancelado"), None);
    }

    #[test]
    fn test_next_stage() {
        let engine = engine();
        for i in 0..3 {
            let next = engine.next_stage(Some(i)).expect("next stage");
            assert_eq!(next.ordinal(), i + 1);
        }
        assert!(engine.next_stage(Some(3)).is_none());
        assert!(engine.next_stage(None).is_none());
    }

    #[test]
    fn test_is_terminal_only_for_last() {
        let engine = engine();
        assert!(engine.is_terminal(Some(3)));
        assert!(!engine.is_terminal(Some(2)));
        assert!(!engine.is_terminal(None));
    }

    #[test]
    fn test_progress_label() {
        let engine = engine();
        assert_eq!(engine.progress_label(Some(0)), "1 of 4");
        assert_eq!(engine.progress_label(Some(3)), "4 of 4");
        assert_eq!(engine.progress_label(None), "? of 4");
    }

    #[test]
    fn test_timeline_states() {
        let engine = engine();
        let states: Vec<StepState> = engine
            .timeline(Some(2))
            .into_iter()
            .map(|step| step.state)
            .collect();
        assert_eq!(
            states,
            [
                StepState::Completed,
                StepState::Completed,
                StepState::Active,
                StepState::Pending
            ]
        );

        let timeline = engine.timeline(None);
        assert!(timeline.iter().all(|step| step.state == StepState::Pending));
        assert_eq!(timeline[3].info.stage, Stage::Entregado);
    }
}
