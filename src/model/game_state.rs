use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::catalog::{Catalog, Choice};

/// Where the player currently is in the phase sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrentPhase {
    Phase(String),
    Results,
}

/// Live state of one playthrough.
///
/// Undo history is kept by the progression engine, not here; a snapshot is
/// simply a clone of this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub current_phase: CurrentPhase,
    pub carbon_footprint: u32,
    pub popularity_score: u32,
    /// Goes negative if the player overspends.
    pub budget_remaining: i32,
    /// Phase id → choice confirmed for it
    pub choices: BTreeMap<String, Choice>,
    pub completed_phases: Vec<String>,
    pub has_started: bool,
}

impl GameState {
    /// State before the player has pressed start.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            current_phase: CurrentPhase::Phase(catalog.first_phase().id.clone()),
            carbon_footprint: 0,
            popularity_score: 0,
            budget_remaining: catalog.initial_budget,
            choices: BTreeMap::new(),
            completed_phases: Vec::new(),
            has_started: false,
        }
    }

    pub fn started(catalog: &Catalog) -> Self {
        Self {
            has_started: true,
            ..Self::new(catalog)
        }
    }

    pub fn total_cost(&self, initial_budget: i32) -> i32 {
        initial_budget.saturating_sub(self.budget_remaining)
    }

    pub fn choice_for(&self, phase_id: &str) -> Option<&Choice> {
        self.choices.get(phase_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_points_at_first_phase() {
        let catalog = Catalog::builtin().unwrap();
        let state = GameState::new(&catalog);

        assert_eq!(state.current_phase, CurrentPhase::Phase("clothing".into()));
        assert_eq!(state.budget_remaining, 500);
        assert_eq!(state.total_cost(catalog.initial_budget), 0);
        assert!(!state.has_started);
        assert!(state.choices.is_empty());
        assert!(state.completed_phases.is_empty());
    }

    #[test]
    fn started_only_flips_the_flag() {
        let catalog = Catalog::builtin().unwrap();
        let fresh = GameState::new(&catalog);
        let started = GameState::started(&catalog);

        assert!(started.has_started);
        assert_eq!(
            GameState {
                has_started: false,
                ..started
            },
            fresh
        );
    }
}
