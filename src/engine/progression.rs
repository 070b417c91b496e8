use thiserror::Error;

use crate::engine::scoring::compute_result;
use crate::model::catalog::{Catalog, Choice, Phase};
use crate::model::game_result::GameResult;
use crate::model::game_state::{CurrentPhase, GameState};

/// Errors that can occur when confirming a choice.
/// A rejected call never touches the game state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProgressionError {
    #[error("the game has not been started")]
    NotStarted,

    #[error("every phase is already complete")]
    AlreadyComplete,

    #[error("unknown phase '{0}'")]
    UnknownPhase(String),

    #[error("expected a choice for phase '{expected}', got '{got}'")]
    PhaseMismatch { expected: String, got: String },

    #[error("choice '{choice}' is not offered in phase '{phase}'")]
    ChoiceNotInPhase { phase: String, choice: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage<'a> {
    NotStarted,
    InPhase(&'a str),
    Completed,
}

/// Drives a single playthrough over the fixed phase sequence.
pub struct ProgressionEngine {
    catalog: Catalog,
    state: GameState,
    history: Vec<GameState>,
}

impl ProgressionEngine {
    pub fn new(catalog: Catalog) -> Self {
        let state = GameState::new(&catalog);
        Self {
            catalog,
            state,
            history: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn stage(&self) -> Stage<'_> {
        if !self.state.has_started {
            return Stage::NotStarted;
        }
        match &self.state.current_phase {
            CurrentPhase::Phase(id) => Stage::InPhase(id),
            CurrentPhase::Results => Stage::Completed,
        }
    }

    pub fn start(&mut self) {
        self.state = GameState::started(&self.catalog);
        self.history.clear();
        tracing::info!("Game started");
    }

    /// "Play again": same as `start`, the started flag stays set.
    pub fn reset(&mut self) {
        self.start();
    }

    pub fn select_choice(
        &mut self,
        phase_id: &str,
        choice: &Choice,
    ) -> Result<(), ProgressionError> {
        if let Err(e) = self.check_selection(phase_id, choice) {
            tracing::warn!("Rejected choice '{}' for '{}': {}", choice.id, phase_id, e);
            return Err(e);
        }

        self.history.push(self.state.clone());

        let next = match self.catalog.next_phase_id(phase_id) {
            Some(id) => CurrentPhase::Phase(id.to_string()),
            None => CurrentPhase::Results,
        };

        let state = &mut self.state;
        state.choices.insert(phase_id.to_string(), choice.clone());
        state.completed_phases.push(phase_id.to_string());
        // loaded catalogs are checked to fit; saturate for hand-built ones
        state.carbon_footprint = state.carbon_footprint.saturating_add(choice.carbon_footprint);
        state.popularity_score = state.popularity_score.saturating_add(choice.popularity_score);
        state.budget_remaining = state
            .budget_remaining
            .saturating_sub(i32::try_from(choice.cost).unwrap_or(i32::MAX));
        state.current_phase = next;

        tracing::debug!(
            phase = phase_id,
            choice = %choice.id,
            carbon = state.carbon_footprint,
            popularity = state.popularity_score,
            budget = state.budget_remaining,
            "Choice confirmed"
        );

        Ok(())
    }

    fn check_selection(&self, phase_id: &str, choice: &Choice) -> Result<(), ProgressionError> {
        let current = match self.stage() {
            Stage::NotStarted => return Err(ProgressionError::NotStarted),
            Stage::Completed => return Err(ProgressionError::AlreadyComplete),
            Stage::InPhase(id) => id,
        };

        let Some(phase) = self.catalog.phase(phase_id) else {
            return Err(ProgressionError::UnknownPhase(phase_id.to_string()));
        };

        if current != phase_id {
            return Err(ProgressionError::PhaseMismatch {
                expected: current.to_string(),
                got: phase_id.to_string(),
            });
        }

        if !phase.offers(choice) {
            return Err(ProgressionError::ChoiceNotInPhase {
                phase: phase_id.to_string(),
                choice: choice.id.clone(),
            });
        }

        Ok(())
    }

    /// Reverts exactly one `select_choice`. Returns false when there was
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.state = previous;
                tracing::info!("Undid last choice");
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty() && !self.state.completed_phases.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.state.completed_phases.len() == self.catalog.len()
    }

    pub fn current_phase(&self) -> Option<&Phase> {
        match self.stage() {
            Stage::InPhase(id) => self.catalog.phase(id),
            Stage::NotStarted | Stage::Completed => None,
        }
    }

    pub fn result(&self) -> GameResult {
        compute_result(&self.state, &self.catalog)
    }
}
