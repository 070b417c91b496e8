use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

const GAME_DATA: &str = include_str!("../../assets/game_data.json");

/// Popularity points a single phase can contribute at most.
pub const POPULARITY_PER_PHASE: u32 = 10;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog has no phases")]
    NoPhases,

    #[error("phase '{0}' has no choices")]
    EmptyPhase(String),

    #[error("phase '{0}' appears more than once")]
    DuplicatePhase(String),

    #[error("choice '{0}' appears more than once")]
    DuplicateChoice(String),

    #[error("initial budget must not be negative (got {0})")]
    NegativeBudget(i32),

    #[error("average student carbon footprint must be positive")]
    InvalidAverage,

    #[error("largest possible {0} total does not fit")]
    TotalOverflow(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub id: String,
    pub title: String,
    pub description: String,
    pub carbon_footprint: u32,
    pub popularity_score: u32,
    pub cost: u32,
    pub environmental_impact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub id: String,
    pub title: String,
    pub prompt: String,
    pub choices: Vec<Choice>,
}

impl Phase {
    pub fn choice(&self, id: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == id)
    }

    pub fn offers(&self, choice: &Choice) -> bool {
        self.choices.iter().any(|c| c == choice)
    }
}

/// The fixed phase sequence plus the two scoring constants.
/// Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub initial_budget: i32,
    pub average_student_carbon_footprint: u32,
    pub phases: Vec<Phase>,
}

impl Catalog {
    /// Catalog shipped with the game.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(GAME_DATA)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.phases.is_empty() {
            return Err(CatalogError::NoPhases);
        }
        if self.initial_budget < 0 {
            return Err(CatalogError::NegativeBudget(self.initial_budget));
        }
        if self.average_student_carbon_footprint == 0 {
            return Err(CatalogError::InvalidAverage);
        }

        let mut phase_ids = HashSet::new();
        let mut choice_ids = HashSet::new();

        for phase in &self.phases {
            if !phase_ids.insert(phase.id.as_str()) {
                return Err(CatalogError::DuplicatePhase(phase.id.clone()));
            }
            if phase.choices.is_empty() {
                return Err(CatalogError::EmptyPhase(phase.id.clone()));
            }
            for choice in &phase.choices {
                if !choice_ids.insert(choice.id.as_str()) {
                    return Err(CatalogError::DuplicateChoice(choice.id.clone()));
                }
            }
        }

        self.check_totals()
    }

    /// Picking the largest value in every phase must still fit the running
    /// totals: `u32` for carbon and popularity, `i32` for money spent.
    fn check_totals(&self) -> Result<(), CatalogError> {
        let worst = |field: fn(&Choice) -> u32| -> u64 {
            self.phases
                .iter()
                .map(|p| p.choices.iter().map(field).max().map_or(0, u64::from))
                .sum()
        };

        if worst(|c| c.carbon_footprint) > u64::from(u32::MAX) {
            return Err(CatalogError::TotalOverflow("carbon_footprint"));
        }
        if worst(|c| c.popularity_score) > u64::from(u32::MAX) {
            return Err(CatalogError::TotalOverflow("popularity_score"));
        }
        if worst(|c| c.cost) > i32::MAX as u64 {
            return Err(CatalogError::TotalOverflow("cost"));
        }

        Ok(())
    }

    pub fn first_phase(&self) -> &Phase {
        // validate() guarantees at least one phase
        &self.phases[0]
    }

    pub fn phase(&self, id: &str) -> Option<&Phase> {
        self.phases.iter().find(|p| p.id == id)
    }

    /// Id of the phase after `id`, or `None` when `id` is the last one.
    pub fn next_phase_id(&self, id: &str) -> Option<&str> {
        let index = self.phases.iter().position(|p| p.id == id)?;
        self.phases.get(index + 1).map(|p| p.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn popularity_ceiling(&self) -> u32 {
        (self.phases.len() as u32).saturating_mul(POPULARITY_PER_PHASE)
    }
}
