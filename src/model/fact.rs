use serde::{Deserialize, Serialize};

use crate::model::catalog::CatalogError;

const CLIMATE_FACTS: &str = include_str!("../../assets/climate_facts.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactEntry {
    pub question: String,
    pub answer: String,
}

/// Ordered, read-only question/answer list. Order matters for tie-breaks.
#[derive(Debug, Clone, Default)]
pub struct FactCatalog {
    pub entries: Vec<FactEntry>,
}

impl FactCatalog {
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(CLIMATE_FACTS)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<FactEntry> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }
}

impl From<Vec<FactEntry>> for FactCatalog {
    fn from(entries: Vec<FactEntry>) -> Self {
        Self { entries }
    }
}
