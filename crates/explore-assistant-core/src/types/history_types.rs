//! History and explore identifier types

use crate::error::ExploreIdError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between model and explore in a composite id
pub const EXPLORE_ID_SEPARATOR: char = '/';

/// A prior chat entry point, shown in the sidebar history list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    /// Composite id, formatted as `<model>/<explore>`
    pub composite_explore_id: String,
    /// The question the user asked
    pub message: String,
}

impl HistoryItem {
    pub fn new(composite_explore_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            composite_explore_id: composite_explore_id.into(),
            message: message.into(),
        }
    }

    /// Parse the composite id of this item
    pub fn explore_id(&self) -> Result<ExploreId, ExploreIdError> {
        ExploreId::parse(&self.composite_explore_id)
    }

    /// Whether two items refer to the same question on the same explore
    pub fn same_entry(&self, other: &HistoryItem) -> bool {
        self.composite_explore_id == other.composite_explore_id && self.message == other.message
    }
}

/// A composite explore id split into its model and explore parts
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExploreId {
    pub model: String,
    pub explore: String,
}

impl ExploreId {
    pub fn new(model: impl Into<String>, explore: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            explore: explore.into(),
        }
    }

    /// Parse `<model>/<explore>`.
    ///
    /// Exactly one separator and two non-empty parts are required.
    pub fn parse(composite: &str) -> Result<Self, ExploreIdError> {
        let Some((model, explore)) = composite.split_once(EXPLORE_ID_SEPARATOR) else {
            return Err(ExploreIdError::MissingSeparator(composite.to_string()));
        };

        if explore.contains(EXPLORE_ID_SEPARATOR) {
            return Err(ExploreIdError::ExtraSeparator(composite.to_string()));
        }
        if model.is_empty() {
            return Err(ExploreIdError::EmptyModel(composite.to_string()));
        }
        if explore.is_empty() {
            return Err(ExploreIdError::EmptyExplore(composite.to_string()));
        }

        Ok(Self::new(model, explore))
    }

    /// The composite `<model>/<explore>` form
    pub fn composite(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ExploreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.model, EXPLORE_ID_SEPARATOR, self.explore)
    }
}

impl std::str::FromStr for ExploreId {
    type Err = ExploreIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
