//! Inspection outcome storage.

use std::collections::HashMap;

use deedlock_types::{AssetId, InspectionOutcome};

/// Per-asset inspection outcomes. Missing entries read as
/// [`InspectionOutcome::Unset`]. Last write wins until the terminal
/// transition consumes the record.
#[derive(Debug, Default)]
pub struct InspectionLog {
    outcomes: HashMap<AssetId, InspectionOutcome>,
}

impl InspectionLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the stored outcome for an asset.
    pub fn record(&mut self, asset_id: AssetId, outcome: InspectionOutcome) {
        self.outcomes.insert(asset_id, outcome);
    }

    /// The stored outcome, `Unset` if never recorded.
    #[must_use]
    pub fn get(&self, asset_id: AssetId) -> InspectionOutcome {
        self.outcomes.get(&asset_id).copied().unwrap_or_default()
    }

    /// Drop the record (terminal transition).
    pub fn clear(&mut self, asset_id: AssetId) {
        self.outcomes.remove(&asset_id);
    }
}
