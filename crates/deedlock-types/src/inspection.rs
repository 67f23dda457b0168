//! Inspection outcome for a pending sale.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The inspector's recorded verdict for one asset.
///
/// `Unset` behaves as not-passed everywhere a decision is gated on it:
/// finalize rejects, and cancel treats it as a failed inspection (buyer
/// refund). Last write wins until finalize/cancel consumes the record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InspectionOutcome {
    #[default]
    Unset,
    Passed,
    Failed,
}

impl InspectionOutcome {
    #[must_use]
    pub fn from_passed(passed: bool) -> Self {
        if passed {
            InspectionOutcome::Passed
        } else {
            InspectionOutcome::Failed
        }
    }

    #[must_use]
    pub fn is_passed(self) -> bool {
        self == InspectionOutcome::Passed
    }
}

impl fmt::Display for InspectionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InspectionOutcome::Unset => write!(f, "UNSET"),
            InspectionOutcome::Passed => write!(f, "PASSED"),
            InspectionOutcome::Failed => write!(f, "FAILED"),
        }
    }
}
