use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Band for a single symptom's 1-10 intensity grade.
///
/// Distinct from [`SeverityTier`](crate::SeverityTier): this grades one
/// finding on a 1-10 scale in five bands, while the tier classifies a whole
/// instrument on a 0-100% scale in four. The two ladders must not be mixed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GradeBand {
    Minimal,
    Mild,
    Moderate,
    Severe,
    Critical,
}

impl GradeBand {
    /// Band for a 1-10 grade: 1-2 Minimal, 3-4 Mild, 5-6 Moderate,
    /// 7-8 Severe, 9-10 Critical. Grades above ten stay Critical.
    pub fn from_grade(grade: u8) -> Self {
        if grade <= 2 {
            Self::Minimal
        } else if grade <= 4 {
            Self::Mild
        } else if grade <= 6 {
            Self::Moderate
        } else if grade <= 8 {
            Self::Severe
        } else {
            Self::Critical
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
            Self::Critical => "Critical",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Minimal => "#6EE7B7",
            Self::Mild => "#86EFAC",
            Self::Moderate => "#FCD34D",
            Self::Severe => "#F97316",
            Self::Critical => "#EF4444",
        }
    }
}
