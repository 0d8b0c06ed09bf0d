use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Instrument-level severity band, ordered from least to most severe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityTier {
    Mild,
    Moderate,
    Alarming,
    SevereComplicated,
}

impl SeverityTier {
    /// Tier for a normalized percentage. Thresholds are checked descending;
    /// the lower bound of each band is closed, so exactly 50.0, 70.0, and
    /// 80.0 land in the higher tier.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            Self::SevereComplicated
        } else if percentage >= 70.0 {
            Self::Alarming
        } else if percentage >= 50.0 {
            Self::Moderate
        } else {
            Self::Mild
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Alarming => "Alarming",
            Self::SevereComplicated => "Severe Complicated",
        }
    }

    /// Presentation constants for this tier.
    pub fn display(self) -> &'static TierDisplay {
        match self {
            Self::Mild => &MILD,
            Self::Moderate => &MODERATE,
            Self::Alarming => &ALARMING,
            Self::SevereComplicated => &SEVERE_COMPLICATED,
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Presentation constants for one tier: a color pair plus the canned
/// guidance strings. One static entry per tier; both the classifier and the
/// report renderer read from the same table.
#[derive(Debug)]
pub struct TierDisplay {
    pub color: &'static str,
    pub bg_color: &'static str,
    pub description: &'static str,
    pub recommendation: &'static str,
}

static MILD: TierDisplay = TierDisplay {
    color: "#059669",
    bg_color: "#D1FAE5",
    description: "Mild exposure. Monitor closely.",
    recommendation: "Outpatient care. Basic detoxification measures. Follow-up in 24 hours.",
};

static MODERATE: TierDisplay = TierDisplay {
    color: "#D97706",
    bg_color: "#FEF3C7",
    description: "Moderate toxicity. Close observation and treatment needed.",
    recommendation: "Hospital observation. Symptomatic treatment. Evaluate for specific Agada Chikitsa.",
};

static ALARMING: TierDisplay = TierDisplay {
    color: "#EA580C",
    bg_color: "#FFEDD5",
    description: "High severity. Urgent medical attention required.",
    recommendation: "Urgent hospital admission. Initiate Agada Tantra protocol. Monitor vitals continuously.",
};

static SEVERE_COMPLICATED: TierDisplay = TierDisplay {
    color: "#DC2626",
    bg_color: "#FEE2E2",
    description: "Critical toxicity. Immediate emergency intervention required.",
    recommendation: "Immediate hospitalization. Administer antivenom / specific antidote. ICU monitoring required.",
};

/// Shown when an instrument has no applicable items at all.
pub(crate) static NO_FINDINGS: TierDisplay = TierDisplay {
    color: "#059669",
    bg_color: "#D1FAE5",
    description: "No symptoms recorded",
    recommendation: "Continue monitoring. No toxic exposure confirmed.",
};

/// Outcome of classifying one finding tally.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct SeverityResult {
    pub percentage: f64,
    pub tier: SeverityTier,
    pub color: String,
    pub bg_color: String,
    pub description: String,
    pub recommendation: String,
}

impl SeverityResult {
    pub(crate) fn with_display(
        tier: SeverityTier,
        percentage: f64,
        display: &TierDisplay,
    ) -> Self {
        Self {
            percentage,
            tier,
            color: display.color.to_string(),
            bg_color: display.bg_color.to_string(),
            description: display.description.to_string(),
            recommendation: display.recommendation.to_string(),
        }
    }
}
