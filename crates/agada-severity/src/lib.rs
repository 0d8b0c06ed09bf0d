//! agada-severity
//!
//! Instrument-level severity classification. Pure functions: a finding
//! tally in, a four-tier severity result out. No I/O, no state.

pub mod frequency;
pub mod grade;
pub mod tier;

pub use frequency::Frequency;
pub use grade::GradeBand;
pub use tier::{SeverityResult, SeverityTier, TierDisplay};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Fixed denominator for the ten-item yes/no questionnaires. Unanswered
/// questions score as "no"; they are never excluded from the denominator.
pub const YES_NO_DENOMINATOR: usize = 10;

/// Maximum attainable weighted diet score: ten items at the top frequency
/// weight of four.
pub const MAX_WEIGHTED_SCORE: u32 = 40;

/// One assessment instrument's tally, tagged by family.
///
/// Each family carries its own denominator policy: checklists vary per
/// catalog, the yes/no questionnaires always divide by ten, and the weighted
/// diet score always divides by forty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentInput {
    SymptomChecklist { present: usize, possible: usize },
    YesNoQuestionnaire { yes_count: usize },
    FrequencyWeighted { total: u32 },
}

/// Classify a finding tally into a severity result.
///
/// An instrument with no applicable items cannot indicate toxicity, so a
/// zero denominator yields the mild tier at 0% rather than dividing.
/// `present` is clamped to `possible`, keeping the percentage in [0, 100].
///
/// The division is real-valued; tier boundaries sit at 50%, 70%, and 80%,
/// with each boundary belonging to the higher tier.
pub fn classify(present: usize, possible: usize) -> SeverityResult {
    if possible == 0 {
        return SeverityResult::with_display(SeverityTier::Mild, 0.0, &tier::NO_FINDINGS);
    }

    let present = present.min(possible);
    let percentage = (present as f64 / possible as f64) * 100.0;
    let tier = SeverityTier::from_percentage(percentage);
    SeverityResult::with_display(tier, percentage, tier.display())
}

/// Severity for a symptom checklist, where the catalog size varies per
/// instrument (31 cobra findings, 18 viper findings, and so on).
pub fn classify_checklist(present: usize, possible: usize) -> SeverityResult {
    classify(present, possible)
}

/// Severity for a ten-item yes/no questionnaire (Gara Visha, Dushi Visha).
pub fn classify_yes_no(yes_count: usize) -> SeverityResult {
    classify(yes_count, YES_NO_DENOMINATOR)
}

/// Severity for the frequency-weighted incompatible-diet score, where
/// `total` is the pre-summed item weights.
pub fn classify_frequency_weighted(total: u32) -> SeverityResult {
    classify(total as usize, MAX_WEIGHTED_SCORE as usize)
}

/// Classify a tagged assessment input.
pub fn classify_assessment(input: AssessmentInput) -> SeverityResult {
    match input {
        AssessmentInput::SymptomChecklist { present, possible } => {
            classify_checklist(present, possible)
        }
        AssessmentInput::YesNoQuestionnaire { yes_count } => classify_yes_no(yes_count),
        AssessmentInput::FrequencyWeighted { total } => classify_frequency_weighted(total),
    }
}
