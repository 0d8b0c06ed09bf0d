use std::collections::BTreeMap;

use agada_severity::{Frequency, SeverityTier};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::exposure::ExposureType;
use crate::models::patient::PatientIdentity;

/// One finding marked present, with its 1-10 intensity grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GradedFinding {
    pub label: String,
    pub grade: u8,
}

/// Persisted subset of a severity result. The display strings are re-derived
/// from the tier at render time, so only the numbers are stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeveritySummary {
    pub percentage: f64,
    pub tier: SeverityTier,
}

/// A completed assessment saved to the case store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CaseRecord {
    pub id: Uuid,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
    pub identity: Option<PatientIdentity>,
    pub exposure: Option<ExposureType>,
    pub findings: Vec<GradedFinding>,
    pub severity: SeveritySummary,
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gara_answers: Option<BTreeMap<String, bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dushi_answers: Option<BTreeMap<String, bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virruddha_ratings: Option<BTreeMap<String, Frequency>>,
}

/// Wizard state for the in-progress case, saved between sessions so a
/// half-finished intake survives an app restart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CaseDraft {
    #[serde(default)]
    pub identity: Option<PatientIdentity>,
    #[serde(default)]
    pub exposure: Option<ExposureType>,
    #[serde(default)]
    pub findings: Vec<GradedFinding>,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gara_answers: Option<BTreeMap<String, bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dushi_answers: Option<BTreeMap<String, bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virruddha_ratings: Option<BTreeMap<String, Frequency>>,
}
