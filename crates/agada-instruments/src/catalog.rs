use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Clinical category a finding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FindingCategory {
    Local,
    Neurological,
    Respiratory,
    Gastrointestinal,
    Cardiovascular,
    General,
    Urological,
    Dermatological,
    Hemorrhagic,
    Autonomic,
    Allergic,
    Systemic,
    Musculoskeletal,
    Ocular,
}

/// One catalog entry: a symptom or sign with its Sanskrit name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub sanskrit: String,
    pub category: FindingCategory,
}

/// One questionnaire item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub text: String,
}

/// Count of findings marked present over the instrument's catalog size.
/// The sole input the severity classifier consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FindingTally {
    pub present: usize,
    pub possible: usize,
}

/// A selected id with no catalog entry, reported by selection validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[error("unknown finding '{finding_id}' for instrument '{instrument_id}'")]
#[ts(export)]
pub struct UnknownFinding {
    pub instrument_id: String,
    pub finding_id: String,
}

/// Build a catalog from `(id, title, sanskrit, category)` rows.
pub(crate) fn findings_from_rows(
    rows: &[(&str, &str, &str, FindingCategory)],
) -> Vec<Finding> {
    rows.iter()
        .map(|(id, title, sanskrit, category)| Finding {
            id: (*id).to_string(),
            title: (*title).to_string(),
            sanskrit: (*sanskrit).to_string(),
            category: *category,
        })
        .collect()
}
