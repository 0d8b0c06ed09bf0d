//! Case record serde shape: optional sections stay optional on disk.

use std::collections::BTreeMap;

use agada_core::models::case::{CaseDraft, CaseRecord, GradedFinding, SeveritySummary};
use agada_core::models::exposure::{ExposureType, Organism};
use agada_severity::{Frequency, SeverityTier};

fn sample_record() -> CaseRecord {
    CaseRecord {
        id: uuid::Uuid::new_v4(),
        created_at: "2026-03-01T09:30:00Z".parse().expect("timestamp"),
        updated_at: "2026-03-01T10:15:00Z".parse().expect("timestamp"),
        identity: None,
        exposure: Some(ExposureType::Bite {
            organism: Organism::Viper,
        }),
        findings: vec![GradedFinding {
            label: "Gum Bleeding".to_string(),
            grade: 6,
        }],
        severity: SeveritySummary {
            percentage: 55.6,
            tier: SeverityTier::Moderate,
        },
        notes: String::new(),
        gara_answers: None,
        dushi_answers: None,
        virruddha_ratings: None,
    }
}

#[test]
fn record_round_trips() {
    let record = sample_record();
    let json = serde_json::to_string(&record).expect("serialize");
    let parsed: CaseRecord = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(parsed, record);
}

#[test]
fn absent_questionnaire_sections_are_not_written() {
    let record = sample_record();
    let value = serde_json::to_value(&record).expect("serialize");
    assert!(value.get("gara_answers").is_none());
    assert!(value.get("virruddha_ratings").is_none());
}

#[test]
fn questionnaire_sections_round_trip_when_present() {
    let mut record = sample_record();
    record.gara_answers = Some(BTreeMap::from([
        ("gv_01".to_string(), true),
        ("gv_02".to_string(), false),
    ]));
    record.virruddha_ratings = Some(BTreeMap::from([(
        "va_01".to_string(),
        Frequency::Frequently,
    )]));

    let json = serde_json::to_string(&record).expect("serialize");
    let parsed: CaseRecord = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(parsed, record);
}

#[test]
fn draft_defaults_are_empty() {
    let draft: CaseDraft = serde_json::from_str("{}").expect("empty draft");
    assert!(draft.identity.is_none());
    assert!(draft.exposure.is_none());
    assert!(draft.findings.is_empty());
    assert!(draft.notes.is_empty());
}
