//! Report rendering: the template carries the severity block, finding
//! grades, and the notes fallback.

use agada_core::models::case::{CaseRecord, GradedFinding, SeveritySummary};
use agada_core::models::exposure::{ExposureType, Organism};
use agada_core::models::patient::PatientIdentity;
use agada_export::{ExportError, ReportStyles, render, report_html};
use agada_severity::SeverityTier;

fn sample_case() -> CaseRecord {
    CaseRecord {
        id: uuid::Uuid::new_v4(),
        created_at: "2026-02-10T11:00:00Z".parse().expect("timestamp"),
        updated_at: "2026-02-10T11:30:00Z".parse().expect("timestamp"),
        identity: None,
        exposure: Some(ExposureType::Bite {
            organism: Organism::Cobra,
        }),
        findings: vec![
            GradedFinding {
                label: "Ptosis (Drooping Eyelids)".to_string(),
                grade: 7,
            },
            GradedFinding {
                label: "Local Swelling".to_string(),
                grade: 3,
            },
        ],
        severity: SeveritySummary {
            percentage: 51.61290322580645,
            tier: SeverityTier::Moderate,
        },
        notes: String::new(),
        gara_answers: None,
        dushi_answers: None,
        virruddha_ratings: None,
    }
}

#[test]
fn report_carries_severity_and_findings() {
    let html = report_html(&sample_case(), &ReportStyles::default()).expect("render");

    assert!(html.contains("Clinical Summary Report"));
    assert!(html.contains("Cobra Bite (Darvikara Dansha)"));
    assert!(html.contains("51.6%"));
    assert!(html.contains("Moderate"));
    assert!(html.contains("Hospital observation"));
    assert!(html.contains("Ptosis (Drooping Eyelids)"));
    assert!(html.contains("Grade 7 of 10 (Severe)"));
    assert!(html.contains("Grade 3 of 10 (Mild)"));
    // Tier colors flow from the shared display table.
    assert!(html.contains("#D97706"));
    assert!(html.contains("#FEF3C7"));
}

#[test]
fn empty_notes_fall_back() {
    let html = report_html(&sample_case(), &ReportStyles::default()).expect("render");
    assert!(html.contains("No additional notes provided"));

    let mut case = sample_case();
    case.notes = "Responded to first aid.".to_string();
    let html = report_html(&case, &ReportStyles::default()).expect("render");
    assert!(html.contains("Responded to first aid."));
    assert!(!html.contains("No additional notes provided"));
}

#[test]
fn patient_block_renders_when_present() {
    let mut case = sample_case();
    case.identity = Some(PatientIdentity {
        role: "Practitioner".to_string(),
        name: "Test Patient".to_string(),
        age: "34".to_string(),
        gender: "Female".to_string(),
        occupation: "Farmer".to_string(),
        address: String::new(),
        date_of_admission: "2026-02-10".parse().expect("date"),
        marital_status: String::new(),
        admission_type: "OPD".to_string(),
        opd_number: "OPD-1042".to_string(),
        ipd_number: String::new(),
        socio_status: String::new(),
        main_complaint: "Swelling after bite".to_string(),
        associated_complaints: String::new(),
        allergies: String::new(),
        history: String::new(),
        previous_bite: false,
        nidana: String::new(),
    });

    let html = report_html(&case, &ReportStyles::default()).expect("render");
    assert!(html.contains("Test Patient"));
    assert!(html.contains("OPD-1042"));
    assert!(html.contains("Swelling after bite"));

    let without = report_html(&sample_case(), &ReportStyles::default()).expect("render");
    assert!(!without.contains("Patient Profile"));
}

#[test]
fn custom_styles_flow_into_the_document() {
    let styles = ReportStyles {
        accent_color: "#123456".to_string(),
        ..ReportStyles::default()
    };
    let html = report_html(&sample_case(), &styles).expect("render");
    assert!(html.contains("#123456"));
    assert!(!html.contains("#C45E3D"));
}

#[test]
fn broken_templates_are_parse_errors() {
    let err = render::render_template("broken", "{{ unclosed", &serde_json::json!({}))
        .expect_err("should fail to parse");
    assert!(matches!(err, ExportError::TemplateParse(_)));
}
