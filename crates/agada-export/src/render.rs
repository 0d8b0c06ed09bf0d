use agada_core::models::case::CaseRecord;
use agada_severity::GradeBand;
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ExportError;
use crate::styles::ReportStyles;

/// Built-in clinical summary template.
const REPORT_TEMPLATE: &str = include_str!("../templates/report.html.tera");
const REPORT_TEMPLATE_NAME: &str = "report.html";

/// Render an arbitrary Tera template against a serializable context value.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    value: &T,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(value)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

#[derive(Serialize)]
struct SeverityBlock {
    percentage: String,
    tier: &'static str,
    color: &'static str,
    bg_color: &'static str,
    description: &'static str,
    recommendation: &'static str,
}

#[derive(Serialize)]
struct FindingRow {
    label: String,
    grade: u8,
    grade_label: &'static str,
    grade_color: &'static str,
}

#[derive(Serialize)]
struct PatientBlock {
    name: String,
    age: String,
    gender: String,
    opd_number: String,
    ipd_number: String,
    main_complaint: String,
}

#[derive(Serialize)]
struct ReportContext<'a> {
    generated_at: String,
    exposure: String,
    total_findings: usize,
    severity: SeverityBlock,
    findings: Vec<FindingRow>,
    notes: Option<&'a str>,
    patient: Option<PatientBlock>,
    styles: &'a ReportStyles,
}

/// Render the printable clinical summary for a saved case.
pub fn report_html(case: &CaseRecord, styles: &ReportStyles) -> Result<String, ExportError> {
    let display = case.severity.tier.display();

    let findings = case
        .findings
        .iter()
        .map(|f| {
            let band = GradeBand::from_grade(f.grade);
            FindingRow {
                label: f.label.clone(),
                grade: f.grade,
                grade_label: band.label(),
                grade_color: band.color(),
            }
        })
        .collect();

    let patient = case.identity.as_ref().map(|p| PatientBlock {
        name: p.name.clone(),
        age: p.age.clone(),
        gender: p.gender.clone(),
        opd_number: p.opd_number.clone(),
        ipd_number: p.ipd_number.clone(),
        main_complaint: p.main_complaint.clone(),
    });

    let context = ReportContext {
        generated_at: case.updated_at.strftime("%d %b %Y, %H:%M UTC").to_string(),
        exposure: case
            .exposure
            .map(|e| e.to_string())
            .unwrap_or_else(|| "Not specified".to_string()),
        total_findings: case.findings.len(),
        severity: SeverityBlock {
            percentage: format!("{:.1}", case.severity.percentage),
            tier: case.severity.tier.label(),
            color: display.color,
            bg_color: display.bg_color,
            description: display.description,
            recommendation: display.recommendation,
        },
        findings,
        notes: (!case.notes.is_empty()).then_some(case.notes.as_str()),
        patient,
        styles,
    };

    tracing::debug!(case_id = %case.id, "rendering clinical summary");
    render_template(REPORT_TEMPLATE_NAME, REPORT_TEMPLATE, &context)
}
