//! End-to-end smoke run: tally a cobra checklist, classify it, persist the
//! case, and render the printable report.
//!
//! Run with: `cargo run -p agada-export --example report_smoke`

use agada_core::models::case::{CaseDraft, GradedFinding, SeveritySummary};
use agada_core::models::exposure::{ExposureType, Organism};
use agada_storage::CaseStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let instrument = agada_instruments::require_instrument("cobra")?;

    let selected: Vec<String> = instrument
        .findings()
        .iter()
        .take(16)
        .map(|f| f.id.clone())
        .collect();
    let tally = instrument.tally(&selected);
    let result = instrument.score(tally.present);
    println!(
        "{}: {}/{} findings, {:.1}% ({})",
        instrument.name(),
        tally.present,
        tally.possible,
        result.percentage,
        result.tier.label(),
    );

    let store = CaseStore::open(std::env::temp_dir().join("agada-report-smoke"))?;
    let draft = CaseDraft {
        exposure: Some(ExposureType::Bite {
            organism: Organism::Cobra,
        }),
        findings: instrument
            .findings()
            .iter()
            .take(16)
            .map(|f| GradedFinding {
                label: f.title.clone(),
                grade: 5,
            })
            .collect(),
        notes: "Smoke run".to_string(),
        ..CaseDraft::default()
    };
    let severity = SeveritySummary {
        percentage: result.percentage,
        tier: result.tier,
    };
    let case = store.save(None, draft, severity)?;

    let html = agada_export::report_html(&case, &agada_export::ReportStyles::default())?;
    println!("rendered {} bytes of report HTML for case {}", html.len(), case.id);

    store.delete(case.id)?;
    Ok(())
}
