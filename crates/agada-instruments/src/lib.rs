//! agada-instruments
//!
//! Assessment instrument definitions: symptom catalogs, questionnaires, and
//! the incompatible-diet scale. Pure reference data plus tally helpers; the
//! severity math lives in agada-severity.

pub mod catalog;
pub mod error;
pub mod instruments;

use agada_core::models::exposure::{ContactRoute, ExposureType, FoodSource, Organism};
use agada_severity::{SeverityResult, classify_checklist};

use catalog::{Finding, FindingTally, UnknownFinding};
use error::InstrumentError;

/// Trait implemented by each checklist-style assessment instrument.
///
/// The questionnaire and diet instruments score through their own modules
/// because their denominators are fixed policy, not catalog size.
pub trait Instrument: Send + Sync + std::fmt::Debug {
    /// Stable identifier (e.g. "cobra", "savisha_anjana").
    fn id(&self) -> &str;

    /// Human-readable name (e.g. "Cobra Bite").
    fn name(&self) -> &str;

    /// Classical Sanskrit name (e.g. "Darvikara Sarpa Dansha").
    fn sanskrit_name(&self) -> &str;

    /// The full symptom catalog for this instrument.
    fn findings(&self) -> &[Finding];

    fn total_possible(&self) -> usize {
        self.findings().len()
    }

    /// Count how many of `selected` are catalog entries. Duplicates and
    /// unknown ids do not inflate the count.
    fn tally(&self, selected: &[String]) -> FindingTally {
        let findings = self.findings();
        let mut seen: Vec<&str> = Vec::new();
        for id in selected {
            if findings.iter().any(|f| f.id == *id) && !seen.contains(&id.as_str()) {
                seen.push(id);
            }
        }
        FindingTally {
            present: seen.len(),
            possible: findings.len(),
        }
    }

    /// Report selected ids that are not in the catalog.
    fn validate_selection(&self, selected: &[String]) -> Vec<UnknownFinding> {
        let findings = self.findings();
        selected
            .iter()
            .filter(|id| !findings.iter().any(|f| f.id == **id))
            .map(|id| UnknownFinding {
                instrument_id: self.id().to_string(),
                finding_id: id.clone(),
            })
            .collect()
    }

    /// Severity for a count of present findings out of this catalog.
    fn score(&self, present: usize) -> SeverityResult {
        classify_checklist(present, self.total_possible())
    }

    /// Tally and score a raw selection in one step.
    fn score_selection(&self, selected: &[String]) -> SeverityResult {
        let tally = self.tally(selected);
        classify_checklist(tally.present, tally.possible)
    }
}

/// All registered checklist instruments: the eight organism catalogs, the
/// twelve external-contact routes, and the six ingestion sources.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    let mut list: Vec<Box<dyn Instrument>> = vec![
        Box::new(instruments::cobra::Cobra),
        Box::new(instruments::viper::Viper),
        Box::new(instruments::krait::Krait),
        Box::new(instruments::scorpion::Scorpion),
        Box::new(instruments::insect::Insect),
        Box::new(instruments::dog::Dog),
        Box::new(instruments::rat::Rat),
        Box::new(instruments::animal::AnimalBite),
    ];
    for route in ContactRoute::ALL {
        list.push(Box::new(instruments::external::ExternalContact(route)));
    }
    for source in FoodSource::ALL {
        list.push(Box::new(instruments::ingestion::Ingestion(source)));
    }
    list
}

/// Look up an instrument by id.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Like [`get_instrument`], for callers that treat a missing id as an error.
pub fn require_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    get_instrument(id).ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}

/// Checklist instrument for an exposure, if that family uses one.
///
/// Spider exposures share the insect catalog. The questionnaire and diet
/// families return `None`; they score through their own modules.
pub fn instrument_for(exposure: &ExposureType) -> Option<Box<dyn Instrument>> {
    match exposure {
        ExposureType::Bite { organism } => Some(match organism {
            Organism::Cobra => Box::new(instruments::cobra::Cobra),
            Organism::Viper => Box::new(instruments::viper::Viper),
            Organism::Krait => Box::new(instruments::krait::Krait),
            Organism::Scorpion => Box::new(instruments::scorpion::Scorpion),
            Organism::Spider | Organism::Insect => Box::new(instruments::insect::Insect),
            Organism::Dog => Box::new(instruments::dog::Dog),
            Organism::Rat => Box::new(instruments::rat::Rat),
            Organism::OtherAnimal => Box::new(instruments::animal::AnimalBite),
        }),
        ExposureType::Ingestion { source } => {
            Some(Box::new(instruments::ingestion::Ingestion(*source)))
        }
        ExposureType::ExternalContact { route } => {
            Some(Box::new(instruments::external::ExternalContact(*route)))
        }
        ExposureType::GaraVisha | ExposureType::DushiVisha | ExposureType::IncompatibleDiet => {
            None
        }
    }
}
