use agada_core::models::exposure::FoodSource;

use crate::Instrument;
use crate::catalog::Finding;
use crate::instruments::animal;

/// How many of the general-toxicity findings make up the ingestion
/// checklist.
pub const INGESTION_FINDING_COUNT: usize = 15;

/// Food-poisoning checklist for one ingested source.
///
/// All sources share a single catalog: the leading general-toxicity
/// findings of the animal-bite list, which cover the ingestion picture
/// (local irritation through systemic and neurological signs).
#[derive(Debug)]
pub struct Ingestion(pub FoodSource);

impl Instrument for Ingestion {
    fn id(&self) -> &str {
        self.0.id()
    }

    fn name(&self) -> &str {
        self.0.label()
    }

    fn sanskrit_name(&self) -> &str {
        "Annagata Visha"
    }

    fn findings(&self) -> &[Finding] {
        &animal::FINDINGS[..INGESTION_FINDING_COUNT]
    }
}
