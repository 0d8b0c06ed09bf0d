use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Patient intake identity form.
///
/// Free-text fields mirror the clinical intake register; nothing here is
/// computed or validated beyond being carried through to the case record
/// and the printed report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientIdentity {
    /// Who filled the form (practitioner, intern, student).
    pub role: String,
    pub name: String,
    pub age: String,
    pub gender: String,
    pub occupation: String,
    pub address: String,
    pub date_of_admission: jiff::civil::Date,
    pub marital_status: String,
    pub admission_type: String,
    pub opd_number: String,
    pub ipd_number: String,
    pub socio_status: String,
    pub main_complaint: String,
    pub associated_complaints: String,
    pub allergies: String,
    pub history: String,
    pub previous_bite: bool,
    /// Suspected causative factor (Nidana) noted at intake.
    pub nidana: String,
}
