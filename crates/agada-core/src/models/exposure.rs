use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Organism responsible for a bite or sting exposure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Organism {
    Cobra,
    Viper,
    Krait,
    Scorpion,
    Spider,
    Insect,
    Dog,
    Rat,
    OtherAnimal,
}

impl Organism {
    pub const ALL: [Organism; 9] = [
        Organism::Cobra,
        Organism::Viper,
        Organism::Krait,
        Organism::Scorpion,
        Organism::Spider,
        Organism::Insect,
        Organism::Dog,
        Organism::Rat,
        Organism::OtherAnimal,
    ];

    /// Stable key, also the legacy wizard route parameter.
    pub fn id(self) -> &'static str {
        match self {
            Self::Cobra => "cobra",
            Self::Viper => "viper",
            Self::Krait => "krait",
            Self::Scorpion => "scorpion",
            Self::Spider => "spider",
            Self::Insect => "insect",
            Self::Dog => "dog",
            Self::Rat => "rat",
            Self::OtherAnimal => "animal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Cobra => "Cobra",
            Self::Viper => "Viper",
            Self::Krait => "Krait",
            Self::Scorpion => "Scorpion",
            Self::Spider => "Spider",
            Self::Insect => "Insect",
            Self::Dog => "Dog",
            Self::Rat => "Rat",
            Self::OtherAnimal => "Other Animal",
        }
    }

    pub fn sanskrit(self) -> &'static str {
        match self {
            Self::Cobra => "Darvikara",
            Self::Viper => "Mandali",
            Self::Krait => "Rajimanta",
            Self::Scorpion => "Vruschika",
            Self::Spider => "Luta",
            Self::Insect => "Keeta",
            Self::Dog => "Shwana",
            Self::Rat => "Mushika",
            Self::OtherAnimal => "Prani",
        }
    }
}

/// Ingested toxin source for food-poisoning exposures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FoodSource {
    Mushroom,
    Seafood,
    Chemical,
    Pesticide,
    SpoiledFood,
    ToxicPlant,
}

impl FoodSource {
    pub const ALL: [FoodSource; 6] = [
        FoodSource::Mushroom,
        FoodSource::Seafood,
        FoodSource::Chemical,
        FoodSource::Pesticide,
        FoodSource::SpoiledFood,
        FoodSource::ToxicPlant,
    ];

    /// Stable key, also the legacy wizard route parameter.
    pub fn id(self) -> &'static str {
        match self {
            Self::Mushroom => "mushroom",
            Self::Seafood => "seafood",
            Self::Chemical => "chemical",
            Self::Pesticide => "pesticide",
            Self::SpoiledFood => "spoiled",
            Self::ToxicPlant => "plant",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Mushroom => "Mushroom Poisoning",
            Self::Seafood => "Seafood Poisoning",
            Self::Chemical => "Chemical Contamination",
            Self::Pesticide => "Pesticide Contamination",
            Self::SpoiledFood => "Spoiled Food",
            Self::ToxicPlant => "Toxic Plant Ingestion",
        }
    }
}

/// Route of an external Savisha (toxic contact) exposure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ContactRoute {
    ToxicClothing,
    FaceApplication,
    BathWater,
    Inhalation,
    SmokeExposure,
    EyeApplication,
    SkinApplication,
    NasalAdministration,
    EarInstillation,
    ToxicDrink,
    FullBodyContact,
    VitalPointContact,
}

impl ContactRoute {
    pub const ALL: [ContactRoute; 12] = [
        ContactRoute::ToxicClothing,
        ContactRoute::FaceApplication,
        ContactRoute::BathWater,
        ContactRoute::Inhalation,
        ContactRoute::SmokeExposure,
        ContactRoute::EyeApplication,
        ContactRoute::SkinApplication,
        ContactRoute::NasalAdministration,
        ContactRoute::EarInstillation,
        ContactRoute::ToxicDrink,
        ContactRoute::FullBodyContact,
        ContactRoute::VitalPointContact,
    ];

    /// Stable category key from the classical Savisha taxonomy.
    pub fn id(self) -> &'static str {
        match self {
            Self::ToxicClothing => "savisha_vastra",
            Self::FaceApplication => "savisha_mukha",
            Self::BathWater => "savisha_snana",
            Self::Inhalation => "savisha_gandha",
            Self::SmokeExposure => "savisha_dhupa",
            Self::EyeApplication => "savisha_anjana",
            Self::SkinApplication => "savisha_lepana",
            Self::NasalAdministration => "savisha_nasya",
            Self::EarInstillation => "savisha_karnapurana",
            Self::ToxicDrink => "savisha_pana",
            Self::FullBodyContact => "savisha_shareera",
            Self::VitalPointContact => "savisha_marma",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ToxicClothing => "Toxic Clothing Contact",
            Self::FaceApplication => "Toxic Face Application",
            Self::BathWater => "Toxic Bath / Water Exposure",
            Self::Inhalation => "Toxic Fragrance / Inhalation",
            Self::SmokeExposure => "Toxic Smoke Exposure",
            Self::EyeApplication => "Toxic Eye Application",
            Self::SkinApplication => "Toxic Skin Application",
            Self::NasalAdministration => "Toxic Nasal Administration",
            Self::EarInstillation => "Toxic Ear Instillation",
            Self::ToxicDrink => "Toxic Drink Ingestion",
            Self::FullBodyContact => "Full Body Toxic Contact",
            Self::VitalPointContact => "Vital Point Toxic Contact",
        }
    }

    pub fn sanskrit(self) -> &'static str {
        match self {
            Self::ToxicClothing => "Savisha Vastradharana",
            Self::FaceApplication => "Savisha Mukhalepa",
            Self::BathWater => "Savisha Snana",
            Self::Inhalation => "Savisha Gandha Seva",
            Self::SmokeExposure => "Savisha Dhoopa Seva",
            Self::EyeApplication => "Savisha Anjana",
            Self::SkinApplication => "Savisha Ang Lepana",
            Self::NasalAdministration => "Savisha Nasya",
            Self::EarInstillation => "Savisha Karnapurana",
            Self::ToxicDrink => "Savisha Pana",
            Self::FullBodyContact => "Savisha Shareera Lepa",
            Self::VitalPointContact => "Savisha Marma Sparsha",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::ToxicClothing => "Contact with poison-contaminated clothing or fabric",
            Self::FaceApplication => "Application of poison-laden face paste or cosmetic",
            Self::BathWater => "Bathing in or contact with toxic water or solution",
            Self::Inhalation => "Inhalation of toxic fumes, gases, or fragrances",
            Self::SmokeExposure => "Exposure to toxic smoke or fumigation substances",
            Self::EyeApplication => "Application of toxic collyrium or eye drops",
            Self::SkinApplication => "Application of toxic paste or substance on body",
            Self::NasalAdministration => "Nasal instillation of toxic substance",
            Self::EarInstillation => "Instillation of toxic substance into the ear",
            Self::ToxicDrink => "Accidental ingestion of toxic liquid",
            Self::FullBodyContact => "Full body smearing with toxic substance",
            Self::VitalPointContact => "Toxic contact at vital marma points",
        }
    }
}

/// Exposure family for one case.
///
/// Tagged so call sites dispatch on the variant instead of matching key
/// prefixes; the old `external_*` string convention survives only in
/// [`ExposureType::from_legacy_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum ExposureType {
    Bite { organism: Organism },
    Ingestion { source: FoodSource },
    ExternalContact { route: ContactRoute },
    GaraVisha,
    DushiVisha,
    IncompatibleDiet,
}

impl ExposureType {
    /// Parse a pre-tagging wizard key ("cobra", "external_savisha_vastra",
    /// "gara_visha", ...). Used by the store's v0 migration.
    pub fn from_legacy_key(key: &str) -> Result<Self, CoreError> {
        if let Some(route_id) = key.strip_prefix("external_") {
            let route = ContactRoute::ALL
                .into_iter()
                .find(|r| r.id() == route_id)
                .ok_or_else(|| CoreError::UnknownExposureKey(key.to_string()))?;
            return Ok(Self::ExternalContact { route });
        }

        if let Some(organism) = Organism::ALL.into_iter().find(|o| o.id() == key) {
            return Ok(Self::Bite { organism });
        }
        if let Some(source) = FoodSource::ALL.into_iter().find(|s| s.id() == key) {
            return Ok(Self::Ingestion { source });
        }

        match key {
            "gara_visha" => Ok(Self::GaraVisha),
            "dushi_visha" => Ok(Self::DushiVisha),
            "virruddha_aahara" => Ok(Self::IncompatibleDiet),
            _ => Err(CoreError::UnknownExposureKey(key.to_string())),
        }
    }
}

impl fmt::Display for ExposureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bite { organism } => {
                write!(f, "{} Bite ({} Dansha)", organism.label(), organism.sanskrit())
            }
            Self::Ingestion { source } => {
                write!(f, "{} (Annagata Visha)", source.label())
            }
            Self::ExternalContact { route } => {
                write!(f, "{} ({})", route.label(), route.sanskrit())
            }
            Self::GaraVisha => f.write_str("Gara Visha (Concealed Poisoning)"),
            Self::DushiVisha => f.write_str("Dushi Visha (Latent Poisoning)"),
            Self::IncompatibleDiet => f.write_str("Virruddha Aahara (Incompatible Diet)"),
        }
    }
}
