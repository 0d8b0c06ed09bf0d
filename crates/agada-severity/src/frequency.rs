use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Consumption frequency for one incompatible-food item, on the five-point
/// scale the diet instrument uses.
///
/// Serialized as the display labels ("Never", "Daily", ...) so stored
/// ratings stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Frequency {
    Never,
    Rarely,
    Occasionally,
    Frequently,
    Daily,
}

impl Frequency {
    /// All frequencies in ascending order, for pickers.
    pub const ALL: [Frequency; 5] = [
        Frequency::Never,
        Frequency::Rarely,
        Frequency::Occasionally,
        Frequency::Frequently,
        Frequency::Daily,
    ];

    /// Contribution of this rating to the weighted diet score.
    pub fn weight(self) -> u32 {
        match self {
            Self::Never => 0,
            Self::Rarely => 1,
            Self::Occasionally => 2,
            Self::Frequently => 3,
            Self::Daily => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Never => "Never",
            Self::Rarely => "Rarely",
            Self::Occasionally => "Occasionally",
            Self::Frequently => "Frequently",
            Self::Daily => "Daily",
        }
    }
}
