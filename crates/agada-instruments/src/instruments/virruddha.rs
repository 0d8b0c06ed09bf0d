use std::collections::BTreeMap;
use std::sync::LazyLock;

use agada_severity::{Frequency, SeverityResult, classify_frequency_weighted};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One incompatible food combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DietItem {
    pub id: String,
    pub food: String,
    pub combination: String,
    pub sanskrit_name: String,
}

/// Virruddha Aahara (incompatible diet) instrument: ten food combinations,
/// each rated on the five-point frequency scale. The weighted sum is scored
/// against the fixed maximum of forty.
pub struct VirruddhaAahara;

static ITEMS: LazyLock<Vec<DietItem>> = LazyLock::new(|| {
    [
        ("va_01", "Milk + Fish", "Dairy with seafood", "Ksheera-Matsya"),
        ("va_02", "Milk + Sour Fruits", "Dairy with acidic fruits", "Ksheera-Amla Phala"),
        ("va_03", "Honey + Ghee (equal parts)", "Equal measure mixing", "Madhu-Ghrita Samana"),
        ("va_04", "Honey + Hot Water/Food", "Heated honey consumption", "Ushna Madhu"),
        ("va_05", "Milk + Salt", "Dairy with salt together", "Ksheera-Lavana"),
        ("va_06", "Curds / Yogurt at Night", "Night-time curd consumption", "Ratri Dadhi"),
        ("va_07", "Radish + Milk", "Mula-Ksheera combination", "Mula-Ksheera"),
        ("va_08", "Banana + Milk", "Kadali-Ksheera combination", "Kadali-Ksheera"),
        ("va_09", "Non-veg + Milk", "Mamsa-Ksheera combination", "Mamsa-Ksheera"),
        ("va_10", "Sprouts + Milk", "Ankurita Dhanya-Ksheera", "Ankura-Ksheera"),
    ]
    .into_iter()
    .map(|(id, food, combination, sanskrit_name)| DietItem {
        id: id.to_string(),
        food: food.to_string(),
        combination: combination.to_string(),
        sanskrit_name: sanskrit_name.to_string(),
    })
    .collect()
});

impl VirruddhaAahara {
    pub const ITEM_COUNT: usize = 10;

    pub fn items() -> &'static [DietItem] {
        &ITEMS
    }

    /// Sum of frequency weights over known item ids.
    pub fn total_weighted_score(ratings: &BTreeMap<String, Frequency>) -> u32 {
        ITEMS
            .iter()
            .filter_map(|item| ratings.get(&item.id))
            .map(|f| f.weight())
            .sum()
    }

    pub fn score(ratings: &BTreeMap<String, Frequency>) -> SeverityResult {
        classify_frequency_weighted(Self::total_weighted_score(ratings))
    }

    /// 1-10 grade equivalent for one diet rating, used when diet items are
    /// folded into the report's finding list.
    pub fn grade_for(frequency: Frequency) -> u8 {
        (frequency.weight() * 2) as u8
    }
}
