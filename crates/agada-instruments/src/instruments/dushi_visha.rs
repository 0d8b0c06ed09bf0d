use std::collections::BTreeMap;
use std::sync::LazyLock;

use agada_severity::{SeverityResult, classify_yes_no};

use crate::catalog::Question;

/// Dushi Visha screening: ten yes/no questions probing latent poison that
/// resurfaces months or years after the original exposure. Fixed
/// denominator of ten, like [`GaraVisha`](super::gara_visha::GaraVisha).
pub struct DushiVisha;

static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
    [
        (
            "dv_01",
            "Has the patient had past exposure to snake bite, insect bite, or toxic substance that was treated and apparently resolved?",
        ),
        (
            "dv_02",
            "Did symptoms recur after months or years of apparent wellbeing?",
        ),
        (
            "dv_03",
            "Is there chronic unexplained fatigue, weight loss, or wasting?",
        ),
        (
            "dv_04",
            "Are symptoms worsened by seasonal changes (especially rainy/cold seasons)?",
        ),
        (
            "dv_05",
            "Does the patient have recurrent skin disorders without clear cause?",
        ),
        ("dv_06", "Is there recurring fever of unknown origin?"),
        (
            "dv_07",
            "Has the patient experienced progressive weakness or loss of function over months?",
        ),
        ("dv_08", "Does the patient have recurrent joint pain or swelling?"),
        (
            "dv_09",
            "Are digestive complaints persistent without treatable cause?",
        ),
        (
            "dv_10",
            "Did the patient use Shodhana (purification) therapy that temporarily resolved symptoms?",
        ),
    ]
    .into_iter()
    .map(|(id, text)| Question {
        id: id.to_string(),
        text: text.to_string(),
    })
    .collect()
});

impl DushiVisha {
    pub const QUESTION_COUNT: usize = 10;

    pub fn questions() -> &'static [Question] {
        &QUESTIONS
    }

    /// Count "yes" answers for known question ids.
    pub fn yes_count(answers: &BTreeMap<String, bool>) -> usize {
        QUESTIONS
            .iter()
            .filter(|q| answers.get(&q.id).copied() == Some(true))
            .count()
    }

    pub fn score(answers: &BTreeMap<String, bool>) -> SeverityResult {
        classify_yes_no(Self::yes_count(answers))
    }
}
