use std::collections::BTreeMap;
use std::sync::LazyLock;

use agada_severity::{SeverityResult, classify_yes_no};

use crate::catalog::Question;

/// Gara Visha screening: ten yes/no questions probing concealed (often
/// deliberate) poisoning. The denominator is fixed at ten, so an unanswered
/// question scores the same as a "no".
pub struct GaraVisha;

static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
    [
        (
            "gv_01",
            "Did symptoms start after consuming a specific food or drink outside home?",
        ),
        (
            "gv_02",
            "Was there a change in taste (bitter, sour, foul) in food or water before consumption?",
        ),
        ("gv_03", "Did multiple people who ate the same food also fall ill?"),
        (
            "gv_04",
            "Did symptoms appear gradually over hours or days (not sudden onset)?",
        ),
        (
            "gv_05",
            "Has the patient been exposed to contaminated well water or stored water?",
        ),
        (
            "gv_06",
            "Has the patient consumed food with unusual smell, color, or texture?",
        ),
        (
            "gv_07",
            "Is there a history of chronic intermittent poisoning symptoms (recurrent)?",
        ),
        (
            "gv_08",
            "Is the patient in a hostile environment (disputes, family conflicts)?",
        ),
        (
            "gv_09",
            "Did the patient consume food prepared by an unfamiliar or new person?",
        ),
        (
            "gv_10",
            "Did the patient experience relief after fasting or stopping a specific food?",
        ),
    ]
    .into_iter()
    .map(|(id, text)| Question {
        id: id.to_string(),
        text: text.to_string(),
    })
    .collect()
});

impl GaraVisha {
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
