use crate::error::InstrumentError;
use crate::scoring::{Domain, ScoreEntry, ScoreRange, ScoreType, Subscale, ValidationError};
use crate::severity::{MAX_TOTAL, ScreeningResult, SeverityBand};
use crate::Instrument;

pub const ITEM_COUNT: usize = 9;

const ITEM_RANGE: ScoreRange = ScoreRange {
    min: 0.0,
    max: 3.0,
    step: Some(1.0),
};

/// Item ids and prompts, in questionnaire order.
pub const ITEMS: [(&str, &str); ITEM_COUNT] = [
    ("interest", "Little interest or pleasure in doing things"),
    ("mood", "Feeling down, depressed, or hopeless"),
    ("sleep", "Trouble falling or staying asleep, or sleeping too much"),
    ("energy", "Feeling tired or having little energy"),
    ("appetite", "Poor appetite or overeating"),
    (
        "self_worth",
        "Feeling bad about yourself, or that you are a failure or have let yourself or your family down",
    ),
    (
        "concentration",
        "Trouble concentrating on things, such as reading or watching television",
    ),
    (
        "psychomotor",
        "Moving or speaking noticeably slowly, or being unusually fidgety or restless",
    ),
    (
        "self_harm",
        "Thoughts that you would be better off dead, or of hurting yourself in some way",
    ),
];

const SELF_HARM_ITEM: usize = 8;

/// PHQ-9: Patient Health Questionnaire, nine items.
/// Each item is rated 0–3 over the last two weeks. Total 0–27.
pub struct Phq9;

impl Instrument for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            let subscales = ITEMS
                .iter()
                .map(|(id, name)| Subscale {
                    id: id.to_string(),
                    name: name.to_string(),
                    score_type: ScoreType::Rating,
                    range: ITEM_RANGE,
                    description: Some(
                        "0 = not at all, 1 = several days, 2 = more than half the days, 3 = nearly every day"
                            .to_string(),
                    ),
                })
                .collect();

            vec![Domain {
                id: "phq9_items".to_string(),
                name: "PHQ-9 Items".to_string(),
                subscales,
                composite_score_type: Some(ScoreType::Raw),
                composite_range: Some(ScoreRange {
                    min: 0.0,
                    max: MAX_TOTAL as f64,
                    step: Some(1.0),
                }),
                description: Some(
                    "0-4: none-minimal, 5-9: mild, 10-14: moderate, 15-19: moderately severe, 20-27: severe"
                        .to_string(),
                ),
            }]
        });
        &DOMAINS
    }
}

impl Phq9 {
    /// Score a keyed submission, e.g. from a form that posts item ids.
    pub fn score(&self, entries: &[ScoreEntry]) -> Result<ScreeningResult, InstrumentError> {
        for (index, entry) in entries.iter().enumerate() {
            if !ITEMS.iter().any(|(id, _)| *id == entry.subscale_id) {
                return Err(InstrumentError::UnknownSubscale {
                    instrument_id: self.id().to_string(),
                    subscale_id: entry.subscale_id.clone(),
                });
            }
            if entries[..index]
                .iter()
                .any(|earlier| earlier.subscale_id == entry.subscale_id)
            {
                return Err(InstrumentError::DuplicateItem {
                    instrument_id: self.id().to_string(),
                    subscale_id: entry.subscale_id.clone(),
                });
            }
        }

        if let Some(error) = self.validate_scores(entries).into_iter().next() {
            return Err(error.into());
        }

        let mut responses = Vec::with_capacity(ITEM_COUNT);
        for (id, _) in ITEMS {
            let entry = entries
                .iter()
                .find(|e| e.subscale_id == id)
                .ok_or_else(|| InstrumentError::MissingItem {
                    instrument_id: self.id().to_string(),
                    subscale_id: id.to_string(),
                })?;
            // Validated above: an exact whole number in 0..=3.
            responses.push(entry.value as i32);
        }

        classify_screening(&responses)
    }
}

/// A validated set of nine PHQ-9 answers in questionnaire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreeningResponse([u8; ITEM_COUNT]);

impl ScreeningResponse {
    /// Rejects anything other than exactly nine answers in 0..=3. Values are
    /// never clamped: a clamped answer would shift the severity band.
    pub fn new(responses: &[i32]) -> Result<Self, InstrumentError> {
        if responses.len() != ITEM_COUNT {
            return Err(InstrumentError::InvalidResponseCount {
                expected: ITEM_COUNT,
                actual: responses.len(),
            });
        }

        let mut items = [0u8; ITEM_COUNT];
        for (index, (&value, slot)) in responses.iter().zip(items.iter_mut()).enumerate() {
            if !ITEM_RANGE.contains(value as f64) {
                return Err(item_out_of_range(index, value).into());
            }
            *slot = value as u8;
        }
        Ok(Self(items))
    }

    pub fn items(&self) -> &[u8; ITEM_COUNT] {
        &self.0
    }

    pub fn total(&self) -> u8 {
        self.0.iter().sum()
    }

    pub fn classify(&self) -> ScreeningResult {
        let total_score = self.total();
        let severity = SeverityBand::from_total(total_score);
        ScreeningResult {
            total_score,
            severity,
            recommendations: severity
                .recommendations()
                .iter()
                .map(|r| r.to_string())
                .collect(),
            safety_followup: self.0[SELF_HARM_ITEM] > 0,
        }
    }
}

/// Validate and classify nine raw PHQ-9 answers.
pub fn classify_screening(responses: &[i32]) -> Result<ScreeningResult, InstrumentError> {
    Ok(ScreeningResponse::new(responses)?.classify())
}

fn item_out_of_range(index: usize, value: i32) -> ValidationError {
    let (id, _) = ITEMS[index];
    ValidationError {
        subscale_id: id.to_string(),
        value: value as f64,
        expected_range: ITEM_RANGE,
        score_type: ScoreType::Rating,
        message: format!(
            "PHQ-9: item {} ({id}) score {value} is outside range [{}, {}]",
            index + 1,
            ITEM_RANGE.min,
            ITEM_RANGE.max,
        ),
    }
}
