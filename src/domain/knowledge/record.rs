//! Condition knowledge record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{QuestionNumber, QUESTION_BANK_SIZE};

/// Everything the knowledge base knows about one condition.
///
/// The record carries the educational content shown when a condition is
/// suggested, plus the bank of yes/no questions used to interview for it.
/// The bank always holds exactly [`QUESTION_BANK_SIZE`] entries; a record
/// with a different bank size fails deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionRecord {
    pub description: String,
    #[serde(default)]
    pub causes: Vec<String>,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub treatment: Vec<String>,
    pub questions: [String; QUESTION_BANK_SIZE],
}

impl ConditionRecord {
    /// Creates a record from its parts.
    pub fn new(
        description: impl Into<String>,
        causes: Vec<String>,
        symptoms: Vec<String>,
        treatment: Vec<String>,
        questions: [String; QUESTION_BANK_SIZE],
    ) -> Self {
        Self {
            description: description.into(),
            causes,
            symptoms,
            treatment,
            questions,
        }
    }

    /// Returns the bank question with the given number.
    pub fn question(&self, number: QuestionNumber) -> &str {
        &self.questions[number.zero_based()]
    }

    /// Renders the causes as a bulleted block.
    pub fn causes_text(&self) -> String {
        bullet_section(&self.causes)
    }

    /// Renders the symptoms as a bulleted block.
    pub fn symptoms_text(&self) -> String {
        bullet_section(&self.symptoms)
    }

    /// Renders the treatment steps as a bulleted block.
    pub fn treatment_text(&self) -> String {
        bullet_section(&self.treatment)
    }

    /// Renders the full record as display-ready text.
    ///
    /// The description comes first, then each non-empty list section under
    /// its heading. Empty sections are omitted.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.description);
        for (heading, items) in [
            ("Causes", &self.causes),
            ("Symptoms", &self.symptoms),
            ("Treatment", &self.treatment),
        ] {
            if items.is_empty() {
                continue;
            }
            out.push_str("\n\n");
            out.push_str(heading);
            out.push_str(":\n");
            out.push_str(&bullet_section(items));
        }
        out
    }
}

/// One ` - item` line per entry, each newline-terminated.
fn bullet_section(items: &[String]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(" - ");
        out.push_str(item);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acne_record() -> ConditionRecord {
        ConditionRecord::new(
            "A common condition where hair follicles clog with oil and dead skin.",
            vec!["Excess oil production".to_string(), "Bacteria".to_string()],
            vec!["Whiteheads".to_string(), "Pimples".to_string()],
            vec!["Topical retinoids".to_string()],
            [
                "Is the affected area oily?".to_string(),
                "Do you see whiteheads or blackheads?".to_string(),
                "Did the spots appear around puberty or stress?".to_string(),
                "Are the spots concentrated on the face or back?".to_string(),
            ],
        )
    }

    #[test]
    fn question_lookup_is_one_based() {
        let record = acne_record();
        assert_eq!(
            record.question(QuestionNumber::FIRST),
            "Is the affected area oily?"
        );
        assert_eq!(
            record.question(QuestionNumber::LAST),
            "Are the spots concentrated on the face or back?"
        );
    }

    #[test]
    fn bullet_sections_render_one_line_per_item() {
        let record = acne_record();
        assert_eq!(
            record.causes_text(),
            " - Excess oil production\n - Bacteria\n"
        );
        assert_eq!(record.treatment_text(), " - Topical retinoids\n");
    }

    #[test]
    fn empty_section_renders_empty_string() {
        let mut record = acne_record();
        record.causes.clear();
        assert_eq!(record.causes_text(), "");
    }

    #[test]
    fn summary_lists_description_then_sections() {
        let record = acne_record();
        let summary = record.summary();

        assert!(summary.starts_with("A common condition"));
        let causes_at = summary.find("Causes:").unwrap();
        let symptoms_at = summary.find("Symptoms:").unwrap();
        let treatment_at = summary.find("Treatment:").unwrap();
        assert!(causes_at < symptoms_at && symptoms_at < treatment_at);
        assert!(summary.contains(" - Whiteheads\n"));
    }

    #[test]
    fn summary_omits_empty_sections() {
        let mut record = acne_record();
        record.symptoms.clear();
        let summary = record.summary();
        assert!(!summary.contains("Symptoms:"));
        assert!(summary.contains("Causes:"));
    }

    #[test]
    fn record_deserializes_from_yaml() {
        let yaml = r#"
description: Dry, itchy, inflamed patches of skin.
causes:
  - Immune system overreaction
symptoms:
  - Itching
  - Red patches
treatment:
  - Moisturizers
questions:
  - Is the area itchy?
  - Is the skin dry or flaky?
  - Does it flare up periodically?
  - Is it in skin folds such as elbows or knees?
"#;
        let record: ConditionRecord = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(record.symptoms.len(), 2);
        assert_eq!(
            record.question(QuestionNumber::FIRST),
            "Is the area itchy?"
        );
    }

    #[test]
    fn record_with_wrong_bank_size_fails_deserialization() {
        let yaml = r#"
description: Broken record.
questions:
  - Only one question?
"#;
        assert!(serde_yaml::from_str::<ConditionRecord>(yaml).is_err());
    }

    #[test]
    fn record_with_missing_lists_defaults_them_empty() {
        let yaml = r#"
description: Minimal record.
questions:
  - One?
  - Two?
  - Three?
  - Four?
"#;
        let record: ConditionRecord = serde_yaml::from_str(yaml).unwrap();
        assert!(record.causes.is_empty());
        assert!(record.symptoms.is_empty());
        assert!(record.treatment.is_empty());
    }
}
