//! Rule configuration for the evaluation pipeline.
//!
//! Every threshold and trigger phrase the rules depend on lives here
//! rather than as a literal inside a rule, so each rule can be tested
//! and tuned independently. [`OfficeConfig::standard`] reproduces the
//! production defaults.

use serde::{Deserialize, Serialize};

/// Numeric thresholds shared by the evaluators and the conflict detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleThresholds {
    /// Support backlog at or above this count means the operation is
    /// under enough strain that growth pushes become risky.
    pub backlog_pressure: u32,
    /// An agent reporting confidence strictly above this bound...
    pub overconfidence_min_confidence: f64,
    /// ...while reporting evidence strictly below this bound is flagged
    /// as overconfident.
    pub overconfidence_max_evidence: f64,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            backlog_pressure: 100,
            overconfidence_min_confidence: 0.75,
            overconfidence_max_evidence: 0.4,
        }
    }
}

/// Full rule configuration for one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficeConfig {
    pub thresholds: RuleThresholds,
    /// Phrases that, found case-insensitively in the scenario's free
    /// text under strict compliance, block the run outright.
    pub compliance_phrases: Vec<String>,
    /// Phrase that switches Sales into aggressive-discount mode.
    pub high_value_phrase: String,
}

impl OfficeConfig {
    /// Production defaults.
    pub fn standard() -> Self {
        Self {
            thresholds: RuleThresholds::default(),
            compliance_phrases: vec![
                "not fully compliant".to_string(),
                "workaround".to_string(),
                "bend the rules".to_string(),
                "bend rules".to_string(),
            ],
            high_value_phrase: "high value".to_string(),
        }
    }

    /// Override the numeric thresholds.
    pub fn with_thresholds(mut self, thresholds: RuleThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Replace the compliance trigger phrases.
    pub fn with_compliance_phrases(mut self, phrases: Vec<String>) -> Self {
        self.compliance_phrases = phrases;
        self
    }

    /// Replace the Sales high-value trigger phrase.
    pub fn with_high_value_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.high_value_phrase = phrase.into();
        self
    }

    /// Whether the given free text contains any compliance trigger
    /// phrase, case-insensitively.
    pub fn matches_compliance_phrase(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.compliance_phrases
            .iter()
            .any(|phrase| text.contains(&phrase.to_lowercase()))
    }

    /// Whether the given free text mentions high-value customers,
    /// case-insensitively.
    pub fn mentions_high_value(&self, text: &str) -> bool {
        text.to_lowercase()
            .contains(&self.high_value_phrase.to_lowercase())
    }
}

impl Default for OfficeConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_thresholds() {
        let config = OfficeConfig::standard();
        assert_eq!(config.thresholds.backlog_pressure, 100);
        assert_eq!(config.thresholds.overconfidence_min_confidence, 0.75);
        assert_eq!(config.thresholds.overconfidence_max_evidence, 0.4);
    }

    #[test]
    fn test_compliance_phrase_match_is_case_insensitive() {
        let config = OfficeConfig::standard();
        assert!(config.matches_compliance_phrase("We can find a WORKAROUND here"));
        assert!(config.matches_compliance_phrase("Let's bend the rules a bit"));
        assert!(!config.matches_compliance_phrase("Everything is fully compliant"));
    }

    #[test]
    fn test_high_value_phrase_match_is_case_insensitive() {
        let config = OfficeConfig::standard();
        assert!(config.mentions_high_value("Several High Value customers are waiting"));
        assert!(!config.mentions_high_value("Several valued customers are waiting"));
    }

    #[test]
    fn test_with_thresholds_builder() {
        let config = OfficeConfig::standard().with_thresholds(RuleThresholds {
            backlog_pressure: 10,
            overconfidence_min_confidence: 0.9,
            overconfidence_max_evidence: 0.2,
        });
        assert_eq!(config.thresholds.backlog_pressure, 10);
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = OfficeConfig::standard();
        let json = serde_json::to_string(&config).unwrap();
        let back: OfficeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
