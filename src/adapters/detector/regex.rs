//! Regex-based clinical note detector
//!
//! Pattern-matches the PHI categories of the placeholder vocabulary in
//! free-text clinical notes. For each category, in vocabulary order,
//! the first detected entity is recorded as that category's removed
//! value and every literal occurrence of the entity is replaced with
//! the category marker, keeping detection consistent with positional
//! substitution at re-identification time.
//!
//! Categories can be excluded wholesale, and extra allergy terms can be
//! supplied, via [`DetectorConfig`](crate::config::DetectorConfig).

use super::{Detector, DetectorOutput};
use crate::config::DetectorConfig;
use crate::domain::errors::DetectorError;
use crate::domain::vocabulary::PlaceholderKind;
use async_trait::async_trait;
use regex::Regex;
use std::collections::HashSet;

/// Detection patterns for one vocabulary category
struct CategoryPatterns {
    kind: PlaceholderKind,
    patterns: Vec<Regex>,
}

/// Regex detector over free-text clinical notes
pub struct RegexDetector {
    categories: Vec<CategoryPatterns>,
}

impl RegexDetector {
    /// Creates a detector with the built-in clinical patterns
    pub fn new() -> Result<Self, DetectorError> {
        Self::with_config(&DetectorConfig::default())
    }

    /// Creates a detector honoring category exclusions and custom allergy terms
    pub fn with_config(config: &DetectorConfig) -> Result<Self, DetectorError> {
        let excluded: HashSet<PlaceholderKind> = config
            .excluded_categories
            .iter()
            .filter_map(|label| PlaceholderKind::from_label(label))
            .collect();

        let mut categories = Vec::new();
        for kind in PlaceholderKind::ALL {
            if excluded.contains(&kind) {
                continue;
            }
            let sources = pattern_sources(kind, &config.allergy_terms);
            let mut patterns = Vec::with_capacity(sources.len());
            for source in sources {
                let regex = Regex::new(&source).map_err(|e| DetectorError::InvalidPattern {
                    category: kind.label().to_string(),
                    message: e.to_string(),
                })?;
                patterns.push(regex);
            }
            categories.push(CategoryPatterns { kind, patterns });
        }

        Ok(Self { categories })
    }

    /// Finds the first entity for a category in the current text
    fn find_entity(category: &CategoryPatterns, text: &str) -> Option<String> {
        for pattern in &category.patterns {
            if let Some(caps) = pattern.captures(text) {
                let entity = caps
                    .get(1)
                    .or_else(|| caps.get(0))
                    .map(|m| m.as_str().trim().to_string())
                    .unwrap_or_default();
                if !entity.is_empty() && !entity.contains('\n') {
                    return Some(entity);
                }
            }
        }
        None
    }
}

#[async_trait]
impl Detector for RegexDetector {
    async fn detect(&self, document: &str) -> Result<DetectorOutput, DetectorError> {
        let mut cleansed = document.to_string();
        let mut detections: Vec<(PlaceholderKind, String)> = Vec::new();

        // Earlier categories are replaced before later ones are matched,
        // so a later capture never swallows an already-redacted value.
        for category in &self.categories {
            if let Some(entity) = Self::find_entity(category, &cleansed) {
                cleansed = cleansed.replace(&entity, category.kind.marker());
                detections.push((category.kind, entity));
            }
        }

        // Positional alignment: index i must hold marker i's value. Gaps
        // before the last consumed marker are filled with the marker's
        // own literal, which substitutes back to itself.
        let removed_values = match detections.iter().map(|(k, _)| k.ordinal()).max() {
            None => Vec::new(),
            Some(last) => {
                let mut values: Vec<String> = PlaceholderKind::ALL[..=last]
                    .iter()
                    .map(|k| k.marker().to_string())
                    .collect();
                for (kind, entity) in detections {
                    values[kind.ordinal()] = entity;
                }
                values
            }
        };

        Ok(DetectorOutput {
            cleansed_document: cleansed,
            removed_values,
        })
    }
}

/// Pattern sources for a category, most specific first
fn pattern_sources(kind: PlaceholderKind, allergy_terms: &[String]) -> Vec<String> {
    match kind {
        PlaceholderKind::Name => vec![
            r"(?m)^(?:Patient|Patient Name)\s*:\s*([A-Z][a-z]+(?:\s[A-Z][a-z]+){1,2})\s*$"
                .to_string(),
            r"(?m)^(?:Provider|Provider Name)\s*:\s*Dr\.\s*([A-Z][A-Za-z]*(?:\s[A-Za-z]+)*)\s*,\s*MD"
                .to_string(),
        ],
        PlaceholderKind::DateOfBirth => {
            vec![r"(?mi)\b(?:date of birth|dob)\s*:\s*(\d{2}/\d{2}/\d{4})".to_string()]
        }
        PlaceholderKind::MedicalRecordNumber => {
            vec![r"(?mi)\bmedical record number\s*:\s*([\w-]+)".to_string()]
        }
        PlaceholderKind::Ssn => vec![
            r"(?mi)\b(?:ssn|social security number)\s*:\s*(\d{3}-\d{2}-\d{4})".to_string(),
        ],
        PlaceholderKind::Address => vec![
            r"(?m)^[Aa]ddress\s*:\s*([\w .,]+,\s*[A-Z]{2}\s*\d{5})".to_string(),
        ],
        PlaceholderKind::Phone => vec![r"\(?\d{3}\)?[-\s]\d{3}-\d{4}".to_string()],
        PlaceholderKind::Email => {
            vec![r"\b[\w.+-]+@[\w-]+(?:\.[\w-]+)+\b".to_string()]
        }
        PlaceholderKind::Hospital => {
            vec![r"(?m)^[Hh]ospital [Nn]ame\s*:\s*(\S.*)$".to_string()]
        }
        PlaceholderKind::Allergy => {
            let mut sources: Vec<String> = allergy_terms
                .iter()
                .map(|term| format!(r"(?m)^-\s*{}.*$", regex::escape(term)))
                .collect();
            sources.push(r"(?mi)^allerg(?:y|ies)\s*:\s*(\S.*)$".to_string());
            sources
        }
        PlaceholderKind::LabResults => vec![
            r"(?m)^[Ll]ab [Rr]esults(?:\s*\(\d{2}/\d{2}/\d{4}\))?\s*:\s*(\S.*)$".to_string(),
        ],
        PlaceholderKind::Account => vec![
            r"(?mi)\b(?:medicaid account|account)\s*:\s*((?:\d{4}\s){3}\d{4})".to_string(),
        ],
    }
}
