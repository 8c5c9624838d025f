//! Batch item validation against the limit table.
//!
//! Items are processed independently and in input order; a malformed item
//! produces an inline error result instead of failing the whole batch.
//! "Character" means one Unicode scalar value (`str::chars`).

use serde::Serialize;
use serde_json::Value;

use crate::domain::limits;

/// Result for a single item in a validation batch.
///
/// Uses an untagged enum for cleaner JSON structure (no discriminator field).
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ItemCheck {
    /// The item was structurally sound and was compared against its limit.
    Checked {
        index: usize,
        text: String,
        #[serde(rename = "type")]
        field_type: String,
        character_count: u32,
        character_limit: u32,
        is_valid: bool,
        overage: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        recommendation: Option<String>,
    },
    /// The item was malformed or used a type unknown to the platform.
    Error {
        index: usize,
        text: String,
        #[serde(rename = "type")]
        field_type: String,
        error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        supported_types: Option<Vec<&'static str>>,
    },
}

impl ItemCheck {
    /// Returns true if this result carries an item-level error.
    pub fn is_error(&self) -> bool {
        matches!(self, ItemCheck::Error { .. })
    }

    fn is_within_limit(&self) -> bool {
        matches!(self, ItemCheck::Checked { is_valid: true, .. })
    }
}

/// Aggregate counts over a batch of item results.
#[derive(Debug, Serialize)]
pub struct ValidationSummary {
    pub total_items: usize,
    pub valid_items: usize,
    pub invalid_items: usize,
    pub error_items: usize,
    pub all_valid: bool,
}

/// A structurally valid item that exceeded its limit.
#[derive(Debug, Serialize)]
pub struct Violation {
    pub text: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub overage: u32,
    pub recommendation: String,
}

/// Validates a batch of raw items against the limit table.
///
/// The caller must have verified `platform` against
/// [`limits::is_supported_platform`]. Result order and indices mirror the
/// input.
pub fn check_items(platform: &str, items: &[Value]) -> Vec<ItemCheck> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| check_item(platform, index, item))
        .collect()
}

/// Validates one item: field presence, limit lookup, length comparison.
fn check_item(platform: &str, index: usize, item: &Value) -> ItemCheck {
    let text = string_field(item, "text");
    let field_type = string_field(item, "type");

    let (text, field_type) = match (text, field_type) {
        (Some(text), Some(field_type)) => (text, field_type),
        (text, field_type) => {
            return ItemCheck::Error {
                index,
                text: text.unwrap_or_default().to_string(),
                field_type: field_type.unwrap_or("unknown").to_string(),
                error: "Item missing 'text' or 'type' field".to_string(),
                supported_types: None,
            };
        }
    };

    let character_count = text.chars().count() as u32;

    let Some(character_limit) = limits::limit_for(platform, field_type) else {
        return ItemCheck::Error {
            index,
            text: text.to_string(),
            field_type: field_type.to_string(),
            error: format!("Unsupported type '{field_type}' for platform '{platform}'"),
            supported_types: Some(limits::supported_types(platform)),
        };
    };

    let overage = character_count.saturating_sub(character_limit);

    ItemCheck::Checked {
        index,
        text: text.to_string(),
        field_type: field_type.to_string(),
        character_count,
        character_limit,
        is_valid: overage == 0,
        overage,
        recommendation: (overage > 0).then(|| reduction_hint(overage)),
    }
}

/// Extracts a string field; absent, non-string, and empty values all count
/// as missing.
fn string_field<'a>(item: &'a Value, key: &str) -> Option<&'a str> {
    item.get(key)?.as_str().filter(|s| !s.is_empty())
}

fn reduction_hint(overage: u32) -> String {
    if overage == 1 {
        "Reduce by 1 character".to_string()
    } else {
        format!("Reduce by {overage} characters")
    }
}

/// Aggregates item results into summary counts.
///
/// Errored items are excluded from both the valid and invalid counts;
/// `all_valid` requires zero invalid and zero errored items.
pub fn summarize(results: &[ItemCheck]) -> ValidationSummary {
    let error_items = results.iter().filter(|r| r.is_error()).count();
    let valid_items = results.iter().filter(|r| r.is_within_limit()).count();
    let invalid_items = results.len() - valid_items - error_items;

    ValidationSummary {
        total_items: results.len(),
        valid_items,
        invalid_items,
        error_items,
        all_valid: invalid_items == 0 && error_items == 0,
    }
}

/// Extracts the violations list: structurally valid items over their limit.
///
/// Returns `None` when nothing exceeded its limit, so the field is omitted
/// from the response entirely.
pub fn collect_violations(results: &[ItemCheck]) -> Option<Vec<Violation>> {
    let violations: Vec<Violation> = results
        .iter()
        .filter_map(|result| match result {
            ItemCheck::Checked {
                text,
                field_type,
                overage,
                recommendation: Some(recommendation),
                ..
            } => Some(Violation {
                text: text.clone(),
                field_type: field_type.clone(),
                overage: *overage,
                recommendation: recommendation.clone(),
            }),
            _ => None,
        })
        .collect();

    if violations.is_empty() {
        None
    } else {
        Some(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(text: &str, field_type: &str) -> Value {
        json!({ "text": text, "type": field_type })
    }

    #[test]
    fn test_item_within_limit() {
        let results = check_items("google_ads", &[item("Buy now", "headline")]);

        let ItemCheck::Checked {
            index,
            character_count,
            character_limit,
            is_valid,
            overage,
            recommendation,
            ..
        } = &results[0]
        else {
            panic!("expected a checked result");
        };

        assert_eq!(*index, 0);
        assert_eq!(*character_count, 7);
        assert_eq!(*character_limit, 30);
        assert!(*is_valid);
        assert_eq!(*overage, 0);
        assert!(recommendation.is_none());
    }

    #[test]
    fn test_item_over_limit_reports_exact_overage() {
        let text = "a".repeat(33);
        let results = check_items("google_ads", &[item(&text, "headline")]);

        let ItemCheck::Checked {
            character_count,
            is_valid,
            overage,
            recommendation,
            ..
        } = &results[0]
        else {
            panic!("expected a checked result");
        };

        assert_eq!(*character_count, 33);
        assert!(!*is_valid);
        assert_eq!(*overage, 3);
        assert_eq!(recommendation.as_deref(), Some("Reduce by 3 characters"));
    }

    #[test]
    fn test_overage_of_one_uses_singular_recommendation() {
        let text = "a".repeat(31);
        let results = check_items("google_ads", &[item(&text, "headline")]);

        let ItemCheck::Checked { recommendation, .. } = &results[0] else {
            panic!("expected a checked result");
        };

        assert_eq!(recommendation.as_deref(), Some("Reduce by 1 character"));
    }

    #[test]
    fn test_characters_are_unicode_scalar_values() {
        // 31 scalar values, more than 31 bytes
        let text = "é".repeat(31);
        let results = check_items("google_ads", &[item(&text, "headline")]);

        let ItemCheck::Checked {
            character_count,
            overage,
            ..
        } = &results[0]
        else {
            panic!("expected a checked result");
        };

        assert_eq!(*character_count, 31);
        assert_eq!(*overage, 1);
    }

    #[test]
    fn test_missing_text_field_is_an_error() {
        let results = check_items("google_ads", &[json!({ "type": "headline" })]);

        let ItemCheck::Error {
            text,
            field_type,
            error,
            supported_types,
            ..
        } = &results[0]
        else {
            panic!("expected an error result");
        };

        assert_eq!(text, "");
        assert_eq!(field_type, "headline");
        assert_eq!(error, "Item missing 'text' or 'type' field");
        assert!(supported_types.is_none());
    }

    #[test]
    fn test_missing_type_echoes_unknown() {
        let results = check_items("google_ads", &[json!({ "text": "hello" })]);

        let ItemCheck::Error {
            text, field_type, ..
        } = &results[0]
        else {
            panic!("expected an error result");
        };

        assert_eq!(text, "hello");
        assert_eq!(field_type, "unknown");
    }

    #[test]
    fn test_empty_and_non_string_fields_count_as_missing() {
        let results = check_items(
            "google_ads",
            &[
                json!({ "text": "", "type": "headline" }),
                json!({ "text": 123, "type": "headline" }),
            ],
        );

        assert!(results[0].is_error());
        assert!(results[1].is_error());
    }

    #[test]
    fn test_unsupported_type_lists_platform_types() {
        let results = check_items("google_ads", &[item("hello", "primary_text")]);

        let ItemCheck::Error {
            error,
            supported_types,
            ..
        } = &results[0]
        else {
            panic!("expected an error result");
        };

        assert_eq!(
            error,
            "Unsupported type 'primary_text' for platform 'google_ads'"
        );
        let supported = supported_types.as_ref().expect("supported types listed");
        assert!(supported.contains(&"headline"));
        assert!(supported.contains(&"description"));
    }

    #[test]
    fn test_summarize_partitions_results() {
        let over = "a".repeat(40);
        let results = check_items(
            "google_ads",
            &[
                item("fine", "headline"),
                item(&over, "headline"),
                json!({ "text": "orphan" }),
                item("fine too", "unsupported_type"),
            ],
        );
        let summary = summarize(&results);

        assert_eq!(summary.total_items, 4);
        assert_eq!(summary.valid_items, 1);
        assert_eq!(summary.invalid_items, 1);
        assert_eq!(summary.error_items, 2);
        assert!(!summary.all_valid);
    }

    #[test]
    fn test_all_valid_requires_no_errors() {
        let results = check_items(
            "google_ads",
            &[item("fine", "headline"), json!({ "text": "orphan" })],
        );
        let summary = summarize(&results);

        assert_eq!(summary.invalid_items, 0);
        assert!(!summary.all_valid);
    }

    #[test]
    fn test_empty_batch_is_all_valid() {
        let summary = summarize(&[]);

        assert_eq!(summary.total_items, 0);
        assert!(summary.all_valid);
    }

    #[test]
    fn test_violations_absent_when_within_limits() {
        let results = check_items("google_ads", &[item("fine", "headline")]);
        assert!(collect_violations(&results).is_none());
    }

    #[test]
    fn test_violations_exclude_error_items() {
        let over = "a".repeat(35);
        let results = check_items(
            "google_ads",
            &[
                item(&over, "headline"),
                item("hello", "primary_text"),
                json!({}),
            ],
        );

        let violations = collect_violations(&results).expect("one violation expected");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].overage, 5);
        assert_eq!(violations[0].recommendation, "Reduce by 5 characters");
    }
}
