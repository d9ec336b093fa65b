/// Coerces an arbitrary JSON value into a complete `ResearchResult`.
///
/// Every field is rebuilt key by key. Missing, empty or wrongly typed values fall back
/// to a fixed placeholder, and sequence fields that are not arrays become empty, so a
/// partial or misshapen model reply still yields a well-formed result.
use serde_json::Value;

use research_common::api::{
    AgeEstimate, ConfidenceLevel, CurrentReplacement, PricingSource, ResearchResult,
    ResultConfidence,
};

const UNKNOWN: &str = "Unknown";

pub fn normalize(raw: &Value) -> ResearchResult {
    let age = &raw["ageEstimate"];
    let replacement = &raw["currentReplacement"];
    let confidence = &raw["confidence"];

    ResearchResult {
        item_name: text_or(&raw["itemName"], "Unknown Item"),
        description: text_or(&raw["description"], "No description available."),
        specifications: string_list(&raw["specifications"]),
        age_estimate: AgeEstimate {
            estimated_year: text_or(&age["estimatedYear"], UNKNOWN),
            estimated_age: text_or(&age["estimatedAge"], UNKNOWN),
            source: text_or(&age["source"], "Unable to determine"),
            confidence: level(&age["confidence"]),
        },
        original_msrp: text_or(&raw["originalMSRP"], UNKNOWN),
        current_replacement: CurrentReplacement {
            same_model: pricing_list(&replacement["sameModel"], true),
            comparable: pricing_list(&replacement["comparable"], false),
        },
        confidence: ResultConfidence {
            level: level(&confidence["level"]),
            explanation: text_or(&confidence["explanation"], "Limited information provided."),
            suggestions: string_list(&confidence["suggestions"]),
        },
        search_term_used: text_or(&raw["searchTermUsed"], ""),
    }
}

// `Value`'s index operator yields `Null` for missing keys and non-objects, which lands
// in the default branch of every helper below.

fn text_or(value: &Value, default: &str) -> String {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
        .to_string()
}

fn level(value: &Value) -> ConfidenceLevel {
    value
        .as_str()
        .and_then(ConfidenceLevel::parse_lenient)
        .unwrap_or_default()
}

fn string_list(value: &Value) -> Vec<String> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .collect()
}

fn pricing_list(value: &Value, exact_by_default: bool) -> Vec<PricingSource> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .filter(|item| item.is_object())
        .map(|item| PricingSource {
            retailer: text_or(&item["retailer"], "Unknown retailer"),
            price: text_or(&item["price"], UNKNOWN),
            is_exact_match: item["isExactMatch"].as_bool().unwrap_or(exact_by_default),
            url: item["url"]
                .as_str()
                .filter(|u| !u.is_empty())
                .map(str::to_string),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn assert_fully_populated(value: &Value) {
        for key in [
            "itemName",
            "description",
            "originalMSRP",
            "searchTermUsed",
        ] {
            assert!(value[key].is_string(), "{key} should be a string");
        }
        assert!(value["specifications"].is_array());
        for key in ["estimatedYear", "estimatedAge", "source", "confidence"] {
            assert!(value["ageEstimate"][key].is_string(), "ageEstimate.{key}");
        }
        assert!(value["currentReplacement"]["sameModel"].is_array());
        assert!(value["currentReplacement"]["comparable"].is_array());
        assert!(value["confidence"]["level"].is_string());
        assert!(value["confidence"]["explanation"].is_string());
        assert!(value["confidence"]["suggestions"].is_array());
    }

    #[test]
    fn test_empty_object_gets_all_defaults() {
        let result = normalize(&json!({}));
        assert_eq!(result.item_name, "Unknown Item");
        assert_eq!(result.description, "No description available.");
        assert!(result.specifications.is_empty());
        assert_eq!(result.age_estimate.estimated_year, "Unknown");
        assert_eq!(result.age_estimate.estimated_age, "Unknown");
        assert_eq!(result.age_estimate.source, "Unable to determine");
        assert_eq!(result.age_estimate.confidence, ConfidenceLevel::Low);
        assert_eq!(result.original_msrp, "Unknown");
        assert!(result.current_replacement.same_model.is_empty());
        assert!(result.current_replacement.comparable.is_empty());
        assert_eq!(result.confidence.level, ConfidenceLevel::Low);
        assert_eq!(result.confidence.explanation, "Limited information provided.");
        assert!(result.confidence.suggestions.is_empty());
        assert_eq!(result.search_term_used, "");

        assert_fully_populated(&serde_json::to_value(&result).unwrap());
    }

    #[test]
    fn test_non_object_roots_are_tolerated() {
        for raw in [json!(null), json!(42), json!("text"), json!([1, 2, 3])] {
            let result = normalize(&raw);
            assert_eq!(result.item_name, "Unknown Item");
            assert_fully_populated(&serde_json::to_value(&result).unwrap());
        }
    }

    #[test]
    fn test_wrong_types_fall_back() {
        let raw = json!({
            "itemName": 123,
            "description": "",
            "specifications": "not a list",
            "ageEstimate": "2019",
            "originalMSRP": null,
            "currentReplacement": {"sameModel": {"retailer": "Amazon"}, "comparable": 7},
            "confidence": {"level": "very high", "suggestions": {"a": 1}},
            "searchTermUsed": ["x"]
        });
        let result = normalize(&raw);
        assert_eq!(result.item_name, "Unknown Item");
        assert_eq!(result.description, "No description available.");
        assert!(result.specifications.is_empty());
        assert_eq!(result.age_estimate.estimated_year, "Unknown");
        assert_eq!(result.original_msrp, "Unknown");
        assert!(result.current_replacement.same_model.is_empty());
        assert!(result.current_replacement.comparable.is_empty());
        assert_eq!(result.confidence.level, ConfidenceLevel::Low);
        assert!(result.confidence.suggestions.is_empty());
        assert_eq!(result.search_term_used, "");
        assert_fully_populated(&serde_json::to_value(&result).unwrap());
    }

    #[test]
    fn test_well_formed_reply_passes_through() {
        let raw = json!({
            "itemName": "Samsung WF45R6100AW Front Load Washer",
            "description": "A 4.5 cu. ft. front load washer.",
            "specifications": ["4.5 cu. ft.", "1,200 RPM", 27],
            "ageEstimate": {
                "estimatedYear": "2019-2020",
                "estimatedAge": "5 years old (as of 2025)",
                "source": "Serial number decoding",
                "confidence": "High"
            },
            "originalMSRP": "$899",
            "currentReplacement": {
                "sameModel": [
                    {"retailer": "Best Buy", "price": "$749", "isExactMatch": true, "url": "https://example.com/wf45"}
                ],
                "comparable": [
                    {"retailer": "Lowe's", "price": "$799", "isExactMatch": false},
                    {"retailer": "Home Depot", "price": "$829"},
                    "junk"
                ]
            },
            "confidence": {
                "level": "medium",
                "explanation": "Model number supplied.",
                "suggestions": ["Add the serial number", null]
            },
            "searchTermUsed": "Samsung WF45R6100AW"
        });
        let result = normalize(&raw);
        assert_eq!(result.item_name, "Samsung WF45R6100AW Front Load Washer");
        assert_eq!(result.specifications, vec!["4.5 cu. ft.", "1,200 RPM", "27"]);
        assert_eq!(result.age_estimate.confidence, ConfidenceLevel::High);
        assert_eq!(result.current_replacement.same_model.len(), 1);
        assert_eq!(
            result.current_replacement.same_model[0].url.as_deref(),
            Some("https://example.com/wf45")
        );
        assert_eq!(result.current_replacement.comparable.len(), 2);
        assert!(!result.current_replacement.comparable[1].is_exact_match);
        assert_eq!(result.confidence.level, ConfidenceLevel::Medium);
        assert_eq!(result.confidence.suggestions, vec!["Add the serial number"]);
        assert_eq!(result.search_term_used, "Samsung WF45R6100AW");
    }

    #[test]
    fn test_pricing_entries_are_rebuilt() {
        let raw = json!({
            "currentReplacement": {
                "sameModel": [{"price": 899}],
                "comparable": [{"retailer": "Walmart", "isExactMatch": "yes", "url": ""}]
            }
        });
        let result = normalize(&raw);
        let exact = &result.current_replacement.same_model[0];
        assert_eq!(exact.retailer, "Unknown retailer");
        assert_eq!(exact.price, "Unknown");
        assert!(exact.is_exact_match);

        let comparable = &result.current_replacement.comparable[0];
        assert_eq!(comparable.retailer, "Walmart");
        assert!(!comparable.is_exact_match);
        assert_eq!(comparable.url, None);
    }
}
