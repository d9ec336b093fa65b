use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// The closed set of item categories a user can pick or the classifier can infer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemCategory {
    Refrigerator,
    Washer,
    Dryer,
    Dishwasher,
    OvenRange,
    Microwave,
    Hvac,
    WaterHeater,
    Tv,
    Laptop,
    Desktop,
    Tablet,
    Smartphone,
    Audio,
    Camera,
    Other,
}

impl ItemCategory {
    /// Every category, in the order the form lists them.
    pub const ALL: [ItemCategory; 16] = [
        ItemCategory::Refrigerator,
        ItemCategory::Washer,
        ItemCategory::Dryer,
        ItemCategory::Dishwasher,
        ItemCategory::OvenRange,
        ItemCategory::Microwave,
        ItemCategory::Hvac,
        ItemCategory::WaterHeater,
        ItemCategory::Tv,
        ItemCategory::Laptop,
        ItemCategory::Desktop,
        ItemCategory::Tablet,
        ItemCategory::Smartphone,
        ItemCategory::Audio,
        ItemCategory::Camera,
        ItemCategory::Other,
    ];

    /// Wire value, e.g. "oven-range".
    pub fn as_str(self) -> &'static str {
        match self {
            ItemCategory::Refrigerator => "refrigerator",
            ItemCategory::Washer => "washer",
            ItemCategory::Dryer => "dryer",
            ItemCategory::Dishwasher => "dishwasher",
            ItemCategory::OvenRange => "oven-range",
            ItemCategory::Microwave => "microwave",
            ItemCategory::Hvac => "hvac",
            ItemCategory::WaterHeater => "water-heater",
            ItemCategory::Tv => "tv",
            ItemCategory::Laptop => "laptop",
            ItemCategory::Desktop => "desktop",
            ItemCategory::Tablet => "tablet",
            ItemCategory::Smartphone => "smartphone",
            ItemCategory::Audio => "audio",
            ItemCategory::Camera => "camera",
            ItemCategory::Other => "other",
        }
    }

    /// Label shown in the category picker.
    pub fn label(self) -> &'static str {
        match self {
            ItemCategory::Refrigerator => "Refrigerator / Freezer",
            ItemCategory::Washer => "Washing Machine",
            ItemCategory::Dryer => "Dryer",
            ItemCategory::Dishwasher => "Dishwasher",
            ItemCategory::OvenRange => "Oven / Range / Stove",
            ItemCategory::Microwave => "Microwave",
            ItemCategory::Hvac => "HVAC / Air Conditioner",
            ItemCategory::WaterHeater => "Water Heater",
            ItemCategory::Tv => "Television",
            ItemCategory::Laptop => "Laptop",
            ItemCategory::Desktop => "Desktop Computer",
            ItemCategory::Tablet => "Tablet",
            ItemCategory::Smartphone => "Smartphone",
            ItemCategory::Audio => "Audio / Speakers",
            ItemCategory::Camera => "Camera",
            ItemCategory::Other => "Other",
        }
    }

    /// Picker group: "Appliances", "Electronics" or "Other".
    pub fn group(self) -> &'static str {
        match self {
            ItemCategory::Refrigerator
            | ItemCategory::Washer
            | ItemCategory::Dryer
            | ItemCategory::Dishwasher
            | ItemCategory::OvenRange
            | ItemCategory::Microwave
            | ItemCategory::Hvac
            | ItemCategory::WaterHeater => "Appliances",
            ItemCategory::Tv
            | ItemCategory::Laptop
            | ItemCategory::Desktop
            | ItemCategory::Tablet
            | ItemCategory::Smartphone
            | ItemCategory::Audio
            | ItemCategory::Camera => "Electronics",
            ItemCategory::Other => "Other",
        }
    }

    /// Noun used inside item names and search terms ("Samsung Washing Machine").
    ///
    /// `Other` has no noun of its own.
    pub fn short_label(self) -> Option<&'static str> {
        let label = match self {
            ItemCategory::Refrigerator => "Refrigerator",
            ItemCategory::Washer => "Washing Machine",
            ItemCategory::Dryer => "Dryer",
            ItemCategory::Dishwasher => "Dishwasher",
            ItemCategory::OvenRange => "Oven/Range",
            ItemCategory::Microwave => "Microwave",
            ItemCategory::Hvac => "HVAC System",
            ItemCategory::WaterHeater => "Water Heater",
            ItemCategory::Tv => "Television",
            ItemCategory::Laptop => "Laptop",
            ItemCategory::Desktop => "Desktop Computer",
            ItemCategory::Tablet => "Tablet",
            ItemCategory::Smartphone => "Smartphone",
            ItemCategory::Audio => "Audio System",
            ItemCategory::Camera => "Camera",
            ItemCategory::Other => return None,
        };
        Some(label)
    }

    pub fn option(self) -> CategoryOption {
        CategoryOption {
            value: self,
            label: self.label().to_string(),
            group: self.group().to_string(),
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for ItemCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ItemCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCategory(wanted.to_string()))
    }
}

/// One entry of the category picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub value: ItemCategory,
    pub label: String,
    pub group: String,
}

/// What the user typed into the search form. Every field may be blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchInput {
    pub brand: String,
    pub model: String,
    pub serial: String,
    pub description: String,
    #[serde(deserialize_with = "blank_category_as_none")]
    pub category: Option<ItemCategory>,
}

impl SearchInput {
    /// True when at least one of brand, model, serial or description is non-blank.
    ///
    /// Category alone does not identify an item.
    pub fn has_identifying_field(&self) -> bool {
        [&self.brand, &self.model, &self.serial, &self.description]
            .iter()
            .any(|field| !field.trim().is_empty())
    }
}

fn blank_category_as_none<'de, D>(deserializer: D) -> Result<Option<ItemCategory>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<ItemCategory>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    #[default]
    Low,
}

impl ConfidenceLevel {
    /// Lenient parse used on model output: case and surrounding whitespace are ignored.
    pub fn parse_lenient(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Some(ConfidenceLevel::High),
            "medium" => Some(ConfidenceLevel::Medium),
            "low" => Some(ConfidenceLevel::Low),
            _ => None,
        }
    }
}

/// A retailer price quote. `price` is free-form currency text and is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSource {
    pub retailer: String,
    pub price: String,
    /// `true` for the identical model, `false` for a comparable substitute.
    pub is_exact_match: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl PricingSource {
    pub fn new(retailer: impl Into<String>, price: impl Into<String>, is_exact_match: bool) -> Self {
        Self {
            retailer: retailer.into(),
            price: price.into(),
            is_exact_match,
            url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeEstimate {
    pub estimated_year: String,
    pub estimated_age: String,
    /// Free-text description of how the age was worked out.
    pub source: String,
    pub confidence: ConfidenceLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentReplacement {
    pub same_model: Vec<PricingSource>,
    pub comparable: Vec<PricingSource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultConfidence {
    pub level: ConfidenceLevel,
    pub explanation: String,
    pub suggestions: Vec<String>,
}

/// The report returned for one research request. Always fully populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchResult {
    pub item_name: String,
    pub description: String,
    pub specifications: Vec<String>,
    pub age_estimate: AgeEstimate,
    #[serde(rename = "originalMSRP")]
    pub original_msrp: String,
    pub current_replacement: CurrentReplacement,
    pub confidence: ResultConfidence,
    pub search_term_used: String,
}
