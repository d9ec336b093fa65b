/// Deterministic demo reports, used when no model credential is configured.
///
/// The category picks a canned profile (specifications, year range, prices); the
/// brand and model are only interpolated into the narrative text. Output depends on
/// nothing but the input, so identical requests always produce identical reports.
use research_common::api::{
    AgeEstimate, ConfidenceLevel, CurrentReplacement, ItemCategory, PricingSource,
    ResearchResult, ResultConfidence, SearchInput,
};

use crate::classifier::classify;

const DEMO_MARKER: &str = "(DEMO DATA)";

/// Canned data for one category.
pub struct ProfileTemplate {
    /// Stand-in for the model when none was given, e.g. "refrigerator".
    noun: &'static str,
    narrative: &'static str,
    specifications: &'static [&'static str],
    year: &'static str,
    age: &'static str,
    original_msrp: &'static str,
    /// (retailer, price) for the identical model, only offered when a model is known.
    exact_match: Option<(&'static str, &'static str)>,
    comparable: &'static [(&'static str, &'static str)],
}

/// A profile rendered for a particular brand and model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoProfile {
    pub description: String,
    pub specifications: Vec<String>,
    pub year: String,
    pub age: String,
    pub original_msrp: String,
    pub same_model: Vec<PricingSource>,
    pub comparable: Vec<PricingSource>,
}

static REFRIGERATOR: ProfileTemplate = ProfileTemplate {
    noun: "refrigerator",
    narrative: "is a French door refrigerator with an ice maker and water dispenser. It features a stainless steel exterior, adjustable shelving, and energy-efficient operation. This model was positioned as a mid-range to premium offering in the manufacturer's lineup.",
    specifications: &[
        "Capacity: 26.5 cu. ft. total (18.6 fridge / 7.9 freezer)",
        "Dimensions: 35.75\" W x 70\" H x 33.75\" D",
        "Energy Star certified, estimated 687 kWh/year",
        "French door configuration with bottom freezer drawer",
        "Built-in ice maker and filtered water dispenser",
    ],
    year: "2020-2021",
    age: "4-5 years old (as of 2025)",
    original_msrp: "$1,799 - $2,099",
    exact_match: Some(("Lowe's", "$1,899")),
    comparable: &[
        ("Home Depot", "$1,998"),
        ("Best Buy", "$2,099"),
        ("Lowe's", "$1,849"),
    ],
};

static WASHER: ProfileTemplate = ProfileTemplate {
    noun: "washing machine",
    narrative: "is a front-load washer with steam cleaning capability and vibration reduction technology. It offers multiple wash cycles including sanitize and allergen settings. This unit was marketed as a high-efficiency model in the mid-range price segment.",
    specifications: &[
        "Capacity: 4.5 cu. ft. drum",
        "Spin speed: Up to 1,200 RPM",
        "Energy Star certified, uses approximately 15 gallons per cycle",
        "Steam cleaning and sanitize cycle",
        "10+ wash cycles including delicates, heavy duty, and quick wash",
    ],
    year: "2021-2022",
    age: "3-4 years old (as of 2025)",
    original_msrp: "$849 - $999",
    exact_match: Some(("Home Depot", "$899")),
    comparable: &[
        ("Lowe's", "$949"),
        ("Best Buy", "$899"),
        ("Home Depot", "$999"),
    ],
};

static DRYER: ProfileTemplate = ProfileTemplate {
    noun: "dryer",
    narrative: "is an electric dryer with sensor dry technology and a large-capacity drum. It features multiple drying cycles and a wrinkle-prevention option. Positioned in the mid-range of the manufacturer's laundry lineup.",
    specifications: &[
        "Capacity: 7.4 cu. ft. drum",
        "Electric, 240V connection",
        "Sensor dry technology with moisture sensors",
        "Steam refresh cycle",
        "12 drying cycles including air dry, delicates, and heavy duty",
    ],
    year: "2021-2022",
    age: "3-4 years old (as of 2025)",
    original_msrp: "$749 - $899",
    exact_match: None,
    comparable: &[
        ("Lowe's", "$849"),
        ("Best Buy", "$799"),
        ("Home Depot", "$899"),
    ],
};

static DISHWASHER: ProfileTemplate = ProfileTemplate {
    noun: "dishwasher",
    narrative: "is a built-in dishwasher with a stainless steel tub and third rack for utensils. It features quiet operation and multiple wash cycle options. A solid mid-range model with good capacity and efficiency.",
    specifications: &[
        "Place settings: 14",
        "Noise level: 44 dBA",
        "Stainless steel interior tub",
        "Third rack for flatware and utensils",
        "Energy Star certified, estimated 269 kWh/year",
    ],
    year: "2022",
    age: "3 years old (as of 2025)",
    original_msrp: "$649 - $799",
    exact_match: Some(("Best Buy", "$749")),
    comparable: &[("Lowe's", "$699"), ("Home Depot", "$749")],
};

static TV: ProfileTemplate = ProfileTemplate {
    noun: "television",
    narrative: "is a 4K UHD Smart TV with HDR support and built-in streaming apps. It features a sleek design with thin bezels and supports both Wi-Fi and Bluetooth connectivity. Positioned as a popular mainstream model.",
    specifications: &[
        "Display: 55\" 4K UHD (3840 x 2160)",
        "HDR10 and HLG support",
        "Smart TV platform with built-in streaming apps",
        "Refresh rate: 60Hz native (120Hz motion processing)",
        "3 HDMI ports, 2 USB ports, Wi-Fi 5, Bluetooth 5.0",
    ],
    year: "2022-2023",
    age: "2-3 years old (as of 2025)",
    original_msrp: "$549 - $699",
    exact_match: None,
    comparable: &[
        ("Best Buy", "$449"),
        ("Amazon", "$429"),
        ("Walmart", "$398"),
    ],
};

static LAPTOP: ProfileTemplate = ProfileTemplate {
    noun: "laptop",
    narrative: "is a portable computer designed for everyday productivity and light multimedia use. It features a modern processor, solid-state storage, and a full HD display. A reliable mid-range option for home and office use.",
    specifications: &[
        "Processor: Intel Core i5 / AMD Ryzen 5 (11th/12th Gen equivalent)",
        "Memory: 8GB DDR4 RAM",
        "Storage: 256GB NVMe SSD",
        "Display: 15.6\" FHD (1920 x 1080) IPS",
        "Battery life: Up to 8 hours, USB-C charging supported",
    ],
    year: "2022-2023",
    age: "2-3 years old (as of 2025)",
    original_msrp: "$599 - $749",
    exact_match: None,
    comparable: &[
        ("Best Buy", "$599"),
        ("Amazon", "$549"),
        ("Walmart", "$529"),
    ],
};

// An empty noun marks the generic profile, which phrases its description differently.
static GENERIC: ProfileTemplate = ProfileTemplate {
    noun: "",
    narrative: "is an appliance or electronic device. Based on the limited information provided, this appears to be a standard consumer-grade product. More specific details require additional identifying information such as brand and model number.",
    specifications: &[
        "Category: General appliance/electronic",
        "Further specifications require brand and model number",
        "Check the item's label or manual for detailed specs",
    ],
    year: "2020-2023",
    age: "2-5 years old (estimated, as of 2025)",
    original_msrp: "$200 - $1,500 (broad estimate without model info)",
    exact_match: None,
    comparable: &[("Best Buy", "$300 - $1,200"), ("Amazon", "$250 - $1,100")],
};

/// Canned profile for a category. Categories without a dedicated entry get the
/// generic profile.
pub fn profile_for(category: ItemCategory) -> &'static ProfileTemplate {
    match category {
        ItemCategory::Refrigerator => &REFRIGERATOR,
        ItemCategory::Washer => &WASHER,
        ItemCategory::Dryer => &DRYER,
        ItemCategory::Dishwasher => &DISHWASHER,
        ItemCategory::Tv => &TV,
        ItemCategory::Laptop => &LAPTOP,
        _ => &GENERIC,
    }
}

impl ProfileTemplate {
    fn is_generic(&self) -> bool {
        self.noun.is_empty()
    }

    pub fn render(&self, brand: &str, model: &str) -> DemoProfile {
        let description = if self.is_generic() {
            let subject = if brand.is_empty() { "This item" } else { brand };
            if model.is_empty() {
                format!("{subject} {}", self.narrative)
            } else {
                format!("{subject} (model {model}) {}", self.narrative)
            }
        } else {
            let subject = if brand.is_empty() { "This" } else { brand };
            let object = if model.is_empty() { self.noun } else { model };
            format!("{subject} {object} {}", self.narrative)
        };

        let same_model = match self.exact_match {
            Some((retailer, price)) if !model.is_empty() => {
                vec![PricingSource::new(retailer, price, true)]
            }
            _ => Vec::new(),
        };

        DemoProfile {
            description,
            specifications: self.specifications.iter().map(|s| s.to_string()).collect(),
            year: self.year.to_string(),
            age: self.age.to_string(),
            original_msrp: self.original_msrp.to_string(),
            same_model,
            comparable: self
                .comparable
                .iter()
                .map(|&(retailer, price)| PricingSource::new(retailer, price, false))
                .collect(),
        }
    }
}

/// Display name for the item from whatever the user supplied.
pub fn build_item_name(
    brand: &str,
    model: &str,
    category: Option<ItemCategory>,
    description: &str,
) -> String {
    let label = category.and_then(ItemCategory::short_label);
    match (brand.is_empty(), model.is_empty(), label) {
        (false, false, _) => format!("{brand} {model}"),
        (false, true, Some(label)) => format!("{brand} {label}"),
        (false, true, None) => format!("{brand} (model unknown)"),
        (true, false, _) => format!("Model {model}"),
        (true, true, _) if !description.is_empty() => {
            let mut words = description.split_whitespace();
            let prefix: Vec<&str> = words.by_ref().take(5).collect();
            let prefix = prefix.join(" ");
            if words.next().is_some() {
                format!("{prefix}...")
            } else {
                prefix
            }
        }
        _ => "Unknown Item".to_string(),
    }
}

fn overall_confidence(brand: &str, model: &str, serial: &str, description: &str) -> ConfidenceLevel {
    if !brand.is_empty() && !model.is_empty() {
        return ConfidenceLevel::High;
    }
    let present = [brand, model, serial, description]
        .iter()
        .filter(|field| !field.is_empty())
        .count();
    if present >= 2 {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

fn confidence_explanation(level: ConfidenceLevel) -> &'static str {
    match level {
        ConfidenceLevel::High => {
            "Brand and model number were provided, allowing for specific product identification."
        }
        ConfidenceLevel::Medium => {
            "Some identifying information was provided, but results may be approximate without a full brand and model number."
        }
        ConfidenceLevel::Low => {
            "Limited information was provided. Results are estimated based on the description and category. Accuracy will improve significantly with a brand and model number."
        }
    }
}

fn suggestions(brand: &str, model: &str, serial: &str, category: Option<ItemCategory>) -> Vec<String> {
    let mut out = Vec::new();
    if brand.is_empty() {
        out.push("Provide the brand/manufacturer for more accurate identification".to_string());
    }
    if model.is_empty() {
        out.push("Provide the model number for exact specifications and pricing".to_string());
    }
    if serial.is_empty() {
        out.push("Provide the serial number for precise manufacture date".to_string());
    }
    if category.is_none() {
        out.push("Select a category to narrow down comparable models".to_string());
    }
    out
}

fn age_estimate(profile: &DemoProfile, brand: &str, model: &str, serial: &str) -> AgeEstimate {
    let (source, confidence) = if !serial.is_empty() {
        let maker = if brand.is_empty() { "manufacturer" } else { brand };
        (
            format!("Serial number format analysis per {maker} encoding standards {DEMO_MARKER}"),
            ConfidenceLevel::High,
        )
    } else {
        let confidence = if !brand.is_empty() && !model.is_empty() {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        };
        (
            format!("Based on model lineup release history and earliest online reviews {DEMO_MARKER}"),
            confidence,
        )
    };
    AgeEstimate {
        estimated_year: profile.year.clone(),
        estimated_age: profile.age.clone(),
        source,
        confidence,
    }
}

/// Build a complete demo report for the input.
pub fn generate_demo_result(input: &SearchInput) -> ResearchResult {
    let brand = input.brand.trim();
    let model = input.model.trim();
    let serial = input.serial.trim();
    let description = input.description.trim();

    let effective = input
        .category
        .unwrap_or_else(|| classify(brand, model, description));
    let profile = profile_for(effective).render(brand, model);
    let level = overall_confidence(brand, model, serial, description);

    let label = input.category.and_then(ItemCategory::short_label).unwrap_or("");
    let search_term_used = [brand, model, label]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    ResearchResult {
        item_name: build_item_name(brand, model, input.category, description),
        age_estimate: age_estimate(&profile, brand, model, serial),
        description: profile.description,
        specifications: profile.specifications,
        original_msrp: profile.original_msrp,
        current_replacement: CurrentReplacement {
            same_model: profile.same_model,
            comparable: profile.comparable,
        },
        confidence: ResultConfidence {
            level,
            explanation: confidence_explanation(level).to_string(),
            suggestions: suggestions(brand, model, serial, input.category),
        },
        search_term_used,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(brand: &str, model: &str, serial: &str, description: &str) -> SearchInput {
        SearchInput {
            brand: brand.to_string(),
            model: model.to_string(),
            serial: serial.to_string(),
            description: description.to_string(),
            category: None,
        }
    }

    #[test]
    fn test_item_name_precedence() {
        assert_eq!(
            build_item_name("Samsung", "WF45R6100AW", None, ""),
            "Samsung WF45R6100AW"
        );
        assert_eq!(
            build_item_name("Samsung", "", Some(ItemCategory::Washer), ""),
            "Samsung Washing Machine"
        );
        assert_eq!(build_item_name("Samsung", "", None, "fridge"), "Samsung (model unknown)");
        assert_eq!(
            build_item_name("Samsung", "", Some(ItemCategory::Other), ""),
            "Samsung (model unknown)"
        );
        assert_eq!(build_item_name("", "RF28R7351SR", None, ""), "Model RF28R7351SR");
        assert_eq!(
            build_item_name("", "", None, "stainless steel French door fridge with ice maker"),
            "stainless steel French door fridge..."
        );
        assert_eq!(build_item_name("", "", None, "old chest freezer"), "old chest freezer");
        assert_eq!(build_item_name("", "", Some(ItemCategory::Tv), ""), "Unknown Item");
    }

    #[test]
    fn test_confidence_precedence() {
        let high = generate_demo_result(&input("Samsung", "WF45R6100AW", "", ""));
        assert_eq!(high.confidence.level, ConfidenceLevel::High);

        let medium = generate_demo_result(&input("Samsung", "", "S/N123", ""));
        assert_eq!(medium.confidence.level, ConfidenceLevel::Medium);

        let low = generate_demo_result(&input("", "", "", "some kind of fridge"));
        assert_eq!(low.confidence.level, ConfidenceLevel::Low);
        assert!(low.confidence.explanation.starts_with("Limited information"));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let mut search = input("LG", "WM4000HWA", "", "front load washer");
        search.category = Some(ItemCategory::Washer);
        let first = serde_json::to_string(&generate_demo_result(&search)).unwrap();
        let second = serde_json::to_string(&generate_demo_result(&search)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_same_model_requires_model_number() {
        let with_model = generate_demo_result(&input("GE", "GDT665SSNSS", "", "dishwash"));
        assert_eq!(with_model.current_replacement.same_model.len(), 1);
        let exact = &with_model.current_replacement.same_model[0];
        assert_eq!(exact.retailer, "Best Buy");
        assert!(exact.is_exact_match);

        let without_model = generate_demo_result(&input("GE", "", "", "dishwash"));
        assert!(without_model.current_replacement.same_model.is_empty());
        assert_eq!(without_model.current_replacement.comparable.len(), 2);
        assert!(without_model
            .current_replacement
            .comparable
            .iter()
            .all(|p| !p.is_exact_match));
    }

    #[test]
    fn test_categories_without_profile_use_generic() {
        for category in [
            ItemCategory::Microwave,
            ItemCategory::OvenRange,
            ItemCategory::Hvac,
            ItemCategory::Camera,
            ItemCategory::Other,
        ] {
            let mut search = input("Acme", "", "", "");
            search.category = Some(category);
            let result = generate_demo_result(&search);
            assert_eq!(result.original_msrp, "$200 - $1,500 (broad estimate without model info)");
            assert_eq!(result.specifications.len(), 3);
        }
    }

    #[test]
    fn test_descriptions_interpolate_brand_and_model() {
        let rendered = profile_for(ItemCategory::Refrigerator).render("", "");
        assert!(rendered.description.starts_with("This refrigerator is a French door"));

        let rendered = profile_for(ItemCategory::Tv).render("Sony", "XR-55A80J");
        assert!(rendered.description.starts_with("Sony XR-55A80J is a 4K UHD"));

        let rendered = profile_for(ItemCategory::Other).render("Acme", "X1");
        assert!(rendered.description.starts_with("Acme (model X1) is an appliance"));

        let rendered = profile_for(ItemCategory::Other).render("", "");
        assert!(rendered.description.starts_with("This item is an appliance"));
    }

    #[test]
    fn test_explicit_category_overrides_classifier() {
        let mut search = input("Bosch", "", "", "quiet washer");
        search.category = Some(ItemCategory::Dishwasher);
        let result = generate_demo_result(&search);
        assert_eq!(result.specifications[0], "Place settings: 14");
        assert_eq!(result.item_name, "Bosch Dishwasher");
    }

    #[test]
    fn test_suggestions_and_search_term() {
        let result = generate_demo_result(&input("Samsung", "", "", ""));
        assert_eq!(
            result.confidence.suggestions,
            vec![
                "Provide the model number for exact specifications and pricing",
                "Provide the serial number for precise manufacture date",
                "Select a category to narrow down comparable models",
            ]
        );
        assert_eq!(result.search_term_used, "Samsung");

        let mut search = input("Samsung", "WF45R6100AW", "S/N123", "");
        search.category = Some(ItemCategory::Washer);
        let result = generate_demo_result(&search);
        assert!(result.confidence.suggestions.is_empty());
        assert_eq!(result.search_term_used, "Samsung WF45R6100AW Washing Machine");
    }

    #[test]
    fn test_age_source_marks_demo_data() {
        let with_serial = generate_demo_result(&input("Whirlpool", "", "C12345", "dryer"));
        assert_eq!(
            with_serial.age_estimate.source,
            "Serial number format analysis per Whirlpool encoding standards (DEMO DATA)"
        );
        assert_eq!(with_serial.age_estimate.confidence, ConfidenceLevel::High);

        let known_model = generate_demo_result(&input("Whirlpool", "WED5000DW", "", ""));
        assert!(known_model.age_estimate.source.contains("release history"));
        assert!(known_model.age_estimate.source.ends_with("(DEMO DATA)"));
        assert_eq!(known_model.age_estimate.confidence, ConfidenceLevel::Medium);

        let sparse = generate_demo_result(&input("", "", "", "dryer"));
        assert_eq!(sparse.age_estimate.confidence, ConfidenceLevel::Low);
        assert_eq!(sparse.age_estimate.estimated_year, "2021-2022");
    }
}
