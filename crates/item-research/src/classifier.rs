/// Keyword classifier that guesses an item category from free text.
///
/// Rules are evaluated in order and the first match wins. Categories overlap in
/// ordinary text ("dishwasher" contains "washer"), so the order is part of the
/// contract and must not be rearranged.
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use research_common::api::ItemCategory;

const RULES: &[(&str, ItemCategory)] = &[
    (r"fridge|refrigerat|freezer", ItemCategory::Refrigerator),
    (r"wash(?:er|ing)", ItemCategory::Washer),
    (r"dry(?:er|ing)", ItemCategory::Dryer),
    (r"dishwash", ItemCategory::Dishwasher),
    (r"oven|range|stove|cooktop", ItemCategory::OvenRange),
    (r"microwave", ItemCategory::Microwave),
    (r"hvac|air\s*condition|furnace|heat\s*pump", ItemCategory::Hvac),
    (r"water\s*heat", ItemCategory::WaterHeater),
    (r"tv|television|oled|qled", ItemCategory::Tv),
    (r"laptop|notebook|chromebook", ItemCategory::Laptop),
    (r"desktop|pc|tower", ItemCategory::Desktop),
    (r"tablet|ipad", ItemCategory::Tablet),
    (r"phone|iphone|galaxy\s*s", ItemCategory::Smartphone),
    (r"speaker|soundbar|audio|headphone", ItemCategory::Audio),
    (r"camera|dslr|mirrorless", ItemCategory::Camera),
];

static COMPILED: LazyLock<Vec<(Regex, ItemCategory)>> = LazyLock::new(|| {
    RULES
        .iter()
        .map(|&(pattern, category)| {
            let re = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .expect("valid regex");
            (re, category)
        })
        .collect()
});

/// Classify an item from its brand, model and description.
///
/// Total: text that matches no rule is `ItemCategory::Other`.
pub fn classify(brand: &str, model: &str, description: &str) -> ItemCategory {
    let text = format!("{brand} {model} {description}");
    COMPILED
        .iter()
        .find(|(re, _)| re.is_match(&text))
        .map(|&(_, category)| category)
        .unwrap_or(ItemCategory::Other)
}
