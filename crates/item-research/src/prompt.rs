/// Prompt sent to the model for a research request.
///
/// The instruction block pins the reply to the `ResearchResult` JSON layout and carries
/// the pricing and honesty rules. The rules are only asked of the model; replies are
/// not checked against them here.
use research_common::api::SearchInput;

const INTRO: &str = "You are an expert product researcher specializing in appliances and electronics. \
A user wants to research an item with the following information:";

const INSTRUCTIONS: &str = r#"Based on this information, provide a detailed research report. You MUST respond with ONLY a valid JSON object (no markdown, no code fences, no extra text) matching this exact structure:

{
  "itemName": "Full product name (Brand + Model Name + Model Number if known)",
  "description": "A brief 2-3 sentence description of the item, what it is, its key features, and its market position.",
  "specifications": [
    "Key spec 1 (e.g., capacity, dimensions, power, resolution)",
    "Key spec 2",
    "Key spec 3",
    "Key spec 4",
    "Key spec 5"
  ],
  "ageEstimate": {
    "estimatedYear": "YYYY or YYYY-YYYY range",
    "estimatedAge": "X years old (as of 2025)",
    "source": "How you determined this - e.g., 'Model number decoding per manufacturer serial format', 'First press release/review found online dated YYYY', 'Based on model lineup release history', etc.",
    "confidence": "high | medium | low"
  },
  "originalMSRP": "$X,XXX (or range like $X,XXX - $X,XXX)",
  "currentReplacement": {
    "sameModel": [
      {
        "retailer": "Retailer name (Best Buy, Lowes, Home Depot, Walmart, Amazon, or manufacturer)",
        "price": "$X,XXX",
        "isExactMatch": true
      }
    ],
    "comparable": [
      {
        "retailer": "Retailer name",
        "price": "$X,XXX",
        "isExactMatch": false
      }
    ]
  },
  "confidence": {
    "level": "high | medium | low",
    "explanation": "Why this confidence level - what info was available vs missing",
    "suggestions": ["Suggestion to improve results, e.g., 'Provide the model number for exact specifications'"]
  },
  "searchTermUsed": "The search term you would use to find this item online"
}

IMPORTANT RULES:
1. For pricing, ONLY reference major retailers: Best Buy, Lowe's, Home Depot, Walmart, Amazon, or the manufacturer's own store. Prioritize these sources in order of reliability for the product category.
2. For age estimation, explain your methodology clearly. If using serial number decoding, cite the manufacturer's known serial format. If using release dates, cite the earliest reviews or press releases you're aware of.
3. If the user provided limited information, still provide your best estimate but set confidence to "low" and explain what's missing in the suggestions array.
4. For the "sameModel" pricing array, only include entries if the exact same model (or its direct successor) is still sold. Otherwise leave it empty.
5. For "comparable" pricing, find 2-3 current models from major retailers that would serve as a like-for-like replacement.
6. All prices should be in USD.
7. Be specific and factual. Do not make up prices or specifications. If unsure, provide reasonable ranges and note the uncertainty."#;

/// Labeled lines for the non-blank input fields, in a fixed order.
fn item_info(input: &SearchInput) -> String {
    let category = input.category.map(|c| c.as_str()).unwrap_or("");
    let fields = [
        ("Brand", input.brand.trim()),
        ("Model", input.model.trim()),
        ("Serial Number", input.serial.trim()),
        ("Category", category),
        ("Description", input.description.trim()),
    ];
    fields
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| format!("{label}: {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_prompt(input: &SearchInput) -> String {
    format!("{INTRO}\n\n{}\n\n{INSTRUCTIONS}", item_info(input))
}
