// ABOUTME: Shared constants for meal scoring, box layout, and keyword matching
// ABOUTME: Keyword families are shared by scoring and explanations so reasons match rankings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Score sentinels for hard exclusion
pub mod scores {
    /// Score returned when an allergy token matches a dish
    pub const HARD_EXCLUSION: f64 = -9999.0;

    /// Any score at or below this value is hard-excluded
    pub const HARD_EXCLUSION_THRESHOLD: f64 = -9000.0;

    /// Whether a score marks a dish as forbidden
    #[must_use]
    pub fn is_hard_excluded(score: f64) -> bool {
        score <= HARD_EXCLUSION_THRESHOLD
    }
}

/// Defaults applied when catalog fields are missing
pub mod defaults {
    /// Calories assumed by scoring when a dish has none
    pub const SCORING_CALORIES: f64 = 500.0;

    /// Calories displayed on a box meal when the dish has none
    pub const BOX_CALORIES: f64 = 450.0;

    /// Cooking time displayed when the dish has none
    pub const COOKING_TIME: &str = "20 min";

    /// Base URL for generated placeholder images
    pub const PLACEHOLDER_IMAGE_BASE: &str = "https://placehold.co/600x400?text=";
}

/// Keyword families matched (lowercase, substring) against free text
pub mod keywords {
    /// Objective keywords for the weight-loss family
    pub const WEIGHT_LOSS: &[&str] = &["poids", "minceur", "perte"];

    /// Objective keywords for the mass-gain family
    pub const MASS_GAIN: &[&str] = &["masse", "muscle", "prise"];

    /// Objective keywords for the vegetarian/vegan family
    pub const VEGETARIAN: &[&str] = &[
        "végétarien",
        "vegetarien",
        "végétalien",
        "vegetalien",
        "vegan",
        "végé",
        "vege",
    ];

    /// Dish name keywords that indicate meat
    pub const MEAT: &[&str] = &[
        "poulet", "boeuf", "bœuf", "agneau", "porc", "veau", "dinde", "canard", "viande",
        "jambon", "lardon", "merguez", "saucisse", "steak",
    ];

    /// Name/category keywords that indicate a high-protein dish
    pub const HIGH_PROTEIN: &[&str] = &[
        "poulet",
        "boeuf",
        "bœuf",
        "dinde",
        "thon",
        "saumon",
        "oeuf",
        "œuf",
        "lentille",
        "pois chiche",
        "protéine",
        "proteine",
        "viande",
    ];

    /// Whether `haystack` (already lowercase) contains any keyword
    #[must_use]
    pub fn contains_any(haystack: &str, family: &[&str]) -> bool {
        family.iter().any(|keyword| haystack.contains(keyword))
    }
}

/// Separators used to tokenize allergy and preference free text (`[,;|\s]+`)
#[must_use]
pub fn is_token_separator(c: char) -> bool {
    matches!(c, ',' | ';' | '|') || c.is_whitespace()
}

/// Lowercase, non-empty tokens of a free-text list ("arachide; Lait, gluten")
///
/// Callers match tokens as raw substrings, so "lait" also hits "laitue".
/// Word-boundary matching is an open followup.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(is_token_separator)
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}
