// ABOUTME: Catalog dish record as read from the verified dish store
// ABOUTME: Missing optional fields deserialize to empty values and degrade to defaults later
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A verified dish from the catalog store
///
/// Only `name` is meaningful for every record. Origin and category are treated
/// as empty strings when absent, which simply makes them match nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    /// Catalog identifier
    #[serde(default)]
    pub id: String,
    /// Display name
    pub name: String,
    /// Category (plat, dessert, entrée, ...)
    #[serde(default)]
    pub category: String,
    /// Culinary origin (Marocaine, Française, ...)
    #[serde(default)]
    pub origin: String,
    /// Free-text cooking time ("35 min")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<String>,
    /// Calories per serving
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Hosted image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Recipe text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<String>,
}

impl Dish {
    /// Create a dish with the given name and classification
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            origin: origin.into(),
            ..Self::default()
        }
    }

    /// Set calories
    #[must_use]
    pub fn with_calories(mut self, calories: f64) -> Self {
        self.calories = Some(calories);
        self
    }

    /// Set cooking time
    #[must_use]
    pub fn with_cooking_time(mut self, cooking_time: impl Into<String>) -> Self {
        self.cooking_time = Some(cooking_time.into());
        self
    }

    /// Set image URL
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Set recipe text
    #[must_use]
    pub fn with_recipe(mut self, recipe: impl Into<String>) -> Self {
        self.recipe = Some(recipe.into());
        self
    }

    /// Identity used to recognise the same dish across a box and a swap
    ///
    /// Falls back to the name for records without a catalog id.
    #[must_use]
    pub fn identity(&self) -> &str {
        if self.id.is_empty() {
            &self.name
        } else {
            &self.id
        }
    }
}
