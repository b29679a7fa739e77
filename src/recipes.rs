//! Canonical recipe database model.
//!
//! The serde attributes here describe the JSON layout. The XML layout lives
//! in [`crate::xml_db`] and converts to and from these types.

use serde::{Deserialize, Deserializer, Serialize};

/// The whole database: an ordered list of recipes under the `cake` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeCollection {
    #[serde(rename = "cake", default, deserialize_with = "null_as_default")]
    pub recipes: Vec<Recipe>,
}

/// A single recipe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Cooking time, kept verbatim (e.g. "40 min").
    #[serde(rename = "time", default, deserialize_with = "null_as_default")]
    pub cook_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<Ingredient>,
}

/// One ingredient line. Count and unit are free-form text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "ingredient_name", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "ingredient_count", default, deserialize_with = "null_as_default")]
    pub count: String,
    #[serde(rename = "ingredient_unit", default, deserialize_with = "null_as_default")]
    pub unit: String,
}

/// Reads `null` as the field's empty value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
pub(crate) fn sample_collection() -> RecipeCollection {
    RecipeCollection {
        recipes: vec![
            Recipe {
                name: "Red Velvet Strawberry Cake".to_string(),
                cook_time: "45 min".to_string(),
                ingredients: vec![
                    Ingredient {
                        name: "Flour".to_string(),
                        count: "2".to_string(),
                        unit: "mugs".to_string(),
                    },
                    Ingredient {
                        name: "Strawberries".to_string(),
                        count: "8".to_string(),
                        unit: String::new(),
                    },
                ],
            },
            Recipe {
                name: "Blueberry Muffin Cake".to_string(),
                cook_time: "30 min".to_string(),
                ingredients: vec![Ingredient {
                    name: "Baking powder".to_string(),
                    count: "3".to_string(),
                    unit: "teaspoons".to_string(),
                }],
            },
        ],
    }
}
