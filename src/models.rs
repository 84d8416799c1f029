//! Transfer representations shared with the external API and HTTP clients
//!
//! `RecipeDto` is the camelCase JSON shape used both for our own responses
//! and for decoding the external API's payload. Sequence fields distinguish
//! "absent" (`None`, omitted from JSON) from "empty" (`Some(vec![])`,
//! serialized as `[]`); both round-trip losslessly through storage.

use serde::{Deserialize, Serialize};

use crate::db::recipes::Recipe;

/// Recipe transfer shape (camelCase, external-API compatible)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time_minutes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time_minutes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_per_serving: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

/// External API response envelope
///
/// The pagination metadata (total/skip/limit) is unused by ingestion but
/// kept for compatibility with the upstream payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalApiResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipes: Option<Vec<RecipeDto>>,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub skip: i64,
    #[serde(default)]
    pub limit: i64,
}

impl From<Recipe> for RecipeDto {
    fn from(record: Recipe) -> Self {
        Self {
            id: record.id,
            name: record.name,
            cook_time_minutes: record.cook_time_minutes,
            prep_time_minutes: record.prep_time_minutes,
            servings: record.servings,
            difficulty: record.difficulty,
            cuisine: record.cuisine,
            tags: record.tags,
            ingredients: record.ingredients,
            instructions: record.instructions,
            meal_type: record.meal_type,
            image: record.image,
            rating: record.rating,
            review_count: record.review_count,
            calories_per_serving: record.calories_per_serving,
            user_id: record.user_id,
        }
    }
}

impl RecipeDto {
    /// Convert to a new storage record.
    ///
    /// The external id is dropped; storage assigns its own on insert.
    pub fn into_record(self) -> Recipe {
        Recipe {
            id: None,
            name: self.name,
            cook_time_minutes: self.cook_time_minutes,
            prep_time_minutes: self.prep_time_minutes,
            servings: self.servings,
            difficulty: self.difficulty,
            cuisine: self.cuisine,
            tags: self.tags,
            ingredients: self.ingredients,
            instructions: self.instructions,
            meal_type: self.meal_type,
            image: self.image,
            rating: self.rating,
            review_count: self.review_count,
            calories_per_serving: self.calories_per_serving,
            user_id: self.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Recipe {
        Recipe {
            id: Some(7),
            name: "Italian Pasta".to_string(),
            cook_time_minutes: Some(20),
            prep_time_minutes: Some(10),
            servings: Some(4),
            difficulty: Some("Easy".to_string()),
            cuisine: Some("Italian".to_string()),
            tags: Some(vec!["pasta".to_string(), "dinner".to_string()]),
            ingredients: Some(vec!["pasta".to_string(), "cheese".to_string()]),
            instructions: Some(vec![]),
            meal_type: None,
            image: Some("https://example.com/pasta.png".to_string()),
            rating: Some(4.5),
            review_count: Some(12),
            calories_per_serving: Some(350),
            user_id: Some(3),
        }
    }

    #[test]
    fn record_to_dto_round_trip_preserves_every_field() {
        let record = sample_record();
        let dto = RecipeDto::from(record.clone());
        let back = dto.into_record();

        // The id is dropped on the way back (storage assigns new ids); every
        // other field survives, including empty-but-present sequences
        assert_eq!(back.id, None);
        assert_eq!(back.name, record.name);
        assert_eq!(back.cook_time_minutes, record.cook_time_minutes);
        assert_eq!(back.prep_time_minutes, record.prep_time_minutes);
        assert_eq!(back.servings, record.servings);
        assert_eq!(back.difficulty, record.difficulty);
        assert_eq!(back.cuisine, record.cuisine);
        assert_eq!(back.tags, record.tags);
        assert_eq!(back.ingredients, record.ingredients);
        assert_eq!(back.instructions, Some(vec![]));
        assert_eq!(back.meal_type, None);
        assert_eq!(back.image, record.image);
        assert_eq!(back.rating, record.rating);
        assert_eq!(back.review_count, record.review_count);
        assert_eq!(back.calories_per_serving, record.calories_per_serving);
        assert_eq!(back.user_id, record.user_id);
    }

    #[test]
    fn dto_json_uses_camel_case_and_omits_absent_fields() {
        let dto = RecipeDto::from(sample_record());
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["cookTimeMinutes"], 20);
        assert_eq!(json["prepTimeMinutes"], 10);
        assert_eq!(json["caloriesPerServing"], 350);
        assert_eq!(json["reviewCount"], 12);
        assert_eq!(json["userId"], 3);
        // Empty-but-present sequence serializes as []
        assert_eq!(json["instructions"], serde_json::json!([]));
        // Absent sequence is omitted entirely
        assert!(json.get("mealType").is_none());
    }

    #[test]
    fn dto_json_round_trip_distinguishes_absent_from_empty() {
        let dto = RecipeDto::from(sample_record());
        let text = serde_json::to_string(&dto).unwrap();
        let back: RecipeDto = serde_json::from_str(&text).unwrap();

        assert_eq!(back, dto);
        assert_eq!(back.instructions, Some(vec![]));
        assert_eq!(back.meal_type, None);
    }

    #[test]
    fn external_response_decodes_upstream_payload() {
        let payload = r#"{
            "recipes": [
                {"id": 1, "name": "Tacos", "cuisine": "Mexican", "mealType": ["Lunch"]}
            ],
            "total": 50, "skip": 0, "limit": 0
        }"#;

        let response: ExternalApiResponse = serde_json::from_str(payload).unwrap();
        let recipes = response.recipes.unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Tacos");
        assert_eq!(recipes[0].meal_type, Some(vec!["Lunch".to_string()]));
        assert_eq!(response.total, 50);
    }

    #[test]
    fn external_response_tolerates_missing_recipes_field() {
        let response: ExternalApiResponse =
            serde_json::from_str(r#"{"total": 0, "skip": 0, "limit": 0}"#).unwrap();
        assert!(response.recipes.is_none());
    }
}
