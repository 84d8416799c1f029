//! Recipe table operations
//!
//! Sequence fields (tags, ingredients, instructions, meal types) are stored
//! as JSON-array text columns. NULL means "no data", `'[]'` means an
//! explicitly empty sequence; the two must never collapse into each other.

use anyhow::{Context, Result};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Recipe storage record
///
/// `id: None` marks a record not yet persisted; ids are assigned by the
/// database on insert and never by callers.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: Option<i64>,
    pub name: String,
    pub cook_time_minutes: Option<i64>,
    pub prep_time_minutes: Option<i64>,
    pub servings: Option<i64>,
    pub difficulty: Option<String>,
    pub cuisine: Option<String>,
    pub tags: Option<Vec<String>>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
    pub meal_type: Option<Vec<String>>,
    pub image: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<i64>,
    pub calories_per_serving: Option<i64>,
    pub user_id: Option<i64>,
}

const SELECT_COLUMNS: &str = "id, name, cook_time_minutes, prep_time_minutes, servings, \
     difficulty, cuisine, tags, ingredients, instructions, meal_type, image, \
     rating, review_count, calories_per_serving, user_id";

fn list_to_json(list: &Option<Vec<String>>) -> Result<Option<String>> {
    list.as_ref()
        .map(|v| serde_json::to_string(v).context("serialize string list"))
        .transpose()
}

fn list_from_json(text: Option<String>) -> Result<Option<Vec<String>>> {
    text.map(|t| serde_json::from_str(&t).context("parse stored string list"))
        .transpose()
}

fn row_to_recipe(row: &SqliteRow) -> Result<Recipe> {
    Ok(Recipe {
        id: Some(row.get("id")),
        name: row.get("name"),
        cook_time_minutes: row.get("cook_time_minutes"),
        prep_time_minutes: row.get("prep_time_minutes"),
        servings: row.get("servings"),
        difficulty: row.get("difficulty"),
        cuisine: row.get("cuisine"),
        tags: list_from_json(row.get("tags"))?,
        ingredients: list_from_json(row.get("ingredients"))?,
        instructions: list_from_json(row.get("instructions"))?,
        meal_type: list_from_json(row.get("meal_type"))?,
        image: row.get("image"),
        rating: row.get("rating"),
        review_count: row.get("review_count"),
        calories_per_serving: row.get("calories_per_serving"),
        user_id: row.get("user_id"),
    })
}

/// Insert a batch of records in a single transaction.
///
/// Returns the number of rows actually inserted.
pub async fn insert_all(pool: &SqlitePool, records: &[Recipe]) -> Result<usize> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0usize;

    for record in records {
        sqlx::query(
            r#"
            INSERT INTO recipes (
                name, cook_time_minutes, prep_time_minutes, servings,
                difficulty, cuisine, tags, ingredients, instructions,
                meal_type, image, rating, review_count, calories_per_serving,
                user_id
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.name)
        .bind(record.cook_time_minutes)
        .bind(record.prep_time_minutes)
        .bind(record.servings)
        .bind(&record.difficulty)
        .bind(&record.cuisine)
        .bind(list_to_json(&record.tags)?)
        .bind(list_to_json(&record.ingredients)?)
        .bind(list_to_json(&record.instructions)?)
        .bind(list_to_json(&record.meal_type)?)
        .bind(&record.image)
        .bind(record.rating)
        .bind(record.review_count)
        .bind(record.calories_per_serving)
        .bind(record.user_id)
        .execute(&mut *tx)
        .await?;

        inserted += 1;
    }

    tx.commit().await?;
    Ok(inserted)
}

/// Delete every recipe row. Returns the number of rows removed.
pub async fn delete_all(pool: &SqlitePool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM recipes").execute(pool).await?;
    Ok(result.rows_affected())
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Recipe>> {
    let row = sqlx::query(&format!(
        "SELECT {SELECT_COLUMNS} FROM recipes WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(row_to_recipe).transpose()
}

pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Recipe>> {
    let rows = sqlx::query(&format!("SELECT {SELECT_COLUMNS} FROM recipes"))
        .fetch_all(pool)
        .await?;

    rows.iter().map(row_to_recipe).collect()
}

/// Case-insensitive substring search across name, cuisine, tags, and
/// ingredients (instructions and meal types are not searched).
///
/// The four conditions are OR-combined over a single table scan, so a
/// record matching several fields still appears exactly once. Ordering is
/// whatever SQLite returns.
///
/// Case folding is ASCII-only on both sides: SQLite's `lower()` leaves
/// non-ASCII characters untouched, so the pattern is folded the same way.
/// Non-ASCII characters match case-sensitively.
pub async fn search(pool: &SqlitePool, term: &str) -> Result<Vec<Recipe>> {
    let pattern = format!("%{}%", term.to_ascii_lowercase());

    let rows = sqlx::query(&format!(
        r#"
        SELECT {SELECT_COLUMNS} FROM recipes
        WHERE lower(name) LIKE ?
           OR lower(coalesce(cuisine, '')) LIKE ?
           OR EXISTS (
               SELECT 1 FROM json_each(coalesce(tags, '[]'))
               WHERE lower(json_each.value) LIKE ?
           )
           OR EXISTS (
               SELECT 1 FROM json_each(coalesce(ingredients, '[]'))
               WHERE lower(json_each.value) LIKE ?
           )
        "#
    ))
    .bind(&pattern)
    .bind(&pattern)
    .bind(&pattern)
    .bind(&pattern)
    .fetch_all(pool)
    .await?;

    rows.iter().map(row_to_recipe).collect()
}
