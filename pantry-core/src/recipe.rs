//! Recipe records: validation, cooking time text, and whole-recipe scaling.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationErrors};
use crate::ingredient_line::scale_ingredients_block;

pub const MIN_TITLE_LEN: usize = 3;
pub const MIN_INGREDIENTS_LEN: usize = 10;
pub const MIN_INSTRUCTIONS_LEN: usize = 30;
pub const MIN_COOKING_TIME: u32 = 1;

/// A recipe as entered by a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: String,
    /// One ingredient per line.
    pub ingredients: String,
    pub instructions: String,
    /// Minutes.
    pub cooking_time: u32,
    /// 0 when unknown.
    #[serde(default)]
    pub servings: u32,
}

/// Check a recipe before it is stored. Reports every failing field.
pub fn validate_recipe(recipe: &Recipe) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    if recipe.title.trim().chars().count() < MIN_TITLE_LEN {
        errors.push(ValidationError::TitleTooShort(MIN_TITLE_LEN));
    }
    if recipe.category.trim().is_empty() {
        errors.push(ValidationError::MissingCategory);
    }
    if recipe.ingredients.trim().chars().count() < MIN_INGREDIENTS_LEN {
        errors.push(ValidationError::IngredientsTooShort(MIN_INGREDIENTS_LEN));
    }
    if recipe.instructions.trim().chars().count() < MIN_INSTRUCTIONS_LEN {
        errors.push(ValidationError::InstructionsTooShort(MIN_INSTRUCTIONS_LEN));
    }
    if recipe.cooking_time < MIN_COOKING_TIME {
        errors.push(ValidationError::CookingTimeTooShort(MIN_COOKING_TIME));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

/// Scale a recipe's yield: ingredient quantities, servings and cooking time.
///
/// Servings and cooking time round to the nearest whole number and never
/// drop below 1. An unknown (zero) value stays zero.
pub fn scale_recipe(recipe: &Recipe, factor: f64) -> Recipe {
    Recipe {
        ingredients: scale_ingredients_block(&recipe.ingredients, factor),
        cooking_time: scale_count(recipe.cooking_time, factor),
        servings: scale_count(recipe.servings, factor),
        ..recipe.clone()
    }
}

fn scale_count(count: u32, factor: f64) -> u32 {
    if count == 0 {
        return 0;
    }
    let scaled = (f64::from(count) * factor).round().max(1.0);
    // `as` saturates at u32::MAX
    scaled as u32
}

/// Format minutes as "1h 30m", "2h" or "45m".
pub fn format_cooking_time(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    match (hours, mins) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

static ISO_DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"PT(?:(\d+)H)?(?:(\d+)M)?").expect("ISO duration regex should compile")
});

static MINUTES_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*(?:min|minute)").expect("minutes regex should compile")
});

static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("number regex should compile"));

/// Read a cooking time in minutes from an ISO-8601 duration ("PT1H30M")
/// or free text ("45 minutes"). Returns 0 when nothing matches.
pub fn parse_cooking_time(text: &str) -> u32 {
    if text.is_empty() {
        return 0;
    }

    // A bare "PT" (e.g. inside "Adapted") has no components; keep scanning.
    let iso = ISO_DURATION
        .captures_iter(text)
        .find(|caps| caps.get(1).is_some() || caps.get(2).is_some());
    if let Some(caps) = iso {
        let hours = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok());
        let minutes = caps.get(2).and_then(|m| m.as_str().parse::<u32>().ok());
        return hours
            .unwrap_or(0)
            .saturating_mul(60)
            .saturating_add(minutes.unwrap_or(0));
    }

    MINUTES_TEXT
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

/// Read a serving count from text like "Serves 4" or "6-8 servings".
/// Takes the first number; returns 0 when there is none.
pub fn parse_servings(text: &str) -> u32 {
    FIRST_NUMBER
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}
