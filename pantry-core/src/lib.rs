pub mod error;
pub mod ingredient_line;
pub mod recipe;

pub use error::{ValidationError, ValidationErrors};
pub use ingredient_line::{
    format_quantity, parse_ingredient_line, parse_ingredients_block, scale_ingredient_line,
    scale_ingredients_block, ParsedLine,
};
pub use recipe::{
    format_cooking_time, parse_cooking_time, parse_servings, scale_recipe, validate_recipe,
    Recipe,
};
