//! Ingredient line parsing and scaling.
//!
//! Splits a free-text line (e.g., "2 cups flour") into quantity, unit and
//! name, and rewrites it with the quantity multiplied by a scale factor.
//!
//! Parsing never fails. Text that doesn't start with a usable number is kept
//! as the name, and scaling such a line leaves it untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A parsed ingredient line.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ParsedLine {
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub name: String,
}

impl ParsedLine {
    /// Same line with the quantity multiplied by `factor`.
    /// Lines without a quantity are returned as-is.
    pub fn scaled(self, factor: f64) -> ParsedLine {
        ParsedLine {
            quantity: self.quantity.map(|q| q * factor),
            ..self
        }
    }
}

/// Renders `"{qty} {unit} {name}"`, leaving out whatever is missing.
impl fmt::Display for ParsedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quantity = self.quantity.map(format_quantity);
        let parts = [quantity.as_deref(), self.unit.as_deref(), Some(self.name.as_str())];

        let mut first = true;
        for part in parts.into_iter().flatten().filter(|p| !p.is_empty()) {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(part)?;
            first = false;
        }
        Ok(())
    }
}

/// Parse a single ingredient line.
///
/// - A leading run of digits, `.`, `/` and whitespace is the quantity token.
///   It needs at least one digit to count.
/// - A token containing `/` is a fraction split on the first `/`. Mixed
///   numbers like "1 1/2" don't parse, nor does a zero denominator; the
///   quantity is then `None` and the rest of the line is the name.
/// - One alphabetic word after the quantity is the unit, as long as
///   something follows it. "3 eggs" has no unit: a lone trailing word is
///   kept as the name rather than taken as the unit, so the name is never
///   emptied. Both readings scale to the same text.
pub fn parse_ingredient_line(line: &str) -> ParsedLine {
    let line = line.trim();
    if line.is_empty() {
        return ParsedLine::default();
    }

    let Some((token, rest)) = split_numeric_prefix(line) else {
        return ParsedLine {
            quantity: None,
            unit: None,
            name: line.to_string(),
        };
    };

    let Some(quantity) = parse_quantity(token) else {
        tracing::debug!(line, token, "Unparseable quantity, keeping text as name");
        return ParsedLine {
            quantity: None,
            unit: None,
            name: rest.trim().to_string(),
        };
    };

    let (unit, name) = split_unit(rest);
    ParsedLine {
        quantity: Some(quantity),
        unit: unit.map(str::to_string),
        name: name.to_string(),
    }
}

/// Parse every non-blank line of a block.
pub fn parse_ingredients_block(text: &str) -> Vec<ParsedLine> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_ingredient_line)
        .collect()
}

/// Multiply the quantity of a line by `factor` and re-render it.
///
/// A line with no quantity comes back exactly as given.
pub fn scale_ingredient_line(line: &str, factor: f64) -> String {
    let parsed = parse_ingredient_line(line);
    if parsed.quantity.is_none() {
        return line.to_string();
    }
    parsed.scaled(factor).to_string()
}

/// Scale every non-blank line of a block. Blank lines are dropped.
pub fn scale_ingredients_block(text: &str, factor: f64) -> String {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| scale_ingredient_line(line, factor))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a quantity with at most two decimals and no trailing zeros.
///
/// `3.0` → "3", `1.5` → "1.5", `0.333…` → "0.33".
pub fn format_quantity(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };

    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Split off the leading quantity token.
/// Returns `None` when the line doesn't start with a number.
fn split_numeric_prefix(s: &str) -> Option<(&str, &str)> {
    let end = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '/' || c.is_whitespace()))
        .unwrap_or(s.len());
    let prefix = &s[..end];

    if !prefix.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    Some((prefix.trim(), &s[end..]))
}

/// Parse "2", "0.5", ".5" or "1/3".
fn parse_quantity(token: &str) -> Option<f64> {
    let value = match token.split_once('/') {
        Some((numerator, denominator)) => {
            let numerator: f64 = numerator.trim().parse().ok()?;
            let denominator: f64 = denominator.trim().parse().ok()?;
            if denominator == 0.0 {
                return None;
            }
            numerator / denominator
        }
        None => token.parse().ok()?,
    };

    value.is_finite().then_some(value)
}

/// Split a unit word off the front of the remainder.
/// Returns (unit, name).
fn split_unit(rest: &str) -> (Option<&str>, &str) {
    let rest = rest.trim();

    match rest.split_once(char::is_whitespace) {
        Some((word, name)) if word.chars().all(|c| c.is_ascii_alphabetic()) => {
            (Some(word), name.trim())
        }
        _ => (None, rest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(quantity: Option<f64>, unit: Option<&str>, name: &str) -> ParsedLine {
        ParsedLine {
            quantity,
            unit: unit.map(str::to_string),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_simple_line() {
        assert_eq!(
            parse_ingredient_line("2 cups flour"),
            parsed(Some(2.0), Some("cups"), "flour")
        );
    }

    #[test]
    fn test_fraction() {
        assert_eq!(
            parse_ingredient_line("1/2 tsp salt"),
            parsed(Some(0.5), Some("tsp"), "salt")
        );
    }

    #[test]
    fn test_no_quantity() {
        assert_eq!(parse_ingredient_line("salt"), parsed(None, None, "salt"));
        assert_eq!(
            parse_ingredient_line("  Salt to taste "),
            parsed(None, None, "Salt to taste")
        );
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(parse_ingredient_line(""), parsed(None, None, ""));
        assert_eq!(parse_ingredient_line("   \t "), parsed(None, None, ""));
    }

    #[test]
    fn test_decimal_quantity() {
        assert_eq!(
            parse_ingredient_line("2.5 oz cream cheese"),
            parsed(Some(2.5), Some("oz"), "cream cheese")
        );
        assert_eq!(
            parse_ingredient_line(".5 cup milk"),
            parsed(Some(0.5), Some("cup"), "milk")
        );
    }

    #[test]
    fn test_unit_without_space() {
        assert_eq!(
            parse_ingredient_line("200g dark chocolate"),
            parsed(Some(200.0), Some("g"), "dark chocolate")
        );
    }

    #[test]
    fn test_single_word_after_quantity_is_name() {
        assert_eq!(parse_ingredient_line("3 eggs"), parsed(Some(3.0), None, "eggs"));
    }

    #[test]
    fn test_non_alphabetic_word_is_not_unit() {
        assert_eq!(
            parse_ingredient_line("2 (14 oz) cans tomatoes"),
            parsed(Some(2.0), None, "(14 oz) cans tomatoes")
        );
        assert_eq!(
            parse_ingredient_line("1 extra-large egg"),
            parsed(Some(1.0), None, "extra-large egg")
        );
    }

    #[test]
    fn test_zero_denominator_degrades() {
        assert_eq!(
            parse_ingredient_line("1/0 cup flour"),
            parsed(None, None, "cup flour")
        );
    }

    #[test]
    fn test_mixed_number_is_rejected() {
        assert_eq!(
            parse_ingredient_line("1 1/2 cups water"),
            parsed(None, None, "cups water")
        );
    }

    #[test]
    fn test_malformed_number_degrades() {
        assert_eq!(
            parse_ingredient_line("1.2.3 cups rice"),
            parsed(None, None, "cups rice")
        );
    }

    #[test]
    fn test_slash_without_digits_is_name() {
        assert_eq!(
            parse_ingredient_line("/ garnish"),
            parsed(None, None, "/ garnish")
        );
    }

    #[test]
    fn test_multi_word_unit_takes_first_word() {
        assert_eq!(
            parse_ingredient_line("8 fluid ounces milk"),
            parsed(Some(8.0), Some("fluid"), "ounces milk")
        );
    }

    #[test]
    fn test_scale_identity() {
        assert_eq!(scale_ingredient_line("2 cups flour", 1.0), "2 cups flour");
    }

    #[test]
    fn test_scale_to_whole_number() {
        assert_eq!(scale_ingredient_line("2 cups flour", 1.5), "3 cups flour");
        assert_eq!(scale_ingredient_line("1/3 cup sugar", 3.0), "1 cup sugar");
    }

    #[test]
    fn test_scale_fractional_result() {
        assert_eq!(scale_ingredient_line("1 cup milk", 1.5), "1.5 cup milk");
        assert_eq!(scale_ingredient_line("1 cup milk", 1.0 / 3.0), "0.33 cup milk");
    }

    #[test]
    fn test_scale_without_unit() {
        assert_eq!(scale_ingredient_line("3 eggs", 2.0), "6 eggs");
    }

    #[test]
    fn test_scale_without_quantity_is_noop() {
        assert_eq!(scale_ingredient_line("salt", 2.0), "salt");
        assert_eq!(scale_ingredient_line("  pepper  ", 2.0), "  pepper  ");
        assert_eq!(scale_ingredient_line("1/0 cup flour", 2.0), "1/0 cup flour");
    }

    #[test]
    fn test_scale_normalizes_whitespace() {
        assert_eq!(scale_ingredient_line("  2   cups   flour ", 1.0), "2 cups flour");
    }

    #[test]
    fn test_scale_block_drops_blank_lines() {
        let block = "2 cups flour\n\n1/2 tsp salt\n   \nsalt to taste\n";
        assert_eq!(
            scale_ingredients_block(block, 2.0),
            "4 cups flour\n1 tsp salt\nsalt to taste"
        );
    }

    #[test]
    fn test_scale_block_crlf() {
        assert_eq!(
            scale_ingredients_block("1 cup rice\r\n2 cups water\r\n", 0.5),
            "0.5 cup rice\n1 cups water"
        );
    }

    #[test]
    fn test_scale_empty_block() {
        assert_eq!(scale_ingredients_block("", 2.0), "");
        assert_eq!(scale_ingredients_block("\n\n", 2.0), "");
    }

    #[test]
    fn test_parse_block() {
        let results = parse_ingredients_block("2 cups flour\n\n1 cup sugar\n3 eggs");
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].name, "flour");
        assert_eq!(results[1].name, "sugar");
        assert_eq!(results[2].name, "eggs");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(2.0), "2");
        assert_eq!(format_quantity(1.5), "1.5");
        assert_eq!(format_quantity(1.25), "1.25");
        assert_eq!(format_quantity(2.999), "3");
        assert_eq!(format_quantity(10.0), "10");
        assert_eq!(format_quantity(100.10), "100.1");
        assert_eq!(format_quantity(-0.001), "0");
        assert_eq!(format_quantity(0.0), "0");
    }

    #[test]
    fn test_display_skips_missing_parts() {
        assert_eq!(parsed(Some(2.0), None, "eggs").to_string(), "2 eggs");
        assert_eq!(parsed(None, None, "salt").to_string(), "salt");
        assert_eq!(parsed(Some(1.0), Some("cup"), "").to_string(), "1 cup");
    }
}
