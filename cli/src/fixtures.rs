//! Ingredient line golden fixture maintenance.
//!
//! Rewrites fixture expectations to match current parser output.

use anyhow::{Context, Result};
use pantry_core::ingredient_line::{parse_ingredient_line, scale_ingredient_line, ParsedLine};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A test case for ingredient line parsing
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TestCase {
    raw: String,
    expected: ParsedLine,
    #[serde(default)]
    scaled: Vec<ScaledCase>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct ScaledCase {
    factor: f64,
    line: String,
}

/// Summary of a fixture update run.
#[derive(Debug, Default, PartialEq)]
pub struct UpdateSummary {
    pub updated: usize,
    pub unchanged: usize,
}

/// Update all test fixtures to match current parser output.
///
/// Runs the parser on each test case's `raw` input and rewrites `expected`,
/// then re-renders every `scaled` entry at its recorded factor.
pub fn update_fixtures(fixtures_dir: &Path) -> Result<UpdateSummary> {
    let mut summary = UpdateSummary::default();

    let dir = fixtures_dir.join("curated");
    if !dir.exists() {
        tracing::warn!(dir = %dir.display(), "Fixture directory not found");
        return Ok(summary);
    }

    let entries = fs::read_dir(&dir)
        .with_context(|| format!("Failed to list fixtures in {}", dir.display()))?;
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read entry in {}", dir.display()))?
            .path();
        if path.extension().map(|e| e != "json").unwrap_or(true) {
            continue;
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut test_case: TestCase = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        if refresh(&mut test_case) {
            write_fixture(&path, &test_case)?;
            summary.updated += 1;
            println!("Updated: {}", path.display());
        } else {
            summary.unchanged += 1;
        }
    }

    println!(
        "\nSummary: {} updated, {} unchanged",
        summary.updated, summary.unchanged
    );

    Ok(summary)
}

fn write_fixture(path: &Path, test_case: &TestCase) -> Result<()> {
    let json = serde_json::to_string_pretty(test_case)?;
    fs::write(path, json + "\n")
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Recompute a case's expectations. Returns true if anything changed.
fn refresh(test_case: &mut TestCase) -> bool {
    let mut changed = false;

    let actual = parse_ingredient_line(&test_case.raw);
    if actual != test_case.expected {
        test_case.expected = actual;
        changed = true;
    }

    for scaled in &mut test_case.scaled {
        let line = scale_ingredient_line(&test_case.raw, scaled.factor);
        if line != scaled.line {
            scaled.line = line;
            changed = true;
        }
    }

    changed
}
