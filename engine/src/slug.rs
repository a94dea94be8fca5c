//! Quiz slugs: `<category-slug>-<difficulty>-<amount>`, e.g.
//! `general-knowledge-medium-5`. The category portion is the category
//! name lowercased with every run of non-alphanumeric characters
//! collapsed to a single hyphen.
//!
//! Known limitation: decoding pops the last two hyphen-separated tokens
//! as difficulty and amount, so a category whose normalised name itself
//! ends in a `-<difficulty>-<number>` shaped suffix cannot be split
//! unambiguously. That is inherent to the hyphen-only format and left
//! as-is rather than changing the public slug shape.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{Category, Difficulty, QuizSettings};

lazy_static! {
    static ref NON_ALNUM_RUN: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

const FALLBACK_CATEGORY_SLUG: &str = "general";

/// Lowercases a category name and collapses every run of characters
/// outside `[a-z0-9]` to a single hyphen. The same rule is applied on
/// both the encode and the match side of decode.
pub fn normalize_category_name(name: &str) -> String {
    NON_ALNUM_RUN
        .replace_all(&name.to_lowercase(), "-")
        .into_owned()
}

/// Builds the slug for `settings`. A category id missing from the
/// directory falls back to the literal `general` instead of failing, so
/// encoding is total.
pub fn encode(settings: &QuizSettings, categories: &[Category]) -> String {
    let category_slug = categories
        .iter()
        .find(|category| category.id == settings.category)
        .map(|category| normalize_category_name(&category.name))
        .unwrap_or_else(|| FALLBACK_CATEGORY_SLUG.to_string());

    format!("{}-{}-{}", category_slug, settings.difficulty, settings.amount)
}

/// Parses a slug back into settings against the given directory.
/// Returns `None` when the slug has fewer than three parts, names no
/// known category, carries an unrecognised difficulty, or has a
/// non-numeric or non-positive amount.
pub fn decode(slug: &str, categories: &[Category]) -> Option<QuizSettings> {
    let mut parts: Vec<&str> = slug.split('-').collect();
    if parts.len() < 3 {
        return None;
    }

    let amount_raw = parts.pop()?;
    let difficulty_raw = parts.pop()?;
    // Rejoin whatever is left: category names may normalise to several
    // hyphenated words.
    let category_slug = parts.join("-");

    let category = categories
        .iter()
        .find(|category| normalize_category_name(&category.name) == category_slug)?;
    let difficulty = Difficulty::parse(difficulty_raw)?;
    let amount: u32 = amount_raw.parse().ok().filter(|amount| *amount > 0)?;

    Some(QuizSettings {
        category: category.id,
        difficulty,
        amount,
    })
}
