use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// Anything outside letters, marks, numbers, punctuation, symbols and space
// separators: controls, format characters, line/paragraph separators,
// unassigned and private-use code points.
static NON_GRAPHIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{M}\p{N}\p{P}\p{S}\p{Zs}]+").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CleanOptions {
    #[serde(default)]
    pub lowercase: bool,
}

impl CleanOptions {
    pub fn lowercase() -> Self {
        Self { lowercase: true }
    }
}

/// Trim surrounding whitespace, optionally lowercase, then drop every
/// character that is not graphic.
pub fn clean_string(s: &str, lowercase: bool) -> String {
    clean_string_with(s, &CleanOptions { lowercase })
}

pub fn clean_string_with(s: &str, options: &CleanOptions) -> String {
    let trimmed = s.trim();

    let cased = if options.lowercase {
        trimmed.to_lowercase()
    } else {
        trimmed.to_string()
    };

    remove_non_graphic(&cased).into_owned()
}

fn remove_non_graphic(s: &str) -> Cow<'_, str> {
    NON_GRAPHIC.replace_all(s, "")
}
