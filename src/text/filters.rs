use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static NON_NUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9 ]+").unwrap());

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9 ]+").unwrap());

static NON_HAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\P{Han}+").unwrap());

/// Keep ASCII digits and spaces, drop everything else.
pub fn only_numeric(s: &str) -> Cow<'_, str> {
    NON_NUMERIC.replace_all(s, "")
}

/// Keep ASCII letters, ASCII digits and spaces, drop everything else.
pub fn only_alpha_numeric(s: &str) -> Cow<'_, str> {
    NON_ALPHANUMERIC.replace_all(s, "")
}

/// Keep Han-script code points (CJK ideographs), drop everything else.
pub fn only_chinese(s: &str) -> Cow<'_, str> {
    NON_HAN.replace_all(s, "")
}
