use std::sync::LazyLock;

use regex::Regex;

// Maximal runs of Unicode letters and numbers
static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]+").unwrap());

// A lowercase letter (Ll) directly followed by an uppercase letter (Lu).
// Matches cannot overlap: no letter is both Ll and Lu.
static LOWER_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\p{Ll})(\p{Lu})").unwrap());

/// Convert an identifier to camel case.
///
/// Every maximal run of letters and digits is a word; all other characters
/// are separators and are dropped. Each word's first cased character is
/// title-cased, the rest of the word is kept as written.
///
/// `"hello_world-42"` becomes `"HelloWorld42"`.
pub fn to_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in WORD_PATTERN.find_iter(s) {
        push_title_word(&mut out, word.as_str());
    }
    out
}

/// Convert an identifier to snake case.
///
/// The input is first camel-cased, then lowercased with `_` inserted at each
/// lower-to-upper transition. Only the lowercase (Ll) and uppercase (Lu)
/// letter categories count, so modifier letters such as `ª` never start a
/// transition. Runs of capitals stay together: `"ABCWorld"` becomes
/// `"abcworld"`.
pub fn to_snake_case(s: &str) -> String {
    let camel = to_camel_case(s);
    let split = LOWER_UPPER.replace_all(&camel, "${1}_${2}");
    split.chars().flat_map(char::to_lowercase).collect()
}

fn push_title_word(out: &mut String, word: &str) {
    let mut titled = false;
    for c in word.chars() {
        if !titled && is_cased(c) {
            push_titlecase(out, c);
            titled = true;
        } else {
            out.push(c);
        }
    }
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase() || titlecase_digraph(c).is_some()
}

fn push_titlecase(out: &mut String, c: char) {
    if let Some(t) = titlecase_digraph(c) {
        out.push(t);
    } else if c == 'ß' {
        out.push_str("Ss");
    } else {
        out.extend(c.to_uppercase());
    }
}

// Letters whose titlecase form differs from their uppercase form.
fn titlecase_digraph(c: char) -> Option<char> {
    match c {
        '\u{01C4}'..='\u{01C6}' => Some('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => Some('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => Some('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => Some('\u{01F2}'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digraphs_take_titlecase_not_uppercase() {
        assert_eq!(to_camel_case("ǆungla"), "ǅungla");
        assert_eq!(to_camel_case("ǉubav_ǌiva"), "ǈubavǋiva");
    }

    #[test]
    fn sharp_s_titles_to_ss() {
        assert_eq!(to_camel_case("ßtraße"), "Sstraße");
    }

    #[test]
    fn transitions_follow_letter_categories() {
        // ª is Lowercase by property but Lo by category.
        assert_eq!(to_snake_case("xªB"), "xªb");
        assert_eq!(to_snake_case("aσΣ"), "aσ_σ");
    }

    #[test]
    fn leading_digits_skip_to_first_cased_letter() {
        assert_eq!(to_camel_case("42abc_def"), "42AbcDef");
        assert_eq!(to_camel_case("中文abc"), "中文Abc");
    }
}
