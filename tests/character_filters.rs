use std::borrow::Cow;

use text_core::text::{only_alpha_numeric, only_chinese, only_numeric};

#[test]
fn only_numeric_keeps_ascii_digits_and_spaces() {
    assert_eq!(only_numeric("a1 b2-3"), "1 23");
    assert_eq!(only_numeric("+86 (010) 1234-5678"), "86 010 12345678");
    assert_eq!(only_numeric("no digits"), " ");
    assert_eq!(only_numeric(""), "");
}

#[test]
fn only_numeric_ignores_non_ascii_digits() {
    assert_eq!(only_numeric("١٢٣"), "");
    assert_eq!(only_numeric("１２３"), "");
    assert_eq!(only_numeric("4\u{a0}2"), "42");
}

#[test]
fn only_alpha_numeric_keeps_ascii_letters_digits_and_spaces() {
    assert_eq!(only_alpha_numeric("Héllo, wörld 42!"), "Hllo wrld 42");
    assert_eq!(only_alpha_numeric("snake_case-id"), "snakecaseid");
    assert_eq!(only_alpha_numeric("tab\tnewline\n"), "tabnewline");
}

#[test]
fn only_chinese_keeps_han_ideographs() {
    assert_eq!(only_chinese("abc中文123"), "中文");
    assert_eq!(only_chinese("日本語テキスト"), "日本語");
    assert_eq!(only_chinese("한국어"), "");
    assert_eq!(only_chinese("你好，世界！"), "你好世界");
    assert_eq!(only_chinese("〇々"), "〇々");
}

#[test]
fn unchanged_input_is_borrowed() {
    assert!(matches!(only_numeric("123 456"), Cow::Borrowed(_)));
    assert!(matches!(only_alpha_numeric("abc 123"), Cow::Borrowed(_)));
    assert!(matches!(only_chinese("中文"), Cow::Borrowed(_)));
}

#[test]
fn invariant_filters_are_idempotent() {
    let inputs = ["a1 b2-3", "Héllo, wörld 42!", "abc中文123", "", "\u{7}x\u{200B}9"];
    for input in inputs {
        let numeric = only_numeric(input);
        assert_eq!(only_numeric(&numeric), numeric);

        let alnum = only_alpha_numeric(input);
        assert_eq!(only_alpha_numeric(&alnum), alnum);

        let han = only_chinese(input);
        assert_eq!(only_chinese(&han), han);
    }
}
