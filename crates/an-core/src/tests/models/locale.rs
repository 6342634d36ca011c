use crate::{Locale, TextDirection};

use std::str::FromStr;

use googletest::prelude::*;

#[test]
fn given_default_locale_then_english() {
    assert_that!(Locale::default(), eq(Locale::English));
    assert!(Locale::default().is_primary());
}

#[test]
fn given_each_locale_when_toggled_twice_then_unchanged() {
    for locale in [Locale::English, Locale::Urdu] {
        assert_eq!(locale.toggled().toggled(), locale);
        assert_ne!(locale.toggled(), locale);
    }
}

#[test]
fn given_urdu_then_rtl_with_nastaliq_font() {
    assert_that!(Locale::Urdu.direction(), eq(TextDirection::Rtl));
    assert_that!(Locale::Urdu.font_family(), some(eq("Noto Nastaliq Urdu")));
}

#[test]
fn given_english_then_ltr_with_default_font() {
    assert_that!(Locale::English.direction(), eq(TextDirection::Ltr));
    assert_that!(Locale::English.font_family(), none());
}

#[test]
fn given_codes_when_from_str_then_parses_case_insensitively() {
    assert_that!(Locale::from_str("en"), ok(eq(&Locale::English)));
    assert_that!(Locale::from_str("UR"), ok(eq(&Locale::Urdu)));
    assert_that!(Locale::from_str("Urdu"), ok(eq(&Locale::Urdu)));
}

#[test]
fn given_unsupported_code_when_from_str_then_error() {
    assert_that!(Locale::from_str("fr"), err(anything()));
}
