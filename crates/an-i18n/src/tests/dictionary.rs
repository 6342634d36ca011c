use crate::Dictionary;

use an_core::Locale;
use googletest::prelude::*;

#[test]
fn given_known_key_when_lookup_then_returns_locale_text() {
    let dictionary = Dictionary;

    assert_that!(dictionary.lookup(Locale::English, "nav.home"), eq("Home"));
    assert_that!(dictionary.lookup(Locale::Urdu, "nav.home"), eq("ہوم"));
}

#[test]
fn given_missing_key_when_lookup_then_returns_key_for_both_locales() {
    let dictionary = Dictionary;

    for locale in [Locale::English, Locale::Urdu] {
        assert_that!(
            dictionary.lookup(locale, "hero.notYetTranslated"),
            eq("hero.notYetTranslated")
        );
    }
}

#[test]
fn given_empty_key_when_lookup_then_returns_empty() {
    assert_that!(Dictionary.lookup(Locale::Urdu, ""), eq(""));
}

#[test]
fn given_english_table_then_every_key_has_urdu_text() {
    let dictionary = Dictionary;

    let missing: Vec<&str> = dictionary
        .keys(Locale::English)
        .filter(|key| !dictionary.contains(Locale::Urdu, key))
        .collect();

    assert_that!(missing, is_empty());
}

#[test]
fn given_urdu_table_then_no_extra_keys() {
    let dictionary = Dictionary;

    let extra: Vec<&str> = dictionary
        .keys(Locale::Urdu)
        .filter(|key| !dictionary.contains(Locale::English, key))
        .collect();

    assert_that!(extra, is_empty());
}

#[test]
fn given_placeholder_when_format_then_substitutes_argument() {
    let text = Dictionary.format(Locale::English, "auth.resendIn", &[("seconds", "42")]);

    assert_that!(text, eq("Resend code in 42s"));
}

#[test]
fn given_missing_key_when_format_then_substitutes_into_raw_key() {
    let text = Dictionary.format(Locale::Urdu, "greeting.{name}", &[("name", "Ali")]);

    assert_that!(text, eq("greeting.Ali"));
}

#[test]
fn given_error_keys_then_match_session_error_messages() {
    assert_that!(
        Dictionary.lookup(Locale::English, "error.invalidOtp"),
        eq("Invalid OTP code")
    );
    assert_that!(
        Dictionary.lookup(Locale::English, "error.noPendingVerification"),
        eq("No pending verification")
    );
}
