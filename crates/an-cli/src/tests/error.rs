use crate::CliError;
use crate::tests::runner_in;

use an_i18n::{Dictionary, Locale};
use an_session::{BackendError, SessionError, StoreError};

use std::path::PathBuf;

use googletest::prelude::*;

fn every_session_error() -> Vec<SessionError> {
    vec![
        SessionError::invalid_credentials(),
        SessionError::from_sign_in(BackendError::unavailable("down")),
        SessionError::from_sign_up(BackendError::unavailable("down")),
        SessionError::no_pending_verification(),
        SessionError::invalid_otp(),
        SessionError::from_resend(BackendError::unavailable("down")),
        SessionError::from_provider_login(BackendError::unavailable("down")),
        SessionError::storage(StoreError::file_write(
            PathBuf::from("/t"),
            std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        )),
    ]
}

#[test]
fn given_session_errors_then_every_toast_key_is_translated() {
    for err in every_session_error() {
        for locale in [Locale::English, Locale::Urdu] {
            assert!(
                Dictionary.contains(locale, err.i18n_key()),
                "{} missing for {}",
                err.i18n_key(),
                locale.code()
            );
        }
    }
}

#[test]
fn given_english_locale_when_localized_then_matches_user_message() {
    let runner = runner_in(Locale::English);

    for err in every_session_error() {
        let expected = err.user_message();
        let cli_err = CliError::from(err);

        assert_that!(cli_err.localized(runner.locale()), eq(expected));
    }
}

#[test]
fn given_urdu_locale_when_localized_then_urdu_text() {
    let runner = runner_in(Locale::Urdu);
    let cli_err = CliError::from(SessionError::invalid_otp());

    assert_that!(cli_err.localized(runner.locale()), eq("غلط تصدیقی کوڈ"));
}

#[test]
fn given_non_session_error_when_localized_then_display_text() {
    let runner = runner_in(Locale::Urdu);
    let cli_err = CliError::logger("no terminal");

    assert!(
        cli_err
            .localized(runner.locale())
            .starts_with("Logger initialization failed: no terminal")
    );
}
