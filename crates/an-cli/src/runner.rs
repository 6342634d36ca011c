use crate::commands::Commands;
use crate::error::Result as CliResult;

use an_i18n::{Dictionary, LocaleStore};
use an_session::{Navigation, RESEND_COOLDOWN_SECS, SessionContainer, navigate};

use log::{debug, warn};
use serde_json::{Value, json};

/// Executes one command against a session and a locale.
pub struct Runner {
    session: SessionContainer,
    locale: LocaleStore,
}

impl Runner {
    pub fn new(session: SessionContainer, locale: LocaleStore) -> Self {
        if let Some(notice) = session.corruption_notice() {
            warn!("Saved session was discarded: {notice}");
        }
        Self { session, locale }
    }

    pub fn session(&self) -> &SessionContainer {
        &self.session
    }

    pub fn locale(&self) -> &LocaleStore {
        &self.locale
    }

    pub async fn execute(&self, command: Commands) -> CliResult<Value> {
        debug!("Executing {command:?}");

        match command {
            Commands::SignIn { email, password } => {
                let identity = self.session.sign_in(&email, &password).await?;
                Ok(json!({
                    "message": self.locale.t("toast.signInSuccess"),
                    "identity": identity,
                }))
            }

            Commands::SignUp {
                email,
                password,
                name,
                otp,
                resend,
            } => {
                self.session.sign_up(&email, &password, &name).await?;

                let resend_in = if resend {
                    self.session.resend_otp().await?;
                    let seconds = RESEND_COOLDOWN_SECS.to_string();
                    Some(
                        self.locale
                            .format("auth.resendIn", &[("seconds", seconds.as_str())]),
                    )
                } else {
                    None
                };

                let identity = self.session.verify_otp(&otp).await?;
                Ok(json!({
                    "message": self.locale.t("toast.verifySuccess"),
                    "identity": identity,
                    "resendIn": resend_in,
                }))
            }

            Commands::Google => {
                let identity = self.session.login_with_google().await?;
                Ok(json!({
                    "message": self.locale.t("toast.signInSuccess"),
                    "identity": identity,
                }))
            }

            Commands::SignOut => {
                self.session.sign_out().await?;
                Ok(json!({ "message": self.locale.t("toast.signedOut") }))
            }

            Commands::Whoami => Ok(self.whoami()),

            Commands::Translate { key } => {
                let locale = self.locale.locale();
                Ok(json!({
                    "locale": locale.code(),
                    "direction": self.locale.direction().as_str(),
                    "key": key,
                    "text": self.locale.t(&key),
                    "known": Dictionary.contains(locale, &key),
                }))
            }

            Commands::Visit { path } => Ok(match navigate(&self.session, &path) {
                Navigation::Render(route) => json!({
                    "outcome": "render",
                    "route": route.path(),
                }),
                Navigation::Redirect { from, to } => json!({
                    "outcome": "redirect",
                    "from": from.path(),
                    "to": to,
                }),
                Navigation::NotFound(path) => json!({
                    "outcome": "not_found",
                    "path": path,
                }),
            }),
        }
    }

    fn whoami(&self) -> Value {
        let snapshot = self.session.snapshot();
        let greeting = snapshot.identity.as_ref().map(|identity| {
            self.locale
                .format("common.welcome", &[("name", identity.display_name.as_str())])
        });

        json!({
            "state": snapshot.state.as_str(),
            "identity": snapshot.identity,
            "pendingEmail": snapshot.pending_email,
            "greeting": greeting,
        })
    }
}
