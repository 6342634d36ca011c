use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentityProvider {
    #[default]
    Google,
}

impl IdentityProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
        }
    }
}

/// Authorization result handed back by a third-party identity provider.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderGrant {
    pub provider: IdentityProvider,
    pub authorization_code: String,
}

impl ProviderGrant {
    pub fn google(authorization_code: impl Into<String>) -> Self {
        Self {
            provider: IdentityProvider::Google,
            authorization_code: authorization_code.into(),
        }
    }
}

impl fmt::Debug for ProviderGrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderGrant")
            .field("provider", &self.provider)
            .field("authorization_code", &"<redacted>")
            .finish()
    }
}
