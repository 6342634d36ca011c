use crate::{CoreError, CoreResult, TextDirection};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

const URDU_FONT_FAMILY: &str = "Noto Nastaliq Urdu";

/// Display language. English is primary, Urdu secondary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    English,
    Urdu,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Urdu => "ur",
        }
    }

    pub fn is_primary(&self) -> bool {
        matches!(self, Self::English)
    }

    /// The other supported locale.
    pub fn toggled(&self) -> Self {
        match self {
            Self::English => Self::Urdu,
            Self::Urdu => Self::English,
        }
    }

    pub fn direction(&self) -> TextDirection {
        match self {
            Self::English => TextDirection::Ltr,
            Self::Urdu => TextDirection::Rtl,
        }
    }

    /// Font family applied while this locale is active; `None` means the default font.
    pub fn font_family(&self) -> Option<&'static str> {
        match self {
            Self::English => None,
            Self::Urdu => Some(URDU_FONT_FAMILY),
        }
    }
}

impl FromStr for Locale {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "ur" | "urdu" => Ok(Self::Urdu),
            _ => Err(CoreError::InvalidLocale {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
