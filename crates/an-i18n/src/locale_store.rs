use crate::{Dictionary, NoopAdapter, PresentationAdapter};

use std::fmt;
use std::sync::Arc;

use an_core::{Locale, TextDirection};
use log::debug;

/// Active locale plus lookups against it.
///
/// Always starts at the primary locale; nothing is persisted.
pub struct LocaleStore {
    locale: Locale,
    dictionary: Dictionary,
    adapter: Arc<dyn PresentationAdapter>,
}

impl LocaleStore {
    pub fn new(adapter: Arc<dyn PresentationAdapter>) -> Self {
        Self {
            locale: Locale::default(),
            dictionary: Dictionary,
            adapter,
        }
    }

    pub fn headless() -> Self {
        Self::new(Arc::new(NoopAdapter))
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn direction(&self) -> TextDirection {
        self.locale.direction()
    }

    pub fn is_rtl(&self) -> bool {
        self.direction() == TextDirection::Rtl
    }

    /// Text for `key` in the active locale. Unknown keys come back unchanged.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.dictionary.lookup(self.locale, key)
    }

    pub fn lookup(&self, key: &str) -> String {
        self.t(key).to_string()
    }

    pub fn lookup_in(&self, locale: Locale, key: &str) -> String {
        self.dictionary.lookup(locale, key).to_string()
    }

    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        self.dictionary.format(self.locale, key, args)
    }

    /// Flip between English and Urdu.
    pub fn toggle(&mut self) -> Locale {
        self.set_locale(self.locale.toggled())
    }

    pub fn set_locale(&mut self, locale: Locale) -> Locale {
        debug!("Locale {} -> {}", self.locale.code(), locale.code());
        self.locale = locale;
        self.adapter.apply_locale(locale);
        locale
    }
}

impl Default for LocaleStore {
    fn default() -> Self {
        Self::headless()
    }
}

impl fmt::Debug for LocaleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleStore")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}
