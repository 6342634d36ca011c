use crate::translations;

use std::collections::HashMap;
use std::sync::LazyLock;

use an_core::Locale;

type Table = HashMap<&'static str, &'static str>;

static ENGLISH: LazyLock<Table> = LazyLock::new(|| build(Locale::English));
static URDU: LazyLock<Table> = LazyLock::new(|| build(Locale::Urdu));

fn build(locale: Locale) -> Table {
    translations::table(locale).iter().copied().collect()
}

/// Static key → text tables for both locales.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dictionary;

impl Dictionary {
    fn table(locale: Locale) -> &'static Table {
        match locale {
            Locale::English => &ENGLISH,
            Locale::Urdu => &URDU,
        }
    }

    /// Text for `key` in `locale`, or `key` itself when it is not registered.
    pub fn lookup<'a>(&self, locale: Locale, key: &'a str) -> &'a str {
        Self::table(locale).get(key).copied().unwrap_or(key)
    }

    pub fn contains(&self, locale: Locale, key: &str) -> bool {
        Self::table(locale).contains_key(key)
    }

    /// Like [`lookup`](Self::lookup) with `{name}` placeholders replaced.
    pub fn format(&self, locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.lookup(locale, key).to_string(), |text, (name, value)| {
                text.replace(&format!("{{{name}}}"), value)
            })
    }

    pub fn keys(&self, locale: Locale) -> impl Iterator<Item = &'static str> {
        translations::table(locale).iter().map(|(key, _)| *key)
    }
}
