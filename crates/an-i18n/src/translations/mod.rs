mod english;
mod urdu;

use an_core::Locale;

pub(crate) fn table(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::English => english::ENGLISH,
        Locale::Urdu => urdu::URDU,
    }
}
