//! Bilingual (English / Urdu) text lookup.
//!
//! [`LocaleStore`] is the context object views receive: it resolves keys
//! against the active locale and pushes direction/font changes through a
//! [`PresentationAdapter`].

pub mod dictionary;
pub mod locale_store;
pub mod presentation;
mod translations;

#[cfg(test)]
mod tests;

pub use dictionary::Dictionary;
pub use locale_store::LocaleStore;
pub use presentation::{LoggingAdapter, NoopAdapter, PresentationAdapter};

pub use an_core::{Locale, TextDirection};
