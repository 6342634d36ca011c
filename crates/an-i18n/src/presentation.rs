use an_core::{Locale, TextDirection};

use log::info;

/// Host-document side effects of a locale change.
///
/// The web front end sets `dir` and the body font here; headless callers
/// and tests inject their own implementation.
pub trait PresentationAdapter: Send + Sync {
    fn apply_direction(&self, direction: TextDirection);

    /// `None` restores the default font family.
    fn apply_font(&self, font_family: Option<&str>);

    fn apply_locale(&self, locale: Locale) {
        self.apply_direction(locale.direction());
        self.apply_font(locale.font_family());
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAdapter;

impl PresentationAdapter for NoopAdapter {
    fn apply_direction(&self, _direction: TextDirection) {}

    fn apply_font(&self, _font_family: Option<&str>) {}
}

/// Logs each presentation change instead of touching a document.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingAdapter;

impl PresentationAdapter for LoggingAdapter {
    fn apply_direction(&self, direction: TextDirection) {
        info!("Text direction set to {}", direction.as_str());
    }

    fn apply_font(&self, font_family: Option<&str>) {
        info!("Font family set to {}", font_family.unwrap_or("default"));
    }
}
