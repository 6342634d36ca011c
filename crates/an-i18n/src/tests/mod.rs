mod dictionary;

use crate::PresentationAdapter;

use an_core::TextDirection;

use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Applied {
    Direction(TextDirection),
    Font(Option<String>),
}

/// Captures presentation side effects so tests can assert on them.
#[derive(Default)]
pub(crate) struct RecordingAdapter {
    applied: Mutex<Vec<Applied>>,
}

impl RecordingAdapter {
    pub(crate) fn applied(&self) -> Vec<Applied> {
        self.applied.lock().unwrap().clone()
    }

    pub(crate) fn last_direction(&self) -> Option<TextDirection> {
        self.applied().into_iter().rev().find_map(|a| match a {
            Applied::Direction(d) => Some(d),
            Applied::Font(_) => None,
        })
    }

    pub(crate) fn last_font(&self) -> Option<Option<String>> {
        self.applied().into_iter().rev().find_map(|a| match a {
            Applied::Font(f) => Some(f),
            Applied::Direction(_) => None,
        })
    }
}

impl PresentationAdapter for RecordingAdapter {
    fn apply_direction(&self, direction: TextDirection) {
        self.applied
            .lock()
            .unwrap()
            .push(Applied::Direction(direction));
    }

    fn apply_font(&self, font_family: Option<&str>) {
        self.applied
            .lock()
            .unwrap()
            .push(Applied::Font(font_family.map(str::to_string)));
    }
}
