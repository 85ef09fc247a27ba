//! Theme and items shared by the adapter unit tests.

use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::item::AdapterItem;
use crate::geometry::{Size, Spacing};
use crate::theme::{Control, Font, Label, Theme};

/// Advance per character.
pub(crate) const CHAR_WIDTH: f32 = 8.0;
/// Line height.
pub(crate) const LINE_HEIGHT: f32 = 16.0;

pub(crate) struct TestFont;

impl Font for TestFont {
    fn measure(&self, text: &str) -> Size {
        Size::new(text.chars().count() as f32 * CHAR_WIDTH, LINE_HEIGHT)
    }
}

#[derive(Debug, Default)]
pub(crate) struct TestLabel {
    pub(crate) text: String,
    pub(crate) margin: Spacing,
    pub(crate) multiline: bool,
    pub(crate) style_marks: Vec<&'static str>,
}

impl Control for TestLabel {
    fn desired_size(&self, min: Size, max: Size) -> Size {
        let text = TestFont.measure(&self.text);
        let margin = self.margin.size();
        Size::new(text.width + margin.width, text.height + margin.height)
            .max(min)
            .min(max)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Label for TestLabel {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_owned();
    }

    fn margin(&self) -> Spacing {
        self.margin
    }

    fn set_margin(&mut self, margin: Spacing) {
        self.margin = margin;
    }

    fn is_multiline(&self) -> bool {
        self.multiline
    }

    fn set_multiline(&mut self, multiline: bool) {
        self.multiline = multiline;
    }
}

/// A control with a fixed preferred size.
#[derive(Debug)]
pub(crate) struct SizedControl {
    pub(crate) size: Size,
}

impl Control for SizedControl {
    fn desired_size(&self, min: Size, max: Size) -> Size {
        self.size.max(min).min(max)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[derive(Default)]
pub(crate) struct TestTheme {
    labels_created: AtomicUsize,
}

impl TestTheme {
    pub(crate) fn labels_created(&self) -> usize {
        self.labels_created.load(Ordering::SeqCst)
    }
}

impl Theme for TestTheme {
    fn default_font(&self) -> Arc<dyn Font> {
        Arc::new(TestFont)
    }

    fn create_label(&self) -> Box<dyn Label> {
        self.labels_created.fetch_add(1, Ordering::SeqCst);
        Box::new(TestLabel::default())
    }
}

/// An item that draws itself as a block of the given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Swatch {
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl AdapterItem for Swatch {
    fn view(&self, _theme: &dyn Theme) -> Option<Box<dyn Control>> {
        Some(Box::new(SizedControl {
            size: Size::from((self.width, self.height)),
        }))
    }

    fn text(&self) -> Option<String> {
        Some(format!("swatch {}x{}", self.width, self.height))
    }
}

/// An item with no capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Record {
    pub(crate) id: u32,
    pub(crate) name: &'static str,
}

impl AdapterItem for Record {}

/// An item whose `Debug` output is empty.
#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct Blank;

impl std::fmt::Debug for Blank {
    fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Ok(())
    }
}

impl AdapterItem for Blank {}

pub(crate) fn as_label(control: &dyn Control) -> &TestLabel {
    control
        .as_any()
        .downcast_ref::<TestLabel>()
        .expect("control is a TestLabel")
}
