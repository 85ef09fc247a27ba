//! Theme boundary consumed by item adapters.
//!
//! Adapters never draw anything themselves. When an item needs a visual
//! representation they ask the theme for a font to measure text with, or for
//! a label to put text into. These traits describe only what adapters use;
//! the concrete widget toolkit implements them.
//!
//! # Example
//!
//! ```
//! use std::any::Any;
//! use std::sync::Arc;
//! use trellis::geometry::{Size, Spacing};
//! use trellis::theme::{Control, Font, Label, Theme};
//!
//! struct MonoFont;
//!
//! impl Font for MonoFont {
//!     fn measure(&self, text: &str) -> Size {
//!         Size::new(text.chars().count() as f32 * 8.0, 16.0)
//!     }
//! }
//!
//! #[derive(Default)]
//! struct TextLabel {
//!     text: String,
//!     margin: Spacing,
//!     multiline: bool,
//! }
//!
//! impl Control for TextLabel {
//!     fn desired_size(&self, min: Size, max: Size) -> Size {
//!         MonoFont.measure(&self.text).max(min).min(max)
//!     }
//!     fn as_any(&self) -> &dyn Any { self }
//!     fn as_any_mut(&mut self) -> &mut dyn Any { self }
//! }
//!
//! impl Label for TextLabel {
//!     fn text(&self) -> &str { &self.text }
//!     fn set_text(&mut self, text: &str) { self.text = text.to_owned(); }
//!     fn margin(&self) -> Spacing { self.margin }
//!     fn set_margin(&mut self, margin: Spacing) { self.margin = margin; }
//!     fn is_multiline(&self) -> bool { self.multiline }
//!     fn set_multiline(&mut self, multiline: bool) { self.multiline = multiline; }
//! }
//!
//! struct PlainTheme;
//!
//! impl Theme for PlainTheme {
//!     fn default_font(&self) -> Arc<dyn Font> { Arc::new(MonoFont) }
//!     fn create_label(&self) -> Box<dyn Label> { Box::new(TextLabel::default()) }
//! }
//! ```

use std::any::Any;
use std::sync::Arc;

use crate::geometry::{Size, Spacing};

/// A displayable control produced for an item.
pub trait Control: Any {
    /// Returns the size the control would like to occupy, clamped to
    /// `min..=max` on each axis.
    fn desired_size(&self, min: Size, max: Size) -> Size;

    /// Get this as Any for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Get this as mutable Any for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A single piece of text with a margin.
pub trait Label: Control {
    /// Returns the label text.
    fn text(&self) -> &str;

    /// Sets the label text.
    fn set_text(&mut self, text: &str);

    /// Returns the margin around the text.
    fn margin(&self) -> Spacing;

    /// Sets the margin around the text.
    fn set_margin(&mut self, margin: Spacing);

    /// Returns `true` if the text may wrap onto several lines.
    fn is_multiline(&self) -> bool;

    /// Sets whether the text may wrap onto several lines.
    fn set_multiline(&mut self, multiline: bool);
}

/// A font able to measure text.
pub trait Font: Send + Sync {
    /// Returns the extent of `text` laid out on a single line.
    fn measure(&self, text: &str) -> Size;
}

/// The styling context adapters build controls in.
pub trait Theme {
    /// Returns the font labels use unless styled otherwise.
    fn default_font(&self) -> Arc<dyn Font>;

    /// Creates a new, empty label.
    fn create_label(&self) -> Box<dyn Label>;
}
