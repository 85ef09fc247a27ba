//! The default adapter.
//!
//! `DefaultAdapter` displays any collection of [`AdapterItem`]s. Every item
//! gets the same slot size, and each item's control is picked from the
//! capabilities the item offers.

use std::fmt;
use std::sync::Arc;

use trellis_core::logging::targets;

use super::collection::ItemCollection;
use super::config::AdapterConfig;
use super::identity_index::IdentityIndex;
use super::item::AdapterItem;
use super::traits::{Adapter, AdapterSignals};
use crate::error::{AdapterError, Result};
use crate::geometry::{Size, Spacing};
use crate::theme::{Control, Font, Label, Theme};

/// Type alias for a label style hook.
///
/// Called with the theme and every label the adapter builds for a textual
/// item, after the label text is set.
pub type StyleLabelFn = Arc<dyn Fn(&dyn Theme, &mut dyn Label) + Send + Sync>;

/// How an item is going to be displayed.
///
/// Resolved from the item's capabilities, in priority order: its own
/// control, then its text, then its `Debug` dump.
pub enum ItemPresentation {
    /// The item built its own control.
    View(Box<dyn Control>),
    /// The item supplied display text.
    Text(String),
    /// The item offered no capability; this is its `Debug` output.
    Dump(String),
}

impl ItemPresentation {
    /// Resolves the presentation of `item`.
    pub fn of(item: &dyn AdapterItem, theme: &dyn Theme) -> Self {
        if let Some(control) = item.view(theme) {
            return Self::View(control);
        }
        if let Some(text) = item.text() {
            return Self::Text(text);
        }

        let dump = format!("{item:?}");
        if dump.is_empty() {
            Self::Dump(item.item_type_name().to_owned())
        } else {
            Self::Dump(dump)
        }
    }

    /// Returns the text to put in a label, or `None` for a self-built control.
    pub fn label_text(&self) -> Option<&str> {
        match self {
            Self::View(_) => None,
            Self::Text(text) | Self::Dump(text) => Some(text),
        }
    }

    /// Returns the size the item would like to occupy.
    ///
    /// Controls are asked for their desired size without constraint; text is
    /// measured with `font` on a single line, plus `label_margin`.
    pub fn natural_size(&self, font: &dyn Font, label_margin: Spacing) -> Size {
        match self {
            Self::View(control) => control.desired_size(Size::ZERO, Size::MAX),
            Self::Text(text) | Self::Dump(text) => {
                let text = font.measure(text);
                let margin = label_margin.size();
                Size::new(text.width + margin.width, text.height + margin.height)
            }
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::View(_) => "view",
            Self::Text(_) => "text",
            Self::Dump(_) => "dump",
        }
    }
}

impl fmt::Debug for ItemPresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::View(_) => f.write_str("View(..)"),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Dump(text) => f.debug_tuple("Dump").field(text).finish(),
        }
    }
}

/// An adapter over any collection of [`AdapterItem`]s.
///
/// # Example
///
/// ```ignore
/// use trellis::adapter::{Adapter, DefaultAdapter};
///
/// let mut adapter = DefaultAdapter::new();
/// adapter.signals().data_replaced.connect(|_| println!("relayout"));
///
/// adapter.set_items(vec!["Apple", "Banana", "Apple"]);
/// assert_eq!(adapter.count(), 3);
///
/// // Equal items resolve to their last position.
/// assert_eq!(adapter.item_index(&"Apple"), Some(2));
///
/// // Size every slot to fit the widest item.
/// adapter.set_item_size_as_largest(&theme);
/// let label = adapter.create(&theme, 1);
/// ```
///
/// # Concurrency
///
/// Mutating operations take `&mut self`: the adapter is owned by the view
/// thread. Signals fire synchronously from within those calls.
pub struct DefaultAdapter {
    items: Option<Box<dyn ItemCollection>>,
    index: IdentityIndex,
    item_size: Size,
    style_label: Option<StyleLabelFn>,
    config: AdapterConfig,
    signals: AdapterSignals,
}

impl Default for DefaultAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultAdapter {
    /// Creates an empty adapter with the default configuration.
    pub fn new() -> Self {
        Self::with_config(AdapterConfig::default())
    }

    /// Creates an empty adapter with the given configuration.
    pub fn with_config(config: AdapterConfig) -> Self {
        Self {
            items: None,
            index: IdentityIndex::new(),
            item_size: config.default_item_size,
            style_label: None,
            config,
            signals: AdapterSignals::new(),
        }
    }

    /// Returns the adapter configuration.
    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Replaces the item collection.
    ///
    /// The reverse index is rebuilt from scratch, then `data_replaced` is
    /// emitted. Equal items resolve to their last position.
    pub fn set_items<C: ItemCollection>(&mut self, items: C) {
        let index = IdentityIndex::build(&items);
        tracing::debug!(
            target: targets::ADAPTER,
            count = items.len(),
            distinct = index.len(),
            duplicates = index.duplicates(),
            "items replaced"
        );

        self.items = Some(Box::new(items));
        self.index = index;
        self.signals.emit_data_replaced();
    }

    /// Returns the current collection, or `None` if none was ever set.
    pub fn items(&self) -> Option<&dyn ItemCollection> {
        self.items.as_deref()
    }

    /// Returns the current collection as its concrete type.
    ///
    /// Returns `None` if no collection is set or it is not a `C`.
    pub fn items_as<C: ItemCollection>(&self) -> Option<&C> {
        self.items()?.as_any().downcast_ref::<C>()
    }

    /// Returns the item at `index`, or an error if out of range.
    pub fn try_item_at(&self, index: usize) -> Result<&dyn AdapterItem> {
        self.items
            .as_deref()
            .and_then(|items| items.get(index))
            .ok_or_else(|| AdapterError::index_out_of_range(index, self.count()))
    }

    /// Number of positions in the current collection shadowed by a later
    /// equal item.
    pub fn duplicate_count(&self) -> usize {
        self.index.duplicates()
    }

    /// Sets the slot size of every item and emits `data_changed`.
    pub fn set_item_size(&mut self, size: Size) {
        tracing::debug!(
            target: targets::ADAPTER,
            width = size.width,
            height = size.height,
            "item size set"
        );
        self.item_size = size;
        self.signals.emit_data_changed();
    }

    /// Sizes every slot to fit the largest item on each axis.
    ///
    /// Each item is resolved to its presentation and measured once: controls
    /// by their unconstrained desired size, text with the theme's default
    /// font. The result is passed to [`set_item_size`](Self::set_item_size).
    ///
    /// With no items, the current size is kept and nothing is emitted.
    /// Measurements are not cached, so call this once after
    /// [`set_items`](Self::set_items) rather than per frame.
    pub fn set_item_size_as_largest(&mut self, theme: &dyn Theme) {
        let count = self.count();
        if count == 0 {
            tracing::debug!(target: targets::ADAPTER, "no items to size, keeping item size");
            return;
        }

        let font = theme.default_font();
        let bound = (0..count).fold(Size::ZERO, |bound, index| {
            let presentation = ItemPresentation::of(self.item_at(index), theme);
            bound.max(presentation.natural_size(&*font, self.config.label_margin))
        });

        tracing::debug!(
            target: targets::ADAPTER,
            count,
            width = bound.width,
            height = bound.height,
            "computed largest item size"
        );
        self.set_item_size(bound);
    }

    /// Sets the hook used to style labels built for textual items, and
    /// emits `data_changed`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// adapter.set_style_label(|_theme, label| {
    ///     label.set_margin(Spacing::uniform(2.0));
    /// });
    /// ```
    pub fn set_style_label<F>(&mut self, hook: F)
    where
        F: Fn(&dyn Theme, &mut dyn Label) + Send + Sync + 'static,
    {
        tracing::debug!(target: targets::ADAPTER, "style label hook set");
        self.style_label = Some(Arc::new(hook));
        self.signals.emit_data_changed();
    }

    /// Removes the label style hook and emits `data_changed`.
    pub fn clear_style_label(&mut self) {
        tracing::debug!(target: targets::ADAPTER, "style label hook cleared");
        self.style_label = None;
        self.signals.emit_data_changed();
    }

    /// Returns `true` if a label style hook is set.
    pub fn has_style_label(&self) -> bool {
        self.style_label.is_some()
    }

    fn build_label(&self, theme: &dyn Theme, text: &str) -> Box<dyn Label> {
        let mut label = theme.create_label();
        label.set_margin(self.config.label_margin);
        label.set_multiline(self.config.multiline_labels);
        label.set_text(text);
        if let Some(style) = &self.style_label {
            style(theme, &mut *label);
        }
        label
    }
}

impl Adapter for DefaultAdapter {
    fn count(&self) -> usize {
        self.items.as_deref().map_or(0, |items| items.len())
    }

    fn item_at(&self, index: usize) -> &dyn AdapterItem {
        match self.try_item_at(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }

    fn item_index(&self, item: &dyn AdapterItem) -> Option<usize> {
        let items = self.items.as_deref()?;
        self.index.position(items, item)
    }

    fn item_size(&self, _theme: &dyn Theme) -> Size {
        self.item_size
    }

    fn create(&self, theme: &dyn Theme, index: usize) -> Box<dyn Control> {
        let presentation = ItemPresentation::of(self.item_at(index), theme);
        tracing::trace!(
            target: targets::ADAPTER,
            index,
            kind = presentation.kind(),
            "creating item control"
        );

        match presentation {
            ItemPresentation::View(control) => control,
            ItemPresentation::Text(text) | ItemPresentation::Dump(text) => {
                let label: Box<dyn Control> = self.build_label(theme, &text);
                label
            }
        }
    }

    fn signals(&self) -> &AdapterSignals {
        &self.signals
    }
}

impl fmt::Debug for DefaultAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultAdapter")
            .field("count", &self.count())
            .field("index", &self.index)
            .field("item_size", &self.item_size)
            .field("has_style_label", &self.has_style_label())
            .field("config", &self.config)
            .finish()
    }
}

static_assertions::assert_impl_all!(DefaultAdapter: Send, Sync);
