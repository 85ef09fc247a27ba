//! Adapter configuration.

use crate::geometry::{Size, Spacing};

/// Configuration for a [`DefaultAdapter`](super::DefaultAdapter).
///
/// # Example
///
/// ```
/// use trellis::adapter::{AdapterConfig, DefaultAdapter};
/// use trellis::geometry::Size;
///
/// let config = AdapterConfig::default().with_default_item_size(Size::new(320.0, 24.0));
/// let adapter = DefaultAdapter::with_config(config);
/// assert_eq!(adapter.config().default_item_size, Size::new(320.0, 24.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdapterConfig {
    /// Slot size in effect until one is set or computed.
    pub default_item_size: Size,
    /// Margin applied to labels built for textual items.
    pub label_margin: Spacing,
    /// Whether labels built for textual items may wrap.
    pub multiline_labels: bool,
}

impl AdapterConfig {
    /// Default slot size: 200 wide, 16 high.
    pub const DEFAULT_ITEM_SIZE: Size = Size::new(200.0, 16.0);

    /// Sets the default item size.
    pub fn with_default_item_size(mut self, size: Size) -> Self {
        self.default_item_size = size;
        self
    }

    /// Sets the label margin.
    pub fn with_label_margin(mut self, margin: Spacing) -> Self {
        self.label_margin = margin;
        self
    }

    /// Sets whether labels may wrap.
    pub fn with_multiline_labels(mut self, multiline: bool) -> Self {
        self.multiline_labels = multiline;
        self
    }
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            default_item_size: Self::DEFAULT_ITEM_SIZE,
            label_margin: Spacing::ZERO,
            multiline_labels: false,
        }
    }
}
