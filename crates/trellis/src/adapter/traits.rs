//! Core traits for item adapters.
//!
//! This module defines the interface list and grid views use to talk to an
//! adapter, and the signals adapters emit when their data changes.

use trellis_core::Signal;

use super::item::AdapterItem;
use crate::geometry::Size;
use crate::theme::{Control, Theme};

/// The interface a hosting view uses to display an adapter's items.
///
/// Views ask for the item count and slot size, create controls on demand
/// for the items they show, and listen to [`signals`](Adapter::signals) to
/// know when to lay out again.
///
/// # Implementation Requirements
///
/// - [`item_at`](Adapter::item_at) and [`create`](Adapter::create) may panic
///   when `index >= count()`; a view holding such an index missed a
///   `data_replaced` notification.
/// - [`item_index`](Adapter::item_index) must not panic. Views probe with
///   items that may have been removed.
pub trait Adapter: Send + Sync {
    /// Returns the number of items.
    fn count(&self) -> usize;

    /// Returns the item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= count()`.
    fn item_at(&self, index: usize) -> &dyn AdapterItem;

    /// Returns the position of `item`, or `None` if the adapter does not hold it.
    fn item_index(&self, item: &dyn AdapterItem) -> Option<usize>;

    /// Returns the size of the slot every item is laid out in.
    fn item_size(&self, theme: &dyn Theme) -> Size;

    /// Creates the control displaying the item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= count()`.
    fn create(&self, theme: &dyn Theme, index: usize) -> Box<dyn Control>;

    /// Returns the signals for this adapter.
    fn signals(&self) -> &AdapterSignals;

    /// Returns `true` if the adapter holds no items.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Signals emitted by item adapters.
///
/// # Signal Usage
///
/// - **Collection replaced**: `data_replaced`. Every index and every
///   created control is stale.
/// - **Presentation changed**: `data_changed`. Indices are still valid, but
///   item sizes or styling may differ.
///
/// Slots run synchronously, in connection order, before the mutating call
/// returns.
#[derive(Debug, Default)]
pub struct AdapterSignals {
    /// Emitted after the whole item collection was replaced.
    pub data_replaced: Signal<()>,

    /// Emitted after presentation attributes (item size, label style) changed.
    pub data_changed: Signal<()>,
}

impl AdapterSignals {
    /// Creates a new set of adapter signals.
    pub fn new() -> Self {
        Self {
            data_replaced: Signal::new(),
            data_changed: Signal::new(),
        }
    }

    /// Emits the `data_replaced` signal.
    pub fn emit_data_replaced(&self) {
        self.data_replaced.emit(());
    }

    /// Emits the `data_changed` signal.
    pub fn emit_data_changed(&self) {
        self.data_changed.emit(());
    }

    /// Blocks or unblocks both signals.
    pub fn set_blocked(&self, blocked: bool) {
        self.data_replaced.set_blocked(blocked);
        self.data_changed.set_blocked(blocked);
    }
}
