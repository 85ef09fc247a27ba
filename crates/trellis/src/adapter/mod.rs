//! Item adapters for list and grid views.
//!
//! An adapter sits between a view and the application's data. The view never
//! learns the item type; it asks the adapter how many items there are, how
//! large each slot is, and for a control displaying a given item. The adapter
//! emits signals so the view can lay out again when the data changes.
//!
//! # Core Types
//!
//! - `AdapterItem`: Capabilities an item may offer (own control, text)
//! - `ItemCollection`: Type-erased, ordered collection of items
//! - `Adapter`: The trait views consume
//! - `AdapterSignals`: `data_replaced` and `data_changed` notifications
//! - `DefaultAdapter`: Adapter over any `ItemCollection`
//!
//! # Choosing a Control
//!
//! For each item, `DefaultAdapter` uses the first capability available:
//!
//! 1. The item's own control (`AdapterItem::view`), returned unchanged.
//! 2. The item's text (`AdapterItem::text`), shown in a single-line label.
//! 3. The item's `Debug` output, shown the same way.
//!
//! Labels pass through the style hook set with
//! `DefaultAdapter::set_style_label`.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────────┐  count / item_size / create   ┌─────────────┐
//! │  DefaultAdapter  │<──────────────────────────────│    View     │
//! │ ┌──────────────┐ │                               │             │
//! │ │ItemCollection│ │  data_replaced / data_changed │             │
//! │ │IdentityIndex │ │──────────────────────────────>│             │
//! │ └──────────────┘ │                               └─────────────┘
//! └──────────────────┘
//!          │ default_font / create_label
//!          v
//!   ┌─────────────┐
//!   │    Theme    │
//!   └─────────────┘
//! ```

mod collection;
mod config;
mod default_adapter;
mod identity_index;
mod item;
#[cfg(test)]
mod test_theme;
mod traits;

pub use collection::ItemCollection;
pub use config::AdapterConfig;
pub use default_adapter::{DefaultAdapter, ItemPresentation, StyleLabelFn};
pub use item::{AdapterItem, DebugItem, ItemIdentity, Shared, same_item};
pub use traits::{Adapter, AdapterSignals};
