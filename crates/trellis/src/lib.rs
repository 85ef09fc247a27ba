//! Trellis - data adapters for list and grid views.
//!
//! This is the main crate that re-exports the core APIs alongside the
//! adapter, theme and geometry modules.
//!
//! # Example
//!
//! ```no_run
//! use trellis::adapter::{Adapter, AdapterItem, DefaultAdapter};
//!
//! #[derive(Debug, PartialEq, Eq, Hash)]
//! struct Task {
//!     title: String,
//!     done: bool,
//! }
//!
//! impl AdapterItem for Task {
//!     fn text(&self) -> Option<String> {
//!         let mark = if self.done { "x" } else { " " };
//!         Some(format!("[{mark}] {}", self.title))
//!     }
//! }
//!
//! let mut adapter = DefaultAdapter::new();
//! adapter.signals().data_replaced.connect(|_| println!("items replaced"));
//! adapter.set_items(vec![
//!     Task { title: "Buy groceries".into(), done: false },
//!     Task { title: "Walk dog".into(), done: true },
//! ]);
//! assert_eq!(adapter.count(), 2);
//! ```

pub use trellis_core::*;

pub mod adapter;
mod error;
pub mod geometry;
pub mod theme;

pub use error::{AdapterError, Result as AdapterResult};
