//! Type-erased item collections.

use std::any::Any;
use std::sync::Arc;

use super::item::AdapterItem;

/// An ordered, indexable sequence of items of one type.
///
/// Adapters store collections behind this trait so a single adapter can be
/// handed items of any type. The concrete collection can be recovered with
/// [`as_any`](Self::as_any).
///
/// Implemented for `Vec<T>`, `Box<[T]>`, `[T; N]`, `Arc<[T]>` and
/// `Arc<Vec<T>>`. The `Arc` forms let an application share its list with
/// the adapter without copying it.
pub trait ItemCollection: Any + Send + Sync {
    /// Returns the number of items.
    fn len(&self) -> usize;

    /// Returns `true` if the collection holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the item at `index`, or `None` if out of range.
    fn get(&self, index: usize) -> Option<&dyn AdapterItem>;

    /// Get this as Any for downcasting.
    fn as_any(&self) -> &dyn Any;
}

fn slice_item<T: AdapterItem>(items: &[T], index: usize) -> Option<&dyn AdapterItem> {
    items.get(index).map(|item| item as &dyn AdapterItem)
}

macro_rules! impl_slice_collection {
    ($([$($generic:tt)*] $ty:ty;)*) => {
        $(
            impl<$($generic)*> ItemCollection for $ty {
                fn len(&self) -> usize {
                    <[T]>::len(self)
                }

                fn get(&self, index: usize) -> Option<&dyn AdapterItem> {
                    slice_item::<T>(self, index)
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }
            }
        )*
    };
}

impl_slice_collection! {
    [T: AdapterItem] Vec<T>;
    [T: AdapterItem] Box<[T]>;
    [T: AdapterItem] Arc<[T]>;
    [T: AdapterItem] Arc<Vec<T>>;
    [T: AdapterItem, const N: usize] [T; N];
}
