//! Item capabilities.
//!
//! An adapter knows nothing about the concrete type of the items it holds.
//! It only sees them through [`AdapterItem`], which bundles:
//!
//! - identity (`ItemIdentity`), used by the reverse index,
//! - an optional self-view capability ([`AdapterItem::view`]),
//! - an optional textual capability ([`AdapterItem::text`]),
//! - a `Debug` dump used when neither capability is offered.
//!
//! Tuples, `Option` and `Vec` of hashable values are items out of the box.
//! Values that cannot be hashed, floats among them, go through [`DebugItem`].

use std::any::{Any, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

use crate::theme::{Control, Theme};

/// Equality and hashing for type-erased items.
///
/// Implemented for every `PartialEq + Hash` type, so plain data items get
/// value identity for free. Wrap an `Arc` in [`Shared`] to get reference
/// identity instead. A local type that cannot derive `Hash` (one holding
/// floats, say) may implement this trait by hand.
pub trait ItemIdentity: Any + Send + Sync {
    /// Returns `true` if `other` is the same item.
    ///
    /// Items of different concrete types are never equal.
    fn identity_eq(&self, other: &dyn ItemIdentity) -> bool;

    /// Feeds the item's identity into `state`.
    fn identity_hash(&self, state: &mut dyn Hasher);

    /// Get this item as Any for downcasting.
    fn item_any(&self) -> &dyn Any;

    /// The name of the item's concrete type.
    fn item_type_name(&self) -> &'static str;
}

impl<T> ItemIdentity for T
where
    T: PartialEq + Hash + Send + Sync + 'static,
{
    fn identity_eq(&self, other: &dyn ItemIdentity) -> bool {
        other
            .item_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn identity_hash(&self, mut state: &mut dyn Hasher) {
        Hash::hash(self, &mut state);
    }

    fn item_any(&self) -> &dyn Any {
        self
    }

    fn item_type_name(&self) -> &'static str {
        type_name::<T>()
    }
}

/// An item that can be shown by an adapter.
///
/// Both capabilities are optional. An adapter asks for them in order: a
/// control from [`view`](Self::view) wins, then text from
/// [`text`](Self::text), and otherwise the item's `Debug` output is shown.
///
/// # Example
///
/// ```
/// use trellis::adapter::AdapterItem;
///
/// #[derive(Debug, PartialEq, Eq, Hash)]
/// struct Contact {
///     name: String,
///     email: String,
/// }
///
/// impl AdapterItem for Contact {
///     fn text(&self) -> Option<String> {
///         Some(format!("{} <{}>", self.name, self.email))
///     }
/// }
///
/// // No capabilities at all: rendered from its `Debug` output.
/// #[derive(Debug, PartialEq, Eq, Hash)]
/// struct Coordinate(i32, i32);
///
/// impl AdapterItem for Coordinate {}
/// ```
pub trait AdapterItem: ItemIdentity + fmt::Debug {
    /// Builds the item's own control.
    fn view(&self, _theme: &dyn Theme) -> Option<Box<dyn Control>> {
        None
    }

    /// Returns the item's display text.
    fn text(&self) -> Option<String> {
        None
    }
}

/// Returns `true` if `a` and `b` are the same item.
pub fn same_item(a: &dyn AdapterItem, b: &dyn AdapterItem) -> bool {
    a.identity_eq(b)
}

macro_rules! impl_text_item {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AdapterItem for $ty {
                fn text(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

impl_text_item!(
    String, &'static str, char, bool, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128,
    isize,
);

macro_rules! impl_tuple_item {
    ($($name:ident),+) => {
        impl<$($name),+> AdapterItem for ($($name,)+)
        where
            $($name: fmt::Debug + PartialEq + Hash + Send + Sync + 'static),+
        {
        }
    };
}

impl_tuple_item!(A);
impl_tuple_item!(A, B);
impl_tuple_item!(A, B, C);
impl_tuple_item!(A, B, C, D);
impl_tuple_item!(A, B, C, D, E);
impl_tuple_item!(A, B, C, D, E, F);

impl<T> AdapterItem for Vec<T>
where
    T: fmt::Debug + PartialEq + Hash + Send + Sync + 'static,
{
}

/// `Some` forwards to the wrapped item; `None` shows as a dump.
impl<T> AdapterItem for Option<T>
where
    T: AdapterItem + PartialEq + Hash,
{
    fn view(&self, theme: &dyn Theme) -> Option<Box<dyn Control>> {
        self.as_ref().and_then(|item| item.view(theme))
    }

    fn text(&self) -> Option<String> {
        self.as_ref().and_then(|item| item.text())
    }
}

/// An item identified and displayed by its `Debug` output.
///
/// Lets any `Debug` value be shown, including ones without `Hash` such as
/// floats or structs holding them. Two `DebugItem`s of the same type are the
/// same item when they print the same, so `0.0` and `-0.0` are distinct and
/// `NaN` matches itself.
///
/// ```
/// use trellis::adapter::{Adapter, DebugItem, DefaultAdapter};
///
/// let readings = [20.5_f64, 19.75, 21.0];
/// let mut adapter = DefaultAdapter::new();
/// adapter.set_items(readings.map(DebugItem));
///
/// assert_eq!(adapter.item_index(&DebugItem(19.75_f64)), Some(1));
/// ```
#[derive(Clone, Copy, Default)]
pub struct DebugItem<T>(pub T);

impl<T> DebugItem<T> {
    /// Unwraps the value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for DebugItem<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for DebugItem<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl<T> ItemIdentity for DebugItem<T>
where
    T: fmt::Debug + Send + Sync + 'static,
{
    fn identity_eq(&self, other: &dyn ItemIdentity) -> bool {
        other
            .item_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| format!("{:?}", self.0) == format!("{:?}", other.0))
    }

    fn identity_hash(&self, mut state: &mut dyn Hasher) {
        Hash::hash(&format!("{:?}", self.0), &mut state);
    }

    fn item_any(&self) -> &dyn Any {
        self
    }

    fn item_type_name(&self) -> &'static str {
        type_name::<T>()
    }
}

impl<T> AdapterItem for DebugItem<T>
where
    T: fmt::Debug + Send + Sync + 'static,
{
}

/// An item compared by reference rather than by value.
///
/// Two `Shared` values are the same item only if they point at the same
/// allocation, no matter what the pointee compares as. Capabilities are
/// forwarded to the pointee.
///
/// ```
/// use trellis::adapter::{Shared, same_item};
///
/// let a = Shared::new("row".to_string());
/// let b = Shared::new("row".to_string());
///
/// assert!(same_item(&a, &a.clone()));
/// assert!(!same_item(&a, &b));
/// ```
pub struct Shared<T>(Arc<T>);

impl<T> Shared<T> {
    /// Wraps a new value.
    pub fn new(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Returns the shared pointer.
    pub fn as_arc(&self) -> &Arc<T> {
        &self.0
    }
}

impl<T> From<Arc<T>> for Shared<T> {
    fn from(value: Arc<T>) -> Self {
        Self(value)
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Eq for Shared<T> {}

impl<T> Hash for Shared<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl<T: AdapterItem> AdapterItem for Shared<T> {
    fn view(&self, theme: &dyn Theme) -> Option<Box<dyn Control>> {
        self.0.view(theme)
    }

    fn text(&self) -> Option<String> {
        self.0.text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq, Hash)]
    struct Point {
        x: i32,
        y: i32,
    }

    impl AdapterItem for Point {}

    #[test]
    fn test_value_identity() {
        let a = Point { x: 1, y: 2 };
        let b = Point { x: 1, y: 2 };
        let c = Point { x: 2, y: 1 };

        assert!(same_item(&a, &b));
        assert!(!same_item(&a, &c));
    }

    #[test]
    fn test_different_types_never_match() {
        assert!(!same_item(&1_u32, &1_u64));
        assert!(!same_item(&"a", &"a".to_string()));
        assert!(same_item(&"a", &"a"));
    }

    #[test]
    fn test_shared_uses_reference_identity() {
        let first = Shared::new(Point { x: 0, y: 0 });
        let twin = Shared::new(Point { x: 0, y: 0 });

        assert!(same_item(&first, &first.clone()));
        assert!(!same_item(&first, &twin));
        assert_eq!(first.x, 0);
    }

    #[test]
    fn test_builtin_items_offer_text() {
        assert_eq!("abc".text().as_deref(), Some("abc"));
        assert_eq!(42_i64.text().as_deref(), Some("42"));
        assert_eq!(true.text().as_deref(), Some("true"));
        assert_eq!(Point { x: 1, y: 1 }.text(), None);
    }

    #[test]
    fn test_shared_forwards_text() {
        let shared = Shared::new("label".to_string());
        assert_eq!(shared.text().as_deref(), Some("label"));
        assert_eq!(format!("{shared:?}"), "\"label\"");
    }

    #[test]
    fn test_tuple_items_match_by_value() {
        assert!(same_item(&(1_u32, "a"), &(1_u32, "a")));
        assert!(!same_item(&(1_u32, "a"), &(1_u32, "b")));
        assert!(!same_item(&(1_u32, "a"), &(1_u32, "a", 'x')));
        assert_eq!((1_u32, "a").text(), None);
    }

    #[test]
    fn test_option_forwards_to_some() {
        assert_eq!(Some("x").text().as_deref(), Some("x"));
        assert_eq!(None::<&str>.text(), None);
        assert!(same_item(&None::<u8>, &None::<u8>));
        assert!(!same_item(&Some(1_u8), &None::<u8>));
    }

    #[test]
    fn test_vec_is_an_item() {
        assert!(same_item(&vec![1_u8, 2], &vec![1_u8, 2]));
        assert!(!same_item(&vec![1_u8, 2], &vec![2_u8, 1]));
        assert_eq!(vec![1_u8].text(), None);
    }

    #[test]
    fn test_debug_item_identity() {
        assert!(same_item(&DebugItem(1.5_f64), &DebugItem(1.5_f64)));
        assert!(same_item(&DebugItem(f64::NAN), &DebugItem(f64::NAN)));
        assert!(!same_item(&DebugItem(0.0_f64), &DebugItem(-0.0_f64)));
        assert!(!same_item(&DebugItem(1.0_f32), &DebugItem(1.0_f64)));
        assert_eq!(DebugItem(2.5_f32).item_type_name(), "f32");
        assert_eq!(format!("{:?}", DebugItem(vec![0.5_f32])), "[0.5]");
    }

    #[test]
    fn test_item_type_name() {
        let point = Point { x: 0, y: 0 };
        assert!(point.item_type_name().ends_with("Point"));
    }
}
