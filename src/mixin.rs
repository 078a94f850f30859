// Copyright 2025 Cowboy AI, LLC.

//! Mixin sources and their resolution to plain property mappings
//!
//! A [`Mixin`] is either a plain [`PropertyMap`] or a [`DataObject`]: a
//! capability that produces its mapping on demand. Resolution collapses
//! both variants to a plain mapping, which is the only shape the extension
//! engine ever copies from.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::object::ProtoObject;
use crate::value::PropertyMap;

/// A capability that yields a property mapping on demand
///
/// Implement this for types whose mixin contribution is computed rather
/// than stored: the produced mapping is what gets copied onto the target,
/// regardless of any other state the implementor carries.
pub trait DataObject: Send + Sync {
    /// Produce the property mapping this source contributes
    fn to_data(&self) -> PropertyMap;
}

/// A source of properties for the extension engine
///
/// # Examples
///
/// ```rust
/// use proto_object::{DataObject, Mixin, PropertyMap, Value, is_data_object};
///
/// struct Position {
///     x: i64,
///     y: i64,
/// }
///
/// impl DataObject for Position {
///     fn to_data(&self) -> PropertyMap {
///         PropertyMap::from([
///             ("x".to_string(), Value::from(self.x)),
///             ("y".to_string(), Value::from(self.y)),
///         ])
///     }
/// }
///
/// let plain = Mixin::from(PropertyMap::new());
/// let data = Mixin::data(Position { x: 1, y: 2 });
/// assert!(!is_data_object(&plain));
/// assert!(is_data_object(&data));
/// ```
#[derive(Clone)]
pub enum Mixin {
    /// A plain property mapping, used as-is
    Plain(PropertyMap),
    /// A data-producing capability, resolved through [`DataObject::to_data`]
    Data(Arc<dyn DataObject>),
}

impl Mixin {
    /// Wrap a data-producing source as a mixin
    pub fn data<D: DataObject + 'static>(source: D) -> Self {
        Mixin::Data(Arc::new(source))
    }
}

impl fmt::Debug for Mixin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mixin::Plain(props) => f.debug_tuple("Plain").field(props).finish(),
            Mixin::Data(_) => f.write_str("Data(<data object>)"),
        }
    }
}

impl From<PropertyMap> for Mixin {
    fn from(props: PropertyMap) -> Self {
        Mixin::Plain(props)
    }
}

/// Snapshot of the object's own slots; slots reachable only through its
/// delegation chain are not part of the mixin.
impl From<&ProtoObject> for Mixin {
    fn from(object: &ProtoObject) -> Self {
        Mixin::Plain(object.own_slots().clone())
    }
}

impl<D: DataObject + 'static> From<Arc<D>> for Mixin {
    fn from(source: Arc<D>) -> Self {
        Mixin::Data(source)
    }
}

/// Check whether a mixin is a data-producing capability
pub fn is_data_object(mixin: &Mixin) -> bool {
    matches!(mixin, Mixin::Data(_))
}

/// Resolve a mixin to a plain property mapping
///
/// A plain mixin borrows its mapping; a data object produces one through
/// [`DataObject::to_data`]. No validation is performed on the produced
/// mapping's contents.
pub fn resolve_mixin(mixin: &Mixin) -> Cow<'_, PropertyMap> {
    match mixin {
        Mixin::Plain(props) => Cow::Borrowed(props),
        Mixin::Data(source) => Cow::Owned(source.to_data()),
    }
}
