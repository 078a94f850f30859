// Copyright 2025 Cowboy AI, LLC.

//! Delegating objects and the clonable root
//!
//! A [`ProtoObject`] is a mapping of own slots plus an optional delegation
//! link to a parent object. Lookup checks the own slots first and then
//! recurses through the delegate, so slots reachable through the chain
//! behave like inherited properties without any class machinery.
//!
//! Parents are held behind [`Arc`], which makes a parent immutable for as
//! long as children reference it: constructing instances can never mutate
//! the prototype they delegate from. The [`Clonable`] trait provides the
//! prototypal constructors (`make`, `clone_with`) on shared objects.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::trace;

use crate::compose;
use crate::errors::ObjectResult;
use crate::mixin::Mixin;
use crate::value::{PropertyMap, Value};

/// Slot consulted by [`Clonable::make`] to initialize new instances
const INIT_SLOT: &str = "init";

/// An object composed of own slots and an optional delegation link
///
/// Slot lookup falls back to the delegate when a name is absent from the
/// own slots, recursively through the delegate's own chain. Only own slots
/// are enumerable: `keys`, `iter`, `len`, and serialization never traverse
/// the delegation link.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use proto_object::{ProtoObject, Value};
///
/// let mut parent = ProtoObject::new();
/// parent.set("z", Value::from(9));
/// let parent = Arc::new(parent);
///
/// let child = ProtoObject::delegating_to(Arc::clone(&parent));
/// assert_eq!(child.get("z"), Some(&Value::Int(9)));
/// assert!(child.has("z"));
/// assert!(!child.has_own("z"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProtoObject {
    slots: PropertyMap,
    #[serde(skip)]
    delegate: Option<Arc<ProtoObject>>,
}

impl ProtoObject {
    /// Create an empty object with no delegation link
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an object with the given own slots and no delegation link
    pub fn with_slots(slots: PropertyMap) -> Self {
        Self {
            slots,
            delegate: None,
        }
    }

    /// Create an empty object delegating to `parent`
    pub fn delegating_to(parent: Arc<ProtoObject>) -> Self {
        Self {
            slots: PropertyMap::new(),
            delegate: Some(parent),
        }
    }

    /// The delegation link, if any
    pub fn delegate(&self) -> Option<&Arc<ProtoObject>> {
        self.delegate.as_ref()
    }

    /// The own slots of this object
    pub fn own_slots(&self) -> &PropertyMap {
        &self.slots
    }

    /// Assign a slot, overwriting any existing value under the same name
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.slots.insert(key.into(), value.into());
    }

    /// Look up a slot on the own slots only
    pub fn get_own(&self, key: &str) -> Option<&Value> {
        self.slots.get(key)
    }

    /// Look up a slot, falling back through the delegation chain
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self.slots.get(key) {
            Some(value) => Some(value),
            None => self
                .delegate
                .as_deref()
                .and_then(|parent| parent.get(key)),
        }
    }

    /// Check whether a slot exists on the own slots only
    pub fn has_own(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    /// Check whether a slot is reachable, own or through the chain
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove an own slot, returning its value
    ///
    /// Slots reachable only through the delegation chain are not affected;
    /// removing an own slot can expose a delegated slot of the same name.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.slots.shift_remove(key)
    }

    /// Iterate over own slot names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// Iterate over own slots in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.slots.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// The number of own slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the object has no own slots
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Prototypal constructors for shared objects
///
/// Implemented for `Arc<ProtoObject>`, so any shared object can serve as
/// the ancestor of a delegation chain. The receiver is the delegation
/// target itself: no call-site-bound `this` is involved.
pub trait Clonable {
    /// Construct a new instance delegating to this object
    ///
    /// If an `init` slot is reachable on the new instance (own or
    /// inherited) and holds a [`Method`](crate::Method), it is invoked on
    /// the instance with `args` for its side effects; its return value is
    /// discarded. A reachable `init` that is not callable is skipped. When
    /// `init` fails, the error propagates and the partially initialized
    /// instance is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use proto_object::{Clonable, Method, ProtoObject, Value};
    ///
    /// let mut proto = ProtoObject::new();
    /// proto.set(
    ///     "init",
    ///     Method::new(|receiver, args| {
    ///         receiver.set("v", args.first().cloned().unwrap_or(Value::Null));
    ///         Ok(Value::Null)
    ///     }),
    /// );
    /// let proto = Arc::new(proto);
    ///
    /// let instance = proto.make(&[Value::from(7)]).unwrap();
    /// assert_eq!(instance.get("v"), Some(&Value::Int(7)));
    /// assert!(!proto.has_own("v"));
    /// ```
    fn make(&self, args: &[Value]) -> ObjectResult<ProtoObject>;

    /// Construct a new object delegating to this one, extended with mixins
    ///
    /// Equivalent to [`clone`](crate::clone) with this object as the
    /// delegation target. Named `clone_with` so it does not shadow
    /// [`Clone::clone`] on the method namespace.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use proto_object::{clonable_root, Clonable, Mixin, PropertyMap, Value};
    ///
    /// let root = clonable_root();
    /// let child = root.clone_with(&[Mixin::from(PropertyMap::from([
    ///     ("x".to_string(), Value::from(1)),
    /// ]))]);
    /// assert_eq!(child.get("x"), Some(&Value::Int(1)));
    /// assert!(root.is_empty());
    /// ```
    fn clone_with(&self, mixins: &[Mixin]) -> ProtoObject;
}

impl Clonable for Arc<ProtoObject> {
    fn make(&self, args: &[Value]) -> ObjectResult<ProtoObject> {
        let mut instance = ProtoObject::delegating_to(Arc::clone(self));
        let init = instance.get(INIT_SLOT).and_then(Value::as_method).cloned();
        if let Some(init) = init {
            trace!(args = args.len(), "initializing new instance");
            init.invoke(&mut instance, args)?;
        }
        Ok(instance)
    }

    fn clone_with(&self, mixins: &[Mixin]) -> ProtoObject {
        compose::clone(self, mixins)
    }
}

/// Create an empty shared ancestor for a delegation chain
///
/// The root carries no slots of its own; the [`Clonable`] operations are
/// available on it (as on every shared object), so it serves as the
/// ultimate parent for prototypal construction.
pub fn clonable_root() -> Arc<ProtoObject> {
    Arc::new(ProtoObject::new())
}
