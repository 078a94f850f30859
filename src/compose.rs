// Copyright 2025 Cowboy AI, LLC.

//! Extension and cloning combinators
//!
//! The extension engine copies resolved mixin mappings onto a target
//! object's own slots, in sequence order. Later mixins are applied after
//! earlier ones, so right-most precedence on key conflicts falls out of
//! the application order; no explicit conflict detection exists.
//!
//! Assignment is shallow: each slot value is cloned at the `Value` level,
//! and object-valued slots keep sharing their referent.

use std::sync::Arc;
use tracing::trace;

use crate::mixin::{is_data_object, resolve_mixin, Mixin};
use crate::object::ProtoObject;

/// Extend the target object with the provided mixins
///
/// Low-level primitive behind [`extend`]: resolves each mixin in order and
/// assigns every key of the resolved mapping onto the target. Returns the
/// same target reference for chaining. An empty mixin sequence is a no-op.
pub fn fast_extend<'a>(target: &'a mut ProtoObject, mixins: &[Mixin]) -> &'a mut ProtoObject {
    for mixin in mixins {
        let props = resolve_mixin(mixin);
        trace!(
            slots = props.len(),
            data_object = is_data_object(mixin),
            "applying mixin"
        );
        for (key, value) in props.iter() {
            target.set(key.as_str(), value.clone());
        }
    }
    target
}

/// Extend the target object with the provided mixins, right-most wins
///
/// Public wrapper over [`fast_extend`] accepting anything convertible to
/// a [`Mixin`]. When multiple mixins define the same key, the value from
/// the last one in the sequence ends up on the target. Existing target
/// slots not named by any mixin are left untouched.
///
/// # Examples
///
/// ```rust
/// use proto_object::{extend, ProtoObject, PropertyMap, Value};
///
/// let mut target = ProtoObject::new();
/// target.set("a", Value::from(1));
///
/// extend(
///     &mut target,
///     [PropertyMap::from([("b".to_string(), Value::from(2))])],
/// );
///
/// assert_eq!(target.get("a"), Some(&Value::Int(1)));
/// assert_eq!(target.get("b"), Some(&Value::Int(2)));
/// ```
pub fn extend<'a, I, M>(target: &'a mut ProtoObject, mixins: I) -> &'a mut ProtoObject
where
    I: IntoIterator<Item = M>,
    M: Into<Mixin>,
{
    let mixins: Vec<Mixin> = mixins.into_iter().map(Into::into).collect();
    fast_extend(target, &mixins)
}

/// Create a new object delegating to `proto` and extend it with mixins
///
/// The prototype is unmodified; slot lookups that miss on the new object
/// fall back to it, recursively through its own chain.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use proto_object::{clone, ProtoObject, Value};
///
/// let mut proto = ProtoObject::new();
/// proto.set("z", Value::from(9));
/// let proto = Arc::new(proto);
///
/// let object = clone(&proto, &[]);
/// assert_eq!(object.get("z"), Some(&Value::Int(9)));
/// assert!(!object.has_own("z"));
/// ```
pub fn clone(proto: &Arc<ProtoObject>, mixins: &[Mixin]) -> ProtoObject {
    let mut object = ProtoObject::delegating_to(Arc::clone(proto));
    fast_extend(&mut object, mixins);
    object
}
