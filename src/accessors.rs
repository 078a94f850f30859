// Copyright 2025 Cowboy AI, LLC.

//! Slot access and method invocation as ordinary functions
//!
//! These adapters turn member access into plain callable values, so slot
//! reads and method calls can be passed where a function is expected
//! instead of being spelled with method syntax. All three keep the
//! receiver as the final parameter.

use crate::errors::{ObjectError, ObjectResult};
use crate::object::ProtoObject;
use crate::value::Value;

/// Read a slot from an object, resolving through its delegation chain
///
/// Returns `None` when the slot is unreachable.
///
/// # Examples
///
/// ```rust
/// use proto_object::{property, ProtoObject, Value};
///
/// let mut object = ProtoObject::new();
/// object.set("v", Value::from(7));
/// assert_eq!(property("v", &object), Some(&Value::Int(7)));
/// assert_eq!(property("missing", &object), None);
/// ```
pub fn property<'a>(name: &str, object: &'a ProtoObject) -> Option<&'a Value> {
    object.get(name)
}

/// Check whether a slot is reachable on an object, own or inherited
///
/// An existence test, not an enumerability test: slots reachable only
/// through the delegation chain count.
pub fn has_property(name: &str, object: &ProtoObject) -> bool {
    object.has(name)
}

/// Invoke a slot as a method on an object
///
/// The receiver is the final parameter; `args` are applied ahead of
/// anything a caller would append. The slot is resolved through the
/// delegation chain and invoked with the object itself as the receiver.
///
/// # Errors
///
/// [`ObjectError::SlotNotFound`] when `name` is unreachable,
/// [`ObjectError::NotCallable`] when the slot does not hold a method.
///
/// # Examples
///
/// ```rust
/// use proto_object::{method, Method, ProtoObject, Value};
///
/// let mut object = ProtoObject::new();
/// object.set("items", Value::from(vec![Value::from("x"), Value::from("y")]));
/// object.set(
///     "append",
///     Method::new(|receiver, args| {
///         let mut items = receiver
///             .get("items")
///             .and_then(Value::as_list)
///             .cloned()
///             .unwrap_or_default();
///         items.extend(args.iter().cloned());
///         receiver.set("items", Value::from(items.clone()));
///         Ok(Value::from(items))
///     }),
/// );
///
/// let result = method("append", &[Value::from("a")], &mut object).unwrap();
/// assert_eq!(
///     result,
///     Value::from(vec![Value::from("x"), Value::from("y"), Value::from("a")])
/// );
/// ```
pub fn method(name: &str, args: &[Value], object: &mut ProtoObject) -> ObjectResult<Value> {
    let target = match object.get(name) {
        None => {
            return Err(ObjectError::SlotNotFound {
                key: name.to_string(),
            })
        }
        Some(Value::Method(m)) => m.clone(),
        Some(_) => {
            return Err(ObjectError::NotCallable {
                key: name.to_string(),
            })
        }
    };
    target.invoke(object, args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Method;
    use std::sync::Arc;

    /// Test property resolves through the delegation chain
    #[test]
    fn test_property_resolves_chain() {
        let mut parent = ProtoObject::new();
        parent.set("z", Value::from(9));
        let parent = Arc::new(parent);

        let child = ProtoObject::delegating_to(parent);

        assert_eq!(property("z", &child), Some(&Value::Int(9)));
        assert_eq!(property("missing", &child), None);
    }

    /// Test has_property is an existence test over the chain
    #[test]
    fn test_has_property() {
        let mut parent = ProtoObject::new();
        parent.set("inherited", Value::from(1));
        let parent = Arc::new(parent);

        let mut child = ProtoObject::delegating_to(parent);
        child.set("own", Value::from(2));

        assert!(has_property("own", &child));
        assert!(has_property("inherited", &child));
        assert!(!has_property("absent", &child));
    }

    /// Test method invokes with the object as receiver
    #[test]
    fn test_method_invokes_on_receiver() {
        let mut object = ProtoObject::new();
        object.set("count", Value::from(1));
        object.set(
            "bump",
            Method::new(|receiver, args| {
                let step = args.first().and_then(Value::as_int).unwrap_or(1);
                let count = receiver
                    .get("count")
                    .and_then(Value::as_int)
                    .unwrap_or_default();
                receiver.set("count", Value::from(count + step));
                Ok(Value::from(count + step))
            }),
        );

        let result = method("bump", &[Value::from(4)], &mut object).unwrap();
        assert_eq!(result, Value::Int(5));
        assert_eq!(object.get("count"), Some(&Value::Int(5)));
    }

    /// Test inherited methods run against the invoking object
    #[test]
    fn test_method_inherited_receiver_is_child() {
        let mut parent = ProtoObject::new();
        parent.set(
            "mark",
            Method::new(|receiver, _| {
                receiver.set("marked", Value::from(true));
                Ok(Value::Null)
            }),
        );
        let parent = Arc::new(parent);

        let mut child = ProtoObject::delegating_to(Arc::clone(&parent));
        method("mark", &[], &mut child).unwrap();

        assert!(child.has_own("marked"));
        assert!(!parent.has("marked"));
    }

    /// Test missing and non-callable slots fail fast with the key name
    #[test]
    fn test_method_failures() {
        let mut object = ProtoObject::new();
        object.set("label", Value::from("text"));

        let err = method("absent", &[], &mut object).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Slot not found: absent");

        let err = method("label", &[], &mut object).unwrap_err();
        assert!(err.is_not_callable());
        assert_eq!(err.to_string(), "Slot is not callable: label");
    }

    /// Test bound arguments are applied ahead of the call
    #[test]
    fn test_method_argument_order() {
        let mut object = ProtoObject::new();
        object.set(
            "join",
            Method::new(|_, args| {
                let parts: Vec<&str> = args.iter().filter_map(Value::as_str).collect();
                Ok(Value::from(parts.join("-")))
            }),
        );

        let result = method(
            "join",
            &[Value::from("a"), Value::from("b")],
            &mut object,
        )
        .unwrap();
        assert_eq!(result, Value::from("a-b"));
    }
}
