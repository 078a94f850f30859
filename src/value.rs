// Copyright 2025 Cowboy AI, LLC.

//! Slot values for prototypal objects
//!
//! A [`Value`] is the dynamic payload stored in an object slot. Data
//! variants (null, booleans, numbers, strings, lists, maps) convert to and
//! from JSON; the two reference variants are [`Value::Object`], a shared
//! handle to another object, and [`Value::Method`], an invocable native
//! function with an explicit receiver.
//!
//! Assignment semantics are shallow at the slot level: copying a `Value`
//! clones data variants but only bumps the reference count of an
//! object-valued slot, so intentional aliasing across clones stays
//! expressible through [`Value::Object`].

use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

use crate::errors::{ObjectError, ObjectResult};
use crate::object::ProtoObject;

/// An insertion-ordered mapping from slot names to values
///
/// Mixin resolution always yields one of these, and every object stores its
/// own slots in one. Insertion order is preserved and observable through
/// iteration and serialization.
pub type PropertyMap = IndexMap<String, Value>;

/// The native function type backing a [`Method`]
///
/// The first parameter is the explicit receiver: the object the method is
/// being invoked on, passed mutably so initializers and mutators can write
/// slots on it.
pub type MethodBody = Arc<dyn Fn(&mut ProtoObject, &[Value]) -> ObjectResult<Value> + Send + Sync>;

/// An invocable slot value
///
/// Methods are shared behind an [`Arc`], so copying a method-valued slot
/// during extension shares the underlying function. Equality is identity:
/// two methods are equal only when they share the same function.
#[derive(Clone)]
pub struct Method {
    body: MethodBody,
}

impl Method {
    /// Wrap a native function as a method value
    pub fn new<F>(body: F) -> Self
    where
        F: Fn(&mut ProtoObject, &[Value]) -> ObjectResult<Value> + Send + Sync + 'static,
    {
        Self {
            body: Arc::new(body),
        }
    }

    /// Invoke the method on `receiver` with the given arguments
    pub fn invoke(&self, receiver: &mut ProtoObject, args: &[Value]) -> ObjectResult<Value> {
        (self.body)(receiver, args)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Method(<native>)")
    }
}

impl PartialEq for Method {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

/// A value that can be stored in an object slot
///
/// # Examples
///
/// ```rust
/// use proto_object::Value;
///
/// let v = Value::from(42);
/// assert_eq!(v.as_int(), Some(42));
/// assert!(!v.is_callable());
///
/// let v = Value::from("label");
/// assert_eq!(v.as_str(), Some("label"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null/missing value
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Ordered list of values
    List(Vec<Value>),
    /// Nested property mapping
    Map(PropertyMap),
    /// Shared reference to another object
    Object(Arc<ProtoObject>),
    /// Invocable method
    Method(Method),
}

impl Value {
    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this value can be invoked as a method
    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Method(_))
    }

    /// Get as boolean if this is a Bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as integer if this is an Int value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as float if this is a Float value
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Get as string reference if this is a String value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as list reference if this is a List value
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get as property-map reference if this is a Map value
    pub fn as_map(&self) -> Option<&PropertyMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Get as shared object handle if this is an Object value
    pub fn as_object(&self) -> Option<&Arc<ProtoObject>> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Get as method reference if this is a Method value
    pub fn as_method(&self) -> Option<&Method> {
        match self {
            Value::Method(method) => Some(method),
            _ => None,
        }
    }

    /// Convert to a JSON value
    ///
    /// Data variants convert structurally; an [`Value::Object`] contributes
    /// its own slots only (the delegation link is not followed). Fails fast
    /// with [`ObjectError::SerializationError`] when a method value is
    /// reached anywhere in the tree.
    pub fn to_json(&self) -> ObjectResult<serde_json::Value> {
        match self {
            Value::Null => Ok(serde_json::Value::Null),
            Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
            Value::Int(i) => Ok(serde_json::Value::from(*i)),
            Value::Float(x) => Ok(serde_json::Value::from(*x)),
            Value::String(s) => Ok(serde_json::Value::String(s.clone())),
            Value::List(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(item.to_json()?);
                }
                Ok(serde_json::Value::Array(out))
            }
            Value::Map(map) => map_to_json(map),
            Value::Object(object) => map_to_json(object.own_slots()),
            Value::Method(_) => Err(ObjectError::SerializationError(
                "method values cannot be serialized".to_string(),
            )),
        }
    }
}

fn map_to_json(map: &PropertyMap) -> ObjectResult<serde_json::Value> {
    let mut out = serde_json::Map::with_capacity(map.len());
    for (key, value) in map {
        out.insert(key.clone(), value.to_json()?);
    }
    Ok(serde_json::Value::Object(out))
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Map(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Value::Object(object) => write!(f, "<object with {} own slots>", object.len()),
            Value::Method(_) => f.write_str("<method>"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<PropertyMap> for Value {
    fn from(map: PropertyMap) -> Self {
        Value::Map(map)
    }
}

impl From<Arc<ProtoObject>> for Value {
    fn from(object: Arc<ProtoObject>) -> Self {
        Value::Object(object)
    }
}

impl From<Method> for Value {
    fn from(method: Method) -> Self {
        Value::Method(method)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(items) => items.serialize(serializer),
            Value::Map(map) => map.serialize(serializer),
            Value::Object(object) => object.serialize(serializer),
            Value::Method(_) => Err(serde::ser::Error::custom(
                "method values cannot be serialized",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json = serde_json::Value::deserialize(deserializer)?;
        Ok(Value::from(json))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Test conversions into Value
    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(7), Value::Int(7));
        assert_eq!(Value::from(7i64), Value::Int(7));
        assert_eq!(Value::from(2.5), Value::Float(2.5));
        assert_eq!(Value::from("hi"), Value::String("hi".to_string()));
        assert_eq!(
            Value::from(vec![Value::from(1), Value::from(2)]),
            Value::List(vec![Value::Int(1), Value::Int(2)])
        );
    }

    /// Test the as_* accessors return None on mismatched variants
    #[test]
    fn test_accessors() {
        let v = Value::from(9);
        assert_eq!(v.as_int(), Some(9));
        assert_eq!(v.as_bool(), None);
        assert_eq!(v.as_str(), None);
        assert!(!v.is_null());
        assert!(Value::Null.is_null());

        let map = PropertyMap::from([("a".to_string(), Value::from(1))]);
        let v = Value::from(map.clone());
        assert_eq!(v.as_map(), Some(&map));
        assert_eq!(v.as_list(), None);
    }

    /// Test method identity equality
    #[test]
    fn test_method_equality_is_identity() {
        let m = Method::new(|_, _| Ok(Value::Null));
        let same = m.clone();
        let other = Method::new(|_, _| Ok(Value::Null));

        assert_eq!(Value::from(m.clone()), Value::from(same));
        assert_ne!(Value::from(m), Value::from(other));
    }

    /// Test method invocation writes through the explicit receiver
    #[test]
    fn test_method_invoke() {
        let m = Method::new(|receiver, args| {
            receiver.set("count", Value::from(args.len() as i64));
            Ok(Value::Null)
        });

        let mut object = ProtoObject::new();
        m.invoke(&mut object, &[Value::from(1), Value::from(2)])
            .unwrap();
        assert_eq!(object.get("count"), Some(&Value::Int(2)));
    }

    /// Test JSON round-trip for data variants
    #[test]
    fn test_json_round_trip() {
        let map = PropertyMap::from([
            ("name".to_string(), Value::from("widget")),
            ("size".to_string(), Value::from(3)),
            (
                "tags".to_string(),
                Value::from(vec![Value::from("a"), Value::from("b")]),
            ),
        ]);
        let value = Value::from(map);

        let json = value.to_json().unwrap();
        let back = Value::from(json);
        assert_eq!(back, value);
    }

    /// Test methods are rejected by JSON conversion
    #[test]
    fn test_methods_are_not_serializable() {
        let value = Value::from(Method::new(|_, _| Ok(Value::Null)));
        let err = value.to_json().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Serialization error: method values cannot be serialized"
        );

        let err = serde_json::to_string(&value).unwrap_err();
        assert!(err.to_string().contains("cannot be serialized"));
    }

    /// Test serde deserialization maps JSON numbers onto Int and Float
    #[test]
    fn test_deserialize_numbers() {
        let value: Value = serde_json::from_str("3").unwrap();
        assert_eq!(value, Value::Int(3));

        let value: Value = serde_json::from_str("3.5").unwrap();
        assert_eq!(value, Value::Float(3.5));
    }

    /// Test display formatting
    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from(3).to_string(), "3");
        assert_eq!(Value::from("x").to_string(), "\"x\"");
        assert_eq!(
            Value::from(vec![Value::from(1), Value::from(2)]).to_string(),
            "[1, 2]"
        );
        let map = PropertyMap::from([("a".to_string(), Value::from(1))]);
        assert_eq!(Value::from(map).to_string(), "{a: 1}");
        assert_eq!(
            Value::from(Method::new(|_, _| Ok(Value::Null))).to_string(),
            "<method>"
        );
    }
}
