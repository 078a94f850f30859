//! # Proto Object
//!
//! Prototypal composition building blocks: objects grow by copying slots
//! from mixin sources and construct new instances through delegation links
//! rather than class instantiation.
//!
//! This crate provides three small surfaces:
//! - **Composition engine**: [`extend`], [`fast_extend`], and [`clone`]
//!   resolve mixin sources ([`Mixin`], [`DataObject`]) to plain property
//!   mappings and merge them onto a target with right-most precedence
//! - **Clonable root**: [`clonable_root`] and the [`Clonable`] trait build
//!   new instances (`make`, `clone_with`) delegating to any shared object
//! - **Functional accessors**: [`property`], [`has_property`], and
//!   [`method`] turn slot access and method invocation into ordinary
//!   callable values
//!
//! ## Design Principles
//!
//! 1. **Explicit delegation**: an object is own slots plus an optional
//!    parent reference; lookup is an own-slot check, then recursion on the
//!    parent, with no language-native inheritance involved
//! 2. **Explicit receivers**: methods and constructors take the object
//!    they operate on as an argument, never an implicit call-site `this`
//! 3. **Immutable parents**: delegation targets are shared behind `Arc`,
//!    so constructing instances can never mutate the prototype
//! 4. **Right-most wins**: later mixins are applied after earlier ones;
//!    conflict resolution is application order, nothing more
//! 5. **Fail fast**: faults carry the offending slot name and surface to
//!    the immediate caller; no retries and no partial-success states

#![warn(missing_docs)]

mod accessors;
mod compose;
mod errors;
mod mixin;
mod object;
mod value;

// Re-export core types
pub use accessors::{has_property, method, property};
pub use compose::{clone, extend, fast_extend};
pub use errors::{ObjectError, ObjectResult};
pub use mixin::{is_data_object, resolve_mixin, DataObject, Mixin};
pub use object::{clonable_root, Clonable, ProtoObject};
pub use value::{Method, MethodBody, PropertyMap, Value};
