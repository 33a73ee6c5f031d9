//! Immutable, ordered lists of field descriptions.
//!
//! Tooling that inspects or generates type definitions can treat "the fields of a type" the same way whether the
//! fields came from reflected type information or were constructed by hand. Every list supports positional access,
//! half-open range slicing and exact, first-match lookup by name through the [`FieldList`] trait.
//!
//! ## Notes
//!
//! - No mutation: order and length are fixed at construction.
//! - Misuse (bad indices or ranges) is reported as a [`FieldListError`], never as a panic.
//!
//! ## Examples
//!
//! ```
//! use fieldlist::{FieldDescription, FieldList, Reflect};
//!
//! #[derive(Reflect)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let fields = Point::field_list();
//! assert_eq!(fields.get(0).unwrap().name(), "x");
//!
//! let tail = fields.slice(1, 2).unwrap();
//! assert_eq!(tail.named("y").unwrap().owner(), Some("Point"));
//! ```

#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

// Lets `#[derive(Reflect)]` expand to `::fieldlist::...` inside this crate's own tests.
extern crate self as fieldlist;

pub mod description;
pub mod errors;
pub mod list;

pub use description::{FieldDescription, ForLoadedField, LoadedField, Reflect};
pub use errors::{ErrorKind, FieldListError};
pub use list::{Empty, Explicit, FieldList, ForLoadedFields, Iter};

pub use fieldlist_derive::Reflect;
