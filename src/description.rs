//! Field descriptions and loaded field handles.
//!
//! A [`FieldDescription`] is anything that can report a field's name. [`LoadedField`] is the handle captured from
//! already-available type information (emitted by `#[derive(Reflect)]`), and [`ForLoadedField`] is the description
//! wrapped around such a handle.

use core::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::list::ForLoadedFields;

/// Describes a single field of a type.
///
/// Only [`name`](FieldDescription::name) is required. Lookups by name compare against it exactly.
pub trait FieldDescription {
    /// Returns the field's name.
    fn name(&self) -> &str;

    /// Returns the declared type rendered as text, if known.
    ///
    /// Loaded fields report the type as written in source, e.g. `Option<String>` or `&'static str`. Paths are kept
    /// as written, not resolved.
    fn type_name(&self) -> Option<&str> {
        None
    }

    /// Returns the name of the type declaring this field, if known.
    fn owner(&self) -> Option<&str> {
        None
    }
}

macro_rules! forward_field_description {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<T: FieldDescription + ?Sized> FieldDescription for $ptr {
                fn name(&self) -> &str {
                    (**self).name()
                }

                fn type_name(&self) -> Option<&str> {
                    (**self).type_name()
                }

                fn owner(&self) -> Option<&str> {
                    (**self).owner()
                }
            }
        )*
    };
}

forward_field_description!(&T, Box<T>, Rc<T>, Arc<T>);

/// Opaque handle to a field of a reflected type.
///
/// Handles are baked into `'static` arrays by `#[derive(Reflect)]`, so construction is `const`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LoadedField {
    name: &'static str,
    type_name: &'static str,
    owner: &'static str,
    position: usize,
}

impl LoadedField {
    pub const fn new(name: &'static str, type_name: &'static str, owner: &'static str, position: usize) -> Self {
        Self {
            name,
            type_name,
            owner,
            position,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub const fn owner(&self) -> &'static str {
        self.owner
    }

    /// Declaration index of the field within its owner.
    pub const fn position(&self) -> usize {
        self.position
    }
}

/// A [`FieldDescription`] backed by a [`LoadedField`] handle.
///
/// Cheap to create: wrapping only stores the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct ForLoadedField<'a> {
    field: &'a LoadedField,
}

impl<'a> ForLoadedField<'a> {
    pub const fn new(field: &'a LoadedField) -> Self {
        Self { field }
    }

    /// Returns the wrapped handle.
    pub const fn handle(&self) -> &'a LoadedField {
        self.field
    }
}

impl FieldDescription for ForLoadedField<'_> {
    fn name(&self) -> &str {
        self.field.name
    }

    fn type_name(&self) -> Option<&str> {
        Some(self.field.type_name).filter(|ty| !ty.is_empty())
    }

    fn owner(&self) -> Option<&str> {
        Some(self.field.owner).filter(|owner| !owner.is_empty())
    }
}

impl fmt::Display for ForLoadedField<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.type_name() {
            Some(ty) => write!(f, "{}: {}", self.field.name, ty),
            None => f.write_str(self.field.name),
        }
    }
}

impl<'a> From<&'a LoadedField> for ForLoadedField<'a> {
    fn from(field: &'a LoadedField) -> Self {
        Self::new(field)
    }
}

/// Provides the loaded field handles of a type.
///
/// Typically derived with `#[derive(Reflect)]` on structs.
///
/// # Examples
///
/// ```
/// use fieldlist::{FieldDescription, FieldList, Reflect};
///
/// #[derive(Reflect)]
/// struct Person {
///     name: String,
///     age: i64,
/// }
///
/// let fields = Person::field_list();
/// assert_eq!(fields.len(), 2);
/// assert_eq!(fields.named("age").unwrap().type_name(), Some("i64"));
/// ```
pub trait Reflect {
    /// Returns the handles of all fields in declaration order.
    fn loaded_fields() -> &'static [LoadedField];

    /// Returns the fields as a loaded-source field list.
    fn field_list() -> ForLoadedFields<'static>
    where
        Self: Sized,
    {
        ForLoadedFields::new(Self::loaded_fields())
    }
}
