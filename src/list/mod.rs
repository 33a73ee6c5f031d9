//! The [`FieldList`] contract and its three backing strategies.
//!
//! - [`ForLoadedFields`]: backed by loaded field handles, wraps each on access.
//! - [`Explicit`]: backed by caller-supplied descriptions.
//! - [`Empty`]: the stateless zero-length list.
//!
//! All variants are immutable after construction. Slicing yields another [`FieldList`] whose own slices behave
//! the same way.

mod empty;
mod explicit;
mod loaded;

use core::iter::FusedIterator;

pub use empty::Empty;
pub use explicit::Explicit;
pub use loaded::ForLoadedFields;

use crate::description::FieldDescription;
use crate::errors::FieldListError;

/// An ordered, read-only sequence of field descriptions.
///
/// # Examples
///
/// ```
/// use fieldlist::{Explicit, FieldDescription, FieldList};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Field(&'static str);
///
/// impl FieldDescription for Field {
///     fn name(&self) -> &str {
///         self.0
///     }
/// }
///
/// let fields = [Field("a"), Field("b"), Field("c")];
/// let list = Explicit::new(&fields);
/// assert_eq!(list.named("b").unwrap(), Field("b"));
///
/// let tail = list.slice(1, 3).unwrap();
/// assert_eq!(tail.len(), 2);
/// assert!(tail.named("a").unwrap_err().is_not_found());
/// ```
pub trait FieldList {
    /// The description handed out by [`get`](FieldList::get) and [`named`](FieldList::named).
    type Field: FieldDescription;

    /// The list produced by [`slice`](FieldList::slice).
    type Slice: FieldList<Field = Self::Field>;

    /// Number of fields.
    fn len(&self) -> usize;

    /// Returns the field at `index`.
    ///
    /// ## Errors
    /// - [`FieldListError::OutOfRange`] if `index >= self.len()`.
    fn get(&self, index: usize) -> Result<Self::Field, FieldListError>;

    /// Returns the first field whose name equals `name` exactly.
    ///
    /// ## Errors
    /// - [`FieldListError::NotFound`] if no field has that name.
    fn named(&self, name: &str) -> Result<Self::Field, FieldListError>;

    /// Returns the fields in `[from, to)`, in order.
    ///
    /// `from == to` yields an empty list.
    ///
    /// ## Errors
    /// - [`FieldListError::InvalidRange`] if `from > to`.
    /// - [`FieldListError::OutOfRange`] if `to > self.len()`.
    fn slice(&self, from: usize, to: usize) -> Result<Self::Slice, FieldListError>;

    /// Returns true if the list has no fields.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the fields in order.
    fn iter(&self) -> Iter<'_, Self>
    where
        Self: Sized,
    {
        Iter::new(self)
    }

    /// Returns the index of the first field named `name`, without building an error on a miss.
    fn position(&self, name: &str) -> Option<usize>
    where
        Self: Sized,
    {
        self.iter().position(|field| field.name() == name)
    }

    /// Returns the first field named `name`, or `None`.
    fn find(&self, name: &str) -> Option<Self::Field>
    where
        Self: Sized,
    {
        self.iter().find(|field| field.name() == name)
    }

    /// Returns true if some field equals `field`.
    fn contains(&self, field: &Self::Field) -> bool
    where
        Self: Sized,
        Self::Field: PartialEq,
    {
        self.iter().any(|candidate| candidate == *field)
    }

    /// Collects the fields into a `Vec`.
    fn to_vec(&self) -> Vec<Self::Field>
    where
        Self: Sized,
    {
        self.iter().collect()
    }
}

/// Checks a slice request against a list of length `len`.
///
/// A malformed range is reported before an out-of-bounds one.
pub(crate) fn check_range(from: usize, to: usize, len: usize) -> Result<(), FieldListError> {
    if from > to {
        tracing::trace!(from, to, "rejected slice with start past end");
        return Err(FieldListError::invalid_range(from, to));
    }
    if to > len {
        tracing::trace!(from, to, len, "rejected slice past end of list");
        return Err(FieldListError::out_of_range(to, len));
    }
    Ok(())
}

/// Iterator over the fields of a [`FieldList`], in order.
#[derive(Debug)]
pub struct Iter<'l, L> {
    list: &'l L,
    front: usize,
    back: usize,
}

impl<'l, L: FieldList> Iter<'l, L> {
    fn new(list: &'l L) -> Self {
        Self {
            list,
            front: 0,
            back: list.len(),
        }
    }
}

impl<L> Clone for Iter<'_, L> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            front: self.front,
            back: self.back,
        }
    }
}

impl<L: FieldList> Iterator for Iter<'_, L> {
    type Item = L::Field;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let field = self.list.get(self.front).ok();
        self.front += 1;
        field
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<L: FieldList> DoubleEndedIterator for Iter<'_, L> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.list.get(self.back).ok()
    }
}

impl<L: FieldList> ExactSizeIterator for Iter<'_, L> {}

impl<L: FieldList> FusedIterator for Iter<'_, L> {}
