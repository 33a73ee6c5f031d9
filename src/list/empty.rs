use core::fmt;
use core::marker::PhantomData;

use crate::description::FieldDescription;
use crate::errors::FieldListError;

use super::{FieldList, check_range};

/// The empty field list.
///
/// Stateless and zero-sized; `F` only fixes the description type the list would hand out.
pub struct Empty<F> {
    marker: PhantomData<fn() -> F>,
}

impl<F> Empty<F> {
    pub const fn new() -> Self {
        Self { marker: PhantomData }
    }
}

impl<F> Clone for Empty<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for Empty<F> {}

impl<F> Default for Empty<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> PartialEq for Empty<F> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<F> Eq for Empty<F> {}

impl<F> fmt::Debug for Empty<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

impl<F: FieldDescription> FieldList for Empty<F> {
    type Field = F;
    type Slice = Self;

    fn len(&self) -> usize {
        0
    }

    fn get(&self, index: usize) -> Result<F, FieldListError> {
        Err(FieldListError::out_of_range(index, 0))
    }

    fn named(&self, name: &str) -> Result<F, FieldListError> {
        Err(FieldListError::not_found(name))
    }

    fn slice(&self, from: usize, to: usize) -> Result<Self, FieldListError> {
        // Only `(0, 0)` passes against length zero.
        check_range(from, to, 0)?;
        Ok(*self)
    }

    fn position(&self, _: &str) -> Option<usize> {
        None
    }
}

#[cfg(feature = "serde")]
impl<F> serde::Serialize for Empty<F> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;
        serializer.serialize_seq(Some(0))?.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::ForLoadedField;

    type EmptyLoaded = Empty<ForLoadedField<'static>>;

    #[test]
    fn has_no_fields() {
        let list = EmptyLoaded::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);
        assert_eq!(core::mem::size_of::<EmptyLoaded>(), 0);
    }

    #[test]
    fn every_index_is_out_of_range() {
        let list = EmptyLoaded::new();
        assert_eq!(list.get(0).unwrap_err(), FieldListError::OutOfRange { index: 0, len: 0 });
        assert_eq!(list.get(7).unwrap_err(), FieldListError::OutOfRange { index: 7, len: 0 });
    }

    #[test]
    fn every_name_is_missing() {
        let list = EmptyLoaded::new();
        assert_eq!(list.named("id").unwrap_err(), FieldListError::NotFound { name: "id".to_string() });
        assert_eq!(list.find("id"), None);
    }

    #[test]
    fn slice_policy() {
        let list = EmptyLoaded::new();
        assert_eq!(list.slice(0, 0), Ok(list));
        assert_eq!(list.slice(1, 1), Err(FieldListError::OutOfRange { index: 1, len: 0 }));
        assert_eq!(list.slice(0, 2), Err(FieldListError::OutOfRange { index: 2, len: 0 }));
        assert_eq!(list.slice(1, 0), Err(FieldListError::InvalidRange { from: 1, to: 0 }));
    }
}
