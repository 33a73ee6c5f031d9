use std::borrow::Cow;

use crate::description::FieldDescription;
use crate::errors::FieldListError;

use super::{FieldList, Iter, check_range};

/// A field list over caller-supplied descriptions.
///
/// Built from a borrowed slice the list stores the reference and never copies; built from a `Vec` (or by slicing
/// a [`ForLoadedFields`](super::ForLoadedFields)) it owns its elements. Elements are cloned out on access, so store
/// `&T` or `Arc<T>` to hand out shared descriptions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Explicit<'a, D: Clone> {
    fields: Cow<'a, [D]>,
}

impl<'a, D: Clone> Explicit<'a, D> {
    pub fn new(fields: &'a [D]) -> Self {
        Self {
            fields: Cow::Borrowed(fields),
        }
    }

    /// Returns the stored descriptions.
    pub fn as_slice(&self) -> &[D] {
        &self.fields
    }

    /// Returns true if the list borrows its descriptions from the caller.
    pub fn is_borrowed(&self) -> bool {
        matches!(self.fields, Cow::Borrowed(_))
    }
}

impl<'a, D: Clone> From<&'a [D]> for Explicit<'a, D> {
    fn from(fields: &'a [D]) -> Self {
        Self::new(fields)
    }
}

impl<D: Clone> From<Vec<D>> for Explicit<'_, D> {
    fn from(fields: Vec<D>) -> Self {
        Self {
            fields: Cow::Owned(fields),
        }
    }
}

impl<D: Clone> FromIterator<D> for Explicit<'_, D> {
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a, D: FieldDescription + Clone> FieldList for Explicit<'a, D> {
    type Field = D;
    type Slice = Explicit<'a, D>;

    fn len(&self) -> usize {
        self.fields.len()
    }

    fn get(&self, index: usize) -> Result<D, FieldListError> {
        self.fields
            .get(index)
            .cloned()
            .ok_or_else(|| FieldListError::out_of_range(index, self.fields.len()))
    }

    fn named(&self, name: &str) -> Result<D, FieldListError> {
        self.fields
            .iter()
            .find(|field| field.name() == name)
            .cloned()
            .ok_or_else(|| FieldListError::not_found(name))
    }

    fn slice(&self, from: usize, to: usize) -> Result<Self::Slice, FieldListError> {
        check_range(from, to, self.fields.len())?;
        Ok(match &self.fields {
            Cow::Borrowed(fields) => {
                let fields: &'a [D] = *fields;
                Explicit::new(&fields[from..to])
            }
            Cow::Owned(fields) => Explicit::from(fields[from..to].to_vec()),
        })
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name() == name)
    }

    fn to_vec(&self) -> Vec<D> {
        self.fields.to_vec()
    }
}

impl<'l, 'a, D: FieldDescription + Clone> IntoIterator for &'l Explicit<'a, D> {
    type Item = D;
    type IntoIter = Iter<'l, Explicit<'a, D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl<D: Clone + serde::Serialize> serde::Serialize for Explicit<'_, D> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.fields.iter())
    }
}
