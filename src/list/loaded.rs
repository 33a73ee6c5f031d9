use crate::description::{ForLoadedField, LoadedField, Reflect};
use crate::errors::FieldListError;

use super::{Explicit, FieldList, Iter, check_range};

/// A field list over an array of loaded field handles.
///
/// Each access wraps the handle into a fresh [`ForLoadedField`]. Slicing materializes the selected handles into an
/// [`Explicit`] list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ForLoadedFields<'a> {
    fields: &'a [LoadedField],
}

impl<'a> ForLoadedFields<'a> {
    pub const fn new(fields: &'a [LoadedField]) -> Self {
        Self { fields }
    }

    /// Returns the underlying handles.
    pub const fn handles(&self) -> &'a [LoadedField] {
        self.fields
    }
}

impl ForLoadedFields<'static> {
    /// Returns the loaded fields of `T`.
    pub fn of<T: Reflect>() -> Self {
        T::field_list()
    }
}

impl<'a> From<&'a [LoadedField]> for ForLoadedFields<'a> {
    fn from(fields: &'a [LoadedField]) -> Self {
        Self::new(fields)
    }
}

impl<'a> FieldList for ForLoadedFields<'a> {
    type Field = ForLoadedField<'a>;
    type Slice = Explicit<'a, ForLoadedField<'a>>;

    fn len(&self) -> usize {
        self.fields.len()
    }

    fn get(&self, index: usize) -> Result<Self::Field, FieldListError> {
        self.fields
            .get(index)
            .map(ForLoadedField::new)
            .ok_or_else(|| FieldListError::out_of_range(index, self.fields.len()))
    }

    fn named(&self, name: &str) -> Result<Self::Field, FieldListError> {
        // Compare the raw handles; only the match gets wrapped.
        self.fields
            .iter()
            .find(|field| field.name() == name)
            .map(ForLoadedField::new)
            .ok_or_else(|| FieldListError::not_found(name))
    }

    fn slice(&self, from: usize, to: usize) -> Result<Self::Slice, FieldListError> {
        check_range(from, to, self.fields.len())?;
        let handles = self.fields;
        let fields = &handles[from..to];
        tracing::debug!(from, to, owner = fields.first().map(LoadedField::owner), "materializing loaded fields");
        Ok(fields.iter().map(ForLoadedField::new).collect())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name() == name)
    }
}

impl<'l, 'a> IntoIterator for &'l ForLoadedFields<'a> {
    type Item = ForLoadedField<'a>;
    type IntoIter = Iter<'l, ForLoadedFields<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ForLoadedFields<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::FieldDescription;

    static FIELDS: [LoadedField; 3] = [
        LoadedField::new("x", "i32", "Point", 0),
        LoadedField::new("y", "i32", "Point", 1),
        LoadedField::new("x", "f64", "Point", 2),
    ];

    fn names<L: FieldList>(list: &L) -> Vec<String> {
        list.iter().map(|field| field.name().to_string()).collect()
    }

    #[test]
    fn get_wraps_the_handle_at_index() {
        let list = ForLoadedFields::new(&FIELDS);
        let field = list.get(1).unwrap();
        assert_eq!(field.name(), "y");
        assert!(core::ptr::eq(field.handle(), &FIELDS[1]));
    }

    #[test]
    fn get_past_end_is_out_of_range() {
        let list = ForLoadedFields::new(&FIELDS);
        assert_eq!(list.get(3), Err(FieldListError::OutOfRange { index: 3, len: 3 }));
    }

    #[test]
    fn named_returns_first_match() {
        let list = ForLoadedFields::new(&FIELDS);
        let field = list.named("x").unwrap();
        assert_eq!(field.type_name(), Some("i32"));
        assert_eq!(list.position("x"), Some(0));
    }

    #[test]
    fn named_miss_carries_the_name() {
        let list = ForLoadedFields::new(&FIELDS);
        assert_eq!(list.named("z"), Err(FieldListError::NotFound { name: "z".to_string() }));
    }

    #[test]
    fn slice_materializes_an_explicit_list() {
        let list = ForLoadedFields::new(&FIELDS);
        let tail = list.slice(1, 3).unwrap();
        assert_eq!(names(&tail), ["y", "x"]);
        assert_eq!(tail.named("x").unwrap().type_name(), Some("f64"));

        let last = tail.slice(1, 2).unwrap();
        assert_eq!(last.get(0).unwrap(), list.get(2).unwrap());
    }

    #[test]
    fn slice_edges() {
        let list = ForLoadedFields::new(&FIELDS);
        assert!(list.slice(3, 3).unwrap().is_empty());
        assert_eq!(list.slice(0, 3).unwrap().to_vec(), list.to_vec());
        assert_eq!(list.slice(2, 1).unwrap_err(), FieldListError::InvalidRange { from: 2, to: 1 });
        assert_eq!(list.slice(1, 4).unwrap_err(), FieldListError::OutOfRange { index: 4, len: 3 });
    }

    #[test]
    fn iterates_from_both_ends() {
        let list = ForLoadedFields::new(&FIELDS);
        let reversed: Vec<_> = list.iter().rev().map(|field| field.handle().position()).collect();
        assert_eq!(reversed, [2, 1, 0]);
        assert_eq!(list.iter().len(), 3);
        assert_eq!((&list).into_iter().count(), 3);
    }
}
