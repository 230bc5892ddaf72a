// src/domain/filter.rs

use crate::domain::listing::{Listing, ListingTable};
use std::borrow::Cow;
use std::collections::BTreeSet;

/// The two dropdown selections of a single request.
/// An empty set means "no filtering on that dimension".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub districts: BTreeSet<String>,
    pub property_types: BTreeSet<String>,
}

impl FilterSelection {
    pub fn new<D, T>(districts: D, property_types: T) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            districts: districts.into_iter().map(Into::into).collect(),
            property_types: property_types.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.districts.is_empty() && self.property_types.is_empty()
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        allowed(&self.districts, listing.district.as_deref())
            && allowed(&self.property_types, listing.property_type.as_deref())
    }
}

/// Set membership with the empty set acting as a wildcard.
/// An absent value only passes when the dimension is not filtered.
fn allowed(selected: &BTreeSet<String>, value: Option<&str>) -> bool {
    if selected.is_empty() {
        return true;
    }
    value.is_some_and(|v| selected.contains(v))
}

impl ListingTable {
    /// The rows matching `selection`, with the schema flags carried over.
    ///
    /// An empty selection borrows `self`; rows are only copied when a filter
    /// is active.
    pub fn filter(&self, selection: &FilterSelection) -> Cow<'_, ListingTable> {
        if selection.is_empty() {
            return Cow::Borrowed(self);
        }

        let rows = self
            .rows
            .iter()
            .filter(|row| selection.matches(row))
            .cloned()
            .collect();

        Cow::Owned(ListingTable::new(rows, self.has_dates, self.has_wards))
    }
}
