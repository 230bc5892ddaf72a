// src/domain/listing.rs

use chrono::NaiveDate;
use std::collections::BTreeSet;

/// One real-estate posting as loaded from the listings file.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub district: Option<String>,
    pub property_type: Option<String>,
    /// Calendar day of the posting. Absent only when the source file has
    /// no timestamp column.
    pub date: Option<NaiveDate>,
    pub ward: Option<String>,
}

/// The in-memory listings table. Loaded once and only ever read afterwards.
///
/// The schema flags record which optional columns existed in the source file,
/// so aggregations over dates or wards can tell "no column" apart from
/// "no matching rows".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingTable {
    pub rows: Vec<Listing>,
    pub has_dates: bool,
    pub has_wards: bool,
}

impl ListingTable {
    pub fn new(rows: Vec<Listing>, has_dates: bool, has_wards: bool) -> Self {
        Self {
            rows,
            has_dates,
            has_wards,
        }
    }

    /// An empty table with no optional columns; used when loading fails.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Values offered by the two filter dropdowns, computed once from the
/// unfiltered table. Both lists are sorted and contain no absent values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub districts: Vec<String>,
    pub property_types: Vec<String>,
}

impl FilterOptions {
    pub fn from_table(table: &ListingTable) -> Self {
        let mut districts = BTreeSet::new();
        let mut property_types = BTreeSet::new();

        for row in &table.rows {
            if let Some(d) = &row.district {
                districts.insert(d.clone());
            }
            if let Some(t) = &row.property_type {
                property_types.insert(t.clone());
            }
        }

        Self {
            districts: districts.into_iter().collect(),
            property_types: property_types.into_iter().collect(),
        }
    }
}
