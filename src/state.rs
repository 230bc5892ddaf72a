use crate::domain::{FilterOptions, ListingTable};

/// Process-wide, read-only state shared by every worker.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub table: ListingTable,
    /// Dropdown values, computed once from the unfiltered table.
    pub options: FilterOptions,
}

impl AppState {
    pub fn new(table: ListingTable) -> Self {
        let options = FilterOptions::from_table(&table);
        Self { table, options }
    }
}
