pub mod aggregate;
pub mod filter;
pub mod listing;

pub use aggregate::{compute_all, ChartKind, ChartSummary, DashboardSummaries, Summary};
pub use filter::FilterSelection;
pub use listing::{FilterOptions, Listing, ListingTable};
