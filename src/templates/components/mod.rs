pub mod card;
pub mod chart;
pub mod error;
pub mod filter;

pub use card::card;
pub use chart::chart_panel;
pub use error::error_page;
pub use filter::multi_select;
