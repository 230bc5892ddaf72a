pub mod loader;
pub mod timestamp;

pub use loader::{load_or_empty, ColumnNames};
