use crate::dataset::timestamp::parse_timestamp;
use crate::domain::{Listing, ListingTable};
use crate::errors::LoadError;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Header names of the columns the dashboard reads.
#[derive(Debug, Clone)]
pub struct ColumnNames {
    pub district: String,
    pub property_type: String,
    pub posted_at: String,
    pub ward: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            district: "Quan_huyen".into(),
            property_type: "Property_Type".into(),
            posted_at: "Thoi_gian_dang".into(),
            ward: "Ward".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub total_rows: usize,
    pub kept_rows: usize,
    pub bad_timestamps: usize,
}

struct ColumnIndex {
    district: usize,
    property_type: usize,
    posted_at: Option<usize>,
    ward: Option<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, names: &ColumnNames) -> Result<Self, LoadError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
        };
        let require =
            |name: &str| find(name).ok_or_else(|| LoadError::MissingColumn(name.to_string()));

        Ok(Self {
            district: require(&names.district)?,
            property_type: require(&names.property_type)?,
            posted_at: find(&names.posted_at),
            ward: find(&names.ward),
        })
    }
}

/// Read the listings file at `path`.
pub fn load_listings(
    path: impl AsRef<Path>,
    columns: &ColumnNames,
) -> Result<(ListingTable, LoadReport), LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_reader(file, columns)
}

/// Parse listings from any CSV source.
///
/// Rows whose timestamp cannot be parsed are dropped and counted in the
/// report. A malformed record fails the whole load.
pub fn load_from_reader<R: Read>(
    reader: R,
    columns: &ColumnNames,
) -> Result<(ListingTable, LoadReport), LoadError> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let index = ColumnIndex::resolve(rdr.headers()?, columns)?;

    let mut report = LoadReport::default();
    let mut rows = Vec::new();

    for result in rdr.records() {
        let record = result?;
        report.total_rows += 1;

        let date = match index.posted_at {
            Some(i) => match parse_timestamp(record.get(i)) {
                Some(ts) => Some(ts.date()),
                None => {
                    report.bad_timestamps += 1;
                    continue;
                }
            },
            None => None,
        };

        rows.push(Listing {
            district: field(&record, Some(index.district)),
            property_type: field(&record, Some(index.property_type)),
            date,
            ward: field(&record, index.ward),
        });
    }

    report.kept_rows = rows.len();
    let table = ListingTable::new(rows, index.posted_at.is_some(), index.ward.is_some());
    Ok((table, report))
}

/// Load the listings, falling back to an empty table on any failure.
///
/// The dashboard still starts with an empty dataset; every chart then shows
/// its empty state.
pub fn load_or_empty(path: impl AsRef<Path>, columns: &ColumnNames) -> ListingTable {
    let path = path.as_ref();
    match load_listings(path, columns) {
        Ok((table, report)) => {
            log::info!(
                "Loaded {} listings from {} ({} rows read, {} dropped for unparsable `{}`)",
                report.kept_rows,
                path.display(),
                report.total_rows,
                report.bad_timestamps,
                columns.posted_at
            );
            if table.is_empty() {
                log::warn!("{} holds no usable listings; every chart will be empty", path.display());
            }
            if !table.has_dates {
                log::warn!("Column `{}` not found; the timeline chart will stay empty", columns.posted_at);
            }
            if !table.has_wards {
                log::warn!("Column `{}` not found; the ward chart will stay empty", columns.ward);
            }
            table
        }
        Err(e) => {
            log::error!("Failed to load listings from {}: {e}", path.display());
            ListingTable::empty()
        }
    }
}

/// Trimmed cell value; empty cells and short records count as absent.
fn field(record: &StringRecord, index: Option<usize>) -> Option<String> {
    index
        .and_then(|i| record.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
