use crate::domain::{Listing, ListingTable};
use astra::Response;
use chrono::NaiveDate;
use std::io::Read;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Write `contents` to a uniquely named CSV file in the temp dir.
pub fn write_csv(prefix: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "{prefix}_{}_{:?}.csv",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        std::thread::current().id()
    ));
    std::fs::write(&path, contents).expect("Failed to write CSV fixture");
    path
}

pub fn listing(district: &str, property_type: &str, date: &str, ward: Option<&str>) -> Listing {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    Listing {
        district: Some(district.to_string()),
        property_type: Some(property_type.to_string()),
        date: Some(date),
        ward: ward.map(str::to_string),
    }
}

/// Three listings over two districts, no ward column.
pub fn scenario_table() -> ListingTable {
    ListingTable::new(
        vec![
            listing("A", "Chung cư", "2024-01-01", None),
            listing("A", "Dự án", "2024-01-02", None),
            listing("B", "Chung cư", "2024-01-01", None),
        ],
        true,
        false,
    )
}

/// A larger table with wards and a few absent values.
pub fn ward_table() -> ListingTable {
    let mut rows = vec![
        listing("Thủ Dầu Một", "Bán căn hộ chung cư", "2024-03-01", Some("Phú Hòa")),
        listing("Thủ Dầu Một", "Bán nhà đất", "2024-03-01", Some("Phú Cường")),
        listing("Thủ Dầu Một", "Bán đất nền dự án", "2024-03-02", Some("Phú Hòa")),
        listing("Dĩ An", "Bán căn hộ chung cư", "2024-03-02", Some("Đông Hòa")),
        listing("Dĩ An", "Cho thuê nhà trọ", "2024-03-03", Some("Đông Hòa")),
        listing("Thuận An", "Bán nhà đất", "2024-03-03", Some("Lái Thiêu")),
        listing("Thuận An", "Bán căn hộ chung cư", "2024-03-03", Some("Phú Hòa")),
    ];
    rows.push(Listing {
        district: None,
        ..listing("x", "Bán nhà đất", "2024-03-04", Some("Lái Thiêu"))
    });
    rows.push(Listing {
        property_type: None,
        ward: None,
        ..listing("Dĩ An", "x", "2024-03-04", None)
    });
    ListingTable::new(rows, true, true)
}

pub fn read_body(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .unwrap();
    body
}
