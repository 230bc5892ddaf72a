// src/domain/aggregate.rs

use crate::domain::filter::FilterSelection;
use crate::domain::listing::{Listing, ListingTable};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Property types counted as "projects / land" in the grouped bar chart.
pub const PROJECT_LAND_KEYWORDS: [&str; 2] = ["Dự án", "Nhà đất"];
/// Property types counted as "apartments" in the grouped bar chart.
pub const APARTMENT_KEYWORDS: [&str; 2] = ["Chung cư", "Căn hộ"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub key: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatedCount {
    pub date: NaiveDate,
    pub district: String,
    pub count: usize,
}

/// Two index-aligned count sequences over the same district axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryMatch {
    pub districts: Vec<String>,
    pub project_land: Vec<usize>,
    pub apartment: Vec<usize>,
}

impl CategoryMatch {
    pub fn is_empty(&self) -> bool {
        self.districts.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "shape", content = "rows", rename_all = "snake_case")]
pub enum Summary {
    Counts(Vec<CategoryCount>),
    Timeline(Vec<DatedCount>),
    Paired(CategoryMatch),
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        match self {
            Summary::Counts(rows) => rows.is_empty(),
            Summary::Timeline(rows) => rows.is_empty(),
            Summary::Paired(pairs) => pairs.is_empty(),
        }
    }
}

/// The five charts of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    DistrictBar,
    DistrictPie,
    DistrictTimeline,
    CategoryMatch,
    WardRanking,
}

impl ChartKind {
    pub const ALL: [ChartKind; 5] = [
        ChartKind::DistrictBar,
        ChartKind::DistrictPie,
        ChartKind::DistrictTimeline,
        ChartKind::CategoryMatch,
        ChartKind::WardRanking,
    ];

    /// DOM id of the chart container.
    pub fn element_id(self) -> &'static str {
        match self {
            ChartKind::DistrictBar => "bar-chart",
            ChartKind::DistrictPie => "pie-chart",
            ChartKind::DistrictTimeline => "line-chart",
            ChartKind::CategoryMatch => "double-bar-chart",
            ChartKind::WardRanking => "ward-chart",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::DistrictBar => "Số lượng tin theo Quận/Huyện",
            ChartKind::DistrictPie => "Tỉ lệ tin đăng theo Quận/Huyện",
            ChartKind::DistrictTimeline => "Số lượng tin theo ngày & Quận",
            ChartKind::CategoryMatch => "Phân bố tin đăng theo khu vực và loại bất động sản",
            ChartKind::WardRanking => "Phường/Xã có nhiều tin đăng nhất",
        }
    }

    pub fn empty_title(self) -> &'static str {
        match self {
            ChartKind::DistrictBar => "Không có dữ liệu để hiển thị Bar Chart",
            ChartKind::DistrictPie => "Không có dữ liệu để hiển thị Pie Chart",
            ChartKind::DistrictTimeline => "Không có dữ liệu để hiển thị Line Chart",
            ChartKind::CategoryMatch => "Không có dữ liệu để hiển thị Biểu đồ Cột Đôi",
            ChartKind::WardRanking => "Không có dữ liệu để hiển thị biểu đồ Phường/Xã",
        }
    }

    /// Runs this chart's aggregation over an already filtered table.
    pub fn aggregate(self, table: &ListingTable) -> Summary {
        match self {
            ChartKind::DistrictBar | ChartKind::DistrictPie => {
                Summary::Counts(district_counts(table))
            }
            ChartKind::DistrictTimeline => Summary::Timeline(district_date_counts(table)),
            ChartKind::CategoryMatch => Summary::Paired(category_match_counts(table)),
            ChartKind::WardRanking => Summary::Counts(ward_counts(table)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSummary {
    pub kind: ChartKind,
    /// The chart title, or its empty-state title when `empty` is set.
    pub title: &'static str,
    pub empty: bool,
    pub summary: Summary,
}

impl ChartSummary {
    fn build(kind: ChartKind, table: &ListingTable) -> Self {
        let summary = kind.aggregate(table);
        let empty = summary.is_empty();
        let title = if empty {
            kind.empty_title()
        } else {
            kind.title()
        };

        Self {
            kind,
            title,
            empty,
            summary,
        }
    }
}

/// Everything one filter change produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummaries {
    pub row_count: usize,
    pub charts: Vec<ChartSummary>,
}

impl DashboardSummaries {
    pub fn get(&self, kind: ChartKind) -> Option<&ChartSummary> {
        self.charts.iter().find(|c| c.kind == kind)
    }
}

/// Filters the table and recomputes all five charts.
///
/// Stateless: the result depends only on `table` and `selection`.
pub fn compute_all(table: &ListingTable, selection: &FilterSelection) -> DashboardSummaries {
    let filtered = table.filter(selection);

    let charts = ChartKind::ALL
        .iter()
        .map(|kind| ChartSummary::build(*kind, &filtered))
        .collect();

    DashboardSummaries {
        row_count: filtered.len(),
        charts,
    }
}

/// Row count per district, ordered by district.
pub fn district_counts(table: &ListingTable) -> Vec<CategoryCount> {
    count_by(&table.rows, |row| row.district.as_deref())
}

/// Row count per (date, district), ordered chronologically then by district.
/// Empty when the source file had no timestamp column.
pub fn district_date_counts(table: &ListingTable) -> Vec<DatedCount> {
    if !table.has_dates {
        return Vec::new();
    }

    let mut counts: BTreeMap<(NaiveDate, &str), usize> = BTreeMap::new();
    for row in &table.rows {
        if let (Some(date), Some(district)) = (row.date, row.district.as_deref()) {
            *counts.entry((date, district)).or_default() += 1;
        }
    }

    counts
        .into_iter()
        .map(|((date, district), count)| DatedCount {
            date,
            district: district.to_string(),
            count,
        })
        .collect()
}

/// Per-district counts of the two keyword groups.
///
/// The groups are not exclusive: a property type matching both keyword sets
/// counts in both sequences.
pub fn category_match_counts(table: &ListingTable) -> CategoryMatch {
    let mut project_land: BTreeMap<&str, usize> = BTreeMap::new();
    let mut apartment: BTreeMap<&str, usize> = BTreeMap::new();

    for row in &table.rows {
        let (Some(district), Some(kind)) = (row.district.as_deref(), row.property_type.as_deref())
        else {
            continue;
        };
        if contains_any_ignore_case(kind, &PROJECT_LAND_KEYWORDS) {
            *project_land.entry(district).or_default() += 1;
        }
        if contains_any_ignore_case(kind, &APARTMENT_KEYWORDS) {
            *apartment.entry(district).or_default() += 1;
        }
    }

    let axis: BTreeSet<&str> = project_land.keys().chain(apartment.keys()).copied().collect();

    CategoryMatch {
        project_land: axis
            .iter()
            .map(|d| project_land.get(d).copied().unwrap_or(0))
            .collect(),
        apartment: axis
            .iter()
            .map(|d| apartment.get(d).copied().unwrap_or(0))
            .collect(),
        districts: axis.into_iter().map(str::to_string).collect(),
    }
}

/// Row count per ward, highest first. Ties stay in ward order.
/// Empty when the source file had no ward column.
pub fn ward_counts(table: &ListingTable) -> Vec<CategoryCount> {
    if !table.has_wards {
        return Vec::new();
    }

    let mut counts = count_by(&table.rows, |row| row.ward.as_deref());
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

fn count_by<'a, F>(rows: &'a [Listing], key: F) -> Vec<CategoryCount>
where
    F: Fn(&'a Listing) -> Option<&'a str>,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for row in rows {
        if let Some(k) = key(row) {
            *counts.entry(k).or_default() += 1;
        }
    }

    counts
        .into_iter()
        .map(|(key, count)| CategoryCount {
            key: key.to_string(),
            count,
        })
        .collect()
}

fn contains_any_ignore_case(haystack: &str, keywords: &[&str]) -> bool {
    let haystack = haystack.to_lowercase();
    keywords
        .iter()
        .any(|k| haystack.contains(&k.to_lowercase()))
}
