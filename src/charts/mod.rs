// Maps chart summaries onto plotly figures.
pub mod figure;

use crate::domain::aggregate::{CategoryCount, CategoryMatch, DatedCount};
use crate::domain::{ChartKind, ChartSummary, DashboardSummaries, Summary};
use figure::{Axis, Figure, Layout, Margin, Marker, MarkerColor, Title, Trace, UniformText};
use serde::Serialize;
use std::collections::BTreeMap;

const DISTRICT_AXIS: &str = "Quận/Huyện";
const WARD_AXIS: &str = "Phường/Xã";

/// Builds the figure for one chart. Empty summaries become a figure with no
/// traces titled with the empty-state message.
pub fn figure_for(chart: &ChartSummary) -> Figure {
    if chart.empty {
        return empty_figure(chart.title);
    }

    match (&chart.kind, &chart.summary) {
        (ChartKind::DistrictBar, Summary::Counts(rows)) => district_bar(chart.title, rows),
        (ChartKind::DistrictPie, Summary::Counts(rows)) => district_pie(chart.title, rows),
        (ChartKind::DistrictTimeline, Summary::Timeline(rows)) => timeline(chart.title, rows),
        (ChartKind::CategoryMatch, Summary::Paired(pairs)) => grouped_bars(chart.title, pairs),
        (ChartKind::WardRanking, Summary::Counts(rows)) => ward_ranking(chart.title, rows),
        (kind, _) => {
            log::error!("Summary shape does not match chart {kind:?}");
            empty_figure(kind.empty_title())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedFigure {
    pub id: &'static str,
    pub kind: ChartKind,
    pub figure: Figure,
}

/// Figures for every chart, in the order they were computed.
pub fn figures(summaries: &DashboardSummaries) -> Vec<NamedFigure> {
    summaries
        .charts
        .iter()
        .map(|chart| NamedFigure {
            id: chart.kind.element_id(),
            kind: chart.kind,
            figure: figure_for(chart),
        })
        .collect()
}

fn empty_figure(title: &str) -> Figure {
    Figure {
        data: Vec::new(),
        layout: Layout {
            title: Title::new(title),
            ..Layout::default()
        },
    }
}

fn split_counts(rows: &[CategoryCount]) -> (Vec<String>, Vec<usize>) {
    rows.iter().map(|r| (r.key.clone(), r.count)).unzip()
}

fn labels(counts: &[usize]) -> Vec<String> {
    counts.iter().map(|c| c.to_string()).collect()
}

fn district_bar(title: &str, rows: &[CategoryCount]) -> Figure {
    let (x, y) = split_counts(rows);
    Figure {
        data: vec![Trace::Bar {
            name: "Số tin".into(),
            text: labels(&y),
            textposition: "auto",
            marker: Some(Marker {
                color: MarkerColor::Scale(y.clone()),
            }),
            x,
            y,
        }],
        layout: Layout {
            title: Title::new(title),
            xaxis: Some(Axis::titled(DISTRICT_AXIS)),
            yaxis: Some(Axis::titled("Số tin")),
            ..Layout::default()
        },
    }
}

fn district_pie(title: &str, rows: &[CategoryCount]) -> Figure {
    let (labels, values) = split_counts(rows);
    Figure {
        data: vec![Trace::Pie {
            labels,
            values,
            hole: 0.3,
        }],
        layout: Layout {
            title: Title::new(title),
            ..Layout::default()
        },
    }
}

/// One line per district, points in date order.
fn timeline(title: &str, rows: &[DatedCount]) -> Figure {
    let mut series: BTreeMap<&str, (Vec<String>, Vec<usize>)> = BTreeMap::new();
    for row in rows {
        let (x, y) = series.entry(row.district.as_str()).or_default();
        x.push(row.date.format("%Y-%m-%d").to_string());
        y.push(row.count);
    }

    let data = series
        .into_iter()
        .map(|(district, (x, y))| Trace::Scatter {
            name: district.to_string(),
            mode: "lines+markers",
            x,
            y,
        })
        .collect();

    Figure {
        data,
        layout: Layout {
            title: Title::new(title),
            xaxis: Some(Axis::titled("date")),
            yaxis: Some(Axis::titled("total_post")),
            ..Layout::default()
        },
    }
}

fn grouped_bars(title: &str, pairs: &CategoryMatch) -> Figure {
    let bar = |name: &str, counts: &[usize]| Trace::Bar {
        name: name.to_string(),
        x: pairs.districts.clone(),
        y: counts.to_vec(),
        text: labels(counts),
        textposition: "outside",
        marker: None,
    };

    Figure {
        data: vec![
            bar("Nhà đất, Dự án", &pairs.project_land),
            bar("Chung cư, Căn hộ", &pairs.apartment),
        ],
        layout: Layout {
            title: Title::new(title),
            xaxis: Some(Axis::titled(DISTRICT_AXIS)),
            yaxis: Some(Axis::titled("Số lượng tin đăng")),
            barmode: Some("group"),
            height: Some(1000),
            uniformtext: Some(UniformText {
                minsize: 8,
                mode: "hide",
            }),
            ..Layout::default()
        },
    }
}

fn ward_ranking(title: &str, rows: &[CategoryCount]) -> Figure {
    let (x, y) = split_counts(rows);
    Figure {
        data: vec![Trace::Bar {
            name: "Tin đăng theo phường".into(),
            text: labels(&y),
            textposition: "outside",
            marker: Some(Marker {
                color: MarkerColor::Named("darkgreen"),
            }),
            x,
            y,
        }],
        layout: Layout {
            title: Title::new(title),
            xaxis: Some(Axis {
                title: Title::new(WARD_AXIS),
                tickangle: Some(-45),
            }),
            yaxis: Some(Axis::titled("Số lượng tin")),
            height: Some(1000),
            margin: Some(Margin { t: 60, b: 120 }),
            ..Layout::default()
        },
    }
}
