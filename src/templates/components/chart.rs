use crate::charts::figure::Figure;
use crate::domain::ChartSummary;
use maud::{html, Markup};

/// Container for one plotly figure. The figure JSON rides along in
/// `data-figure` and is drawn by the layout script.
pub fn chart_panel(chart: &ChartSummary, figure: &Figure) -> Markup {
    let json = serde_json::to_string(figure).unwrap_or_else(|e| {
        log::error!("Failed to encode figure for {:?}: {e}", chart.kind);
        String::from("{}")
    });

    html! {
        div
            class="chart"
            id=(chart.kind.element_id())
            aria-label=(chart.title)
            data-empty=(chart.empty)
            data-figure=(json)
        {}
    }
}
