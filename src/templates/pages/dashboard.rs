use crate::charts::figure_for;
use crate::domain::{ChartKind, DashboardSummaries, FilterOptions, FilterSelection};
use crate::templates::components::{card, chart_panel, multi_select};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub const PAGE_TITLE: &str = "Dashboard BĐS Bình Dương";

// Top-to-bottom order of the charts on the page.
const PAGE_ORDER: [ChartKind; 5] = [
    ChartKind::DistrictBar,
    ChartKind::CategoryMatch,
    ChartKind::WardRanking,
    ChartKind::DistrictPie,
    ChartKind::DistrictTimeline,
];

pub struct DashboardVm<'a> {
    pub options: &'a FilterOptions,
    pub selection: &'a FilterSelection,
    pub summaries: &'a DashboardSummaries,
    /// Rows in the unfiltered table.
    pub total_rows: usize,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    desktop_layout(
        PAGE_TITLE,
        html! {
            h1 { "📊 " (PAGE_TITLE) }

            @if vm.total_rows == 0 {
                (card("Không có dữ liệu", html! {
                    p { "Không tải được dữ liệu tin đăng. Các biểu đồ sẽ trống." }
                }))
            }

            form
                id="filters"
                class="filters"
                hx-get="/charts"
                hx-trigger="change"
                hx-target="#charts"
                hx-swap="innerHTML"
                hx-sync="this:replace"
            {
                (multi_select(
                    "district-filter",
                    "district",
                    "Chọn Quận/Huyện:",
                    &vm.options.districts,
                    &vm.selection.districts,
                ))
                (multi_select(
                    "property-filter",
                    "type",
                    "Chọn loại hình:",
                    &vm.options.property_types,
                    &vm.selection.property_types,
                ))
            }

            section id="charts" {
                (charts_fragment(vm.summaries))
            }
        },
    )
}

/// The part of the page swapped in on every filter change.
pub fn charts_fragment(summaries: &DashboardSummaries) -> Markup {
    html! {
        p class="summary-line" {
            strong { (summaries.row_count) } " tin đăng phù hợp"
        }
        @for kind in PAGE_ORDER {
            @if let Some(chart) = summaries.get(kind) {
                (chart_panel(chart, &figure_for(chart)))
            }
        }
    }
}
