pub mod dashboard;

pub use dashboard::{charts_fragment, dashboard_page, DashboardVm};
