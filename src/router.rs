use crate::charts::figures;
use crate::domain::{compute_all, FilterSelection};
use crate::errors::{ResultResp, ServerError};
use crate::responses::{html_response, json_response, text_response};
use crate::state::AppState;
use crate::templates::pages::{charts_fragment, dashboard_page, DashboardVm};
use astra::Request;

const KNOWN_PATHS: [&str; 5] = ["/", "/charts", "/api/summaries", "/api/figures", "/healthz"];

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => {
            let selection = parse_selection(&req);
            let summaries = compute_all(&state.table, &selection);
            html_response(dashboard_page(&DashboardVm {
                options: &state.options,
                selection: &selection,
                summaries: &summaries,
                total_rows: state.table.len(),
            }))
        }

        // htmx swap target for the filter form
        ("GET", "/charts") => {
            let summaries = compute_all(&state.table, &parse_selection(&req));
            html_response(charts_fragment(&summaries))
        }

        ("GET", "/api/summaries") => {
            json_response(&compute_all(&state.table, &parse_selection(&req)))
        }

        ("GET", "/api/figures") => {
            let summaries = compute_all(&state.table, &parse_selection(&req));
            json_response(&figures(&summaries))
        }

        ("GET", "/healthz") => text_response(format!("ok {} listings\n", state.table.len())),

        (_, p) if KNOWN_PATHS.contains(&p) => Err(ServerError::MethodNotAllowed),
        _ => Err(ServerError::NotFound),
    }
}

/// Read the filter selection from the query string.
///
/// Keys may repeat (`district=A&district=B`), values are URL-decoded, and
/// empty values are ignored.
pub fn parse_selection(req: &Request) -> FilterSelection {
    let mut districts = Vec::new();
    let mut property_types = Vec::new();

    if let Some(q) = req.uri().query() {
        for (key, value) in url::form_urlencoded::parse(q.as_bytes()) {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "district" => districts.push(value.to_string()),
                "type" => property_types.push(value.to_string()),
                _ => {}
            }
        }
    }

    FilterSelection::new(districts, property_types)
}
