use crate::router::{handle, parse_selection};
use crate::state::AppState;
use crate::tests::utils::{read_body, scenario_table, ward_table};
use astra::Body;
use http::{Method, Request};
use serde_json::Value;

fn request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn get_json(state: &AppState, uri: &str) -> Value {
    let resp = handle(request(uri), state).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );
    serde_json::from_str(&read_body(resp)).unwrap()
}

#[test]
fn summaries_for_unfiltered_scenario() {
    let state = AppState::new(scenario_table());
    let json = get_json(&state, "/api/summaries");

    assert_eq!(json["row_count"], 3);
    let charts = json["charts"].as_array().unwrap();
    assert_eq!(charts.len(), 5);

    let bar = &charts[0];
    assert_eq!(bar["kind"], "district_bar");
    assert_eq!(bar["empty"], false);
    assert_eq!(bar["summary"]["shape"], "counts");
    assert_eq!(bar["summary"]["rows"][0]["key"], "A");
    assert_eq!(bar["summary"]["rows"][0]["count"], 2);

    let timeline = &charts[2];
    assert_eq!(timeline["summary"]["rows"][0]["date"], "2024-01-01");

    let ward = &charts[4];
    assert_eq!(ward["empty"], true);
    assert_eq!(ward["title"], "Không có dữ liệu để hiển thị biểu đồ Phường/Xã");
}

#[test]
fn summaries_accept_repeated_district_keys() {
    let state = AppState::new(ward_table());
    let json = get_json(&state, "/api/summaries?district=Thu%E1%BA%ADn+An&district=D%C4%A9+An");

    assert_eq!(json["row_count"], 5);
}

#[test]
fn figures_endpoint_returns_five_figures() {
    let state = AppState::new(ward_table());
    let json = get_json(&state, "/api/figures?type=B%C3%A1n+nh%C3%A0+%C4%91%E1%BA%A5t");

    let figures = json.as_array().unwrap();
    assert_eq!(figures.len(), 5);
    assert_eq!(figures[0]["id"], "bar-chart");
    assert_eq!(figures[0]["figure"]["data"][0]["x"][0], "Thuận An");
}

#[test]
fn healthz_reports_row_count() {
    let state = AppState::new(ward_table());
    let resp = handle(request("/healthz"), &state).unwrap();
    assert_eq!(read_body(resp), "ok 9 listings\n");
}

#[test]
fn parse_selection_decodes_and_skips_blanks() {
    let req = request("/charts?district=D%C4%A9+An&district=&type=Chung+c%C6%B0&type=%20&page=2");
    let selection = parse_selection(&req);

    assert_eq!(selection.districts.len(), 1);
    assert!(selection.districts.contains("Dĩ An"));
    assert_eq!(selection.property_types.len(), 1);
    assert!(selection.property_types.contains("Chung cư"));
}

#[test]
fn parse_selection_without_query_is_empty() {
    assert!(parse_selection(&request("/charts")).is_empty());
}
