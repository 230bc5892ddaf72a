// src/tests/router_tests/dashboard_tests.rs

use crate::domain::{ChartKind, ListingTable};
use crate::router::handle;
use crate::state::AppState;
use crate::tests::utils::{read_body, ward_table};
use astra::Body;
use http::{Method, Request};

fn get(state: &AppState, uri: &str) -> (u16, String) {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, state).expect("Handler failed");
    let status = resp.status().as_u16();
    (status, read_body(resp))
}

#[test]
fn dashboard_page_lists_filters_and_charts() {
    let state = AppState::new(ward_table());
    let (status, body) = get(&state, "/");

    assert_eq!(status, 200);
    assert!(body.contains("Dashboard BĐS Bình Dương"));
    assert!(body.contains(r#"id="district-filter""#));
    assert!(body.contains(r#"id="property-filter""#));
    assert!(body.contains(r#"<option value="Thuận An">"#));
    assert!(body.contains("Cho thuê nhà trọ"));
    for kind in ChartKind::ALL {
        assert!(
            body.contains(&format!(r#"id="{}""#, kind.element_id())),
            "missing {kind:?}"
        );
    }
}

#[test]
fn dashboard_page_marks_selected_options() {
    let state = AppState::new(ward_table());
    let (_, body) = get(&state, "/?district=D%C4%A9+An");

    assert!(body.contains(r#"<option value="Dĩ An" selected>"#));
    assert!(body.contains(r#"<option value="Thuận An">"#));
    assert!(body.contains("<strong>3</strong> tin đăng phù hợp"));
}

#[test]
fn dashboard_renders_with_empty_dataset() {
    let state = AppState::new(ListingTable::empty());
    let (status, body) = get(&state, "/");

    assert_eq!(status, 200);
    assert!(body.contains("Không tải được dữ liệu tin đăng"));
    for kind in ChartKind::ALL {
        assert!(body.contains(kind.empty_title()), "missing empty state for {kind:?}");
    }
}

#[test]
fn charts_fragment_follows_the_selection() {
    let state = AppState::new(ward_table());
    let (status, body) = get(&state, "/charts?district=Thu%E1%BA%ADn+An&type=B%C3%A1n+nh%C3%A0+%C4%91%E1%BA%A5t");

    assert_eq!(status, 200);
    assert!(!body.contains("<html"));
    assert!(body.contains("<strong>1</strong> tin đăng phù hợp"));
    assert!(body.contains(r#"id="double-bar-chart""#));
    assert!(body.contains(r#"data-empty="false""#));
}

#[test]
fn unknown_path_is_not_found() {
    let state = AppState::new(ward_table());
    let req = Request::builder()
        .method(Method::GET)
        .uri("/admin")
        .body(Body::empty())
        .unwrap();

    let err = handle(req, &state).unwrap_err();
    assert_eq!(err.status(), 404);
}

#[test]
fn post_to_known_path_is_rejected() {
    let state = AppState::new(ward_table());
    let req = Request::builder()
        .method(Method::POST)
        .uri("/charts")
        .body(Body::empty())
        .unwrap();

    let err = handle(req, &state).unwrap_err();
    assert_eq!(err.status(), 405);
}

#[test]
fn error_pages_carry_the_status() {
    let resp = crate::responses::error_to_response(crate::errors::ServerError::NotFound);
    assert_eq!(resp.status(), 404);

    let body = read_body(resp);
    assert!(body.contains("Error 404"));
    assert!(body.contains("Not Found"));
}
