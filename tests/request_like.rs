use dispatch_router_rs::{GET, Req, RequestLike, request::RequestError};

#[test]
fn req_when_url_absolute_then_exposes_method_and_pathname() {
    let req = Req::new("POST", "https://one.two/three?four=five#six").expect("request should build");

    assert_eq!(req.method(), "POST");
    assert_eq!(req.path(), "/three");
    assert_eq!(req.url().query(), Some("four=five"));
}

#[test]
fn req_when_get_shortcut_used_then_method_is_get() {
    let req = Req::get("https://one.two/").expect("request should build");

    assert_eq!(req.method(), GET);
    assert_eq!(req.path(), "/");
}

#[test]
fn req_when_method_lowercase_then_case_is_preserved() {
    let req = Req::new("get", "https://one.two/").expect("request should build");

    assert_eq!(req.method(), "get");
}

#[test]
fn req_when_url_invalid_then_returns_error() {
    for input in ["blah", "", "/relative/only"] {
        match Req::new(GET, input).expect_err("expected invalid url") {
            RequestError::InvalidUrl { input: got, .. } => assert_eq!(got, input),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

#[test]
fn req_when_method_not_a_token_then_returns_error() {
    match Req::new("GE T", "https://one.two/").expect_err("expected invalid method") {
        RequestError::InvalidMethod { method } => assert_eq!(method, "GE T"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn req_when_converted_from_http_request_then_keeps_method_and_path() {
    let http_req = http::Request::builder()
        .method("DELETE")
        .uri("https://example.com/items/3")
        .body(())
        .expect("http request should build");

    let req = Req::try_from(&http_req).expect("conversion should succeed");

    assert_eq!(req.method(), "DELETE");
    assert_eq!(req.path(), "/items/3");
    assert_eq!(RequestLike::path(&http_req), "/items/3");
}

#[test]
fn req_when_converted_from_origin_form_uri_then_returns_error() {
    let http_req = http::Request::builder()
        .uri("/items/3")
        .body(())
        .expect("http request should build");

    assert!(matches!(
        Req::try_from(&http_req),
        Err(RequestError::InvalidUrl { .. })
    ));
}

#[test]
fn standard_method_when_verb_known_then_returns_enum() {
    use dispatch_router_rs::HttpMethod;

    let put = Req::new("PUT", "https://one.two/").expect("request should build");
    let purge = Req::new("PURGE", "https://one.two/").expect("request should build");
    let lower = Req::new("put", "https://one.two/").expect("request should build");

    assert_eq!(put.standard_method(), Some(HttpMethod::Put));
    assert_eq!(purge.standard_method(), None);
    assert_eq!(lower.standard_method(), None);
}
