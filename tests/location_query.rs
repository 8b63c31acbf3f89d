use dispatch_router_rs::location::{
    Location, LocationError, Query, SearchParams, decode_location, decode_query, encode_location,
    encode_query, search_append, search_patch, search_replace, url_append_query, url_patch_query,
    url_query, url_with_hash, url_with_pathname, url_with_query, url_with_search, with_query,
    with_search,
};

fn query(pairs: &[(&str, Vec<&str>)]) -> Query {
    pairs
        .iter()
        .map(|(k, vs)| (k.to_string(), vs.iter().map(|v| v.to_string()).collect()))
        .collect()
}

fn params(pairs: &[(&str, &str)]) -> SearchParams {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn decode_location_when_full_url_then_splits_every_part() {
    let location = decode_location("https://one.two/three?four=five#six");

    assert_eq!(location.protocol, "https:");
    assert_eq!(location.host, "one.two");
    assert_eq!(location.pathname, "/three");
    assert_eq!(location.search, "?four=five");
    assert_eq!(location.hash, "#six");
    assert_eq!(location.query, query(&[("four", vec!["five"])]));
}

#[test]
fn decode_location_when_path_only_then_host_is_empty() {
    let location = decode_location("/a/b?x=1");

    assert_eq!(location.protocol, "");
    assert_eq!(location.host, "");
    assert_eq!(location.pathname, "/a/b");
    assert_eq!(location.search, "?x=1");
}

#[test]
fn encode_location_when_decoded_then_renders_same_url() {
    let url = "https://one.two/three?four=five#six";

    assert_eq!(encode_location(&decode_location(url)), url);
}

#[test]
fn encode_location_when_query_set_then_overrides_search() {
    let location = Location {
        pathname: "/p".to_string(),
        search: "?stale=1".to_string(),
        query: query(&[("fresh", vec!["2"])]),
        hash: "top".to_string(),
        ..Location::default()
    };

    assert_eq!(encode_location(&location), "/p?fresh=2#top");
}

#[test]
fn decode_query_when_keys_repeat_then_collects_values() {
    let decoded = decode_query("?a=1&a=2&b=x+y&c=%2F");

    assert_eq!(
        decoded,
        query(&[("a", vec!["1", "2"]), ("b", vec!["x y"]), ("c", vec!["/"])])
    );
    assert!(decode_query("").is_empty());
}

#[test]
fn encode_query_when_values_missing_then_omits_key() {
    assert_eq!(encode_query(&query(&[("a", vec![]), ("b", vec!["1", "2"])])), "?b=1&b=2");
    assert_eq!(encode_query(&Query::new()), "");
}

#[test]
fn with_query_and_with_search_when_called_then_sync_fields() {
    let location = Location {
        search: "?k=v".to_string(),
        ..Location::default()
    };
    let synced = with_query(&location);
    assert_eq!(synced.query, query(&[("k", vec!["v"])]));

    let changed = Location {
        query: query(&[("z", vec!["1"])]),
        ..synced
    };
    assert_eq!(with_search(&changed).search, "?z=1");
}

#[test]
fn search_replace_when_query_empty_then_clears_everything() {
    let mut search = params(&[("one", "two"), ("three", "four"), ("five", "six")]);

    search_replace(&mut search, &Query::new());

    assert!(search.is_empty());
}

#[test]
fn search_replace_when_query_has_missing_values_then_keeps_only_present() {
    let mut search = params(&[("one", "two"), ("three", "four"), ("seven", "eight")]);

    search_replace(&mut search, &query(&[("three", vec![]), ("seven", vec!["nine"])]));

    assert_eq!(search, params(&[("seven", "nine")]));
}

#[test]
fn search_patch_when_key_exists_then_replaces_it() {
    let mut search = params(&[("x", "1"), ("y", "2"), ("x", "3")]);

    search_patch(&mut search, &query(&[("x", vec!["4"]), ("gone", vec![])]));

    assert_eq!(search, params(&[("y", "2"), ("x", "4")]));
}

#[test]
fn search_append_when_key_exists_then_keeps_both() {
    let mut search = params(&[("x", "1")]);

    search_append(&mut search, &query(&[("x", vec!["2"])]));

    assert_eq!(search, params(&[("x", "1"), ("x", "2")]));
}

#[test]
fn url_helpers_when_relative_then_render_path_search_hash() {
    assert_eq!(
        url_with_query("/path?one=two", &query(&[("three", vec!["x"])])).expect("url"),
        "/path?three=x"
    );
    assert_eq!(
        url_append_query("/c?x=1", &query(&[("x", vec!["2"])])).expect("url"),
        "/c?x=1&x=2"
    );
    assert_eq!(url_with_hash("/c", "#top").expect("url"), "/c#top");
    assert_eq!(url_with_search("/c#h", "a=b").expect("url"), "/c?a=b#h");
    assert_eq!(url_with_search("/c?a=b", "").expect("url"), "/c");
    assert_eq!(url_with_query("/c?a=b", &Query::new()).expect("url"), "/c");
}

#[test]
fn url_helpers_when_absolute_then_render_full_href() {
    assert_eq!(
        url_patch_query("https://a.b/c?x=1&y=2", &query(&[("x", vec!["3"])])).expect("url"),
        "https://a.b/c?y=2&x=3"
    );
    assert_eq!(
        url_with_pathname("https://a.b/c?x=1", "/d").expect("url"),
        "https://a.b/d?x=1"
    );
}

#[test]
fn url_query_when_keys_repeat_then_collects_values() {
    let decoded = url_query("/c?x=1&x=2&y=").expect("url");

    assert_eq!(decoded, query(&[("x", vec!["1", "2"]), ("y", vec![""])]));
}

#[test]
fn url_helpers_when_url_invalid_then_return_error() {
    match url_with_hash("http://[::1", "x").expect_err("expected invalid url") {
        LocationError::InvalidUrl { input, .. } => assert_eq!(input, "http://[::1"),
    }
}
