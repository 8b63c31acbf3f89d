use url::Url;

use super::{LocationError, LocationResult, Query};

/// Ordered query pairs, duplicates allowed.
pub type SearchParams = Vec<(String, String)>;

const RELATIVE_BASE: &str = "file:///";

pub fn search_replace(search: &mut SearchParams, query: &Query) {
    search.clear();
    search_append(search, query);
}

pub fn search_append(search: &mut SearchParams, query: &Query) {
    for (key, values) in query {
        for value in values {
            search.push((key.clone(), value.clone()));
        }
    }
}

/// Replaces every key present in `query`; a key with no values is removed.
pub fn search_patch(search: &mut SearchParams, query: &Query) {
    for (key, values) in query {
        search.retain(|(k, _)| k != key);
        for value in values {
            search.push((key.clone(), value.clone()));
        }
    }
}

pub fn search_query(search: &SearchParams) -> Query {
    let mut query = Query::new();
    for (key, value) in search {
        query.entry(key.clone()).or_default().push(value.clone());
    }
    query
}

pub fn url_with_pathname(url: &str, pathname: &str) -> LocationResult<String> {
    with_url(url, |parsed| parsed.set_path(pathname))
}

pub fn url_with_search(url: &str, search: &str) -> LocationResult<String> {
    with_url(url, |parsed| {
        let raw = search.strip_prefix('?').unwrap_or(search);
        parsed.set_query((!raw.is_empty()).then_some(raw));
    })
}

pub fn url_with_hash(url: &str, hash: &str) -> LocationResult<String> {
    with_url(url, |parsed| {
        let raw = hash.strip_prefix('#').unwrap_or(hash);
        parsed.set_fragment((!raw.is_empty()).then_some(raw));
    })
}

pub fn url_with_query(url: &str, query: &Query) -> LocationResult<String> {
    with_url(url, |parsed| update_search(parsed, search_replace, query))
}

pub fn url_append_query(url: &str, query: &Query) -> LocationResult<String> {
    with_url(url, |parsed| update_search(parsed, search_append, query))
}

pub fn url_patch_query(url: &str, query: &Query) -> LocationResult<String> {
    with_url(url, |parsed| update_search(parsed, search_patch, query))
}

pub fn url_query(url: &str) -> LocationResult<Query> {
    let parsed = to_url(url)?;
    Ok(search_query(&search_params(&parsed)))
}

fn with_url(url: &str, edit: impl FnOnce(&mut Url)) -> LocationResult<String> {
    let mut parsed = to_url(url)?;
    edit(&mut parsed);
    Ok(url_str(&parsed))
}

fn update_search(url: &mut Url, update: fn(&mut SearchParams, &Query), query: &Query) {
    let mut search = search_params(url);
    update(&mut search, query);
    if search.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(search);
    }
}

fn search_params(url: &Url) -> SearchParams {
    url.query_pairs().into_owned().collect()
}

/// Relative input resolves against `file:///`.
fn to_url(input: &str) -> LocationResult<Url> {
    let invalid = |err: url::ParseError| LocationError::InvalidUrl {
        input: input.to_string(),
        reason: err.to_string(),
    };
    let base = Url::parse(RELATIVE_BASE).map_err(invalid)?;
    Url::options()
        .base_url(Some(&base))
        .parse(input)
        .map_err(invalid)
}

/// `file:` urls render as `pathname + search + hash`, anything else as the href.
fn url_str(url: &Url) -> String {
    if url.scheme() != "file" {
        return url.to_string();
    }
    let mut out = url.path().to_string();
    if let Some(query) = url.query().filter(|q| !q.is_empty()) {
        out.push('?');
        out.push_str(query);
    }
    if let Some(fragment) = url.fragment().filter(|f| !f.is_empty()) {
        out.push('#');
        out.push_str(fragment);
    }
    out
}
