//! Url and query-string helpers for building and rewriting locations.

mod error;
mod search;

pub use error::{LocationError, LocationResult};
pub use search::{
    SearchParams, search_append, search_patch, search_query, search_replace, url_append_query,
    url_patch_query, url_query, url_with_hash, url_with_pathname, url_with_query, url_with_search,
};

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;
use url::form_urlencoded;

/// Decoded query: every key maps to all of its values, in order of appearance.
pub type Query = BTreeMap<String, Vec<String>>;

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\w+:)[/][/])?([^,;!?/#\s]*)?([^,;!?#\s]*)?(\?[^,;!#\s]*)?(#[^,;!\s]*)?")
        .expect("location regex should compile")
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub protocol: String,
    pub host: String,
    pub pathname: String,
    pub search: String,
    pub query: Query,
    pub hash: String,
}

/// Splits a url-ish string into its parts. Every part is optional, so this
/// never fails; unparseable input just lands in fewer parts.
pub fn decode_location(url: &str) -> Location {
    let part = |caps: &regex::Captures<'_>, i: usize| {
        caps.get(i)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    };

    match URL_REGEX.captures(url) {
        Some(caps) => {
            let search = part(&caps, 4);
            Location {
                protocol: part(&caps, 1),
                host: part(&caps, 2),
                pathname: part(&caps, 3),
                query: decode_query(&search),
                search,
                hash: part(&caps, 5),
            }
        }
        None => Location::default(),
    }
}

/// Renders a location back to a string. A non-empty `query` takes precedence
/// over `search`.
pub fn encode_location(location: &Location) -> String {
    let search = if location.query.is_empty() {
        location.search.clone()
    } else {
        encode_query(&location.query)
    };

    let mut out = String::new();
    if !location.protocol.is_empty() {
        out.push_str(&location.protocol);
        out.push_str("//");
    }
    out.push_str(&location.host);
    out.push_str(&location.pathname);
    out.push_str(&prepend('?', &search));
    out.push_str(&prepend('#', &location.hash));
    out
}

pub fn decode_query(search: &str) -> Query {
    let raw = search.strip_prefix('?').unwrap_or(search);
    let mut query = Query::new();
    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        query
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    query
}

/// `?`-prefixed query string; keys without values are omitted.
pub fn encode_query(query: &Query) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, values) in query {
        for value in values {
            serializer.append_pair(key, value);
        }
    }
    prepend('?', &serializer.finish())
}

/// Copy of `location` with `query` recomputed from `search`.
pub fn with_query(location: &Location) -> Location {
    Location {
        query: decode_query(&location.search),
        ..location.clone()
    }
}

/// Copy of `location` with `search` recomputed from `query`.
pub fn with_search(location: &Location) -> Location {
    Location {
        search: encode_query(&location.query),
        ..location.clone()
    }
}

pub(crate) fn prepend(ch: char, value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else if value.starts_with(ch) {
        value.to_string()
    } else {
        format!("{ch}{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepend_skips_empty_and_existing_prefix() {
        assert_eq!(prepend('?', ""), "");
        assert_eq!(prepend('?', "?a=b"), "?a=b");
        assert_eq!(prepend('#', "top"), "#top");
    }
}
