use std::collections::HashMap;

/// Named capture groups keyed by group name.
pub type Groups = HashMap<String, String>;

/// Route parameters keyed by parameter name.
pub type RouteParams = HashMap<String, String>;

/// `(start, end)` byte offsets into the matched path.
pub type MatchSpan = (usize, usize);

/// The http response type produced by the built-in fallbacks.
pub type Response = http::Response<String>;
