use super::extract_params;
use crate::pattern::{PatternMatch, match_pattern};
use crate::route::Route;
use crate::types::RouteParams;

/// The first route that matched a path, with its extracted parameters.
#[derive(Debug, Clone)]
pub struct RouteMatch<'r> {
    pub index: usize,
    pub route: &'r Route,
    pub params: RouteParams,
    pub data: PatternMatch,
}

impl RouteMatch<'_> {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

pub fn match_route<'r>(route: &'r Route, path: &str) -> Option<RouteMatch<'r>> {
    let data = match_pattern(path, route.pattern())?;
    let params = extract_params(&data, route.params());
    Some(RouteMatch {
        index: 0,
        route,
        params,
        data,
    })
}

/// Scans `routes` in order and stops at the first hit.
#[tracing::instrument(level = "trace", skip(routes))]
pub fn find_route_match<'r, I>(routes: I, path: &str) -> Option<RouteMatch<'r>>
where
    I: IntoIterator<Item = &'r Route>,
{
    for (index, route) in routes.into_iter().enumerate() {
        if let Some(mut found) = match_route(route, path) {
            found.index = index;
            tracing::trace!(index, pattern = %route.pattern(), "route matched");
            return Some(found);
        }
    }
    None
}
