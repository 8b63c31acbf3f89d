mod params;
mod resolver;

pub(crate) use params::extract_params;
pub use resolver::{RouteMatch, find_route_match, match_route};
