pub mod dispatch;
pub mod enums;
pub mod errors;
pub mod location;
pub mod matcher;
pub mod pattern;
pub mod request;
pub mod route;
pub mod types;

pub use dispatch::{FromResponse, Reply, Truthy, either};
pub use enums::{DELETE, GET, HEAD, HttpMethod, OPTIONS, PATCH, POST, PUT};
pub use errors::{RouterError, RouterResult};
pub use matcher::{RouteMatch, find_route_match, match_route};
pub use pattern::{Pattern, PatternMatch, PatternOptions, match_pattern, test_pattern};
pub use request::{Req, RequestLike};
pub use route::{Route, RouteList};
pub use types::{Groups, Response, RouteParams};
