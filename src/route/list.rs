use super::Route;
use crate::matcher::{RouteMatch, find_route_match};

/// Routes in registration order. The first matching route wins.
#[derive(Debug, Clone, Default)]
pub struct RouteList {
    routes: Vec<Route>,
}

impl RouteList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            routes: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, route: Route) -> usize {
        self.routes.push(route);
        self.routes.len() - 1
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Route> {
        self.routes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }

    pub fn as_slice(&self) -> &[Route] {
        &self.routes
    }

    pub fn find(&self, path: &str) -> Option<RouteMatch<'_>> {
        find_route_match(&self.routes, path)
    }
}

impl From<Vec<Route>> for RouteList {
    fn from(routes: Vec<Route>) -> Self {
        Self { routes }
    }
}

impl FromIterator<Route> for RouteList {
    fn from_iter<I: IntoIterator<Item = Route>>(iter: I) -> Self {
        Self {
            routes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RouteList {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

impl AsRef<[Route]> for RouteList {
    fn as_ref(&self) -> &[Route] {
        &self.routes
    }
}
