mod error;
mod list;

pub use error::{RouteError, RouteResult};
pub use list::RouteList;

use crate::pattern::{Pattern, PatternError};

/// A pattern plus optional positional parameter names.
///
/// Routes are validated once at construction and never mutated by the
/// matcher.
#[derive(Debug, Clone)]
pub struct Route {
    pattern: Pattern,
    params: Option<Vec<String>>,
}

impl Route {
    pub fn new<P>(pattern: P) -> RouteResult<Self>
    where
        P: TryInto<Pattern>,
        RouteError: From<P::Error>,
    {
        let pattern = pattern.try_into()?;
        if let Pattern::Literal(path) = &pattern
            && path.is_empty()
        {
            return Err(PatternError::EmptyLiteral.into());
        }
        Ok(Self {
            pattern,
            params: None,
        })
    }

    /// Positional `names` map onto capture groups 1..=n in order. Declaring
    /// more names than the regex has capture groups is rejected with
    /// [`RouteError::TooManyParams`], as are empty or duplicate names and any
    /// names on a literal pattern.
    pub fn with_params<P, I, S>(pattern: P, names: I) -> RouteResult<Self>
    where
        P: TryInto<Pattern>,
        RouteError: From<P::Error>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut route = Self::new(pattern)?;
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        validate_params(&route.pattern, &names)?;
        route.params = Some(names);
        Ok(route)
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn params(&self) -> Option<&[String]> {
        self.params.as_deref()
    }
}

fn validate_params(pattern: &Pattern, names: &[String]) -> RouteResult<()> {
    if names.is_empty() {
        return Ok(());
    }
    if pattern.is_literal() {
        return Err(RouteError::ParamsOnLiteral {
            pattern: pattern.to_string(),
        });
    }

    for (index, name) in names.iter().enumerate() {
        if name.is_empty() {
            return Err(RouteError::ParamNameEmpty {
                pattern: pattern.to_string(),
                index,
            });
        }
        if names[..index].contains(name) {
            return Err(RouteError::DuplicateParamName {
                pattern: pattern.to_string(),
                name: name.clone(),
            });
        }
    }

    let available = pattern.capture_count();
    if names.len() > available {
        return Err(RouteError::TooManyParams {
            pattern: pattern.to_string(),
            declared: names.len(),
            available,
        });
    }

    Ok(())
}
