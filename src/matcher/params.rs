use crate::pattern::PatternMatch;
use crate::types::RouteParams;

/// Named groups first, then positional names overlaid onto captures 1..=n.
///
/// A positional name whose group did not participate keeps whatever the named
/// groups supplied, if anything.
pub(crate) fn extract_params(found: &PatternMatch, names: Option<&[String]>) -> RouteParams {
    let mut params = found.groups().clone();
    let Some(names) = names else {
        return params;
    };

    params.reserve(names.len());
    for (i, name) in names.iter().enumerate() {
        if let Some(value) = found.get(i + 1) {
            params.insert(name.clone(), value.to_string());
        }
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Pattern;

    #[test]
    fn positional_names_overlay_named_groups() {
        let pattern = Pattern::regex(r"^/(?<kind>\w+)/(\d+)$").expect("regex should compile");
        let found = pattern.find("/users/7").expect("should match");
        let names = vec!["kind_alias".to_string(), "id".to_string()];

        let params = extract_params(&found, Some(names.as_slice()));

        assert_eq!(params.get("kind").map(String::as_str), Some("users"));
        assert_eq!(params.get("kind_alias").map(String::as_str), Some("users"));
        assert_eq!(params.get("id").map(String::as_str), Some("7"));
    }

    #[test]
    fn non_participating_group_is_left_out() {
        let pattern = Pattern::regex(r"^/a(?:/(\d+))?$").expect("regex should compile");
        let found = pattern.find("/a").expect("should match");
        let names = vec!["id".to_string()];

        assert!(extract_params(&found, Some(names.as_slice())).is_empty());
    }
}
