// Navigation surface: two named destinations, `list` and `detail/{id}`.

/// Detail ID used when the route segment is missing or unparseable
pub const DEFAULT_DETAIL_ID: i64 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    List,
    Detail { id: i64 },
}

/// Parse a typed command into a route. Unknown input is not a route; the
/// caller decides how to surface that. A malformed or absent detail ID
/// silently defaults to [`DEFAULT_DETAIL_ID`].
pub fn parse_route(input: &str) -> Option<Route> {
    let input = input.trim();

    if input == "list" {
        return Some(Route::List);
    }

    match input.strip_prefix("detail") {
        Some("") => Some(Route::Detail {
            id: DEFAULT_DETAIL_ID,
        }),
        Some(rest) if rest.starts_with('/') => {
            let id = rest[1..].parse::<i64>().unwrap_or(DEFAULT_DETAIL_ID);
            Some(Route::Detail { id })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_route() {
        assert_eq!(parse_route("list"), Some(Route::List));
        assert_eq!(parse_route("  list  "), Some(Route::List));
    }

    #[test]
    fn test_detail_route_with_id() {
        assert_eq!(parse_route("detail/7"), Some(Route::Detail { id: 7 }));
        assert_eq!(parse_route("detail/-3"), Some(Route::Detail { id: -3 }));
    }

    #[test]
    fn test_detail_route_missing_id_defaults() {
        assert_eq!(parse_route("detail"), Some(Route::Detail { id: 1 }));
        assert_eq!(parse_route("detail/"), Some(Route::Detail { id: 1 }));
    }

    #[test]
    fn test_detail_route_unparseable_id_defaults() {
        assert_eq!(parse_route("detail/abc"), Some(Route::Detail { id: 1 }));
        assert_eq!(parse_route("detail/1.5"), Some(Route::Detail { id: 1 }));
    }

    #[test]
    fn test_unknown_input_is_not_a_route() {
        assert_eq!(parse_route("details/3"), None);
        assert_eq!(parse_route("detailx"), None);
        assert_eq!(parse_route(""), None);
        assert_eq!(parse_route("users"), None);
    }
}
