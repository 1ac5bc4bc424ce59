//! Path normalization for request URLs found in test source.

use std::sync::OnceLock;

use regex::Regex;

fn base_url_placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\$?\{[^}]*base_?url[^}]*\}")
            .expect("base url placeholder regex must compile")
    })
}

fn scheme_host_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^https?://[^/]+").expect("scheme host regex must compile"))
}

/// Matches a whole path segment that is a UUID or purely numeric.
fn id_segment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(?:\d+|[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12})$",
        )
        .expect("id segment regex must compile")
    })
}

fn repeated_slash_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/{2,}").expect("repeated slash regex must compile"))
}

/// Reduce a concrete request URL to a conservative parameterized path.
///
/// Strips base-URL placeholders (`{base_url}`, `{self.base_url}`,
/// `${baseUrl}`), scheme and host, and the query string. Segments that are
/// entirely a UUID or entirely digits become `{id}`; mixed segments such as
/// `42abc` or `2024-q1` are kept. The result has a single leading slash.
///
/// ```text
/// https://api.test/users/42?expand=1  ->  /users/{id}
/// {self.base_url}/orders              ->  /orders
/// ```
#[must_use]
pub fn normalize_path(raw: &str) -> String {
    let path = base_url_placeholder_re().replace_all(raw.trim(), "");
    let path = scheme_host_re().replace(&path, "");
    let path = path.split('?').next().unwrap_or_default();
    let path = path
        .split('/')
        .map(|segment| {
            if id_segment_re().is_match(segment) {
                "{id}"
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/");

    let path = if path.starts_with('/') {
        path
    } else {
        format!("/{path}")
    };
    repeated_slash_re().replace_all(&path, "/").into_owned()
}
