//! Query-string helpers for share links
//!
//! Share payloads travel in a single query parameter; these helpers extract
//! a parameter's raw (still percent-encoded) value and strip a parameter
//! from a location without disturbing the rest of it.

/// Get the raw value of a query parameter, if present
///
/// The value is returned as-is, still percent-encoded.
pub fn query_param<'a>(location: &'a str, key: &str) -> Option<&'a str> {
    let query = location.split_once('?')?.1;
    let query = query.split_once('#').map_or(query, |(q, _)| q);

    for pair in query.split('&') {
        let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
        if k == key {
            return Some(v);
        }
    }
    None
}

/// Return the location with the given query parameter removed
///
/// The `?` separator is dropped when no parameters remain; any fragment is
/// kept.
pub fn strip_param(location: &str, key: &str) -> String {
    let Some((base, rest)) = location.split_once('?') else {
        return location.to_string();
    };
    let (query, fragment) = match rest.split_once('#') {
        Some((q, f)) => (q, Some(f)),
        None => (rest, None),
    };

    let kept: Vec<&str> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| pair.split_once('=').map_or(*pair, |(k, _)| k) != key)
        .collect();

    let mut out = base.to_string();
    if !kept.is_empty() {
        out.push('?');
        out.push_str(&kept.join("&"));
    }
    if let Some(f) = fragment {
        out.push('#');
        out.push_str(f);
    }
    out
}
