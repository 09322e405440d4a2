//! Host-qualified path handling
//!
//! Paths of the form `host:/abs/path` name a directory on another
//! execution host. The resolver only ever compares and re-attaches the
//! qualifier; all filesystem walking stays host-local.

/// Split a host qualifier off a path string.
///
/// A qualifier is at least two characters of `[A-Za-z0-9._-]` followed by
/// `:` and an absolute remainder. Single-character prefixes are never
/// hosts, so Windows-style drive letters pass through untouched.
pub fn split_host(path: &str) -> (Option<&str>, &str) {
    if let Some((host, rest)) = path.split_once(':') {
        if host.len() > 1
            && host
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
            && rest.starts_with('/')
        {
            return (Some(host), rest);
        }
    }
    (None, path)
}

/// The host qualifier of a path string, if any.
pub fn host_of(path: &str) -> Option<&str> {
    split_host(path).0
}

/// Attach a host qualifier to a host-local path.
pub fn requalify(host: Option<&str>, local: &str) -> String {
    match host {
        Some(host) => format!("{host}:{local}"),
        None => local.to_string(),
    }
}
