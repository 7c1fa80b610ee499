//! Owner-name algebra: canonical lookup keys, label handling and wildcard
//! matching. Stored names carry no trailing dot; wire names usually do.

/// Canonical lookup key for a query name: lower-cased, trailing root dot
/// stripped. The root name "." is kept as-is.
pub fn normalize(name: &str) -> String {
    if name == "." {
        return name.to_string();
    }
    name.trim_end_matches('.').to_ascii_lowercase()
}

/// Appends the root dot if the name lacks one.
pub fn with_trailing_dot(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

/// Splits a dotted name into labels. The root name has no labels.
pub fn split_labels(name: &str) -> Vec<&str> {
    let trimmed = name.trim_end_matches('.');
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('.').collect()
}

/// Label-wise wildcard match of a query name against a stored owner name.
///
/// Label counts must be equal; a `*` label in the pattern covers exactly one
/// query label, and every other label compares case-insensitively.
pub fn wildcard_match(qname: &str, pattern: &str) -> bool {
    let qlabels = split_labels(qname);
    let plabels = split_labels(pattern);

    if qlabels.len() != plabels.len() {
        return false;
    }

    qlabels
        .iter()
        .zip(plabels.iter())
        .all(|(q, p)| *p == "*" || q.eq_ignore_ascii_case(p))
}
