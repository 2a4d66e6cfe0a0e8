/// Canonical form for make and model strings arriving from registry data.
///
/// Hyphens and underscores become spaces so "MERCEDES-BENZ" and
/// "MERCEDES BENZ" key identically, runs of whitespace collapse to one
/// space, and the result is uppercased and trimmed. Alphanumerics are
/// never removed or reordered, so "A3" and "3 SERIES" stay distinct.
pub fn normalize(value: &str) -> String {
    let spaced = value.replace(['-', '_'], " ");
    let collapsed = spaced.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_ascii_uppercase()
}

/// Joins two already-normalized components into a table key.
pub(crate) fn composite_key(make: &str, model: &str) -> String {
    format!("{make}|{model}")
}
