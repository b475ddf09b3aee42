/// Prepend `<prefix>-` to a version.
///
/// A trailing `-` on the prefix is dropped first, so `"cli"` and `"cli-"`
/// give the same result. An empty prefix leaves the value unchanged.
pub fn apply_prefix(value: &str, prefix: &str) -> String {
    let prefix = prefix.strip_suffix('-').unwrap_or(prefix);
    if prefix.is_empty() {
        value.to_string()
    } else {
        format!("{}-{}", prefix, value)
    }
}

/// Append `-<suffix>` to a version.
///
/// A leading `-` on the suffix is dropped first, so `"SNAPSHOT"` and
/// `"-SNAPSHOT"` give the same result. An empty suffix leaves the value unchanged.
pub fn apply_suffix(value: &str, suffix: &str) -> String {
    let suffix = suffix.strip_prefix('-').unwrap_or(suffix);
    if suffix.is_empty() {
        value.to_string()
    } else {
        format!("{}-{}", value, suffix)
    }
}
