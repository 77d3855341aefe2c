use std::path::Path;

/// Trailing token removed from law file stems (`criminal_law` -> `criminal`).
pub const LAW_SUFFIX: &str = "_law";
/// Leading token removed from case file stems.
pub const CASE_PREFIX: &str = "famous_cases.";

fn stem(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Derive a law `code` from a file name: strip `suffix`, spaces to
/// underscores, lowercase.
pub fn law_code(file_name: &str, suffix: &str) -> String {
    let stem = stem(file_name);
    stem.strip_suffix(suffix)
        .unwrap_or(&stem)
        .replace(' ', "_")
        .to_lowercase()
}

/// Derive a case title from a file name: strip `prefix` (ASCII
/// case-insensitive) and surrounding whitespace.
pub fn case_title(file_name: &str, prefix: &str) -> String {
    let stem = stem(file_name);
    let rest = match stem.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &stem[prefix.len()..],
        _ => stem.as_str(),
    };
    rest.trim().to_string()
}
