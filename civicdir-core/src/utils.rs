/// Lowercase, dash-separated, at most 50 chars. Empty input yields "event".
pub fn slugify(s: &str) -> String {
    let slug: String = s
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .take(50)
        .collect();

    if slug.is_empty() {
        "event".to_string()
    } else {
        slug.trim_end_matches('-').to_string()
    }
}
