use regex::Regex;

/// Derive the dogtime-style slug for a breed name: lowercase, each run of
/// non-alphanumeric characters collapsed to a single `-`, no leading or
/// trailing dashes. "Great Dane" -> "great-dane".
pub fn name_to_slug(name: &str) -> String {
    let non_alnum = Regex::new(r"[^a-z0-9]+").unwrap();
    let lowered = name.to_lowercase();
    non_alnum
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name() {
        assert_eq!(name_to_slug("Great Dane"), "great-dane");
    }

    #[test]
    fn test_punctuation_collapses() {
        assert_eq!(name_to_slug("St. Bernard"), "st-bernard");
        assert_eq!(name_to_slug("Wirehaired Pointing Griffon"), "wirehaired-pointing-griffon");
    }

    #[test]
    fn test_edge_dashes_trimmed() {
        assert_eq!(name_to_slug("  Borzoi  "), "borzoi");
        assert_eq!(name_to_slug("---"), "");
    }
}
