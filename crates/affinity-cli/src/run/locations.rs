//! Location list reader.

use std::path::Path;

/// Reads one location per line, trimming whitespace and skipping blank lines.
///
/// # Errors
///
/// Returns the underlying I/O error; callers treat `NotFound` as "nothing to do".
pub(crate) fn load_locations(path: &Path) -> std::io::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_locations(&content))
}

fn parse_locations(content: &str) -> Vec<String> {
    content
        .trim_start_matches('\u{feff}')
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_and_whitespace_are_dropped() {
        let parsed = parse_locations("Lisbon, Portugal\n\n   \n  Madrid, Spain  \r\nTokyo\n");
        assert_eq!(parsed, ["Lisbon, Portugal", "Madrid, Spain", "Tokyo"]);
    }

    #[test]
    fn byte_order_mark_is_ignored() {
        let parsed = parse_locations("\u{feff}Paris, France\n");
        assert_eq!(parsed, ["Paris, France"]);
    }

    #[test]
    fn empty_file_yields_no_locations() {
        assert!(parse_locations("").is_empty());
        assert!(parse_locations("\n\n").is_empty());
    }

    #[test]
    fn missing_file_is_not_found() {
        let path = std::env::temp_dir().join(format!("no-such-{}.txt", uuid::Uuid::new_v4()));
        let err = load_locations(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
