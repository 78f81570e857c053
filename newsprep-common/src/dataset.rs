//! Dataset file I/O
//!
//! Loads and saves the JSON article array. The whole batch is held in
//! memory; callers only write output after every article has been
//! processed, so a mid-batch failure produces no output file.

use crate::{Article, Error, Result};
use std::path::Path;
use tracing::debug;

/// Load the full article array from a JSON dataset file.
///
/// A missing file is reported as [`Error::NotFound`] before any read is
/// attempted. Malformed content (not a JSON array of objects) is a fatal
/// parse error.
pub fn load_articles(path: &Path) -> Result<Vec<Article>> {
    if !path.exists() {
        return Err(Error::NotFound(format!(
            "Input file not found: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path)?;
    let articles: Vec<Article> = serde_json::from_str(&content)?;

    debug!(
        path = %path.display(),
        count = articles.len(),
        "Loaded dataset"
    );

    Ok(articles)
}

/// Write the article array as pretty-printed JSON.
///
/// Formatting is stable across runs: 2-space indentation, input array
/// order preserved, non-ASCII characters written as-is, trailing newline.
pub fn save_articles(path: &Path, articles: &[Article]) -> Result<()> {
    let mut json = serde_json::to_string_pretty(articles)?;
    json.push('\n');
    std::fs::write(path, json)?;

    debug!(
        path = %path.display(),
        count = articles.len(),
        "Saved dataset"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let result = load_articles(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_malformed_content_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "bad.json", r#"{"not": "an array"}"#);
        let result = load_articles(&path);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_round_trip_preserves_order_and_extras() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "news.json",
            r#"[
                {"id": 2, "title": "Second story", "tags": ["policy"]},
                {"id": 1, "title": "Fírst stôry", "views": 99}
            ]"#,
        );

        let articles = load_articles(&path).unwrap();
        assert_eq!(articles.len(), 2);

        let out = dir.path().join("out.json");
        save_articles(&out, &articles).unwrap();

        let reloaded = load_articles(&out).unwrap();
        assert_eq!(reloaded[0].title, "Second story");
        assert_eq!(reloaded[1].title, "Fírst stôry");
        assert_eq!(reloaded[1].extra.get("views"), Some(&serde_json::json!(99)));

        // Non-ASCII must be written as-is, not escaped
        let raw = std::fs::read_to_string(&out).unwrap();
        assert!(raw.contains("Fírst stôry"));
        assert!(raw.ends_with('\n'));
    }

    #[test]
    fn test_save_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "news.json",
            r#"[{"id": 1, "title": "A", "tags": ["tech"], "z_field": true}]"#,
        );
        let articles = load_articles(&path).unwrap();

        let out_a = dir.path().join("a.json");
        let out_b = dir.path().join("b.json");
        save_articles(&out_a, &articles).unwrap();
        save_articles(&out_b, &articles).unwrap();

        assert_eq!(
            std::fs::read(&out_a).unwrap(),
            std::fs::read(&out_b).unwrap()
        );
    }
}
