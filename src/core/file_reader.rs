//! Input file reading
//!
//! The whole input is read into one in-memory string before processing
//! begins, with its lines joined by a single space. Non-UTF-8 bytes are
//! tolerated via lossy conversion rather than aborting the run.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read `path` in full and join its lines with a single space
pub fn read_joined(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("failed to read input file: {}", path.display()))?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(join_lines(&text))
}

fn join_lines(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_join_lines() {
        assert_eq!(join_lines("the cat sat\non the mat."), "the cat sat on the mat.");
        assert_eq!(join_lines("one line"), "one line");
        assert_eq!(join_lines(""), "");
    }

    #[test]
    fn test_join_lines_trailing_newline() {
        assert_eq!(join_lines("a\nb\n"), "a b");
    }

    #[test]
    fn test_join_lines_crlf() {
        assert_eq!(join_lines("a\r\nb\r\n"), "a b");
    }

    #[test]
    fn test_read_joined() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("input.txt");
        fs::write(&path, "the cat sat\non the mat.\n").unwrap();

        let text = read_joined(&path).unwrap();
        assert_eq!(text, "the cat sat on the mat.");
    }

    #[test]
    fn test_read_joined_empty_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        assert_eq!(read_joined(&path).unwrap(), "");
    }

    #[test]
    fn test_read_joined_missing_file() {
        let err = read_joined(Path::new("/nonexistent/input.txt")).unwrap_err();
        assert!(err.to_string().contains("failed to read input file"));
    }

    #[test]
    fn test_read_joined_invalid_utf8_is_lossy() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("invalid.txt");

        let mut file = fs::File::create(&path).unwrap();
        file.write_all(&[0xFF, 0xFE, b'h', b'i']).unwrap();
        drop(file);

        let text = read_joined(&path).unwrap();
        assert!(text.ends_with("hi"));
    }
}
