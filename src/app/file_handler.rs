//! File system helpers for the application: validating input paths and
//! reading or writing JSON documents.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Error as IoError, Write};
use std::path::Path;

use serde_json::Value;

use super::error::AppError;
use super::verbose_eprintln;

/// Checks that `path` exists and points to a regular file.
///
/// # Errors
/// Returns `AppError::InvalidPath` if the path is missing or not a file.
pub fn validate_input_file(path: &Path, quiet_mode: bool) -> Result<(), AppError> {
    if !path.exists() {
        let error_msg = format!("File not found: {}", path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    if !path.is_file() {
        let error_msg = format!("Path is not a file: {}", path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    Ok(())
}

/// Reads a document from `path`.
///
/// Content that parses as JSON is returned as parsed; anything else comes
/// back verbatim as a JSON string.
pub fn read_document(path: &Path, quiet_mode: bool) -> Result<Value, AppError> {
    let content = fs::read_to_string(path)?;
    match serde_json::from_str(&content) {
        Ok(value) => Ok(value),
        Err(e) => {
            verbose_eprintln!(
                quiet_mode,
                "{} is not valid JSON ({}); treating it as text.",
                path.display(),
                e
            );
            Ok(Value::String(content))
        }
    }
}

/// Serializes `document` as JSON into `path`, replacing any previous content.
pub fn write_document(path: &Path, document: &Value) -> Result<(), AppError> {
    let content = serde_json::to_string(document)?;
    write_content_to_file(path, &content)?;
    Ok(())
}

/// Writes string content to a file, creating or truncating it, and flushes
/// before returning.
pub fn write_content_to_file(file_path: &Path, content: &str) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        let doc = json!({"a": {"b": {"c": 42}}, "x": 100});
        write_document(&path, &doc).unwrap();
        assert_eq!(read_document(&path, true).unwrap(), doc);
    }

    #[test]
    fn test_non_json_is_read_as_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        write_content_to_file(&path, "plain words").unwrap();
        assert_eq!(read_document(&path, true).unwrap(), json!("plain words"));
    }

    #[test]
    fn test_validate_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            validate_input_file(&missing, true),
            Err(AppError::InvalidPath(_))
        ));
        assert!(matches!(
            validate_input_file(dir.path(), true),
            Err(AppError::InvalidPath(_))
        ));

        let present = dir.path().join("present.json");
        write_content_to_file(&present, "{}").unwrap();
        assert!(validate_input_file(&present, true).is_ok());
    }
}
