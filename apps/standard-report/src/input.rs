//! RuboCop JSON report reader.
//!
//! The linting engine emits one document per run (`--format json`). Only the
//! `files[].path` and `files[].offenses[]` entries matter here; metadata and
//! engine-side summaries are ignored.

use crate::error::{Error, Result};
use crate::models::{FileReport, Offense};
use serde::Deserialize;
use std::fs;
use std::io::Read;

#[derive(Deserialize)]
struct RawReport {
    #[serde(default)]
    files: Vec<RawFile>,
}

#[derive(Deserialize)]
struct RawFile {
    path: String,
    #[serde(default)]
    offenses: Vec<RawOffense>,
}

#[derive(Deserialize)]
struct RawOffense {
    #[serde(default)]
    message: String,
    #[serde(default)]
    cop_name: Option<String>,
    #[serde(default)]
    corrected: bool,
    #[serde(default)]
    location: RawLocation,
}

#[derive(Deserialize, Default)]
struct RawLocation {
    line: Option<i64>,
    column: Option<i64>,
    start_line: Option<i64>,
    start_column: Option<i64>,
}

impl From<RawOffense> for Offense {
    fn from(raw: RawOffense) -> Self {
        let loc = raw.location;
        Offense {
            corrected: raw.corrected,
            line: loc.line.or(loc.start_line).unwrap_or(0),
            column: loc.column.or(loc.start_column).unwrap_or(0),
            message: raw.message,
            cop_name: raw.cop_name,
        }
    }
}

/// Decode a RuboCop JSON report into per-file offense lists, file order kept.
pub fn parse_report(data: &str) -> Result<Vec<FileReport>> {
    let raw: RawReport = serde_json::from_str(data)?;
    let files: Vec<FileReport> = raw
        .files
        .into_iter()
        .map(|f| FileReport::new(f.path, f.offenses.into_iter().map(Offense::from).collect()))
        .collect();
    tracing::debug!(files = files.len(), "parsed offense report");
    Ok(files)
}

/// Read the report document from `path`, or stdin when absent or `-`.
pub fn read_source(path: Option<&str>) -> Result<String> {
    match path {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| Error::Io {
                    path: "<stdin>".into(),
                    source,
                })?;
            Ok(buf)
        }
        Some(p) => fs::read_to_string(p).map_err(|source| Error::Io {
            path: p.to_string(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"{
  "metadata": {"rubocop_version": "1.0.0", "ruby_engine": "ruby"},
  "files": [
    {"path": "Gemfile", "offenses": []},
    {
      "path": "lib/foo.rb",
      "offenses": [
        {
          "severity": "convention",
          "message": "Prefer double-quoted strings",
          "cop_name": "Style/StringLiterals",
          "corrected": false,
          "correctable": true,
          "location": {"start_line": 3, "start_column": 8, "last_line": 3, "last_column": 12, "length": 5, "line": 3, "column": 8}
        },
        {
          "severity": "convention",
          "message": "Trailing whitespace detected.",
          "cop_name": "Layout/TrailingWhitespace",
          "corrected": true,
          "location": {"line": 9, "column": 1}
        }
      ]
    }
  ],
  "summary": {"offense_count": 2, "target_file_count": 2, "inspected_file_count": 2}
}"#;

    #[test]
    fn test_parse_rubocop_report() {
        let files = parse_report(SAMPLE).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path, "Gemfile");
        assert!(files[0].offenses.is_empty());
        let foo = &files[1];
        assert_eq!(foo.path, "lib/foo.rb");
        assert_eq!(
            foo.offenses[0],
            Offense::uncorrected(3, 8, "Prefer double-quoted strings")
                .with_cop_name("Style/StringLiterals")
        );
        assert!(foo.offenses[1].corrected);
        assert_eq!(foo.uncorrected().count(), 1);
    }

    #[test]
    fn test_location_fallbacks_and_defaults() {
        let doc = r#"{"files":[{"path":"a.rb","offenses":[
            {"message":"start only","location":{"start_line":4,"start_column":2}},
            {"message":"no location"}
        ]}]}"#;
        let files = parse_report(doc).unwrap();
        let offs = &files[0].offenses;
        assert_eq!((offs[0].line, offs[0].column), (4, 2));
        assert!(!offs[0].corrected);
        assert_eq!((offs[1].line, offs[1].column), (0, 0));
    }

    #[test]
    fn test_empty_document_has_no_files() {
        assert!(parse_report("{}").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_document_is_input_error() {
        let err = parse_report("{\"files\": [").unwrap_err();
        assert!(matches!(err, Error::Input(_)));
    }

    #[test]
    fn test_read_source_from_file() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("report.json");
        fs::write(&p, SAMPLE).unwrap();
        let data = read_source(p.to_str()).unwrap();
        assert_eq!(data, SAMPLE);
    }

    #[test]
    fn test_read_source_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("absent.json");
        let err = read_source(p.to_str()).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
