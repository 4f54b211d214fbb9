//! Output rendering for offense reports.
//!
//! Supports `human` (default) and `json` outputs. The human form is produced
//! by [`Reporter`]; the JSON form lists uncorrected offenses per file plus a
//! top-level summary.

use crate::models::{FileReport, Summary};
use crate::reporter::{display_path, Reporter};
use serde_json::json;
use serde_json::Value as JsonVal;
use std::io::{self, Write};
use std::path::Path;

/// Print the report in the requested format and return the run summary.
pub fn print_report<W: Write>(
    files: &[FileReport],
    output: &str,
    out: W,
    base_dir: Option<&Path>,
) -> io::Result<Summary> {
    match output {
        "json" => print_report_json(files, out, base_dir),
        _ => run_report(files, out, base_dir),
    }
}

/// Feed every file to a fresh [`Reporter`] in order, then finish the run.
pub fn run_report<W: Write>(
    files: &[FileReport],
    out: W,
    base_dir: Option<&Path>,
) -> io::Result<Summary> {
    let mut reporter = Reporter::new(out);
    if let Some(dir) = base_dir {
        reporter = reporter.with_base_dir(dir);
    }
    for f in files {
        reporter.record_file(&f.path, &f.offenses)?;
    }
    let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
    reporter.finish(paths.as_slice())
}

/// Pretty-print the JSON document from [`compose_report_json`].
pub fn print_report_json<W: Write>(
    files: &[FileReport],
    mut out: W,
    base_dir: Option<&Path>,
) -> io::Result<Summary> {
    let (doc, summary) = compose(files, base_dir);
    serde_json::to_writer_pretty(&mut out, &doc)?;
    writeln!(out)?;
    out.flush()?;
    Ok(summary)
}

/// Compose report JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(files: &[FileReport], base_dir: Option<&Path>) -> JsonVal {
    compose(files, base_dir).0
}

fn compose(files: &[FileReport], base_dir: Option<&Path>) -> (JsonVal, Summary) {
    let mut summary = Summary {
        files: files.len(),
        ..Summary::default()
    };
    let mut items = Vec::new();
    for f in files {
        let offenses: Vec<JsonVal> = f
            .uncorrected()
            .map(|o| {
                json!({
                    "line": o.line,
                    "column": o.column,
                    "message": o.message,
                    "cop_name": o.cop_name,
                })
            })
            .collect();
        summary.corrected += f.offenses.len() - offenses.len();
        summary.offenses += offenses.len();
        if !offenses.is_empty() {
            items.push(json!({
                "path": display_path(&f.path, base_dir),
                "offenses": offenses,
            }));
        }
    }
    let doc = json!({"files": items, "summary": summary});
    (doc, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Offense;

    fn sample() -> Vec<FileReport> {
        vec![
            FileReport::new("/repo/Gemfile", vec![Offense::corrected()]),
            FileReport::new(
                "/repo/lib/a.rb",
                vec![
                    Offense::uncorrected(1, 2, "One").with_cop_name("Style/One"),
                    Offense::corrected(),
                    Offense::uncorrected(3, 4, "Two"),
                ],
            ),
        ]
    }

    #[test]
    fn test_compose_report_json_shape() {
        let out = compose_report_json(&sample(), Some(Path::new("/repo")));
        assert_eq!(out["summary"]["files"], 2);
        assert_eq!(out["summary"]["offenses"], 2);
        assert_eq!(out["summary"]["corrected"], 2);
        assert_eq!(out["files"].as_array().unwrap().len(), 1);
        assert_eq!(out["files"][0]["path"], "lib/a.rb");
        assert_eq!(out["files"][0]["offenses"][0]["cop_name"], "Style/One");
        assert!(out["files"][0]["offenses"][1]["cop_name"].is_null());
        assert_eq!(out["files"][0]["offenses"][1]["line"], 3);
    }

    #[test]
    fn test_run_report_human_summary() {
        let mut buf = Vec::new();
        let summary = run_report(&sample(), &mut buf, Some(Path::new("/repo"))).unwrap();
        assert_eq!(
            summary,
            Summary {
                files: 2,
                offenses: 2,
                corrected: 2
            }
        );
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("  lib/a.rb:1:2: One\n  lib/a.rb:3:4: Two\n"));
        assert!(!text.contains("Gemfile"));
    }

    #[test]
    fn test_print_report_json_mode_has_no_header() {
        let mut buf = Vec::new();
        let summary = print_report(&sample(), "json", &mut buf, None).unwrap();
        assert_eq!(summary.offenses, 2);
        let text = String::from_utf8(buf).unwrap();
        assert!(!text.contains("standard: Use Ruby Standard Style"));
        let parsed: JsonVal = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["files"][0]["path"], "/repo/lib/a.rb");
    }

    #[test]
    fn test_print_report_clean_run_is_silent() {
        let files = vec![FileReport::new("Gemfile", vec![])];
        let mut buf = Vec::new();
        let summary = print_report(&files, "human", &mut buf, None).unwrap();
        assert_eq!(summary.offenses, 0);
        assert!(buf.is_empty());
    }
}
