/// Batch result reporting
///
/// Per-sheet console lines, the end-of-run summary block, and the
/// optional machine-readable JSON export of a batch.
use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::types::SheetOutcome;
use crate::ui;

/// Aggregate counts over a finished batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub ok: usize,
    pub failed: usize,
    pub total: usize,
}

#[derive(Serialize)]
struct SheetReport {
    title: String,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_updated: Option<String>,
    files: Vec<String>,
}

impl SheetReport {
    fn from_outcome(outcome: &SheetOutcome) -> SheetReport {
        match &outcome.result {
            Ok(artifacts) => SheetReport {
                title: outcome.title.clone(),
                status: "ok",
                error: None,
                last_updated: Some(artifacts.last_updated.clone()),
                files: artifacts.artifacts().map(|a| a.filename.clone()).collect(),
            },
            Err(e) => SheetReport {
                title: outcome.title.clone(),
                status: "failed",
                error: Some(e.to_string()),
                last_updated: None,
                files: Vec::new(),
            },
        }
    }
}

/// Print one sheet's result as it completes
pub fn print_outcome(outcome: &SheetOutcome) {
    match &outcome.result {
        Ok(artifacts) => {
            let files: Vec<&str> = artifacts.artifacts().map(|a| a.filename.as_str()).collect();
            ui::print_result_line(
                true,
                &format!("{} (updated {}) -> {}", outcome.title, artifacts.last_updated, files.join(", ")),
            );
        }
        Err(e) => {
            ui::print_result_line(false, &format!("{}: {}", outcome.title, e));
        }
    }
}

pub fn summarize(outcomes: &[SheetOutcome]) -> BatchSummary {
    let ok = outcomes.iter().filter(|o| o.is_ok()).count();
    BatchSummary {
        ok,
        failed: outcomes.len() - ok,
        total: outcomes.len(),
    }
}

pub fn print_summary(summary: &BatchSummary) {
    println!();
    println!("=== Summary ===");
    println!("Sheets rendered: {}", summary.ok);
    if summary.failed > 0 {
        println!("Sheets failed:   {}", summary.failed);
    }
    println!("Total:           {}", summary.total);
}

/// Write the batch summary as pretty-printed JSON
pub fn export_json_summary(outcomes: &[SheetOutcome], path: &Path) -> io::Result<()> {
    let reports: Vec<SheetReport> = outcomes.iter().map(SheetReport::from_outcome).collect();
    let json = serde_json::to_string_pretty(&reports)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use crate::types::{Artifact, SheetArtifacts};
    use std::path::PathBuf;

    fn ok_outcome(title: &str) -> SheetOutcome {
        SheetOutcome {
            title: title.to_string(),
            result: Ok(SheetArtifacts {
                full: Some(Artifact {
                    filename: format!("{}.pdf", title),
                    path: PathBuf::from(format!("/tmp/{}.pdf", title)),
                    bytes: b"%PDF-1.3".to_vec(),
                }),
                condensed: None,
                last_updated: "Aug 20".to_string(),
            }),
        }
    }

    fn failed_outcome(title: &str) -> SheetOutcome {
        SheetOutcome {
            title: title.to_string(),
            result: Err(RenderError::Fetch("timed out".to_string())),
        }
    }

    #[test]
    fn summarize_counts_ok_and_failed() {
        let outcomes = vec![ok_outcome("A"), failed_outcome("B"), ok_outcome("C")];
        let summary = summarize(&outcomes);
        assert_eq!(summary, BatchSummary { ok: 2, failed: 1, total: 3 });
    }

    #[test]
    fn summarize_empty_batch() {
        let summary = summarize(&[]);
        assert_eq!(summary, BatchSummary { ok: 0, failed: 0, total: 0 });
    }

    #[test]
    fn json_summary_tags_status_and_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("summary.json");
        let outcomes = vec![ok_outcome("QB"), failed_outcome("RB")];

        export_json_summary(&outcomes, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed[0]["title"], "QB");
        assert_eq!(parsed[0]["status"], "ok");
        assert_eq!(parsed[0]["files"][0], "QB.pdf");
        assert_eq!(parsed[0]["last_updated"], "Aug 20");
        assert_eq!(parsed[1]["status"], "failed");
        assert_eq!(parsed[1]["error"], "fetch failed: timed out");
        assert!(parsed[1].get("last_updated").is_none());
    }
}
