/// Inline download index
///
/// Builds an index.html next to the PDFs where every artifact is embedded
/// as a data URI, so the page works when mailed around or opened from a
/// file share with no sibling files.
use std::fs;
use std::io;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::types::{Artifact, SheetOutcome};

pub fn data_uri(bytes: &[u8]) -> String {
    format!("data:application/pdf;base64,{}", STANDARD.encode(bytes))
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn download_link(artifact: &Artifact, label: &str) -> String {
    format!(
        "<a href=\"{}\" download=\"{}\">&#11015; {}</a>",
        data_uri(&artifact.bytes),
        escape_html(&artifact.filename),
        escape_html(label),
    )
}

pub fn write_index_html(outcomes: &[SheetOutcome], path: &Path) -> io::Result<()> {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Ranking reports</title>\n</head>\n<body>\n");
    html.push_str("<h1>Ranking reports</h1>\n<table>\n");
    html.push_str("<tr><th>Sheet</th><th>Full report</th><th>Top 200</th></tr>\n");

    for outcome in outcomes {
        html.push_str("<tr><td>");
        html.push_str(&escape_html(&outcome.title));
        html.push_str("</td>");
        match &outcome.result {
            Ok(artifacts) => {
                for artifact in [&artifacts.full, &artifacts.condensed] {
                    html.push_str("<td>");
                    match artifact {
                        Some(a) => html.push_str(&download_link(a, &a.filename)),
                        None => html.push_str("&mdash;"),
                    }
                    html.push_str("</td>");
                }
            }
            Err(e) => {
                html.push_str(&format!(
                    "<td colspan=\"2\">failed: {}</td>",
                    escape_html(&e.to_string())
                ));
            }
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</table>\n</body>\n</html>\n");
    fs::write(path, html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use crate::types::SheetArtifacts;
    use std::path::PathBuf;

    fn artifact(name: &str) -> Artifact {
        Artifact {
            filename: name.to_string(),
            path: PathBuf::from(format!("/tmp/{}", name)),
            bytes: b"%PDF-1.3 fake".to_vec(),
        }
    }

    #[test]
    fn data_uri_is_base64_pdf() {
        let uri = data_uri(b"%PDF-1.3 fake");
        assert!(uri.starts_with("data:application/pdf;base64,"));
        let payload = uri.strip_prefix("data:application/pdf;base64,").unwrap();
        assert_eq!(STANDARD.decode(payload).unwrap(), b"%PDF-1.3 fake");
    }

    #[test]
    fn index_lists_artifacts_and_failures() {
        let outcomes = vec![
            SheetOutcome {
                title: "QB <Top>".to_string(),
                result: Ok(SheetArtifacts {
                    full: Some(artifact("QB.pdf")),
                    condensed: Some(artifact("Top_200_QB.pdf")),
                    last_updated: "Aug 20".to_string(),
                }),
            },
            SheetOutcome {
                title: "RB".to_string(),
                result: Err(RenderError::Fetch("404".to_string())),
            },
        ];

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("index.html");
        write_index_html(&outcomes, &path).unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("QB &lt;Top&gt;"));
        assert!(html.contains("download=\"Top_200_QB.pdf\""));
        assert!(html.contains("data:application/pdf;base64,"));
        assert!(html.contains("failed: fetch failed: 404"));
    }

    #[test]
    fn missing_artifact_renders_placeholder() {
        let outcomes = vec![SheetOutcome {
            title: "WR".to_string(),
            result: Ok(SheetArtifacts {
                full: Some(artifact("WR.pdf")),
                condensed: None,
                last_updated: "Unknown".to_string(),
            }),
        }];

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("index.html");
        write_index_html(&outcomes, &path).unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("&mdash;"));
    }
}
