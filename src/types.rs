/// Core data structures for the render batch
///
/// This module defines the plan the driver executes and the tagged
/// per-sheet outcome it produces. Fault isolation across the batch is
/// expressed in the types: one `SheetOutcome` per catalog entry, success
/// or failure, never an aborted loop.
use std::path::PathBuf;

use crate::canvas::Logo;
use crate::error::RenderError;

/// One catalog entry: a named ranking sheet and its CSV export locator
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SheetSpec {
    pub title: String,
    pub url: String,
}

impl SheetSpec {
    pub fn new(title: &str, url: &str) -> Self {
        Self { title: title.to_string(), url: url.to_string() }
    }

    /// Output filename for the full multi-page report
    pub fn full_filename(&self) -> String {
        format!("{}.pdf", self.title)
    }

    /// Output filename for the one-page condensed report
    pub fn condensed_filename(&self) -> String {
        format!("Top_200_{}.pdf", self.title)
    }
}

/// Presentation options threaded explicitly through every layout call.
/// There is deliberately no ambient/global toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Color rows by position category (white everywhere when false)
    pub use_pos_colors: bool,
    /// Render the full report on landscape pages (275-unit canvas)
    pub landscape_full: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { use_pos_colors: true, landscape_full: false }
    }
}

/// Which report types to produce per sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSelection {
    pub full: bool,
    pub condensed: bool,
}

impl Default for ReportSelection {
    fn default() -> Self {
        Self { full: true, condensed: true }
    }
}

/// Fully resolved, immutable description of one batch run
#[derive(Debug, Clone)]
pub struct RenderPlan {
    pub sheets: Vec<SheetSpec>,
    pub out_dir: PathBuf,
    pub options: RenderOptions,
    pub selection: ReportSelection,
    pub logo: Option<Logo>,
    pub html_index: bool,
    pub json_summary: Option<PathBuf>,
}

/// One finished PDF artifact. Bytes are kept so the link generator can
/// embed them without re-reading the file.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub filename: String,
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

/// Everything produced for one sheet
#[derive(Debug, Clone)]
pub struct SheetArtifacts {
    pub full: Option<Artifact>,
    pub condensed: Option<Artifact>,
    pub last_updated: String,
}

impl SheetArtifacts {
    pub fn artifacts(&self) -> impl Iterator<Item = &Artifact> {
        self.full.iter().chain(self.condensed.iter())
    }
}

/// Result of processing one catalog entry
#[derive(Debug)]
pub struct SheetOutcome {
    pub title: String,
    pub result: Result<SheetArtifacts, RenderError>,
}

impl SheetOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}
