/// Error taxonomy for the rendering pipeline
///
/// Everything that can go wrong while producing one sheet's artifacts is a
/// `RenderError`. The driver catches these at the per-sheet boundary; a
/// failing sheet never aborts the batch.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("failed to parse sheet CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("sheet has no header row")]
    EmptyTable,

    #[error("failed to load logo: {0}")]
    Logo(String),

    #[error("failed to build PDF: {0}")]
    Pdf(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
