use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "rankpress")]
#[command(about = "Render published ranking sheets as fixed-layout PDF reports")]
#[command(version)]
pub struct CliArgs {
    /// TOML catalog of sheets to render ([[sheet]] entries with title and url)
    /// Defaults to the built-in rankings catalog when omitted
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Directory the PDF artifacts are written into
    #[arg(long, short = 'o', value_name = "DIR", default_value = "rankings")]
    pub out_dir: PathBuf,

    /// Render only these sheet titles from the catalog
    /// Can specify multiple: --sheets "PPR Rankings" "Standard Rankings"
    #[arg(long, value_name = "TITLE", num_args = 1..)]
    pub sheets: Vec<String>,

    /// Disable position-based row coloring (all rows white)
    #[arg(long)]
    pub no_color: bool,

    /// Use landscape pages for the full report
    #[arg(long)]
    pub landscape: bool,

    /// PNG logo stamped on every page
    #[arg(long, value_name = "PNG")]
    pub logo: Option<PathBuf>,

    /// Skip the multi-page full reports
    #[arg(long)]
    pub skip_full: bool,

    /// Skip the one-page Top 200 reports
    #[arg(long)]
    pub skip_condensed: bool,

    /// Write an index.html with inline download links next to the PDFs
    #[arg(long)]
    pub html_index: bool,

    /// Write a JSON batch summary to this path
    #[arg(long, value_name = "FILE")]
    pub json_summary: Option<PathBuf>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.skip_full && self.skip_condensed {
            return Err("Cannot specify both --skip-full and --skip-condensed".to_string());
        }

        if let Some(path) = &self.catalog {
            if !path.exists() {
                return Err(format!("Catalog file not found: {}", path.display()));
            }
        }

        if let Some(path) = &self.logo {
            if !path.exists() {
                return Err(format!("Logo file not found: {}", path.display()));
            }
        }

        Ok(())
    }
}
