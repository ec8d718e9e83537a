/// Configuration resolution
///
/// Turns parsed CLI arguments into the immutable `RenderPlan` the driver
/// executes. The sheet catalog either comes from a TOML file or from the
/// built-in list of published rankings.
use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::canvas::Logo;
use crate::cli::CliArgs;
use crate::types::{RenderOptions, RenderPlan, ReportSelection, SheetSpec};

/// Built-in catalog, used when no --catalog file is given
const DEFAULT_CATALOG: [(&str, &str); 8] = [
    (
        "HPPR Rankings",
        "https://docs.google.com/spreadsheets/d/1O7XxafNJnvAQHvsPS93hX5BIMqphEfyjovGfdWNM5Ow/gviz/tq?tqx=out:csv&gid=593850694",
    ),
    (
        "PPR Rankings",
        "https://docs.google.com/spreadsheets/d/1O7XxafNJnvAQHvsPS93hX5BIMqphEfyjovGfdWNM5Ow/gviz/tq?tqx=out:csv&gid=2116955188#gid=2116955188",
    ),
    (
        "Standard Rankings",
        "https://docs.google.com/spreadsheets/d/1O7XxafNJnvAQHvsPS93hX5BIMqphEfyjovGfdWNM5Ow/gviz/tq?tqx=out:csv&gid=1886253811#gid=1886253811",
    ),
    (
        "3 WR HPPR Rankings",
        "https://docs.google.com/spreadsheets/d/1O7XxafNJnvAQHvsPS93hX5BIMqphEfyjovGfdWNM5Ow/gviz/tq?tqx=out:csv&gid=2128569716",
    ),
    (
        "3 WR PPR Rankings",
        "https://docs.google.com/spreadsheets/d/1O7XxafNJnvAQHvsPS93hX5BIMqphEfyjovGfdWNM5Ow/gviz/tq?tqx=out:csv&gid=496321386#gid=496321386",
    ),
    (
        "PPR SuperFlex Rankings",
        "https://docs.google.com/spreadsheets/d/1O7XxafNJnvAQHvsPS93hX5BIMqphEfyjovGfdWNM5Ow/gviz/tq?tqx=out:csv&gid=1099594593#gid=1099594593",
    ),
    (
        "TE Premium Rankings",
        "https://docs.google.com/spreadsheets/d/1O7XxafNJnvAQHvsPS93hX5BIMqphEfyjovGfdWNM5Ow/gviz/tq?tqx=out:csv&gid=866813728#gid=866813728",
    ),
    (
        "PPR 6 Point Pass TD Rankings",
        "https://docs.google.com/spreadsheets/d/1O7XxafNJnvAQHvsPS93hX5BIMqphEfyjovGfdWNM5Ow/gviz/tq?tqx=out:csv&gid=1095986422#gid=1095986422",
    ),
];

#[derive(Debug, Deserialize)]
struct CatalogFile {
    sheet: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    title: String,
    url: String,
}

pub fn default_catalog() -> Vec<SheetSpec> {
    DEFAULT_CATALOG
        .iter()
        .map(|(title, url)| SheetSpec::new(title, url))
        .collect()
}

/// Read a `[[sheet]]` catalog file, preserving entry order
pub fn load_catalog(path: &Path) -> Result<Vec<SheetSpec>, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read catalog {}: {}", path.display(), e))?;
    let parsed: CatalogFile =
        toml::from_str(&text).map_err(|e| format!("invalid catalog {}: {}", path.display(), e))?;
    if parsed.sheet.is_empty() {
        return Err(format!("catalog {} contains no sheets", path.display()));
    }
    Ok(parsed
        .sheet
        .into_iter()
        .map(|e| SheetSpec { title: e.title, url: e.url })
        .collect())
}

/// Resolve validated CLI arguments into a render plan
pub fn build_plan(args: &CliArgs) -> Result<RenderPlan, String> {
    let mut sheets = match &args.catalog {
        Some(path) => load_catalog(path)?,
        None => default_catalog(),
    };

    if !args.sheets.is_empty() {
        for wanted in &args.sheets {
            if !sheets.iter().any(|s| &s.title == wanted) {
                return Err(format!("sheet {:?} is not in the catalog", wanted));
            }
        }
        // catalog order wins over the order given on the command line
        sheets.retain(|s| args.sheets.contains(&s.title));
    }

    let logo = match &args.logo {
        Some(path) => Some(Logo::load(path).map_err(|e| e.to_string())?),
        None => None,
    };

    debug!("plan covers {} sheets", sheets.len());

    Ok(RenderPlan {
        sheets,
        out_dir: args.out_dir.clone(),
        options: RenderOptions {
            use_pos_colors: !args.no_color,
            landscape_full: args.landscape,
        },
        selection: ReportSelection {
            full: !args.skip_full,
            condensed: !args.skip_condensed,
        },
        logo,
        html_index: args.html_index,
        json_summary: args.json_summary.clone(),
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
