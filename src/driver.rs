/// Batch driver
///
/// Iterates the catalog and runs fetch -> project -> layout -> export for
/// each sheet. The fetcher is injected so the loop can be exercised
/// offline; each completed sheet is streamed through the callback as a
/// tagged outcome. One sheet's failure never stops the others.
use std::fs;

use log::debug;

use crate::error::RenderError;
use crate::layout::{self, condensed, full};
use crate::table::RowTable;
use crate::types::{Artifact, RenderPlan, SheetArtifacts, SheetOutcome, SheetSpec};

pub fn run_batch<F, C>(plan: &RenderPlan, fetch: F, mut on_outcome: C) -> Vec<SheetOutcome>
where
    F: Fn(&SheetSpec) -> Result<RowTable, RenderError>,
    C: FnMut(&SheetOutcome),
{
    let mut outcomes = Vec::with_capacity(plan.sheets.len());

    for spec in &plan.sheets {
        let result = render_sheet(plan, spec, &fetch);
        let outcome = SheetOutcome { title: spec.title.clone(), result };
        on_outcome(&outcome);
        outcomes.push(outcome);
    }

    outcomes
}

/// Produce all selected artifacts for one sheet from a single fetch
fn render_sheet<F>(plan: &RenderPlan, spec: &SheetSpec, fetch: &F) -> Result<SheetArtifacts, RenderError>
where
    F: Fn(&SheetSpec) -> Result<RowTable, RenderError>,
{
    let table = fetch(spec)?;
    // extracted before projection; "Last Updated" is not a printed column
    let last_updated = table.last_updated();

    let full = if plan.selection.full {
        let projected = table.project(&layout::FULL_COLUMNS, layout::FULL_ROW_LIMIT);
        let bytes =
            full::render_full(&spec.title, &projected, &last_updated, plan.options, plan.logo.as_ref())?;
        Some(write_artifact(plan, spec.full_filename(), bytes)?)
    } else {
        None
    };

    let condensed = if plan.selection.condensed {
        let mut projected = table.project(&layout::CONDENSED_COLUMNS, layout::CONDENSED_ROW_LIMIT);
        projected.coerce_integer_column("ADP");
        let bytes = condensed::render_condensed(
            &spec.title,
            &projected,
            &last_updated,
            plan.options,
            plan.logo.as_ref(),
        )?;
        Some(write_artifact(plan, spec.condensed_filename(), bytes)?)
    } else {
        None
    };

    Ok(SheetArtifacts { full, condensed, last_updated })
}

fn write_artifact(plan: &RenderPlan, filename: String, bytes: Vec<u8>) -> Result<Artifact, RenderError> {
    let path = plan.out_dir.join(&filename);
    fs::write(&path, &bytes)?;
    debug!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(Artifact { filename, path, bytes })
}

#[cfg(test)]
#[path = "driver_test.rs"]
mod driver_test;
