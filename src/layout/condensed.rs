/// One-page condensed top-200 report
///
/// Rows are partitioned into three contiguous groups of fixed sizes
/// {67, 67, 66} and drawn as side-by-side column groups sharing one
/// vertical cursor: for each slot, all three groups draw their row before
/// the single line advance, so the groups stay horizontally aligned.
use log::debug;

use super::{
    CELL_TEXT_MAX, CONDENSED_COL_WIDTHS, CONDENSED_COLUMNS, CONDENSED_GROUP_X, CONDENSED_LOGO_SPOTS,
    CONDENSED_ROW_HEIGHT, CONDENSED_SPLIT, truncate_cell,
};
use crate::canvas::{A4_PORTRAIT, Canvas, FontStyle, Logo};
use crate::error::RenderError;
use crate::palette::{HEADER_FILL, row_color};
use crate::table::RowTable;
use crate::types::RenderOptions;

/// Source row shown by `group` at vertical `slot`, or None when the slot
/// is past the group's fixed share. Group boundaries are constants; they
/// never depend on how many rows were actually supplied.
pub fn group_row_index(group: usize, slot: usize) -> Option<usize> {
    if slot >= CONDENSED_SPLIT[group] {
        return None;
    }
    Some(CONDENSED_SPLIT[..group].iter().sum::<usize>() + slot)
}

pub fn render_condensed(
    title: &str,
    table: &RowTable,
    last_updated: &str,
    options: RenderOptions,
    logo: Option<&Logo>,
) -> Result<Vec<u8>, RenderError> {
    debug!("condensed report {:?}: {} rows", title, table.len());

    let logo = logo.map(|l| (l.clone(), CONDENSED_LOGO_SPOTS.to_vec()));
    // single page: no automatic pagination
    let mut canvas = Canvas::new(title, A4_PORTRAIT, None, logo)?;

    canvas.set_font(FontStyle::Bold, 14.0);
    canvas.title_cell(6.0, title);
    canvas.ln(1.0);
    canvas.set_font(FontStyle::Oblique, 8.0);
    canvas.title_cell(4.0, &format!("Last Updated: {}", last_updated));
    canvas.ln(2.0);

    // one header strip per column group
    canvas.set_font(FontStyle::Bold, 7.0);
    canvas.set_fill_color(HEADER_FILL);
    for &start_x in &CONDENSED_GROUP_X {
        canvas.set_x(start_x);
        for (name, &w) in CONDENSED_COLUMNS.iter().zip(&CONDENSED_COL_WIDTHS) {
            canvas.cell(w, CONDENSED_ROW_HEIGHT, name, true, true);
        }
    }
    canvas.ln(CONDENSED_ROW_HEIGHT);

    canvas.set_font(FontStyle::Regular, 6.0);
    let max_slots = *CONDENSED_SPLIT.iter().max().unwrap_or(&0);

    for slot in 0..max_slots {
        for group in 0..CONDENSED_GROUP_X.len() {
            let Some(row_ix) = group_row_index(group, slot) else { continue };
            if row_ix >= table.len() {
                continue;
            }

            // uniform fill for the whole row; no rookie override here
            let fill = row_color(table.value(row_ix, "Pos"), options.use_pos_colors);
            canvas.set_fill_color(fill);
            canvas.set_x(CONDENSED_GROUP_X[group]);
            for (name, &w) in CONDENSED_COLUMNS.iter().zip(&CONDENSED_COL_WIDTHS) {
                let text = truncate_cell(table.value(row_ix, name), CELL_TEXT_MAX);
                canvas.cell(w, CONDENSED_ROW_HEIGHT, text, true, true);
            }
        }
        // advance once per slot, after all three groups
        canvas.ln(CONDENSED_ROW_HEIGHT);
    }

    canvas.finish()
}

#[cfg(test)]
#[path = "condensed_test.rs"]
mod condensed_test;
