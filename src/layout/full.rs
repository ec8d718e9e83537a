/// Multi-page full ranking report
///
/// Title and "Last Updated" header, one gray header row, then every
/// projected row as a bordered, centered, optionally color-coded line.
/// Pagination is automatic: the canvas breaks whenever a row would cross
/// the bottom margin.
use log::debug;

use super::widths::plan_widths;
use super::{
    CELL_TEXT_MAX, FULL_LOGO_SPOTS, FULL_ROW_HEIGHT, FULL_TARGET_LANDSCAPE, FULL_TARGET_PORTRAIT,
    PAGE_BREAK_MARGIN, full_cell_fill, truncate_cell,
};
use crate::canvas::{A4_LANDSCAPE, A4_PORTRAIT, Canvas, FontStyle, Logo};
use crate::error::RenderError;
use crate::palette::{HEADER_FILL, row_color};
use crate::table::RowTable;
use crate::types::RenderOptions;

pub fn render_full(
    title: &str,
    table: &RowTable,
    last_updated: &str,
    options: RenderOptions,
    logo: Option<&Logo>,
) -> Result<Vec<u8>, RenderError> {
    let (page, target) = if options.landscape_full {
        (A4_LANDSCAPE, FULL_TARGET_LANDSCAPE)
    } else {
        (A4_PORTRAIT, FULL_TARGET_PORTRAIT)
    };
    debug!("full report {:?}: {} rows, target width {}", title, table.len(), target);

    let logo = logo.map(|l| (l.clone(), FULL_LOGO_SPOTS.to_vec()));
    let mut canvas = Canvas::new(title, page, Some(PAGE_BREAK_MARGIN), logo)?;

    canvas.set_font(FontStyle::Bold, 14.0);
    canvas.title_cell(10.0, title);
    canvas.set_font(FontStyle::Oblique, 8.0);
    canvas.title_cell(4.0, &format!("Last Updated: {}", last_updated));
    canvas.ln(2.0);

    let widths = plan_widths(&table.headers, &table.rows, target);

    canvas.set_font(FontStyle::Bold, 9.0);
    canvas.set_fill_color(HEADER_FILL);
    for (name, &w) in table.headers.iter().zip(&widths) {
        canvas.cell(w as f32, FULL_ROW_HEIGHT, name, true, true);
    }
    canvas.ln(FULL_ROW_HEIGHT);

    canvas.set_font(FontStyle::Regular, 8.0);
    let pos_ix = table.column_index("Pos");
    let rookie_ix = table.column_index("Rookie");

    for row in &table.rows {
        let pos = pos_ix.map(|ci| row[ci].as_str()).unwrap_or("");
        let base = row_color(pos, options.use_pos_colors);

        for (ci, (value, &w)) in row.iter().zip(&widths).enumerate() {
            let text = truncate_cell(value, CELL_TEXT_MAX);
            canvas.set_fill_color(full_cell_fill(base, Some(ci) == rookie_ix, text));
            canvas.cell(w as f32, FULL_ROW_HEIGHT, text, true, true);
        }
        canvas.ln(FULL_ROW_HEIGHT);
    }

    canvas.finish()
}
