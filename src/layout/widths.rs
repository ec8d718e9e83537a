/// Column-width normalization for the full report
///
/// Reproduces the legacy width algorithm exactly, including its leftover
/// redistribution quirk, so printed documents keep the column geometry
/// readers already have on file.
use super::{MAX_COL_WIDTH, MIN_COL_WIDTH, SMALL_COLUMNS};

/// Compute final draw widths for `headers`, aligned by index.
///
/// 1. raw = max(longest value, header length) * 1.5
/// 2. small-content columns are forced to the minimum regardless of content
/// 3. proportionally scale down when the raw sum exceeds the target
/// 4. round and clamp into [MIN_COL_WIDTH, MAX_COL_WIDTH]
/// 5. hand out any positive remainder one unit at a time, cycling through
///    columns in order -- this can push a column past MAX_COL_WIDTH, which
///    is preserved behavior, not a bug to fix here. A negative remainder
///    (every column clamped up past the target) is left alone.
pub fn plan_widths(headers: &[String], rows: &[Vec<String>], target: u32) -> Vec<u32> {
    let raw: Vec<f64> = headers
        .iter()
        .enumerate()
        .map(|(ci, name)| {
            if SMALL_COLUMNS.contains(&name.as_str()) {
                return MIN_COL_WIDTH as f64;
            }
            let longest_value = rows.iter().map(|r| r[ci].chars().count()).max().unwrap_or(0);
            longest_value.max(name.chars().count()) as f64 * 1.5
        })
        .collect();

    let raw_sum: f64 = raw.iter().sum();
    let scale = if raw_sum > target as f64 { target as f64 / raw_sum } else { 1.0 };

    let mut widths: Vec<u32> = raw
        .iter()
        .map(|&r| ((r * scale).round() as i64).clamp(MIN_COL_WIDTH as i64, MAX_COL_WIDTH as i64) as u32)
        .collect();

    let mut remaining = target as i64 - widths.iter().sum::<u32>() as i64;
    'outer: while remaining > 0 {
        for w in &mut widths {
            *w += 1;
            remaining -= 1;
            if remaining == 0 {
                break 'outer;
            }
        }
    }

    widths
}

#[cfg(test)]
#[path = "widths_test.rs"]
mod widths_test;
