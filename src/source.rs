/// Data source adapter
///
/// This module handles:
/// - HTTPS requests to the published sheet CSV export URLs
/// - Parsing the CSV body into a RowTable (first row is the header)
/// - Normalizing the "Ovr Rank" column alias to "Rank"
use std::io::Read;

use csv::ReaderBuilder;
use log::debug;

use crate::error::RenderError;
use crate::table::RowTable;
use crate::types::SheetSpec;

const USER_AGENT: &str = "rankpress/0.3.1 (https://github.com/imazen/rankpress)";

/// Fetch one sheet's CSV export and parse it into a row table
pub fn fetch_sheet(spec: &SheetSpec) -> Result<RowTable, RenderError> {
    debug!("fetching sheet {:?} from {}", spec.title, spec.url);

    let resp = ureq::get(&spec.url)
        .set("User-Agent", USER_AGENT)
        .call()
        .map_err(|e| RenderError::Fetch(e.to_string()))?;

    let mut body = String::new();
    resp.into_reader().read_to_string(&mut body)?;

    let table = parse_csv(&body)?;
    debug!("sheet {:?}: {} columns, {} rows", spec.title, table.headers.len(), table.len());
    Ok(table)
}

/// Parse CSV text into a RowTable and apply the rank alias.
///
/// Rows are allowed to be ragged; `RowTable::new` pads them to header
/// arity. A column literally named "Ovr Rank" is always reported to
/// downstream consumers as "Rank".
pub fn parse_csv(text: &str) -> Result<RowTable, RenderError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(RenderError::EmptyTable);
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|f| f.to_string()).collect());
    }

    let mut table = RowTable::new(headers, rows);
    table.rename_column("Ovr Rank", "Rank");
    Ok(table)
}

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;
