/// In-memory row table and column projection
///
/// A `RowTable` is the ephemeral shape every sheet passes through between
/// fetch and layout: a header row plus string-valued data rows, all padded
/// to header arity so downstream code never sees a missing cell.
use log::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct RowTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RowTable {
    /// Build a table, padding or truncating every row to header arity
    pub fn new(headers: Vec<String>, mut rows: Vec<Vec<String>>) -> Self {
        let arity = headers.len();
        for row in &mut rows {
            row.resize(arity, String::new());
        }
        Self { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first column with this exact name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell value by row index and column name ("" for absent columns)
    pub fn value(&self, row: usize, column: &str) -> &str {
        match self.column_index(column) {
            Some(ci) => self.rows.get(row).map(|r| r[ci].as_str()).unwrap_or(""),
            None => "",
        }
    }

    /// Rename a column in place; no-op when absent
    pub fn rename_column(&mut self, from: &str, to: &str) {
        if let Some(ci) = self.column_index(from) {
            debug!("renaming column {:?} -> {:?}", from, to);
            self.headers[ci] = to.to_string();
        }
    }

    /// Keep whitelisted columns that exist, in whitelist order, and the
    /// first `limit` rows in source order. Absent whitelist entries are
    /// silently omitted; that is degraded output, not an error.
    pub fn project(&self, whitelist: &[&str], limit: usize) -> RowTable {
        let kept: Vec<(String, usize)> = whitelist
            .iter()
            .filter_map(|name| self.column_index(name).map(|ci| (name.to_string(), ci)))
            .collect();

        let headers: Vec<String> = kept.iter().map(|(name, _)| name.clone()).collect();
        let rows: Vec<Vec<String>> = self
            .rows
            .iter()
            .take(limit)
            .map(|row| kept.iter().map(|&(_, ci)| row[ci].clone()).collect())
            .collect();

        RowTable { headers, rows }
    }

    /// First non-empty value of the "Last Updated" column, else "Unknown"
    pub fn last_updated(&self) -> String {
        if let Some(ci) = self.column_index("Last Updated") {
            for row in &self.rows {
                let v = row[ci].trim();
                if !v.is_empty() {
                    return v.to_string();
                }
            }
        }
        "Unknown".to_string()
    }

    /// Coerce every value in a column to a whole number string.
    /// Fractional values truncate toward zero; non-numeric and blank
    /// values become "0". Used on ADP before the condensed layout so the
    /// narrow column never shows decimals.
    pub fn coerce_integer_column(&mut self, column: &str) {
        if let Some(ci) = self.column_index(column) {
            for row in &mut self.rows {
                let n = row[ci].trim().parse::<f64>().unwrap_or(0.0);
                row[ci] = format!("{}", n as i64);
            }
        }
    }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;
