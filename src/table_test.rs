/// Tests for the row table and projection
#[cfg(test)]
mod tests {
    use crate::table::RowTable;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn sample_table() -> RowTable {
        RowTable::new(
            strings(&["Rank", "ADP", "Player Name", "Team", "Pos", "Rookie", "Last Updated"]),
            vec![
                strings(&["1", "3.2", "A", "X", "RB", "", "Aug 20"]),
                strings(&["2", "", "B", "Y", "QB", "Rookie", ""]),
                strings(&["3", "12.0", "C", "Z", "WR", "", "Aug 21"]),
            ],
        )
    }

    #[test]
    fn test_short_rows_are_padded() {
        let t = RowTable::new(strings(&["A", "B", "C"]), vec![strings(&["1"])]);
        assert_eq!(t.rows[0], strings(&["1", "", ""]));
        assert_eq!(t.value(0, "C"), "");
    }

    #[test]
    fn test_project_keeps_whitelist_order() {
        let t = sample_table();
        let p = t.project(&["Pos", "Rank", "Player Name"], 250);
        assert_eq!(p.headers, strings(&["Pos", "Rank", "Player Name"]));
        assert_eq!(p.rows[0], strings(&["RB", "1", "A"]));
    }

    #[test]
    fn test_project_omits_absent_columns_without_error() {
        let t = sample_table();
        let p = t.project(&["Rank", "Auction Value", "Pos"], 250);
        assert_eq!(p.headers, strings(&["Rank", "Pos"]));
        assert_eq!(p.rows.len(), 3);
    }

    #[test]
    fn test_project_truncates_preserving_source_order() {
        let t = sample_table();
        let p = t.project(&["Rank"], 2);
        assert_eq!(p.rows.len(), 2);
        assert_eq!(p.rows[0][0], "1");
        assert_eq!(p.rows[1][0], "2");
    }

    #[test]
    fn test_rename_column() {
        let mut t = RowTable::new(strings(&["Ovr Rank", "Pos"]), vec![strings(&["7", "TE"])]);
        t.rename_column("Ovr Rank", "Rank");
        assert_eq!(t.headers, strings(&["Rank", "Pos"]));
        assert!(t.column_index("Ovr Rank").is_none());
        assert_eq!(t.value(0, "Rank"), "7");
    }

    #[test]
    fn test_rename_absent_column_is_noop() {
        let mut t = sample_table();
        let before = t.clone();
        t.rename_column("Ovr Rank", "Rank");
        assert_eq!(t, before);
    }

    #[test]
    fn test_last_updated_first_non_empty() {
        let t = sample_table();
        assert_eq!(t.last_updated(), "Aug 20");
    }

    #[test]
    fn test_last_updated_skips_blank_leading_values() {
        let t = RowTable::new(
            strings(&["Rank", "Last Updated"]),
            vec![strings(&["1", ""]), strings(&["2", "  "]), strings(&["3", "Sep 1"])],
        );
        assert_eq!(t.last_updated(), "Sep 1");
    }

    #[test]
    fn test_last_updated_defaults_to_unknown() {
        let t = RowTable::new(strings(&["Rank"]), vec![strings(&["1"])]);
        assert_eq!(t.last_updated(), "Unknown");

        let empty_col = RowTable::new(strings(&["Last Updated"]), vec![strings(&[""])]);
        assert_eq!(empty_col.last_updated(), "Unknown");
    }

    #[test]
    fn test_rookie_blank_stays_comparable() {
        // Blank rookie cells must be empty strings so equality checks
        // against the literal marker behave predictably.
        let t = sample_table();
        let p = t.project(&["Rookie"], 250);
        assert_eq!(p.rows[0][0], "");
        assert_eq!(p.rows[1][0], "Rookie");
        assert!(p.rows[0][0] != "Rookie");
    }

    #[test]
    fn test_coerce_integer_column() {
        let mut t = sample_table();
        t.coerce_integer_column("ADP");
        assert_eq!(t.value(0, "ADP"), "3");
        assert_eq!(t.value(1, "ADP"), "0");
        assert_eq!(t.value(2, "ADP"), "12");
    }

    #[test]
    fn test_coerce_integer_column_non_numeric() {
        let mut t = RowTable::new(strings(&["ADP"]), vec![strings(&["n/a"]), strings(&["-4.7"])]);
        t.coerce_integer_column("ADP");
        assert_eq!(t.value(0, "ADP"), "0");
        assert_eq!(t.value(1, "ADP"), "-4"); // truncation toward zero
    }

    #[test]
    fn test_coerce_absent_column_is_noop() {
        let mut t = RowTable::new(strings(&["Rank"]), vec![strings(&["1"])]);
        t.coerce_integer_column("ADP");
        assert_eq!(t.value(0, "Rank"), "1");
    }
}
