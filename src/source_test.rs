/// Tests for CSV parsing and alias normalization
#[cfg(test)]
mod tests {
    use crate::error::RenderError;
    use crate::source::parse_csv;

    #[test]
    fn test_parse_basic_sheet() {
        let t = parse_csv("Rank,Player Name,Pos\n1,A,RB\n2,B,QB\n").unwrap();
        assert_eq!(t.headers, vec!["Rank", "Player Name", "Pos"]);
        assert_eq!(t.len(), 2);
        assert_eq!(t.value(1, "Player Name"), "B");
    }

    #[test]
    fn test_ovr_rank_alias_is_normalized() {
        let t = parse_csv("Ovr Rank,Pos\n1,RB\n2,QB\n").unwrap();
        assert!(t.column_index("Ovr Rank").is_none());
        assert_eq!(t.column_index("Rank"), Some(0));
        assert_eq!(t.value(0, "Rank"), "1");
        assert_eq!(t.value(1, "Rank"), "2");
    }

    #[test]
    fn test_plain_rank_header_is_untouched() {
        let t = parse_csv("Rank,Pos\n5,TE\n").unwrap();
        assert_eq!(t.value(0, "Rank"), "5");
    }

    #[test]
    fn test_quoted_fields_and_commas() {
        // the gviz CSV export quotes every field
        let t = parse_csv("\"Rank\",\"Player Name\"\n\"1\",\"Smith, John\"\n").unwrap();
        assert_eq!(t.value(0, "Player Name"), "Smith, John");
    }

    #[test]
    fn test_ragged_rows_are_padded() {
        let t = parse_csv("Rank,ADP,Pos\n1,3.2\n").unwrap();
        assert_eq!(t.value(0, "Pos"), "");
    }

    #[test]
    fn test_empty_body_is_an_error() {
        match parse_csv("") {
            Err(RenderError::EmptyTable) => {}
            other => panic!("expected EmptyTable, got {:?}", other.map(|t| t.headers)),
        }
    }

    #[test]
    fn test_header_only_sheet_parses_with_zero_rows() {
        let t = parse_csv("Rank,Pos\n").unwrap();
        assert!(t.is_empty());
        assert_eq!(t.last_updated(), "Unknown");
    }
}
