/// Tests for the condensed three-group partition
#[cfg(test)]
mod tests {
    use crate::layout::condensed::group_row_index;
    use crate::layout::{CONDENSED_ROW_LIMIT, CONDENSED_SPLIT};

    #[test]
    fn test_partition_sizes_are_fixed() {
        assert_eq!(CONDENSED_SPLIT, [67, 67, 66]);
        assert_eq!(CONDENSED_SPLIT.iter().sum::<usize>(), CONDENSED_ROW_LIMIT);
    }

    #[test]
    fn test_groups_are_contiguous() {
        assert_eq!(group_row_index(0, 0), Some(0));
        assert_eq!(group_row_index(0, 66), Some(66));
        assert_eq!(group_row_index(1, 0), Some(67));
        assert_eq!(group_row_index(1, 66), Some(133));
        assert_eq!(group_row_index(2, 0), Some(134));
        assert_eq!(group_row_index(2, 65), Some(199));
    }

    #[test]
    fn test_last_group_has_one_fewer_slot() {
        assert_eq!(group_row_index(0, 66), Some(66));
        assert_eq!(group_row_index(1, 66), Some(133));
        assert_eq!(group_row_index(2, 66), None);
    }

    #[test]
    fn test_every_row_index_is_covered_exactly_once() {
        let mut seen = vec![0usize; CONDENSED_ROW_LIMIT];
        for group in 0..3 {
            for slot in 0..67 {
                if let Some(ix) = group_row_index(group, slot) {
                    seen[ix] += 1;
                }
            }
        }
        assert!(seen.iter().all(|&n| n == 1));
    }
}
