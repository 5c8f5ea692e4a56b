//! Tests for pair group packing, cursor advance and wrapping

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use tilecombo::io::configuration::MAX_CELL_X;
    use tilecombo::layout::packer::{
        Cursor, Orientation, Placement, extent, layout_combinations, pack,
    };
    use tilecombo::matching::matcher::{Combinations, Pair};

    fn placement(tile: u32, x: u32, y: u32) -> Placement {
        Placement { tile, x, y }
    }

    // Tests vertical groups stack the second tile below the first
    // Verified by swapping the orientation offsets
    #[test]
    fn test_vertical_pair_from_origin() {
        let (placements, next) = pack(&[Pair(0, 1)], Orientation::Vertical, 256, Cursor::ORIGIN);
        assert_eq!(placements, vec![placement(0, 0, 0), placement(1, 0, 1)]);
        assert_eq!(next, Cursor::new(3, 0));
    }

    // Tests horizontal groups put the second tile to the right
    // Verified by dropping the stride from the cursor advance
    #[test]
    fn test_horizontal_pairs_advance_by_stride() {
        let pairs = [Pair(4, 5), Pair(6, 7)];
        let (placements, next) = pack(&pairs, Orientation::Horizontal, 256, Cursor::new(0, 6));
        assert_eq!(
            placements,
            vec![
                placement(4, 0, 6),
                placement(5, 1, 6),
                placement(6, 3, 6),
                placement(7, 4, 6),
            ]
        );
        assert_eq!(next, Cursor::new(6, 6));
    }

    // Tests the cursor wraps only once x exceeds the limit
    // Verified by wrapping when x reaches the limit
    #[test]
    fn test_wrap_after_limit_exceeded() {
        assert_eq!(Cursor::new(3, 0).advance(6), Cursor::new(6, 0));
        assert_eq!(Cursor::new(6, 0).advance(6), Cursor::new(0, 3));
        assert_eq!(Cursor::new(4, 9).advance(6), Cursor::new(0, 12));
    }

    // Tests groups never share a cell, across many bands
    // Verified by wrapping with y += 1 instead of the stride
    #[test]
    fn test_no_overlap_across_bands() {
        let pairs: Vec<Pair> = (0..200).map(|i| Pair(i, i + 1000)).collect();
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let (placements, _) = pack(&pairs, orientation, 20, Cursor::ORIGIN);
            let cells: HashSet<(u32, u32)> = placements.iter().map(|p| (p.x, p.y)).collect();
            assert_eq!(cells.len(), placements.len());
        }
    }

    // Tests the vertical pass continues from the horizontal pass cursor
    // Verified by restarting the vertical pass at the origin
    #[test]
    fn test_layout_continues_between_passes() {
        let combinations = Combinations {
            horizontal: vec![Pair(0, 0), Pair(1, 1)],
            vertical: vec![Pair(0, 1)],
        };
        let placements = layout_combinations(&combinations, MAX_CELL_X);
        assert_eq!(
            placements,
            vec![
                placement(0, 0, 0),
                placement(0, 1, 0),
                placement(1, 3, 0),
                placement(1, 4, 0),
                placement(0, 6, 0),
                placement(1, 6, 1),
            ]
        );
    }

    // Tests a full band plus remainder with the default width limit
    #[test]
    fn test_layout_wraps_at_default_limit() {
        // 86 groups fit in one band: x = 0, 3, ..., 255
        let combinations = Combinations {
            horizontal: (0..86).map(|i| Pair(i, i)).collect(),
            vertical: vec![Pair(1, 2)],
        };
        let placements = layout_combinations(&combinations, MAX_CELL_X);
        assert_eq!(placements.get(170), Some(&placement(85, 255, 0)));
        assert_eq!(placements.get(171), Some(&placement(85, 256, 0)));
        assert_eq!(placements.get(172), Some(&placement(1, 0, 3)));
        assert_eq!(placements.get(173), Some(&placement(2, 0, 4)));

        let cells: HashSet<(u32, u32)> = placements.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(cells.len(), placements.len());
    }

    #[test]
    fn test_empty_input() {
        let (placements, next) = pack(&[], Orientation::Horizontal, 256, Cursor::new(9, 3));
        assert!(placements.is_empty());
        assert_eq!(next, Cursor::new(9, 3));
        assert_eq!(extent(&placements), (0, 0));
    }

    #[test]
    fn test_extent() {
        let placements = [placement(0, 0, 0), placement(1, 4, 0), placement(2, 6, 1)];
        assert_eq!(extent(&placements), (7, 2));
    }

    // Tests cursors near the top of the coordinate range wrap instead of overflowing
    // Verified by using plain addition in advance
    #[test]
    fn test_pack_near_coordinate_limit() {
        let start = Cursor::new(u32::MAX - 2, 0);
        let (placements, next) = pack(&[Pair(0, 1)], Orientation::Horizontal, u32::MAX, start);
        assert_eq!(
            placements,
            vec![placement(0, u32::MAX - 2, 0), placement(1, u32::MAX - 1, 0)]
        );
        assert_eq!(next, Cursor::new(0, 3));

        let bottom = Cursor::new(0, u32::MAX);
        assert_eq!(bottom.advance(0), Cursor::new(0, u32::MAX));
        let (placements, _) = pack(&[Pair(4, 5)], Orientation::Vertical, 256, bottom);
        assert_eq!(
            placements,
            vec![placement(4, 0, u32::MAX), placement(5, 0, u32::MAX)]
        );
    }
}
