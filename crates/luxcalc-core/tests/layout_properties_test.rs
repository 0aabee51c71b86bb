//! Property tests for the fixture layout algorithm

use luxcalc_core::engine::LAYOUT_MARGIN;
use luxcalc_core::optimal_fixture_layout;
use proptest::prelude::*;

proptest! {
    #[test]
    fn grid_holds_every_fixture(
        length in 1.0..=20.0f64,
        width in 1.0..=20.0f64,
        fixtures in 0u32..=200,
    ) {
        let layout = optimal_fixture_layout(length, width, fixtures);

        prop_assert!(layout.rows >= 1);
        prop_assert!(layout.cols >= 1);
        prop_assert!(layout.rows * layout.cols >= fixtures);
        prop_assert_eq!(layout.positions.len(), fixtures as usize);
    }

    #[test]
    fn positions_stay_inside_the_room(
        length in 1.0..=20.0f64,
        width in 1.0..=20.0f64,
        fixtures in 1u32..=200,
    ) {
        let layout = optimal_fixture_layout(length, width, fixtures);

        for pos in &layout.positions {
            prop_assert!(pos.x > 0.0 && pos.x < length);
            prop_assert!(pos.y > 0.0 && pos.y < width);
            prop_assert!(pos.x >= LAYOUT_MARGIN - 1e-9 && pos.x <= length - LAYOUT_MARGIN + 1e-9);
            prop_assert!(pos.y >= LAYOUT_MARGIN - 1e-9 && pos.y <= width - LAYOUT_MARGIN + 1e-9);
        }
    }

    #[test]
    fn positions_are_row_major(
        length in 2.0..=20.0f64,
        width in 2.0..=20.0f64,
        fixtures in 2u32..=100,
    ) {
        let layout = optimal_fixture_layout(length, width, fixtures);

        for pair in layout.positions.windows(2) {
            let same_row = (pair[0].y - pair[1].y).abs() < 1e-9;
            if same_row {
                prop_assert!(pair[1].x > pair[0].x);
            } else {
                prop_assert!(pair[1].y > pair[0].y);
            }
        }
    }
}
