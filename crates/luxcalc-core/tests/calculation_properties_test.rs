//! Property tests for the calculation pipeline
//!
//! These tests check the pipeline's invariants over the whole validated input domain
//! rather than at hand-picked points.

use luxcalc_core::engine::{area, nearest_standard_wattage, room_index, utilization_factor};
use luxcalc_core::models::{CalculationInput, Reflectances};
use luxcalc_core::perform_full_calculation;
use luxcalc_core::tables::{BulbType, RoomType, STANDARD_WATTAGES};
use proptest::prelude::*;

fn room_type() -> impl Strategy<Value = RoomType> {
    prop::sample::select(RoomType::ALL.to_vec())
}

fn bulb_type() -> impl Strategy<Value = BulbType> {
    prop::sample::select(BulbType::ALL.to_vec())
}

fn reflectances() -> impl Strategy<Value = Reflectances> {
    (0.0..=1.0f64, 0.0..=1.0f64, 0.0..=1.0f64).prop_map(|(c, w, f)| Reflectances::new(c, w, f))
}

prop_compose! {
    fn calculation_input()(
        length in 1.0..=20.0f64,
        width in 1.0..=20.0f64,
        ceiling_height in 2.2..=4.0f64,
        work_surface_height in 0.0..=1.2f64,
        room_type in room_type(),
        bulb_type in bulb_type(),
        reflectances in reflectances(),
        target_wattage in 3u32..=100,
    ) -> CalculationInput {
        CalculationInput::new(length, width, ceiling_height, room_type, bulb_type, reflectances)
            .with_work_surface_height(work_surface_height)
            .with_target_wattage(f64::from(target_wattage))
    }
}

proptest! {
    #[test]
    fn area_is_exact_product(length in 0.01..=100.0f64, width in 0.01..=100.0f64) {
        prop_assert_eq!(area(length, width), length * width);
    }

    #[test]
    fn room_index_is_zero_without_mounting_height(
        length in 1.0..=20.0f64,
        width in 1.0..=20.0f64,
        mounting_height in -5.0..=0.0f64,
    ) {
        prop_assert_eq!(room_index(length * width, length, width, mounting_height), 0.0);
    }

    #[test]
    fn utilization_factor_is_bounded(index in 0.0..=50.0f64, r in reflectances()) {
        let factor = utilization_factor(index, r);
        prop_assert!(factor >= 0.3 - 1e-12);
        prop_assert!(factor <= 0.8);
    }

    #[test]
    fn utilization_factor_is_monotonic_in_index(
        a in 0.0..=10.0f64,
        b in 0.0..=10.0f64,
        r in reflectances(),
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(utilization_factor(low, r) <= utilization_factor(high, r) + 1e-12);
    }

    #[test]
    fn utilization_factor_is_monotonic_in_reflection(
        index in 0.0..=10.0f64,
        a in 0.0..=1.0f64,
        b in 0.0..=1.0f64,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low = utilization_factor(index, Reflectances::new(low, low, low));
        let high = utilization_factor(index, Reflectances::new(high, high, high));
        prop_assert!(low <= high + 1e-12);
    }

    #[test]
    fn standard_wattage_is_from_series(wattage in 0u32..=1000) {
        let standard = nearest_standard_wattage(wattage);
        prop_assert!(STANDARD_WATTAGES.contains(&standard));
        if wattage <= 100 {
            prop_assert!(standard >= wattage);
        } else {
            prop_assert_eq!(standard, 100);
        }
    }

    #[test]
    fn full_calculation_invariants(input in calculation_input()) {
        let result = perform_full_calculation(&input);

        prop_assert_eq!(result.total_power, result.standard_wattage * result.number_of_fixtures);
        prop_assert!(STANDARD_WATTAGES.contains(&result.standard_wattage));
        prop_assert!(result.utilization_factor >= 0.3 - 1e-12 && result.utilization_factor <= 0.8);
        prop_assert!(result.room_index >= 0.0);
        prop_assert!(result.required_lumens > 0);
        prop_assert!(result.number_of_fixtures > 0);
    }

    #[test]
    fn full_calculation_is_deterministic(input in calculation_input()) {
        prop_assert_eq!(perform_full_calculation(&input), perform_full_calculation(&input));
    }
}

#[test]
fn test_living_room_scenario() {
    let input = CalculationInput::new(
        4.0,
        3.0,
        2.7,
        RoomType::Living,
        BulbType::LedNeutral,
        Reflectances::new(0.7, 0.5, 0.3),
    )
    .with_work_surface_height(0.8)
    .with_target_wattage(10.0);

    let result = perform_full_calculation(&input);

    assert_eq!(result.area, 12.0);
    assert!((result.mounting_height - 1.8).abs() < 1e-9);
    assert!(result.required_lumens > 0);
    assert!(result.number_of_fixtures > 0);
    assert!(result.total_power > 0);
}
