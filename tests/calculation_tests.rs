//! Property-based tests for calculations and sequence operations

use kinematic_calc::core::{average, sort_by_result, Calculation, CalculationKind};
use kinematic_calc::error::CalcError;
use proptest::prelude::*;
use std::f64::consts::PI;

fn relative_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

fn calculation() -> impl Strategy<Value = Calculation> {
    prop_oneof![
        (-1e3f64..1e3, 1e-3f64..1e3).prop_map(|(speed, radius)| {
            CalculationKind::CentripetalAcceleration
                .build(speed, radius)
                .unwrap()
        }),
        (-1e3f64..1e3, 1e-3f64..1e3).prop_map(|(radius, period)| {
            CalculationKind::CircularVelocity
                .build(radius, period)
                .unwrap()
        }),
    ]
}

// ── Construction ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn acceleration_is_speed_squared_over_radius(
        speed in -1e4f64..1e4,
        radius in 1e-6f64..1e4,
    ) {
        let calc = CalculationKind::CentripetalAcceleration.build(speed, radius).unwrap();
        prop_assert!(relative_eq(calc.result(), speed * speed / radius));
        prop_assert_eq!(calc.calculate(), calc.result());
    }

    #[test]
    fn velocity_is_circumference_over_period(
        radius in -1e4f64..1e4,
        period in 1e-6f64..1e4,
    ) {
        let calc = CalculationKind::CircularVelocity.build(radius, period).unwrap();
        prop_assert!(relative_eq(calc.result(), 2.0 * PI * radius / period));
        prop_assert_eq!(calc.calculate(), calc.result());
    }

    #[test]
    fn non_positive_constraint_rejected(
        value in -1e4f64..1e4,
        bad in -1e4f64..=0.0,
    ) {
        prop_assert!(matches!(
            CalculationKind::CentripetalAcceleration.build(value, bad),
            Err(CalcError::InvalidInput(_))
        ));
        prop_assert!(matches!(
            CalculationKind::CircularVelocity.build(value, bad),
            Err(CalcError::InvalidInput(_))
        ));
    }

    #[test]
    fn display_uses_three_decimals(calc in calculation()) {
        let text = calc.to_string();
        let expected = format!("{:.3}", calc.result());
        let needle = format!("= {expected} ");
        prop_assert!(text.contains(&needle));
    }
}

// ── Ordering, equality, duplication ──────────────────────────────────

proptest! {
    #[test]
    fn duplicate_equals_original(calc in calculation()) {
        let copy = calc.duplicate();
        prop_assert_eq!(copy, calc);
        prop_assert_eq!(copy.kind(), calc.kind());
        prop_assert_eq!(copy.to_string(), calc.to_string());
    }

    #[test]
    fn compare_matches_result_order(a in calculation(), b in calculation()) {
        let expected = a.result().total_cmp(&b.result());
        prop_assert_eq!(a.compare(&b), expected);
        prop_assert_eq!(b.compare(&a), expected.reverse());
    }

    #[test]
    fn cross_variant_never_equal(
        speed in -1e3f64..1e3,
        radius in 1e-3f64..1e3,
        period in 1e-3f64..1e3,
    ) {
        let a = CalculationKind::CentripetalAcceleration.build(speed, radius).unwrap();
        let v = CalculationKind::CircularVelocity.build(radius, period).unwrap();
        prop_assert_ne!(a, v);
    }

    #[test]
    fn sort_is_non_decreasing_and_idempotent(
        mut calcs in proptest::collection::vec(calculation(), 0..32),
    ) {
        sort_by_result(&mut calcs);
        for pair in calcs.windows(2) {
            prop_assert!(pair[0].result() <= pair[1].result());
        }

        let once: Vec<String> = calcs.iter().map(|c| format!("{c:?}")).collect();
        sort_by_result(&mut calcs);
        let twice: Vec<String> = calcs.iter().map(|c| format!("{c:?}")).collect();
        prop_assert_eq!(once, twice);
    }
}

// ── Average ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn average_of_single_is_exact(calc in calculation()) {
        prop_assert_eq!(average(&[calc]).unwrap(), calc.result());
    }

    #[test]
    fn average_is_permutation_invariant(
        calcs in proptest::collection::vec(calculation(), 1..32),
    ) {
        let original = average(&calcs).unwrap();

        let mut reversed = calcs.clone();
        reversed.reverse();
        let mut sorted = calcs.clone();
        sort_by_result(&mut sorted);

        // Summation order changes rounding; bound it by the magnitude of the terms
        let scale = calcs.iter().map(|c| c.result().abs()).sum::<f64>().max(1.0);
        prop_assert!((average(&reversed).unwrap() - original).abs() <= 1e-12 * scale);
        prop_assert!((average(&sorted).unwrap() - original).abs() <= 1e-12 * scale);
    }
}

#[test]
fn average_of_empty_fails() {
    assert!(matches!(average(&[]), Err(CalcError::EmptyInput(_))));
}

#[test]
fn documented_scenario_results() {
    let calcs = vec![
        CalculationKind::CentripetalAcceleration.build(10.0, 5.0).unwrap(),
        CalculationKind::CircularVelocity.build(3.0, 6.0).unwrap(),
    ];
    assert_eq!(calcs[0].result(), 20.0);
    assert!((calcs[1].result() - PI).abs() < 1e-12);
    assert!((average(&calcs).unwrap() - 11.5708).abs() < 1e-4);
}
