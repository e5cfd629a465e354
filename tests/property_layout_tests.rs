use klima_rs::core::{axis_units, precipitation_labels, subzero_labels};
use proptest::prelude::*;

fn series(range: std::ops::Range<f64>) -> impl Strategy<Value = [f64; 12]> {
    prop::array::uniform12(range)
}

proptest! {
    #[test]
    fn scale_is_monotonic_across_the_kink(
        a in 0.0f64..400.0,
        b in 0.0f64..400.0
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(axis_units(lo) <= axis_units(hi));
    }

    #[test]
    fn positive_labels_start_at_zero_and_follow_the_step_rule(
        temperatures in series(-50.0..50.0),
        precipitation in series(0.0..2_000.0)
    ) {
        let labels = precipitation_labels(&temperatures, &precipitation);
        prop_assert!(labels.len() >= 2);
        prop_assert_eq!(labels[0], 0);

        for (index, pair) in labels.windows(2).enumerate() {
            let expected_step = if index < 5 { 20 } else { 100 };
            prop_assert_eq!(pair[1] - pair[0], expected_step);
        }

        let limit = temperatures
            .iter()
            .map(|t| t * 2.0)
            .chain(precipitation.iter().copied())
            .fold(f64::MIN, f64::max);
        let last = labels[labels.len() - 1] as f64;
        let penultimate = labels[labels.len() - 2] as f64;
        prop_assert!(last > limit);
        prop_assert!(penultimate <= limit);
    }

    #[test]
    fn subzero_labels_exist_exactly_when_some_month_is_below_zero(
        temperatures in series(-60.0..40.0)
    ) {
        let labels = subzero_labels(&temperatures);
        let t_min = temperatures.iter().copied().fold(f64::MAX, f64::min);

        prop_assert_eq!(labels.is_empty(), t_min >= 0.0);
        if let (Some(first), Some(last)) = (labels.first(), labels.last()) {
            prop_assert_eq!(*last, -10);
            for pair in labels.windows(2) {
                prop_assert_eq!(pair[1] - pair[0], 10);
            }
            // The lowest label sits in the decade right above floor(min) - 10.
            let stop = t_min.floor() as i64 - 10;
            prop_assert!(*first > stop);
            prop_assert!(*first - 10 <= stop);
        }
    }
}
