//! Reductions over sequences of numbers: mean and extremes with position

use crate::types::Extreme;
use crate::{SummaryError, SummaryResult};

/// Arithmetic mean of `values`
///
/// Empty input is an error. A NaN anywhere makes the mean NaN.
pub fn mean<T: Copy + Into<f64>>(values: &[T]) -> SummaryResult<f64> {
    if values.is_empty() {
        return Err(SummaryError::EmptyInput { operation: "mean" });
    }

    let sum: f64 = values.iter().map(|&v| v.into()).sum();
    Ok(sum / values.len() as f64)
}

/// Smallest value and its position
///
/// When the minimum occurs more than once the index of the *last* occurrence
/// is returned. NaN entries are skipped.
pub fn find_min<T: Copy + Into<f64>>(values: &[T]) -> SummaryResult<Extreme> {
    find_extreme(values, "minimum", |candidate, current| candidate <= current)
}

/// Largest value and its position, last occurrence on ties. NaN entries are
/// skipped.
pub fn find_max<T: Copy + Into<f64>>(values: &[T]) -> SummaryResult<Extreme> {
    find_extreme(values, "maximum", |candidate, current| candidate >= current)
}

/// Single forward scan; `replaces` must accept equal values so later ties win.
fn find_extreme<T: Copy + Into<f64>>(
    values: &[T],
    operation: &'static str,
    replaces: fn(f64, f64) -> bool,
) -> SummaryResult<Extreme> {
    let mut best: Option<Extreme> = None;

    for (index, value) in values.iter().map(|&v| v.into()).enumerate() {
        if value.is_nan() {
            continue;
        }
        match best {
            Some(current) if !replaces(value, current.value) => {}
            _ => best = Some(Extreme::new(value, index)),
        }
    }

    best.ok_or(SummaryError::EmptyInput { operation })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1, 2, 3, 4]).unwrap(), 2.5);
        assert_eq!(mean(&[49.0, 57.0, 56.0, 55.0, 53.0]).unwrap(), 54.0);
        assert_eq!(mean(&[-10, 10]).unwrap(), 0.0);
    }

    #[test]
    fn test_mean_empty() {
        let err = mean::<i32>(&[]).unwrap_err();
        assert!(matches!(err, SummaryError::EmptyInput { operation: "mean" }));
    }

    #[test]
    fn test_find_min_last_occurrence() {
        assert_eq!(find_min(&[1, 5, 1]).unwrap(), Extreme::new(1.0, 2));
        assert_eq!(find_min(&[7, 7, 7]).unwrap(), Extreme::new(7.0, 2));
    }

    #[test]
    fn test_find_max_last_occurrence() {
        assert_eq!(find_max(&[5, 1, 5]).unwrap(), Extreme::new(5.0, 2));
        assert_eq!(find_max(&[3, 9, 2, 9, 4]).unwrap(), Extreme::new(9.0, 3));
    }

    #[test]
    fn test_unique_extremes_match_position() {
        let cases: [&[i32]; 4] = [&[4], &[3, 1, 2], &[-5, 10, 0, 8], &[49, 57, 56, 55, 53]];

        for xs in cases {
            let min = *xs.iter().min().unwrap();
            let max = *xs.iter().max().unwrap();

            let found = find_min(xs).unwrap();
            assert_eq!(found.value, min as f64);
            assert_eq!(found.index, xs.iter().position(|&x| x == min).unwrap());

            let found = find_max(xs).unwrap();
            assert_eq!(found.value, max as f64);
            assert_eq!(found.index, xs.iter().rposition(|&x| x == max).unwrap());
        }
    }

    #[test]
    fn test_float_input() {
        assert_eq!(find_min(&[2.5, -0.5, 3.0]).unwrap(), Extreme::new(-0.5, 1));
        assert_eq!(find_max(&[2.5, -0.5, 3.0]).unwrap(), Extreme::new(3.0, 2));
    }

    #[test]
    fn test_nan_skipped() {
        let xs = [f64::NAN, 4.0, f64::NAN, 1.0];
        assert_eq!(find_min(&xs).unwrap(), Extreme::new(1.0, 3));
        assert_eq!(find_max(&xs).unwrap(), Extreme::new(4.0, 1));
        assert!(find_max(&[f64::NAN]).is_err());
    }

    #[test]
    fn test_extremes_empty() {
        assert!(matches!(
            find_min::<i32>(&[]),
            Err(SummaryError::EmptyInput { operation: "minimum" })
        ));
        assert!(matches!(
            find_max::<i32>(&[]),
            Err(SummaryError::EmptyInput { operation: "maximum" })
        ));
    }

    #[test]
    fn test_reducers_are_repeatable() {
        let xs = [10, 5, 5, 20];
        assert_eq!(find_min(&xs).unwrap(), find_min(&xs).unwrap());
        assert_eq!(find_max(&xs).unwrap(), find_max(&xs).unwrap());
        assert_eq!(mean(&xs).unwrap(), mean(&xs).unwrap());
    }
}
