//! Null-aware numeric helpers shared by the aggregation engines.
//!
//! The engines apply their own fallbacks (a single value has `std = 0`), while the
//! `compute_*` functions are strict and report [`StatsError::InsufficientData`].

use crate::aggregation::error::StatsError;

/// Rounds to `places` decimals using the exact binary value of `value`.
///
/// `1.115` is stored as `1.11499..` and rounds to `1.11`; an exactly representable
/// midpoint such as `10.125` goes to the even digit (`10.12`).
pub fn round_to(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    match usize::try_from(places) {
        Ok(precision) => format!("{value:.precision$}").parse().unwrap_or(value),
        // Negative places round to tens, hundreds, ...
        Err(_) => {
            let factor = 10f64.powi(-places);
            round_to(value / factor, 0) * factor
        }
    }
}

/// Arithmetic mean of the present values, `None` if there are none.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divides by N), `None` if there are no values.
pub fn population_std(values: &[f64]) -> Option<f64> {
    let avg = mean(values)?;
    let variance =
        values.iter().map(|v| (v - avg) * (v - avg)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

/// Drops nulls.
pub fn present(values: &[Option<f64>]) -> Vec<f64> {
    values.iter().flatten().copied().collect()
}

/// Mean of a year's readings ignoring nulls.
///
/// # Errors
///
/// Returns [`StatsError::InsufficientData`] when no value is present.
pub fn compute_annual_mean(temperatures: &[Option<f64>]) -> Result<f64, StatsError> {
    let values = present(temperatures);
    mean(&values).ok_or(StatsError::InsufficientData {
        required: 1,
        available: 0,
    })
}

/// Population standard deviation of a year's readings ignoring nulls.
///
/// # Errors
///
/// Returns [`StatsError::InsufficientData`] when fewer than two values are present.
pub fn compute_annual_std(temperatures: &[Option<f64>]) -> Result<f64, StatsError> {
    let values = present(temperatures);
    if values.len() < 2 {
        return Err(StatsError::InsufficientData {
            required: 2,
            available: values.len(),
        });
    }
    population_std(&values).ok_or(StatsError::InsufficientData {
        required: 2,
        available: 0,
    })
}

/// The ±1σ band around `mean`, returned as `(lower, upper)`.
pub fn compute_sigma_bounds(mean: f64, std: f64) -> (f64, f64) {
    (mean - std, mean + std)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_ignores_nulls() {
        let with_nulls = [Some(10.0), None, Some(15.0), None];
        assert_eq!(compute_annual_mean(&with_nulls).unwrap(), 12.5);
        assert_eq!(
            compute_annual_mean(&with_nulls).unwrap(),
            compute_annual_mean(&[Some(10.0), Some(15.0)]).unwrap()
        );
    }

    #[test]
    fn test_mean_of_nothing_is_insufficient() {
        let err = compute_annual_mean(&[None, None]).unwrap_err();
        assert_eq!(
            err,
            StatsError::InsufficientData {
                required: 1,
                available: 0
            }
        );
    }

    #[test]
    fn test_std_is_population() {
        // Population std of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 2.
        let values: Vec<Option<f64>> = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]
            .into_iter()
            .map(Some)
            .collect();
        assert!((compute_annual_std(&values).unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_std_zero_variance() {
        let values = [Some(15.0), Some(15.0), Some(15.0), Some(15.0)];
        let std = compute_annual_std(&values).unwrap();
        assert_eq!(std, 0.0);
        let (lower, upper) = compute_sigma_bounds(15.0, std);
        assert_eq!(lower, 15.0);
        assert_eq!(upper, 15.0);
    }

    #[test]
    fn test_std_single_reading_is_rejected() {
        let err = compute_annual_std(&[Some(15.0)]).unwrap_err();
        assert_eq!(
            err,
            StatsError::InsufficientData {
                required: 2,
                available: 1
            }
        );
        // Nulls do not count towards the sample size.
        assert!(compute_annual_std(&[Some(15.0), None, None]).is_err());
    }

    #[test]
    fn test_sigma_bounds() {
        assert_eq!(compute_sigma_bounds(20.0, 5.0), (15.0, 25.0));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(12.345_6, 2), 12.35);
        assert_eq!(round_to(-3.14159, 2), -3.14);
        assert_eq!(round_to(66.666_666, 1), 66.7);
        assert_eq!(round_to(0.0, 2), 0.0);
    }

    #[test]
    fn test_round_to_uses_stored_value() {
        // Both sit just below the midpoint once stored as f64.
        assert_eq!(round_to(1.115, 2), 1.11);
        assert_eq!(round_to(-1.115, 2), -1.11);
        assert_eq!(round_to(2.675, 2), 2.67);
    }

    #[test]
    fn test_round_to_exact_ties_go_to_even() {
        assert_eq!(round_to(10.125, 2), 10.12);
        assert_eq!(round_to(0.375, 2), 0.38);
        assert_eq!(round_to(0.25, 1), 0.2);
        assert_eq!(round_to(2.5, 0), 2.0);
    }

    #[test]
    fn test_round_to_negative_places() {
        assert_eq!(round_to(1234.0, -2), 1200.0);
        assert!(round_to(f64::NAN, 2).is_nan());
    }
}
