// ---------------------------------------------------------------------------
// Ordinary least-squares trend line
// ---------------------------------------------------------------------------

/// `y = slope * x + intercept`, fitted by ordinary least squares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    /// Fit a line through the points `(xs[i], ys[i])`.
    ///
    /// Returns `None` when the slices differ in length or are empty.
    /// When every x is identical (including a single point) the line is flat
    /// at the mean of `ys`.
    pub fn fit(xs: &[f64], ys: &[f64]) -> Option<Self> {
        if xs.len() != ys.len() || xs.is_empty() {
            return None;
        }

        let n = xs.len() as f64;
        let (sum_x, sum_y, sum_xx, sum_xy) = xs.iter().zip(ys).fold(
            (0.0, 0.0, 0.0, 0.0),
            |(sx, sy, sxx, sxy), (&x, &y)| (sx + x, sy + y, sxx + x * x, sxy + x * y),
        );

        let denominator = n * sum_xx - sum_x * sum_x;
        if denominator == 0.0 {
            return Some(TrendLine {
                slope: 0.0,
                intercept: sum_y / n,
            });
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = sum_y / n - slope * sum_x / n;
        Some(TrendLine { slope, intercept })
    }

    /// Evaluate the line at `x`.
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fitted value for every input x, rounded to one decimal.
///
/// Mismatched or empty input yields an empty vector, meaning "no trend line".
pub fn fit_line(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    match TrendLine::fit(xs, ys) {
        Some(line) => xs.iter().map(|&x| round_one_decimal(line.at(x))).collect(),
        None => Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Display rounding
// ---------------------------------------------------------------------------

/// Round to one fraction digit the way a decimal printout would, with exact
/// ties going away from zero. Non-finite values are returned unchanged.
pub fn round_one_decimal(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    // Only x.25 and x.75 sit exactly on a tie; both are exact in binary.
    let on_tie = (value * 4.0).fract() == 0.0 && (value * 2.0).fract() != 0.0;
    if on_tie {
        return (value * 10.0).round() / 10.0;
    }

    format!("{value:.1}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64).collect()
    }

    #[test]
    fn perfect_line_is_reproduced() {
        let fitted = fit_line(&[0.0, 1.0, 2.0, 3.0], &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(fitted, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn two_points_fit_exactly() {
        assert_eq!(fit_line(&[0.0, 1.0], &[90.0, 95.0]), vec![90.0, 95.0]);
    }

    #[test]
    fn noisy_points_fall_on_the_least_squares_line() {
        let line = TrendLine::fit(&[0.0, 1.0, 2.0], &[1.0, 3.0, 2.0]).unwrap();
        assert!((line.slope - 0.5).abs() < 1e-12);
        assert!((line.intercept - 1.5).abs() < 1e-12);
        assert_eq!(fit_line(&[0.0, 1.0, 2.0], &[1.0, 3.0, 2.0]), vec![1.5, 2.0, 2.5]);
    }

    #[test]
    fn output_has_input_length() {
        for n in 1..12 {
            let ys: Vec<f64> = (0..n).map(|i| ((i * 7) % 5) as f64 + 0.3).collect();
            assert_eq!(fit_line(&indices(n), &ys).len(), n);
        }
    }

    #[test]
    fn reuses_the_given_xs() {
        // y = 2x over irregular x positions
        let fitted = fit_line(&[10.0, 0.0, 5.0], &[20.0, 0.0, 10.0]);
        assert_eq!(fitted, vec![20.0, 0.0, 10.0]);
    }

    #[test]
    fn empty_and_mismatched_input_give_no_line() {
        assert!(fit_line(&[], &[]).is_empty());
        assert!(fit_line(&[1.0, 2.0], &[1.0]).is_empty());
        assert!(TrendLine::fit(&[], &[]).is_none());
    }

    #[test]
    fn single_point_is_a_flat_line() {
        let line = TrendLine::fit(&[0.0], &[87.25]).unwrap();
        assert_eq!(line.slope, 0.0);
        assert_eq!(fit_line(&[0.0], &[87.25]), vec![87.3]);
    }

    #[test]
    fn identical_xs_are_a_flat_line_at_the_mean() {
        let fitted = fit_line(&[3.0, 3.0, 3.0], &[1.0, 2.0, 6.0]);
        assert_eq!(fitted, vec![3.0, 3.0, 3.0]);
        assert!(fitted.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn rounding_matches_decimal_printout() {
        assert_eq!(round_one_decimal(123.456), 123.5);
        assert_eq!(round_one_decimal(123.44), 123.4);
        assert_eq!(round_one_decimal(90.0), 90.0);
        assert_eq!(round_one_decimal(0.04), 0.0);
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(round_one_decimal(0.25), 0.3);
        assert_eq!(round_one_decimal(2.75), 2.8);
        assert_eq!(round_one_decimal(-0.25), -0.3);
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert!(round_one_decimal(f64::NAN).is_nan());
        assert_eq!(round_one_decimal(f64::INFINITY), f64::INFINITY);
    }
}
