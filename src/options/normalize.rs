//! Percentage normalization.
//!
//! Turns raw option weights into a distribution of non-negative integer
//! percentages that sums to exactly 100:
//!
//! - A total of exactly 100 (all integral) is kept as-is
//! - A total of 0 splits evenly, the last option absorbing the remainder
//! - Any other total is scaled and rounded, the last option absorbing the
//!   accumulated rounding error
//!
//! Negative and non-finite weights count as 0. Configurations that must not
//! contain them are rejected earlier by the validator.

use tracing::warn;

use super::PickOption;
use crate::config::OptionConfig;

/// Normalize option weights into percentages.
///
/// Output has the same length and order as the input. Deterministic and free
/// of side effects apart from logging clamped weights.
///
/// # Example
///
/// ```
/// use pickapp::config::OptionConfig;
/// use pickapp::options::normalize;
///
/// let options: Vec<OptionConfig> = ["a", "b", "c"]
///     .iter()
///     .map(|id| OptionConfig::new(id, id, 0.0))
///     .collect();
/// let normalized = normalize(&options);
/// let percentages: Vec<u32> = normalized.iter().map(|o| o.percentage).collect();
/// assert_eq!(percentages, vec![33, 33, 34]);
/// ```
pub fn normalize(options: &[OptionConfig]) -> Vec<PickOption> {
    if options.is_empty() {
        return Vec::new();
    }

    let mut weights: Vec<f64> = options.iter().map(sanitize_weight).collect();
    let mut total: f64 = weights.iter().sum();

    if !total.is_finite() {
        // Finite weights whose sum overflows are rescaled relative to the largest.
        let largest = weights.iter().copied().fold(0.0, f64::max);
        weights.iter_mut().for_each(|w| *w /= largest);
        total = weights.iter().sum();
    }

    let percentages = if total == 100.0 && weights.iter().all(|w| w.fract() == 0.0) {
        weights.iter().map(|w| *w as u32).collect()
    } else if total == 0.0 {
        equal_shares(options.len())
    } else {
        proportional_shares(&weights, total)
    };

    options
        .iter()
        .zip(percentages)
        .map(|(option, percentage)| PickOption {
            id: option.id.clone(),
            title: option.title.clone(),
            percentage,
            select_label: option.select_label.clone(),
        })
        .collect()
}

fn sanitize_weight(option: &OptionConfig) -> f64 {
    let weight = option.percentage;
    if !weight.is_finite() || weight < 0.0 {
        warn!(
            "Option '{}' has weight {}; treating it as 0",
            option.id, weight
        );
        return 0.0;
    }
    weight
}

/// Equal integer share for every option but the last, which takes the rest.
fn equal_shares(count: usize) -> Vec<u32> {
    let share = 100 / count as u32;
    let last = 100 - share * (count as u32 - 1);

    let mut shares = vec![share; count - 1];
    shares.push(last);
    shares
}

/// Scaled and rounded shares, the last option absorbing the rounding error.
///
/// A leading share never pushes the running sum past 100, so the remainder
/// left for the last option cannot go negative.
fn proportional_shares(weights: &[f64], total: f64) -> Vec<u32> {
    let last = weights.len() - 1;
    let mut accumulated = 0u32;
    let mut shares = Vec::with_capacity(weights.len());

    for weight in &weights[..last] {
        let share = ((weight / total) * 100.0).round() as u32;
        let share = share.min(100 - accumulated);
        accumulated += share;
        shares.push(share);
    }

    shares.push(100 - accumulated);
    shares
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(weights: &[f64]) -> Vec<OptionConfig> {
        weights
            .iter()
            .enumerate()
            .map(|(i, w)| OptionConfig::new(&format!("opt{}", i + 1), &format!("Option {}", i + 1), *w))
            .collect()
    }

    fn percentages(weights: &[f64]) -> Vec<u32> {
        normalize(&options(weights))
            .iter()
            .map(|o| o.percentage)
            .collect()
    }

    #[test]
    fn total_of_100_is_unchanged() {
        assert_eq!(percentages(&[60.0, 40.0]), vec![60, 40]);
    }

    #[test]
    fn all_zero_splits_evenly() {
        assert_eq!(percentages(&[0.0, 0.0, 0.0]), vec![33, 33, 34]);
        assert_eq!(percentages(&[0.0, 0.0]), vec![50, 50]);
        assert_eq!(percentages(&[0.0; 7]), vec![14, 14, 14, 14, 14, 14, 16]);
    }

    #[test]
    fn all_zero_sums_to_100_for_any_count() {
        for n in 1..=150 {
            let result = percentages(&vec![0.0; n]);
            assert_eq!(result.len(), n);
            assert_eq!(result.iter().sum::<u32>(), 100, "n = {}", n);
            let share = 100 / n as u32;
            assert!(result[..n - 1].iter().all(|p| *p == share));
        }
    }

    #[test]
    fn single_option_gets_100() {
        assert_eq!(percentages(&[0.0]), vec![100]);
        assert_eq!(percentages(&[7.0]), vec![100]);
        assert_eq!(percentages(&[250.0]), vec![100]);
    }

    #[test]
    fn scales_non_100_totals() {
        assert_eq!(percentages(&[3.0, 1.0]), vec![75, 25]);
        assert_eq!(percentages(&[150.0, 50.0]), vec![75, 25]);
    }

    #[test]
    fn last_option_absorbs_rounding_error() {
        // 1/3 rounds to 33 twice, leaving 34 for the last option.
        assert_eq!(percentages(&[1.0, 1.0, 1.0]), vec![33, 33, 34]);
        // 2/3 of 100 rounds up to 67.
        assert_eq!(percentages(&[2.0, 1.0]), vec![67, 33]);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // 1/8 = 12.5 -> 13
        assert_eq!(percentages(&[1.0, 7.0]), vec![13, 87]);
    }

    #[test]
    fn fractional_total_of_100_is_rounded() {
        assert_eq!(percentages(&[60.5, 39.5]), vec![61, 39]);
    }

    #[test]
    fn output_sums_to_100_for_positive_totals() {
        let cases: &[&[f64]] = &[
            &[1.0, 2.0, 3.0, 4.0],
            &[0.1, 0.2, 0.3],
            &[99.0, 0.0, 0.0, 2.0],
            &[5.0, 0.0, 0.0],
            &[12.5, 12.5, 12.5, 12.5, 12.5, 12.5, 12.5, 12.5, 0.0],
            &[1000.0, 1.0, 1.0, 1.0],
        ];
        for weights in cases {
            let result = percentages(weights);
            assert_eq!(result.len(), weights.len());
            assert_eq!(result.iter().sum::<u32>(), 100, "weights {:?}", weights);
        }
    }

    #[test]
    fn huge_weights_stay_proportional() {
        assert_eq!(percentages(&[1e308, 1e308]), vec![50, 50]);
        assert_eq!(percentages(&[f64::MAX, f64::MAX / 3.0]), vec![75, 25]);
    }

    #[test]
    fn rounding_overflow_never_goes_negative() {
        // 40 shares of 2.5% each round up to 3; the running sum is capped at 100.
        let mut weights = vec![2.5; 40];
        weights.push(0.0);
        let result = percentages(&weights);
        assert_eq!(result.iter().sum::<u32>(), 100);
        assert_eq!(*result.last().unwrap(), 0);
    }

    #[test]
    fn negative_weights_count_as_zero() {
        assert_eq!(percentages(&[-20.0, 50.0, 50.0]), vec![0, 50, 50]);
        assert_eq!(percentages(&[-10.0, -10.0]), vec![50, 50]);
    }

    #[test]
    fn non_finite_weights_count_as_zero() {
        assert_eq!(percentages(&[f64::NAN, 60.0, 40.0]), vec![0, 60, 40]);
        assert_eq!(percentages(&[f64::INFINITY, 1.0]), vec![0, 100]);
    }

    #[test]
    fn is_idempotent() {
        for weights in [&[1.0, 2.0, 3.0][..], &[0.0, 0.0, 0.0], &[17.0, 4.0]] {
            let once = normalize(&options(weights));
            let again_input: Vec<OptionConfig> = once.iter().map(OptionConfig::from).collect();
            let twice = normalize(&again_input);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn preserves_order_ids_and_labels() {
        let mut input = options(&[1.0, 3.0]);
        input[0].select_label = Some("Choose".to_string());
        let result = normalize(&input);
        assert_eq!(result[0].id, "opt1");
        assert_eq!(result[1].id, "opt2");
        assert_eq!(result[0].select_label.as_deref(), Some("Choose"));
        assert_eq!(result[1].title, "Option 2");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(normalize(&[]).is_empty());
    }
}
