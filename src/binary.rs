//! Binary classification surface
//!
//! The positive class is fixed: `true` for booleans, `1` for integers.
//! All functions validate shape at the boundary, then run the same
//! four-count kernel as the multiclass path with the label pinned to the
//! positive value.

use serde::Serialize;

use crate::counts::{binary_counts, check_same_shape, BinaryLabel};
use crate::error::Result;
use crate::metrics::{self, MetricValue, ZeroDivision};

/// Binary precision: `TP / (TP + FP)`.
pub fn binary_precision<T: BinaryLabel>(
    y_true: &[T],
    y_pred: &[T],
    zero_division: ZeroDivision,
) -> Result<MetricValue> {
    check_same_shape(y_true, y_pred)?;
    Ok(metrics::precision(&binary_counts(y_true, y_pred), zero_division))
}

/// Binary recall: `TP / (TP + FN)`.
pub fn binary_recall<T: BinaryLabel>(
    y_true: &[T],
    y_pred: &[T],
    zero_division: ZeroDivision,
) -> Result<MetricValue> {
    check_same_shape(y_true, y_pred)?;
    Ok(metrics::recall(&binary_counts(y_true, y_pred), zero_division))
}

/// Binary F1 score: harmonic mean of precision and recall.
pub fn binary_f1_score<T: BinaryLabel>(
    y_true: &[T],
    y_pred: &[T],
    zero_division: ZeroDivision,
) -> Result<MetricValue> {
    check_same_shape(y_true, y_pred)?;
    Ok(metrics::f1(&binary_counts(y_true, y_pred), zero_division))
}

/// Intersection-over-union of the positive regions:
/// `TP / (TP + FP + FN)`.
pub fn binary_iou<T: BinaryLabel>(
    y_true: &[T],
    y_pred: &[T],
    zero_division: ZeroDivision,
) -> Result<MetricValue> {
    check_same_shape(y_true, y_pred)?;
    Ok(metrics::iou(&binary_counts(y_true, y_pred), zero_division))
}

/// TP, FP, and FN counts for the positive class.
pub fn binary_tp_fp_fn<T: BinaryLabel>(y_true: &[T], y_pred: &[T]) -> Result<(u64, u64, u64)> {
    check_same_shape(y_true, y_pred)?;
    let c = binary_counts(y_true, y_pred);
    Ok((c.tp, c.fp, c.fn_))
}

/// Precision, recall, and F1 from one counting pass.
///
/// Serializes as `{"precision": …, "recall": …, "f1-score": …}` with
/// undefined ratios rendered as `null`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BinaryStats {
    /// `TP / (TP + FP)` under the caller's policy
    pub precision: MetricValue,
    /// `TP / (TP + FN)` under the caller's policy
    pub recall: MetricValue,
    /// Harmonic mean, zero cases per the caller's policy
    #[serde(rename = "f1-score")]
    pub f1_score: MetricValue,
}

/// Binary precision, recall, and F1 together.
pub fn binary_stats<T: BinaryLabel>(
    y_true: &[T],
    y_pred: &[T],
    zero_division: ZeroDivision,
) -> Result<BinaryStats> {
    check_same_shape(y_true, y_pred)?;
    let c = binary_counts(y_true, y_pred);
    Ok(BinaryStats {
        precision: metrics::precision(&c, zero_division),
        recall: metrics::recall(&c, zero_division),
        f1_score: metrics::f1(&c, zero_division),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatsError;
    use approx::assert_relative_eq;

    #[test]
    fn test_all_wrong_coerced_to_zero() {
        let y_true = vec![0u8, 0, 0, 0];
        let y_pred = vec![1u8, 1, 1, 1];
        let p = binary_precision(&y_true, &y_pred, ZeroDivision::Zero).unwrap();
        assert_eq!(p, MetricValue::Defined(0.0));
    }

    #[test]
    fn test_partial_recall_preserved() {
        let y_true = vec![1u8, 1, 1, 1];
        let y_pred = vec![1u8, 0, 0, 0];
        let p = binary_precision(&y_true, &y_pred, ZeroDivision::None).unwrap();
        let r = binary_recall(&y_true, &y_pred, ZeroDivision::None).unwrap();

        assert_eq!(p, MetricValue::Defined(1.0));
        assert_eq!(r, MetricValue::Defined(0.25));
    }

    #[test]
    fn test_counts_and_f1() {
        let y_true = vec![1u8, 1, 0, 0];
        let y_pred = vec![0u8, 1, 1, 0];
        assert_eq!(binary_tp_fp_fn(&y_true, &y_pred).unwrap(), (1, 1, 1));

        let f1 = binary_f1_score(&y_true, &y_pred, ZeroDivision::None).unwrap();
        assert_relative_eq!(f1.as_f64(), 0.5);
    }

    #[test]
    fn test_iou() {
        let y_true = vec![true, true, false, false];
        let y_pred = vec![true, false, true, false];
        let v = binary_iou(&y_true, &y_pred, ZeroDivision::None).unwrap();
        assert_relative_eq!(v.as_f64(), 1.0 / 3.0);

        // No positive anywhere: undefined vs coerced
        let y_true = vec![false, false];
        let y_pred = vec![false, false];
        assert_eq!(
            binary_iou(&y_true, &y_pred, ZeroDivision::None).unwrap(),
            MetricValue::Undefined
        );
        assert_eq!(
            binary_iou(&y_true, &y_pred, ZeroDivision::Zero).unwrap(),
            MetricValue::Defined(0.0)
        );
    }

    #[test]
    fn test_shape_mismatch() {
        let y_true = vec![1u8, 0];
        let y_pred = vec![1u8];
        assert_eq!(
            binary_precision(&y_true, &y_pred, ZeroDivision::None).unwrap_err(),
            StatsError::ShapeMismatch(2, 1)
        );
    }

    #[test]
    fn test_stats_json_rendering() {
        // No positive predictions: precision undefined, recall 0, f1
        // undefined under the `none` policy.
        let y_true = vec![1u8, 1];
        let y_pred = vec![0u8, 0];
        let stats = binary_stats(&y_true, &y_pred, ZeroDivision::None).unwrap();

        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["precision"], serde_json::Value::Null);
        assert_eq!(json["recall"], serde_json::json!(0.0));
        assert_eq!(json["f1-score"], serde_json::Value::Null);
    }

    #[test]
    fn test_stats_matches_individual_calls() {
        let y_true = vec![1u8, 0, 1, 1, 0];
        let y_pred = vec![1u8, 1, 1, 0, 0];
        let stats = binary_stats(&y_true, &y_pred, ZeroDivision::None).unwrap();

        assert_eq!(
            stats.precision,
            binary_precision(&y_true, &y_pred, ZeroDivision::None).unwrap()
        );
        assert_eq!(
            stats.recall,
            binary_recall(&y_true, &y_pred, ZeroDivision::None).unwrap()
        );
        assert_eq!(
            stats.f1_score,
            binary_f1_score(&y_true, &y_pred, ZeroDivision::None).unwrap()
        );
    }
}
