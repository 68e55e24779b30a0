//! Multiclass surface
//!
//! Entry points validate shape, resolve the label space, run the counting
//! pass once, and hand the per-label counts to the aggregator.

use serde::Serialize;

use crate::average::{aggregate, Aggregate, Average, Metric};
use crate::confusion::ConfusionMatrix;
use crate::counts::{check_same_shape, per_label_counts};
use crate::error::Result;
use crate::labels::{Label, LabelSpace};
use crate::metrics::ZeroDivision;

fn metric_over_labels<T: Label>(
    y_true: &[T],
    y_pred: &[T],
    labels: Option<&[T]>,
    zero_division: ZeroDivision,
    average: Average,
    metric: Metric,
) -> Result<Aggregate> {
    check_same_shape(y_true, y_pred)?;
    let space = LabelSpace::resolve(y_true, y_pred, labels)?;
    let counts = per_label_counts(y_true, y_pred, &space);
    Ok(aggregate(&counts, metric, average, zero_division))
}

/// Multiclass precision.
///
/// `labels` restricts and orders the label space; omitted, the sorted
/// union of both sequences is used. For [`Average::None`] the result is a
/// per-label vector in label-space order, otherwise a single scalar.
pub fn precision<T: Label>(
    y_true: &[T],
    y_pred: &[T],
    labels: Option<&[T]>,
    zero_division: ZeroDivision,
    average: Average,
) -> Result<Aggregate> {
    metric_over_labels(y_true, y_pred, labels, zero_division, average, Metric::Precision)
}

/// Multiclass recall.
pub fn recall<T: Label>(
    y_true: &[T],
    y_pred: &[T],
    labels: Option<&[T]>,
    zero_division: ZeroDivision,
    average: Average,
) -> Result<Aggregate> {
    metric_over_labels(y_true, y_pred, labels, zero_division, average, Metric::Recall)
}

/// Multiclass F1 score.
pub fn f1_score<T: Label>(
    y_true: &[T],
    y_pred: &[T],
    labels: Option<&[T]>,
    zero_division: ZeroDivision,
    average: Average,
) -> Result<Aggregate> {
    metric_over_labels(y_true, y_pred, labels, zero_division, average, Metric::F1)
}

/// Precision, recall, and F1 from a single counting pass.
///
/// With [`Average::None`] the bundle also carries the resolved label order
/// and each label's support (`TP + FN`); those fields are omitted for
/// micro/macro averaging.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Stats<T: Label> {
    /// Per-label vector or averaged scalar
    pub precision: Aggregate,
    /// Per-label vector or averaged scalar
    pub recall: Aggregate,
    /// Per-label vector or averaged scalar
    #[serde(rename = "f1-score")]
    pub f1_score: Aggregate,
    /// Resolved label order, `Average::None` only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<T>>,
    /// Per-label `TP + FN`, `Average::None` only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support: Option<Vec<u64>>,
}

/// Multiclass precision, recall, and F1 together.
pub fn stats<T: Label>(
    y_true: &[T],
    y_pred: &[T],
    labels: Option<&[T]>,
    zero_division: ZeroDivision,
    average: Average,
) -> Result<Stats<T>> {
    check_same_shape(y_true, y_pred)?;
    let space = LabelSpace::resolve(y_true, y_pred, labels)?;
    let counts = per_label_counts(y_true, y_pred, &space);

    let (labels_out, support) = match average {
        Average::None => (
            Some(space.labels().to_vec()),
            Some(counts.iter().map(|c| c.support()).collect()),
        ),
        Average::Micro | Average::Macro => (None, None),
    };

    Ok(Stats {
        precision: aggregate(&counts, Metric::Precision, average, zero_division),
        recall: aggregate(&counts, Metric::Recall, average, zero_division),
        f1_score: aggregate(&counts, Metric::F1, average, zero_division),
        labels: labels_out,
        support,
    })
}

/// Confusion matrix with rows/columns in label-space order.
///
/// Samples where either value is outside an explicit label subset are
/// excluded from the matrix; see [`ConfusionMatrix::from_sequences`].
pub fn confusion_matrix<T: Label>(
    y_true: &[T],
    y_pred: &[T],
    labels: Option<&[T]>,
) -> Result<ConfusionMatrix<T>> {
    check_same_shape(y_true, y_pred)?;
    let space = LabelSpace::resolve(y_true, y_pred, labels)?;
    Ok(ConfusionMatrix::from_sequences(y_true, y_pred, space))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatsError;
    use crate::metrics::MetricValue;
    use approx::assert_relative_eq;

    #[test]
    fn test_perfect_per_label() {
        let y = vec![1u8, 2, 3, 1, 2, 3];
        let p = precision(&y, &y, None, ZeroDivision::None, Average::None).unwrap();

        assert_eq!(
            p.as_slice().unwrap(),
            &[MetricValue::Defined(1.0); 3]
        );
    }

    #[test]
    fn test_micro_scalar() {
        let y_true = vec![1u8, 2, 3, 1, 2, 3];
        let y_pred = vec![1u8, 2, 3, 2, 3, 1];

        for metric in [
            precision(&y_true, &y_pred, None, ZeroDivision::None, Average::Micro).unwrap(),
            recall(&y_true, &y_pred, None, ZeroDivision::None, Average::Micro).unwrap(),
            f1_score(&y_true, &y_pred, None, ZeroDivision::None, Average::Micro).unwrap(),
        ] {
            assert_relative_eq!(metric.as_scalar().unwrap().as_f64(), 0.5);
        }
    }

    #[test]
    fn test_explicit_subset_counts_full_sequences() {
        // True label 3 is outside the subset, but its prediction of 1
        // still debits label 1's precision as an FP.
        let y_true = vec![3u8, 1, 2];
        let y_pred = vec![1u8, 1, 2];
        let p = precision(&y_true, &y_pred, Some(&[1, 2]), ZeroDivision::None, Average::None)
            .unwrap();

        assert_eq!(
            p.as_slice().unwrap(),
            &[MetricValue::Defined(0.5), MetricValue::Defined(1.0)]
        );
    }

    #[test]
    fn test_macro_policy_changes_mean_membership() {
        // Label 9 never occurs truly and is never predicted: its recall is
        // undefined. `none` skips it in the mean, `zero` includes it as 0.
        let y_true = vec![0u8, 0, 1, 1];
        let y_pred = vec![0u8, 0, 1, 0];

        let skip = recall(&y_true, &y_pred, Some(&[0, 1, 9]), ZeroDivision::None, Average::Macro)
            .unwrap();
        assert_relative_eq!(skip.as_scalar().unwrap().as_f64(), 0.75);

        let coerce = recall(&y_true, &y_pred, Some(&[0, 1, 9]), ZeroDivision::Zero, Average::Macro)
            .unwrap();
        assert_relative_eq!(coerce.as_scalar().unwrap().as_f64(), 0.5);
    }

    #[test]
    fn test_stats_with_labels_and_support() {
        let y_true = vec![2u8, 0, 2, 1, 2];
        let y_pred = vec![2u8, 0, 1, 1, 2];
        let s = stats(&y_true, &y_pred, None, ZeroDivision::None, Average::None).unwrap();

        assert_eq!(s.labels, Some(vec![0, 1, 2]));
        assert_eq!(s.support, Some(vec![1, 1, 3]));
        assert_eq!(s.precision.as_slice().unwrap().len(), 3);
    }

    #[test]
    fn test_stats_averaged_omits_labels() {
        let y_true = vec![0u8, 1, 0, 1];
        let y_pred = vec![0u8, 1, 1, 1];
        let s = stats(&y_true, &y_pred, None, ZeroDivision::None, Average::Macro).unwrap();

        assert_eq!(s.labels, None);
        assert_eq!(s.support, None);
        assert!(s.f1_score.as_scalar().is_some());

        let json = serde_json::to_value(&s).unwrap();
        assert!(json.get("labels").is_none());
        assert!(json.get("support").is_none());
        assert!(json.get("f1-score").is_some());
    }

    #[test]
    fn test_shape_mismatch_and_empty() {
        let a = vec![0u8, 1];
        let b = vec![0u8];
        assert_eq!(
            precision(&a, &b, None, ZeroDivision::None, Average::None).unwrap_err(),
            StatsError::ShapeMismatch(2, 1)
        );

        let empty: Vec<u8> = vec![];
        assert_eq!(
            stats(&empty, &empty, None, ZeroDivision::None, Average::None).unwrap_err(),
            StatsError::EmptyInput
        );
    }

    #[test]
    fn test_confusion_matrix_entry_point() {
        let y_true = vec![1u8, 2, 1, 2];
        let y_pred = vec![1u8, 1, 2, 2];
        let cm = confusion_matrix(&y_true, &y_pred, None).unwrap();

        assert_eq!(cm.labels(), &[1, 2]);
        for i in 0..2 {
            for j in 0..2 {
                assert_eq!(cm.get(i, j), 1);
            }
        }
    }
}
