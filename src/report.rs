//! Classification report

use crate::average::{macro_mean, micro_counts, Metric};
use crate::counts::{check_same_shape, per_label_counts};
use crate::error::Result;
use crate::labels::{Label, LabelSpace};
use crate::metrics::{self, ZeroDivision};

/// Generate an sklearn-style classification report.
///
/// One row per resolved label with precision, recall, F1, and support,
/// followed by micro/macro average rows and an accuracy footer. Ratios are
/// rendered under [`ZeroDivision::Zero`] so the table never shows NaN.
///
/// # Example
/// ```
/// use medir::classification_report;
///
/// let y_true = vec![0u8, 1, 0, 2, 0, 2];
/// let y_pred = vec![0u8, 1, 1, 2, 0, 1];
/// let report = classification_report(&y_true, &y_pred).unwrap();
/// println!("{report}");
/// ```
pub fn classification_report<T: Label>(y_true: &[T], y_pred: &[T]) -> Result<String> {
    check_same_shape(y_true, y_pred)?;
    let space = LabelSpace::resolve(y_true, y_pred, None)?;
    let counts = per_label_counts(y_true, y_pred, &space);

    let mut report = String::new();

    // Header
    report.push_str(&format!(
        "{:>12} {:>10} {:>10} {:>10} {:>10}\n",
        "", "precision", "recall", "f1-score", "support"
    ));
    report.push_str(&"-".repeat(56));
    report.push('\n');

    // Per-label rows
    for (label, c) in space.labels().iter().zip(&counts) {
        report.push_str(&format!(
            "{:>12} {:>10.2} {:>10.2} {:>10.2} {:>10}\n",
            format!("{label:?}"),
            metrics::precision(c, ZeroDivision::Zero).or_zero(),
            metrics::recall(c, ZeroDivision::Zero).or_zero(),
            metrics::f1(c, ZeroDivision::Zero).or_zero(),
            c.support(),
        ));
    }

    report.push_str(&"-".repeat(56));
    report.push('\n');

    let total_support: u64 = counts.iter().map(|c| c.support()).sum();

    // Averages
    let micro = micro_counts(&counts);
    report.push_str(&format!(
        "{:>12} {:>10.2} {:>10.2} {:>10.2} {:>10}\n",
        "micro avg",
        Metric::Precision.apply(&micro, ZeroDivision::Zero).or_zero(),
        Metric::Recall.apply(&micro, ZeroDivision::Zero).or_zero(),
        Metric::F1.apply(&micro, ZeroDivision::Zero).or_zero(),
        total_support
    ));

    report.push_str(&format!(
        "{:>12} {:>10.2} {:>10.2} {:>10.2} {:>10}\n",
        "macro avg",
        macro_mean(&counts, Metric::Precision, ZeroDivision::Zero).or_zero(),
        macro_mean(&counts, Metric::Recall, ZeroDivision::Zero).or_zero(),
        macro_mean(&counts, Metric::F1, ZeroDivision::Zero).or_zero(),
        total_support
    ));

    let correct = counts.iter().map(|c| c.tp).sum::<u64>();
    let accuracy = if y_true.is_empty() {
        0.0
    } else {
        correct as f64 / y_true.len() as f64
    };
    report.push_str(&format!("\nAccuracy: {accuracy:.4}\n"));

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_sections() {
        let y_true = vec![0u8, 1, 0, 2, 0, 2];
        let y_pred = vec![0u8, 1, 1, 2, 0, 1];
        let report = classification_report(&y_true, &y_pred).unwrap();

        assert!(report.contains("precision"));
        assert!(report.contains("recall"));
        assert!(report.contains("f1-score"));
        assert!(report.contains("support"));
        assert!(report.contains("micro avg"));
        assert!(report.contains("macro avg"));
        assert!(report.contains("Accuracy"));
    }

    #[test]
    fn test_report_accuracy_footer() {
        let y = vec![0u8, 1, 2];
        let report = classification_report(&y, &y).unwrap();
        assert!(report.contains("Accuracy: 1.0000"));
    }

    #[test]
    fn test_report_one_row_per_label() {
        let y_true = vec![0u8, 1, 2, 0];
        let y_pred = vec![0u8, 1, 2, 1];
        let report = classification_report(&y_true, &y_pred).unwrap();

        // 3 label rows + header + 2 average rows + accuracy
        let label_rows = report
            .lines()
            .filter(|l| l.trim_start().starts_with(char::is_numeric))
            .count();
        assert_eq!(label_rows, 3);
    }
}
