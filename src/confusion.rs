//! Confusion matrix for multi-class classification

use std::fmt;

use crate::counts::Counts;
use crate::labels::{Label, LabelSpace};

/// Confusion matrix over a resolved label space.
///
/// Element `[i][j]` is the count of samples with true label index `i`
/// predicted as index `j`. Storage is `O(L^2)`: resolving tens of
/// thousands of distinct labels materializes a correspondingly large
/// matrix, which callers with huge label universes should budget for.
#[derive(Clone, Debug)]
pub struct ConfusionMatrix<T: Label> {
    /// The matrix data: matrix[true_index][pred_index] = count
    matrix: Vec<Vec<u64>>,
    space: LabelSpace<T>,
}

impl<T: Label> ConfusionMatrix<T> {
    /// Accumulate from paired sequences, single pass.
    ///
    /// A sample is excluded when either its true or predicted value is
    /// outside `space` (only possible with an explicit label subset).
    /// Exclusion is a counting policy, not an error: the matrix simply
    /// undercounts relative to `N`.
    pub fn from_sequences(y_true: &[T], y_pred: &[T], space: LabelSpace<T>) -> Self {
        let n_classes = space.len();
        let mut matrix = vec![vec![0u64; n_classes]; n_classes];

        for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
            if let (Some(i), Some(j)) = (space.index_of(t), space.index_of(p)) {
                matrix[i][j] += 1;
            }
        }

        Self { matrix, space }
    }

    /// Get the raw matrix
    pub fn matrix(&self) -> &Vec<Vec<u64>> {
        &self.matrix
    }

    /// Labels in row/column order
    pub fn labels(&self) -> &[T] {
        self.space.labels()
    }

    /// Number of classes
    pub fn n_classes(&self) -> usize {
        self.space.len()
    }

    /// Get element at [true_index][pred_index]
    pub fn get(&self, true_index: usize, pred_index: usize) -> u64 {
        self.matrix[true_index][pred_index]
    }

    /// True positives for a class: the diagonal entry
    pub fn true_positives(&self, class: usize) -> u64 {
        self.matrix[class][class]
    }

    /// False positives for a class: column sum minus the diagonal
    pub fn false_positives(&self, class: usize) -> u64 {
        (0..self.n_classes())
            .filter(|&i| i != class)
            .map(|i| self.matrix[i][class])
            .sum()
    }

    /// False negatives for a class: row sum minus the diagonal
    pub fn false_negatives(&self, class: usize) -> u64 {
        (0..self.n_classes())
            .filter(|&j| j != class)
            .map(|j| self.matrix[class][j])
            .sum()
    }

    /// True negatives for a class, relative to the in-space total
    pub fn true_negatives(&self, class: usize) -> u64 {
        self.total()
            - self.true_positives(class)
            - self.false_positives(class)
            - self.false_negatives(class)
    }

    /// Per-class counts derived by row/column/diagonal arithmetic.
    ///
    /// Matches [`per_label_counts`](crate::counts::per_label_counts)
    /// exactly when no subset exclusion applies.
    pub fn class_counts(&self, class: usize) -> Counts {
        Counts {
            tp: self.true_positives(class),
            fp: self.false_positives(class),
            fn_: self.false_negatives(class),
            tn: self.true_negatives(class),
        }
    }

    /// Support (in-space true instances) for a class: the row sum
    pub fn support(&self, class: usize) -> u64 {
        self.matrix[class].iter().sum()
    }

    /// Total in-space samples
    pub fn total(&self) -> u64 {
        self.matrix.iter().flatten().sum()
    }

    /// Fraction of in-space samples on the diagonal
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let correct: u64 = (0..self.n_classes()).map(|i| self.matrix[i][i]).sum();
        correct as f64 / total as f64
    }
}

impl<T: Label> fmt::Display for ConfusionMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion Matrix:")?;

        // Header
        write!(f, "          ")?;
        for label in self.labels() {
            write!(f, "Pred {label:?} ")?;
        }
        writeln!(f)?;

        // Rows
        for (i, label) in self.labels().iter().enumerate() {
            write!(f, "True {label:?}")?;
            for j in 0..self.n_classes() {
                write!(f, "{:>7} ", self.matrix[i][j])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
