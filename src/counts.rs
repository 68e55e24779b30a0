//! Single-pass counting over paired label sequences
//!
//! Two independent modes back the public surface: per-label
//! `(TP, FP, FN, TN)` tuples computed against the full sequences (this
//! module), and the membership-filtered accumulation behind
//! [`ConfusionMatrix`](crate::ConfusionMatrix). The two deliberately treat
//! out-of-space samples differently; see [`per_label_counts`].

use crate::error::{Result, StatsError};
use crate::labels::{Label, LabelSpace};

/// Counts for one label: `(TP, FP, FN, TN)`.
///
/// `TP + FP + FN + TN == N`, with TN defined as "neither true nor
/// predicted is this label".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counts {
    /// True positives: `true == L && pred == L`
    pub tp: u64,
    /// False positives: `true != L && pred == L`
    pub fp: u64,
    /// False negatives: `true == L && pred != L`
    pub fn_: u64,
    /// True negatives: everything else
    pub tn: u64,
}

impl Counts {
    /// Element-wise sum, used for micro averaging and parallel merges.
    pub fn merge(self, other: Counts) -> Counts {
        Counts {
            tp: self.tp + other.tp,
            fp: self.fp + other.fp,
            fn_: self.fn_ + other.fn_,
            tn: self.tn + other.tn,
        }
    }

    /// Support: count of samples whose true label is this label.
    pub fn support(&self) -> u64 {
        self.tp + self.fn_
    }
}

pub(crate) fn check_same_shape<T>(y_true: &[T], y_pred: &[T]) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(StatsError::ShapeMismatch(y_true.len(), y_pred.len()));
    }
    Ok(())
}

/// Count TP/FP/FN/TN for every label in `space`, one pass over the full
/// sequences.
///
/// Unlike confusion-matrix accumulation, this mode never excludes samples:
/// when `space` is an explicit strict subset, a sample whose true value
/// lies outside the subset still contributes an FP to a requested label it
/// was predicted as. Restricting the label list therefore changes
/// precision/recall without changing the definition of TP for the retained
/// labels.
pub fn per_label_counts<T: Label>(
    y_true: &[T],
    y_pred: &[T],
    space: &LabelSpace<T>,
) -> Vec<Counts> {
    let n = y_true.len() as u64;
    let mut counts = vec![Counts::default(); space.len()];

    for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
        if t == p {
            if let Some(i) = space.index_of(t) {
                counts[i].tp += 1;
            }
        } else {
            if let Some(i) = space.index_of(t) {
                counts[i].fn_ += 1;
            }
            if let Some(j) = space.index_of(p) {
                counts[j].fp += 1;
            }
        }
    }

    for c in &mut counts {
        c.tn = n - c.tp - c.fp - c.fn_;
    }
    counts
}

/// Values with a designated positive class: `true` for booleans, `1` for
/// the integer primitives.
pub trait BinaryLabel: Copy {
    /// Whether this value is the positive class
    fn is_positive(self) -> bool;
}

impl BinaryLabel for bool {
    fn is_positive(self) -> bool {
        self
    }
}

macro_rules! impl_binary_label {
    ($($t:ty),*) => {
        $(impl BinaryLabel for $t {
            fn is_positive(self) -> bool {
                self == 1
            }
        })*
    };
}

impl_binary_label!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Four-count pass with the label fixed to the positive class.
pub fn binary_counts<T: BinaryLabel>(y_true: &[T], y_pred: &[T]) -> Counts {
    let mut c = Counts::default();
    for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
        match (t.is_positive(), p.is_positive()) {
            (true, true) => c.tp += 1,
            (false, true) => c.fp += 1,
            (true, false) => c.fn_ += 1,
            (false, false) => c.tn += 1,
        }
    }
    c
}
