//! Label-space resolution
//!
//! A [`LabelSpace`] is the ordered set of distinct labels a computation runs
//! over, plus a mapping from label value to a dense zero-based index used
//! for matrix addressing.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Result, StatsError};

/// A discrete class value: usable as a map key, totally ordered, and cheap
/// to copy. Implemented for the integer primitives and `bool`.
pub trait Label: Copy + Ord + Eq + Hash + Debug {}

impl<T: Copy + Ord + Eq + Hash + Debug> Label for T {}

/// Resolved, indexed, ordered set of labels.
///
/// Indices are contiguous `0..L-1` with no duplicate labels.
#[derive(Clone, Debug)]
pub struct LabelSpace<T: Label> {
    labels: Vec<T>,
    index: HashMap<T, usize>,
}

impl<T: Label> LabelSpace<T> {
    /// Resolve the label space from paired sequences.
    ///
    /// Without explicit labels the space is the sorted union of distinct
    /// values from both sequences; two empty sequences cannot infer any
    /// label and fail with [`StatsError::EmptyInput`]. Explicit labels keep
    /// their given order and may be a strict subset of the values actually
    /// occurring in the data.
    pub fn resolve(y_true: &[T], y_pred: &[T], explicit: Option<&[T]>) -> Result<Self> {
        match explicit {
            Some(given) => Self::from_labels(given),
            None => {
                if y_true.is_empty() && y_pred.is_empty() {
                    return Err(StatsError::EmptyInput);
                }
                let mut labels: Vec<T> = y_true.iter().chain(y_pred.iter()).copied().collect();
                labels.sort_unstable();
                labels.dedup();
                let index = labels.iter().enumerate().map(|(i, &l)| (l, i)).collect();
                Ok(Self { labels, index })
            }
        }
    }

    /// Build from an explicit label list, preserving its order as index order.
    pub fn from_labels(labels: &[T]) -> Result<Self> {
        let mut index = HashMap::with_capacity(labels.len());
        for (i, &label) in labels.iter().enumerate() {
            if index.insert(label, i).is_some() {
                return Err(StatsError::DuplicateLabel);
            }
        }
        Ok(Self {
            labels: labels.to_vec(),
            index,
        })
    }

    /// Labels in index order
    pub fn labels(&self) -> &[T] {
        &self.labels
    }

    /// Number of labels in the space
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the space has no labels
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Dense index of a label, if it is a member of the space
    pub fn index_of(&self, label: T) -> Option<usize> {
        self.index.get(&label).copied()
    }

    /// Membership test
    pub fn contains(&self, label: T) -> bool {
        self.index.contains_key(&label)
    }
}
