//! Averaging strategies over per-label counts

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::counts::Counts;
use crate::error::StatsError;
use crate::metrics::{self, MetricValue, ZeroDivision};

/// Averaging strategy for multi-class metrics
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Average {
    /// Per-label vector in label-space order, no collapsing
    #[default]
    None,
    /// Sum TP/FP/FN across all labels first, then one ratio
    Micro,
    /// Ratio per label, then the arithmetic mean of the defined entries
    Macro,
}

impl FromStr for Average {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, StatsError> {
        match s {
            "none" => Ok(Self::None),
            "micro" => Ok(Self::Micro),
            "macro" => Ok(Self::Macro),
            other => Err(StatsError::InvalidPolicy(other.to_string())),
        }
    }
}

/// Which ratio the aggregator applies per label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Metric {
    Precision,
    Recall,
    F1,
}

impl Metric {
    pub(crate) fn apply(self, c: &Counts, zero_division: ZeroDivision) -> MetricValue {
        match self {
            Metric::Precision => metrics::precision(c, zero_division),
            Metric::Recall => metrics::recall(c, zero_division),
            Metric::F1 => metrics::f1(c, zero_division),
        }
    }
}

/// Result shape of an averaged metric: a per-label vector for
/// [`Average::None`], a single scalar otherwise.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Aggregate {
    /// One value, from micro or macro averaging
    Scalar(MetricValue),
    /// One value per label, aligned with label-space order
    PerLabel(Vec<MetricValue>),
}

impl Aggregate {
    /// The scalar value, if this is a micro/macro result
    pub fn as_scalar(&self) -> Option<MetricValue> {
        match self {
            Aggregate::Scalar(v) => Some(*v),
            Aggregate::PerLabel(_) => None,
        }
    }

    /// The per-label vector, if no averaging was applied
    pub fn as_slice(&self) -> Option<&[MetricValue]> {
        match self {
            Aggregate::Scalar(_) => None,
            Aggregate::PerLabel(v) => Some(v),
        }
    }
}

/// Element-wise sum of all per-label counts, for micro averaging.
pub(crate) fn micro_counts(counts: &[Counts]) -> Counts {
    counts.iter().fold(Counts::default(), |acc, c| acc.merge(*c))
}

/// Mean of the per-label ratios that come out defined.
///
/// Under `ZeroDivision::None` an undefined ratio drops out of the mean
/// entirely; under `ZeroDivision::Zero` it is coerced first and included
/// as `0.0`. The policy therefore changes both the values and the set of
/// labels the mean runs over.
pub(crate) fn macro_mean(
    counts: &[Counts],
    metric: Metric,
    zero_division: ZeroDivision,
) -> MetricValue {
    let mut sum = 0.0;
    let mut defined = 0usize;
    for c in counts {
        if let MetricValue::Defined(v) = metric.apply(c, zero_division) {
            sum += v;
            defined += 1;
        }
    }
    if defined == 0 {
        MetricValue::Undefined
    } else {
        MetricValue::Defined(sum / defined as f64)
    }
}

/// Collapse per-label counts under an averaging strategy.
pub(crate) fn aggregate(
    counts: &[Counts],
    metric: Metric,
    average: Average,
    zero_division: ZeroDivision,
) -> Aggregate {
    match average {
        Average::None => Aggregate::PerLabel(
            counts.iter().map(|c| metric.apply(c, zero_division)).collect(),
        ),
        Average::Micro => Aggregate::Scalar(metric.apply(&micro_counts(counts), zero_division)),
        Average::Macro => Aggregate::Scalar(macro_mean(counts, metric, zero_division)),
    }
}
