//! Ratio derivation under a zero-division policy
//!
//! All four metric formulas are pure functions over one [`Counts`] tuple.
//! A zero denominator never reaches a floating-point division: the branch
//! is taken on the integer counts, so no NaN arithmetic or FP exception
//! can occur inside the kernel.

use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::counts::Counts;
use crate::error::StatsError;

/// How a ratio with a zero denominator is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroDivision {
    /// Keep the ratio undefined: `null` / NaN at the output boundary
    #[default]
    None,
    /// Coerce the ratio to `0.0`
    Zero,
}

impl FromStr for ZeroDivision {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, StatsError> {
        match s {
            "none" => Ok(Self::None),
            "zero" => Ok(Self::Zero),
            other => Err(StatsError::InvalidPolicy(other.to_string())),
        }
    }
}

/// A defined ratio in `[0, 1]`, or the marker for a zero denominator.
///
/// The tagged variant keeps "undefined" distinct from "coerced to zero"
/// through intermediate computation; it collapses to `null` or NaN only at
/// the output boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MetricValue {
    /// A computed ratio
    Defined(f64),
    /// Zero-denominator marker
    Undefined,
}

impl MetricValue {
    /// Whether the ratio was computable
    pub fn is_defined(&self) -> bool {
        matches!(self, MetricValue::Defined(_))
    }

    /// `None` for `Undefined`
    pub fn to_option(self) -> Option<f64> {
        match self {
            MetricValue::Defined(v) => Some(v),
            MetricValue::Undefined => None,
        }
    }

    /// NaN for `Undefined`
    pub fn as_f64(self) -> f64 {
        match self {
            MetricValue::Defined(v) => v,
            MetricValue::Undefined => f64::NAN,
        }
    }

    /// The defined value, with `Undefined` coerced to `0.0`
    pub fn or_zero(self) -> f64 {
        match self {
            MetricValue::Defined(v) => v,
            MetricValue::Undefined => 0.0,
        }
    }
}

impl Serialize for MetricValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_option().serialize(serializer)
    }
}

fn ratio(num: u64, den: u64, zero_division: ZeroDivision) -> MetricValue {
    if den == 0 {
        match zero_division {
            ZeroDivision::None => MetricValue::Undefined,
            ZeroDivision::Zero => MetricValue::Defined(0.0),
        }
    } else {
        MetricValue::Defined(num as f64 / den as f64)
    }
}

/// `TP / (TP + FP)`, undefined when nothing was predicted as the label
pub fn precision(c: &Counts, zero_division: ZeroDivision) -> MetricValue {
    ratio(c.tp, c.tp + c.fp, zero_division)
}

/// `TP / (TP + FN)`, undefined when the label never truly occurs
pub fn recall(c: &Counts, zero_division: ZeroDivision) -> MetricValue {
    ratio(c.tp, c.tp + c.fn_, zero_division)
}

/// Harmonic mean of precision and recall.
///
/// Precision and recall are taken under `Zero` coercion internally so the
/// undefined marker never enters the arithmetic; the caller's policy
/// governs the result only when `p + r == 0`.
pub fn f1(c: &Counts, zero_division: ZeroDivision) -> MetricValue {
    let p = precision(c, ZeroDivision::Zero).or_zero();
    let r = recall(c, ZeroDivision::Zero).or_zero();

    if p + r == 0.0 {
        match zero_division {
            ZeroDivision::None => MetricValue::Undefined,
            ZeroDivision::Zero => MetricValue::Defined(0.0),
        }
    } else {
        MetricValue::Defined(2.0 * p * r / (p + r))
    }
}

/// `TP / (TP + FP + FN)`, undefined when the label appears on neither side
pub fn iou(c: &Counts, zero_division: ZeroDivision) -> MetricValue {
    ratio(c.tp, c.tp + c.fp + c.fn_, zero_division)
}
