//! Classification-evaluation statistics
//!
//! Fast, exact precision/recall/F1/IoU and confusion matrices for binary
//! and multiclass label arrays, with explicit handling of zero-denominator
//! cases instead of NaN surprises.
//!
//! ## Architecture
//!
//! - `labels`: label-space resolution (sorted union or explicit order)
//! - `counts`: single-pass per-label TP/FP/FN/TN counting
//! - `confusion`: confusion-matrix accumulation
//! - `metrics`: count-to-ratio derivation under a [`ZeroDivision`] policy
//! - `average`: none/micro/macro collapsing
//! - `binary` / `multiclass`: the public surfaces
//! - `report`: sklearn-style text report
//!
//! ## Example
//!
//! ```
//! use medir::{f1_score, Average, ZeroDivision};
//!
//! let y_true = vec![1u8, 2, 3, 1, 2, 3];
//! let y_pred = vec![1u8, 2, 3, 2, 3, 1];
//!
//! let f1 = f1_score(&y_true, &y_pred, None, ZeroDivision::None, Average::Micro)?;
//! assert_eq!(f1.as_scalar().unwrap().as_f64(), 0.5);
//! # Ok::<(), medir::StatsError>(())
//! ```
//!
//! A ratio whose denominator is zero is never divided: it becomes
//! [`MetricValue::Undefined`] under `ZeroDivision::None` (rendered as
//! `null`/NaN at the boundary) or `0.0` under `ZeroDivision::Zero`.

pub mod average;
pub mod binary;
pub mod confusion;
pub mod counts;
pub mod error;
pub mod labels;
pub mod metrics;
pub mod multiclass;
pub mod report;


pub use average::{Aggregate, Average};
pub use binary::{
    binary_f1_score, binary_iou, binary_precision, binary_recall, binary_stats, binary_tp_fp_fn,
    BinaryStats,
};
pub use confusion::ConfusionMatrix;
pub use counts::{BinaryLabel, Counts};
pub use error::{Result, StatsError};
pub use labels::{Label, LabelSpace};
pub use metrics::{MetricValue, ZeroDivision};
pub use multiclass::{confusion_matrix, f1_score, precision, recall, stats, Stats};
pub use report::classification_report;
