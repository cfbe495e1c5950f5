//! Scoring and classification
//!
//! Folds answers into a per-dimension score vector and thresholds it
//! into one of 16 registered type codes.

pub mod accumulator;
pub mod classifier;
pub mod profiles;
pub mod types;

pub use accumulator::accumulate;
pub use classifier::{classify, Classification, TypeCode};
pub use profiles::TypeProfile;
pub use types::{Answer, Dimension, ScoreVector};
