//! Classifier model artifact loading and inference.
//!
//! The dashboard never trains anything; it consumes a pre-trained
//! gradient-boosted stump classifier exported as a versioned JSON
//! artifact and applies it read-only for the lifetime of the process.

mod gbdt;

pub use gbdt::{GbdtModel, ModelError, Stump, sigmoid};
