//! Adapters that sit outside the core rendering path.
//!
//! The core consumes normalized records only; turning a raw feed into those
//! records is the job of a `Preprocessor`.

pub mod preprocess;

pub use preprocess::{DailySeriesPreprocessor, Preprocessor, RawCounter, RawDailyRow};
