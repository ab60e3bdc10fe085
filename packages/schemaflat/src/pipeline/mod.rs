//! Pipeline orchestration

pub mod result;
pub mod transform;

pub use result::{CategoryCounts, TransformReport, Transformed};
pub use transform::{transform, transform_with_report};
