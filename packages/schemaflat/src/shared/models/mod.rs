//! Shared models

mod counts;
mod entity;
mod span;

pub use counts::CategoryCounts;
pub use entity::{EntityCategory, FormattedEntity, OperationKind, RawEntity};
pub use span::Span;
