//! Assembly Feature
//!
//! Numeric-record filter and final declaration join.

mod assembler;

pub use assembler::{is_numeric_record, Assembled, Assembler, DECLARATION_SEPARATOR};
