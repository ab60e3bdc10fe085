//! Formatting Feature
//!
//! Naming functions that compute output identifiers, either supplied as
//! closures or compiled from configuration-file templates.

mod policy;
mod template;

pub use policy::{FormatterPolicy, NameFormatter, PairFormatter};
pub use template::{CaseStyle, NamingTemplate, TemplateAxis};
