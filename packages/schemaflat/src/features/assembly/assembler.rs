//! Assembler
//!
//! Last stage: drops bodies that cannot be expressed as a flat alias and
//! joins the rest into one module text.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::shared::models::{CategoryCounts, FormattedEntity};

/// `Record<number, ...>`: numeric-keyed dictionary, never emitted
static NUMERIC_RECORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Record<\s*number\s*,").expect("numeric record pattern is valid"));

/// Separator between declarations
pub const DECLARATION_SEPARATOR: &str = "\n\n";

/// Joined output plus filter statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembled {
    pub text: String,
    pub json_emitted: bool,
    /// Emitted entity declarations, Json excluded
    pub counts: CategoryCounts,
    pub dropped: usize,
}

pub fn is_numeric_record(body: &str) -> bool {
    NUMERIC_RECORD.is_match(body)
}

/// Assembler
#[derive(Debug, Default)]
pub struct Assembler;

impl Assembler {
    pub fn new() -> Self {
        Self
    }

    /// Json first, byte for byte, then every surviving entity in order
    ///
    /// Non-empty output ends with exactly one newline.
    pub fn assemble(&self, json: Option<&str>, entities: &[FormattedEntity]) -> Assembled {
        let mut declarations: Vec<String> = Vec::with_capacity(entities.len() + 1);
        if let Some(json) = json {
            declarations.push(json.to_string());
        }

        let mut counts = CategoryCounts::default();
        let mut dropped = 0;
        for entity in entities {
            if is_numeric_record(entity.body()) {
                debug!(entity = %entity.formatted_name, "numeric-keyed record, dropping");
                dropped += 1;
                continue;
            }
            counts.record(entity.category());
            declarations.push(entity.declaration());
        }

        let mut text = declarations.join(DECLARATION_SEPARATOR);
        if !text.is_empty() {
            text.push('\n');
        }
        Assembled {
            text,
            json_emitted: json.is_some(),
            counts,
            dropped,
        }
    }
}
