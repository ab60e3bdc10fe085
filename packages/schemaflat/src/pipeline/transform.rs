//! Transform entry point
//!
//! validate → parse → extract → rewrite → assemble. Options are checked
//! before the source is touched; a missing root or schema degrades to "".

use tracing::{debug, info, warn};

use super::result::{TransformReport, Transformed};
use crate::config::TransformConfig;
use crate::errors::Result;
use crate::features::assembly::Assembler;
use crate::features::extraction::EntityExtractor;
use crate::features::parsing::{SchemaParser, TreeSitterParser};
use crate::features::rewriting::ReferenceRewriter;

/// Flatten `source` into standalone `export type` declarations
pub fn transform(source: &str, config: TransformConfig) -> Result<String> {
    transform_with_report(source, config).map(|t| t.output)
}

/// Like [`transform`], also returning what was found and emitted
pub fn transform_with_report(source: &str, config: TransformConfig) -> Result<Transformed> {
    let config = config.build()?;
    debug!(config = %config.describe(), "configuration validated");

    let tree = TreeSitterParser::typescript().parse(source)?;
    let mut catalog = EntityExtractor::new(&config).extract(&tree)?;

    let mut report = TransformReport {
        schema: config.schema().to_string(),
        database_found: catalog.database_found,
        schema_found: catalog.schema_found,
        ..Default::default()
    };
    if !catalog.schema_found {
        warn!(schema = config.schema(), "nothing to emit");
        return Ok(Transformed {
            output: String::new(),
            report,
        });
    }

    report.references_rewritten = ReferenceRewriter::new(&catalog.references).rewrite_all(&mut catalog.entities);

    let assembled = Assembler::new().assemble(catalog.json.as_deref(), &catalog.entities);
    report.json_emitted = assembled.json_emitted;
    report.dropped = assembled.dropped;
    report.emitted = assembled.counts;

    info!(
        schema = %report.schema,
        declarations = report.declarations(),
        dropped = report.dropped,
        references = report.references_rewritten,
        "transform complete"
    );
    Ok(Transformed {
        output: assembled.text,
        report,
    })
}
