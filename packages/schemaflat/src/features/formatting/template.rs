//! Naming templates
//!
//! Configuration-file form of the formatter policy: `"{name}{operation}"`
//! plus an optional case style, compiled once into the same closures a
//! library caller would pass.

use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::policy::{NameFormatter, PairFormatter};
use crate::config::{ConfigError, ConfigResult};

/// Case conversion applied to the rendered template
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStyle {
    #[default]
    Preserve,
    Pascal,
    Camel,
    Snake,
    UpperSnake,
}

impl CaseStyle {
    pub fn apply(&self, text: &str) -> String {
        match self {
            CaseStyle::Preserve => text.to_string(),
            CaseStyle::Pascal => text.to_case(Case::Pascal),
            CaseStyle::Camel => text.to_case(Case::Camel),
            CaseStyle::Snake => text.to_case(Case::Snake),
            CaseStyle::UpperSnake => text.to_case(Case::Constant),
        }
    }
}

/// Which naming function a template stands in for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateAxis {
    Enum,
    CompositeType,
    Table,
    Function,
}

impl TemplateAxis {
    fn as_str(&self) -> &'static str {
        match self {
            TemplateAxis::Enum => "enums",
            TemplateAxis::CompositeType => "composite_types",
            TemplateAxis::Table => "tables",
            TemplateAxis::Function => "functions",
        }
    }

    /// Placeholder carrying the second formatter argument, if any
    fn member_placeholder(&self) -> Option<Placeholder> {
        match self {
            TemplateAxis::Enum | TemplateAxis::CompositeType => None,
            TemplateAxis::Table => Some(Placeholder::Operation),
            TemplateAxis::Function => Some(Placeholder::Group),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placeholder {
    Name,
    Operation,
    Group,
}

impl Placeholder {
    fn parse(key: &str) -> Option<Self> {
        match key {
            "name" => Some(Placeholder::Name),
            "operation" => Some(Placeholder::Operation),
            "group" => Some(Placeholder::Group),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(Placeholder),
}

/// Naming template, e.g. `{ template: "{name}{operation}", case: pascal }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamingTemplate {
    pub template: String,
    #[serde(default)]
    pub case: CaseStyle,
}

impl NamingTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            case: CaseStyle::Preserve,
        }
    }

    pub fn with_case(mut self, case: CaseStyle) -> Self {
        self.case = case;
        self
    }

    /// Split into literal text and placeholders, checking them against the axis
    fn segments(&self, axis: TemplateAxis) -> ConfigResult<Vec<Segment>> {
        let invalid = |reason: String| {
            ConfigError::Validation(format!(
                "naming.{} template {:?}: {}",
                axis.as_str(),
                self.template,
                reason
            ))
        };

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = self.template.as_str();

        while let Some(open) = rest.find(&['{', '}'][..]) {
            if rest[open..].starts_with('}') {
                return Err(invalid("unmatched `}`".to_string()));
            }
            literal.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after
                .find('}')
                .ok_or_else(|| invalid("unclosed `{`".to_string()))?;
            let key = &after[..close];

            let placeholder = Placeholder::parse(key)
                .filter(|p| *p == Placeholder::Name || Some(*p) == axis.member_placeholder())
                .ok_or_else(|| invalid(format!("unknown placeholder `{{{}}}`", key)))?;

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Slot(placeholder));
            rest = &after[close + 1..];
        }
        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        if !segments.contains(&Segment::Slot(Placeholder::Name)) {
            return Err(invalid("must contain `{name}`".to_string()));
        }
        Ok(segments)
    }

    pub fn validate(&self, axis: TemplateAxis) -> ConfigResult<()> {
        self.segments(axis).map(|_| ())
    }

    /// Compile into a single-argument formatter (enums, composite types)
    pub fn compile_name(&self, axis: TemplateAxis) -> ConfigResult<NameFormatter> {
        let segments = self.segments(axis)?;
        let case = self.case;
        Ok(Arc::new(move |name: &str| case.apply(&render(&segments, name, ""))))
    }

    /// Compile into a two-argument formatter (tables/views, functions)
    pub fn compile_pair(&self, axis: TemplateAxis) -> ConfigResult<PairFormatter> {
        let segments = self.segments(axis)?;
        let case = self.case;
        Ok(Arc::new(move |name: &str, member: &str| {
            case.apply(&render(&segments, name, member))
        }))
    }
}

fn render(segments: &[Segment], name: &str, member: &str) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Slot(Placeholder::Name) => out.push_str(name),
            Segment::Slot(Placeholder::Operation | Placeholder::Group) => out.push_str(member),
        }
    }
    out
}
