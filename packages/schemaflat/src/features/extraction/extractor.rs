//! Entity Extractor
//!
//! Walks `Database → <schema> → <group> → <entity>` and collects one
//! formatted entity per accepted body. Each level is a flat match over node
//! kinds; nothing is rewritten here.

use tracing::{debug, info, trace, warn};

use super::reference_table::{ReferenceKey, ReferenceTable};
use crate::config::ValidatedConfig;
use crate::errors::{Result, SchemaflatError};
use crate::features::parsing::{declared_name, Declaration, SchemaTree, SyntaxKind, SyntaxNode};
use crate::shared::models::{EntityCategory, FormattedEntity, OperationKind, RawEntity};

/// Root declaration holding every schema
pub const DATABASE_ROOT: &str = "Database";

/// Shared JSON alias, copied through untouched
pub const JSON_DECLARATION: &str = "Json";

/// Everything found in one walk
#[derive(Debug, Clone, Default)]
pub struct ExtractedCatalog {
    /// `Json` statement byte for byte, including its `;` if it had one
    pub json: Option<String>,
    /// Entities in emission order
    pub entities: Vec<FormattedEntity>,
    pub references: ReferenceTable,
    pub database_found: bool,
    pub schema_found: bool,
}

impl ExtractedCatalog {
    pub fn count(&self, category: EntityCategory) -> usize {
        self.entities.iter().filter(|e| e.category() == category).count()
    }
}

/// Named member of a record: `name: <type>`
struct Member<'a> {
    name: String,
    ty: &'a SyntaxNode,
}

/// Entity Extractor
pub struct EntityExtractor<'c> {
    config: &'c ValidatedConfig,
}

impl<'c> EntityExtractor<'c> {
    pub fn new(config: &'c ValidatedConfig) -> Self {
        Self { config }
    }

    /// Walk the tree; a missing root or schema yields an empty catalog
    pub fn extract(&self, tree: &SchemaTree) -> Result<ExtractedCatalog> {
        let mut catalog = ExtractedCatalog {
            json: find_declaration(tree, JSON_DECLARATION).map(|decl| verbatim_statement(tree, &decl)),
            ..Default::default()
        };

        let Some(database) = find_declaration(tree, DATABASE_ROOT) else {
            warn!("no `{}` declaration found", DATABASE_ROOT);
            return Ok(catalog);
        };
        let Some(root) = declaration_body(database.node) else {
            warn!("`{}` is not a structural type", DATABASE_ROOT);
            return Ok(catalog);
        };
        catalog.database_found = true;

        let schema = self.config.schema();
        let Some(schema_body) = members(root, tree)
            .find(|m| m.name == schema)
            .map(|m| m.ty)
            .filter(|ty| ty.kind.is_record())
        else {
            warn!(schema, "schema not found in `{}`", DATABASE_ROOT);
            return Ok(catalog);
        };
        catalog.schema_found = true;

        let groups: Vec<(EntityCategory, &SyntaxNode)> = members(schema_body, tree)
            .filter_map(|m| match EntityCategory::from_group_key(&m.name) {
                Some(category) => Some((category, m.ty)),
                None => {
                    debug!(group = %m.name, "ignoring unknown schema group");
                    None
                }
            })
            .collect();

        for category in EntityCategory::ALL {
            for (_, group) in groups.iter().filter(|(c, _)| *c == category) {
                if !group.kind.is_record() {
                    debug!(%category, "group is not a record, skipping");
                    continue;
                }
                self.visit_group(category, group, tree, &mut catalog)?;
            }
            debug!(%category, count = catalog.count(category), "group collected");
        }

        info!(
            schema,
            entities = catalog.entities.len(),
            references = catalog.references.len(),
            "extraction complete"
        );
        Ok(catalog)
    }

    fn visit_group(
        &self,
        category: EntityCategory,
        group: &SyntaxNode,
        tree: &SchemaTree,
        catalog: &mut ExtractedCatalog,
    ) -> Result<()> {
        match category {
            EntityCategory::Table | EntityCategory::View => self.visit_table_like(category, group, tree, catalog),
            EntityCategory::Enum => self.visit_enums(group, tree, catalog),
            EntityCategory::CompositeType => self.visit_composites(group, tree, catalog),
            EntityCategory::Function => self.visit_functions(group, tree, catalog),
        }
    }

    fn visit_table_like(
        &self,
        category: EntityCategory,
        group: &SyntaxNode,
        tree: &SchemaTree,
        catalog: &mut ExtractedCatalog,
    ) -> Result<()> {
        for entity in members(group, tree) {
            if !entity.ty.kind.is_record() {
                debug!(%category, name = %entity.name, "not a record, skipping");
                continue;
            }

            for member in members(entity.ty, tree) {
                let Some(operation) = OperationKind::from_name(&member.name) else {
                    trace!(name = %entity.name, member = %member.name, "unknown operation");
                    continue;
                };
                if !self.config.is_retained(operation) {
                    continue;
                }

                let accepted = if operation.expects_tuple() {
                    member.ty.kind == SyntaxKind::TupleType
                } else {
                    member.ty.kind.is_record()
                };
                if !accepted {
                    debug!(name = %entity.name, %operation, "unexpected body shape, skipping");
                    continue;
                }

                let raw = RawEntity::new(category, &entity.name, tree.text(member.ty)).with_operation(operation);
                self.push(raw, catalog)?;
            }
        }
        Ok(())
    }

    fn visit_enums(&self, group: &SyntaxNode, tree: &SchemaTree, catalog: &mut ExtractedCatalog) -> Result<()> {
        for entity in members(group, tree) {
            if !is_literal_union(entity.ty) {
                debug!(name = %entity.name, "enum body is not a literal union, skipping");
                continue;
            }
            let raw = RawEntity::new(EntityCategory::Enum, &entity.name, tree.text(entity.ty));
            self.push(raw, catalog)?;
        }
        Ok(())
    }

    fn visit_composites(&self, group: &SyntaxNode, tree: &SchemaTree, catalog: &mut ExtractedCatalog) -> Result<()> {
        for entity in members(group, tree) {
            if !entity.ty.kind.is_record() {
                debug!(name = %entity.name, "composite type is not a record, skipping");
                continue;
            }
            let raw = RawEntity::new(EntityCategory::CompositeType, &entity.name, tree.text(entity.ty));
            self.push(raw, catalog)?;
        }
        Ok(())
    }

    fn visit_functions(&self, group: &SyntaxNode, tree: &SchemaTree, catalog: &mut ExtractedCatalog) -> Result<()> {
        for function in members(group, tree) {
            if !function.ty.kind.is_record() {
                debug!(name = %function.name, "function signature is not a record, skipping");
                continue;
            }

            for grouping in members(function.ty, tree) {
                if !is_named_reference(grouping.ty) {
                    trace!(name = %function.name, grouping = %grouping.name, "not a named type reference, skipping");
                    continue;
                }
                let raw = RawEntity::new(EntityCategory::Function, &function.name, tree.text(grouping.ty))
                    .with_grouping(&grouping.name);
                self.push(raw, catalog)?;
            }
        }
        Ok(())
    }

    /// Format and collect; enums and composite types also become reference targets
    fn push(&self, raw: RawEntity, catalog: &mut ExtractedCatalog) -> Result<()> {
        let key = raw
            .category
            .is_referenceable()
            .then(|| ReferenceKey::new(self.config.schema(), raw.category, &raw.name));
        let entity = self.format(raw)?;
        if let Some(key) = key {
            catalog.references.insert(key, &entity.formatted_name);
        }
        catalog.entities.push(entity);
        Ok(())
    }

    /// Apply the formatter policy; an empty name is a caller error
    fn format(&self, raw: RawEntity) -> Result<FormattedEntity> {
        let formatted = self.config.formatters().format(&raw);
        if formatted.trim().is_empty() {
            return Err(SchemaflatError::validation(format!(
                "formatter returned an empty name for {} `{}`",
                raw.category, raw.name
            )));
        }
        trace!(category = %raw.category, name = %raw.name, formatted = %formatted, "formatted entity");
        Ok(FormattedEntity::new(raw, formatted))
    }
}

/// First top-level declaration with the given name
fn find_declaration<'t>(tree: &'t SchemaTree, name: &str) -> Option<Declaration<'t>> {
    tree.declarations()
        .find(|decl| declared_name(decl.node, tree).as_deref() == Some(name))
}

/// Structural body of an alias (`= { ... }`) or interface (`{ ... }`)
fn declaration_body(node: &SyntaxNode) -> Option<&SyntaxNode> {
    let body = match node.kind {
        SyntaxKind::TypeAlias => node.child_by_field("value"),
        SyntaxKind::Interface => node
            .child_by_field("body")
            .or_else(|| node.find_child(&SyntaxKind::ObjectType)),
        _ => None,
    }?;
    body.kind.is_record().then_some(body)
}

/// Statement text exactly as written
fn verbatim_statement(tree: &SchemaTree, decl: &Declaration<'_>) -> String {
    tree.text(decl.statement).to_string()
}

/// Named, typed members of a record in source order
///
/// Index signatures (`[_ in never]: never`) and members without a type
/// annotation are skipped.
fn members<'a>(record: &'a SyntaxNode, tree: &'a SchemaTree) -> impl Iterator<Item = Member<'a>> + 'a {
    record
        .children
        .iter()
        .filter(|child| child.kind == SyntaxKind::PropertySignature)
        .filter_map(move |child| {
            let name = declared_name(child, tree)?;
            let ty = child
                .child_by_field("type")
                .filter(|annotation| annotation.kind == SyntaxKind::TypeAnnotation)
                .and_then(|annotation| annotation.first_child())?;
            Some(Member { name, ty })
        })
}

/// `Foo`, `ns.Foo`, `Record<...>` or a `Database[...]` path
///
/// Inline structures, primitives, literals, unions, arrays and tuples are
/// not references to a named type.
fn is_named_reference(node: &SyntaxNode) -> bool {
    matches!(
        node.kind,
        SyntaxKind::TypeIdentifier | SyntaxKind::GenericType | SyntaxKind::LookupType
    )
}

/// `"a"`, or `"a" | "b" | ...` with every leaf a literal
fn is_literal_union(node: &SyntaxNode) -> bool {
    match node.kind {
        SyntaxKind::LiteralType => true,
        SyntaxKind::UnionType => !node.children.is_empty() && node.children.iter().all(is_literal_union),
        _ => false,
    }
}
