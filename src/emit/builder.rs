//! Fluent node builders.
//!
//! Every struct gets a `<Name>Builder` type with one slot and one setter per
//! field and a `Build()` that allocates the node, plus a factory method on
//! the generated `Builder` struct.

use super::{Artifact, Block, Fragment, Section, classified};
use crate::dialect::Dialect;
use crate::field::FieldCategory;
use crate::schema::{FieldSchema, Schema, StructSchema};

pub fn emit<'s>(schema: &'s Schema<'_>, dialect: &Dialect) -> Vec<Fragment<'s>> {
    let mut fragments = Vec::with_capacity(schema.len() * 2);
    for s in schema {
        fragments.push(Fragment {
            artifact: Artifact::Builders,
            section: Section::NodeBuilders,
            struct_name: s.name,
            tag: None,
            body: node_builder(s, dialect),
        });
    }
    for s in schema {
        fragments.push(Fragment {
            artifact: Artifact::Builders,
            section: Section::BuilderApi,
            struct_name: s.name,
            tag: None,
            body: factory(s),
        });
    }
    fragments
}

fn node_builder(s: &StructSchema<'_>, dialect: &Dialect) -> Block {
    let name = s.name;
    let base = match s.base_type {
        Some(base_type) => format!("{base_type}Builder"),
        None => format!("{}Builder", dialect.root_type),
    };

    let mut b = Block::new();
    open!(b, "struct {name}Builder : {base} {{");

    let slots: Vec<_> = classified(&s.fields, dialect)
        .map(|(field, category)| (field, category, slot_type(field, category, dialect)))
        .collect();

    if !slots.is_empty() {
        b.blank();
    }
    for (field, _, slot) in &slots {
        ln!(b, "{slot} {} {{}};", field.name);
    }

    for (field, _, slot) in &slots {
        b.blank();
        open!(b, "inline {name}Builder* {}({slot} builder) {{", setter_name(field.name));
        ln!(b, "{} = builder;", field.name);
        ln!(b, "return this;");
        b.close("}");
    }

    b.blank();
    open!(b, "inline {}* Build() override {{", dialect.root_type);
    ln!(b, "{name}* retn = allocator->Allocate<{name}>(1);");
    ln!(b, "retn->_kind = {}::{};", dialect.tag_enum, s.primary_tag());
    for (field, category, _) in &slots {
        let field_name = field.name;
        match category {
            FieldCategory::Token | FieldCategory::TokenList => {
                ln!(b, "retn->{field_name} = {field_name};");
            }
            FieldCategory::NodeList
            | FieldCategory::SeparatedNodeList
            | FieldCategory::NodeReference => {
                ln!(
                    b,
                    "retn->{field_name} = {field_name} != nullptr ? ({}){field_name}->Build() : nullptr;",
                    field.raw_type
                );
            }
        }
    }
    ln!(b, "return retn;");
    b.close("}");
    b.blank();
    b.close("};");
    b
}

fn factory(s: &StructSchema<'_>) -> Block {
    let name = s.name;
    let mut b = Block::new();
    open!(b, "inline {name}Builder* {name}() {{");
    ln!(b, "{name}Builder* retn = allocator->Allocate<{name}Builder>(1);");
    ln!(b, "new (retn) {name}Builder();");
    ln!(b, "retn->allocator = allocator;");
    ln!(b, "return retn;");
    b.close("}");
    b
}

/// Type of the builder slot holding a field.
pub fn slot_type(field: &FieldSchema<'_>, category: FieldCategory, dialect: &Dialect) -> String {
    match category {
        FieldCategory::Token => dialect.token_type.clone(),
        FieldCategory::TokenList => field.raw_type.to_string(),
        FieldCategory::NodeList => format!("{}Builder*", dialect.node_list_marker),
        FieldCategory::SeparatedNodeList => format!("{}Builder*", dialect.separated_list_marker),
        FieldCategory::NodeReference => {
            let target = field.raw_type.strip_suffix('*').unwrap_or(&*field.raw_type);
            format!("{target}Builder*")
        }
    }
}

/// `expr` -> `Expr`
pub fn setter_name(field_name: &str) -> String {
    let mut chars = field_name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
