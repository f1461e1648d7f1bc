//! Node printer arms for `NodePrinter::PrintNode`.

use super::{Artifact, Block, Fragment, Section, cast, classified, member, open_case};
use crate::dialect::Dialect;
use crate::field::FieldCategory;
use crate::schema::{Schema, StructSchema};

/// One arm per (struct, tag) pair. Structs sharing a layout print the same
/// body under every tag.
pub fn emit<'s>(schema: &'s Schema<'_>, dialect: &Dialect) -> Vec<Fragment<'s>> {
    let mut fragments = Vec::with_capacity(schema.len());
    for s in schema {
        for &tag in &s.tags {
            fragments.push(Fragment {
                artifact: Artifact::Printer,
                section: Section::Cases,
                struct_name: s.name,
                tag: Some(tag),
                body: arm(s, tag, dialect),
            });
        }
    }
    fragments
}

fn arm(s: &StructSchema<'_>, tag: &str, dialect: &Dialect) -> Block {
    let mut b = Block::new();
    open_case(&mut b, dialect, tag);
    if s.has_fields() {
        cast(&mut b, s.name, "p", "syntaxBase");
    }
    ln!(b, "PrintNodeHeader(\"{}\", syntaxBase);", s.name);
    ln!(b, "indent++;");
    for (field, category) in classified(&s.fields, dialect) {
        ln!(b, "PrintFieldName(\"{}\");", field.name);
        ln!(b, "{}({});", print_fn(category), member(dialect, "p", field, category));
    }
    ln!(b, "indent--;");
    ln!(b, "break;");
    b.close("}");
    b
}

fn print_fn(category: FieldCategory) -> &'static str {
    match category {
        FieldCategory::Token => "PrintToken",
        FieldCategory::TokenList => "PrintTokenList",
        FieldCategory::NodeList => "PrintSyntaxList",
        FieldCategory::SeparatedNodeList => "PrintSeparatedSyntaxList",
        FieldCategory::NodeReference => "PrintNode",
    }
}
