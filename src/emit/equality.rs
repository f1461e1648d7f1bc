//! Structural equality arms for `NodesEqual`.
//!
//! The caller has already checked that both nodes are non-null and share a
//! kind, so an arm only compares fields.

use super::{Artifact, Block, Fragment, Section, cast, classified, member, open_case};
use crate::dialect::Dialect;
use crate::field::FieldCategory;
use crate::schema::{Schema, StructSchema};

/// One arm per struct, dispatched on its primary tag.
pub fn emit<'s>(schema: &'s Schema<'_>, dialect: &Dialect) -> Vec<Fragment<'s>> {
    schema
        .iter()
        .map(|s| Fragment {
            artifact: Artifact::Equality,
            section: Section::Cases,
            struct_name: s.name,
            tag: Some(s.primary_tag()),
            body: arm(s, dialect),
        })
        .collect()
}

fn arm(s: &StructSchema<'_>, dialect: &Dialect) -> Block {
    let name = s.name;
    let mut b = Block::new();
    open_case(&mut b, dialect, s.primary_tag());
    cast(&mut b, name, "pA", "a");
    cast(&mut b, name, "pB", "b");
    for (field, category) in classified(&s.fields, dialect) {
        let lhs = member(dialect, "pA", field, category);
        let rhs = member(dialect, "pB", field, category);
        ln!(b, "if(!{}({lhs}, {rhs}, options)) return false;", compare_fn(category));
    }
    ln!(b, "return true;");
    b.close("}");
    b
}

fn compare_fn(category: FieldCategory) -> &'static str {
    match category {
        FieldCategory::Token => "TokensEqual",
        FieldCategory::TokenList => "TokenListsEqual",
        FieldCategory::NodeList => "SyntaxListEqual",
        FieldCategory::SeparatedNodeList => "SeparatedSyntaxListEqual",
        FieldCategory::NodeReference => "NodesEqual",
    }
}
