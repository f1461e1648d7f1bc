//! Skipped-token accounting arms for `FindSkippedTokens::TouchNode`.
//!
//! Structs without fields own no tokens and get no arm; their kinds reach
//! the switch's default path, which does nothing.

use super::{Artifact, Block, Fragment, Section, cast, classified, member, open_case};
use crate::dialect::Dialect;
use crate::field::FieldCategory;
use crate::schema::{Schema, StructSchema};

pub fn emit<'s>(schema: &'s Schema<'_>, dialect: &Dialect) -> Vec<Fragment<'s>> {
    let mut fragments = Vec::with_capacity(schema.len());
    for s in schema {
        if !s.has_fields() {
            tracing::debug!(name = s.name, "no touch arm for struct without fields");
            continue;
        }
        for &tag in &s.tags {
            fragments.push(Fragment {
                artifact: Artifact::Toucher,
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
    cast(&mut b, s.name, "p", "syntaxBase");
    for (field, category) in classified(&s.fields, dialect) {
        ln!(b, "{}({});", touch_fn(category), member(dialect, "p", field, category));
    }
    ln!(b, "break;");
    b.close("}");
    b
}

fn touch_fn(category: FieldCategory) -> &'static str {
    match category {
        FieldCategory::Token => "TouchToken",
        FieldCategory::TokenList => "TouchTokenList",
        FieldCategory::NodeList => "TouchSyntaxList",
        FieldCategory::SeparatedNodeList => "TouchSeparatedSyntaxList",
        FieldCategory::NodeReference => "TouchNode",
    }
}
