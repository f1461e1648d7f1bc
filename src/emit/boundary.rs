//! `GetFirstToken` / `GetLastToken` arms.
//!
//! The first-token arm walks fields in declaration order, the last-token arm
//! in reverse. Both return at the first field holding a present token and
//! fall through to the absent token.

use super::{Artifact, Block, Fragment, Section, cast, classified, open_case};
use crate::dialect::Dialect;
use crate::field::FieldCategory;
use crate::schema::{FieldSchema, Schema, StructSchema};

pub fn emit<'s>(schema: &'s Schema<'_>, dialect: &Dialect) -> Vec<Fragment<'s>> {
    let mut fragments = Vec::with_capacity(schema.len() * 2);
    for s in schema {
        for &tag in &s.tags {
            for (section, body) in [
                (Section::FirstToken, first_token(s, tag, dialect)),
                (Section::LastToken, last_token(s, tag, dialect)),
            ] {
                fragments.push(Fragment {
                    artifact: Artifact::TokenBoundary,
                    section,
                    struct_name: s.name,
                    tag: Some(tag),
                    body,
                });
            }
        }
    }
    fragments
}

fn first_token(s: &StructSchema<'_>, tag: &str, dialect: &Dialect) -> Block {
    let mut b = Block::new();
    open_case(&mut b, dialect, tag);
    if s.has_fields() {
        cast(&mut b, s.name, "p", "syntaxBase");
    }
    for (field, category) in classified(&s.fields, dialect) {
        first_token_check(&mut b, field, category, dialect);
    }
    ln!(b, "return {}();", dialect.token_type);
    b.close("}");
    b
}

fn last_token(s: &StructSchema<'_>, tag: &str, dialect: &Dialect) -> Block {
    let mut b = Block::new();
    open_case(&mut b, dialect, tag);
    if s.has_fields() {
        cast(&mut b, s.name, "p", "syntaxBase");
    }
    for (field, category) in classified(&s.fields, dialect).rev() {
        last_token_check(&mut b, field, category, dialect);
    }
    ln!(b, "return {}();", dialect.token_type);
    b.close("}");
    b
}

fn first_token_check(b: &mut Block, field: &FieldSchema<'_>, category: FieldCategory, dialect: &Dialect) {
    let x = format!("p->{}", field.name);
    match category {
        FieldCategory::Token => ln!(b, "if({x}.IsValid()) return {x};"),
        FieldCategory::TokenList => {
            ln!(b, "if({x} != nullptr && {x}->size != 0) return {x}->array[0];")
        }
        FieldCategory::NodeList => {
            ln!(b, "if({x} != nullptr && {x}->size != 0) return GetFirstToken({x}->array[0]);")
        }
        FieldCategory::SeparatedNodeList => {
            ln!(b, "if({x} != nullptr && {x}->itemCount != 0) return GetFirstToken({x}->items[0]);")
        }
        FieldCategory::NodeReference => {
            ln!(b, "if({x} != nullptr) return GetFirstToken(({}*){x});", dialect.root_type)
        }
    }
}

fn last_token_check(b: &mut Block, field: &FieldSchema<'_>, category: FieldCategory, dialect: &Dialect) {
    let x = format!("p->{}", field.name);
    match category {
        FieldCategory::Token => ln!(b, "if({x}.IsValid()) return {x};"),
        FieldCategory::TokenList => {
            ln!(b, "if({x} != nullptr && {x}->size != 0) return {x}->array[{x}->size - 1];")
        }
        FieldCategory::NodeList => ln!(
            b,
            "if({x} != nullptr && {x}->size != 0) return GetLastToken({x}->array[{x}->size - 1]);"
        ),
        FieldCategory::SeparatedNodeList => {
            // items and separators live in separate arrays, so the later of
            // the two is found by ordinal
            let token = &dialect.token_type;
            open!(b, "if({x} != nullptr && {x}->itemCount != 0) {{");
            ln!(b, "{token} a = GetLastToken({x}->items[{x}->itemCount - 1]);");
            ln!(
                b,
                "{token} b = {x}->separatorCount == 0 ? {token}() : {x}->separators[{x}->separatorCount - 1];"
            );
            ln!(b, "{token} last = a.GetId() > b.GetId() ? a : b;");
            ln!(b, "if(last.IsValid()) return last;");
            b.close("}");
        }
        FieldCategory::NodeReference => {
            ln!(b, "if({x} != nullptr) return GetLastToken(({}*){x});", dialect.root_type)
        }
    }
}
