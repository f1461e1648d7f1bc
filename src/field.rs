//! Field classification shared by every emitter.
//!
//! Each emitter matches on [`FieldCategory`] and nothing else, so two
//! artifacts can never disagree on how a field is traversed.

use crate::dialect::Dialect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldCategory {
    /// A single token stored by value.
    Token,
    /// A sequence of tokens.
    TokenList,
    /// A homogeneous list of child nodes.
    NodeList,
    /// Child nodes interleaved with separator tokens, stored as two arrays.
    SeparatedNodeList,
    /// A pointer to one child node.
    NodeReference,
}

impl FieldCategory {
    pub const ALL: [FieldCategory; 5] = [
        FieldCategory::Token,
        FieldCategory::TokenList,
        FieldCategory::NodeList,
        FieldCategory::SeparatedNodeList,
        FieldCategory::NodeReference,
    ];
}

/// Maps a field's raw type to its category. First match wins:
///
/// 1. separated list prefix
/// 2. node list prefix
/// 3. exact token type
/// 4. token list prefix
/// 5. anything else is a node reference
pub fn classify(raw_type: &str, dialect: &Dialect) -> FieldCategory {
    if raw_type.starts_with(dialect.separated_list_marker.as_str()) {
        FieldCategory::SeparatedNodeList
    } else if raw_type.starts_with(dialect.node_list_marker.as_str()) {
        FieldCategory::NodeList
    } else if raw_type == dialect.token_type {
        FieldCategory::Token
    } else if raw_type.starts_with(dialect.token_list_marker.as_str()) {
        FieldCategory::TokenList
    } else {
        FieldCategory::NodeReference
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldCategory as C, *};

    #[test]
    fn categories() {
        let d = Dialect::default();
        assert_eq!(classify("SyntaxToken", &d), C::Token);
        assert_eq!(classify("TokenList*", &d), C::TokenList);
        assert_eq!(classify("SyntaxList<AttributeSyntax>*", &d), C::NodeList);
        assert_eq!(
            classify("SeparatedSyntaxList<ExpressionSyntax>*", &d),
            C::SeparatedNodeList
        );
        assert_eq!(classify("ExpressionSyntax*", &d), C::NodeReference);
    }

    #[test]
    fn token_type_is_an_exact_match() {
        let d = Dialect::default();
        assert_eq!(classify("SyntaxToken*", &d), C::NodeReference);
        assert_eq!(classify("SyntaxTokenList*", &d), C::NodeReference);
    }

    #[test]
    fn follows_the_dialect() {
        let d = Dialect {
            token_type: "Tok".into(),
            token_list_marker: "Toks".into(),
            node_list_marker: "List".into(),
            separated_list_marker: "SepList".into(),
            ..Dialect::default()
        };
        assert_eq!(classify("Tok", &d), C::Token);
        assert_eq!(classify("Toks*", &d), C::TokenList);
        assert_eq!(classify("List<X>*", &d), C::NodeList);
        assert_eq!(classify("SepList<X>*", &d), C::SeparatedNodeList);
        assert_eq!(classify("SyntaxToken", &d), C::NodeReference);
    }
}
