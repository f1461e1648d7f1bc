use super::{TokenKind as T, tokenize};

#[test]
fn struct_header() {
    let tokens = tokenize("struct ExprStatementSyntax : StatementSyntax {");
    assert_eq!(
        tokens.kinds().collect::<Vec<_>>(),
        vec![T::Struct, T::Ident, T::Colon, T::Ident, T::BraceL]
    );
    assert_eq!(tokens.lexeme(1), "ExprStatementSyntax");
    assert_eq!(tokens.lexeme(3), "StatementSyntax");
    assert_eq!(tokens.kind(5), T::Eol);
}

#[test]
fn keyword_needs_whole_word() {
    let tokens = tokenize("structure x;");
    assert_eq!(tokens.first(), T::Ident);
    assert_eq!(tokens.lexeme(0), "structure");
}

#[test]
fn field_line_spans() {
    let line = "SeparatedSyntaxList<ExpressionSyntax>* ranks;";
    let tokens = tokenize(line);
    assert_eq!(tokens.last(), T::Semi);
    let ident = tokens.len() - 2;
    assert_eq!(tokens.kind(ident), T::Ident);
    assert_eq!(tokens.lexeme(ident), "ranks");
    assert_eq!(&line[..tokens.start(ident)], "SeparatedSyntaxList<ExpressionSyntax>* ");
}

#[test]
fn qualified_names_and_unknown_chars() {
    let tokens = tokenize("SyntaxKind::NotPattern ~ 0x1F");
    assert_eq!(
        tokens.kinds().collect::<Vec<_>>(),
        vec![T::Ident, T::ColonColon, T::Ident, T::Error, T::Number]
    );
    assert!(tokens.contains(T::Error));
    assert!(!tokens.contains(T::ParenL));
}

#[test]
fn empty_line() {
    let tokens = tokenize("");
    assert!(tokens.is_empty());
    assert_eq!(tokens.first(), T::Eol);
    assert_eq!(tokens.last(), T::Eol);
    assert_eq!(tokens.lexeme(0), "");
    assert!(!tokens.starts_with_ident("abstract"));
}

#[test]
fn debug_format() {
    let tokens = tokenize("abstract struct A");
    assert_eq!(
        format!("{tokens:?}"),
        r#"[Ident("abstract"), Struct("struct"), Ident("A")]"#
    );
}
