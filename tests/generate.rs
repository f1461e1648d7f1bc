use std::fs::read_to_string;

use nodegen::emit::Section;
use nodegen::template::PREAMBLE;
use nodegen::{Artifact, Dialect, Document, FieldCategory, classify, generate, generate_one, scan};

const EXPR_STATEMENT: &str =
    "struct ExprStatementSyntax : StatementSyntax { SyntaxToken expr; SyntaxToken semicolon; };";

fn fixture() -> String {
    read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/inputs/nodes.h")).unwrap()
}

fn document(documents: &[Document], artifact: Artifact) -> &str {
    &documents
        .iter()
        .find(|document| document.artifact == artifact)
        .unwrap()
        .text
}

fn arms(text: &str) -> usize {
    text.matches("case SyntaxKind::").count()
}

#[test]
fn fixture_schema() {
    let input = fixture();
    let dialect = Dialect::default();
    let schema = scan(&input, &dialect);

    let names: Vec<_> = schema.iter().map(|s| s.name).collect();
    assert_eq!(
        names,
        vec![
            "ArrayRankSpecifierSyntax",
            "ArrayTypeSyntax",
            "ImplicitArrayCreationExpressionSyntax",
            "InitializerExpressionSyntax",
            "BlockSyntax",
            "EmptyStatementSyntax",
            "ExprStatementSyntax",
        ]
    );

    let initializer = schema.get("InitializerExpressionSyntax").unwrap();
    assert_eq!(
        initializer.tags,
        vec![
            "ObjectInitializerExpression",
            "CollectionInitializerExpression",
            "ArrayInitializerExpression",
        ]
    );

    let array = schema.get("ImplicitArrayCreationExpressionSyntax").unwrap();
    let categories: Vec<_> = array
        .fields
        .iter()
        .map(|f| (f.name, classify(&f.raw_type, &dialect)))
        .collect();
    assert_eq!(
        categories,
        vec![
            ("newKeyword", FieldCategory::Token),
            ("openBracket", FieldCategory::Token),
            ("commas", FieldCategory::TokenList),
            ("closeBracket", FieldCategory::Token),
            ("initializer", FieldCategory::NodeReference),
        ]
    );

    let block = schema.get("BlockSyntax").unwrap();
    assert_eq!(block.fields.len(), 3);
    assert!(schema.get("EmptyStatementSyntax").unwrap().fields.is_empty());
}

#[test]
fn every_field_is_classified() {
    let input = fixture();
    let dialect = Dialect::default();
    let schema = scan(&input, &dialect);

    let mut seen = Vec::new();
    for s in &schema {
        assert!(!s.tags.is_empty(), "{} has no tag", s.name);
        for field in &s.fields {
            let category = classify(&field.raw_type, &dialect);
            assert!(FieldCategory::ALL.contains(&category));
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
    }
    // the fixture uses every category
    assert_eq!(seen.len(), FieldCategory::ALL.len(), "{seen:?}");
}

#[test]
fn generation_is_deterministic() {
    let input = fixture();
    let dialect = Dialect::default();
    assert_eq!(generate(&input, &dialect), generate(&input, &dialect));
}

#[test]
fn one_document_per_artifact() {
    let documents = generate(&fixture(), &Dialect::default());
    let artifacts: Vec<_> = documents.iter().map(|d| d.artifact).collect();
    assert_eq!(artifacts, Artifact::ALL.to_vec());

    for document in &documents {
        assert!(document.text.starts_with(PREAMBLE), "{}", document.artifact);
        assert!(!document.text.contains("__"), "{}", document.artifact);
        assert!(document.text.ends_with("}\n"), "{}", document.artifact);
    }
}

#[test]
fn equality_guards_precede_dispatch() {
    let documents = generate(&fixture(), &Dialect::default());
    let equality = document(&documents, Artifact::Equality);

    // position of `guard`, checking the statement right after it
    fn guarded(text: &str, guard: &str, then: &str) -> usize {
        let at = text.find(guard).unwrap();
        let body = text[at + guard.len()..].trim_start();
        assert!(body.starts_with(then), "`{guard}` is not followed by `{then}`");
        at
    }

    let both_null = guarded(equality, "if(a == nullptr && b == nullptr) {", "return true;");
    let one_null = guarded(equality, "if(a == nullptr || b == nullptr) {", "return false;");
    let kinds = guarded(equality, "if(a->GetKind() != b->GetKind()) {", "return false;");
    let dispatch = equality.find("switch(a->GetKind()) {").unwrap();
    let first_arm = equality.find("case SyntaxKind::").unwrap();

    assert!(both_null < one_null);
    assert!(one_null < kinds);
    assert!(kinds < dispatch);
    assert!(dispatch < first_arm);
}

#[test]
fn abstract_declarations_are_absent_everywhere() {
    let documents = generate(&fixture(), &Dialect::default());
    for document in &documents {
        let text = &document.text;
        assert!(!text.contains("MemberAccessExpression"), "{}", document.artifact);
        assert!(!text.contains("case SyntaxKind::Expression:"), "{}", document.artifact);
        assert!(!text.contains("struct ExpressionSyntaxBuilder"), "{}", document.artifact);
    }
}

#[test]
fn arm_counts_follow_tags() {
    let documents = generate(&fixture(), &Dialect::default());

    // 7 structs, 9 tags, one struct without fields
    assert_eq!(arms(document(&documents, Artifact::Equality)), 7);
    assert_eq!(arms(document(&documents, Artifact::Printer)), 9);
    assert_eq!(arms(document(&documents, Artifact::Toucher)), 8);
    assert_eq!(arms(document(&documents, Artifact::TokenBoundary)), 18);

    let builders = document(&documents, Artifact::Builders);
    assert_eq!(builders.matches("inline SyntaxBase* Build() override {").count(), 7);
    assert_eq!(builders.matches("retn->allocator = allocator;").count(), 7);
}

#[test]
fn factories_live_in_the_builder_struct() {
    let documents = generate(&fixture(), &Dialect::default());
    let builders = document(&documents, Artifact::Builders);

    let api = builders.find("    struct Builder : BuilderBase {").unwrap();
    let last_node_builder = builders.rfind("struct ExprStatementSyntaxBuilder").unwrap();
    let first_factory = builders.find("inline ArrayRankSpecifierSyntaxBuilder* ArrayRankSpecifierSyntax() {").unwrap();
    assert!(last_node_builder < api);
    assert!(api < first_factory);
}

#[test]
fn sections_render_at_their_depth() {
    let documents = generate(&fixture(), &Dialect::default());
    let builders = document(&documents, Artifact::Builders);
    assert!(builders.contains("\n    struct BlockSyntaxBuilder : StatementSyntaxBuilder {\n"));
    assert!(builders.contains("\n        inline BlockSyntaxBuilder* BlockSyntax() {\n"));

    let boundary = document(&documents, Artifact::TokenBoundary);
    assert!(boundary.contains("\n            case SyntaxKind::Block: {\n"));
    assert_eq!(Section::Cases.depth(), 3);
}

#[test]
fn expr_statement_end_to_end() {
    let dialect = Dialect::default();
    let schema = scan(EXPR_STATEMENT, &dialect);
    insta::assert_snapshot!(
        "expr_statement_schema",
        format!("SOURCE\n{EXPR_STATEMENT}\n\nSCHEMA\n{schema:#?}")
    );

    let builders = generate_one(&schema, Artifact::Builders, &dialect).text;
    assert!(builders.contains("inline ExprStatementSyntaxBuilder* Expr(SyntaxToken builder) {"));
    assert!(builders.contains("inline ExprStatementSyntaxBuilder* Semicolon(SyntaxToken builder) {"));

    let equality = generate_one(&schema, Artifact::Equality, &dialect).text;
    assert!(equality.contains("case SyntaxKind::ExprStatement: {"));
    assert!(equality.contains("if(!TokensEqual(pA->expr, pB->expr, options)) return false;"));
    assert!(equality.contains("if(!TokensEqual(pA->semicolon, pB->semicolon, options)) return false;"));

    let printer = generate_one(&schema, Artifact::Printer, &dialect).text;
    insta::assert_snapshot!(
        "expr_statement_printer",
        format!("SOURCE\n{EXPR_STATEMENT}\n\nOUTPUT\n{printer}")
    );
}
