//! Document skeletons and fragment assembly.
//!
//! Each artifact has one fixed skeleton. A section's fragments are rendered
//! at the section's depth, separated by a blank line, and replace the
//! section's placeholder line.

use crate::emit::{Artifact, Fragment, Section};
use crate::fmt::SeparatedBy as _;
use indoc::indoc;

pub const PREAMBLE: &str = "// @generated by nodegen. Do not edit by hand.";

const BUILDERS: &str = indoc! {r#"
    // @generated by nodegen. Do not edit by hand.
    #include "./Builders.h"

    namespace Alchemy::Compilation {

    __NODE_BUILDERS__
        struct Builder : BuilderBase {

            explicit Builder(LinearAllocator * allocator) : BuilderBase((allocator)) {}

    __BUILDER_API__
        };

    }
"#};

const EQUALITY: &str = indoc! {r#"
    // @generated by nodegen. Do not edit by hand.
    #include "./NodeEquality.h"

    namespace Alchemy::Compilation {

        bool NodesEqual(SyntaxBase * a, SyntaxBase * b, NodeEqualityOptions options) {

            if(a == nullptr && b == nullptr) {
                return true;
            }

            if(a == nullptr || b == nullptr) {
                return false;
            }

            if(a->GetKind() != b->GetKind()) {
                return false;
            }

            switch(a->GetKind()) {
    __CASES__
                default: {
                    UNREACHABLE("NodesEqual");
                    return true;
                }

            }

        }

    }
"#};

const PRINTER: &str = indoc! {r#"
    // @generated by nodegen. Do not edit by hand.
    #include "../Src/Parsing3/NodePrinter.h"

    namespace Alchemy::Compilation {

        void NodePrinter::PrintNode(SyntaxBase* syntaxBase) {

            if (syntaxBase == nullptr) {
                PrintLine("nullptr");
                return;
            }

            switch (syntaxBase->GetKind()) {
    __CASES__
                default: {
                    break;
                }

            }
        }
    }
"#};

const TOUCHER: &str = indoc! {r#"
    // @generated by nodegen. Do not edit by hand.
    #include "../Src/Parsing3/FindSkippedTokens.h"

    namespace Alchemy::Compilation {

        void FindSkippedTokens::TouchNode(SyntaxBase * syntaxBase) {

            if(syntaxBase == nullptr) {
                return;
            }

            switch(syntaxBase->GetKind()) {
    __CASES__
                default: {
                    return;
                }

            }
        }

    }
"#};

const TOKEN_BOUNDARY: &str = indoc! {r#"
    // @generated by nodegen. Do not edit by hand.
    #include "../Src/Parsing3/SyntaxBase.h"
    #include "../Src/Parsing3/SyntaxNodes.h"

    namespace Alchemy::Compilation {

        SyntaxToken GetFirstToken(SyntaxBase * syntaxBase) {

            if(syntaxBase == nullptr) {
                return SyntaxToken();
            }

            switch(syntaxBase->GetKind()) {
    __FIRST_TOKEN_CASES__
                default: {
                    return SyntaxToken();
                }

            }

        }

        SyntaxToken GetLastToken(SyntaxBase * syntaxBase) {

            if(syntaxBase == nullptr) {
                return SyntaxToken();
            }

            switch(syntaxBase->GetKind()) {
    __LAST_TOKEN_CASES__
                default: {
                    return SyntaxToken();
                }

            }

        }

    }
"#};

pub fn skeleton(artifact: Artifact) -> &'static str {
    match artifact {
        Artifact::Builders => BUILDERS,
        Artifact::Equality => EQUALITY,
        Artifact::Printer => PRINTER,
        Artifact::Toucher => TOUCHER,
        Artifact::TokenBoundary => TOKEN_BOUNDARY,
    }
}

pub fn placeholder(section: Section) -> &'static str {
    match section {
        Section::NodeBuilders => "__NODE_BUILDERS__",
        Section::BuilderApi => "__BUILDER_API__",
        Section::Cases => "__CASES__",
        Section::FirstToken => "__FIRST_TOKEN_CASES__",
        Section::LastToken => "__LAST_TOKEN_CASES__",
    }
}

/// Substitutes the artifact's fragments into its skeleton.
///
/// Fragments keep their relative order within a section. Fragments of other
/// artifacts are ignored.
pub fn assemble(artifact: Artifact, fragments: &[Fragment<'_>]) -> String {
    let mut out = skeleton(artifact).to_owned();
    for &section in artifact.sections() {
        let depth = section.depth();
        let rendered = fragments
            .iter()
            .filter(|fragment| fragment.artifact == artifact && fragment.section == section)
            .map(|fragment| fragment.body.at(depth))
            .separated_by("\n")
            .to_string();
        out = out.replace(&format!("{}\n", placeholder(section)), &rendered);
    }
    out
}
