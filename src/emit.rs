//! Per-struct code fragments.
//!
//! Emitters never indent. They describe each fragment as a [`Block`] of lines
//! with a depth relative to the fragment itself, and [`crate::template`]
//! places the fragment at its section's depth.

use crate::dialect::Dialect;
use crate::field::{FieldCategory, classify};
use crate::fmt::SeparatedBy as _;
use crate::schema::{FieldSchema, Schema};

macro_rules! ln {
    ($b:ident, $($tt:tt)*) => ($b.line(format!($($tt)*)));
}

macro_rules! open {
    ($b:ident, $($tt:tt)*) => ($b.open(format!($($tt)*)));
}

pub mod boundary;
pub mod builder;
pub mod equality;
pub mod printer;
pub mod toucher;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Artifact {
    Builders,
    Equality,
    Printer,
    Toucher,
    TokenBoundary,
}

impl Artifact {
    pub const ALL: [Artifact; 5] = [
        Artifact::Builders,
        Artifact::Equality,
        Artifact::Printer,
        Artifact::Toucher,
        Artifact::TokenBoundary,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Artifact::Builders => "Builders.generated.h",
            Artifact::Equality => "NodeEquality.generated.cpp",
            Artifact::Printer => "NodePrinter.generated.cpp",
            Artifact::Toucher => "FindSkippedTokens.generated.cpp",
            Artifact::TokenBoundary => "GetFirstToken.generated.cpp",
        }
    }

    /// Sections of the artifact's document, in document order.
    pub fn sections(self) -> &'static [Section] {
        match self {
            Artifact::Builders => &[Section::NodeBuilders, Section::BuilderApi],
            Artifact::Equality | Artifact::Printer | Artifact::Toucher => &[Section::Cases],
            Artifact::TokenBoundary => &[Section::FirstToken, Section::LastToken],
        }
    }

    /// Runs the artifact's emitter over the whole schema.
    pub fn emit<'s>(self, schema: &'s Schema<'_>, dialect: &Dialect) -> Vec<Fragment<'s>> {
        match self {
            Artifact::Builders => builder::emit(schema, dialect),
            Artifact::Equality => equality::emit(schema, dialect),
            Artifact::Printer => printer::emit(schema, dialect),
            Artifact::Toucher => toucher::emit(schema, dialect),
            Artifact::TokenBoundary => boundary::emit(schema, dialect),
        }
    }
}

impl std::fmt::Display for Artifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Artifact::Builders => "builders",
            Artifact::Equality => "equality",
            Artifact::Printer => "printer",
            Artifact::Toucher => "toucher",
            Artifact::TokenBoundary => "token-boundary",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Artifact {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Artifact::ALL
            .into_iter()
            .find(|artifact| artifact.to_string() == s)
            .ok_or_else(|| {
                format!(
                    "unknown artifact `{s}`, expected one of: {}",
                    Artifact::ALL.iter().separated_by(", ")
                )
            })
    }
}

/// Where a fragment goes in its artifact's document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// One builder type per struct.
    NodeBuilders,
    /// Factory methods of the `Builder` struct.
    BuilderApi,
    /// Case arms of the artifact's single switch.
    Cases,
    /// Case arms of `GetFirstToken`.
    FirstToken,
    /// Case arms of `GetLastToken`.
    LastToken,
}

impl Section {
    /// Indentation depth the section's fragments are rendered at.
    pub fn depth(self) -> usize {
        match self {
            Section::NodeBuilders => 1,
            Section::BuilderApi => 2,
            Section::Cases | Section::FirstToken | Section::LastToken => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment<'s> {
    pub artifact: Artifact,
    pub section: Section,
    pub struct_name: &'s str,
    /// The tag a case arm dispatches on. `None` for builder fragments.
    pub tag: Option<&'s str>,
    pub body: Block,
}

/// Lines of code with relative indentation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Block {
    lines: Vec<Line>,
    depth: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Line {
    depth: usize,
    /// Empty for a blank line.
    text: String,
}

pub const INDENT: &str = "    ";

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, text: impl Into<String>) {
        self.lines.push(Line {
            depth: self.depth,
            text: text.into(),
        });
    }

    pub fn blank(&mut self) {
        self.line(String::new());
    }

    /// Writes `text` and indents the lines after it.
    pub fn open(&mut self, text: impl Into<String>) {
        self.line(text);
        self.depth += 1;
    }

    /// Dedents and writes `text`.
    pub fn close(&mut self, text: impl Into<String>) {
        self.depth = self.depth.saturating_sub(1);
        self.line(text);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line texts without indentation.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(|line| line.text.as_str())
    }

    /// Displays every line at `base` plus its own depth, each ending in `\n`.
    #[inline]
    pub fn at(&self, base: usize) -> Indented<'_> {
        Indented { block: self, base }
    }
}

pub struct Indented<'b> {
    block: &'b Block,
    base: usize,
}

impl std::fmt::Display for Indented<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.block.lines {
            if !line.text.is_empty() {
                for _ in 0..self.base + line.depth {
                    f.write_str(INDENT)?;
                }
                f.write_str(&line.text)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Opens a `case <Enum>::<Tag>: {` arm.
fn open_case(b: &mut Block, dialect: &Dialect, tag: &str) {
    open!(b, "case {}::{tag}: {{", dialect.tag_enum);
}

/// `S* binding = (S*)node;`
fn cast(b: &mut Block, struct_name: &str, binding: &str, node: &str) {
    ln!(b, "{struct_name}* {binding} = ({struct_name}*){node};");
}

/// Expression for `p->field`, cast to the untyped list view when the
/// category needs it.
fn member(dialect: &Dialect, object: &str, field: &FieldSchema<'_>, category: FieldCategory) -> String {
    let name = field.name;
    match category {
        FieldCategory::NodeList => format!(
            "({}*){object}->{name}",
            dialect.untyped(&dialect.node_list_marker)
        ),
        FieldCategory::SeparatedNodeList => format!(
            "({}*){object}->{name}",
            dialect.untyped(&dialect.separated_list_marker)
        ),
        FieldCategory::Token | FieldCategory::TokenList | FieldCategory::NodeReference => {
            format!("{object}->{name}")
        }
    }
}

/// Fields paired with their category, in declaration order.
fn classified<'f, 'a>(
    fields: &'f [FieldSchema<'a>],
    dialect: &'f Dialect,
) -> impl DoubleEndedIterator<Item = (&'f FieldSchema<'a>, FieldCategory)> {
    fields
        .iter()
        .map(move |field| (field, classify(&field.raw_type, dialect)))
}
