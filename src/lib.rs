//! Generates the repetitive parts of a syntax tree implementation from the
//! hand-written node header: builders, structural equality, the node printer,
//! skipped-token touching and first/last token lookup.
//!
//! The pipeline is split in two phases. [`scan`] runs once and produces an
//! immutable [`Schema`]; every [`Artifact`] is then emitted from that same
//! schema by its own emitter and assembled into one [`Document`].

pub mod dialect;
pub mod emit;
pub mod field;
pub mod fmt;
pub mod preprocess;
pub mod schema;
pub mod scan;
pub mod template;
pub mod token;

pub use dialect::Dialect;
pub use emit::{Artifact, Fragment, Section};
pub use field::{FieldCategory, classify};
pub use schema::{FieldSchema, Schema, StructSchema};
pub use scan::scan;

/// One generated output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub artifact: Artifact,
    pub text: String,
}

impl Document {
    #[inline]
    pub fn file_name(&self) -> &'static str {
        self.artifact.file_name()
    }
}

/// Scans `src` and emits every artifact, in [`Artifact::ALL`] order.
pub fn generate(src: &str, dialect: &Dialect) -> Vec<Document> {
    let schema = scan(src, dialect);
    Artifact::ALL
        .iter()
        .map(|&artifact| generate_one(&schema, artifact, dialect))
        .collect()
}

/// Emits a single artifact from an already scanned schema.
pub fn generate_one(schema: &Schema<'_>, artifact: Artifact, dialect: &Dialect) -> Document {
    let fragments = artifact.emit(schema, dialect);
    Document {
        artifact,
        text: template::assemble(artifact, &fragments),
    }
}
