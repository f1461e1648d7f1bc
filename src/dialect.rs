//! Naming conventions of the node header dialect.
//!
//! Scanning, classification and every emitter read their names from the same
//! [`Dialect`], so renaming a convention changes all artifacts together.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialect {
    /// Marks a declaration as abstract, either alone on the line before it
    /// or in front of the declaration itself.
    pub abstract_marker: String,

    /// Constructor prefix which ends the field region.
    pub constructor_marker: String,

    /// Line prefix which closes a struct body or a tag block.
    pub close_marker: String,

    /// Opens an explicit discriminant tag block.
    pub tag_list_marker: String,

    /// Name of the discriminant enum. Tag entries are written as
    /// `<tag_enum>::<Tag>`.
    pub tag_enum: String,

    /// Separates entries in a tag block.
    pub tag_separator: char,

    /// Stripped from a struct name to derive its default tag.
    pub name_suffix: String,

    /// Exact type name of a single token field.
    pub token_type: String,

    /// Type prefix of token sequence fields.
    pub token_list_marker: String,

    /// Type prefix of homogeneous node list fields.
    pub node_list_marker: String,

    /// Type prefix of separated node list fields.
    pub separated_list_marker: String,

    /// Type every node derives from.
    pub root_type: String,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            abstract_marker: "abstract".into(),
            constructor_marker: "explicit".into(),
            close_marker: "};".into(),
            tag_list_marker: "VALID_SYNTAX_KINDS".into(),
            tag_enum: "SyntaxKind".into(),
            tag_separator: ',',
            name_suffix: "Syntax".into(),
            token_type: "SyntaxToken".into(),
            token_list_marker: "TokenList".into(),
            node_list_marker: "SyntaxList".into(),
            separated_list_marker: "SeparatedSyntaxList".into(),
            root_type: "SyntaxBase".into(),
        }
    }
}

impl Dialect {
    /// The tag a struct is dispatched under when it has no tag block:
    /// its name without the naming suffix.
    pub fn default_tag<'a>(&self, struct_name: &'a str) -> &'a str {
        struct_name
            .strip_suffix(self.name_suffix.as_str())
            .unwrap_or(struct_name)
    }

    /// Strips the `<tag_enum>::` qualifier from a tag entry line.
    pub fn strip_tag_qualifier<'a>(&self, line: &'a str) -> Option<&'a str> {
        line.strip_prefix(self.tag_enum.as_str())?.strip_prefix("::")
    }

    /// Untyped view of a list type, used for casts in emitted code.
    pub fn untyped(&self, marker: &str) -> String {
        format!("{marker}Untyped")
    }
}
