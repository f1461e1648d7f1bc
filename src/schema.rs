use rustc_hash::FxHashMap;
use std::borrow::Cow;

/// One concrete syntax tree node type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructSchema<'a> {
    pub name: &'a str,

    /// Immediate parent node type. Always present for scanned structs.
    pub base_type: Option<&'a str>,

    /// Declaration order is traversal and print order.
    pub fields: Vec<FieldSchema<'a>>,

    /// Tags the node is dispatched under. Never empty; the first one is the
    /// primary tag.
    pub tags: Vec<&'a str>,
}

impl<'a> StructSchema<'a> {
    /// The tag builders stamp into new nodes and equality dispatches on.
    #[inline]
    pub fn primary_tag(&self) -> &'a str {
        self.tags[0]
    }

    #[inline]
    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema<'a> {
    pub name: &'a str,

    /// Declared type with all whitespace removed.
    pub raw_type: Cow<'a, str>,
}

impl<'a> FieldSchema<'a> {
    /// Builds a field from its declared type text, dropping whitespace.
    pub fn new(name: &'a str, declared_type: &'a str) -> Self {
        let raw_type = if declared_type.contains(char::is_whitespace) {
            Cow::Owned(
                declared_type
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .collect(),
            )
        } else {
            Cow::Borrowed(declared_type)
        };
        Self { name, raw_type }
    }
}

/// Structs in the order they were declared.
#[derive(Default, Clone)]
pub struct Schema<'a> {
    by_name: FxHashMap<&'a str, usize>,
    structs: Vec<StructSchema<'a>>,
}

impl<'a> Schema<'a> {
    /// Appends a struct. Duplicate names are kept; lookups by name resolve
    /// to the first one.
    pub fn push(&mut self, schema: StructSchema<'a>) {
        let index = self.structs.len();
        if self.by_name.contains_key(schema.name) {
            tracing::warn!(name = schema.name, "duplicate struct name");
        } else {
            self.by_name.insert(schema.name, index);
        }
        self.structs.push(schema);
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&StructSchema<'a>> {
        self.by_name.get(name).map(|&index| &self.structs[index])
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, StructSchema<'a>> {
        self.structs.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.structs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.structs.is_empty()
    }
}

impl<'s, 'a> IntoIterator for &'s Schema<'a> {
    type Item = &'s StructSchema<'a>;
    type IntoIter = std::slice::Iter<'s, StructSchema<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for Schema<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.structs).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node<'a>(name: &'a str, tag: &'a str) -> StructSchema<'a> {
        StructSchema {
            name,
            base_type: Some("ExpressionSyntax"),
            fields: vec![],
            tags: vec![tag],
        }
    }

    #[test]
    fn raw_type_drops_whitespace() {
        let field = FieldSchema::new("ranks", "SeparatedSyntaxList < ExpressionSyntax > *");
        assert_eq!(field.raw_type, "SeparatedSyntaxList<ExpressionSyntax>*");
        assert!(matches!(
            FieldSchema::new("a", "SyntaxToken").raw_type,
            Cow::Borrowed("SyntaxToken")
        ));
    }

    #[test]
    fn duplicates_resolve_to_first() {
        let mut schema = Schema::default();
        schema.push(node("A", "First"));
        schema.push(node("B", "B"));
        schema.push(node("A", "Second"));

        assert_eq!(schema.len(), 3);
        assert_eq!(schema.get("A").map(|s| s.primary_tag()), Some("First"));
        assert!(schema.get("C").is_none());
        assert_eq!(
            schema.iter().map(|s| s.primary_tag()).collect::<Vec<_>>(),
            vec!["First", "B", "Second"]
        );
    }
}
