//! Schema scanner.
//!
//! A single forward pass over the cleaned lines, driven by an explicit
//! [`State`]. Blank lines never reach the state machine. Input that doesn't
//! fit the header dialect is skipped rather than reported: an unterminated
//! struct body simply never makes it into the [`Schema`].

use crate::dialect::Dialect;
use crate::preprocess;
use crate::schema::{FieldSchema, Schema, StructSchema};
use crate::token::{TokenKind as T, Tokens, tokenize};

/// Scans `src` into a schema of every concrete struct it declares.
pub fn scan<'a>(src: &'a str, dialect: &Dialect) -> Schema<'a> {
    let lines = preprocess::clean_lines(src);
    let mut scanner = Scanner::new(dialect);
    for line in LineCursor::new(&lines) {
        scanner.feed(line);
    }
    scanner.finish()
}

/// Pull-based cursor over the non-blank lines of a cleaned document.
pub struct LineCursor<'l, 'a> {
    lines: &'l [&'a str],
    index: usize,
}

impl<'l, 'a> LineCursor<'l, 'a> {
    pub fn new(lines: &'l [&'a str]) -> Self {
        Self { lines, index: 0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number in the input.
    pub number: usize,
    pub text: &'a str,
}

impl<'a> Iterator for LineCursor<'_, 'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&text) = self.lines.get(self.index) {
            self.index += 1;
            if !text.is_empty() {
                return Some(Line {
                    number: self.index,
                    text,
                });
            }
        }
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State<'a> {
    /// Looking for the next struct header.
    Scanning,
    /// The previous line was a lone abstract marker.
    InAbstractGuard,
    /// Inside a struct body.
    CollectingFields(Pending<'a>),
    /// Inside an explicit tag block of a struct body.
    CollectingTags(Pending<'a>),
}

/// A struct whose body is still being scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pending<'a> {
    pub schema: StructSchema<'a>,
    /// Set once a tag block was opened, even if it turns out empty.
    pub explicit_tags: bool,
    /// Line of the struct header.
    pub line: usize,
}

impl<'a> Pending<'a> {
    fn new(name: &'a str, base_type: &'a str, line: usize) -> Self {
        Self {
            schema: StructSchema {
                name,
                base_type: Some(base_type),
                fields: Vec::new(),
                tags: Vec::new(),
            },
            explicit_tags: false,
            line,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    pub name: &'a str,
    pub base_type: Option<&'a str>,
    /// Whatever follows the opening `{` on the header line. Empty for the
    /// usual one-header-per-line layout and for `;` headers.
    pub rest: &'a str,
}

pub struct Scanner<'d, 'a> {
    dialect: &'d Dialect,
    state: State<'a>,
    schema: Schema<'a>,
}

impl<'d, 'a> Scanner<'d, 'a> {
    pub fn new(dialect: &'d Dialect) -> Self {
        Self {
            dialect,
            state: State::Scanning,
            schema: Schema::default(),
        }
    }

    #[inline]
    pub fn state(&self) -> &State<'a> {
        &self.state
    }

    /// Advances the state machine by one non-blank line.
    pub fn feed(&mut self, line: Line<'a>) {
        let state = std::mem::replace(&mut self.state, State::Scanning);
        self.state = self.step(state, line);
    }

    /// Ends the scan. A struct still being collected is unterminated and
    /// gets dropped.
    pub fn finish(self) -> Schema<'a> {
        if let State::CollectingFields(pending) | State::CollectingTags(pending) = &self.state {
            tracing::debug!(
                name = pending.schema.name,
                line = pending.line,
                "unterminated struct body, skipping"
            );
        }
        self.schema
    }

    fn step(&mut self, state: State<'a>, line: Line<'a>) -> State<'a> {
        match state {
            State::Scanning => self.scanning(line),
            State::InAbstractGuard => {
                // another marker re-arms the guard instead of being consumed by it
                if tokenize(line.text).starts_with_ident(&self.dialect.abstract_marker) {
                    return self.scanning(line);
                }
                tracing::debug!(line = line.number, text = line.text, "skipped abstract declaration");
                State::Scanning
            }
            State::CollectingFields(pending) => self.collecting_fields(pending, line),
            State::CollectingTags(pending) => self.collecting_tags(pending, line),
        }
    }

    fn scanning(&mut self, line: Line<'a>) -> State<'a> {
        let tokens = tokenize(line.text);

        if tokens.starts_with_ident(&self.dialect.abstract_marker) {
            if tokens.len() == 1 {
                return State::InAbstractGuard;
            }
            if let Some(header) = struct_header(&tokens) {
                tracing::debug!(name = header.name, line = line.number, "skipped abstract declaration");
            }
            return State::Scanning;
        }

        match struct_header(&tokens) {
            Some(Header {
                name,
                base_type: Some(base_type),
                rest,
            }) => {
                // a body written on the header line is fed statement by statement
                let mut state = State::CollectingFields(Pending::new(name, base_type, line.number));
                for text in statements(rest) {
                    state = self.step(
                        state,
                        Line {
                            number: line.number,
                            text,
                        },
                    );
                }
                state
            }
            _ => State::Scanning,
        }
    }

    fn collecting_fields(&mut self, mut pending: Pending<'a>, line: Line<'a>) -> State<'a> {
        let dialect = self.dialect;
        let tokens = tokenize(line.text);

        if tokens.starts_with_ident(&dialect.tag_list_marker) {
            pending.explicit_tags = true;
            return State::CollectingTags(pending);
        }

        let is_constructor = tokens.starts_with_ident(pending.schema.name)
            || tokens.starts_with_ident(&dialect.constructor_marker);
        if (is_constructor && tokens.contains(T::ParenL))
            || line.text.starts_with(dialect.close_marker.as_str())
        {
            self.emit(pending);
            return State::Scanning;
        }

        if let Some(field) = field_line(&tokens) {
            pending.schema.fields.push(field);
        }

        State::CollectingFields(pending)
    }

    fn collecting_tags(&mut self, mut pending: Pending<'a>, line: Line<'a>) -> State<'a> {
        let dialect = self.dialect;

        if let Some(entry) = dialect.strip_tag_qualifier(line.text) {
            let tag = match entry.find(dialect.tag_separator) {
                Some(end) => &entry[..end],
                None => entry,
            };
            let tag = tag.trim();
            if !tag.is_empty() {
                pending.schema.tags.push(tag);
            }
            return State::CollectingTags(pending);
        }

        if line.text.starts_with(dialect.close_marker.as_str()) {
            return State::CollectingFields(pending);
        }

        State::CollectingTags(pending)
    }

    fn emit(&mut self, pending: Pending<'a>) {
        let Pending {
            mut schema,
            explicit_tags,
            line,
        } = pending;

        if schema.tags.is_empty() {
            if explicit_tags {
                tracing::warn!(
                    name = schema.name,
                    line,
                    "tag block has no entries, using the default tag"
                );
            }
            schema.tags.push(self.dialect.default_tag(schema.name));
        }

        tracing::debug!(
            name = schema.name,
            base = schema.base_type,
            fields = schema.fields.len(),
            tags = ?schema.tags,
            "scanned struct"
        );
        if !schema.has_fields() {
            tracing::debug!(name = schema.name, "struct has no fields");
        }

        self.schema.push(schema);
    }
}

/// Finds the leftmost `struct <Name> [: <Base>] {` or `;` on the line.
pub fn struct_header<'a>(tokens: &Tokens<'a>) -> Option<Header<'a>> {
    (0..tokens.len()).find_map(|i| struct_header_at(tokens, i))
}

fn struct_header_at<'a>(tokens: &Tokens<'a>, i: usize) -> Option<Header<'a>> {
    if tokens.kind(i) != T::Struct || tokens.kind(i + 1) != T::Ident {
        return None;
    }
    let name = tokens.lexeme(i + 1);

    let (base_type, terminator) = match (tokens.kind(i + 2), tokens.kind(i + 3), tokens.kind(i + 4)) {
        (T::Colon, T::Ident, T::BraceL | T::Semi) => (Some(tokens.lexeme(i + 3)), i + 4),
        (T::BraceL | T::Semi, _, _) => (None, i + 2),
        _ => return None,
    };

    let rest = match tokens.kind(terminator) {
        T::BraceL => tokens.src()[tokens.end(terminator)..].trim(),
        _ => "",
    };

    Some(Header {
        name,
        base_type,
        rest,
    })
}

/// Splits text into `;`-terminated statements, keeping the `;`.
fn statements(text: &str) -> impl Iterator<Item = &str> {
    text.split_inclusive(';')
        .map(str::trim)
        .filter(|statement| !statement.is_empty())
}

/// `<type tokens> <identifier>;`
///
/// Lines with parentheses are method declarations, not fields.
pub fn field_line<'a>(tokens: &Tokens<'a>) -> Option<FieldSchema<'a>> {
    let n = tokens.len();
    if n < 3
        || tokens.last() != T::Semi
        || tokens.kind(n - 2) != T::Ident
        || tokens.contains(T::ParenL)
    {
        return None;
    }

    let name = tokens.lexeme(n - 2);
    let declared_type = tokens.src()[..tokens.start(n - 2)].trim();
    Some(FieldSchema::new(name, declared_type))
}
