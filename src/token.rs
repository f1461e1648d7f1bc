//! Tokenizer for a single cleaned header line.
//!
//! The scanner recognizes struct headers and field lines on tokens instead of
//! raw text. Anything the header dialect doesn't care about (operators,
//! string literals, preprocessor noise) becomes [`TokenKind::Error`] and is
//! carried along instead of rejected.

use logos::Logos as _;

pub fn tokenize(line: &str) -> Tokens<'_> {
    let mut tokens = Tokens::new(line);
    for token in Lexer::new(line) {
        tokens.push(token);
    }
    tokens
}

pub struct Tokens<'src> {
    src: &'src str,
    tokens: Vec<Token>,
}

impl<'src> Tokens<'src> {
    fn new(src: &'src str) -> Self {
        Self {
            src,
            tokens: Vec::with_capacity(8),
        }
    }

    fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn src(&self) -> &'src str {
        self.src
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Kind of the token at `index`, or [`TokenKind::Eol`] past the end.
    #[inline]
    pub fn kind(&self, index: usize) -> TokenKind {
        match self.tokens.get(index) {
            Some(token) => token.kind,
            None => TokenKind::Eol,
        }
    }

    #[inline]
    pub fn lexeme(&self, index: usize) -> &'src str {
        match self.tokens.get(index) {
            Some(token) => &self.src[token.start..token.end],
            None => "",
        }
    }

    /// Byte offset at which the token at `index` starts.
    #[inline]
    pub fn start(&self, index: usize) -> usize {
        match self.tokens.get(index) {
            Some(token) => token.start,
            None => self.src.len(),
        }
    }

    /// Byte offset just past the token at `index`.
    #[inline]
    pub fn end(&self, index: usize) -> usize {
        match self.tokens.get(index) {
            Some(token) => token.end,
            None => self.src.len(),
        }
    }

    #[inline]
    pub fn first(&self) -> TokenKind {
        self.kind(0)
    }

    #[inline]
    pub fn last(&self) -> TokenKind {
        match self.len() {
            0 => TokenKind::Eol,
            n => self.kind(n - 1),
        }
    }

    /// Whether the first token is the identifier `ident`.
    #[inline]
    pub fn starts_with_ident(&self, ident: &str) -> bool {
        self.first() == TokenKind::Ident && self.lexeme(0) == ident
    }

    #[inline]
    pub fn contains(&self, kind: TokenKind) -> bool {
        self.tokens.iter().any(|token| token.kind == kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.tokens.iter().map(|token| token.kind)
    }
}

impl std::fmt::Debug for Tokens<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_list();
        for (i, token) in self.tokens.iter().enumerate() {
            list.entry(&DebugToken {
                kind: token.kind,
                lexeme: self.lexeme(i),
            });
        }
        list.finish()
    }
}

struct DebugToken<'src> {
    kind: TokenKind,
    lexeme: &'src str,
}

impl std::fmt::Debug for DebugToken<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.lexeme)
    }
}

#[derive(Clone, Copy)]
struct Token {
    kind: TokenKind,
    start: usize,
    end: usize,
}

struct Lexer<'src> {
    inner: logos::SpannedIter<'src, TokenKind>,
}

impl<'src> Lexer<'src> {
    fn new(src: &'src str) -> Self {
        Self {
            inner: TokenKind::lexer(src).spanned(),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let (kind, span) = self.inner.next()?;
        let kind = kind.unwrap_or(TokenKind::Error);
        Some(Token {
            kind,
            start: span.start,
            end: span.end,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, logos::Logos)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    #[token("struct")]
    Struct,

    #[token("::")]
    ColonColon,
    #[token(":")]
    Colon,
    #[token(";")]
    Semi,
    #[token(",")]
    Comma,
    #[token("{")]
    BraceL,
    #[token("}")]
    BraceR,
    #[token("(")]
    ParenL,
    #[token(")")]
    ParenR,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("*")]
    Star,
    #[token("&")]
    Amp,
    #[token("=")]
    Eq,

    #[regex(r"[a-zA-Z_][a-zA-Z_0-9]*")]
    Ident,
    #[regex(r"[0-9][0-9a-zA-Z_.']*")]
    Number,

    Error,
    /// Past the last token of the line.
    Eol,
}

#[cfg(test)]
mod tests;
