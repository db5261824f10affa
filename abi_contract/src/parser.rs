//! abigen-style C header parser
//!
//! Accepts the subset of C that generated syscall headers use:
//!
//! ```text
//! extern <type> <name>(
//!     [ZX_SYSCALL_PARAM_ATTR(<tag>)] <type> <param>, ...) <attributes>;
//! ```
//!
//! where `<type>` is `[const] <ident> *...` and the attributes are any of
//! `__LEAF_FN`, `__CONST`, `__NO_RETURN` and `__NONNULL((i, ...))`.
//! Comments and preprocessor lines are skipped.

use crate::model::{CType, Declaration, FnAttribute, Param, ParamTag, Signature};
use std::iter::Peekable;
use std::str::Chars;
use thiserror::Error;

const PARAM_ATTR_MACRO: &str = "ZX_SYSCALL_PARAM_ATTR";
const NONNULL_MACRO: &str = "__NONNULL";

/// Linkage markers that may wrap a declaration list
const CDECL_MARKERS: [&str; 2] = ["__BEGIN_CDECLS", "__END_CDECLS"];

/// A parse failure with the 1-based line it happened on
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found `{found}`")]
    UnexpectedToken { expected: String, found: String },

    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: String },

    #[error("unknown function attribute `{0}`")]
    UnknownAttribute(String),

    #[error("unexpected character `{0}`")]
    UnexpectedCharacter(char),

    #[error("unterminated block comment")]
    UnterminatedComment,

    #[error("invalid parameter position `{0}`")]
    InvalidNumber(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TokenKind {
    Ident(String),
    Number(String),
    Punct(char),
}

impl TokenKind {
    fn describe(&self) -> String {
        match self {
            TokenKind::Ident(word) | TokenKind::Number(word) => word.clone(),
            TokenKind::Punct(c) => c.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
struct Token {
    kind: TokenKind,
    line: usize,
}

struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    at_line_start: bool,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            line: 1,
            at_line_start: true,
            tokens: Vec::new(),
        }
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            line: self.line,
            kind,
        }
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.at_line_start = true;
        }
        Some(c)
    }

    fn tokenize(mut self) -> Result<Vec<Token>, ParseError> {
        while let Some(&c) = self.chars.peek() {
            match c {
                '\n' => {
                    self.bump();
                }
                c if c.is_whitespace() => {
                    self.bump();
                }
                '#' if self.at_line_start => self.skip_directive(),
                '/' => self.skip_comment()?,
                c if c.is_ascii_alphabetic() || c == '_' => {
                    let word = self.take_while(|c| c.is_ascii_alphanumeric() || c == '_');
                    self.push(TokenKind::Ident(word));
                }
                c if c.is_ascii_digit() => {
                    let number = self.take_while(|c| c.is_ascii_alphanumeric());
                    self.push(TokenKind::Number(number));
                }
                '(' | ')' | ',' | ';' | '*' => {
                    self.bump();
                    self.push(TokenKind::Punct(c));
                }
                other => return Err(self.error(ParseErrorKind::UnexpectedCharacter(other))),
            }
        }
        Ok(self.tokens)
    }

    fn push(&mut self, kind: TokenKind) {
        self.at_line_start = false;
        self.tokens.push(Token {
            kind,
            line: self.line,
        });
    }

    fn take_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        let mut word = String::new();
        while let Some(&c) = self.chars.peek() {
            if !accept(c) {
                break;
            }
            word.push(c);
            self.bump();
        }
        word
    }

    /// Skips a preprocessor line, following backslash continuations
    fn skip_directive(&mut self) {
        let mut escaped = false;
        while let Some(c) = self.bump() {
            match c {
                '\n' if !escaped => return,
                '\n' => escaped = false,
                '\\' => escaped = true,
                c if !c.is_whitespace() => escaped = false,
                _ => {}
            }
        }
    }

    fn skip_comment(&mut self) -> Result<(), ParseError> {
        self.bump();
        match self.chars.peek() {
            Some('/') => {
                while let Some(c) = self.bump() {
                    if c == '\n' {
                        break;
                    }
                }
                Ok(())
            }
            Some('*') => {
                let start = self.line;
                self.bump();
                let mut star = false;
                while let Some(c) = self.bump() {
                    if star && c == '/' {
                        return Ok(());
                    }
                    star = c == '*';
                }
                Err(ParseError {
                    line: start,
                    kind: ParseErrorKind::UnterminatedComment,
                })
            }
            _ => Err(self.error(ParseErrorKind::UnexpectedCharacter('/'))),
        }
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind_at(&self, offset: usize) -> Option<&TokenKind> {
        self.tokens.get(self.pos + offset).map(|token| &token.kind)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn last_line(&self) -> usize {
        self.tokens.last().map(|token| token.line).unwrap_or(1)
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError {
                line: token.line,
                kind: ParseErrorKind::UnexpectedToken {
                    expected: expected.to_string(),
                    found: token.kind.describe(),
                },
            },
            None => ParseError {
                line: self.last_line(),
                kind: ParseErrorKind::UnexpectedEof {
                    expected: expected.to_string(),
                },
            },
        }
    }

    fn ident(&mut self, expected: &str) -> Result<(String, usize), ParseError> {
        match self.peek() {
            Some(Token {
                kind: TokenKind::Ident(word),
                line,
            }) => {
                let found = (word.clone(), *line);
                self.pos += 1;
                Ok(found)
            }
            _ => Err(self.unexpected(expected)),
        }
    }

    fn punct(&mut self, c: char) -> Result<(), ParseError> {
        match self.peek() {
            Some(Token {
                kind: TokenKind::Punct(found),
                ..
            }) if *found == c => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(self.unexpected(&format!("`{}`", c))),
        }
    }

    fn eat_punct(&mut self, c: char) -> bool {
        if self.peek_kind_at(0) == Some(&TokenKind::Punct(c)) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn is_ident(&self, offset: usize, word: &str) -> bool {
        matches!(self.peek_kind_at(offset), Some(TokenKind::Ident(found)) if found == word)
    }

    fn declaration(&mut self) -> Result<Declaration, ParseError> {
        let (_, line) = self.ident("`extern`")?;
        let ret = self.ctype()?;
        let (name, _) = self.ident("syscall name")?;
        self.punct('(')?;
        let params = self.params()?;
        self.punct(')')?;

        let mut signature = Signature::new(name, ret);
        signature.params = params;
        self.attributes(&mut signature)?;

        Ok(Declaration { signature, line })
    }

    fn ctype(&mut self) -> Result<CType, ParseError> {
        let is_const = if self.is_ident(0, "const") {
            self.pos += 1;
            true
        } else {
            false
        };
        let (base, _) = self.ident("type name")?;
        let mut ty = CType::value(base);
        ty.is_const = is_const;
        while self.eat_punct('*') {
            ty.pointer_depth += 1;
        }
        Ok(ty)
    }

    fn params(&mut self) -> Result<Vec<Param>, ParseError> {
        if self.is_ident(0, "void") && self.peek_kind_at(1) == Some(&TokenKind::Punct(')')) {
            self.pos += 1;
            return Ok(Vec::new());
        }

        let mut params = vec![self.param()?];
        while self.eat_punct(',') {
            params.push(self.param()?);
        }
        Ok(params)
    }

    fn param(&mut self) -> Result<Param, ParseError> {
        let mut tags = Vec::new();
        while self.is_ident(0, PARAM_ATTR_MACRO) {
            self.pos += 1;
            self.punct('(')?;
            let (tag, _) = self.ident("parameter tag")?;
            self.punct(')')?;
            tags.push(ParamTag::from_name(&tag));
        }

        let ty = self.ctype()?;
        let (name, _) = self.ident("parameter name")?;
        Ok(Param { name, ty, tags })
    }

    fn attributes(&mut self, signature: &mut Signature) -> Result<(), ParseError> {
        loop {
            if self.eat_punct(';') {
                return Ok(());
            }
            let (word, line) = self.ident("function attribute or `;`")?;
            if word == NONNULL_MACRO {
                self.punct('(')?;
                self.punct('(')?;
                loop {
                    signature.nonnull.push(self.position()?);
                    if !self.eat_punct(',') {
                        break;
                    }
                }
                self.punct(')')?;
                self.punct(')')?;
            } else {
                let attr = FnAttribute::from_c_name(&word).ok_or(ParseError {
                    line,
                    kind: ParseErrorKind::UnknownAttribute(word.clone()),
                })?;
                if !signature.attrs.contains(&attr) {
                    signature.attrs.push(attr);
                }
            }
        }
    }

    fn position(&mut self) -> Result<usize, ParseError> {
        match self.peek() {
            Some(Token {
                kind: TokenKind::Number(digits),
                line,
            }) => {
                let position = digits.parse().map_err(|_| ParseError {
                    line: *line,
                    kind: ParseErrorKind::InvalidNumber(digits.clone()),
                })?;
                self.pos += 1;
                Ok(position)
            }
            _ => Err(self.unexpected("parameter position")),
        }
    }
}

/// Parses every syscall declaration in a header
pub fn parse_header(source: &str) -> Result<Vec<Declaration>, ParseError> {
    let tokens = Lexer::new(source).tokenize()?;
    let mut parser = Parser { tokens, pos: 0 };
    let mut declarations = Vec::new();

    while let Some(token) = parser.peek() {
        match &token.kind {
            TokenKind::Ident(word) if word == "extern" => {
                declarations.push(parser.declaration()?);
            }
            TokenKind::Ident(word) if CDECL_MARKERS.contains(&word.as_str()) => {
                parser.next();
            }
            _ => return Err(parser.unexpected("`extern`")),
        }
    }

    log::debug!("parsed {} syscall declarations", declarations.len());
    Ok(declarations)
}
